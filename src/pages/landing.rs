use log::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::assessment::modal::AssessmentModal;
use crate::components::theme_toggle::ThemeToggle;

const REVEAL_SELECTORS: &[&str] = &[
    ".hero-continuation",
    ".statistics-section",
    ".problem-section",
    ".solution-section",
    ".cta-section",
];

#[function_component(Landing)]
pub fn landing() -> Html {
    let show_assessment = use_state(|| false);

    // Scroll to top only on initial mount.
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    // Reveal sections as they scroll into view.
    use_effect_with_deps(
        move |_| {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();
            let window_for_cb = window.clone();

            let scroll_callback = Closure::wrap(Box::new(move || {
                let viewport = window_for_cb
                    .inner_height()
                    .ok()
                    .and_then(|height| height.as_f64())
                    .unwrap_or(0.0);
                for selector in REVEAL_SELECTORS {
                    if let Some(section) = document.query_selector(selector).ok().flatten() {
                        if section.get_bounding_client_rect().top() < viewport * 0.85 {
                            let _ = section.class_list().add_1("visible");
                        }
                    }
                }
            }) as Box<dyn FnMut()>);

            window
                .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                .unwrap();

            // Initial check for sections already in view.
            scroll_callback
                .as_ref()
                .unchecked_ref::<web_sys::js_sys::Function>()
                .call0(&JsValue::NULL)
                .unwrap();

            move || {
                window
                    .remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();
            }
        },
        (),
    );

    let open_assessment = {
        let show_assessment = show_assessment.clone();
        Callback::from(move |_| show_assessment.set(true))
    };
    let close_assessment = {
        let show_assessment = show_assessment.clone();
        Callback::from(move |_| show_assessment.set(false))
    };

    html! {
        <div class="landing-page">
            <style>
            {r#".landing-page section {
                padding: 6rem 2rem;
            }
            .landing-page .section-inner {
                max-width: 72rem;
                margin: 0 auto;
            }
            .reveal {
                opacity: 0;
                transform: translateY(2.5rem);
                transition: opacity 1s ease, transform 1s ease;
            }
            .reveal.visible {
                opacity: 1;
                transform: translateY(0);
            }
            .hero-section {
                min-height: 100vh;
                display: flex;
                align-items: center;
                padding-top: 12rem;
            }
            .hero-section h1 {
                font-size: clamp(2.5rem, 6vw, 4rem);
                font-weight: 300;
                letter-spacing: -0.02em;
                line-height: 1.0;
                margin: 0;
            }
            .hero-rule {
                display: flex;
                justify-content: center;
                padding: 3rem 0 2rem;
            }
            .hero-rule div {
                width: 1px;
                height: 10rem;
                background: var(--border);
            }
            .hero-continuation h2 {
                font-size: clamp(1.5rem, 3vw, 2rem);
                font-weight: 300;
                line-height: 1.3;
                margin: 0 0 2rem;
                color: var(--foreground);
                opacity: 0.85;
            }
            .hero-continuation .lede {
                max-width: 42rem;
                font-size: 1.1rem;
                font-weight: 300;
                line-height: 1.7;
                color: var(--muted-foreground);
            }
            .hero-continuation .emphasis {
                max-width: 36rem;
                font-size: 1.25rem;
                font-weight: 500;
                margin-top: 2rem;
            }
            .section-heading {
                font-size: clamp(1.8rem, 4vw, 2.5rem);
                font-weight: 300;
                letter-spacing: -0.01em;
                margin: 0 0 1.5rem;
            }
            .heading-rule {
                width: 4rem;
                height: 1px;
                background: var(--border);
                margin-bottom: 3rem;
            }
            .stat-grid {
                display: grid;
                grid-template-columns: repeat(4, 1fr);
                gap: 1rem;
            }
            .stat-card {
                border: 1px solid var(--border);
                border-radius: 12px;
                padding: 1.5rem;
                display: flex;
                flex-direction: column;
                justify-content: center;
                transition: transform 0.3s ease, background 0.3s ease;
            }
            .stat-card:hover {
                transform: scale(1.03);
                background: var(--secondary);
            }
            .stat-card.wide { grid-column: span 2; }
            .stat-card.hero { grid-column: span 2; grid-row: span 3; padding: 3rem; }
            .stat-kicker {
                font-size: 0.7rem;
                letter-spacing: 0.15em;
                text-transform: uppercase;
                color: var(--muted-foreground);
                margin-bottom: 1rem;
            }
            .stat-value {
                font-size: 2.2rem;
                font-weight: 300;
                color: var(--primary);
                letter-spacing: -0.02em;
            }
            .stat-card.hero .stat-value { font-size: 5.5rem; }
            .stat-card p {
                font-weight: 300;
                line-height: 1.6;
                color: var(--muted-foreground);
                margin: 0.75rem 0 0;
            }
            .problem-section { background: var(--secondary); }
            .problem-grid {
                display: grid;
                grid-template-columns: 1fr 1fr;
                gap: 5rem;
            }
            .problem-list { margin-top: 2.5rem; }
            .problem-item {
                display: flex;
                align-items: flex-start;
                gap: 1rem;
                margin-bottom: 1.5rem;
            }
            .problem-item .bullet {
                width: 0.5rem;
                height: 0.5rem;
                border-radius: 50%;
                background: var(--primary);
                opacity: 0.5;
                margin-top: 0.5rem;
                flex-shrink: 0;
            }
            .problem-item p { margin: 0; font-weight: 500; line-height: 1.6; }
            .muted-copy {
                font-size: 1.1rem;
                font-weight: 300;
                line-height: 1.7;
                color: var(--muted-foreground);
                margin: 0 0 1.5rem;
            }
            .strong-copy {
                font-size: 1.1rem;
                font-weight: 500;
                line-height: 1.7;
                margin: 0 0 1.5rem;
            }
            .aside-heading {
                font-size: 1.6rem;
                font-weight: 300;
                margin: 0 0 2rem;
            }
            .sound-familiar { font-style: italic; font-weight: 300; margin-top: 2rem; }
            .map-list { margin: 2rem 0 3rem; }
            .format-block {
                border-top: 1px solid var(--border);
                padding-top: 2rem;
            }
            .format-block p { margin: 0 0 0.5rem; font-weight: 500; }
            .cta-section { background: var(--secondary); padding-bottom: 8rem; }
            .cta-grid {
                display: grid;
                grid-template-columns: 1fr 1fr;
                gap: 0;
                position: relative;
            }
            .cta-column { padding: 0 3rem 0 0; }
            .cta-column.secondary {
                padding: 0 0 0 3rem;
                border-left: 1px solid var(--border);
            }
            .cta-column h2 {
                font-size: clamp(1.6rem, 3vw, 2.2rem);
                font-weight: 300;
                line-height: 1.25;
                margin: 0 0 1.5rem;
            }
            .cta-button {
                padding: 0.8rem 2rem;
                border: none;
                border-radius: 8px;
                background: var(--primary);
                color: var(--background);
                font-size: 1rem;
                font-weight: 300;
                cursor: pointer;
                margin-top: 1.5rem;
            }
            .cta-button.outline {
                background: none;
                border: 1px solid var(--border);
                color: var(--foreground);
            }
            .cta-button.outline:hover { border-color: var(--primary); }
            .confidentiality {
                border-top: 1px solid var(--border);
                margin-top: 3rem;
                padding-top: 3rem;
                text-align: center;
                font-size: 0.9rem;
                font-weight: 300;
                font-style: italic;
                color: var(--muted-foreground);
            }
            .request-form {
                max-width: 36rem;
                margin: 4rem auto 0;
                border: 1px solid var(--border);
                border-radius: 12px;
                padding: 2rem;
                background: var(--background);
            }
            .request-form h3 { font-size: 1.4rem; font-weight: 300; margin: 0 0 0.5rem; }
            .request-form .form-hint {
                color: var(--muted-foreground);
                font-weight: 300;
                margin: 0 0 1.5rem;
            }
            .form-field { margin-bottom: 1.25rem; }
            .form-field label {
                display: block;
                font-size: 0.9rem;
                margin-bottom: 0.4rem;
            }
            .form-field input {
                width: 100%;
                padding: 0.6rem 0.9rem;
                border: 1px solid var(--border);
                border-radius: 8px;
                background: var(--background);
                color: var(--foreground);
                font-size: 1rem;
            }
            .form-actions { display: flex; gap: 1rem; }
            @media (max-width: 900px) {
                .stat-grid { grid-template-columns: 1fr; }
                .stat-card.hero, .stat-card.wide { grid-column: span 1; grid-row: auto; }
                .problem-grid, .cta-grid { grid-template-columns: 1fr; }
                .cta-column, .cta-column.secondary { padding: 0; border-left: none; }
                .cta-column.secondary { margin-top: 3rem; }
            }"#}
            </style>

            <ThemeToggle />
            <HeroSection />
            <HeroContinuationSection />
            <StatisticsSection />
            <ProblemSection />
            <SolutionSection />
            <CtaSection on_open_assessment={open_assessment} />

            <AssessmentModal is_open={*show_assessment} on_close={close_assessment} />
        </div>
    }
}

#[function_component(HeroSection)]
fn hero_section() -> Html {
    html! {
        <section class="hero-section">
            <div class="section-inner">
                <h1>{"Before You Scrap Your AI Project, Read This"}</h1>
                <div class="hero-rule"><div></div></div>
            </div>
        </section>
    }
}

#[function_component(HeroContinuationSection)]
fn hero_continuation_section() -> Html {
    html! {
        <section class="hero-continuation reveal">
            <div class="section-inner">
                <h2>{"42% Are Abandoning Their AI Projects. Here's Why Yours Is Actually Salvageable."}</h2>
                <p class="lede">
                    {"Your AI implementation passed every technical test. The metrics prove it works. \
                      But something you didn't anticipate happened—organizational dysfunction emerged \
                      that your technical team can't explain and your consultants can't solve."}
                </p>
                <p class="emphasis">{"You're experiencing AI Implementation Blind Spots."}</p>
            </div>
        </section>
    }
}

#[function_component(StatisticsSection)]
fn statistics_section() -> Html {
    html! {
        <section class="statistics-section reveal">
            <div class="section-inner">
                <h2 class="section-heading">{"The data tells a clear story:"}</h2>
                <div class="heading-rule"></div>
                <div class="stat-grid">
                    <div class="stat-card hero">
                        <div class="stat-kicker">{"Only"}</div>
                        <div class="stat-value">{"1%"}</div>
                        <p>{"Describe their AI rollouts as \"mature\""}</p>
                    </div>
                    <div class="stat-card wide">
                        <div class="stat-value">{"47%"}</div>
                        <p>{"Experience organizational consequences despite technical AI success"}</p>
                    </div>
                    <div class="stat-card wide">
                        <div class="stat-value">{"42%"}</div>
                        <p>{"Are scrapping most AI initiatives (up from 17% last year)"}</p>
                    </div>
                    <div class="stat-card">
                        <div class="stat-value">{"33%"}</div>
                        <p>{"Report AI creates tension between teams"}</p>
                    </div>
                    <div class="stat-card">
                        <div class="stat-value">{"21.9%"}</div>
                        <p>{"Have no clear ownership of AI governance"}</p>
                    </div>
                    <div class="stat-card wide">
                        <div class="stat-value">{"17%"}</div>
                        <p>{"Have leadership-driven adoption with systematic policies"}</p>
                    </div>
                </div>
            </div>
        </section>
    }
}

const PROBLEMS: &[&str] = &[
    "Authority shifts that happened without formal restructuring",
    "Decision-making gaps nobody anticipated during planning",
    "Cultural resistance that emerged after technical success",
    "Shadow AI usage despite governance frameworks",
    "Team friction that wasn't there before deployment",
];

#[function_component(ProblemSection)]
fn problem_section() -> Html {
    html! {
        <section class="problem-section reveal">
            <div class="section-inner">
                <div class="problem-grid">
                    <div>
                        <h2 class="section-heading">{"The Pattern We're Seeing"}</h2>
                        <div class="heading-rule"></div>
                        <p class="muted-copy">
                            {"You implemented AI using technology frameworks, but what you actually \
                              needed was business transformation intelligence. Now you're dealing with:"}
                        </p>
                        <div class="problem-list">
                            { for PROBLEMS.iter().map(|problem| html! {
                                <div class="problem-item">
                                    <div class="bullet"></div>
                                    <p>{*problem}</p>
                                </div>
                            }) }
                        </div>
                        <p class="sound-familiar">{"Sound familiar?"}</p>
                    </div>
                    <div>
                        <h3 class="aside-heading">{"This Isn't Implementation Failure"}</h3>
                        <p class="muted-copy">
                            {"Your technical team did their job. Your AI works exactly as designed."}
                        </p>
                        <p class="strong-copy">
                            {"The problem is systematic: successful AI implementations create \
                              organizational blind spots that traditional consulting frameworks \
                              can't detect."}
                        </p>
                        <p class="muted-copy">
                            {"Organizations experiencing this aren't failing at AI—they're discovering \
                              that AI cultural integration requires completely different intelligence \
                              than technical deployment."}
                        </p>
                    </div>
                </div>
            </div>
        </section>
    }
}

const ASSESSMENT_AREAS: &[&str] = &[
    "The specific organizational shifts that emerged after your AI went live",
    "How decision-making and authority patterns changed (often invisibly)",
    "Whether you're experiencing the systematic vulnerability patterns we've identified",
    "What blind spots exist in your current AI governance approach",
];

#[function_component(SolutionSection)]
fn solution_section() -> Html {
    html! {
        <section class="solution-section reveal">
            <div class="section-inner">
                <h2 class="section-heading">{"What We're Learning"}</h2>
                <div class="heading-rule"></div>
                <p class="muted-copy">
                    {"We're conducting strategic assessments with select organizations to validate \
                      systematic patterns and develop solutions for AI cultural intelligence."}
                </p>
                <p class="strong-copy">
                    {"You'll get immediate insights from the assessment itself, and when we develop \
                      systematic solutions based on this research, you'll be among the first to \
                      access them."}
                </p>
                <h3 class="aside-heading">{"What We'll Map Together:"}</h3>
                <div class="map-list">
                    { for ASSESSMENT_AREAS.iter().map(|area| html! {
                        <div class="problem-item">
                            <div class="bullet"></div>
                            <p style="font-weight: 300;">{*area}</p>
                        </div>
                    }) }
                </div>
                <div class="format-block">
                    <p>{"Format: 45-60 minute confidential strategic conversation"}</p>
                    <p>{"Outcome: Clear assessment of your AI cultural integration gaps"}</p>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct CtaSectionProps {
    on_open_assessment: Callback<()>,
}

#[function_component(CtaSection)]
fn cta_section(props: &CtaSectionProps) -> Html {
    let show_form = use_state(|| false);
    let name = use_state(String::new);
    let email = use_state(String::new);
    let company = use_state(String::new);
    let role = use_state(String::new);

    let open_form = {
        let show_form = show_form.clone();
        Callback::from(move |_: MouseEvent| show_form.set(true))
    };
    let close_form = {
        let show_form = show_form.clone();
        Callback::from(move |_: MouseEvent| show_form.set(false))
    };
    let open_assessment = {
        let on_open_assessment = props.on_open_assessment.clone();
        Callback::from(move |_: MouseEvent| on_open_assessment.emit(()))
    };

    let field_setter = |field: &UseStateHandle<String>| {
        let field = field.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            field.set(input.value());
        })
    };

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let company = company.clone();
        let role = role.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            // No booking backend yet; the request is only logged.
            info!(
                "assessment request: name={} email={} company={} role={}",
                *name, *email, *company, *role
            );
        })
    };

    html! {
        <section class="cta-section reveal">
            <div class="section-inner">
                <div class="cta-grid">
                    <div class="cta-column">
                        <h2>{"Schedule Your Strategic Assessment"}</h2>
                        <div class="heading-rule"></div>
                        <p class="muted-copy">
                            {"We're limiting these assessments to organizations where we can validate \
                              systematic patterns."}
                        </p>
                        <button class="cta-button" onclick={open_form}>
                            {"Book Confidential Assessment"}
                        </button>
                    </div>
                    <div class="cta-column secondary">
                        <h2>{"Prefer to Share Your Experience in Writing?"}</h2>
                        <div class="heading-rule"></div>
                        <p class="muted-copy">
                            {"If a live conversation isn't practical right now, you can help validate \
                              our research by sharing your AI implementation experience through our \
                              assessment form. You'll receive a detailed analysis of your responses \
                              showing which systematic patterns apply to your situation."}
                        </p>
                        <button class="cta-button outline" onclick={open_assessment}>
                            {"Complete Written Assessment"}
                        </button>
                    </div>
                </div>

                <div class="confidentiality">
                    {"All conversations and data remain strictly confidential."}
                </div>

                {
                    if *show_form {
                        html! {
                            <form class="request-form" onsubmit={onsubmit}>
                                <h3>{"Request Assessment"}</h3>
                                <p class="form-hint">
                                    {"Share your details to schedule your confidential strategic conversation"}
                                </p>
                                <div class="form-field">
                                    <label for="request-name">{"Name"}</label>
                                    <input
                                        id="request-name"
                                        placeholder="Your name"
                                        value={(*name).clone()}
                                        oninput={field_setter(&name)}
                                    />
                                </div>
                                <div class="form-field">
                                    <label for="request-email">{"Email"}</label>
                                    <input
                                        id="request-email"
                                        type="email"
                                        placeholder="your@email.com"
                                        value={(*email).clone()}
                                        oninput={field_setter(&email)}
                                    />
                                </div>
                                <div class="form-field">
                                    <label for="request-company">{"Company"}</label>
                                    <input
                                        id="request-company"
                                        placeholder="Your company"
                                        value={(*company).clone()}
                                        oninput={field_setter(&company)}
                                    />
                                </div>
                                <div class="form-field">
                                    <label for="request-role">{"Role"}</label>
                                    <input
                                        id="request-role"
                                        placeholder="Your role"
                                        value={(*role).clone()}
                                        oninput={field_setter(&role)}
                                    />
                                </div>
                                <div class="form-actions">
                                    <button type="submit" class="cta-button" style="margin-top: 0.5rem;">
                                        {"Request Assessment"}
                                    </button>
                                    <button
                                        type="button"
                                        class="cta-button outline"
                                        style="margin-top: 0.5rem;"
                                        onclick={close_form}
                                    >
                                        {"Cancel"}
                                    </button>
                                </div>
                            </form>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        </section>
    }
}
