use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::catalogue::{Question, QuestionKind};
use super::engine::{AnswerValue, SCALE_MIDPOINT};

#[derive(Properties, PartialEq)]
pub struct QuestionStepProps {
    pub question: Question,
    pub value: AnswerValue,
    pub validation_error: Option<String>,
    pub on_change: Callback<AnswerValue>,
    pub on_next: Callback<()>,
    pub on_back: Callback<()>,
    pub can_go_back: bool,
    pub can_go_next: bool,
    pub is_loading: bool,
}

fn header(question: &Question) -> Html {
    html! {
        <div class="question-header">
            <h2>{question.title}</h2>
            {
                if let Some(subtitle) = question.subtitle {
                    html! { <p class="question-subtitle">{subtitle}</p> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn error_line(validation_error: &Option<String>) -> Html {
    if let Some(message) = validation_error {
        html! { <p class="validation-error">{message}</p> }
    } else {
        html! {}
    }
}

#[function_component(QuestionStep)]
pub fn question_step(props: &QuestionStepProps) -> Html {
    let question = &props.question;

    let on_next = {
        let on_next = props.on_next.clone();
        Callback::from(move |_: MouseEvent| on_next.emit(()))
    };
    let on_back = {
        let on_back = props.on_back.clone();
        Callback::from(move |_: MouseEvent| on_back.emit(()))
    };

    let body = match question.kind {
        QuestionKind::Intro => html! {
            <div class="step-centered">
                <h2>{question.title}</h2>
                {
                    if let Some(subtitle) = question.subtitle {
                        html! { <p class="question-subtitle">{subtitle}</p> }
                    } else {
                        html! {}
                    }
                }
            </div>
        },
        QuestionKind::Completion => html! {
            <div class="step-centered">
                <div class="completion-mark"><div class="completion-dot"></div></div>
                <h2>{question.title}</h2>
                {
                    if let Some(subtitle) = question.subtitle {
                        html! { <p class="question-subtitle">{subtitle}</p> }
                    } else {
                        html! {}
                    }
                }
            </div>
        },
        QuestionKind::ShortText => {
            let text = props.value.as_text().unwrap_or_default().to_string();
            let oninput = {
                let on_change = props.on_change.clone();
                Callback::from(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    on_change.emit(AnswerValue::Text(input.value()));
                })
            };
            html! {
                <>
                    { header(question) }
                    <input
                        class={classes!("step-input", props.validation_error.is_some().then(|| "invalid"))}
                        value={text}
                        placeholder={question.placeholder.unwrap_or("")}
                        oninput={oninput}
                    />
                    { error_line(&props.validation_error) }
                </>
            }
        }
        QuestionKind::LongText => {
            let text = props.value.as_text().unwrap_or_default().to_string();
            let oninput = {
                let on_change = props.on_change.clone();
                Callback::from(move |e: InputEvent| {
                    let area: HtmlTextAreaElement = e.target_unchecked_into();
                    on_change.emit(AnswerValue::Text(area.value()));
                })
            };
            html! {
                <>
                    { header(question) }
                    <textarea
                        class={classes!("step-textarea", props.validation_error.is_some().then(|| "invalid"))}
                        value={text}
                        placeholder={question.placeholder.unwrap_or("")}
                        oninput={oninput}
                    />
                    { error_line(&props.validation_error) }
                </>
            }
        }
        QuestionKind::SingleChoice => {
            let selected = props.value.as_text().unwrap_or_default().to_string();
            html! {
                <>
                    { header(question) }
                    <div class="choice-list">
                        { for question.choices.iter().map(|choice| {
                            let is_selected = selected == choice.value;
                            let onclick = {
                                let on_change = props.on_change.clone();
                                let value = choice.value;
                                Callback::from(move |_: MouseEvent| {
                                    on_change.emit(AnswerValue::Text(value.to_string()));
                                })
                            };
                            html! {
                                <div
                                    class={classes!("choice-card", is_selected.then(|| "selected"))}
                                    onclick={onclick}
                                >
                                    <p>{choice.label}</p>
                                </div>
                            }
                        }) }
                    </div>
                </>
            }
        }
        QuestionKind::MultiChoice => html! {
            <>
                { header(question) }
                <div class="choice-list">
                    { for question.choices.iter().map(|choice| {
                        let is_selected = props
                            .value
                            .as_selection()
                            .map_or(false, |items| items.iter().any(|item| item == choice.value));
                        let onclick = {
                            let on_change = props.on_change.clone();
                            let current = props.value.clone();
                            let value = choice.value;
                            Callback::from(move |_: MouseEvent| {
                                on_change.emit(current.clone().toggled(value));
                            })
                        };
                        html! {
                            <div
                                class={classes!("choice-card", is_selected.then(|| "selected"))}
                                onclick={onclick}
                            >
                                <div class={classes!("choice-check", is_selected.then(|| "checked"))}></div>
                                <p>{choice.label}</p>
                            </div>
                        }
                    }) }
                </div>
            </>
        },
        QuestionKind::Scale => {
            let score = props.value.as_scale().unwrap_or(SCALE_MIDPOINT);
            let oninput = {
                let on_change = props.on_change.clone();
                Callback::from(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    if let Ok(score) = input.value().parse::<u8>() {
                        on_change.emit(AnswerValue::Scale(score));
                    }
                })
            };
            html! {
                <>
                    { header(question) }
                    <div class="scale-block">
                        <div class="scale-legend">
                            <span>{"Likely to scale back"}</span>
                            <span>{"Definitely continuing/expanding"}</span>
                        </div>
                        <input
                            type="range"
                            min="1"
                            max="10"
                            step="1"
                            value={score.to_string()}
                            oninput={oninput}
                        />
                        <div class="scale-readout">
                            <span class="scale-score">{score.to_string()}</span>
                            <span class="scale-denominator">{"/ 10"}</span>
                        </div>
                    </div>
                </>
            }
        }
    };

    let nav = match question.kind {
        QuestionKind::Intro => html! {
            <div class="step-nav centered">
                <button class="primary-button" onclick={on_next}>{"Let's Start →"}</button>
            </div>
        },
        QuestionKind::Completion => html! {
            <div class="step-nav centered">
                <button class="primary-button" onclick={on_next} disabled={props.is_loading}>
                    { if props.is_loading { "Submitting..." } else { "Complete Assessment" } }
                </button>
            </div>
        },
        _ => html! {
            <div class="step-nav">
                <button class="ghost-button" onclick={on_back} disabled={!props.can_go_back}>
                    {"← Back"}
                </button>
                <button class="primary-button" onclick={on_next} disabled={!props.can_go_next}>
                    {"Continue →"}
                </button>
            </div>
        },
    };

    html! {
        <div class="question-step">
            <div class="question-body">{body}</div>
            {nav}
        </div>
    }
}
