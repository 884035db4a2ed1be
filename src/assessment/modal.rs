use log::error;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::catalogue;
use super::engine::{AdvanceOutcome, AnswerValue, WizardEngine};
use super::question_step::QuestionStep;
use super::storage::SessionProgressStore;
use super::submit;

type Engine = WizardEngine<SessionProgressStore>;

fn open_engine() -> Engine {
    WizardEngine::new(catalogue::questions(), SessionProgressStore::new())
}

#[derive(Properties, PartialEq)]
pub struct AssessmentModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
}

#[function_component(AssessmentModal)]
pub fn assessment_modal(props: &AssessmentModalProps) -> Html {
    let engine = use_state(open_engine);
    let validation_error = use_state(|| None::<String>);

    // Re-read persisted progress every time the dialog opens, so a reopen
    // within the session resumes where the visitor left off.
    {
        let engine = engine.clone();
        let validation_error = validation_error.clone();
        use_effect_with_deps(
            move |is_open| {
                if *is_open {
                    engine.set(open_engine());
                    validation_error.set(None);
                }
                || ()
            },
            props.is_open,
        );
    }

    if !props.is_open {
        return html! {};
    }

    let on_change = {
        let engine = engine.clone();
        let validation_error = validation_error.clone();
        Callback::from(move |value: AnswerValue| {
            let mut next = (*engine).clone();
            next.set_value(value);
            engine.set(next);
            validation_error.set(None);
        })
    };

    let on_back = {
        let engine = engine.clone();
        Callback::from(move |_| {
            let mut next = (*engine).clone();
            next.retreat();
            engine.set(next);
        })
    };

    let on_next = {
        let engine = engine.clone();
        let validation_error = validation_error.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_| {
            let mut next = (*engine).clone();
            match next.advance() {
                AdvanceOutcome::Advanced => {
                    validation_error.set(None);
                    engine.set(next);
                }
                AdvanceOutcome::SubmitStarted => {
                    engine.set(next.clone());
                    let engine = engine.clone();
                    let on_close = on_close.clone();
                    spawn_local(async move {
                        let success = match submit::submit_assessment(next.answers()).await {
                            Ok(()) => true,
                            Err(err) => {
                                error!("failed to submit assessment: {err}");
                                false
                            }
                        };
                        let mut settled = next;
                        settled.finish_submit(success);
                        engine.set(settled);
                        if success {
                            on_close.emit(());
                        }
                    });
                }
                AdvanceOutcome::Rejected { message } => {
                    validation_error.set(message);
                }
            }
        })
    };

    // Closing mid-flow keeps the persisted progress; only a successful
    // submission clears it.
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let position = engine.position();
    let total = engine.len();
    let progress = ((position + 1) as f64 / total as f64) * 100.0;

    html! {
        <div class="assessment-overlay">
            <style>
            {r#".assessment-overlay {
                position: fixed;
                inset: 0;
                background: rgba(0, 0, 0, 0.5);
                display: flex;
                align-items: center;
                justify-content: center;
                padding: 1.5rem;
                z-index: 100;
            }
            .assessment-dialog {
                position: relative;
                width: 100%;
                max-width: 56rem;
                max-height: 95vh;
                overflow-y: auto;
                background: var(--background);
                border: 1px solid var(--border);
                border-radius: 12px;
                padding: 2rem 2.5rem 3rem;
            }
            .assessment-close {
                position: absolute;
                top: 1.25rem;
                right: 1.25rem;
                border: none;
                background: none;
                color: var(--muted-foreground);
                font-size: 1.2rem;
                cursor: pointer;
            }
            .assessment-close:hover { color: var(--foreground); }
            .progress-header {
                display: flex;
                justify-content: space-between;
                align-items: center;
                margin: 1rem 3rem 0.75rem 0;
            }
            .progress-header span {
                font-size: 0.7rem;
                color: var(--muted-foreground);
                letter-spacing: 0.15em;
                text-transform: uppercase;
            }
            .progress-track {
                height: 3px;
                background: var(--secondary);
                border-radius: 999px;
                overflow: hidden;
            }
            .progress-fill {
                height: 100%;
                background: var(--primary);
                transition: width 0.3s ease;
            }
            .question-step { padding: 3rem 1rem 0; }
            .question-body { min-height: 320px; }
            .question-header h2, .step-centered h2 {
                font-size: 1.5rem;
                font-weight: 300;
                line-height: 1.3;
                margin: 0 0 1rem;
            }
            .step-centered { text-align: center; padding-top: 2rem; }
            .question-subtitle {
                color: var(--muted-foreground);
                font-weight: 300;
                line-height: 1.6;
                margin: 0 0 1.5rem;
            }
            .step-centered .question-subtitle { max-width: 36rem; margin: 0 auto; }
            .completion-mark {
                width: 4rem;
                height: 4rem;
                margin: 0 auto 1.5rem;
                border-radius: 50%;
                background: var(--secondary);
                display: flex;
                align-items: center;
                justify-content: center;
            }
            .completion-dot {
                width: 2rem;
                height: 2rem;
                border-radius: 50%;
                background: var(--primary);
            }
            .step-input, .step-textarea {
                width: 100%;
                padding: 0.75rem 1rem;
                border: 1px solid var(--border);
                border-radius: 8px;
                background: var(--background);
                color: var(--foreground);
                font-size: 1rem;
                font-weight: 300;
            }
            .step-textarea { min-height: 160px; resize: vertical; }
            .step-input:focus, .step-textarea:focus { outline: 2px solid var(--primary); }
            .step-input.invalid, .step-textarea.invalid { border-color: var(--destructive); }
            .validation-error {
                color: var(--destructive);
                font-size: 0.85rem;
                font-weight: 300;
                margin-top: 0.5rem;
            }
            .choice-list { display: flex; flex-direction: column; gap: 0.75rem; }
            .choice-card {
                display: flex;
                align-items: center;
                gap: 0.75rem;
                padding: 1rem;
                border: 1px solid var(--border);
                border-radius: 8px;
                cursor: pointer;
                transition: background 0.2s ease, border-color 0.2s ease;
            }
            .choice-card:hover { background: var(--secondary); }
            .choice-card.selected { border-color: var(--primary); background: var(--secondary); }
            .choice-card p { margin: 0; font-weight: 300; }
            .choice-check {
                width: 1.1rem;
                height: 1.1rem;
                border: 2px solid var(--border);
                border-radius: 4px;
                flex-shrink: 0;
            }
            .choice-check.checked { background: var(--primary); border-color: var(--primary); }
            .scale-block { display: flex; flex-direction: column; gap: 1rem; }
            .scale-legend {
                display: flex;
                justify-content: space-between;
                font-size: 0.85rem;
                color: var(--muted-foreground);
            }
            .scale-block input[type="range"] { width: 100%; accent-color: var(--primary); }
            .scale-readout { text-align: center; }
            .scale-score { font-size: 1.6rem; font-weight: 300; color: var(--primary); }
            .scale-denominator { color: var(--muted-foreground); margin-left: 0.4rem; }
            .step-nav {
                display: flex;
                justify-content: space-between;
                align-items: center;
                margin-top: 3rem;
                padding-top: 2rem;
                border-top: 1px solid var(--border);
            }
            .step-nav.centered { justify-content: center; }
            .primary-button {
                padding: 0.7rem 2rem;
                border: none;
                border-radius: 8px;
                background: var(--primary);
                color: var(--background);
                font-size: 1rem;
                font-weight: 300;
                cursor: pointer;
            }
            .primary-button:disabled { opacity: 0.5; cursor: not-allowed; }
            .ghost-button {
                padding: 0.7rem 1.5rem;
                border: 1px solid var(--border);
                border-radius: 8px;
                background: none;
                color: var(--foreground);
                font-size: 1rem;
                font-weight: 300;
                cursor: pointer;
            }
            .ghost-button:disabled { opacity: 0.4; cursor: not-allowed; }
            @media (max-width: 768px) {
                .assessment-dialog { padding: 1.5rem 1.25rem 2rem; }
                .question-step { padding: 2rem 0 0; }
            }"#}
            </style>
            <div class="assessment-dialog">
                <button class="assessment-close" onclick={close.clone()} aria-label="Close">{"✕"}</button>
                <div class="progress-header">
                    <span>{"Assessment Progress"}</span>
                    <span>{format!("{} of {}", position + 1, total)}</span>
                </div>
                <div class="progress-track">
                    <div class="progress-fill" style={format!("width: {progress}%;")}></div>
                </div>
                <QuestionStep
                    question={engine.current().clone()}
                    value={engine.value()}
                    validation_error={(*validation_error).clone()}
                    on_change={on_change}
                    on_next={on_next}
                    on_back={on_back}
                    can_go_back={position > 0}
                    can_go_next={engine.can_advance()}
                    is_loading={engine.is_submitting()}
                />
            </div>
        </div>
    }
}
