use yew::prelude::*;

use crate::theme::{use_theme, ThemePreference};

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let theme = use_theme();
    let is_dark = theme.is_dark();

    let onclick = {
        let set = theme.set.clone();
        Callback::from(move |_: MouseEvent| {
            set.emit(if is_dark { ThemePreference::Light } else { ThemePreference::Dark });
        })
    };

    html! {
        <div class="theme-toggle">
            <style>
            {r#".theme-toggle {
                position: fixed;
                top: 1.5rem;
                right: 1.5rem;
                z-index: 50;
            }
            .theme-toggle button {
                display: flex;
                align-items: center;
                gap: 0.5rem;
                padding: 0.4rem 0.8rem;
                border: 1px solid var(--border);
                border-radius: 999px;
                background: var(--secondary);
                color: var(--foreground);
                font-size: 0.9rem;
                cursor: pointer;
                transition: border-color 0.2s ease;
            }
            .theme-toggle button:hover {
                border-color: var(--primary);
            }
            .theme-toggle .inactive {
                opacity: 0.35;
            }"#}
            </style>
            <button onclick={onclick} aria-label="Toggle theme">
                <span class={classes!((is_dark).then(|| "inactive"))}>{"☀"}</span>
                <span class={classes!((!is_dark).then(|| "inactive"))}>{"☾"}</span>
            </button>
        </div>
    }
}
