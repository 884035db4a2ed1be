use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;
use yew::prelude::*;

const STORAGE_KEY: &str = "cairo-ui-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemePreference {
    Light,
    Dark,
    System,
}

impl ThemePreference {
    fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    fn parse(stored: &str) -> Option<Self> {
        match stored {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            "system" => Some(Self::System),
            _ => None,
        }
    }

    fn resolves_dark(self) -> bool {
        match self {
            Self::Dark => true,
            Self::Light => false,
            Self::System => system_prefers_dark(),
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct ThemeContext {
    pub preference: ThemePreference,
    pub set: Callback<ThemePreference>,
}

impl ThemeContext {
    pub fn is_dark(&self) -> bool {
        self.preference.resolves_dark()
    }
}

fn system_prefers_dark() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok())
        .flatten()
        .map_or(false, |query| query.matches())
}

fn load_preference() -> ThemePreference {
    window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
        .and_then(|storage| storage.get_item(STORAGE_KEY).ok())
        .flatten()
        .and_then(|stored| ThemePreference::parse(&stored))
        .unwrap_or(ThemePreference::System)
}

// Swaps the light/dark class on the document root and remembers the choice.
fn apply_preference(preference: ThemePreference) {
    let Some(window) = window() else {
        return;
    };
    if let Some(root) = window.document().and_then(|d| d.document_element()) {
        let classes = root.class_list();
        let _ = classes.remove_2("light", "dark");
        let _ = classes.add_1(if preference.resolves_dark() { "dark" } else { "light" });
    }
    if let Ok(Some(storage)) = window.local_storage() {
        let _ = storage.set_item(STORAGE_KEY, preference.as_str());
    }
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    pub children: Children,
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let preference = use_state(load_preference);

    use_effect_with_deps(
        move |current| {
            apply_preference(*current);
            || ()
        },
        *preference,
    );

    // Keep a `system` preference in step with the OS setting.
    use_effect_with_deps(
        move |_| {
            let query = window()
                .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok())
                .flatten();
            let listener = Closure::wrap(Box::new(move || {
                if load_preference() == ThemePreference::System {
                    apply_preference(ThemePreference::System);
                }
            }) as Box<dyn FnMut()>);
            if let Some(query) = &query {
                let _ = query
                    .add_event_listener_with_callback("change", listener.as_ref().unchecked_ref());
            }
            move || {
                if let Some(query) = &query {
                    let _ = query.remove_event_listener_with_callback(
                        "change",
                        listener.as_ref().unchecked_ref(),
                    );
                }
            }
        },
        (),
    );

    let set = {
        let preference = preference.clone();
        Callback::from(move |next: ThemePreference| preference.set(next))
    };

    let context = ThemeContext { preference: *preference, set };

    html! {
        <ContextProvider<ThemeContext> context={context}>
            { for props.children.iter() }
        </ContextProvider<ThemeContext>>
    }
}

#[hook]
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("no ThemeProvider above this component")
}
