use yew::prelude::*;
use log::{info, Level};

mod config;
mod theme;
mod components {
    pub mod theme_toggle;
}
mod pages {
    pub mod landing;
}
mod assessment {
    pub mod catalogue;
    pub mod engine;
    pub mod modal;
    pub mod question_step;
    pub mod storage;
    pub mod submit;
}

use pages::landing::Landing;
use theme::ThemeProvider;

#[function_component]
fn App() -> Html {
    html! {
        <ThemeProvider>
            <Landing />
        </ThemeProvider>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
