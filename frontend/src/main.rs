use yew::prelude::*;
use log::info;

mod config;
mod state;
mod pages {
    pub mod landing;
}
mod components {
    pub mod outcome_modal;
    pub mod social_icons;
}

use pages::landing::LandingPage;

#[function_component]
fn App() -> Html {
    html! {
        <LandingPage />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
