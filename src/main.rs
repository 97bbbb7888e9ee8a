use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod hooks;
mod whatsapp;

mod components {
    pub mod accordion;
    pub mod icons;
}
mod pages {
    pub mod landing;
    pub mod not_found;
}

use pages::{landing::LandingPage, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering landing page");
            html! { <LandingPage /> }
        }
        Route::NotFound => {
            info!("Rendering not-found page");
            html! { <NotFound /> }
        }
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
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
