use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod error;
mod animation {
    pub mod count_up;
    pub mod frame_loop;
    pub mod geometry;
    pub mod hooks;
    pub mod viewport;
    pub mod visibility;
}
mod i18n {
    pub mod catalog;
    pub mod language;
    pub mod provider;
}
mod components {
    pub mod animated_counter;
    pub mod language_switcher;
    pub mod parallax;
    pub mod reveal;
}
mod sections {
    pub mod about;
    pub mod contact;
    pub mod footer;
    pub mod hero;
    pub mod services;
    pub mod team;
    pub mod technologies;
}
mod pages {
    pub mod home;
}

use components::language_switcher::LanguageSwitcher;
use i18n::provider::I18nProvider;
use pages::home::{NotFound, ParallaxHome, StackedHome};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/stacked")]
    Stacked,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <ParallaxHome /> }
        }
        Route::Stacked => {
            info!("Rendering Stacked page");
            html! { <StackedHome /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn Nav() -> Html {
    let route = use_route::<Route>();
    let (label, target) = match route {
        Some(Route::Stacked) => ("Parallax", Route::Home),
        _ => ("Stacked", Route::Stacked),
    };

    html! {
        <nav class="top-nav">
            <Link<Route> to={Route::Home} classes="nav-logo">
                {"Innovation Co."}
            </Link<Route>>
            <div class="nav-right">
                <Link<Route> to={target} classes="nav-link">
                    { label }
                </Link<Route>>
                <LanguageSwitcher />
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <I18nProvider>
            <BrowserRouter>
                <Nav />
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </I18nProvider>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
