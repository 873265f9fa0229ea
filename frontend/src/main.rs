use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod dom;
mod interactions {
    pub mod accordion;
    pub mod anchor;
    pub mod carousel;
    pub mod contact;
    pub mod counter;
    pub mod environment;
    pub mod reveal;
    pub mod scroll;
}
mod components {
    pub mod carousel;
    pub mod contact;
    pub mod faq;
    pub mod footer;
    pub mod metrics;
    pub mod nav;
    pub mod packages;
    pub mod section;
}
mod pages {
    pub mod home;
    pub mod privacy;
}

use components::{footer::Footer, nav::Nav};
use config::SiteConfig;
use interactions::environment::{Environment, REDUCED_MOTION_STYLE};
use pages::{home::Home, privacy::PrivacyPolicy};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/privacy")]
    Privacy,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <main class="legal-page">
                    <h1>{"Page not found"}</h1>
                    <Link<Route> to={Route::Home} classes="hero-cta">
                        {"Back to the home page"}
                    </Link<Route>>
                </main>
            }
        }
    }
}

#[function_component]
fn App() -> Html {
    // Browser capabilities and script variant are fixed for the page's lifetime.
    let environment = use_memo(|_| dom::detect_environment(), ());
    let site_config = use_memo(|_| config::get_site_config(), ());

    {
        let environment = environment.clone();
        use_effect_with_deps(
            move |_| {
                info!("Detected environment: {:?}", *environment);
                dom::apply_body_classes(&environment);
                || ()
            },
            (),
        );
    }

    html! {
        <ContextProvider<Environment> context={(*environment).clone()}>
            <ContextProvider<SiteConfig> context={(*site_config).clone()}>
                <style>{REDUCED_MOTION_STYLE}</style>
                <BrowserRouter>
                    <Nav />
                    <Switch<Route> render={switch} />
                    <Footer />
                </BrowserRouter>
            </ContextProvider<SiteConfig>>
        </ContextProvider<Environment>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting EVA site");
    yew::Renderer::<App>::new().render();
}
