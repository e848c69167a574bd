use log::{error, info, Level};
use web_sys::Element;
use yew::prelude::*;
use yew_router::prelude::*;

mod cart;
mod catalog;
mod config;
mod error;
mod models;
mod booking {
    pub mod card;
    pub mod copy;
    pub mod panel;
    pub mod wizard;
}
mod components {
    pub mod nav;
}
mod pages {
    pub mod home;
}

use error::StartupError;
use pages::home::Home;

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
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter basename={AttrValue::from(config::get_base_path())}>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn mount_point() -> Result<Element, StartupError> {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(config::MOUNT_POINT_ID))
        .ok_or(StartupError::MissingMountPoint(config::MOUNT_POINT_ID))
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    let root = match mount_point() {
        Ok(root) => root,
        Err(e) => {
            error!("{}", e);
            return;
        }
    };

    info!("Starting application");
    yew::Renderer::<App>::with_root(root).render();
}
