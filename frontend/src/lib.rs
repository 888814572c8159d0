mod components;
mod hooks;
mod pages;
mod storage;
pub mod utils;

use pages::{dashboard::DashboardPage, gateway::GatewayPage};
use yew::prelude::*;
use yew_router::prelude::*;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Dashboard,
    #[at("/gateway")]
    Gateway,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Gateway => html! { <GatewayPage /> },
        // Unknown paths go through the same session check as the dashboard
        Route::Dashboard | Route::NotFound => html! { <DashboardPage /> },
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

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Machine dashboard v{}", VERSION);
    yew::Renderer::<App>::new().render();
}
