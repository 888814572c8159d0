//! Gateway page - entry point that mints the tab's session token

use super::access_denied::AccessDeniedPage;
use crate::storage::BrowserSessionStore;
use crate::utils;
use crate::Route;
use shared::gate::HASH_PARAM;
use shared::{admit, GateOutcome};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(GatewayPage)]
pub fn gateway_page() -> Html {
    let navigator = use_navigator();
    let denied = use_state(|| false);

    {
        let denied = denied.clone();
        use_effect_with((), move |_| {
            let candidate = utils::query_param(HASH_PARAM);
            let mut store = BrowserSessionStore::new();
            match admit(&mut store, candidate.as_deref(), utils::now()) {
                GateOutcome::Granted => match navigator {
                    Some(navigator) => navigator.replace(&Route::Dashboard),
                    None => log::error!("No router available to enter the dashboard"),
                },
                GateOutcome::Denied => denied.set(true),
            }
            || ()
        });
    }

    if *denied {
        html! { <AccessDeniedPage /> }
    } else {
        html! {
            <div class="gate-container">
                <p class="gate-message">{ "Checking access..." }</p>
            </div>
        }
    }
}
