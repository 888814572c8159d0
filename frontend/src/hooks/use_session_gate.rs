//! Hook guarding the dashboard behind a fresh gate session.

use crate::storage::BrowserSessionStore;
use crate::utils;
use crate::Route;
use shared::{check_session, Freshness};
use yew::prelude::*;
use yew_router::prelude::*;

/// Check the stored session once per mount of the protected view.
///
/// A missing or expired session is cleared from storage and navigation is
/// replaced with the gate, without any error shown.
///
/// # Returns
/// * `bool` - Whether the protected content may render
///
/// # Example
/// ```ignore
/// if !use_session_gate() {
///     return html! {};
/// }
/// ```
#[hook]
pub fn use_session_gate() -> bool {
    let navigator = use_navigator();
    let fresh = use_state(|| {
        let mut store = BrowserSessionStore::new();
        match check_session(&mut store, utils::now()) {
            Freshness::Fresh(_) => true,
            Freshness::Missing | Freshness::Expired => false,
        }
    });

    {
        let fresh = *fresh;
        use_effect_with((), move |_| {
            if !fresh {
                match navigator {
                    Some(navigator) => navigator.replace(&Route::Gateway),
                    None => log::error!("No router available to return to the gate"),
                }
            }
            || ()
        });
    }

    *fresh
}
