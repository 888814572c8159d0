use yew::prelude::*;

/// Terminal state of the gate. No retry control; another attempt needs a
/// fresh navigation with a new `hash` parameter.
#[function_component(AccessDeniedPage)]
pub fn access_denied_page() -> Html {
    html! {
        <div class="gate-container">
            <p class="gate-message">{ "Access denied" }</p>
        </div>
    }
}
