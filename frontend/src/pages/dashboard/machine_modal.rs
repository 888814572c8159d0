//! MachineModal component - Enlarged interactive view of one machine
//!
//! Clicking the overlay or the close button dismisses the modal; clicks
//! inside the panel do not. Address, last seen and OS come from
//! `MachineDetails::placeholder` and are not measured values.

use crate::components::ViewerFrame;
use shared::{Endpoints, Machine, ViewerMode};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MachineModalProps {
    pub machine: Machine,
    pub endpoints: Rc<Endpoints>,
    pub on_close: Callback<()>,
}

#[function_component(MachineModal)]
pub fn machine_modal(props: &MachineModalProps) -> Html {
    let machine = &props.machine;
    let details = machine.details();

    let on_overlay_click = props.on_close.reform(|_: MouseEvent| ());
    let on_close_click = props.on_close.reform(|_: MouseEvent| ());
    let on_panel_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    html! {
        <div class="machine-modal-overlay" onclick={on_overlay_click}>
            <div class="machine-modal" onclick={on_panel_click}>
                <div class="machine-modal-header">
                    <h2>{ &machine.name }</h2>
                    <button class="machine-modal-close" onclick={on_close_click} title="Close">
                        { "×" }
                    </button>
                </div>

                <div class="machine-modal-screen">
                    <ViewerFrame
                        endpoints={props.endpoints.clone()}
                        token={AttrValue::from(machine.name.clone())}
                        mode={ViewerMode::Interactive}
                    />
                </div>

                <dl class="machine-modal-details">
                    <dt>{ "Status" }</dt>
                    <dd>{ machine.status_label() }</dd>
                    <dt>{ "Role" }</dt>
                    <dd>{ &machine.role }</dd>
                    <dt>{ "IP" }</dt>
                    <dd class="placeholder">{ details.address }</dd>
                    <dt>{ "Last seen" }</dt>
                    <dd class="placeholder">{ details.last_seen }</dd>
                    <dt>{ "OS" }</dt>
                    <dd class="placeholder">{ details.os }</dd>
                </dl>
            </div>
        </div>
    }
}
