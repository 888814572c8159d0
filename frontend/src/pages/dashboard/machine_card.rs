//! MachineCard component - One grid entry with a view-only viewer

use crate::components::ViewerFrame;
use shared::{Endpoints, Machine, MachineId, ViewerMode};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MachineCardProps {
    pub machine: Machine,
    pub endpoints: Rc<Endpoints>,
    pub on_select: Callback<MachineId>,
}

#[function_component(MachineCard)]
pub fn machine_card(props: &MachineCardProps) -> Html {
    let machine = &props.machine;

    let handle_click = {
        let on_select = props.on_select.clone();
        let id = machine.id;
        Callback::from(move |_: MouseEvent| on_select.emit(id))
    };

    let status_class = format!(
        "status-indicator {}",
        if machine.online { "online" } else { "offline" }
    );

    html! {
        <article class="machine-card" onclick={handle_click}>
            <div class="machine-screen">
                <ViewerFrame
                    endpoints={props.endpoints.clone()}
                    token={AttrValue::from(machine.name.clone())}
                    mode={ViewerMode::Thumbnail}
                />
                <div class="status-overlay">
                    <span class={status_class}></span>
                    <span class="status-label">{ machine.status_label() }</span>
                </div>
            </div>
            <div class="machine-info">
                <h3 class="machine-name">{ &machine.name }</h3>
                <span class="machine-role">{ &machine.role }</span>
            </div>
        </article>
    }
}
