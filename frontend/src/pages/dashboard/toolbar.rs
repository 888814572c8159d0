//! Toolbar component - Search box and role selector

use shared::RoleFilter;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ToolbarProps {
    pub search: AttrValue,
    /// Distinct roles in first-seen order
    pub roles: Vec<String>,
    pub selected: RoleFilter,
    pub on_search: Callback<String>,
    pub on_role: Callback<RoleFilter>,
}

#[function_component(Toolbar)]
pub fn toolbar(props: &ToolbarProps) -> Html {
    let on_input = {
        let on_search = props.on_search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_search.emit(input.value());
        })
    };

    // Option 0 is "All roles"; option i is roles[i - 1]
    let on_change = {
        let on_role = props.on_role.clone();
        let roles = props.roles.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let role = usize::try_from(select.selected_index())
                .ok()
                .and_then(|index| index.checked_sub(1))
                .and_then(|index| roles.get(index))
                .map(|role| RoleFilter::Only(role.clone()))
                .unwrap_or(RoleFilter::All);
            on_role.emit(role);
        })
    };

    html! {
        <div class="dashboard-toolbar">
            <input
                type="search"
                class="search-input"
                placeholder="Search machines..."
                value={props.search.clone()}
                oninput={on_input}
            />
            <select class="role-select" onchange={on_change}>
                <option selected={props.selected == RoleFilter::All}>{ "All roles" }</option>
                {
                    props.roles.iter().map(|role| {
                        let selected = props.selected == RoleFilter::Only(role.clone());
                        html! { <option {selected}>{ role.clone() }</option> }
                    }).collect::<Html>()
                }
            </select>
        </div>
    }
}
