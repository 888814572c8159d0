//! Dashboard page - Machine list behind the session gate

use super::machine_card::MachineCard;
use super::machine_modal::MachineModal;
use super::pagination::Pagination;
use super::toolbar::Toolbar;
use crate::hooks::{use_machine_board, use_session_gate, UseMachineBoard};
use shared::{BoardMsg, Endpoints, MachineId, RoleFilter};
use yew::prelude::*;

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    // Redirects to the gate when the stored session is missing or expired
    let session_ok = use_session_gate();
    if !session_ok {
        return html! {};
    }

    html! { <MachineDashboard /> }
}

#[function_component(MachineDashboard)]
fn machine_dashboard() -> Html {
    let endpoints = use_memo((), |_| Endpoints::from_build_env());
    let UseMachineBoard { board, dispatch } = use_machine_board(endpoints.clone());

    let on_search = {
        let dispatch = dispatch.clone();
        Callback::from(move |text: String| dispatch.emit(BoardMsg::SearchChanged(text)))
    };
    let on_role = {
        let dispatch = dispatch.clone();
        Callback::from(move |role: RoleFilter| dispatch.emit(BoardMsg::RoleSelected(role)))
    };
    let on_select = {
        let dispatch = dispatch.clone();
        Callback::from(move |id: MachineId| dispatch.emit(BoardMsg::Select(id)))
    };
    let on_close = {
        let dispatch = dispatch.clone();
        Callback::from(move |_| dispatch.emit(BoardMsg::Dismiss))
    };
    let on_prev = {
        let dispatch = dispatch.clone();
        Callback::from(move |_| dispatch.emit(BoardMsg::PrevPage))
    };
    let on_next = {
        let dispatch = dispatch.clone();
        Callback::from(move |_| dispatch.emit(BoardMsg::NextPage))
    };
    let on_page = Callback::from(move |page: usize| dispatch.emit(BoardMsg::GoToPage(page)));

    let roles: Vec<String> = board
        .unique_roles()
        .into_iter()
        .map(str::to_string)
        .collect();
    let page_slice = board.page_slice();

    html! {
        <div class="dashboard-container">
            <header class="dashboard-header">
                <h1>{ "Machine Monitor" }</h1>
                if !board.is_loading() {
                    <p class="dashboard-summary">{ board.summary() }</p>
                }
            </header>

            if board.is_loading() {
                <div class="loading">
                    <div class="spinner"></div>
                    <p>{ "Loading machines..." }</p>
                </div>
            } else {
                <>
                    <Toolbar
                        search={AttrValue::from(board.search().to_string())}
                        {roles}
                        selected={board.role().clone()}
                        {on_search}
                        {on_role}
                    />

                    if page_slice.is_empty() {
                        <div class="empty-state">
                            <h2>{ "No machines found" }</h2>
                        </div>
                    } else {
                        <div class="machines-grid">
                            {
                                page_slice.iter().map(|machine| {
                                    html! {
                                        <MachineCard
                                            key={machine.id}
                                            machine={(*machine).clone()}
                                            endpoints={endpoints.clone()}
                                            on_select={on_select.clone()}
                                        />
                                    }
                                }).collect::<Html>()
                            }
                        </div>
                    }

                    <Pagination
                        current={board.current_page()}
                        total={board.total_pages()}
                        can_prev={board.can_prev()}
                        can_next={board.can_next()}
                        {on_prev}
                        {on_next}
                        {on_page}
                    />
                </>
            }

            {
                match board.focused() {
                    Some(machine) => html! {
                        <MachineModal
                            machine={machine.clone()}
                            endpoints={endpoints.clone()}
                            {on_close}
                        />
                    },
                    None => html! {},
                }
            }
        </div>
    }
}
