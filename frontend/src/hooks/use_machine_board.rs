//! Hook owning the machine board and its one-shot fetch.

use gloo_net::http::Request;
use shared::{
    machines_from_entries, parse_device_config, parse_machine_entries, update, ApiError,
    BoardMsg, Endpoints, FetchGuard, Machine, MachineBoard,
};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::utils;

#[derive(Clone, PartialEq, Default)]
struct BoardState(MachineBoard);

impl Reducible for BoardState {
    type Action = BoardMsg;

    fn reduce(self: Rc<Self>, action: BoardMsg) -> Rc<Self> {
        Rc::new(BoardState(update(self.0.clone(), action)))
    }
}

/// Return value from the use_machine_board hook.
pub struct UseMachineBoard {
    /// Current board (snapshot plus filter, page and focus state)
    pub board: MachineBoard,
    /// Apply a UI message to the board
    pub dispatch: Callback<BoardMsg>,
}

/// Hook for the dashboard's machine list.
///
/// Fetches the configuration document, then the machine list, exactly once
/// per mount. A result arriving after unmount is dropped. Failures are
/// logged by the board and leave it empty and ready.
#[hook]
pub fn use_machine_board(endpoints: Rc<Endpoints>) -> UseMachineBoard {
    let board = use_reducer(BoardState::default);
    let guard = use_memo((), |_| FetchGuard::new());

    {
        let dispatcher = board.dispatcher();
        let guard = (*guard).clone();
        use_effect_with((), move |_| {
            if let Some(ticket) = guard.try_begin() {
                spawn_local(async move {
                    let msg = match fetch_machines(&endpoints).await {
                        Ok(machines) => BoardMsg::Loaded(machines),
                        Err(e) => BoardMsg::LoadFailed(e),
                    };
                    if ticket.finish() {
                        dispatcher.dispatch(msg);
                    }
                });
            }
            move || guard.teardown()
        });
    }

    let dispatch = {
        let dispatcher = board.dispatcher();
        Callback::from(move |msg: BoardMsg| dispatcher.dispatch(msg))
    };

    UseMachineBoard {
        board: board.0.clone(),
        dispatch,
    }
}

async fn fetch_machines(endpoints: &Endpoints) -> Result<Vec<Machine>, ApiError> {
    let config_url = endpoints.config_url(&utils::get_base_url())?;
    let config = parse_device_config(&get_text(&config_url).await?)?;

    let list_url = endpoints.machines_url(&config.device_id)?;
    log::debug!("Fetching machines for device {}", config.device_id);
    let entries = parse_machine_entries(&get_text(&list_url).await?)?;

    Ok(machines_from_entries(entries))
}

async fn get_text(url: &str) -> Result<String, ApiError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !response.ok() {
        return Err(ApiError::Server {
            status: response.status(),
        });
    }
    response
        .text()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}
