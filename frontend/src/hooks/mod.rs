//! Custom Yew hooks for the frontend application.
//!
//! These hooks bind the browser-independent core in `shared` to the page:
//! session storage, the clock, and the machine-list fetch.

mod use_machine_board;
mod use_session_gate;

pub use use_machine_board::{use_machine_board, UseMachineBoard};
pub use use_session_gate::use_session_gate;
