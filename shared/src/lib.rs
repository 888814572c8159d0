//! Core of the machine dashboard, independent of the browser.
//!
//! - [`gate`]: session gate and the session store abstraction
//! - [`board`]: machine list view-model (filter, paginate, focus)
//! - [`fetch`]: single-flight guard for the machine-list fetch
//! - [`machine`]: machine records built from the list source
//! - [`api`] / [`endpoints`]: wire types, errors and URL construction

pub mod api;
pub mod board;
pub mod endpoints;
pub mod fetch;
pub mod gate;
pub mod machine;

pub use api::{parse_device_config, parse_machine_entries, ApiError, DeviceConfig, MachineEntry};
pub use board::{update, BoardMsg, LoadState, MachineBoard, RoleFilter, PAGE_SIZE};
pub use endpoints::{Endpoints, ViewerMode};
pub use fetch::{FetchGuard, FetchTicket};
pub use gate::{
    admit, check_session, clear_session, Freshness, GateOutcome, MemorySessionStore,
    SessionCredential, SessionStore,
};
pub use machine::{machines_from_entries, Machine, MachineDetails, MachineId};
