//! Dashboard page components
//!
//! This module contains the protected dashboard and its sub-components:
//! - `DashboardPage`: Session check, then the machine board
//! - `Toolbar`: Search box and role selector
//! - `MachineCard`: One grid entry with a view-only viewer
//! - `MachineModal`: Enlarged interactive view of the focused machine
//! - `Pagination`: Previous/next and numbered page buttons

mod machine_card;
mod machine_modal;
mod page;
mod pagination;
mod toolbar;

pub use page::DashboardPage;
