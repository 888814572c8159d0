pub mod access_denied;
pub mod dashboard;
pub mod gateway;
