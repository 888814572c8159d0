//! Machine records built from a machine-list snapshot.
//!
//! The source only reports `{hostport, token}` pairs. Everything else on a
//! [`Machine`] is either positional (`id`) or a fixed placeholder
//! (`online`, `role`, [`MachineDetails`]) and must not be read as measured
//! inventory or liveness data.

use crate::api::MachineEntry;
use serde::{Deserialize, Serialize};

/// Role assigned to every record. The source has no per-machine role.
pub const DEFAULT_ROLE: &str = "Funcionário";

/// Placeholder shown as "last seen" in the enlarged view.
pub const PLACEHOLDER_LAST_SEEN: &str = "just now";

/// Placeholder OS label shown in the enlarged view.
pub const PLACEHOLDER_OS: &str = "Windows 11 Pro";

/// Ordinal position in one fetched snapshot, starting at 1.
///
/// Only unique within that snapshot; not a stable machine identity.
pub type MachineId = u32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Machine {
    pub id: MachineId,
    /// Opaque token, used as display name and as the viewer credential.
    pub name: String,
    /// Always true: the source performs no liveness check.
    pub online: bool,
    pub role: String,
    /// Carried through from the source, not rendered.
    pub hostport: Option<String>,
}

impl Machine {
    pub fn status_label(&self) -> &'static str {
        if self.online {
            "Online"
        } else {
            "Offline"
        }
    }

    pub fn details(&self) -> MachineDetails {
        MachineDetails::placeholder(self.id)
    }
}

/// Display-only fields of the enlarged view. None of these are measured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineDetails {
    pub address: String,
    pub last_seen: &'static str,
    pub os: &'static str,
}

impl MachineDetails {
    pub fn placeholder(id: MachineId) -> Self {
        Self {
            address: format!("192.168.1.{}", 100 + id),
            last_seen: PLACEHOLDER_LAST_SEEN,
            os: PLACEHOLDER_OS,
        }
    }
}

/// Map a machine-list response 1:1 into records, ids assigned in response order.
pub fn machines_from_entries(entries: Vec<MachineEntry>) -> Vec<Machine> {
    entries
        .into_iter()
        .zip(1..)
        .map(|(entry, id)| Machine {
            id,
            name: entry.token,
            online: true,
            role: DEFAULT_ROLE.to_string(),
            hostport: entry.hostport,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(token: &str) -> MachineEntry {
        MachineEntry {
            hostport: Some(format!("{}:5900", token)),
            token: token.to_string(),
        }
    }

    #[test]
    fn ids_follow_response_order() {
        let machines = machines_from_entries(vec![entry("b"), entry("a"), entry("c")]);
        let ids: Vec<_> = machines.iter().map(|m| (m.id, m.name.as_str())).collect();
        assert_eq!(ids, vec![(1, "b"), (2, "a"), (3, "c")]);
    }

    #[test]
    fn placeholders_are_constant() {
        let machines = machines_from_entries(vec![entry("x"), entry("y")]);
        assert!(machines.iter().all(|m| m.online));
        assert!(machines.iter().all(|m| m.role == DEFAULT_ROLE));
        assert_eq!(machines[0].hostport.as_deref(), Some("x:5900"));
        assert_eq!(machines[0].status_label(), "Online");
    }

    #[test]
    fn details_synthesize_address_from_id() {
        let details = MachineDetails::placeholder(7);
        assert_eq!(details.address, "192.168.1.107");
        assert_eq!(details.last_seen, PLACEHOLDER_LAST_SEEN);
        assert_eq!(details.os, PLACEHOLDER_OS);
    }

    #[test]
    fn empty_snapshot() {
        assert!(machines_from_entries(Vec::new()).is_empty());
    }
}
