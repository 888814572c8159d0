//! Single-flight guard for the machine-list fetch.
//!
//! One [`FetchGuard`] lives for one activation of the dashboard. It hands
//! out at most one [`FetchTicket`]; when the dashboard is torn down the
//! guard is marked dead and the outstanding ticket reports that its result
//! must be dropped instead of applied.

use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Phase {
    #[default]
    Idle,
    InFlight,
    Done,
    TornDown,
}

#[derive(Debug, Clone, Default)]
pub struct FetchGuard {
    phase: Rc<Cell<Phase>>,
}

impl FetchGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the fetch for this activation. `None` if one was already
    /// started or the activation is gone.
    pub fn try_begin(&self) -> Option<FetchTicket> {
        if self.phase.get() != Phase::Idle {
            log::debug!("Fetch already claimed ({:?}), not starting another", self.phase.get());
            return None;
        }
        self.phase.set(Phase::InFlight);
        Some(FetchTicket {
            phase: Rc::clone(&self.phase),
        })
    }

    pub fn teardown(&self) {
        self.phase.set(Phase::TornDown);
    }

    pub fn is_torn_down(&self) -> bool {
        self.phase.get() == Phase::TornDown
    }
}

/// Proof that the holder owns the in-flight fetch.
#[derive(Debug)]
pub struct FetchTicket {
    phase: Rc<Cell<Phase>>,
}

impl FetchTicket {
    pub fn is_live(&self) -> bool {
        self.phase.get() == Phase::InFlight
    }

    /// Settle the fetch. Returns whether the result may be applied.
    pub fn finish(self) -> bool {
        if self.is_live() {
            self.phase.set(Phase::Done);
            true
        } else {
            log::debug!("Discarding fetch result after teardown");
            false
        }
    }
}
