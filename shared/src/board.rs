//! Machine board: the dashboard's view-model.
//!
//! A [`MachineBoard`] holds the fetched snapshot plus the UI state vector
//! (search text, role filter, page, focus). Everything the dashboard shows
//! (roles, filtered list, page count, page slice) is recomputed from those
//! on demand and never cached. All transitions go through [`update`].

use crate::api::ApiError;
use crate::machine::{Machine, MachineId};

/// Records per page.
pub const PAGE_SIZE: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
}

/// Role restriction applied on top of the text search.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RoleFilter {
    #[default]
    All,
    Only(String),
}

impl RoleFilter {
    pub fn matches(&self, role: &str) -> bool {
        match self {
            RoleFilter::All => true,
            RoleFilter::Only(wanted) => wanted == role,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardMsg {
    /// The machine-list fetch resolved with a snapshot.
    Loaded(Vec<Machine>),
    /// The machine-list fetch failed.
    LoadFailed(ApiError),
    SearchChanged(String),
    RoleSelected(RoleFilter),
    NextPage,
    PrevPage,
    /// Jump to a 1-based page number.
    GoToPage(usize),
    /// User clicked a visible machine.
    Select(MachineId),
    /// Close control or click outside the enlarged panel.
    Dismiss,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineBoard {
    load: LoadState,
    machines: Vec<Machine>,
    search: String,
    role: RoleFilter,
    page: usize,
    focused: Option<MachineId>,
}

impl Default for MachineBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl MachineBoard {
    pub fn new() -> Self {
        Self {
            load: LoadState::Loading,
            machines: Vec::new(),
            search: String::new(),
            role: RoleFilter::All,
            page: 1,
            focused: None,
        }
    }

    pub fn load_state(&self) -> LoadState {
        self.load
    }

    pub fn is_loading(&self) -> bool {
        self.load == LoadState::Loading
    }

    pub fn machines(&self) -> &[Machine] {
        &self.machines
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn role(&self) -> &RoleFilter {
        &self.role
    }

    /// Current 1-based page. Stays at 1 while the filtered list is empty.
    pub fn current_page(&self) -> usize {
        self.page
    }

    /// Distinct roles across the whole snapshot, in first-seen order.
    pub fn unique_roles(&self) -> Vec<&str> {
        let mut roles: Vec<&str> = Vec::new();
        for machine in &self.machines {
            if !roles.contains(&machine.role.as_str()) {
                roles.push(&machine.role);
            }
        }
        roles
    }

    pub fn filtered(&self) -> Vec<&Machine> {
        let needle = self.search.to_lowercase();
        self.machines
            .iter()
            .filter(|m| m.name.to_lowercase().contains(&needle) && self.role.matches(&m.role))
            .collect()
    }

    /// `ceil(filtered / PAGE_SIZE)`; zero when nothing matches.
    pub fn total_pages(&self) -> usize {
        self.filtered().len().div_ceil(PAGE_SIZE)
    }

    pub fn page_slice(&self) -> Vec<&Machine> {
        self.filtered()
            .into_iter()
            .skip((self.page - 1) * PAGE_SIZE)
            .take(PAGE_SIZE)
            .collect()
    }

    pub fn can_prev(&self) -> bool {
        self.page > 1
    }

    pub fn can_next(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn page_numbers(&self) -> std::ops::RangeInclusive<usize> {
        1..=self.total_pages()
    }

    pub fn focused(&self) -> Option<&Machine> {
        let id = self.focused?;
        self.machines.iter().find(|m| m.id == id)
    }

    /// Header line, e.g. "12 machines shown | Page 1 of 3".
    pub fn summary(&self) -> String {
        let total = self.total_pages();
        let page = if total == 0 { 0 } else { self.page };
        format!(
            "{} machines shown | Page {} of {}",
            self.page_slice().len(),
            page,
            total
        )
    }

    fn is_filtered_in(&self, id: MachineId) -> bool {
        self.filtered().iter().any(|m| m.id == id)
    }

    fn filters_changed(&mut self) {
        self.page = 1;
        if let Some(id) = self.focused {
            if !self.is_filtered_in(id) {
                self.focused = None;
            }
        }
    }
}

/// Pure update function: applies a message and returns the next board.
pub fn update(mut board: MachineBoard, msg: BoardMsg) -> MachineBoard {
    match msg {
        BoardMsg::Loaded(machines) => {
            if board.load == LoadState::Ready {
                log::warn!("Ignoring machine snapshot delivered after load completed");
                return board;
            }
            log::info!("Loaded {} machines", machines.len());
            board.machines = machines;
            board.load = LoadState::Ready;
            board.page = 1;
            board.focused = None;
        }
        BoardMsg::LoadFailed(err) => {
            if board.load == LoadState::Ready {
                log::warn!("Ignoring fetch failure after load completed: {}", err);
                return board;
            }
            log::error!("Failed to fetch machines: {}", err);
            board.machines.clear();
            board.load = LoadState::Ready;
            board.page = 1;
            board.focused = None;
        }
        BoardMsg::SearchChanged(text) => {
            board.search = text;
            board.filters_changed();
        }
        BoardMsg::RoleSelected(role) => {
            board.role = role;
            board.filters_changed();
        }
        BoardMsg::NextPage => {
            if board.can_next() {
                board.page += 1;
            }
        }
        BoardMsg::PrevPage => {
            if board.can_prev() {
                board.page -= 1;
            }
        }
        BoardMsg::GoToPage(page) => {
            if (1..=board.total_pages()).contains(&page) {
                board.page = page;
            }
        }
        BoardMsg::Select(id) => {
            if board.is_filtered_in(id) {
                board.focused = Some(id);
            }
        }
        BoardMsg::Dismiss => {
            board.focused = None;
        }
    }
    board
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MachineEntry;
    use crate::machine::{machines_from_entries, DEFAULT_ROLE};

    /// 36 records: 12 servers (mixed case), 24 workstations.
    fn fixture() -> Vec<Machine> {
        let entries = (1..=36)
            .map(|i| {
                let token = if i % 3 != 0 {
                    format!("Workstation-{:02}", i)
                } else if i % 2 == 0 {
                    format!("file-server-{:02}", i)
                } else {
                    format!("Server-{:02}", i)
                };
                MachineEntry {
                    hostport: None,
                    token,
                }
            })
            .collect();
        machines_from_entries(entries)
    }

    fn ready(machines: Vec<Machine>) -> MachineBoard {
        update(MachineBoard::new(), BoardMsg::Loaded(machines))
    }

    fn with_role(mut machines: Vec<Machine>, ids: &[MachineId], role: &str) -> Vec<Machine> {
        for m in machines.iter_mut().filter(|m| ids.contains(&m.id)) {
            m.role = role.to_string();
        }
        machines
    }

    fn ids(machines: &[&Machine]) -> Vec<MachineId> {
        machines.iter().map(|m| m.id).collect()
    }

    #[test]
    fn starts_loading_and_empty() {
        let board = MachineBoard::new();
        assert!(board.is_loading());
        assert!(board.filtered().is_empty());
        assert_eq!(board.current_page(), 1);
    }

    #[test]
    fn full_snapshot_first_page() {
        let board = ready(fixture());
        assert_eq!(board.load_state(), LoadState::Ready);
        assert_eq!(board.unique_roles(), vec![DEFAULT_ROLE]);
        assert_eq!(board.total_pages(), 3);
        assert_eq!(ids(&board.page_slice()), (1..=12).collect::<Vec<_>>());
        assert_eq!(board.summary(), "12 machines shown | Page 1 of 3");
    }

    #[test]
    fn search_is_case_insensitive_and_resets_page() {
        let board = ready(fixture());
        let board = update(board, BoardMsg::NextPage);
        assert_eq!(board.current_page(), 2);

        let board = update(board, BoardMsg::SearchChanged("Server".to_string()));
        assert_eq!(board.current_page(), 1);
        let filtered = board.filtered();
        assert_eq!(filtered.len(), 12);
        assert!(filtered
            .iter()
            .all(|m| m.name.to_lowercase().contains("server")));
        assert!(filtered.iter().any(|m| m.name.starts_with("file-server")));
        assert_eq!(board.total_pages(), 1);
    }

    #[test]
    fn empty_search_matches_everything() {
        let board = ready(fixture());
        let board = update(board, BoardMsg::SearchChanged("srv".to_string()));
        let board = update(board, BoardMsg::SearchChanged(String::new()));
        assert_eq!(board.filtered().len(), 36);
    }

    #[test]
    fn role_filter_is_exact_and_resets_page() {
        let machines = with_role(fixture(), &[2, 5, 30], "Gerente");
        let board = ready(machines);
        assert_eq!(board.unique_roles(), vec![DEFAULT_ROLE, "Gerente"]);

        let board = update(board, BoardMsg::GoToPage(3));
        assert_eq!(board.current_page(), 3);

        let board = update(board, BoardMsg::RoleSelected(RoleFilter::Only("Gerente".into())));
        assert_eq!(board.current_page(), 1);
        assert_eq!(ids(&board.filtered()), vec![2, 5, 30]);

        let board = update(board, BoardMsg::RoleSelected(RoleFilter::Only("gerente".into())));
        assert!(board.filtered().is_empty());

        let board = update(board, BoardMsg::RoleSelected(RoleFilter::All));
        assert_eq!(board.filtered().len(), 36);
    }

    #[test]
    fn search_and_role_combine() {
        let machines = with_role(fixture(), &[3, 4], "Gerente");
        let board = ready(machines);
        let board = update(board, BoardMsg::RoleSelected(RoleFilter::Only("Gerente".into())));
        let board = update(board, BoardMsg::SearchChanged("SERVER".to_string()));
        assert_eq!(ids(&board.filtered()), vec![3]);
    }

    #[test]
    fn navigation_stops_at_boundaries() {
        let board = ready(fixture());
        assert!(!board.can_prev());
        let board = update(board, BoardMsg::PrevPage);
        assert_eq!(board.current_page(), 1);

        let board = update(board, BoardMsg::NextPage);
        let board = update(board, BoardMsg::NextPage);
        assert_eq!(board.current_page(), 3);
        assert!(!board.can_next());
        assert_eq!(ids(&board.page_slice()), (25..=36).collect::<Vec<_>>());

        let board = update(board, BoardMsg::NextPage);
        assert_eq!(board.current_page(), 3);
    }

    #[test]
    fn go_to_page_ignores_out_of_range() {
        let board = ready(fixture());
        let board = update(board, BoardMsg::GoToPage(0));
        assert_eq!(board.current_page(), 1);
        let board = update(board, BoardMsg::GoToPage(4));
        assert_eq!(board.current_page(), 1);
        let board = update(board, BoardMsg::GoToPage(2));
        assert_eq!(board.current_page(), 2);
        assert_eq!(board.page_numbers().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn partial_last_page() {
        let board = ready(fixture().into_iter().take(13).collect());
        assert_eq!(board.total_pages(), 2);
        let board = update(board, BoardMsg::NextPage);
        assert_eq!(ids(&board.page_slice()), vec![13]);
        assert_eq!(board.summary(), "1 machines shown | Page 2 of 2");
    }

    #[test]
    fn empty_result_has_zero_pages() {
        let board = ready(fixture());
        let board = update(board, BoardMsg::SearchChanged("nothing-matches".to_string()));
        assert_eq!(board.total_pages(), 0);
        assert!(board.page_slice().is_empty());
        assert!(!board.can_prev());
        assert!(!board.can_next());
        assert_eq!(board.page_numbers().count(), 0);
        assert_eq!(board.current_page(), 1);
        assert_eq!(board.summary(), "0 machines shown | Page 0 of 0");

        let board = update(board, BoardMsg::NextPage);
        let board = update(board, BoardMsg::PrevPage);
        assert_eq!(board.current_page(), 1);
    }

    #[test]
    fn select_and_dismiss() {
        let board = ready(fixture());
        let board = update(board, BoardMsg::Select(5));
        assert_eq!(board.focused().map(|m| m.id), Some(5));
        let board = update(board, BoardMsg::Dismiss);
        assert!(board.focused().is_none());
    }

    #[test]
    fn select_ignores_filtered_out_ids() {
        let board = ready(fixture());
        let board = update(board, BoardMsg::SearchChanged("Server".to_string()));
        let board = update(board, BoardMsg::Select(1));
        assert!(board.focused().is_none());
        let board = update(board, BoardMsg::Select(99));
        assert!(board.focused().is_none());
    }

    #[test]
    fn filter_change_drops_focus_outside_result() {
        let board = ready(fixture());
        let board = update(board, BoardMsg::Select(3));
        let board = update(board, BoardMsg::SearchChanged("server".to_string()));
        assert_eq!(board.focused().map(|m| m.id), Some(3));
        let board = update(board, BoardMsg::SearchChanged("workstation".to_string()));
        assert!(board.focused().is_none());
    }

    #[test]
    fn fetch_failure_settles_empty() {
        let board = update(
            MachineBoard::new(),
            BoardMsg::LoadFailed(ApiError::Server { status: 500 }),
        );
        assert_eq!(board.load_state(), LoadState::Ready);
        assert!(board.machines().is_empty());
        assert_eq!(board.total_pages(), 0);
    }

    #[test]
    fn ready_never_reverts_or_reloads() {
        let board = ready(fixture());
        let board = update(board, BoardMsg::Select(2));
        let board = update(board, BoardMsg::Loaded(Vec::new()));
        assert_eq!(board.machines().len(), 36);
        assert_eq!(board.focused().map(|m| m.id), Some(2));

        let board = update(board, BoardMsg::LoadFailed(ApiError::Network("late".into())));
        assert_eq!(board.load_state(), LoadState::Ready);
        assert_eq!(board.machines().len(), 36);
    }

    #[test]
    fn ui_messages_while_loading_do_not_finish_loading() {
        let board = update(MachineBoard::new(), BoardMsg::SearchChanged("x".into()));
        let board = update(board, BoardMsg::NextPage);
        assert!(board.is_loading());
        let board = update(board, BoardMsg::Loaded(fixture()));
        assert_eq!(board.search(), "x");
        assert_eq!(board.current_page(), 1);
    }
}
