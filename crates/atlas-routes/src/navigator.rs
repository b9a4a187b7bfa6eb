//! Active-route state for a navigation shell.
//!
//! ```text
//! start ──▶ root target ──navigate(found)──▶ route ──back──▶ previous route
//!                 ▲   └──navigate(not found)──┐
//!                 └───────── unchanged ◀──────┘
//! ```
//!
//! There is no terminal state; a viewer runs until the process exits.

use crate::error::RouteError;
use crate::table::{RouteEntry, RouteTable};

#[derive(Debug, Clone)]
pub struct Navigator<'t> {
    table: &'t RouteTable,
    active: &'t RouteEntry,
    history: Vec<&'t RouteEntry>,
}

impl<'t> Navigator<'t> {
    /// Start at the route `/` redirects to.
    #[must_use]
    pub fn new(table: &'t RouteTable) -> Self {
        Self {
            table,
            active: table.root_target(),
            history: Vec::new(),
        }
    }

    /// Start at `location` instead of the root.
    pub fn starting_at(table: &'t RouteTable, location: &str) -> Result<Self, RouteError> {
        let active = table.resolve_location(location)?;
        Ok(Self {
            table,
            active,
            history: Vec::new(),
        })
    }

    #[must_use]
    pub const fn active(&self) -> &'t RouteEntry {
        self.active
    }

    /// Move to `location`.
    ///
    /// On `NotFound` the active route is left unchanged and the error is
    /// returned for the shell to present. Navigating to the active route is
    /// a no-op that does not grow the history.
    pub fn navigate(&mut self, location: &str) -> Result<&'t RouteEntry, RouteError> {
        let next = self.table.resolve_location(location)?;
        if next.path != self.active.path {
            tracing::debug!(from = %self.active.path, to = %next.path, "navigate");
            self.history.push(self.active);
            self.active = next;
        }
        Ok(next)
    }

    /// Return to the previous route, if any.
    pub fn back(&mut self) -> Option<&'t RouteEntry> {
        let previous = self.history.pop()?;
        tracing::debug!(from = %self.active.path, to = %previous.path, "back");
        self.active = previous;
        Some(previous)
    }

    #[must_use]
    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use atlas_core::PageId;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn starts_at_root_target() {
        let nav = Navigator::new(RouteTable::canonical());
        assert_eq!(nav.active().page, PageId::ForeignLlm);
        assert!(!nav.can_go_back());
    }

    #[test]
    fn not_found_leaves_active_route() {
        let mut nav = Navigator::new(RouteTable::canonical());
        nav.navigate("/prompts").unwrap();

        let error = nav.navigate("/nonexistent").unwrap_err();
        assert_eq!(
            error,
            RouteError::NotFound {
                path: "/nonexistent".into()
            }
        );
        assert_eq!(nav.active().page, PageId::Prompts);
    }

    #[test]
    fn unknown_document_does_not_fall_back_to_root() {
        let mut nav = Navigator::starting_at(RouteTable::canonical(), "/about").unwrap();
        for location in ["/bogus.html", ""] {
            assert!(matches!(
                nav.navigate(location),
                Err(RouteError::NotFound { .. })
            ));
            assert_eq!(nav.active().page, PageId::About);
        }
        assert!(!nav.can_go_back());
    }

    #[test]
    fn back_walks_history() {
        let mut nav = Navigator::new(RouteTable::canonical());
        nav.navigate("/ai-drawing").unwrap();
        nav.navigate("index.html#/favorites").unwrap();
        nav.navigate("/favorites").unwrap();

        assert_eq!(nav.back().map(|r| r.page), Some(PageId::AiDrawing));
        assert_eq!(nav.back().map(|r| r.page), Some(PageId::ForeignLlm));
        assert_eq!(nav.back(), None);
        assert_eq!(nav.active().page, PageId::ForeignLlm);
    }

    #[test]
    fn root_redirect_counts_as_its_target() {
        let mut nav = Navigator::starting_at(RouteTable::canonical(), "/about").unwrap();
        nav.navigate("/").unwrap();
        assert_eq!(nav.active().path, "/foreign-llm");
        nav.navigate("/foreign-llm").unwrap();
        assert_eq!(nav.back().map(|r| r.page), Some(PageId::About));
    }

    #[test]
    fn starting_at_unknown_location_fails() {
        assert!(Navigator::starting_at(RouteTable::canonical(), "/missing").is_err());
    }
}
