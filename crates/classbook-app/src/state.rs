// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Global application state — reactive signals for the Dioxus UI.
//
// Session and selection live here as typed values instead of being threaded
// through navigation payloads; every page reads them via `use_context`.

use classbook_core::catalog::Catalog;
use classbook_core::types::{Service, User};

/// Shared state accessible to all pages via `use_context`.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// The signed-in user, if any. Single source of truth for membership.
    pub session: Option<User>,
    /// The service catalog with its active filters.
    pub catalog: Catalog,
    /// The service most recently opened in the detail view.
    pub selected: Option<Service>,
    /// Whether a catalog fetch is in flight.
    pub loading_catalog: bool,
    /// Status message for user feedback.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the session belongs to a business account.
    pub fn is_business(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|u| u.account_type.is_business())
    }

    /// First name for greetings, when signed in.
    pub fn display_name(&self) -> Option<&str> {
        self.session.as_ref().map(|u| u.first_name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use classbook_core::types::{AccountType, UserId};

    fn user(account_type: AccountType) -> User {
        User {
            id: UserId::new(),
            first_name: "Test".into(),
            last_name: "User".into(),
            email: "test@email.com".into(),
            password: "pass".into(),
            account_type,
            classes: Vec::new(),
        }
    }

    #[test]
    fn business_flag_follows_session() {
        let mut state = AppState::new();
        assert!(!state.is_business());
        state.session = Some(user(AccountType::Business));
        assert!(state.is_business());
        state.session = Some(user(AccountType::User));
        assert!(!state.is_business());
    }

    #[test]
    fn display_name_requires_session() {
        let mut state = AppState::new();
        assert!(state.display_name().is_none());
        state.session = Some(user(AccountType::User));
        assert_eq!(state.display_name(), Some("Test"));
    }
}
