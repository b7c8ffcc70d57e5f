// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Booking state machine and membership bookkeeping.
//
// The joined flag is a single source of truth updated only after the backend
// confirms; `Joining`/`Leaving` mark the in-flight window so the UI can
// disable the button instead of updating optimistically.

use crate::error::{ClassbookError, Result};
use crate::types::{AppointmentId, Service, ServiceAppointment, ServiceId, User};

/// Where a user stands with respect to one service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BookingStatus {
    #[default]
    NotJoined,
    /// Join requested, awaiting backend confirmation.
    Joining,
    Joined,
    /// Leave requested, awaiting backend confirmation.
    Leaving,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotJoined => "not joined",
            Self::Joining => "joining",
            Self::Joined => "joined",
            Self::Leaving => "leaving",
        }
    }
}

/// Per-service booking state for the current user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BookingState {
    status: BookingStatus,
}

impl BookingState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial state from the membership list, for when a service page opens.
    pub fn from_membership(joined: bool) -> Self {
        Self {
            status: if joined {
                BookingStatus::Joined
            } else {
                BookingStatus::NotJoined
            },
        }
    }

    pub fn status(&self) -> BookingStatus {
        self.status
    }

    pub fn is_joined(&self) -> bool {
        self.status == BookingStatus::Joined
    }

    /// A request is in flight; the UI should disable the join/leave button.
    pub fn is_busy(&self) -> bool {
        matches!(self.status, BookingStatus::Joining | BookingStatus::Leaving)
    }

    /// Start a join. Only valid from `NotJoined`.
    pub fn begin_join(&mut self) -> Result<()> {
        self.transition(BookingStatus::NotJoined, BookingStatus::Joining, "join")
    }

    /// The backend confirmed the join.
    pub fn confirm_join(&mut self) -> Result<()> {
        self.transition(BookingStatus::Joining, BookingStatus::Joined, "confirm join")
    }

    /// The join request failed; revert to `NotJoined`.
    pub fn fail_join(&mut self) -> Result<()> {
        self.transition(BookingStatus::Joining, BookingStatus::NotJoined, "fail join")
    }

    /// Start a leave. Only valid from `Joined`.
    pub fn begin_leave(&mut self) -> Result<()> {
        self.transition(BookingStatus::Joined, BookingStatus::Leaving, "leave")
    }

    /// The backend confirmed the cancellation (or there was nothing to cancel).
    pub fn confirm_leave(&mut self) -> Result<()> {
        self.transition(BookingStatus::Leaving, BookingStatus::NotJoined, "confirm leave")
    }

    /// The cancel request failed; revert to `Joined`.
    pub fn fail_leave(&mut self) -> Result<()> {
        self.transition(BookingStatus::Leaving, BookingStatus::Joined, "fail leave")
    }

    fn transition(
        &mut self,
        expected: BookingStatus,
        next: BookingStatus,
        action: &'static str,
    ) -> Result<()> {
        if self.status != expected {
            return Err(ClassbookError::InvalidTransition {
                from: self.status.as_str(),
                action,
            });
        }
        self.status = next;
        Ok(())
    }
}

/// Scan a user's appointment list for the one matching `service_id`.
///
/// Returns `None` when local and remote state disagree (the user was never
/// recorded as having joined); the caller then skips the cancel call.
pub fn find_appointment(
    appointments: &[ServiceAppointment],
    service_id: ServiceId,
) -> Option<AppointmentId> {
    appointments
        .iter()
        .find(|sa| sa.service.id == service_id)
        .map(|sa| sa.appointment.id)
}

impl User {
    /// Whether this user's membership list contains the service.
    pub fn has_joined(&self, service_id: ServiceId) -> bool {
        self.classes.iter().any(|s| s.id == service_id)
    }

    /// Record a confirmed join. Idempotent: joining a class already in the
    /// list does not duplicate it.
    pub fn join_class(&mut self, service: Service) {
        if !self.has_joined(service.id) {
            self.classes.push(service);
        }
    }

    /// Record a confirmed leave. Removing an absent entry is a no-op, never
    /// an error.
    pub fn leave_class(&mut self, service_id: ServiceId) {
        self.classes.retain(|s| s.id != service_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AccountType, Appointment, UserId};
    use chrono::{TimeZone, Utc};

    fn test_service(name: &str) -> Service {
        Service::new(
            name.into(),
            "A service for testing".into(),
            Utc.with_ymd_and_hms(2023, 4, 19, 12, 0, 0).unwrap(),
            120,
            10,
            200.0,
        )
    }

    fn test_user() -> User {
        User {
            id: UserId::new(),
            first_name: "Test".into(),
            last_name: "User".into(),
            email: "test@email.com".into(),
            password: "pass".into(),
            account_type: AccountType::User,
            classes: Vec::new(),
        }
    }

    #[test]
    fn join_then_leave_returns_to_not_joined() {
        let mut state = BookingState::new();
        state.begin_join().unwrap();
        assert!(state.is_busy());
        state.confirm_join().unwrap();
        assert!(state.is_joined());
        state.begin_leave().unwrap();
        state.confirm_leave().unwrap();
        assert_eq!(state.status(), BookingStatus::NotJoined);
    }

    #[test]
    fn failed_join_reverts() {
        let mut state = BookingState::new();
        state.begin_join().unwrap();
        state.fail_join().unwrap();
        assert_eq!(state.status(), BookingStatus::NotJoined);
    }

    #[test]
    fn failed_leave_stays_joined() {
        let mut state = BookingState::from_membership(true);
        state.begin_leave().unwrap();
        state.fail_leave().unwrap();
        assert!(state.is_joined());
    }

    #[test]
    fn cannot_join_twice() {
        let mut state = BookingState::new();
        state.begin_join().unwrap();
        assert!(matches!(
            state.begin_join(),
            Err(ClassbookError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn cannot_leave_when_not_joined() {
        let mut state = BookingState::new();
        assert!(state.begin_leave().is_err());
    }

    #[test]
    fn join_then_leave_clears_membership() {
        let mut user = test_user();
        let svc = test_service("Yoga");
        let id = svc.id;
        user.join_class(svc);
        assert!(user.has_joined(id));
        user.leave_class(id);
        assert!(!user.has_joined(id));
        assert!(user.classes.is_empty());
    }

    #[test]
    fn leaving_without_joining_is_a_no_op() {
        let mut user = test_user();
        user.join_class(test_service("Painting"));
        let before = user.classes.clone();
        user.leave_class(ServiceId::new());
        assert_eq!(user.classes, before);
    }

    #[test]
    fn join_is_idempotent() {
        let mut user = test_user();
        let svc = test_service("Yoga");
        user.join_class(svc.clone());
        user.join_class(svc);
        assert_eq!(user.classes.len(), 1);
    }

    #[test]
    fn find_appointment_matches_on_service_id() {
        let svc = test_service("Yoga");
        let user = test_user();
        let appt = Appointment {
            id: AppointmentId::new(),
            service_id: svc.id,
            user_id: user.id,
        };
        let list = vec![ServiceAppointment {
            appointment: appt.clone(),
            service: svc.clone(),
        }];
        assert_eq!(find_appointment(&list, svc.id), Some(appt.id));
        assert_eq!(find_appointment(&list, ServiceId::new()), None);
    }
}
