// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Classbook scheduling client.
//
// Serde renames follow the backend's JSON field names (`serviceId`,
// `start_date_time`, `firstName`, ...) so these types double as the wire
// format for the HTTP client.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a service offering (a bookable class).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServiceId(pub Uuid);

impl ServiceId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ServiceId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ServiceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub Uuid);

impl UserId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for an appointment (a join record).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AppointmentId(pub Uuid);

impl AppointmentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AppointmentId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for AppointmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of account: an end user who joins classes, or a business that
/// offers them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    User,
    Business,
}

impl AccountType {
    pub fn is_business(&self) -> bool {
        matches!(self, Self::Business)
    }
}

/// A bookable, time-boxed class/offering created by a business.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    #[serde(rename = "serviceId")]
    pub id: ServiceId,
    pub name: String,
    pub description: String,
    /// When the class starts.
    #[serde(rename = "start_date_time")]
    pub start: DateTime<Utc>,
    /// Duration in minutes. Must be positive; enforced at form validation.
    #[serde(rename = "length")]
    pub length_minutes: i64,
    /// Maximum number of participants.
    pub capacity: u32,
    pub price: f64,
}

impl Service {
    pub fn new(
        name: String,
        description: String,
        start: DateTime<Utc>,
        length_minutes: i64,
        capacity: u32,
        price: f64,
    ) -> Self {
        Self {
            id: ServiceId::new(),
            name,
            description,
            start,
            length_minutes,
            capacity,
            price,
        }
    }

    /// When the class ends: start plus its length.
    pub fn end(&self) -> DateTime<Utc> {
        self.start + Duration::minutes(self.length_minutes)
    }
}

/// A registered account. The user owns its membership list; the services in
/// `classes` are value copies of backend records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "ID")]
    pub id: UserId,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub email: String,
    /// Opaque; posted per call, never interpreted client-side.
    pub password: String,
    #[serde(rename = "accountType")]
    pub account_type: AccountType,
    /// Services this user has joined.
    pub classes: Vec<Service>,
}

/// A record of a user joining a specific service occurrence. References are
/// by identifier; the paired `Service` for display travels in
/// [`ServiceAppointment`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    #[serde(rename = "ID")]
    pub id: AppointmentId,
    #[serde(rename = "serviceId")]
    pub service_id: ServiceId,
    #[serde(rename = "userId")]
    pub user_id: UserId,
}

/// An appointment paired with its service, as returned by
/// `GET /user/{id}/service-appointments`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceAppointment {
    pub appointment: Appointment,
    pub service: Service,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn end_is_start_plus_length() {
        let start = Utc.with_ymd_and_hms(2023, 4, 11, 11, 0, 0).unwrap();
        let svc = Service::new("Yoga".into(), "Easy yoga class".into(), start, 120, 10, 15.0);
        assert_eq!(svc.end(), Utc.with_ymd_and_hms(2023, 4, 11, 13, 0, 0).unwrap());
    }

    #[test]
    fn service_uses_backend_field_names() {
        let start = Utc.with_ymd_and_hms(2023, 5, 7, 11, 0, 0).unwrap();
        let svc = Service::new("Painting".into(), "Intro to painting".into(), start, 90, 8, 20.0);
        let json = serde_json::to_value(&svc).unwrap();
        assert!(json.get("serviceId").is_some());
        assert!(json.get("start_date_time").is_some());
        assert_eq!(json["length"], 90);
    }

    #[test]
    fn account_type_is_lowercase_on_the_wire() {
        assert_eq!(
            serde_json::to_string(&AccountType::Business).unwrap(),
            "\"business\""
        );
        let parsed: AccountType = serde_json::from_str("\"user\"").unwrap();
        assert_eq!(parsed, AccountType::User);
    }
}
