// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Request bodies for the Classbook backend. Field names match what the
// backend expects — note `desc`, not `description`, on service creation.

use classbook_core::types::{AccountType, ServiceId, UserId};
use classbook_core::validate::ServiceDraft;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "accountType")]
    pub account_type: AccountType,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body for `POST /service` and `PUT /service/{id}`.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceRequest {
    pub name: String,
    pub desc: String,
    pub start_date_time: DateTime<Utc>,
    pub length: i64,
    pub capacity: u32,
    pub price: f64,
}

impl From<&ServiceDraft> for ServiceRequest {
    fn from(draft: &ServiceDraft) -> Self {
        Self {
            name: draft.name.clone(),
            desc: draft.description.clone(),
            start_date_time: draft.start,
            length: draft.length_minutes,
            capacity: draft.capacity,
            price: draft.price,
        }
    }
}

/// Body for `POST /appointment` — identifiers only.
#[derive(Debug, Clone, Serialize)]
pub struct AppointmentRequest {
    #[serde(rename = "serviceId")]
    pub service_id: ServiceId,
    #[serde(rename = "userId")]
    pub user_id: UserId,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn service_request_uses_desc_field() {
        let draft = ServiceDraft {
            name: "Yoga".into(),
            description: "Easy yoga class".into(),
            start: Utc.with_ymd_and_hms(2023, 5, 7, 11, 0, 0).unwrap(),
            length_minutes: 120,
            capacity: 10,
            price: 15.0,
        };
        let json = serde_json::to_value(ServiceRequest::from(&draft)).unwrap();
        assert_eq!(json["desc"], "Easy yoga class");
        assert!(json.get("description").is_none());
        assert_eq!(json["length"], 120);
    }
}
