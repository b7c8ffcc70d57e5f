// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Client-side form validation, run before anything is posted to the backend.
//
// Error messages accumulate into a single string separated by " -- " so the
// form can show every problem at once.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::types::AccountType;

/// Separator between accumulated error messages.
const SEP: &str = " -- ";

/// Form-bound registration fields, all strings as they arrive from inputs.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub is_business: bool,
}

impl RegistrationForm {
    pub fn account_type(&self) -> AccountType {
        if self.is_business {
            AccountType::Business
        } else {
            AccountType::User
        }
    }

    fn all_fields_filled(&self) -> bool {
        !self.first_name.is_empty()
            && !self.last_name.is_empty()
            && !self.email.is_empty()
            && !self.password.is_empty()
    }

    /// Required-field and password-match checks. `Err` carries a non-empty
    /// message and blocks submission.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if !self.all_fields_filled() {
            return Err("ERROR All fields are required".into());
        }
        if self.password != self.confirm_password {
            return Err("ERROR Passwords must match".into());
        }
        Ok(())
    }
}

/// Validated fields for a new or edited service, ready for the API layer.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceDraft {
    pub name: String,
    pub description: String,
    pub start: DateTime<Utc>,
    pub length_minutes: i64,
    pub capacity: u32,
    pub price: f64,
}

/// Form-bound service creation fields.
#[derive(Debug, Clone, Default)]
pub struct ServiceForm {
    pub name: String,
    pub description: String,
    /// `datetime-local` input value, e.g. "2023-04-19T12:00".
    pub start: String,
    pub length_minutes: String,
    pub capacity: String,
    pub price: String,
}

impl ServiceForm {
    /// Per-field required checks, accumulated into one message.
    pub fn validate(&self) -> std::result::Result<ServiceDraft, String> {
        let mut msg = String::new();
        if self.name.is_empty() {
            msg += "ERROR Class Name Required";
            msg += SEP;
        }
        if self.description.is_empty() {
            msg += "ERROR Class Description Required";
            msg += SEP;
        }
        let start = parse_start(&self.start);
        if start.is_none() {
            msg += "ERROR Start Time Required";
            msg += SEP;
        }
        let length = self.length_minutes.parse::<i64>().ok().filter(|l| *l > 0);
        if length.is_none() {
            msg += "ERROR Length Required";
            msg += SEP;
        }
        let capacity = self.capacity.parse::<u32>().ok().filter(|c| *c > 0);
        if capacity.is_none() {
            msg += "ERROR Please specify how many participants";
            msg += SEP;
        }
        let price = self.price.parse::<f64>().ok().filter(|p| *p >= 0.0);
        if price.is_none() {
            msg += "ERROR Please specify a price";
            msg += SEP;
        }

        // A None always comes with an accumulated message.
        let (Some(start), Some(length), Some(capacity), Some(price)) =
            (start, length, capacity, price)
        else {
            return Err(msg.trim_end_matches(SEP).to_owned());
        };
        if !msg.is_empty() {
            return Err(msg.trim_end_matches(SEP).to_owned());
        }

        Ok(ServiceDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            start,
            length_minutes: length,
            capacity,
            price,
        })
    }
}

/// Parse a `datetime-local` input value ("%Y-%m-%dT%H:%M", optionally with
/// seconds) as UTC.
pub fn parse_start(value: &str) -> Option<DateTime<Utc>> {
    let naive = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .ok()?;
    Some(naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn filled_registration() -> RegistrationForm {
        RegistrationForm {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@email.com".into(),
            password: "secret".into(),
            confirm_password: "secret".into(),
            is_business: false,
        }
    }

    #[test]
    fn registration_passes_when_filled_and_matching() {
        assert!(filled_registration().validate().is_ok());
    }

    #[test]
    fn password_mismatch_blocks_with_message() {
        let mut form = filled_registration();
        form.confirm_password = "different".into();
        let err = form.validate().unwrap_err();
        assert!(!err.is_empty());
        assert_eq!(err, "ERROR Passwords must match");
    }

    #[test]
    fn missing_field_blocks_registration() {
        let mut form = filled_registration();
        form.email.clear();
        assert!(form.validate().is_err());
    }

    #[test]
    fn business_checkbox_selects_account_type() {
        let mut form = filled_registration();
        assert_eq!(form.account_type(), AccountType::User);
        form.is_business = true;
        assert_eq!(form.account_type(), AccountType::Business);
    }

    #[test]
    fn service_form_accumulates_errors() {
        let form = ServiceForm::default();
        let err = form.validate().unwrap_err();
        assert!(err.contains("Class Name Required"));
        assert!(err.contains("Class Description Required"));
        assert!(err.contains("Start Time Required"));
        assert!(err.contains(" -- "));
    }

    #[test]
    fn valid_service_form_produces_draft() {
        let form = ServiceForm {
            name: "Test Service Two".into(),
            description: "A new test service to create".into(),
            start: "2023-04-20T12:00".into(),
            length_minutes: "120".into(),
            capacity: "10".into(),
            price: "100".into(),
        };
        let draft = form.validate().unwrap();
        assert_eq!(draft.start, Utc.with_ymd_and_hms(2023, 4, 20, 12, 0, 0).unwrap());
        assert_eq!(draft.length_minutes, 120);
        assert_eq!(draft.capacity, 10);
    }

    #[test]
    fn zero_length_is_rejected() {
        let form = ServiceForm {
            name: "X".into(),
            description: "Y".into(),
            start: "2023-04-20T12:00".into(),
            length_minutes: "0".into(),
            capacity: "10".into(),
            price: "5".into(),
        };
        assert!(form.validate().unwrap_err().contains("Length Required"));
    }

    #[test]
    fn parse_start_accepts_datetime_local() {
        assert!(parse_start("2023-04-19T12:00").is_some());
        assert!(parse_start("not a date").is_none());
    }
}
