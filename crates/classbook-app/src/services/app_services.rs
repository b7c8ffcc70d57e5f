// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Central service layer — owns the backend API client and the persisted app
// config, and provides async methods for the Dioxus UI to call.
//
// The client is rebuilt when the config changes (the base URL may move), so
// it sits behind an `Arc<Mutex<>>` like the config itself. All fields are
// cheaply cloneable so the struct can be passed into closures and async
// blocks without lifetime issues.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use classbook_api::requests::RegisterRequest;
use classbook_api::ApiClient;
use classbook_core::booking::find_appointment;
use classbook_core::error::Result;
use classbook_core::types::{
    Appointment, AppointmentId, Service, ServiceAppointment, ServiceId, User, UserId,
};
use classbook_core::validate::{RegistrationForm, ServiceDraft};
use classbook_core::AppConfig;
use tracing::{info, warn};

use super::data_dir;

/// Shared application services accessible from all Dioxus components via
/// `use_context::<AppServices>()`.
#[derive(Clone)]
pub struct AppServices {
    api: Arc<Mutex<ApiClient>>,
    config: Arc<Mutex<AppConfig>>,
    data_dir: PathBuf,
}

impl AppServices {
    /// Initialise the service layer. Call once at app startup.
    ///
    /// Loads the persisted config (or defaults) and builds the API client
    /// against the configured base URL.
    pub fn init() -> Result<Self> {
        let dir = data_dir::data_dir();
        info!(path = %dir.display(), "initialising app services");

        let config = load_config(&dir).unwrap_or_default();
        let api = ApiClient::new(&config)?;

        Ok(Self {
            api: Arc::new(Mutex::new(api)),
            config: Arc::new(Mutex::new(config)),
            data_dir: dir,
        })
    }

    /// Service layer with default config, for when the persisted config is
    /// unreadable or points at an unparseable URL.
    pub fn fallback() -> Result<Self> {
        let config = AppConfig::default();
        let api = ApiClient::new(&config)?;
        Ok(Self {
            api: Arc::new(Mutex::new(api)),
            config: Arc::new(Mutex::new(config)),
            data_dir: data_dir::data_dir(),
        })
    }

    fn api(&self) -> ApiClient {
        self.api.lock().expect("api lock poisoned").clone()
    }

    // -- Accounts ------------------------------------------------------------

    /// Authenticate against the backend, returning the populated user.
    pub async fn login(&self, email: &str, password: &str) -> Result<User> {
        self.api().login(email, password).await
    }

    /// Create an account from a validated registration form.
    pub async fn register(&self, form: &RegistrationForm) -> Result<User> {
        let request = RegisterRequest {
            first_name: form.first_name.clone(),
            last_name: form.last_name.clone(),
            email: form.email.clone(),
            password: form.password.clone(),
            account_type: form.account_type(),
        };
        self.api().register(&request).await
    }

    // -- Catalog -------------------------------------------------------------

    /// Fetch the full service catalog.
    pub async fn load_services(&self) -> Result<Vec<Service>> {
        self.api().services().await
    }

    /// Fetch a single service record.
    pub async fn load_service(&self, id: ServiceId) -> Result<Service> {
        self.api().service(id).await
    }

    /// Create a new offering from a validated draft.
    pub async fn create_service(&self, draft: &ServiceDraft) -> Result<Service> {
        self.api().create_service(draft).await
    }

    /// Push a full updated record to the backend (whole-record overwrite).
    pub async fn update_service(&self, service: &Service) -> Result<Service> {
        self.api().update_service(service).await
    }

    /// Remove an offering.
    pub async fn delete_service(&self, id: ServiceId) -> Result<()> {
        self.api().delete_service(id).await
    }

    /// Roster of users joined to a service, for the business view.
    pub async fn service_roster(&self, id: ServiceId) -> Result<Vec<User>> {
        self.api().service_users(id).await
    }

    // -- Booking -------------------------------------------------------------

    /// Join a class: create the appointment and return the confirmed record.
    /// The caller updates local membership only after this resolves.
    pub async fn join_service(
        &self,
        service_id: ServiceId,
        user_id: UserId,
    ) -> Result<Appointment> {
        self.api().create_appointment(service_id, user_id).await
    }

    /// Leave a class: look up the user's appointment for this service and
    /// cancel it. When no appointment is on record (local and remote state
    /// disagree), no backend call is made and `None` is returned.
    pub async fn leave_service(
        &self,
        service_id: ServiceId,
        user_id: UserId,
    ) -> Result<Option<AppointmentId>> {
        let api = self.api();
        let appointments = api.user_service_appointments(user_id).await?;
        match find_appointment(&appointments, service_id) {
            Some(appointment_id) => {
                api.cancel_appointment(appointment_id).await?;
                Ok(Some(appointment_id))
            }
            None => {
                warn!(%service_id, %user_id, "no appointment on record, skipping cancel");
                Ok(None)
            }
        }
    }

    /// Everything the user has joined, paired with service records.
    pub async fn user_appointments(&self, user_id: UserId) -> Result<Vec<ServiceAppointment>> {
        self.api().user_service_appointments(user_id).await
    }

    // -- Config Persistence --------------------------------------------------

    /// Get a clone of the current config.
    pub fn config(&self) -> AppConfig {
        self.config.lock().expect("config lock poisoned").clone()
    }

    /// Update and persist the config, rebuilding the API client so the new
    /// base URL takes effect immediately.
    pub fn save_config(&self, config: &AppConfig) -> Result<()> {
        let api = ApiClient::new(config)?;
        *self.api.lock().expect("api lock poisoned") = api;
        *self.config.lock().expect("config lock poisoned") = config.clone();
        persist_config(&self.data_dir, config)
    }
}

// -- Config file persistence -------------------------------------------------

const CONFIG_FILE: &str = "config.json";

fn load_config(data_dir: &std::path::Path) -> Option<AppConfig> {
    let path = data_dir.join(CONFIG_FILE);
    let data = std::fs::read_to_string(&path).ok()?;
    serde_json::from_str(&data).ok()
}

fn persist_config(data_dir: &std::path::Path, config: &AppConfig) -> Result<()> {
    std::fs::create_dir_all(data_dir)?;
    let path = data_dir.join(CONFIG_FILE);
    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(&path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            api_base_url: "http://example.test:9090".into(),
            request_timeout_secs: 12,
        };
        persist_config(dir.path(), &config).unwrap();
        let loaded = load_config(dir.path()).unwrap();
        assert_eq!(loaded.api_base_url, config.api_base_url);
        assert_eq!(loaded.request_timeout_secs, 12);
    }

    #[test]
    fn missing_config_falls_back_to_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config(dir.path()).is_none());
    }
}
