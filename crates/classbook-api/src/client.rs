// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Typed client for the Classbook backend.
//
// One pooled reqwest client per ApiClient, with request and connect timeouts
// from the app config. No retries and no auth token scheme — credentials are
// posted per call.

use std::time::Duration;

use classbook_core::error::{ClassbookError, Result};
use classbook_core::types::{
    Appointment, AppointmentId, Service, ServiceAppointment, ServiceId, User, UserId,
};
use classbook_core::validate::ServiceDraft;
use classbook_core::AppConfig;
use reqwest::{Client, ClientBuilder, Response, StatusCode};
use tracing::debug;
use url::Url;

use crate::requests::{AppointmentRequest, LoginRequest, RegisterRequest, ServiceRequest};

/// Default connect timeout in seconds.
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Client for the Classbook HTTP JSON API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
}

impl ApiClient {
    /// Build a client against the configured base URL.
    pub fn new(config: &AppConfig) -> Result<Self> {
        let mut base = config.api_base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base)
            .map_err(|e| ClassbookError::Http(format!("invalid api_base_url: {e}")))?;

        let http = ClientBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| ClassbookError::Http(e.to_string()))?;

        Ok(Self { http, base_url })
    }

    // -- Accounts ------------------------------------------------------------

    /// `POST /register` — create an account, returning the stored user.
    pub async fn register(&self, request: &RegisterRequest) -> Result<User> {
        let response = self
            .http
            .post(self.endpoint("register")?)
            .json(request)
            .send()
            .await
            .map_err(http_err)?;
        self.parse(response).await
    }

    /// `POST /login` — authenticate, returning the user with populated fields.
    ///
    /// A 401/403 maps to [`ClassbookError::InvalidCredentials`] so the login
    /// page can flip its "unsuccessful login" flag without string matching.
    pub async fn login(&self, email: &str, password: &str) -> Result<User> {
        let body = LoginRequest {
            email: email.to_owned(),
            password: password.to_owned(),
        };
        let response = self
            .http
            .post(self.endpoint("login")?)
            .json(&body)
            .send()
            .await
            .map_err(http_err)?;

        if matches!(
            response.status(),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN
        ) {
            return Err(ClassbookError::InvalidCredentials);
        }
        self.parse(response).await
    }

    // -- Services ------------------------------------------------------------

    /// `GET /services` — the full catalog.
    pub async fn services(&self) -> Result<Vec<Service>> {
        self.get_json("services").await
    }

    /// `GET /service/{id}`.
    pub async fn service(&self, id: ServiceId) -> Result<Service> {
        self.get_json(&format!("service/{id}")).await
    }

    /// `POST /service` — create an offering from a validated draft.
    pub async fn create_service(&self, draft: &ServiceDraft) -> Result<Service> {
        let body = ServiceRequest::from(draft);
        let response = self
            .http
            .post(self.endpoint("service")?)
            .json(&body)
            .send()
            .await
            .map_err(http_err)?;
        self.parse(response).await
    }

    /// `PUT /service/{id}` — whole-record overwrite, no diffing.
    pub async fn update_service(&self, service: &Service) -> Result<Service> {
        let response = self
            .http
            .put(self.endpoint(&format!("service/{}", service.id))?)
            .json(service)
            .send()
            .await
            .map_err(http_err)?;
        self.parse(response).await
    }

    /// `DELETE /service/{id}`.
    pub async fn delete_service(&self, id: ServiceId) -> Result<()> {
        let response = self
            .http
            .delete(self.endpoint(&format!("service/{id}"))?)
            .send()
            .await
            .map_err(http_err)?;
        check_status(response).await?;
        Ok(())
    }

    /// `GET /service/{id}/users` — the roster for the business view.
    pub async fn service_users(&self, id: ServiceId) -> Result<Vec<User>> {
        self.get_json(&format!("service/{id}/users")).await
    }

    // -- Appointments --------------------------------------------------------

    /// `POST /appointment` — join a class. Carries identifiers only.
    pub async fn create_appointment(
        &self,
        service_id: ServiceId,
        user_id: UserId,
    ) -> Result<Appointment> {
        let body = AppointmentRequest {
            service_id,
            user_id,
        };
        let response = self
            .http
            .post(self.endpoint("appointment")?)
            .json(&body)
            .send()
            .await
            .map_err(http_err)?;
        self.parse(response).await
    }

    /// `DELETE /appointment/{id}` — cancel a join.
    pub async fn cancel_appointment(&self, id: AppointmentId) -> Result<()> {
        let response = self
            .http
            .delete(self.endpoint(&format!("appointment/{id}"))?)
            .send()
            .await
            .map_err(http_err)?;
        check_status(response).await?;
        Ok(())
    }

    /// `GET /user/{id}/service-appointments` — everything the user has joined,
    /// paired with the service records for display.
    pub async fn user_service_appointments(
        &self,
        user_id: UserId,
    ) -> Result<Vec<ServiceAppointment>> {
        self.get_json(&format!("user/{user_id}/service-appointments"))
            .await
    }

    // -- Plumbing ------------------------------------------------------------

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| ClassbookError::Http(format!("bad endpoint {path}: {e}")))
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        debug!(path, "GET");
        let response = self
            .http
            .get(self.endpoint(path)?)
            .send()
            .await
            .map_err(http_err)?;
        self.parse(response).await
    }

    async fn parse<T: serde::de::DeserializeOwned>(&self, response: Response) -> Result<T> {
        let response = check_status(response).await?;
        response.json::<T>().await.map_err(http_err)
    }
}

/// Map a non-2xx response to a typed error carrying status and body text.
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let detail = response.text().await.unwrap_or_default();
    Err(ClassbookError::Api {
        status: status.as_u16(),
        detail,
    })
}

fn http_err(err: reqwest::Error) -> ClassbookError {
    ClassbookError::Http(err.to_string())
}
