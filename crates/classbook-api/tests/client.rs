// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Integration tests for ApiClient against a mock backend.

use classbook_api::requests::RegisterRequest;
use classbook_api::ApiClient;
use classbook_core::error::ClassbookError;
use classbook_core::types::{AccountType, ServiceId, UserId};
use classbook_core::validate::ServiceDraft;
use classbook_core::AppConfig;
use chrono::{TimeZone, Utc};
use serde_json::json;
use uuid::Uuid;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ApiClient {
    let config = AppConfig {
        api_base_url: server.uri(),
        request_timeout_secs: 5,
    };
    ApiClient::new(&config).expect("client builds")
}

fn service_json(id: Uuid, name: &str) -> serde_json::Value {
    json!({
        "serviceId": id,
        "name": name,
        "description": "A service for testing",
        "start_date_time": "2023-04-19T12:00:00Z",
        "length": 120,
        "capacity": 10,
        "price": 200.0
    })
}

fn user_json(id: Uuid, account_type: &str) -> serde_json::Value {
    json!({
        "ID": id,
        "firstName": "Business",
        "lastName": "Last Name",
        "email": "test@email.com",
        "password": "pass",
        "accountType": account_type,
        "classes": []
    })
}

#[tokio::test]
async fn services_fetches_full_catalog() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/services"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            service_json(Uuid::new_v4(), "Yoga"),
            service_json(Uuid::new_v4(), "Painting"),
        ])))
        .mount(&server)
        .await;

    let services = client_for(&server).services().await.unwrap();
    assert_eq!(services.len(), 2);
    assert_eq!(services[0].name, "Yoga");
    assert_eq!(
        services[0].start,
        Utc.with_ymd_and_hms(2023, 4, 19, 12, 0, 0).unwrap()
    );
    assert_eq!(services[0].end(), Utc.with_ymd_and_hms(2023, 4, 19, 14, 0, 0).unwrap());
}

#[tokio::test]
async fn login_returns_populated_user() {
    let server = MockServer::start().await;
    let id = Uuid::new_v4();
    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_partial_json(json!({"email": "test@email.com"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json(id, "business")))
        .mount(&server)
        .await;

    let user = client_for(&server)
        .login("test@email.com", "pass")
        .await
        .unwrap();
    assert_eq!(user.id, UserId(id));
    assert!(user.account_type.is_business());
}

#[tokio::test]
async fn login_rejection_maps_to_invalid_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .login("test@email.com", "wrong")
        .await
        .unwrap_err();
    assert!(matches!(err, ClassbookError::InvalidCredentials));
}

#[tokio::test]
async fn register_posts_account_type() {
    let server = MockServer::start().await;
    let id = Uuid::new_v4();
    Mock::given(method("POST"))
        .and(path("/register"))
        .and(body_partial_json(json!({
            "firstName": "Business",
            "accountType": "business"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json(id, "business")))
        .mount(&server)
        .await;

    let request = RegisterRequest {
        first_name: "Business".into(),
        last_name: "Last Name".into(),
        email: "test@email.com".into(),
        password: "pass".into(),
        account_type: AccountType::Business,
    };
    let user = client_for(&server).register(&request).await.unwrap();
    assert_eq!(user.id, UserId(id));
}

#[tokio::test]
async fn create_service_sends_desc_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/service"))
        .and(body_partial_json(json!({
            "name": "Test Service Two",
            "desc": "A new test service to create",
            "length": 120
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(service_json(Uuid::new_v4(), "Test Service Two")),
        )
        .mount(&server)
        .await;

    let draft = ServiceDraft {
        name: "Test Service Two".into(),
        description: "A new test service to create".into(),
        start: Utc.with_ymd_and_hms(2023, 4, 20, 12, 0, 0).unwrap(),
        length_minutes: 120,
        capacity: 10,
        price: 100.0,
    };
    let created = client_for(&server).create_service(&draft).await.unwrap();
    assert_eq!(created.name, "Test Service Two");
}

#[tokio::test]
async fn update_service_puts_whole_record() {
    let server = MockServer::start().await;
    let id = Uuid::new_v4();
    Mock::given(method("PUT"))
        .and(path(format!("/service/{id}")))
        .and(body_partial_json(json!({
            "description": "A service for testing new stuff"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(service_json(id, "Test Service")))
        .mount(&server)
        .await;

    let mut service: classbook_core::types::Service =
        serde_json::from_value(service_json(id, "Test Service")).unwrap();
    service.description = "A service for testing new stuff".into();
    client_for(&server).update_service(&service).await.unwrap();
}

#[tokio::test]
async fn join_posts_identifiers_only() {
    let server = MockServer::start().await;
    let service_id = Uuid::new_v4();
    let user_id = Uuid::new_v4();
    let appointment_id = Uuid::new_v4();
    Mock::given(method("POST"))
        .and(path("/appointment"))
        .and(body_partial_json(json!({
            "serviceId": service_id,
            "userId": user_id
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ID": appointment_id,
            "serviceId": service_id,
            "userId": user_id
        })))
        .mount(&server)
        .await;

    let appointment = client_for(&server)
        .create_appointment(ServiceId(service_id), UserId(user_id))
        .await
        .unwrap();
    assert_eq!(appointment.service_id, ServiceId(service_id));
}

#[tokio::test]
async fn cancel_hits_appointment_delete() {
    let server = MockServer::start().await;
    let id = Uuid::new_v4();
    Mock::given(method("DELETE"))
        .and(path(format!("/appointment/{id}")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .cancel_appointment(classbook_core::types::AppointmentId(id))
        .await
        .unwrap();
}

#[tokio::test]
async fn user_service_appointments_decodes_pairs() {
    let server = MockServer::start().await;
    let user_id = Uuid::new_v4();
    let service_id = Uuid::new_v4();
    Mock::given(method("GET"))
        .and(path(format!("/user/{user_id}/service-appointments")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "appointment": {
                "ID": Uuid::new_v4(),
                "serviceId": service_id,
                "userId": user_id
            },
            "service": service_json(service_id, "Yoga")
        }])))
        .mount(&server)
        .await;

    let appointments = client_for(&server)
        .user_service_appointments(UserId(user_id))
        .await
        .unwrap();
    assert_eq!(appointments.len(), 1);
    assert_eq!(appointments[0].service.id, ServiceId(service_id));
}

#[tokio::test]
async fn backend_failure_carries_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/services"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = client_for(&server).services().await.unwrap_err();
    match err {
        ClassbookError::Api { status, detail } => {
            assert_eq!(status, 500);
            assert_eq!(detail, "boom");
        }
        other => panic!("unexpected error: {other}"),
    }
}
