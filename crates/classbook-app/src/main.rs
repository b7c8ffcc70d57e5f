// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Classbook — scheduling and booking client for small service businesses.
//
// Entry point. Initialises logging, the backend API client, app state, and
// launches the Dioxus UI.

mod pages;
mod services;
mod state;

use dioxus::prelude::*;
use uuid::Uuid;

use pages::appointments::Appointments;
use pages::calendar::Calendar;
use pages::create_service::CreateService;
use pages::dashboard::Dashboard;
use pages::find_classes::FindClasses;
use pages::landing::Landing;
use pages::login::Login;
use pages::profile::Profile;
use pages::register::Register;
use pages::service_detail::ServiceDetail;

use services::app_services::AppServices;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Classbook starting");

    dioxus::launch(app);
}

/// Top-level route enum.
#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[layout(NavLayout)]
    #[route("/")]
    Landing {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/find-classes")]
    FindClasses {},
    #[route("/calendar")]
    Calendar {},
    #[route("/class/:id")]
    ServiceDetail { id: Uuid },
    #[route("/dashboard")]
    Dashboard {},
    #[route("/create-service")]
    CreateService {},
    #[route("/profile")]
    Profile {},
    #[route("/appointments")]
    Appointments {},
}

/// Root component.
fn app() -> Element {
    // Initialise the API client and persisted config
    let svc = use_hook(|| match AppServices::init() {
        Ok(s) => {
            tracing::info!("backend client initialised");
            s
        }
        Err(e) => {
            tracing::error!(error = %e, "persisted config unusable — using defaults");
            AppServices::fallback().expect("even fallback init failed")
        }
    });

    // Provide services and state as context for all pages
    use_context_provider(|| svc.clone());
    use_context_provider(|| Signal::new(state::AppState::new()));

    rsx! {
        Router::<Route> {}
    }
}

/// Persistent top navigation wrapping all pages. Links adapt to the session:
/// signed-out users get Log In, businesses get their dashboard.
#[component]
fn NavLayout() -> Element {
    let state = use_context::<Signal<state::AppState>>();
    let signed_in = state.read().session.is_some();
    let is_business = state.read().is_business();

    rsx! {
        div { class: "app-container",
            style: "display: flex; flex-direction: column; height: 100vh; font-family: system-ui, -apple-system, sans-serif;",

            // Top navigation bar
            nav { class: "nav-bar",
                style: "display: flex; align-items: center; gap: 16px; padding: 12px 16px; border-bottom: 1px solid #e0e0e0; background: #fafafa;",
                Link { to: Route::Landing {},
                    style: "font-size: 18px; font-weight: bold; text-decoration: none; color: #333;",
                    "Classbook"
                }
                NavButton { to: Route::FindClasses {}, label: "Find Classes" }
                NavButton { to: Route::Calendar {}, label: "Calendar" }
                if signed_in {
                    NavButton { to: Route::Appointments {}, label: "My Classes" }
                    NavButton { to: Route::Profile {}, label: "Profile" }
                } else {
                    NavButton { to: Route::Login {}, label: "Log In" }
                }
                if is_business {
                    NavButton { to: Route::Dashboard {}, label: "Dashboard" }
                }
            }

            // Page content
            div { class: "page-content",
                style: "flex: 1; overflow-y: auto; padding: 16px;",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn NavButton(to: Route, label: &'static str) -> Element {
    rsx! {
        Link { to: to,
            style: "text-decoration: none; color: #333; font-size: 14px;",
            "{label}"
        }
    }
}
