// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// My Classes page — the session user's appointments, paired with their
// service records.

use dioxus::prelude::*;

use classbook_core::types::ServiceAppointment;

use crate::services::app_services::AppServices;
use crate::state::AppState;
use crate::Route;

#[component]
pub fn Appointments() -> Element {
    let state = use_context::<Signal<AppState>>();
    let svc = use_context::<AppServices>();
    let mut appointments = use_signal(Vec::<ServiceAppointment>::new);
    let mut loaded = use_signal(|| false);

    let signed_in = state.read().session.is_some();

    let svc_load = svc.clone();
    let _loader = use_resource(move || {
        let svc = svc_load.clone();
        async move {
            let Some(user_id) = state.read().session.as_ref().map(|u| u.id) else {
                loaded.set(true);
                return;
            };
            match svc.user_appointments(user_id).await {
                Ok(list) => appointments.set(list),
                Err(e) => tracing::error!(error = %e, "failed to fetch appointments"),
            }
            loaded.set(true);
        }
    });

    rsx! {
        div { style: "max-width: 600px; margin: 0 auto;",
            h1 { "My Classes" }

            if !signed_in {
                p { style: "color: #666;",
                    Link { to: Route::Login {}, "Log in" }
                    " to see your classes."
                }
            } else if !*loaded.read() {
                p { style: "text-align: center; color: #aaa; margin: 48px 0;", "Loading..." }
            } else if appointments.read().is_empty() {
                p { style: "text-align: center; color: #aaa; margin: 48px 0;",
                    "You haven't joined any classes yet."
                }
            } else {
                for entry in appointments.read().iter() {
                    {
                        let id = entry.service.id;
                        let when = entry.service.start.format("%b %d, %Y %H:%M").to_string();

                        rsx! {
                            div { style: "padding: 12px; margin: 8px 0; border: 1px solid #e0e0e0; border-radius: 8px;",
                                div { style: "display: flex; justify-content: space-between; align-items: center;",
                                    strong { "{entry.service.name}" }
                                    span { style: "color: #666; font-size: 14px;", "{when}" }
                                }
                                Link { to: Route::ServiceDetail { id: id.0 },
                                    style: "font-size: 14px;",
                                    "More Info"
                                }
                            }
                        }
                    }
                }
            }

            p { style: "margin-top: 24px;",
                Link { to: Route::Profile {}, "Back to Profile" }
            }
        }
    }
}
