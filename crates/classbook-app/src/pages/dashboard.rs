// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Business dashboard — the offering calendar with add and delete.

use dioxus::prelude::*;

use crate::services::app_services::AppServices;
use crate::state::AppState;
use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let svc = use_context::<AppServices>();
    let mut status_msg = use_signal(|| Option::<String>::None);

    // Refresh the catalog on page open, then poll so bookings made elsewhere
    // show up without a manual reload.
    let svc_load = svc.clone();
    let _loader = use_resource(move || {
        let svc = svc_load.clone();
        async move {
            loop {
                match svc.load_services().await {
                    Ok(services) => {
                        state.write().catalog.set_services(services);
                        status_msg.set(None);
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "failed to fetch services");
                        status_msg.set(Some("Could not load your classes.".into()));
                    }
                }
                tokio::time::sleep(std::time::Duration::from_secs(30)).await;
            }
        }
    });

    rsx! {
        div {
            div { style: "display: flex; justify-content: space-between; align-items: center;",
                h1 { "Dashboard" }
                Link { to: Route::CreateService {},
                    id: "addService",
                    style: "padding: 8px 16px; border-radius: 8px; background: #007aff; color: white; text-decoration: none; font-size: 14px;",
                    "Add Class"
                }
            }

            if let Some(ref msg) = *status_msg.read() {
                p { style: "color: #ff3b30; font-size: 14px;", "{msg}" }
            }

            if state.read().catalog.all().is_empty() {
                p { style: "text-align: center; color: #aaa; margin: 48px 0;",
                    "No classes yet. Add one to get started."
                }
            } else {
                for service in state.read().catalog.all().iter() {
                    {
                        let id = service.id;
                        let day = service.start.format("%b %d, %Y").to_string();
                        let time = service.start.format("%H:%M").to_string();

                        rsx! {
                            div { style: "padding: 12px; margin: 8px 0; border: 1px solid #e0e0e0; border-radius: 8px;",
                                div { style: "display: flex; justify-content: space-between; align-items: center;",
                                    strong { "{service.name}" }
                                    span { style: "color: #666; font-size: 14px;", "{day} {time}" }
                                }
                                p { style: "color: #666; font-size: 14px; margin: 4px 0;",
                                    "{service.length_minutes} min · {service.capacity} spots · ${service.price}"
                                }
                                div { style: "display: flex; gap: 8px; margin-top: 8px;",
                                    Link { to: Route::ServiceDetail { id: id.0 },
                                        style: "font-size: 14px;",
                                        "More Info"
                                    }
                                    button {
                                        style: "padding: 4px 12px; border-radius: 4px; border: 1px solid #ff3b30; color: #ff3b30; background: white; font-size: 12px;",
                                        onclick: {
                                            let svc = svc.clone();
                                            move |_| {
                                                let svc = svc.clone();
                                                spawn(async move {
                                                    if let Err(e) = svc.delete_service(id).await {
                                                        tracing::error!(error = %e, "delete failed");
                                                        status_msg.set(Some("Could not delete the class.".into()));
                                                        return;
                                                    }
                                                    match svc.load_services().await {
                                                        Ok(services) => {
                                                            state.write().catalog.set_services(services);
                                                        }
                                                        Err(e) => {
                                                            tracing::error!(error = %e, "refresh failed");
                                                        }
                                                    }
                                                });
                                            }
                                        },
                                        "Delete"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
