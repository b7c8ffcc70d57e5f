// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Find Classes page — the catalog list with search and date-window filters.
//
// Both filters go through the Catalog store, which reapplies them against the
// full fetched list; the UI only renders `catalog.visible()`.

use dioxus::prelude::*;

use classbook_core::catalog::DateWindow;
use classbook_core::validate::parse_start;

use crate::services::app_services::AppServices;
use crate::state::AppState;
use crate::Route;

#[component]
pub fn FindClasses() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let svc = use_context::<AppServices>();
    let mut range_start = use_signal(String::new);
    let mut range_end = use_signal(String::new);
    let mut range_msg = use_signal(|| Option::<String>::None);

    // Fetch the catalog on page open
    let svc_load = svc.clone();
    let _loader = use_resource(move || {
        let svc = svc_load.clone();
        async move {
            state.write().loading_catalog = true;
            match svc.load_services().await {
                Ok(services) => {
                    state.write().catalog.set_services(services);
                    state.write().status_message = None;
                }
                Err(e) => {
                    tracing::error!(error = %e, "failed to fetch services");
                    state.write().status_message = Some("Could not load classes.".into());
                }
            }
            state.write().loading_catalog = false;
        }
    });

    rsx! {
        div {
            h1 { "Find Classes" }

            // Search box
            input {
                r#type: "search",
                placeholder: "Search by class name",
                value: "{state.read().catalog.query()}",
                style: "width: 100%; padding: 12px; border: 1px solid #ccc; border-radius: 8px; box-sizing: border-box; margin-bottom: 12px;",
                oninput: move |evt| state.write().catalog.search(&evt.value()),
            }

            // Date window
            div { style: "display: flex; gap: 8px; align-items: center; margin-bottom: 16px; flex-wrap: wrap;",
                input {
                    r#type: "datetime-local",
                    value: "{range_start}",
                    style: "padding: 8px; border: 1px solid #ccc; border-radius: 8px;",
                    oninput: move |evt| range_start.set(evt.value().to_string()),
                }
                span { "to" }
                input {
                    r#type: "datetime-local",
                    value: "{range_end}",
                    style: "padding: 8px; border: 1px solid #ccc; border-radius: 8px;",
                    oninput: move |evt| range_end.set(evt.value().to_string()),
                }
                button {
                    style: "padding: 8px 16px; border-radius: 8px; border: none; background: #007aff; color: white;",
                    onclick: move |_| {
                        range_msg.set(None);
                        let start = parse_start(&range_start.read());
                        let end = parse_start(&range_end.read());
                        match (start, end) {
                            (Some(start), Some(end)) if start <= end => {
                                state.write().catalog.filter_by_range(DateWindow { start, end });
                            }
                            _ => {
                                range_msg.set(Some("Pick a valid start and end date.".into()));
                            }
                        }
                    },
                    "Apply"
                }
                if state.read().catalog.window().is_some() {
                    button {
                        style: "padding: 8px 16px; border-radius: 8px; border: 1px solid #ccc; background: white; color: #333;",
                        onclick: move |_| {
                            range_start.set(String::new());
                            range_end.set(String::new());
                            state.write().catalog.clear_range();
                        },
                        "Clear"
                    }
                }
            }
            if let Some(ref msg) = *range_msg.read() {
                p { style: "color: #ff3b30; font-size: 13px;", "{msg}" }
            }
            if let Some(ref msg) = state.read().status_message {
                p { style: "color: #ff3b30; font-size: 14px;", "{msg}" }
            }

            // Results
            if state.read().loading_catalog {
                p { style: "text-align: center; color: #aaa; margin: 48px 0;", "Loading classes..." }
            } else if state.read().catalog.is_empty() {
                p { style: "text-align: center; color: #aaa; margin: 48px 0;",
                    "No classes match."
                }
            } else {
                for service in state.read().catalog.visible().iter() {
                    {
                        let id = service.id;
                        let when = service.start.format("%b %d, %Y %H:%M").to_string();

                        rsx! {
                            div { style: "padding: 12px; margin: 8px 0; border: 1px solid #e0e0e0; border-radius: 8px;",
                                div { style: "display: flex; justify-content: space-between; align-items: center;",
                                    strong { "{service.name}" }
                                    span { style: "color: #666;", "${service.price}" }
                                }
                                p { style: "color: #666; font-size: 14px; margin: 4px 0;",
                                    "{when} · {service.length_minutes} min · {service.capacity} spots"
                                }
                                p { style: "color: #999; font-size: 13px; margin: 4px 0;", "{service.description}" }
                                Link { to: Route::ServiceDetail { id: id.0 },
                                    style: "font-size: 14px;",
                                    "More Info"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
