// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Profile page — greeting, quick links, and the backend settings section.

use dioxus::prelude::*;

use crate::services::app_services::AppServices;
use crate::state::AppState;
use crate::Route;

#[component]
pub fn Profile() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let svc = use_context::<AppServices>();
    let mut base_url = use_signal(|| svc.config().api_base_url);
    let mut save_msg = use_signal(|| Option::<String>::None);

    let name = state.read().display_name().map(str::to_owned);
    let is_business = state.read().is_business();
    let joined_count = state
        .read()
        .session
        .as_ref()
        .map(|u| u.classes.len())
        .unwrap_or(0);
    let class_word = if joined_count == 1 { "class" } else { "classes" };

    rsx! {
        div { style: "max-width: 500px; margin: 0 auto;",
            if let Some(name) = name {
                h1 { "Welcome, {name}" }
                p { style: "color: #666; font-size: 14px;",
                    "You have joined {joined_count} {class_word}."
                }

                div { style: "display: flex; flex-direction: column; gap: 12px; margin: 24px 0;",
                    Link { to: Route::Appointments {},
                        style: "padding: 14px; border-radius: 12px; border: 1px solid #ccc; color: #333; text-decoration: none;",
                        "My Classes"
                    }
                    Link { to: Route::FindClasses {},
                        style: "padding: 14px; border-radius: 12px; border: 1px solid #ccc; color: #333; text-decoration: none;",
                        "Find Classes"
                    }
                    if is_business {
                        Link { to: Route::Dashboard {},
                            style: "padding: 14px; border-radius: 12px; border: 1px solid #ccc; color: #333; text-decoration: none;",
                            "Business Dashboard"
                        }
                    }
                }

                button {
                    style: "padding: 10px 24px; border-radius: 8px; border: 1px solid #ff3b30; color: #ff3b30; background: white; font-size: 14px;",
                    onclick: move |_| {
                        state.write().session = None;
                        state.write().selected = None;
                    },
                    "Sign Out"
                }
            } else {
                h1 { "Profile" }
                p { style: "color: #666;",
                    "No user is signed in. "
                    Link { to: Route::Login {}, "Log in" }
                    " or "
                    Link { to: Route::Register {}, "register" }
                    "."
                }
            }

            section { style: "margin: 32px 0;",
                h3 { "Settings" }
                div { style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 0; border-bottom: 1px solid #f0f0f0;",
                    span { "Backend URL" }
                    input {
                        r#type: "text",
                        style: "width: 240px; padding: 4px 8px; border: 1px solid #ccc; border-radius: 4px;",
                        value: "{base_url}",
                        oninput: move |evt| base_url.set(evt.value().to_string()),
                    }
                }
                button {
                    style: "width: 100%; padding: 12px; border-radius: 8px; border: none; background: #007aff; color: white; font-size: 14px; margin-top: 8px;",
                    onclick: {
                        let svc = svc.clone();
                        move |_| {
                            let mut config = svc.config();
                            config.api_base_url = base_url.read().clone();
                            match svc.save_config(&config) {
                                Ok(()) => {
                                    tracing::info!("settings saved");
                                    save_msg.set(Some("Settings saved.".into()));
                                }
                                Err(e) => {
                                    tracing::error!(error = %e, "failed to save settings");
                                    save_msg.set(Some(format!("Save failed: {e}")));
                                }
                            }
                        }
                    },
                    "Save Settings"
                }
                if let Some(ref msg) = *save_msg.read() {
                    p { style: "color: #34c759; font-size: 14px; text-align: center; margin-top: 8px;",
                        "{msg}"
                    }
                }
            }
        }
    }
}
