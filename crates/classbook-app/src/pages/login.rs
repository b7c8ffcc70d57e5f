// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Login page. A rejected login flips the inline failure flag; other request
// failures are logged and shown as the same message.

use dioxus::prelude::*;

use crate::services::app_services::AppServices;
use crate::state::AppState;
use crate::Route;

#[component]
pub fn Login() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let svc = use_context::<AppServices>();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut failed = use_signal(|| false);
    let mut submitting = use_signal(|| false);

    rsx! {
        div { style: "max-width: 400px; margin: 48px auto;",
            h1 { "Log In" }

            div { style: "margin-bottom: 16px;",
                label { style: "display: block; font-size: 14px; margin-bottom: 4px;", "Email" }
                input {
                    id: "username",
                    r#type: "email",
                    value: "{email}",
                    style: "width: 100%; padding: 12px; border: 1px solid #ccc; border-radius: 8px; box-sizing: border-box;",
                    oninput: move |evt| email.set(evt.value().to_string()),
                }
            }

            div { style: "margin-bottom: 24px;",
                label { style: "display: block; font-size: 14px; margin-bottom: 4px;", "Password" }
                input {
                    id: "password",
                    r#type: "password",
                    value: "{password}",
                    style: "width: 100%; padding: 12px; border: 1px solid #ccc; border-radius: 8px; box-sizing: border-box;",
                    oninput: move |evt| password.set(evt.value().to_string()),
                }
            }

            button {
                style: "width: 100%; padding: 14px; border-radius: 8px; border: none; background: #007aff; color: white; font-size: 16px;",
                disabled: *submitting.read(),
                onclick: {
                    let svc = svc.clone();
                    move |_| {
                        let email_val = email.read().clone();
                        let password_val = password.read().clone();
                        failed.set(false);
                        submitting.set(true);

                        let svc = svc.clone();
                        spawn(async move {
                            match svc.login(&email_val, &password_val).await {
                                Ok(user) => {
                                    tracing::info!(user_id = %user.id, "logged in");
                                    let business = user.account_type.is_business();
                                    state.write().session = Some(user);
                                    if business {
                                        nav.push(Route::Dashboard {});
                                    } else {
                                        nav.push(Route::Profile {});
                                    }
                                }
                                Err(e) => {
                                    tracing::error!(error = %e, "login failed");
                                    failed.set(true);
                                }
                            }
                            submitting.set(false);
                        });
                    }
                },
                "Submit"
            }

            if *failed.read() {
                p { style: "color: #ff3b30; font-size: 14px; text-align: center; margin-top: 12px;",
                    "Unsuccessful login. Check your email and password."
                }
            }

            p { style: "text-align: center; margin-top: 24px; font-size: 14px;",
                "No account yet? "
                Link { to: Route::Register {}, "Register" }
            }
        }
    }
}
