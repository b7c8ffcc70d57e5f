// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Registration page. Required-field and password-match checks run client-side
// before anything is posted; a failed check blocks submission with an inline
// message.

use dioxus::prelude::*;

use classbook_core::validate::RegistrationForm;

use crate::services::app_services::AppServices;
use crate::state::AppState;
use crate::Route;

#[component]
pub fn Register() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let svc = use_context::<AppServices>();
    let nav = use_navigator();
    let mut form = use_signal(RegistrationForm::default);
    let mut error_msg = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    rsx! {
        div { style: "max-width: 400px; margin: 48px auto;",
            h1 { "Create an Account" }

            FormField {
                label: "First name",
                value: form.read().first_name.clone(),
                on_input: move |v| form.write().first_name = v,
            }
            FormField {
                label: "Last name",
                value: form.read().last_name.clone(),
                on_input: move |v| form.write().last_name = v,
            }
            FormField {
                label: "Email",
                value: form.read().email.clone(),
                on_input: move |v| form.write().email = v,
            }
            FormField {
                label: "Password",
                password: true,
                value: form.read().password.clone(),
                on_input: move |v| form.write().password = v,
            }
            FormField {
                label: "Confirm password",
                password: true,
                value: form.read().confirm_password.clone(),
                on_input: move |v| form.write().confirm_password = v,
            }

            div { style: "display: flex; align-items: center; gap: 8px; margin: 16px 0;",
                input {
                    r#type: "checkbox",
                    checked: form.read().is_business,
                    onchange: move |evt| form.write().is_business = evt.checked(),
                }
                span { "This is a business account" }
            }

            button {
                style: "width: 100%; padding: 14px; border-radius: 8px; border: none; background: #007aff; color: white; font-size: 16px;",
                disabled: *submitting.read(),
                onclick: {
                    let svc = svc.clone();
                    move |_| {
                        error_msg.set(String::new());
                        let current = form.read().clone();
                        if let Err(msg) = current.validate() {
                            error_msg.set(msg);
                            return;
                        }
                        submitting.set(true);

                        let svc = svc.clone();
                        spawn(async move {
                            match svc.register(&current).await {
                                Ok(user) => {
                                    tracing::info!(user_id = %user.id, "registered");
                                    state.write().session = Some(user);
                                    nav.push(Route::Profile {});
                                }
                                Err(e) => {
                                    tracing::error!(error = %e, "registration failed");
                                    error_msg.set("ERROR creating user".into());
                                }
                            }
                            submitting.set(false);
                        });
                    }
                },
                "Register"
            }

            if !error_msg.read().is_empty() {
                p { style: "color: #ff3b30; font-size: 14px; text-align: center; margin-top: 12px;",
                    "{error_msg}"
                }
            }

            p { style: "text-align: center; margin-top: 24px; font-size: 14px;",
                "Already registered? "
                Link { to: Route::Login {}, "Log in" }
            }
        }
    }
}

#[component]
fn FormField(
    label: &'static str,
    value: String,
    on_input: EventHandler<String>,
    #[props(default = false)] password: bool,
) -> Element {
    let input_type = if password { "password" } else { "text" };
    rsx! {
        div { style: "margin-bottom: 12px;",
            label { style: "display: block; font-size: 14px; margin-bottom: 4px;", "{label}" }
            input {
                r#type: "{input_type}",
                value: "{value}",
                style: "width: 100%; padding: 12px; border: 1px solid #ccc; border-radius: 8px; box-sizing: border-box;",
                oninput: move |evt| on_input.call(evt.value().to_string()),
            }
        }
    }
}
