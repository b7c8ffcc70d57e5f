// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Create Class page. Validation accumulates every missing field into one
// message and blocks the POST until the form passes.

use dioxus::prelude::*;

use classbook_core::validate::ServiceForm;

use crate::services::app_services::AppServices;
use crate::Route;

#[component]
pub fn CreateService() -> Element {
    let svc = use_context::<AppServices>();
    let nav = use_navigator();
    let mut form = use_signal(ServiceForm::default);
    let mut error_msg = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    rsx! {
        div { style: "max-width: 500px; margin: 0 auto;",
            h1 { "Add a Class" }

            div { style: "margin-bottom: 12px;",
                label { style: "display: block; font-size: 14px; margin-bottom: 4px;", "Name" }
                input {
                    id: "business-name",
                    value: "{form.read().name}",
                    style: "width: 100%; padding: 12px; border: 1px solid #ccc; border-radius: 8px; box-sizing: border-box;",
                    oninput: move |evt| form.write().name = evt.value().to_string(),
                }
            }

            div { style: "margin-bottom: 12px;",
                label { style: "display: block; font-size: 14px; margin-bottom: 4px;", "Description" }
                textarea {
                    id: "business-description",
                    value: "{form.read().description}",
                    style: "width: 100%; padding: 12px; border: 1px solid #ccc; border-radius: 8px; box-sizing: border-box; min-height: 80px;",
                    oninput: move |evt| form.write().description = evt.value().to_string(),
                }
            }

            div { style: "margin-bottom: 12px;",
                label { style: "display: block; font-size: 14px; margin-bottom: 4px;", "Start time" }
                input {
                    id: "opening-time",
                    r#type: "datetime-local",
                    value: "{form.read().start}",
                    style: "padding: 12px; border: 1px solid #ccc; border-radius: 8px;",
                    oninput: move |evt| form.write().start = evt.value().to_string(),
                }
            }

            div { style: "display: flex; gap: 8px; margin-bottom: 16px;",
                div { style: "flex: 1;",
                    label { style: "display: block; font-size: 14px; margin-bottom: 4px;", "Length (min)" }
                    input {
                        r#type: "number",
                        value: "{form.read().length_minutes}",
                        style: "width: 100%; padding: 12px; border: 1px solid #ccc; border-radius: 8px; box-sizing: border-box;",
                        oninput: move |evt| form.write().length_minutes = evt.value().to_string(),
                    }
                }
                div { style: "flex: 1;",
                    label { style: "display: block; font-size: 14px; margin-bottom: 4px;", "Participants" }
                    input {
                        id: "num-participants",
                        r#type: "number",
                        value: "{form.read().capacity}",
                        style: "width: 100%; padding: 12px; border: 1px solid #ccc; border-radius: 8px; box-sizing: border-box;",
                        oninput: move |evt| form.write().capacity = evt.value().to_string(),
                    }
                }
                div { style: "flex: 1;",
                    label { style: "display: block; font-size: 14px; margin-bottom: 4px;", "Price" }
                    input {
                        id: "price",
                        r#type: "number",
                        value: "{form.read().price}",
                        style: "width: 100%; padding: 12px; border: 1px solid #ccc; border-radius: 8px; box-sizing: border-box;",
                        oninput: move |evt| form.write().price = evt.value().to_string(),
                    }
                }
            }

            button {
                id: "addClass",
                style: "width: 100%; padding: 14px; border-radius: 8px; border: none; background: #007aff; color: white; font-size: 16px;",
                disabled: *submitting.read(),
                onclick: {
                    let svc = svc.clone();
                    move |_| {
                        error_msg.set(String::new());
                        let draft = match form.read().validate() {
                            Ok(draft) => draft,
                            Err(msg) => {
                                error_msg.set(msg);
                                return;
                            }
                        };
                        submitting.set(true);

                        let svc = svc.clone();
                        spawn(async move {
                            match svc.create_service(&draft).await {
                                Ok(created) => {
                                    tracing::info!(service_id = %created.id, "class created");
                                    nav.push(Route::Dashboard {});
                                }
                                Err(e) => {
                                    tracing::error!(error = %e, "create failed");
                                    error_msg.set("ERROR creating class".into());
                                }
                            }
                            submitting.set(false);
                        });
                    }
                },
                "Add Class"
            }

            if !error_msg.read().is_empty() {
                p { style: "color: #ff3b30; font-size: 14px; margin-top: 12px;", "{error_msg}" }
            }
        }
    }
}
