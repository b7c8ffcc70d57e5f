// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Service detail page.
//
// End users join or leave through the booking state machine: the button goes
// busy while the request is in flight and membership changes only after the
// backend confirms. Businesses see the roster and an editable record with
// save/cancel backed by a field-by-field backup copy.

use dioxus::prelude::*;
use uuid::Uuid;

use classbook_core::booking::BookingState;
use classbook_core::types::{Service, ServiceId, User};
use classbook_core::validate::parse_start;

use crate::services::app_services::AppServices;
use crate::state::AppState;
use crate::Route;

#[component]
pub fn ServiceDetail(id: Uuid) -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let svc = use_context::<AppServices>();
    let service_id = ServiceId(id);

    let mut service = use_signal(|| Option::<Service>::None);
    let mut booking = use_signal(BookingState::new);
    let mut roster = use_signal(Vec::<User>::new);
    let mut editing = use_signal(|| false);
    let mut backup = use_signal(|| Option::<Service>::None);
    let mut status_msg = use_signal(|| Option::<String>::None);

    let is_business = state.read().is_business();
    let signed_in = state.read().session.is_some();

    // Load the record (catalog copy first, backend otherwise), seed the
    // booking state from the membership list, and fetch the roster for
    // business accounts.
    let svc_load = svc.clone();
    let _loader = use_resource(move || {
        let svc = svc_load.clone();
        async move {
            let cached = state
                .read()
                .catalog
                .all()
                .iter()
                .find(|s| s.id == service_id)
                .cloned();
            let record = match cached {
                Some(s) => Some(s),
                None => match svc.load_service(service_id).await {
                    Ok(s) => Some(s),
                    Err(e) => {
                        tracing::error!(error = %e, %service_id, "failed to load service");
                        status_msg.set(Some("Could not load this class.".into()));
                        None
                    }
                },
            };
            if let Some(record) = record {
                state.write().selected = Some(record.clone());
                service.set(Some(record));
            }

            let joined = state
                .read()
                .session
                .as_ref()
                .is_some_and(|u| u.has_joined(service_id));
            booking.set(BookingState::from_membership(joined));

            if is_business {
                match svc.service_roster(service_id).await {
                    Ok(users) => roster.set(users),
                    Err(e) => tracing::warn!(error = %e, "failed to load roster"),
                }
            }
        }
    });

    let record = service.read().clone();

    rsx! {
        div { style: "max-width: 600px; margin: 0 auto;",
            if let Some(record) = record {
                if *editing.read() {
                    EditForm { service, editing, backup, status_msg }
                } else {
                    h1 { "{record.name}" }
                    p { style: "color: #666;", "{record.description}" }
                    p { style: "font-size: 14px; color: #666;",
                        {record.start.format("%b %d, %Y %H:%M").to_string()}
                        " – "
                        {record.end().format("%H:%M").to_string()}
                        " · {record.length_minutes} min"
                    }
                    p { style: "font-size: 14px; color: #666;",
                        "${record.price} · {record.capacity} spots"
                    }

                    if is_business {
                        BusinessControls { service, editing, backup }
                        Roster { roster }
                    } else if signed_in {
                        JoinLeave { service, booking, status_msg }
                    } else {
                        p { style: "margin-top: 16px;",
                            Link { to: Route::Login {}, "Log in" }
                            " to join this class."
                        }
                    }
                }
            } else {
                p { style: "text-align: center; color: #aaa; margin: 48px 0;", "Loading..." }
            }

            if let Some(ref msg) = *status_msg.read() {
                p { style: "color: #ff3b30; font-size: 14px; text-align: center;", "{msg}" }
            }

            p { style: "margin-top: 24px;",
                Link { to: Route::FindClasses {}, "Back to Find Classes" }
            }
        }
    }
}

/// Join/leave button for end users, driven by the booking state machine.
#[component]
fn JoinLeave(
    service: Signal<Option<Service>>,
    booking: Signal<BookingState>,
    status_msg: Signal<Option<String>>,
) -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let svc = use_context::<AppServices>();
    let mut booking = booking;
    let mut status_msg = status_msg;

    let joined = booking.read().is_joined();
    let busy = booking.read().is_busy();
    let label = if busy {
        "Working..."
    } else if joined {
        "Leave Class"
    } else {
        "Join Class"
    };
    let color = if joined { "#ff3b30" } else { "#34c759" };

    rsx! {
        button {
            style: "width: 100%; padding: 14px; border-radius: 8px; border: none; background: {color}; color: white; font-size: 16px; margin-top: 16px;",
            disabled: busy,
            onclick: {
                let svc = svc.clone();
                move |_| {
                    let Some(record) = service.read().clone() else {
                        return;
                    };
                    let Some(user_id) = state.read().session.as_ref().map(|u| u.id) else {
                        return;
                    };
                    status_msg.set(None);

                    if joined {
                        if booking.write().begin_leave().is_err() {
                            return;
                        }
                        let svc = svc.clone();
                        spawn(async move {
                            match svc.leave_service(record.id, user_id).await {
                                Ok(cancelled) => {
                                    if cancelled.is_none() {
                                        tracing::warn!("left a class with no appointment on record");
                                    }
                                    let _ = booking.write().confirm_leave();
                                    if let Some(user) = state.write().session.as_mut() {
                                        user.leave_class(record.id);
                                    }
                                }
                                Err(e) => {
                                    tracing::error!(error = %e, "leave failed");
                                    let _ = booking.write().fail_leave();
                                    status_msg.set(Some("Could not leave this class.".into()));
                                }
                            }
                        });
                    } else {
                        if booking.write().begin_join().is_err() {
                            return;
                        }
                        let svc = svc.clone();
                        spawn(async move {
                            match svc.join_service(record.id, user_id).await {
                                Ok(appointment) => {
                                    tracing::info!(appointment_id = %appointment.id, "join confirmed");
                                    let _ = booking.write().confirm_join();
                                    if let Some(user) = state.write().session.as_mut() {
                                        user.join_class(record);
                                    }
                                }
                                Err(e) => {
                                    tracing::error!(error = %e, "join failed");
                                    let _ = booking.write().fail_join();
                                    status_msg.set(Some("Could not join this class.".into()));
                                }
                            }
                        });
                    }
                }
            },
            "{label}"
        }
    }
}

/// Edit/delete buttons for the business view.
#[component]
fn BusinessControls(
    service: Signal<Option<Service>>,
    editing: Signal<bool>,
    backup: Signal<Option<Service>>,
) -> Element {
    let mut editing = editing;
    let mut backup = backup;

    rsx! {
        button {
            style: "padding: 10px 24px; border-radius: 8px; border: 1px solid #007aff; color: #007aff; background: white; font-size: 14px; margin-top: 16px;",
            onclick: move |_| {
                // Remember the record as it was when edit mode was entered
                backup.set(service.read().clone());
                editing.set(true);
            },
            "Edit"
        }
    }
}

/// Edit mode: inputs bound to the record, with save (whole-record PUT) and
/// cancel (restore from the backup copy).
#[component]
fn EditForm(
    service: Signal<Option<Service>>,
    editing: Signal<bool>,
    backup: Signal<Option<Service>>,
    status_msg: Signal<Option<String>>,
) -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let svc = use_context::<AppServices>();
    let mut service = service;
    let mut editing = editing;
    let mut backup = backup;
    let mut status_msg = status_msg;
    let mut saving = use_signal(|| false);

    let Some(record) = service.read().clone() else {
        return rsx! {};
    };
    let start_value = record.start.format("%Y-%m-%dT%H:%M").to_string();

    rsx! {
        div {
            h1 { "Edit Class" }

            div { style: "margin-bottom: 12px;",
                label { style: "display: block; font-size: 14px; margin-bottom: 4px;", "Name" }
                input {
                    value: "{record.name}",
                    style: "width: 100%; padding: 12px; border: 1px solid #ccc; border-radius: 8px; box-sizing: border-box;",
                    oninput: move |evt| {
                        if let Some(s) = service.write().as_mut() {
                            s.name = evt.value().to_string();
                        }
                    },
                }
            }

            div { style: "margin-bottom: 12px;",
                label { style: "display: block; font-size: 14px; margin-bottom: 4px;", "Description" }
                textarea {
                    id: "serviceDescription",
                    value: "{record.description}",
                    style: "width: 100%; padding: 12px; border: 1px solid #ccc; border-radius: 8px; box-sizing: border-box; min-height: 80px;",
                    oninput: move |evt| {
                        if let Some(s) = service.write().as_mut() {
                            s.description = evt.value().to_string();
                        }
                    },
                }
            }

            div { style: "margin-bottom: 12px;",
                label { style: "display: block; font-size: 14px; margin-bottom: 4px;", "Start" }
                input {
                    r#type: "datetime-local",
                    value: "{start_value}",
                    style: "padding: 12px; border: 1px solid #ccc; border-radius: 8px;",
                    oninput: move |evt| {
                        if let Some(start) = parse_start(&evt.value())
                            && let Some(s) = service.write().as_mut()
                        {
                            s.start = start;
                        }
                    },
                }
            }

            div { style: "display: flex; gap: 8px; margin-bottom: 12px;",
                NumberField {
                    label: "Length (min)",
                    value: record.length_minutes.to_string(),
                    on_input: move |v: String| {
                        if let Ok(length) = v.parse::<i64>()
                            && length > 0
                            && let Some(s) = service.write().as_mut()
                        {
                            s.length_minutes = length;
                        }
                    },
                }
                NumberField {
                    label: "Capacity",
                    value: record.capacity.to_string(),
                    on_input: move |v: String| {
                        if let Ok(capacity) = v.parse::<u32>()
                            && let Some(s) = service.write().as_mut()
                        {
                            s.capacity = capacity;
                        }
                    },
                }
                NumberField {
                    label: "Price",
                    value: record.price.to_string(),
                    on_input: move |v: String| {
                        if let Ok(price) = v.parse::<f64>()
                            && price >= 0.0
                            && let Some(s) = service.write().as_mut()
                        {
                            s.price = price;
                        }
                    },
                }
            }

            div { style: "display: flex; gap: 8px;",
                button {
                    style: "flex: 1; padding: 12px; border-radius: 8px; border: none; background: #007aff; color: white; font-size: 14px;",
                    disabled: *saving.read(),
                    onclick: {
                        let svc = svc.clone();
                        move |_| {
                            let Some(updated) = service.read().clone() else {
                                return;
                            };
                            saving.set(true);
                            status_msg.set(None);

                            let svc = svc.clone();
                            spawn(async move {
                                match svc.update_service(&updated).await {
                                    Ok(stored) => {
                                        // The saved record becomes the new backup
                                        backup.set(Some(stored.clone()));
                                        state.write().selected = Some(stored.clone());
                                        service.set(Some(stored));
                                        editing.set(false);
                                    }
                                    Err(e) => {
                                        tracing::error!(error = %e, "save failed");
                                        status_msg.set(Some("Could not save changes.".into()));
                                    }
                                }
                                saving.set(false);
                            });
                        }
                    },
                    "Save Edit"
                }
                button {
                    style: "flex: 1; padding: 12px; border-radius: 8px; border: 1px solid #ccc; background: white; color: #333; font-size: 14px;",
                    onclick: move |_| {
                        // Restore every field from the copy taken on entry
                        if let Some(original) = backup.read().clone() {
                            service.set(Some(original));
                        }
                        editing.set(false);
                    },
                    "Cancel"
                }
            }
        }
    }
}

#[component]
fn NumberField(label: &'static str, value: String, on_input: EventHandler<String>) -> Element {
    rsx! {
        div { style: "flex: 1;",
            label { style: "display: block; font-size: 14px; margin-bottom: 4px;", "{label}" }
            input {
                r#type: "number",
                value: "{value}",
                style: "width: 100%; padding: 12px; border: 1px solid #ccc; border-radius: 8px; box-sizing: border-box;",
                oninput: move |evt| on_input.call(evt.value().to_string()),
            }
        }
    }
}

/// Who has joined, for the business view.
#[component]
fn Roster(roster: Signal<Vec<User>>) -> Element {
    rsx! {
        div { style: "margin-top: 24px;",
            h3 { "Attendees" }
            if roster.read().is_empty() {
                p { style: "color: #aaa; font-size: 14px;", "Nobody has joined yet." }
            } else {
                for user in roster.read().iter() {
                    div { style: "display: flex; justify-content: space-between; padding: 8px 0; border-bottom: 1px solid #f0f0f0;",
                        span { "{user.first_name} {user.last_name}" }
                        span { style: "color: #666; font-size: 14px;", "{user.email}" }
                    }
                }
            }
        }
    }
}
