// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Calendar page — month view over the filtered catalog, grouped by day.

use std::collections::BTreeMap;

use chrono::{Datelike, Utc};
use dioxus::prelude::*;

use classbook_core::types::Service;

use crate::services::app_services::AppServices;
use crate::state::AppState;
use crate::Route;

#[component]
pub fn Calendar() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let svc = use_context::<AppServices>();
    let today = Utc::now();
    let mut view_year = use_signal(|| today.year());
    let mut view_month = use_signal(|| today.month());

    // The calendar shares the catalog with Find Classes; fetch when empty.
    let svc_load = svc.clone();
    let _loader = use_resource(move || {
        let svc = svc_load.clone();
        async move {
            if !state.read().catalog.all().is_empty() {
                return;
            }
            match svc.load_services().await {
                Ok(services) => state.write().catalog.set_services(services),
                Err(e) => tracing::error!(error = %e, "failed to fetch services"),
            }
        }
    });

    let year = *view_year.read();
    let month = *view_month.read();

    // Group this month's visible services by day of month.
    let mut days: BTreeMap<u32, Vec<Service>> = BTreeMap::new();
    for service in state.read().catalog.visible() {
        if service.start.year() == year && service.start.month() == month {
            days.entry(service.start.day()).or_default().push(service.clone());
        }
    }

    rsx! {
        div {
            div { style: "display: flex; justify-content: space-between; align-items: center;",
                h1 { "Calendar" }
                div { style: "display: flex; gap: 8px; align-items: center;",
                    button {
                        style: "padding: 6px 12px; border-radius: 6px; border: 1px solid #ccc; background: white;",
                        onclick: move |_| {
                            let (y, m) = previous_month(year, month);
                            view_year.set(y);
                            view_month.set(m);
                        },
                        "<"
                    }
                    strong { "{month_name(month)} {year}" }
                    button {
                        style: "padding: 6px 12px; border-radius: 6px; border: 1px solid #ccc; background: white;",
                        onclick: move |_| {
                            let (y, m) = next_month(year, month);
                            view_year.set(y);
                            view_month.set(m);
                        },
                        ">"
                    }
                }
            }

            if days.is_empty() {
                p { style: "text-align: center; color: #aaa; margin: 48px 0;",
                    "No classes this month."
                }
            } else {
                for (day, services) in days.iter() {
                    {
                        let day = *day;
                        let services = services.clone();
                        rsx! {
                            div { style: "margin: 16px 0;",
                                h3 { style: "margin: 0 0 8px; border-bottom: 1px solid #e0e0e0; padding-bottom: 4px;",
                                    "{month_name(month)} {day}"
                                }
                                for service in services.iter() {
                                    {
                                        let id = service.id;
                                        let start = service.start.format("%H:%M").to_string();
                                        let end = service.end().format("%H:%M").to_string();
                                        rsx! {
                                            div { style: "display: flex; justify-content: space-between; align-items: center; padding: 8px 12px; margin: 4px 0; border: 1px solid #e0e0e0; border-radius: 8px;",
                                                div {
                                                    strong { "{service.name}" }
                                                    span { style: "color: #666; font-size: 14px; margin-left: 8px;",
                                                        "{start}–{end}"
                                                    }
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
                        }
                    }
                }
            }
        }
    }
}

fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 { (year - 1, 12) } else { (year, month - 1) }
}

fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 { (year + 1, 1) } else { (year, month + 1) }
}

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        _ => "December",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_navigation_wraps_year() {
        assert_eq!(previous_month(2023, 1), (2022, 12));
        assert_eq!(next_month(2023, 12), (2024, 1));
        assert_eq!(next_month(2023, 4), (2023, 5));
    }
}
