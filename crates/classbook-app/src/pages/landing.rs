// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Landing page — entry points into browsing and account flows.

use dioxus::prelude::*;

use crate::state::AppState;
use crate::Route;

#[component]
pub fn Landing() -> Element {
    let state = use_context::<Signal<AppState>>();
    let signed_in = state.read().session.is_some();

    rsx! {
        div { style: "max-width: 600px; margin: 48px auto; text-align: center;",
            h1 { "Classbook" }
            p { style: "color: #666; font-size: 16px; margin-bottom: 32px;",
                "Find and book classes from local studios, or list your own."
            }

            div { style: "display: flex; flex-direction: column; gap: 12px; max-width: 320px; margin: 0 auto;",
                Link { to: Route::FindClasses {},
                    style: "padding: 14px; border-radius: 12px; background: #007aff; color: white; text-decoration: none; font-size: 16px;",
                    "Browse Classes"
                }
                if !signed_in {
                    Link { to: Route::Login {},
                        style: "padding: 14px; border-radius: 12px; border: 1px solid #ccc; color: #333; text-decoration: none; font-size: 16px;",
                        "Log In"
                    }
                    Link { to: Route::Register {},
                        style: "padding: 14px; border-radius: 12px; border: 1px solid #ccc; color: #333; text-decoration: none; font-size: 16px;",
                        "Create an Account"
                    }
                } else {
                    Link { to: Route::Profile {},
                        style: "padding: 14px; border-radius: 12px; border: 1px solid #ccc; color: #333; text-decoration: none; font-size: 16px;",
                        "My Profile"
                    }
                }
            }
        }
    }
}
