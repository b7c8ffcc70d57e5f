// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Classbook — HTTP JSON client for the remote scheduling backend.

pub mod client;
pub mod requests;

pub use client::ApiClient;
