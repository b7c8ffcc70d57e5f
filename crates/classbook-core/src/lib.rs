// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Classbook — Core types, catalog filtering, and booking state shared across all crates.

pub mod booking;
pub mod catalog;
pub mod config;
pub mod error;
pub mod types;
pub mod validate;

pub use config::AppConfig;
pub use error::ClassbookError;
pub use types::*;
