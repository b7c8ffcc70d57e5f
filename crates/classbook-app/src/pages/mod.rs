// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

pub mod appointments;
pub mod calendar;
pub mod create_service;
pub mod dashboard;
pub mod find_classes;
pub mod landing;
pub mod login;
pub mod profile;
pub mod register;
pub mod service_detail;
