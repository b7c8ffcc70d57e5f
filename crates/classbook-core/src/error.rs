// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Classbook.

use thiserror::Error;

/// Top-level error type for all Classbook operations.
#[derive(Debug, Error)]
pub enum ClassbookError {
    // -- Backend errors --
    #[error("request failed: {0}")]
    Http(String),

    #[error("backend returned {status}: {detail}")]
    Api { status: u16, detail: String },

    #[error("invalid email or password")]
    InvalidCredentials,

    // -- Booking errors --
    #[error("cannot {action} while {from}")]
    InvalidTransition {
        from: &'static str,
        action: &'static str,
    },

    // -- Form errors --
    #[error("validation failed: {0}")]
    Validation(String),

    // -- Local persistence --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, ClassbookError>;
