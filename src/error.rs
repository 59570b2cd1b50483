// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

/// Errors surfaced by configuration loading and the checked edit-distance entry point.
///
/// Nothing on the `add`/`get` path fails; these only come from the edges.
#[derive(Debug, Error)]
pub enum GramsetError {
    /// Both sides of an edit-distance comparison were absent.
    #[error("invalid comparison: both strings are absent")]
    InvalidComparison,

    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed config json: {0}")]
    Json(#[from] serde_json::Error),
}

impl GramsetError {
    pub(crate) fn invalid_config(reason: impl Into<String>) -> Self {
        GramsetError::InvalidConfig {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GramsetError>;
