// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for formatting, style loading, and locale lookup

use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while turning a delta into a phrase
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    #[error("delta must not be negative: {0}s")]
    Negative(f64),
    #[error("delta must be finite: {0}")]
    NotFinite(f64),
    #[error("event is {0:?} in the future")]
    InFuture(Duration),
}

/// Errors that can occur while loading a style from configuration text
#[derive(Debug, Error)]
pub enum StyleError {
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid style field {field}: {message}")]
    Invalid { field: String, message: String },
}

impl StyleError {
    pub(crate) fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Errors that can occur when selecting a built-in locale
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    #[error("unknown locale: {0}")]
    Unknown(String),
}
