// SPDX-FileCopyrightText: 2026 Sage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Sage answer engine.

use thiserror::Error;

/// The primary error type used across Sage crates.
///
/// Only startup paths surface these to a caller. Answer resolution absorbs
/// every failure into a default answer string.
#[derive(Debug, Error)]
pub enum SageError {
    /// Application configuration errors (invalid TOML, failed validation).
    #[error("configuration error: {0}")]
    Config(String),

    /// The prompt configuration file could not be read or parsed.
    #[error("failed to load prompt configuration from {path}: {source}")]
    Prompt {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The part-of-speech tagger rejected its input.
    #[error("tagger error: {0}")]
    Tagger(String),

    /// HTTP gateway errors (bind failure, server crash).
    #[error("gateway error: {message}")]
    Gateway {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
