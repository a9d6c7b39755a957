//! Error Types
//!
//! This module defines the error types used throughout the crate.
//!
//! # Overview
//!
//! The main error type [`StrollError`] covers the failure modes of the
//! locomotion core:
//! - Animation registry / clip-name configuration errors
//! - Controller configuration errors
//! - Asset load failures reported by the host's loading stage
//!
//! # Usage
//!
//! Fallible public APIs return [`Result<T>`] which is an alias for
//! `std::result::Result<T, StrollError>`.

use thiserror::Error;

/// The main error type for the stroll crate.
///
/// Configuration errors (missing clip names, bad config values) are surfaced
/// once, at construction time; the per-frame update path has no fallible
/// operations.
#[derive(Error, Debug)]
pub enum StrollError {
    // ========================================================================
    // Animation & Configuration Errors
    // ========================================================================
    /// A clip name the controller was configured with has no registered action.
    ///
    /// The registry and the controller's clip names are out of sync. This is
    /// raised before the first frame, never during one.
    #[error("Animation not found in registry: {0}")]
    MissingAnimation(String),

    /// A controller configuration value is unusable.
    #[error("Invalid controller config: {0}")]
    InvalidConfig(String),

    // ========================================================================
    // Asset Loading Errors
    // ========================================================================
    /// An asset required by the character failed to load.
    ///
    /// Terminal: the host logs it and never activates the controller. Nothing
    /// is retried.
    #[error("Asset load failed: {0}")]
    AssetLoadFailed(String),
}

/// Alias for `Result<T, StrollError>`.
pub type Result<T> = std::result::Result<T, StrollError>;
