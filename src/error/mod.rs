//! Error types for the guild mirror.
//!
//! `AppError` is the top-level error returned from `main`'s run function. It wraps
//! the domain-specific errors: configuration loading, fatal mirror run failures, and
//! client setup. Per-entity API failures never reach this level; they are recorded
//! as outcomes in the run report instead.

pub mod api;
pub mod config;
pub mod mirror;

use thiserror::Error;

use crate::error::{config::ConfigError, mirror::MirrorError};

/// Top-level application error type.
///
/// Every variant is fatal: the process reports it and exits with a non-zero status.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// The mirror run could not resolve the acting identity or one of the guilds.
    #[error(transparent)]
    MirrorErr(#[from] MirrorError),

    /// HTTP client construction error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),
}
