//! Window management errors
//!
//! Every fallible operation in this crate is value-encoded: construction
//! failures come back as a [`WindowError`], failed native queries as `None`.
//! Nothing in the library panics.

use thiserror::Error;

/// Window management errors
#[derive(Error, Debug)]
pub enum WindowError {
    /// The style flags contradict each other (e.g. borderless combined with
    /// title-bar chrome).
    #[error("contradictory window styles: {0}")]
    InvalidStyles(&'static str),

    /// The host refused to create the native window.
    #[error("native window creation failed")]
    CreationFailed,

    /// The backend requires the caller to be on the main thread.
    #[error("windows must be created on the main thread")]
    NotMainThread,
}

/// Convenience alias used throughout the crate.
pub type WindowResult<T> = Result<T, WindowError>;
