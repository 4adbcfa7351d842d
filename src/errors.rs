//! # Fetch Errors
//!
//! A fetcher may fail with any error type that implements [`Display`](std::fmt::Display).
//! The decorator erases it into a [`FetchError`] so a single logging path can
//! handle rejections from both the automatic fetch and the manual refetch.
//!
//! Errors never reach the wrapped child. The only trace they leave is a
//! `fetch failed: <error>` record on the `tracing` error level.
//!
//! ## Example
//!
//! ```rust
//! use dioxus_data_getter::errors::FetchError;
//!
//! async fn fetch_user(id: u32) -> Result<String, FetchError> {
//!     if id == 0 {
//!         return Err("user id cannot be zero".into());
//!     }
//!     Ok(format!("user {id}"))
//! }
//! ```

use thiserror::Error;

/// The one error kind of the decorator: the fetcher rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The fetcher resolved to an error. Displays as the original message.
    #[error("{0}")]
    Rejected(String),
}

impl FetchError {
    /// Erase any displayable fetcher error
    pub fn rejected(error: impl std::fmt::Display) -> Self {
        FetchError::Rejected(error.to_string())
    }
}

/// Convenience type alias for fetcher results
pub type FetchResult<T> = Result<T, FetchError>;

impl From<String> for FetchError {
    fn from(error: String) -> Self {
        FetchError::Rejected(error)
    }
}

impl From<&str> for FetchError {
    fn from(error: &str) -> Self {
        FetchError::Rejected(error.to_string())
    }
}

impl From<FetchError> for String {
    fn from(error: FetchError) -> Self {
        error.to_string()
    }
}
