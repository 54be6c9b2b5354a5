//! Error types for the navigation layer.
//!
//! No error here ever reaches the end user or escapes the dispatch loop;
//! they exist so boundary failures carry context into the log.

use thiserror::Error;

/// Errors that can occur at the navigation layer's host boundary
#[derive(Error, Debug)]
pub enum NavError {
    /// A roll-gesture command failed inside the host's command hook
    #[error("command {name:?} failed: {source}")]
    Command {
        name: String,
        #[source]
        source: anyhow::Error,
    },
}

/// Result type alias for navigation boundary operations
pub type NavResult<T> = Result<T, NavError>;
