//! Error types for the bestiary
//!
//! Provides unified error handling across the catalog client and the REPL
//! using thiserror.

use thiserror::Error;

// == Error Enum ==

/// Unified error type for catalog requests and REPL commands.
///
/// Command handlers return these to the loop, which prints them and keeps
/// the session running; only terminal i/o failures end the program.
#[derive(Error, Debug)]
pub enum Error {
    /// The catalog could not be reached or answered with a failure status
    #[error("catalog request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The catalog answered with a body that did not decode
    #[error("catalog response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),

    /// A command was invoked without a required argument
    #[error("usage: {0}")]
    MissingArgument(&'static str),

    /// `back` was used on the first page, or before any page was listed
    #[error("you are already at the start of the area listing")]
    NoPreviousPage,

    /// `catch` on a creature that is already in the collection
    #[error("{0} has already been caught")]
    AlreadyCaught(String),

    /// `inspect` on a creature that has not been caught yet
    #[error("you have not caught {0} yet")]
    NotCaught(String),

    /// Reading from or writing to the terminal failed
    #[error("terminal i/o failed: {0}")]
    Io(#[from] std::io::Error),
}

// == Result Type Alias ==

/// Convenience Result type used throughout the bestiary.
pub type Result<T> = std::result::Result<T, Error>;
