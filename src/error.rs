//! Error types for the tidyopt library.

use thiserror::Error;

use crate::registry::Domain;

/// Result type alias for tidyopt operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while setting an engine option.
#[derive(Error, Debug)]
pub enum Error {
    /// The value fails local validation against the option's legal domain.
    ///
    /// Raised before the engine is ever invoked; the message names the
    /// domain so callers can self-correct.
    #[error("value {value} for option `{option}` is out of range (valid: {domain})")]
    OutOfRange {
        /// The engine's config name for the option.
        option: &'static str,
        /// The rejected value.
        value: u64,
        /// The option's legal domain.
        domain: Domain,
    },

    /// The engine's own set primitive refused the value.
    ///
    /// Diagnostic text is best-effort: it is carried verbatim when the
    /// engine furnished it and omitted when it did not.
    #[error("engine rejected value for option `{option}`{}", suffix(.diagnostic))]
    EngineRejected {
        /// The engine's config name for the option.
        option: &'static str,
        /// The engine's explanation, when retrievable.
        diagnostic: Option<String>,
    },

    /// A string value could not be marshaled into the engine's text
    /// representation (e.g. it contains an interior NUL byte).
    #[error("cannot marshal value for option `{option}`: {reason}")]
    Marshal {
        /// The engine's config name for the option.
        option: &'static str,
        /// Why marshaling failed.
        reason: String,
    },
}

fn suffix(diagnostic: &Option<String>) -> String {
    match diagnostic {
        Some(text) => format!(": {text}"),
        None => String::new(),
    }
}
