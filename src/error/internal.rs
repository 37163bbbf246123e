use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse id from String
    ///
    /// Results a in 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// A stored category column held a value outside the known set.
    ///
    /// Only this application writes the column, so an unknown value means a
    /// bug or manual tampering. Results in a 500 Internal Server Error.
    #[error("Unknown application category '{value}' in store")]
    UnknownCategory { value: String },

    /// A stored status column held a value outside the known vocabulary.
    #[error("Unknown application status '{value}' in store")]
    UnknownStatus { value: String },

    /// A stored role column held a value outside the known set.
    #[error("Unknown user role '{value}' in store")]
    UnknownRole { value: String },
}
