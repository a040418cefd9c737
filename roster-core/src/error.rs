use std::path::PathBuf;

use crate::id::{ActivityName, Email};

/// Rejections produced by [`Directory`](crate::Directory) operations.
///
/// Every variant leaves the directory unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum DirectoryError {
    /// No activity with this name exists.
    #[error("Activity not found")]
    ActivityNotFound { activity: String },

    /// The email is already on the activity's roster.
    #[error("{email} is already signed up for {activity}")]
    DuplicateSignup { activity: ActivityName, email: Email },

    /// The email is not on the activity's roster.
    #[error("{email} not found in {activity}")]
    UnknownParticipant { activity: ActivityName, email: String },

    /// The activity reached `max_participants` under an enforced policy.
    #[error("{activity} is full ({capacity} participants)")]
    ActivityFull { activity: ActivityName, capacity: u32 },
}

/// Errors produced while building a directory from configuration.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CoreError {
    /// The seed document is not valid JSON or does not match the schema.
    #[error("failed to parse seed: {0}")]
    SeedParse(#[from] serde_json::Error),

    /// The seed file could not be read.
    #[error("failed to read seed file {path}: {source}")]
    SeedIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The seed parsed but violates a directory invariant.
    #[error("invalid seed entry '{activity}': {reason}")]
    InvalidSeed { activity: String, reason: String },

    /// A capacity policy string was not recognised.
    #[error("invalid capacity policy '{value}': expected 'advisory' or 'enforced'")]
    InvalidPolicy { value: String },
}
