/// Failure taxonomy for level loading and profile persistence.
///
/// Every fallible operation in the sim layer surfaces one of these;
/// nothing is retried and nothing is swallowed except unknown keys in
/// a profile record and unrecognized movement characters.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    /// A level resource could not be opened or read. Fatal to the
    /// requested level transition; prior state stays intact.
    #[error("cannot open level resource {path}: {source}")]
    ResourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// No saved profile exists under this username.
    #[error("no saved profile for '{0}'")]
    ProfileNotFound(String),

    /// Save attempted with an empty username. Nothing is written.
    #[error("cannot save a profile without a username")]
    InvalidProfile,

    /// The profile file could not be written.
    #[error("failed to write profile: {0}")]
    WriteFailure(#[source] io::Error),

    /// A numeric field in a profile record failed to parse. The whole
    /// load fails rather than substituting a default.
    #[error("malformed profile record: {key}={value:?}")]
    MalformedRecord { key: &'static str, value: String },
}
