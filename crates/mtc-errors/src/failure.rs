//! The capability shared by every client error: a message and a code.

use serde::{Deserialize, Serialize};

/// Provenance of a client failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// An MQTT operation did not complete successfully.
    Protocol,
    /// The test control channel (agent registration, discovery) failed.
    Control,
    /// The network below MQTT failed (socket, timeout).
    Transport,
    /// The client was set up with unusable parameters.
    Configuration,
    /// Generic client failure with no more specific kind.
    Other,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Protocol => "protocol",
            Self::Control => "control",
            Self::Transport => "transport",
            Self::Configuration => "configuration",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read access to the message and code of a client error.
///
/// Handlers written against `&dyn Failure` accept every error kind in
/// this crate. Use [`Failure::kind`] to branch on provenance; never
/// inspect `message` or `code` for that.
pub trait Failure: std::error::Error + Send + Sync + 'static {
    /// Human-readable description of the failure.
    fn message(&self) -> &str;

    /// Status supplied by whoever raised the error. Meaning depends on the kind.
    fn code(&self) -> i32;

    /// Type tag of the error.
    fn kind(&self) -> ErrorKind;
}
