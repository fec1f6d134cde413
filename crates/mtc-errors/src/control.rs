//! Failures on the test control channel (agent registration, discovery,
//! forwarding received messages back to the controller).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::failure::{ErrorKind, Failure};

/// The control channel rejected or failed a request.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message} (code {code})")]
pub struct ControlError {
    message: String,
    code: i32,
}

impl ControlError {
    pub fn new(message: impl Into<String>, code: i32) -> Self {
        Self {
            message: message.into(),
            code,
        }
    }

    /// Control error without a status code (code `0`).
    pub fn from_message(message: impl Into<String>) -> Self {
        Self::new(message, 0)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn code(&self) -> i32 {
        self.code
    }
}

impl Failure for ControlError {
    fn message(&self) -> &str {
        &self.message
    }

    fn code(&self) -> i32 {
        self.code
    }

    fn kind(&self) -> ErrorKind {
        ErrorKind::Control
    }
}
