//! Client error sum type.

use rumqttc::ConnectionError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::control::ControlError;
use crate::failure::{ErrorKind, Failure};
use crate::protocol::ProtocolError;

/// Errors a test client operation can fail with, one variant per kind.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClientError {
    // Inner error is part of Display only; it is not a `source()`.
    #[error("MQTT protocol error: {0}")]
    Protocol(ProtocolError),

    #[error("control channel error: {0}")]
    Control(ControlError),

    #[error("transport error: {message} (code {code})")]
    Transport { message: String, code: i32 },

    #[error("configuration error: {message} (code {code})")]
    Configuration { message: String, code: i32 },

    #[error("{message} (code {code})")]
    Other { message: String, code: i32 },
}

/// Convenience alias for client results.
pub type ClientResult<T> = Result<T, ClientError>;

impl ClientError {
    /// Generic client error with no more specific kind.
    pub fn new(message: impl Into<String>, code: i32) -> Self {
        Self::Other {
            message: message.into(),
            code,
        }
    }

    /// Generic client error without a status code (code `0`).
    pub fn from_message(message: impl Into<String>) -> Self {
        Self::new(message, 0)
    }

    pub fn transport(message: impl Into<String>, code: i32) -> Self {
        Self::Transport {
            message: message.into(),
            code,
        }
    }

    pub fn configuration(message: impl Into<String>, code: i32) -> Self {
        Self::Configuration {
            message: message.into(),
            code,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Protocol(e) => e.message(),
            Self::Control(e) => e.message(),
            Self::Transport { message, .. }
            | Self::Configuration { message, .. }
            | Self::Other { message, .. } => message,
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            Self::Protocol(e) => e.code(),
            Self::Control(e) => e.code(),
            Self::Transport { code, .. }
            | Self::Configuration { code, .. }
            | Self::Other { code, .. } => *code,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Protocol(_) => ErrorKind::Protocol,
            Self::Control(_) => ErrorKind::Control,
            Self::Transport { .. } => ErrorKind::Transport,
            Self::Configuration { .. } => ErrorKind::Configuration,
            Self::Other { .. } => ErrorKind::Other,
        }
    }

    pub fn is_protocol(&self) -> bool {
        matches!(self, Self::Protocol(_))
    }

    /// The MQTT protocol failure, if this is one.
    pub fn as_protocol(&self) -> Option<&ProtocolError> {
        match self {
            Self::Protocol(e) => Some(e),
            _ => None,
        }
    }
}

impl Failure for ClientError {
    fn message(&self) -> &str {
        ClientError::message(self)
    }

    fn code(&self) -> i32 {
        ClientError::code(self)
    }

    fn kind(&self) -> ErrorKind {
        ClientError::kind(self)
    }
}

impl From<ProtocolError> for ClientError {
    fn from(err: ProtocolError) -> Self {
        Self::Protocol(err)
    }
}

impl From<ControlError> for ClientError {
    fn from(err: ControlError) -> Self {
        Self::Control(err)
    }
}

impl From<ConnectionError> for ClientError {
    fn from(err: ConnectionError) -> Self {
        match err {
            ConnectionError::ConnectionRefused(rc) => {
                Self::Protocol(ProtocolError::from_connack(rc).unwrap_or_else(|| {
                    ProtocolError::new("connection refused with success return code", 0)
                }))
            }
            ConnectionError::MqttState(e) => {
                Self::Protocol(ProtocolError::new(format!("MQTT state error: {e}"), 0))
            }
            ConnectionError::NotConnAck(packet) => Self::Protocol(ProtocolError::new(
                format!("expected CONNACK, received {packet:?}"),
                0,
            )),
            ConnectionError::Io(e) => Self::Transport {
                code: e.raw_os_error().unwrap_or(0),
                message: e.to_string(),
            },
            other @ (ConnectionError::NetworkTimeout
            | ConnectionError::FlushTimeout
            | ConnectionError::Tls(_)) => {
                Self::Transport {
                    message: other.to_string(),
                    code: 0,
                }
            }
            other => Self::Other {
                message: other.to_string(),
                code: 0,
            },
        }
    }
}
