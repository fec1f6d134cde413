//! MQTT protocol failures.
//!
//! A `ProtocolError` is raised at the point an MQTT operation (connect,
//! publish, subscribe, unsubscribe, disconnect) does not succeed. The
//! code is the status reported by the broker or the MQTT library:
//! - CONNACK refusal: the return code byte (1..=5)
//! - SUBACK refusal: `0x80`
//! - request never reached the event loop: `0`

use rumqttc::{ConnectReturnCode, SubscribeReasonCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::failure::{ErrorKind, Failure};

/// SUBACK return code for a rejected subscription.
pub const SUBACK_FAILURE: i32 = 0x80;

/// An MQTT operation did not complete successfully.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message} (code {code})")]
pub struct ProtocolError {
    message: String,
    code: i32,
}

impl ProtocolError {
    /// Build a protocol error. Never fails; neither field is validated.
    pub fn new(message: impl Into<String>, code: i32) -> Self {
        Self {
            message: message.into(),
            code,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn code(&self) -> i32 {
        self.code
    }

    /// Error for a refused CONNACK. Returns `None` when the broker accepted.
    pub fn from_connack(code: ConnectReturnCode) -> Option<Self> {
        let (reason, byte) = match code {
            ConnectReturnCode::Success => return None,
            ConnectReturnCode::RefusedProtocolVersion => ("unacceptable protocol version", 1),
            ConnectReturnCode::BadClientId => ("identifier rejected", 2),
            ConnectReturnCode::ServiceUnavailable => ("server unavailable", 3),
            ConnectReturnCode::BadUserNamePassword => ("bad user name or password", 4),
            ConnectReturnCode::NotAuthorized => ("not authorized", 5),
        };
        Some(Self::new(format!("connection refused: {reason}"), byte))
    }

    /// Error for a rejected entry in a SUBACK. Returns `None` when a QoS was granted.
    pub fn from_suback(filter: &str, reason: &SubscribeReasonCode) -> Option<Self> {
        match reason {
            SubscribeReasonCode::Success(_) => None,
            SubscribeReasonCode::Failure => Some(Self::new(
                format!("couldn't subscribe to '{filter}'"),
                SUBACK_FAILURE,
            )),
        }
    }
}

impl Failure for ProtocolError {
    fn message(&self) -> &str {
        &self.message
    }

    fn code(&self) -> i32 {
        self.code
    }

    fn kind(&self) -> ErrorKind {
        ErrorKind::Protocol
    }
}

impl From<rumqttc::ClientError> for ProtocolError {
    fn from(err: rumqttc::ClientError) -> Self {
        Self::new(format!("request not accepted by event loop: {err}"), 0)
    }
}
