//! Error taxonomy for the MQTT test client.
//!
//! Separates MQTT-protocol failures from the other ways a client
//! operation can go wrong, so handlers can branch on provenance:
//! - `Failure` trait: the message/code capability every error exposes
//! - `ProtocolError` for failed MQTT operations (connect, publish, subscribe)
//! - `ControlError` for the test control channel
//! - `ClientError` sum type tying the kinds together
//! - `report` helpers for handlers that classify and log failures

pub mod control;
pub mod error;
pub mod failure;
pub mod protocol;
pub mod report;

// Re-exports for convenience.
pub use control::ControlError;
pub use error::{ClientError, ClientResult};
pub use failure::{ErrorKind, Failure};
pub use protocol::ProtocolError;
pub use report::{kind_of, report};
