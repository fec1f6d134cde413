//! Handler-side helpers: classify a caught error and log it.
//!
//! The error types never log on their own. Whoever catches a failure
//! decides whether to retry, abort, or just record it with [`report`].

use std::error::Error as StdError;

use crate::control::ControlError;
use crate::error::ClientError;
use crate::failure::{ErrorKind, Failure};
use crate::protocol::ProtocolError;

/// Find the kind of the first client error in `err`'s source chain.
///
/// Matches on type only. Accepts `anyhow::Error` via `err.as_ref()`, so
/// errors wrapped in context still classify.
pub fn kind_of(err: &(dyn StdError + 'static)) -> Option<ErrorKind> {
    let mut current = Some(err);
    while let Some(e) = current {
        if let Some(client) = e.downcast_ref::<ClientError>() {
            return Some(client.kind());
        }
        if e.is::<ProtocolError>() {
            return Some(ErrorKind::Protocol);
        }
        if e.is::<ControlError>() {
            return Some(ErrorKind::Control);
        }
        current = e.source();
    }
    None
}

/// Log a failure with its kind, code and message as structured fields.
///
/// Protocol and control failures are expected in test runs and log at
/// `warn`; everything else logs at `error`.
pub fn report(context: &str, failure: &dyn Failure) {
    let kind = failure.kind();
    match kind {
        ErrorKind::Protocol | ErrorKind::Control => tracing::warn!(
            context,
            kind = %kind,
            code = failure.code(),
            reason = failure.message(),
            "client operation failed"
        ),
        _ => tracing::error!(
            context,
            kind = %kind,
            code = failure.code(),
            reason = failure.message(),
            "client operation failed"
        ),
    }
}
