//! Shared test harness for E2E error scenarios.
//!
//! `SimulatedBroker` stands in for the MQTT client: each operation returns
//! the failure a real client would raise for the scripted broker reply.
//! `TestHarness` plays the catching side and records how each error was routed.

#![allow(dead_code)]

use rumqttc::{ConnectReturnCode, ConnectionError, SubscribeReasonCode};

use mtc_errors::{
    ClientError, ClientResult, ControlError, ErrorKind, Failure, ProtocolError, kind_of, report,
};

/// Where a handler sent a caught error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// MQTT-specific handling (e.g. report the reason code to the controller).
    Mqtt,
    /// Any other client failure.
    Generic,
    /// Not a client error at all.
    Foreign,
}

/// A handled failure as seen by the catching code.
#[derive(Debug, Clone)]
pub struct Handled {
    pub route: Route,
    pub kind: Option<ErrorKind>,
    pub message: String,
    pub code: i32,
}

/// Scripted broker replies for the simulated client operations.
pub struct SimulatedBroker {
    pub connect_failure: Option<ProtocolError>,
    pub connack: ConnectReturnCode,
    pub suback: Vec<SubscribeReasonCode>,
    pub io_errno: Option<i32>,
}

impl SimulatedBroker {
    /// Broker that accepts everything.
    pub fn accepting() -> Self {
        Self {
            connect_failure: None,
            connack: ConnectReturnCode::Success,
            suback: Vec::new(),
            io_errno: None,
        }
    }

    /// Broker whose connect fails with the given message and code.
    pub fn refusing(message: &str, code: i32) -> Self {
        Self {
            connect_failure: Some(ProtocolError::new(message, code)),
            ..Self::accepting()
        }
    }

    pub fn with_connack(mut self, connack: ConnectReturnCode) -> Self {
        self.connack = connack;
        self
    }

    pub fn with_suback(mut self, suback: Vec<SubscribeReasonCode>) -> Self {
        self.suback = suback;
        self
    }

    pub fn with_io_errno(mut self, errno: i32) -> Self {
        self.io_errno = Some(errno);
        self
    }

    /// Simulated CONNECT.
    pub fn connect(&self) -> ClientResult<()> {
        if let Some(errno) = self.io_errno {
            let io = std::io::Error::from_raw_os_error(errno);
            return Err(ConnectionError::Io(io).into());
        }
        if let Some(err) = &self.connect_failure {
            return Err(err.clone().into());
        }
        if !matches!(self.connack, ConnectReturnCode::Success) {
            return Err(ConnectionError::ConnectionRefused(self.connack).into());
        }
        Ok(())
    }

    /// Simulated SUBSCRIBE; one SUBACK entry per filter.
    pub fn subscribe(&self, filters: &[&str]) -> Result<(), ProtocolError> {
        for (filter, reason) in filters.iter().zip(&self.suback) {
            if let Some(err) = ProtocolError::from_suback(filter, reason) {
                return Err(err);
            }
        }
        Ok(())
    }
}

/// The catching side: classifies, logs and records every failure.
#[derive(Default)]
pub struct TestHarness {
    pub handled: Vec<Handled>,
}

impl TestHarness {
    pub fn new() -> Self {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new("debug"))
            .with_test_writer()
            .try_init();
        Self::default()
    }

    /// Handle an error that arrived through `anyhow`, routing by type only.
    pub fn handle(&mut self, context: &str, err: &anyhow::Error) -> Route {
        let kind = kind_of(err.as_ref());
        let route = match kind {
            Some(ErrorKind::Protocol) => Route::Mqtt,
            Some(_) => Route::Generic,
            None => Route::Foreign,
        };

        let failure: Option<&dyn Failure> = if let Some(e) = err.downcast_ref::<ClientError>() {
            Some(e as &dyn Failure)
        } else if let Some(e) = err.downcast_ref::<ProtocolError>() {
            Some(e as &dyn Failure)
        } else if let Some(e) = err.downcast_ref::<ControlError>() {
            Some(e as &dyn Failure)
        } else {
            None
        };

        let (message, code) = match failure {
            Some(failure) => {
                report(context, failure);
                (failure.message().to_string(), failure.code())
            }
            None => (err.to_string(), 0),
        };

        self.handled.push(Handled {
            route,
            kind,
            message,
            code,
        });
        route
    }

    /// Handle a failure through the general capability only.
    pub fn handle_failure(&mut self, context: &str, failure: &dyn Failure) -> Route {
        report(context, failure);
        let route = if failure.kind() == ErrorKind::Protocol {
            Route::Mqtt
        } else {
            Route::Generic
        };
        self.handled.push(Handled {
            route,
            kind: Some(failure.kind()),
            message: failure.message().to_string(),
            code: failure.code(),
        });
        route
    }

    pub fn last(&self) -> &Handled {
        self.handled.last().expect("no failure handled yet")
    }
}
