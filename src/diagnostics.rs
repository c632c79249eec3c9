//! Diagnostic observations emitted by the workflow components.
//!
//! These are not user-facing, but they are part of the observable contract:
//! the suite asserts on them, and hosts may route them anywhere. The default
//! sink forwards to `tracing`.

use tracing::{error, info, warn};

use crate::models::Bill;

#[derive(Debug, Clone, PartialEq)]
pub enum Observation {
    /// A bill list was fetched and formatted; carries the raw count.
    ListLength(usize),
    /// A single row's date failed to format; carries the error text and the
    /// raw row as it came off the wire. The row is still emitted.
    RowFormat { error: String, row: Bill },
    /// A create or update call failed at the handler boundary.
    OperationError(String),
}

pub trait Diagnostics: Send + Sync {
    fn record(&self, observation: Observation);
}

/// Default sink logging observations through `tracing`.
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn record(&self, observation: Observation) {
        match observation {
            Observation::ListLength(count) => info!("length {}", count),
            Observation::RowFormat { error, row } => warn!("{} for {:?}", error, row),
            Observation::OperationError(error) => error!("{}", error),
        }
    }
}
