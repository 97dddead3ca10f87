//! Dispatch-subsystem error type.

use thiserror::Error;

use frt_net::NetError;

/// Errors produced by `frt-dispatch`.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The train cannot take the payload: strict headroom is required, so
    /// `capacity == weight` is rejected as well.
    #[error("train {train:?} capacity {capacity} cannot take payload weight {weight}")]
    CapacityExceeded {
        train:    String,
        capacity: u32,
        weight:   u32,
    },

    /// The train has not been reset since its last delivery.
    #[error("train {0:?} is not idle")]
    TrainBusy(String),

    #[error("routing failed: {0}")]
    Routing(#[from] NetError),
}

pub type DispatchResult<T> = Result<T, DispatchError>;
