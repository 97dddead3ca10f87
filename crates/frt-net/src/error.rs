//! Network-subsystem error type.

use thiserror::Error;

use frt_core::NodeId;

/// Errors produced by `frt-net`.
///
/// Construction errors (`DuplicateNode`, `DuplicateEdge`, `InvalidDuration`,
/// `UnknownNode`) are local precondition failures: the operation that
/// returned them mutated nothing.  Routing errors (`EmptyNetwork`,
/// `Unreachable`) abort a search with no externally visible side effects.
#[derive(Debug, Error)]
pub enum NetError {
    #[error("station {0:?} already exists")]
    DuplicateNode(String),

    #[error("link {0:?} already exists")]
    DuplicateEdge(String),

    #[error("link {link:?} has negative duration ({minutes} min)")]
    InvalidDuration { link: String, minutes: i64 },

    #[error("node {0} not found in network")]
    UnknownNode(NodeId),

    #[error("network has no stations")]
    EmptyNetwork,

    #[error("no route from {from} to {to}")]
    Unreachable { from: NodeId, to: NodeId },
}

pub type NetResult<T> = Result<T, NetError>;
