//! Query-level errors.
//!
//! These are contained within a single query: the caller reports them and
//! carries on with the next one.

/// Why a connection query produced no routes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConnectError {
    /// No route has a stop with this name
    #[error("invalid stop: {0:?}")]
    UnknownStop(String),

    /// Both stops exist but no chain of transfers links them
    #[error("route not found from {from:?} to {to:?}")]
    NoRoute { from: String, to: String },
}
