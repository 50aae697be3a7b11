//! Engine error types covering input provisioning and dispatch.
//!
//! The trace generators themselves are total for any input and have no
//! error states of their own; everything here belongs to the layers that
//! prepare inputs and route a request to the right generator.

use serde::{Deserialize, Serialize};

/// Errors produced while provisioning input or dispatching an algorithm run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum EngineError {
    /// Manual input contained no values at all.
    #[error("no values provided")]
    Empty,

    /// A token in the manual input did not parse as an integer.
    #[error("invalid number: '{token}'")]
    InvalidNumber { token: String },

    /// Fewer values than the minimum the visualizer accepts.
    #[error("not enough values: got {got}, need at least 2")]
    NotEnoughValues { got: usize },

    /// Random generation asked for an empty or inverted value range.
    #[error("invalid value range: min {min} must not exceed max {max}")]
    InvalidRange { min: i64, max: i64 },

    /// Binary search requires an ascending-sorted input array.
    #[error("array is not sorted ascending at index {index}")]
    NotSorted { index: usize },

    /// A search algorithm was dispatched without a target value.
    #[error("search algorithm requires a target value")]
    MissingTarget,
}
