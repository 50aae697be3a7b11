//! Core error types for algoviz-core.
//!
//! Uses `thiserror` for structured, matchable error variants. The data model
//! itself is total -- the only failure the core can produce is a catalog
//! lookup miss.

use thiserror::Error;

/// Core errors produced by the algoviz-core crate.
#[derive(Debug, Clone, Error)]
pub enum CoreError {
    /// A slug did not match any registered algorithm.
    #[error("unknown algorithm: '{slug}'")]
    UnknownAlgorithm { slug: String },
}
