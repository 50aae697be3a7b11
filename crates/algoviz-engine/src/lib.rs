//! Trace generation engine for the algorithm visualizer.
//!
//! Executes sorting and searching algorithms against an array of tagged
//! elements, recording every comparison, swap, and state transition into a
//! deterministic, replayable [`Trace`](algoviz_core::Trace).
//!
//! # Architecture
//!
//! - [`sorting`] and [`searching`] hold one pure generator function per
//!   algorithm. Each runs synchronously to completion and returns the full
//!   trace in one call -- there is no streaming or partial delivery.
//! - `recorder` (crate-internal) owns the snapshot discipline: every
//!   emitted step deep-copies the working array, so steps never alias the
//!   generator's mutable state or each other.
//! - [`playback`] is the consumer side: a finite-state machine
//!   (`Idle -> Playing <-> Paused -> Complete`) that steps a cursor
//!   through a finished trace on an external clock tick.
//! - [`input`] provisions input arrays (manual parse, seeded random
//!   generation) and enforces the preconditions the generators assume.
//!
//! # Usage
//!
//! ```
//! use algoviz_core::Algorithm;
//! use algoviz_engine::{generate, input};
//!
//! let elements = input::elements_from_values(&[5, 2, 9, 1, 5]);
//! let trace = generate(Algorithm::BubbleSort, &elements, None).unwrap();
//! assert!(trace.last().unwrap().description.contains("sorted"));
//! ```

pub mod error;
pub mod input;
pub mod playback;
mod recorder;
pub mod searching;
pub mod sorting;

pub use error::EngineError;
pub use playback::{Playback, PlaybackState};

use algoviz_core::{Algorithm, Element, Trace};

/// Runs `algorithm` against `input` and returns its trace.
///
/// Search algorithms require a `target`; dispatching one without it fails
/// with [`EngineError::MissingTarget`]. Sorts ignore the target.
pub fn generate(
    algorithm: Algorithm,
    input: &[Element],
    target: Option<i64>,
) -> Result<Trace, EngineError> {
    match algorithm {
        Algorithm::BubbleSort => Ok(sorting::bubble_sort(input)),
        Algorithm::InsertionSort => Ok(sorting::insertion_sort(input)),
        Algorithm::QuickSort => Ok(sorting::quick_sort(input)),
        Algorithm::LinearSearch => {
            let target = target.ok_or(EngineError::MissingTarget)?;
            Ok(searching::linear_search(input, target))
        }
        Algorithm::BinarySearch => {
            let target = target.ok_or(EngineError::MissingTarget)?;
            Ok(searching::binary_search(input, target))
        }
    }
}
