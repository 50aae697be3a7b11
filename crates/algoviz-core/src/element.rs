//! The element model for visualized arrays.
//!
//! An [`Element`] is one value-bearing, identity-bearing cell of the array
//! being sorted or searched. Its [`ElementId`] is assigned once at input
//! provisioning and travels with the element through every swap, so a
//! consumer can animate an individual cell across steps.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable element identifier, assigned once when the input array is built.
///
/// A distinct newtype over `u32` so an element id cannot be accidentally
/// used where an array index is expected. Ids are dense (`0..n`) for a
/// freshly provisioned array, which keeps traces byte-for-byte reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementId(pub u32);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Visualization status of an element within one step snapshot.
///
/// Drives the highlight channel of the renderer: `Comparing` and `Swapping`
/// are transient tags around a recorded action, `Sorted` is permanent once
/// an element reaches its final position (or, for searches, once the target
/// is found).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Default,
    Comparing,
    Swapping,
    Sorted,
}

/// A value-bearing cell of the visualized array.
///
/// Swapping two elements exchanges whole records, so `id` travels with
/// `value`. Within one step snapshot all ids are unique and form the same
/// multiset as the ids of the original input -- no element is created or
/// destroyed mid-algorithm, only reordered and relabeled by status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub value: i64,
    pub id: ElementId,
    pub status: Status,
}

impl Element {
    /// Creates an element with `Default` status.
    pub fn new(value: i64, id: ElementId) -> Self {
        Element {
            value,
            id,
            status: Status::Default,
        }
    }
}
