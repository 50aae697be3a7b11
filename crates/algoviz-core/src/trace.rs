//! The complete ordered output of a single algorithm run.
//!
//! A [`Trace`] is a finite sequence of [`Step`]s produced entirely before
//! being handed to the caller: index 0 is the initial-state narrative step,
//! the last index a terminal narrative step. The playback controller owns
//! all temporal pacing; the trace itself is inert data with no aliasing
//! between steps or back into any generator state.

use serde::{Deserialize, Serialize};

use crate::step::Step;

/// An ordered, finite sequence of steps, owned exclusively by the caller
/// after generation.
///
/// Serializes transparently as a JSON array of steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trace {
    steps: Vec<Step>,
}

impl Trace {
    /// Wraps an already-recorded step sequence.
    pub fn from_steps(steps: Vec<Step>) -> Self {
        Trace { steps }
    }

    /// Number of steps in the trace.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` if the trace has no steps. A generated trace always
    /// has at least the initial and terminal narrative steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Returns the step at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    /// The initial narrative step.
    pub fn first(&self) -> Option<&Step> {
        self.steps.first()
    }

    /// The terminal narrative step.
    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    /// Iterates over the steps in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    /// The full step sequence as a slice.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Number of steps recording a comparison.
    pub fn comparison_count(&self) -> usize {
        self.steps.iter().filter(|s| s.is_comparison()).count()
    }

    /// Number of steps recording a swap.
    pub fn swap_count(&self) -> usize {
        self.steps.iter().filter(|s| s.is_swap()).count()
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
