//! Shared step-recording sink for all trace generators.
//!
//! Every generator threads a [`StepRecorder`] through its control flow
//! (including quick sort's recursion) instead of capturing an outer buffer.
//! Each emit deep-copies the working array into the step, so a step is
//! frozen the moment it is recorded and later mutation of the working array
//! cannot reach back into it.

use algoviz_core::{Element, Step, Trace};

/// Growable step sink owning the snapshot discipline.
pub(crate) struct StepRecorder {
    steps: Vec<Step>,
}

impl StepRecorder {
    pub(crate) fn new() -> Self {
        StepRecorder { steps: Vec::new() }
    }

    /// Records a narrative step.
    pub(crate) fn narrative(&mut self, array: &[Element], description: impl Into<String>) {
        self.steps.push(Step::narrative(array, description));
    }

    /// Records a comparison of the two given indices.
    pub(crate) fn comparison(
        &mut self,
        array: &[Element],
        description: impl Into<String>,
        pair: (usize, usize),
    ) {
        self.steps.push(Step::comparison(array, description, pair));
    }

    /// Records a swap (or shift) of the two given indices.
    pub(crate) fn swap(
        &mut self,
        array: &[Element],
        description: impl Into<String>,
        pair: (usize, usize),
    ) {
        self.steps.push(Step::swap(array, description, pair));
    }

    /// Finalizes the recording into an immutable [`Trace`].
    pub(crate) fn finish(self) -> Trace {
        Trace::from_steps(self.steps)
    }
}
