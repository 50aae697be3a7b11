//! One recorded moment of an algorithm's execution.
//!
//! A [`Step`] pairs a full value snapshot of the working array with a
//! human-readable description and an optional action annotation. At most one
//! of `comparison`/`swap` is populated; steps carrying neither are narrative
//! (scene-setting or conclusions).
//!
//! The snapshot is a deep copy taken at emission time: later mutation of the
//! generator's working array never changes an already-emitted step.

use serde::{Deserialize, Serialize};

use crate::element::Element;

/// An immutable snapshot plus annotation describing one moment in an
/// algorithm's execution.
///
/// `comparison` and `swap` hold index pairs into `array`. Insertion sort
/// reports its shifts through the `swap` field as well -- the downstream
/// animation keys off that field for any element movement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Full snapshot of the working array at this moment.
    pub array: Vec<Element>,
    /// Commentary shown alongside the snapshot.
    pub description: String,
    /// Indices being compared, if this step records a comparison.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparison: Option<(usize, usize)>,
    /// Indices being exchanged (or shifted), if this step records a swap.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swap: Option<(usize, usize)>,
}

impl Step {
    /// Creates a narrative step: snapshot and description, no action.
    pub fn narrative(array: &[Element], description: impl Into<String>) -> Self {
        Step {
            array: array.to_vec(),
            description: description.into(),
            comparison: None,
            swap: None,
        }
    }

    /// Creates a step recording a comparison of the two given indices.
    pub fn comparison(array: &[Element], description: impl Into<String>, pair: (usize, usize)) -> Self {
        Step {
            array: array.to_vec(),
            description: description.into(),
            comparison: Some(pair),
            swap: None,
        }
    }

    /// Creates a step recording a swap (or shift) of the two given indices.
    pub fn swap(array: &[Element], description: impl Into<String>, pair: (usize, usize)) -> Self {
        Step {
            array: array.to_vec(),
            description: description.into(),
            comparison: None,
            swap: Some(pair),
        }
    }

    /// Returns `true` if this step carries neither a comparison nor a swap.
    pub fn is_narrative(&self) -> bool {
        self.comparison.is_none() && self.swap.is_none()
    }

    /// Returns `true` if this step records a comparison.
    pub fn is_comparison(&self) -> bool {
        self.comparison.is_some()
    }

    /// Returns `true` if this step records a swap.
    pub fn is_swap(&self) -> bool {
        self.swap.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{ElementId, Status};

    fn sample_array() -> Vec<Element> {
        vec![Element::new(5, ElementId(0)), Element::new(2, ElementId(1))]
    }

    #[test]
    fn narrative_step_has_no_action() {
        let step = Step::narrative(&sample_array(), "Starting.");
        assert!(step.is_narrative());
        assert!(!step.is_comparison());
        assert!(!step.is_swap());
        assert_eq!(step.description, "Starting.");
    }

    #[test]
    fn comparison_step_carries_pair() {
        let step = Step::comparison(&sample_array(), "Comparing 5 and 2.", (0, 1));
        assert!(step.is_comparison());
        assert!(!step.is_narrative());
        assert_eq!(step.comparison, Some((0, 1)));
        assert_eq!(step.swap, None);
    }

    #[test]
    fn swap_step_carries_pair() {
        let step = Step::swap(&sample_array(), "Swapping 5 and 2.", (0, 1));
        assert!(step.is_swap());
        assert!(!step.is_narrative());
        assert_eq!(step.swap, Some((0, 1)));
        assert_eq!(step.comparison, None);
    }

    #[test]
    fn snapshot_is_a_deep_copy() {
        let mut working = sample_array();
        let step = Step::narrative(&working, "Before mutation.");

        working[0].status = Status::Sorted;
        working[0].value = 999;

        // The emitted step is unaffected by later mutation of the working array.
        assert_eq!(step.array[0].status, Status::Default);
        assert_eq!(step.array[0].value, 5);
    }

    #[test]
    fn narrative_wire_shape_omits_absent_actions() {
        let step = Step::narrative(&[Element::new(1, ElementId(0))], "Done.");
        insta::assert_json_snapshot!(step, @r###"
        {
          "array": [
            {
              "value": 1,
              "id": 0,
              "status": "default"
            }
          ],
          "description": "Done."
        }
        "###);
    }

    #[test]
    fn comparison_wire_shape() {
        let step = Step::comparison(&[Element::new(1, ElementId(0))], "Checking.", (0, 0));
        insta::assert_json_snapshot!(step, @r###"
        {
          "array": [
            {
              "value": 1,
              "id": 0,
              "status": "default"
            }
          ],
          "description": "Checking.",
          "comparison": [
            0,
            0
          ]
        }
        "###);
    }

    #[test]
    fn serde_roundtrip_with_and_without_actions() {
        for step in [
            Step::narrative(&sample_array(), "n"),
            Step::comparison(&sample_array(), "c", (0, 1)),
            Step::swap(&sample_array(), "s", (1, 0)),
        ] {
            let json = serde_json::to_string(&step).unwrap();
            let back: Step = serde_json::from_str(&json).unwrap();
            assert_eq!(step, back);
        }
    }
}
