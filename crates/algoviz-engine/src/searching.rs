//! Search trace generators: linear search and binary search.
//!
//! Both operate on a defensive copy of the input and never mutate caller
//! state. A successful probe tags the match `Sorted` (the renderer's
//! "final" highlight), emits a found narrative step, and returns
//! immediately -- the trace short-circuits and is therefore variable
//! length. Exhausting the array emits a "not found" terminal step instead.
//!
//! Binary search requires an ascending-sorted input; that precondition is
//! checked by input provisioning ([`crate::input::ensure_sorted`]), not
//! here. Violating it still yields a well-formed, terminating trace.

use algoviz_core::{Element, Status, Trace};
use tracing::debug;

use crate::recorder::StepRecorder;

/// Generates the linear search trace for `target` over `input`.
pub fn linear_search(input: &[Element], target: i64) -> Trace {
    let mut arr = input.to_vec();
    let mut rec = StepRecorder::new();

    rec.narrative(&arr, format!("Starting Linear Search for target value: {}.", target));

    for i in 0..arr.len() {
        arr[i].status = Status::Comparing;
        rec.comparison(
            &arr,
            format!("Checking element at index {}: {}.", i, arr[i].value),
            (i, i),
        );

        if arr[i].value == target {
            arr[i].status = Status::Sorted;
            rec.narrative(&arr, format!("Target value {} found at index {}!", target, i));

            let trace = rec.finish();
            debug!("linear search: found at {}, {} steps", i, trace.len());
            return trace;
        }

        arr[i].status = Status::Default;
    }

    rec.narrative(&arr, format!("Target value {} not found in the array.", target));

    let trace = rec.finish();
    debug!("linear search: not found, {} steps", trace.len());
    trace
}

/// Generates the binary search trace for `target` over `input`.
///
/// Maintains inclusive `(left, right)` bounds. Before each probe the
/// current window is reset to `Default` and the midpoint tagged
/// `Comparing`; a mismatch narrates which half survives before the bounds
/// narrow. Probed midpoints that fall outside the narrowed window keep
/// their `Comparing` tag in later snapshots.
pub fn binary_search(input: &[Element], target: i64) -> Trace {
    let mut arr = input.to_vec();
    let mut rec = StepRecorder::new();

    rec.narrative(&arr, format!("Starting Binary Search for target value: {}.", target));

    let mut left: isize = 0;
    let mut right: isize = arr.len() as isize - 1;

    while left <= right {
        let mid = ((left + right) / 2) as usize;

        for el in &mut arr[left as usize..=right as usize] {
            el.status = Status::Default;
        }
        arr[mid].status = Status::Comparing;
        rec.comparison(
            &arr,
            format!("Checking middle element at index {}: {}.", mid, arr[mid].value),
            (mid, mid),
        );

        if arr[mid].value == target {
            arr[mid].status = Status::Sorted;
            rec.narrative(&arr, format!("Target value {} found at index {}!", target, mid));

            let trace = rec.finish();
            debug!("binary search: found at {}, {} steps", mid, trace.len());
            return trace;
        }

        if arr[mid].value < target {
            rec.narrative(
                &arr,
                format!("{} is less than {}. Search in the right half.", arr[mid].value, target),
            );
            left = mid as isize + 1;
        } else {
            rec.narrative(
                &arr,
                format!("{} is greater than {}. Search in the left half.", arr[mid].value, target),
            );
            right = mid as isize - 1;
        }
    }

    rec.narrative(&arr, format!("Target value {} not found in the array.", target));

    let trace = rec.finish();
    debug!("binary search: not found, {} steps", trace.len());
    trace
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::elements_from_values;

    // -----------------------------------------------------------------------
    // Linear search
    // -----------------------------------------------------------------------

    #[test]
    fn linear_finds_and_short_circuits() {
        let trace = linear_search(&elements_from_values(&[4, 2, 7, 9]), 7);

        // start, probe(0), probe(1), probe(2), found -- nothing after.
        assert_eq!(trace.len(), 5);
        let last = trace.last().unwrap();
        assert!(last.is_narrative());
        assert_eq!(last.description, "Target value 7 found at index 2!");
        assert_eq!(last.array[2].status, Status::Sorted);
    }

    #[test]
    fn linear_probes_every_index_in_order() {
        let trace = linear_search(&elements_from_values(&[4, 2, 7]), 99);
        let probes: Vec<Option<(usize, usize)>> =
            trace.iter().filter(|s| s.is_comparison()).map(|s| s.comparison).collect();
        assert_eq!(probes, vec![Some((0, 0)), Some((1, 1)), Some((2, 2))]);
    }

    #[test]
    fn linear_misses_revert_to_default() {
        let trace = linear_search(&elements_from_values(&[4, 2, 7]), 7);
        let found = trace.last().unwrap();
        assert_eq!(found.array[0].status, Status::Default);
        assert_eq!(found.array[1].status, Status::Default);
        assert_eq!(found.array[2].status, Status::Sorted);
    }

    #[test]
    fn linear_not_found_never_tags_sorted() {
        let trace = linear_search(&elements_from_values(&[4, 2, 7]), 99);
        assert_eq!(trace.last().unwrap().description, "Target value 99 not found in the array.");
        for step in &trace {
            assert!(step.array.iter().all(|el| el.status != Status::Sorted));
        }
    }

    #[test]
    fn linear_finds_at_index_zero_immediately() {
        let trace = linear_search(&elements_from_values(&[5, 1, 2]), 5);
        // start, probe(0), found.
        assert_eq!(trace.len(), 3);
    }

    #[test]
    fn linear_finds_first_of_duplicate_targets() {
        let trace = linear_search(&elements_from_values(&[3, 7, 7]), 7);
        assert_eq!(trace.last().unwrap().description, "Target value 7 found at index 1!");
    }

    #[test]
    fn linear_does_not_mutate_its_input() {
        let input = elements_from_values(&[4, 2, 7]);
        let before = input.clone();
        let _ = linear_search(&input, 2);
        assert_eq!(input, before);
    }

    // -----------------------------------------------------------------------
    // Binary search
    // -----------------------------------------------------------------------

    #[test]
    fn binary_finds_target_seven_in_five_steps() {
        let trace = binary_search(&elements_from_values(&[1, 3, 5, 7, 9]), 7);

        assert_eq!(trace.len(), 5);
        assert_eq!(trace.comparison_count(), 2);

        // First probe: mid = 2, value 5.
        let probe1 = trace.get(1).unwrap();
        assert_eq!(probe1.comparison, Some((2, 2)));
        assert_eq!(probe1.description, "Checking middle element at index 2: 5.");

        // Mismatch narrates the surviving half.
        assert_eq!(
            trace.get(2).unwrap().description,
            "5 is less than 7. Search in the right half."
        );

        // Second probe: mid = 3, value 7 -- found, trace ends there.
        let probe2 = trace.get(3).unwrap();
        assert_eq!(probe2.comparison, Some((3, 3)));
        assert_eq!(trace.get(4).unwrap().description, "Target value 7 found at index 3!");
        assert_eq!(trace.get(4).unwrap().array[3].status, Status::Sorted);
    }

    #[test]
    fn binary_probed_midpoints_outside_the_window_keep_their_tag() {
        // After narrowing right, index 2 is outside the window and its
        // Comparing tag survives into the final snapshot.
        let trace = binary_search(&elements_from_values(&[1, 3, 5, 7, 9]), 7);
        let last = trace.last().unwrap();
        assert_eq!(last.array[2].status, Status::Comparing);
        assert_eq!(last.array[3].status, Status::Sorted);
    }

    #[test]
    fn binary_narrows_left_when_probe_exceeds_target() {
        let trace = binary_search(&elements_from_values(&[1, 3, 5, 7, 9]), 3);
        assert_eq!(
            trace.get(2).unwrap().description,
            "5 is greater than 3. Search in the left half."
        );
        assert_eq!(trace.last().unwrap().description, "Target value 3 found at index 1!");
    }

    #[test]
    fn binary_not_found_never_tags_sorted() {
        let trace = binary_search(&elements_from_values(&[1, 3, 5]), 4);
        assert_eq!(trace.last().unwrap().description, "Target value 4 not found in the array.");
        for step in &trace {
            assert!(step.array.iter().all(|el| el.status != Status::Sorted));
        }
    }

    #[test]
    fn binary_comparison_steps_stay_within_log_bound() {
        let values: Vec<i64> = (0..16).map(|v| v * 2).collect();
        let trace = binary_search(&elements_from_values(&values), 999);
        // ceil(log2(16)) + 1 = 5 probes at most for an absent target.
        assert!(trace.comparison_count() <= 5, "got {}", trace.comparison_count());
    }

    #[test]
    fn binary_single_element_found_and_not_found() {
        let found = binary_search(&elements_from_values(&[5]), 5);
        assert_eq!(found.len(), 3);
        assert_eq!(found.last().unwrap().description, "Target value 5 found at index 0!");

        let missed = binary_search(&elements_from_values(&[5]), 9);
        assert_eq!(missed.last().unwrap().description, "Target value 9 not found in the array.");
    }

    #[test]
    fn binary_empty_input_reports_not_found() {
        let trace = binary_search(&[], 5);
        assert_eq!(trace.len(), 2);
        assert_eq!(trace.last().unwrap().description, "Target value 5 not found in the array.");
    }

    #[test]
    fn binary_window_resets_to_default_before_each_probe() {
        // Probing [1, 3, 5, 7, 9] for 9: first probe tags mid 2; after
        // narrowing right to [3, 4], the second probe's snapshot shows the
        // window reset with only the new mid tagged.
        let trace = binary_search(&elements_from_values(&[1, 3, 5, 7, 9]), 9);
        let probe2 = trace.get(3).unwrap();
        assert_eq!(probe2.comparison, Some((3, 3)));
        assert_eq!(probe2.array[3].status, Status::Comparing);
        assert_eq!(probe2.array[4].status, Status::Default);
    }

    #[test]
    fn binary_does_not_mutate_its_input() {
        let input = elements_from_values(&[1, 3, 5]);
        let before = input.clone();
        let _ = binary_search(&input, 3);
        assert_eq!(input, before);
    }

    #[test]
    fn identical_input_produces_identical_traces() {
        let input = elements_from_values(&[1, 3, 5, 7]);
        assert_eq!(linear_search(&input, 5), linear_search(&input, 5));
        assert_eq!(binary_search(&input, 5), binary_search(&input, 5));
    }
}
