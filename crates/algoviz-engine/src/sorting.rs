//! Sort trace generators: bubble sort, insertion sort, quick sort.
//!
//! Each generator copies its input, runs the textbook algorithm against the
//! copy, and records every comparison, swap, and milestone into a
//! [`Trace`] via the shared [`StepRecorder`]. Comparisons are strictly
//! greater-than, so equal values never move past each other and the sorts
//! stay stable where the algorithm allows it.
//!
//! Recording discipline, shared by all three:
//! - tag both elements `Comparing` before emitting a comparison step;
//! - tag both elements `Swapping` and emit the swap step, then perform the
//!   exchange on the working array;
//! - reset transient tags to `Default` afterwards, unless the element just
//!   reached its final position, which is tagged `Sorted` with a narrative
//!   step;
//! - the final step of every sort shows all elements `Sorted` in ascending
//!   order.

use algoviz_core::{Element, Status, Trace};
use tracing::debug;

use crate::recorder::StepRecorder;

/// Generates the bubble sort trace for `input`.
///
/// Classic adjacent-pass bubble sort with early exit: a pass that performs
/// no swaps marks every remaining element `Sorted` and stops with a
/// dedicated narrative step.
pub fn bubble_sort(input: &[Element]) -> Trace {
    let mut arr = input.to_vec();
    let n = arr.len();
    let mut rec = StepRecorder::new();

    rec.narrative(
        &arr,
        "Starting Bubble Sort algorithm. We will compare adjacent elements and swap them if they are in the wrong order.",
    );

    if n == 0 {
        rec.narrative(&arr, "The array is empty. Nothing to sort.");
        return rec.finish();
    }

    for i in 0..n {
        let mut swapped = false;

        for j in 0..n - i - 1 {
            arr[j].status = Status::Comparing;
            arr[j + 1].status = Status::Comparing;
            rec.comparison(
                &arr,
                format!(
                    "Comparing elements at indices {} and {}: {} and {}",
                    j,
                    j + 1,
                    arr[j].value,
                    arr[j + 1].value
                ),
                (j, j + 1),
            );

            if arr[j].value > arr[j + 1].value {
                arr[j].status = Status::Swapping;
                arr[j + 1].status = Status::Swapping;
                rec.swap(
                    &arr,
                    format!("Swapping elements: {} and {}", arr[j].value, arr[j + 1].value),
                    (j, j + 1),
                );
                arr.swap(j, j + 1);
                swapped = true;
            }

            arr[j].status = Status::Default;
            arr[j + 1].status = Status::Default;
        }

        // The largest unsorted element has bubbled to the end of the pass.
        arr[n - i - 1].status = Status::Sorted;
        rec.narrative(
            &arr,
            format!("Element {} is now in its correct position.", arr[n - i - 1].value),
        );

        if !swapped {
            for el in &mut arr[..n - i - 1] {
                el.status = Status::Sorted;
            }
            rec.narrative(&arr, "No swaps performed in this pass. The array is now sorted!");
            break;
        }
    }

    let trace = rec.finish();
    debug!("bubble sort: {} elements, {} steps", n, trace.len());
    trace
}

/// Generates the insertion sort trace for `input`.
///
/// The key element keeps a `Comparing` tag while strictly-greater
/// predecessors shift one slot right. Shifts are reported through the
/// step's `swap` field -- the animation channel treats any movement alike.
pub fn insertion_sort(input: &[Element]) -> Trace {
    let mut arr = input.to_vec();
    let n = arr.len();
    let mut rec = StepRecorder::new();

    rec.narrative(
        &arr,
        "Starting Insertion Sort algorithm. We will build the sorted array one element at a time.",
    );

    if n == 0 {
        rec.narrative(&arr, "The array is empty. Nothing to sort.");
        return rec.finish();
    }

    arr[0].status = Status::Sorted;
    rec.narrative(&arr, format!("First element {} is considered sorted.", arr[0].value));

    for i in 1..n {
        let key = arr[i].value;
        arr[i].status = Status::Comparing;
        rec.comparison(
            &arr,
            format!("Picking element at index {}: {} to insert into the sorted portion.", i, key),
            (i, i),
        );

        // `pos` tracks where the key currently sits as it moves left.
        let mut pos = i;
        while pos > 0 && arr[pos - 1].value > key {
            let j = pos - 1;
            arr[j].status = Status::Comparing;
            rec.comparison(
                &arr,
                format!("Comparing {} with {} at index {}.", key, arr[j].value, j),
                (i, j),
            );

            arr[j].status = Status::Swapping;
            arr[pos].status = Status::Swapping;
            rec.swap(
                &arr,
                format!("Moving {} one position ahead.", arr[j].value),
                (j, pos),
            );
            arr.swap(j, pos);

            // The shifted predecessor is back in sorted territory; the key
            // keeps its held-out tag while it continues moving left.
            arr[pos].status = Status::Sorted;
            arr[j].status = Status::Comparing;
            pos -= 1;
        }

        arr[pos].status = Status::Sorted;
        rec.narrative(&arr, format!("Inserted {} at position {}.", key, pos));
    }

    rec.narrative(&arr, "Insertion Sort completed. The array is now sorted!");

    let trace = rec.finish();
    debug!("insertion sort: {} elements, {} steps", n, trace.len());
    trace
}

/// Generates the quick sort trace for `input`.
///
/// Recursive in-place Lomuto partitioning with the rightmost element as
/// pivot, left partition recursed before the right. After the recursion a
/// final pass forces every element `Sorted` -- subranges where
/// `low >= high` never get individually tagged.
pub fn quick_sort(input: &[Element]) -> Trace {
    let mut arr = input.to_vec();
    let n = arr.len();
    let mut rec = StepRecorder::new();

    rec.narrative(
        &arr,
        "Starting Quick Sort algorithm. We will select a pivot and partition the array around it.",
    );

    if n > 1 {
        quick_sort_recurse(&mut arr, 0, n - 1, &mut rec);
    }

    for el in &mut arr {
        el.status = Status::Sorted;
    }
    rec.narrative(&arr, "Quick Sort completed. The array is now sorted!");

    let trace = rec.finish();
    debug!("quick sort: {} elements, {} steps", n, trace.len());
    trace
}

/// Depth-first, left-first recursion over explicit `(low, high)` bounds.
fn quick_sort_recurse(arr: &mut [Element], low: usize, high: usize, rec: &mut StepRecorder) {
    if low >= high {
        return;
    }

    let pivot = partition(arr, low, high, rec);

    if pivot > low {
        quick_sort_recurse(arr, low, pivot - 1, rec);
    }
    quick_sort_recurse(arr, pivot + 1, high, rec);
}

/// Lomuto partition of `arr[low..=high]` around the rightmost element.
///
/// Returns the pivot's final index. The pivot-placement swap step is
/// emitted even when the pivot is already in position (`boundary == high`)
/// and no elements actually move; the recorded pair is still consistent
/// with the positions exchanged.
fn partition(arr: &mut [Element], low: usize, high: usize, rec: &mut StepRecorder) -> usize {
    let pivot_value = arr[high].value;
    arr[high].status = Status::Comparing;
    rec.narrative(arr, format!("Selecting pivot: {} at index {}.", pivot_value, high));

    // Next slot for an element strictly smaller than the pivot.
    let mut boundary = low;

    for j in low..high {
        arr[j].status = Status::Comparing;
        rec.comparison(
            arr,
            format!("Comparing {} with pivot {}.", arr[j].value, pivot_value),
            (j, high),
        );

        if arr[j].value < pivot_value {
            if boundary != j {
                arr[boundary].status = Status::Swapping;
                arr[j].status = Status::Swapping;
                rec.swap(
                    arr,
                    format!("Swapping {} and {}.", arr[boundary].value, arr[j].value),
                    (boundary, j),
                );
                arr.swap(boundary, j);
                arr[boundary].status = Status::Default;
            }
            boundary += 1;
        }

        arr[j].status = Status::Default;
    }

    arr[boundary].status = Status::Swapping;
    arr[high].status = Status::Swapping;
    rec.swap(
        arr,
        format!("Placing pivot {} in its correct position at index {}.", pivot_value, boundary),
        (boundary, high),
    );
    arr.swap(boundary, high);
    if boundary != high {
        arr[high].status = Status::Default;
    }
    arr[boundary].status = Status::Sorted;
    rec.narrative(arr, format!("Pivot {} is now in its final position.", pivot_value));

    boundary
}
