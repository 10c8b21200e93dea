// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Inversion counting for the word-order penalty.
//!
//! Matched terms are laid out in text order and labelled with their position
//! in the query. Every pair that appears swapped relative to the query is one
//! inversion. Merge sort counts them in O(n log n).

/// Count pairs `(i, j)` with `i < j` and `values[i] > values[j]`.
///
/// ```
/// use helpsearch::count_inversions;
///
/// assert_eq!(count_inversions(&[0, 1, 2]), 0);
/// assert_eq!(count_inversions(&[2, 1, 0]), 3);
/// assert_eq!(count_inversions(&[1, 0, 2]), 1);
/// ```
pub fn count_inversions<T: Ord + Copy>(values: &[T]) -> usize {
    let mut work = values.to_vec();
    let mut scratch = Vec::with_capacity(values.len());
    sort_and_count(&mut work, &mut scratch)
}

fn sort_and_count<T: Ord + Copy>(values: &mut [T], scratch: &mut Vec<T>) -> usize {
    let n = values.len();
    if n < 2 {
        return 0;
    }

    let mid = n / 2;
    let mut count = sort_and_count(&mut values[..mid], scratch);
    count += sort_and_count(&mut values[mid..], scratch);

    scratch.clear();
    let (mut i, mut j) = (0, mid);
    while i < mid && j < n {
        if values[i] <= values[j] {
            scratch.push(values[i]);
            i += 1;
        } else {
            // Everything left in the lower half is greater than values[j]
            count += mid - i;
            scratch.push(values[j]);
            j += 1;
        }
    }
    scratch.extend_from_slice(&values[i..mid]);
    scratch.extend_from_slice(&values[j..n]);
    values.copy_from_slice(scratch);

    count
}
