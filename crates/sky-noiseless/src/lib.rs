// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use sky_core::Dataset;

/// Index of the lexicographic maximum within `items`.
///
/// Ties on a prefix fall through to later dimensions; fully equal items keep
/// the earlier candidate. Panics on an empty working set.
fn max_lex(dataset: &Dataset, items: &[usize]) -> usize {
    let mut maximum = items[0];
    for &item in &items[1..] {
        for k in 0..dataset.ndims() {
            if dataset.value(item, k) < dataset.value(maximum, k) {
                break;
            } else if dataset.value(item, k) > dataset.value(maximum, k) {
                maximum = item;
                break;
            }
        }
    }
    maximum
}

/// Drops from `items` every item dominated by `maximum`.
fn remove_dominated(dataset: &Dataset, maximum: usize, items: &mut Vec<usize>) {
    items.retain(|&item| {
        let mut lt = false;
        for k in 0..dataset.ndims() {
            if dataset.value(item, k) < dataset.value(maximum, k) {
                lt = true;
            } else if dataset.value(item, k) > dataset.value(maximum, k) {
                // Greater somewhere, so not dominated.
                return true;
            }
        }
        !lt
    });
}

/// Output-sensitive skyline: repeatedly extract the lexicographic maximum of
/// the working set and drop everything it dominates.
///
/// Deterministic; indices are produced in lexicographically descending order.
pub fn noiseless_skyline(dataset: &Dataset) -> Vec<usize> {
    let mut result = Vec::new();
    let mut working: Vec<usize> = (0..dataset.size()).collect();

    while !working.is_empty() {
        let maximum = max_lex(dataset, &working);
        working.retain(|&item| item != maximum);
        remove_dominated(dataset, maximum, &mut working);
        result.push(maximum);
    }

    result
}

/// Naive nested-loops skyline in O(m^2 d).
///
/// Returns the indices in ascending order together with the number of
/// attribute comparisons performed; serves as the ground truth for the
/// output-sensitive variant.
pub fn nested_loops_skyline(dataset: &Dataset) -> (Vec<usize>, u64) {
    let mut comparisons = 0u64;
    let mut skyline = Vec::new();

    for i in 0..dataset.size() {
        let mut in_skyline = true;
        // Look for an item j that dominates item i.
        for j in 0..dataset.size() {
            let mut lt = false;
            let mut k = 0;
            while k < dataset.ndims() {
                comparisons += 1;
                if dataset.value(i, k) > dataset.value(j, k) {
                    break;
                }
                if !lt {
                    comparisons += 1;
                    lt = dataset.value(i, k) < dataset.value(j, k);
                }
                k += 1;
            }
            if k == dataset.ndims() && lt {
                in_skyline = false;
                break;
            }
        }
        if in_skyline {
            skyline.push(i);
        }
    }

    (skyline, comparisons)
}
