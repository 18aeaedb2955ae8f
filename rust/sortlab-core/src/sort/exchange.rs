//! Exchange sorts: naive exchange and selection.
//!
//! Both settle position `i` with the minimum of `[i, n)` on every outer
//! pass. Naive sort swaps as soon as it sees a smaller element; selection
//! sort remembers the index and swaps once per pass.

/// Compare each position against every later one, swapping on the spot.
///
/// O(n²) comparisons and up to O(n²) writes. Not stable.
pub fn naive_sort<T: Ord>(w: &mut [T]) {
    let n = w.len();
    for i in 0..n.saturating_sub(1) {
        for j in i + 1..n {
            if w[j] < w[i] {
                w.swap(i, j);
            }
        }
    }
}

/// Find the minimum of `[i, n)` and swap it into place once per pass.
///
/// O(n²) comparisons, at most n - 1 swaps. Not stable.
pub fn selection_sort<T: Ord>(w: &mut [T]) {
    let n = w.len();
    for i in 0..n.saturating_sub(1) {
        let mut min_index = i;
        for j in i + 1..n {
            if w[j] < w[min_index] {
                min_index = j;
            }
        }
        if min_index != i {
            w.swap(i, min_index);
        }
    }
}
