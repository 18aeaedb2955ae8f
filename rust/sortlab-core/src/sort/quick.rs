//! Quick sort with a midpoint pivot and Hoare partitioning.
//!
//! The pivot is always the element at the midpoint of the range, so
//! adversarial inputs still hit the O(n²) worst case and O(n) recursion
//! depth.

pub fn quick_sort<T: Ord + Copy>(w: &mut [T]) {
    if w.len() > 1 {
        quick_sort_range(w);
    }
}

/// Sort a range of at least two elements.
fn quick_sort_range<T: Ord + Copy>(w: &mut [T]) {
    let (left, right) = partition(w);
    // `right` is exclusive here, so `right > 1` is `right_cursor > start`.
    if right > 1 {
        quick_sort_range(&mut w[..right]);
    }
    if left + 1 < w.len() {
        quick_sort_range(&mut w[left..]);
    }
}

/// Hoare partition around the value at the midpoint.
///
/// Returns `(left, right)` once the cursors have crossed: everything in
/// `w[..right]` is `<=` the pivot and everything in `w[left..]` is `>=` it.
/// The right cursor is tracked one past its position so it never has to
/// step below zero.
fn partition<T: Ord + Copy>(w: &mut [T]) -> (usize, usize) {
    let pivot = w[(w.len() - 1) / 2];
    let mut left = 0;
    let mut right = w.len();

    while left < right {
        while w[left] < pivot {
            left += 1;
        }
        while w[right - 1] > pivot {
            right -= 1;
        }
        if left < right {
            w.swap(left, right - 1);
            left += 1;
            right -= 1;
        }
    }
    (left, right)
}
