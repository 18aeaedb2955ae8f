/// Swap out-of-order neighbours across a range that shrinks by one per pass.
///
/// After pass `i` the `i + 1` largest elements sit at the tail. Always runs
/// all `n - 1` passes, even on sorted input. Stable.
pub fn bubble_sort<T: Ord>(w: &mut [T]) {
    let n = w.len();
    for i in 0..n.saturating_sub(1) {
        for j in 0..n - 1 - i {
            if w[j] > w[j + 1] {
                w.swap(j, j + 1);
            }
        }
    }
}
