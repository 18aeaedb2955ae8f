//! Shell sort with the `2^m - 1` gap sequence (..., 31, 15, 7, 3, 1).

/// Largest gap of the form `2^m - 1` that is below `n`, or 0 for `n < 2`.
pub(crate) fn initial_gap(n: usize) -> usize {
    if n < 2 {
        return 0;
    }
    (1 << n.ilog2()) - 1
}

/// Gapped insertion sort with a shrinking gap; the final pass (gap 1) is a
/// plain insertion sort. Roughly O(n^1.5). Not stable.
pub fn shell_sort<T: Ord + Copy>(w: &mut [T]) {
    let mut k = initial_gap(w.len());
    while k >= 1 {
        for i in k..w.len() {
            let value = w[i];
            let mut j = i;
            while j >= k && value < w[j - k] {
                w[j] = w[j - k];
                j -= k;
            }
            w[j] = value;
        }
        k = (k + 1) / 2 - 1;
    }
}
