/// Grow a sorted prefix by shifting larger elements right and dropping the
/// next value into the gap.
///
/// O(n²) worst case, O(n) on sorted input. Stable: shifting stops at the
/// first element that is not strictly greater.
pub fn insertion_sort<T: Ord + Copy>(w: &mut [T]) {
    for i in 1..w.len() {
        let value = w[i];
        let mut j = i;
        while j > 0 && value < w[j - 1] {
            w[j] = w[j - 1];
            j -= 1;
        }
        w[j] = value;
    }
}
