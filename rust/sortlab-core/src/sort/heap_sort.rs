use crate::heap::MaxHeap;

/// Heapify the whole slice, then extract the maximum once per element.
///
/// Each extraction parks the maximum in the last unfilled slot, filling the
/// slice from the back. O(n log n) in every case. Not stable.
pub fn heap_sort<T: Ord + Copy>(w: &mut [T]) {
    let mut heap = MaxHeap::build(w);
    while heap.extract_max().is_some() {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_small_input() {
        let mut data = [3, 1, 4, 1, 5, 9, 2, 6];
        heap_sort(&mut data);
        assert_eq!(data, [1, 1, 2, 3, 4, 5, 6, 9]);
    }
}
