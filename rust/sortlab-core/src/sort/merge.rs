//! Top-down merge sort.

/// Split at the midpoint, sort both halves, merge them back in place.
///
/// O(n log n) in every case. Stable. Each merge allocates buffers the size
/// of the two runs it merges and frees them on return.
pub fn merge_sort<T: Ord + Copy>(w: &mut [T]) {
    if w.len() <= 1 {
        return;
    }
    // Same split as `(start + end) / 2` on the closed range: the left run
    // includes the midpoint.
    let middle = (w.len() - 1) / 2;
    merge_sort(&mut w[..=middle]);
    merge_sort(&mut w[middle + 1..]);
    merge(w, middle);
}

/// Merge the sorted runs `w[..=middle]` and `w[middle + 1..]`.
///
/// Ties take from the left run.
fn merge<T: Ord + Copy>(w: &mut [T], middle: usize) {
    let left = w[..=middle].to_vec();
    let right = w[middle + 1..].to_vec();

    let (mut i, mut j) = (0, 0);
    for slot in w.iter_mut() {
        let take_left = match (left.get(i), right.get(j)) {
            (Some(l), Some(r)) => l <= r,
            (Some(_), None) => true,
            (None, _) => false,
        };
        if take_left {
            *slot = left[i];
            i += 1;
        } else {
            *slot = right[j];
            j += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merges_interleaved_runs() {
        let mut data = [1, 4, 7, 2, 3, 9];
        merge(&mut data, 2);
        assert_eq!(data, [1, 2, 3, 4, 7, 9]);
    }

    #[test]
    fn merges_uneven_runs() {
        let mut data = [5, 1, 2, 3];
        merge(&mut data, 0);
        assert_eq!(data, [1, 2, 3, 5]);
    }

    #[test]
    fn sorts_odd_length() {
        let mut data = [2, 1, 2, 1, 3];
        merge_sort(&mut data);
        assert_eq!(data, [1, 1, 2, 2, 3]);
    }
}
