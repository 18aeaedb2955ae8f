//! Behavioural properties shared by every sorting algorithm.
//!
//! Inputs come from a small deterministic LCG so failures reproduce
//! exactly.

use std::cmp::Ordering;

use sortlab_core::{is_sorted, Algorithm, Key, MaxHeap};

/// Simple deterministic LCG pseudo-random number generator.
struct Rng {
    state: u64,
}

impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.state
    }

    fn next_key(&mut self) -> Key {
        (self.next() >> 32) as u32 as Key
    }

    fn next_range(&mut self, lo: i64, hi: i64) -> i64 {
        let range = (hi - lo + 1) as u64;
        lo + (self.next() % range) as i64
    }

    fn keys(&mut self, len: usize) -> Vec<Key> {
        (0..len).map(|_| self.next_key()).collect()
    }
}

/// Record ordered by `key` only, so equal keys with different tags let a
/// test observe whether their relative order survived.
#[derive(Debug, Clone, Copy)]
struct Tagged {
    key: Key,
    tag: usize,
}

impl PartialEq for Tagged {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Tagged {}

impl PartialOrd for Tagged {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tagged {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

fn sorted_copy(input: &[Key]) -> Vec<Key> {
    let mut expected = input.to_vec();
    expected.sort_unstable();
    expected
}

fn check(algorithm: Algorithm, input: &[Key]) {
    let mut data = input.to_vec();
    algorithm.sort(&mut data);
    assert_eq!(data.len(), input.len(), "{algorithm}: length changed");
    assert!(is_sorted(&data), "{algorithm}: not sorted: {data:?}");
    assert_eq!(data, sorted_copy(input), "{algorithm}: not a permutation");
}

// =============================================================================
// Concrete scenarios
// =============================================================================

#[test]
fn empty_input() {
    for algorithm in Algorithm::all() {
        let mut data: Vec<Key> = vec![];
        algorithm.sort(&mut data);
        assert!(data.is_empty(), "{algorithm}");
    }
}

#[test]
fn single_element() {
    for algorithm in Algorithm::all() {
        let mut data = vec![5];
        algorithm.sort(&mut data);
        assert_eq!(data, vec![5], "{algorithm}");
    }
}

#[test]
fn three_elements() {
    for algorithm in Algorithm::all() {
        let mut data = vec![3, 1, 2];
        algorithm.sort(&mut data);
        assert_eq!(data, vec![1, 2, 3], "{algorithm}");
    }
}

#[test]
fn reverse_sorted() {
    for algorithm in Algorithm::all() {
        let mut data = vec![5, 4, 3, 2, 1];
        algorithm.sort(&mut data);
        assert_eq!(data, vec![1, 2, 3, 4, 5], "{algorithm}");
    }
}

#[test]
fn duplicates() {
    for algorithm in Algorithm::all() {
        let mut data = vec![2, 1, 2, 1, 3];
        algorithm.sort(&mut data);
        assert_eq!(data, vec![1, 1, 2, 2, 3], "{algorithm}");
    }
}

#[test]
fn merge_sort_keeps_duplicate_order() {
    let keys = [2, 1, 2, 1, 3];
    let mut data: Vec<Tagged> = keys
        .iter()
        .enumerate()
        .map(|(tag, &key)| Tagged { key, tag })
        .collect();
    Algorithm::Merge.sort(&mut data);
    let tags: Vec<usize> = data.iter().map(|t| t.tag).collect();
    assert_eq!(tags, vec![1, 3, 0, 2, 4]);
}

#[test]
fn heap_build_and_drain() {
    let input = [3, 1, 4, 1, 5, 9, 2, 6];
    let mut data = input;
    let mut heap = MaxHeap::build(&mut data);
    assert_eq!(heap.peek(), Some(&9));

    let mut extracted = Vec::new();
    for _ in 0..input.len() {
        extracted.extend(heap.extract_max());
    }
    assert!(heap.extract_max().is_none());

    let mut expected = input.to_vec();
    expected.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(extracted, expected);
}

// =============================================================================
// Generated inputs
// =============================================================================

#[test]
fn random_inputs_are_sorted_permutations() {
    let mut rng = Rng::new(0x5eed);
    for len in [2, 3, 7, 16, 31, 64, 100, 257, 1000] {
        let input = rng.keys(len);
        for algorithm in Algorithm::all() {
            check(algorithm, &input);
        }
    }
}

#[test]
fn narrow_key_range_with_many_duplicates() {
    let mut rng = Rng::new(42);
    for len in [10, 99, 500] {
        let input: Vec<Key> = (0..len).map(|_| rng.next_range(-3, 3) as Key).collect();
        for algorithm in Algorithm::all() {
            check(algorithm, &input);
        }
    }
}

#[test]
fn extreme_keys() {
    let input = vec![Key::MAX, Key::MIN, 0, -1, Key::MAX, 1, Key::MIN];
    for algorithm in Algorithm::all() {
        check(algorithm, &input);
    }
}

#[test]
fn organ_pipe_and_sawtooth() {
    let organ: Vec<Key> = (0..50).chain((0..50).rev()).collect();
    let saw: Vec<Key> = (0..200).map(|i| i % 13).collect();
    for algorithm in Algorithm::all() {
        check(algorithm, &organ);
        check(algorithm, &saw);
    }
}

#[test]
fn sorting_sorted_input_is_identity() {
    let mut rng = Rng::new(7);
    let sorted = sorted_copy(&rng.keys(300));
    for algorithm in Algorithm::all() {
        let mut data = sorted.clone();
        algorithm.sort(&mut data);
        assert_eq!(data, sorted, "{algorithm}");
        algorithm.sort(&mut data);
        assert_eq!(data, sorted, "{algorithm}: second pass");
    }
}

#[test]
fn stable_algorithms_keep_equal_keys_in_order() {
    let mut rng = Rng::new(1234);
    for len in [5, 40, 333] {
        let input: Vec<Tagged> = (0..len)
            .map(|tag| Tagged {
                key: rng.next_range(0, 9) as Key,
                tag,
            })
            .collect();
        for algorithm in Algorithm::all().into_iter().filter(|a| a.is_stable()) {
            let mut data = input.clone();
            algorithm.sort(&mut data);
            assert!(is_sorted(&data), "{algorithm}");
            for pair in data.windows(2) {
                if pair[0].key == pair[1].key {
                    assert!(
                        pair[0].tag < pair[1].tag,
                        "{algorithm}: equal keys reordered at {pair:?}"
                    );
                }
            }
        }
    }
}

#[test]
fn unstable_algorithms_still_sort_tagged_records() {
    let mut rng = Rng::new(99);
    let input: Vec<Tagged> = (0..200)
        .map(|tag| Tagged {
            key: rng.next_range(-5, 5) as Key,
            tag,
        })
        .collect();
    for algorithm in Algorithm::all() {
        let mut data = input.clone();
        algorithm.sort(&mut data);
        assert!(is_sorted(&data), "{algorithm}");
        let mut tags: Vec<usize> = data.iter().map(|t| t.tag).collect();
        tags.sort_unstable();
        assert_eq!(tags, (0..200).collect::<Vec<_>>(), "{algorithm}");
    }
}
