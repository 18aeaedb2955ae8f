//! Sortlab Core
//!
//! In-place comparison sorts over slices of totally ordered keys: naive
//! exchange, bubble, insertion, shell, selection, heap, merge, and quick
//! sort, plus the array-backed max-heap that heap sort drains.
//!
//! ```
//! use sortlab_core::{is_sorted, Algorithm};
//!
//! let mut keys = vec![3, -1, 2];
//! Algorithm::Quick.sort(&mut keys);
//! assert_eq!(keys, vec![-1, 2, 3]);
//! assert!(is_sorted(&keys));
//! ```

pub mod algorithm;
pub mod heap;
pub mod sort;

pub use algorithm::{Algorithm, ParseAlgorithmError};
pub use heap::MaxHeap;

/// Key type used by the benchmark.
pub type Key = i32;

/// True when every adjacent pair is non-descending.
pub fn is_sorted<T: Ord>(w: &[T]) -> bool {
    w.windows(2).all(|pair| pair[0] <= pair[1])
}
