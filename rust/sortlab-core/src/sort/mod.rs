//! The eight in-place sorting algorithms.
//!
//! Every function sorts its slice into non-descending order, keeps the same
//! multiset of values, and accepts any length including 0 and 1.

mod bubble;
mod exchange;
mod heap_sort;
mod insertion;
mod merge;
mod quick;
mod shell;

pub use bubble::bubble_sort;
pub use exchange::{naive_sort, selection_sort};
pub use heap_sort::heap_sort;
pub use insertion::insertion_sort;
pub use merge::merge_sort;
pub use quick::quick_sort;
pub use shell::shell_sort;
