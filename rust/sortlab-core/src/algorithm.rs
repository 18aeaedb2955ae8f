//! Catalogue of the available sorting algorithms.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};
use thiserror::Error;

use crate::sort;

/// One of the eight sorting algorithms, in benchmark column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Algorithm {
    #[serde(rename = "naiveSort")]
    Naive,
    #[serde(rename = "bubbleSort")]
    Bubble,
    #[serde(rename = "insertionSort")]
    Insertion,
    #[serde(rename = "shellSort")]
    Shell,
    #[serde(rename = "selectionSort")]
    Selection,
    #[serde(rename = "heapSort")]
    Heap,
    #[serde(rename = "mergeSort")]
    Merge,
    #[serde(rename = "quickSort")]
    Quick,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sorting algorithm '{0}'")]
pub struct ParseAlgorithmError(pub String);

impl Algorithm {
    /// All algorithms in column order.
    pub fn all() -> Vec<Algorithm> {
        Algorithm::iter().collect()
    }

    /// Sort `w` in place with this algorithm.
    pub fn sort<T: Ord + Copy>(self, w: &mut [T]) {
        match self {
            Algorithm::Naive => sort::naive_sort(w),
            Algorithm::Bubble => sort::bubble_sort(w),
            Algorithm::Insertion => sort::insertion_sort(w),
            Algorithm::Shell => sort::shell_sort(w),
            Algorithm::Selection => sort::selection_sort(w),
            Algorithm::Heap => sort::heap_sort(w),
            Algorithm::Merge => sort::merge_sort(w),
            Algorithm::Quick => sort::quick_sort(w),
        }
    }

    /// Report column name, e.g. `quickSort`.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Naive => "naiveSort",
            Algorithm::Bubble => "bubbleSort",
            Algorithm::Insertion => "insertionSort",
            Algorithm::Shell => "shellSort",
            Algorithm::Selection => "selectionSort",
            Algorithm::Heap => "heapSort",
            Algorithm::Merge => "mergeSort",
            Algorithm::Quick => "quickSort",
        }
    }

    /// Lowercase short name, e.g. `quick`.
    pub fn short_name(self) -> &'static str {
        match self {
            Algorithm::Naive => "naive",
            Algorithm::Bubble => "bubble",
            Algorithm::Insertion => "insertion",
            Algorithm::Shell => "shell",
            Algorithm::Selection => "selection",
            Algorithm::Heap => "heap",
            Algorithm::Merge => "merge",
            Algorithm::Quick => "quick",
        }
    }

    /// Whether equal keys keep their relative order.
    pub fn is_stable(self) -> bool {
        matches!(
            self,
            Algorithm::Bubble | Algorithm::Insertion | Algorithm::Merge
        )
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    /// Accepts the column name or the short name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Algorithm::iter()
            .find(|a| a.name().eq_ignore_ascii_case(s) || a.short_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseAlgorithmError(s.to_string()))
    }
}

impl TryFrom<String> for Algorithm {
    type Error = ParseAlgorithmError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
