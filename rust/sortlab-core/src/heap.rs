//! Array-backed binary max-heap.
//!
//! The heap is an implicit tree laid over a borrowed slice: the children of
//! node `i` live at `2i + 1` and `2i + 2`, its parent at `(i - 1) / 2`. Only
//! the live prefix `[0, size)` is a heap. Every extraction parks the removed
//! maximum in the slot just past the shrunken live region, so draining the
//! heap leaves the backing slice in ascending order.

/// Max-heap view over a mutable slice.
#[derive(Debug)]
pub struct MaxHeap<'a, T> {
    items: &'a mut [T],
    size: usize,
}

impl<'a, T: Ord + Copy> MaxHeap<'a, T> {
    /// Rearrange `items` into max-heap order in O(n).
    ///
    /// Sifts down every internal node, starting from the last one
    /// (`len / 2 - 1`) and walking back to the root.
    pub fn build(items: &'a mut [T]) -> Self {
        let size = items.len();
        let mut heap = Self { items, size };
        for i in (0..size / 2).rev() {
            heap.sift_down(i);
        }
        debug_assert!(heap.is_valid());
        heap
    }

    /// Remove and return the largest live element.
    ///
    /// Returns `None` once every element has been extracted.
    pub fn extract_max(&mut self) -> Option<T> {
        if self.size == 0 {
            return None;
        }
        let max = self.items[0];
        self.size -= 1;
        self.items.swap(0, self.size);
        self.sift_down(0);
        Some(max)
    }

    /// The current maximum, if any.
    pub fn peek(&self) -> Option<&T> {
        self.live().first()
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Check the heap invariant over the live region.
    pub fn is_valid(&self) -> bool {
        let live = self.live();
        (1..live.len()).all(|child| live[(child - 1) / 2] >= live[child])
    }

    fn live(&self) -> &[T] {
        &self.items[..self.size]
    }

    /// Move the element at `parent` down until neither child is larger.
    ///
    /// Both subtrees of `parent` must already be heaps.
    fn sift_down(&mut self, mut parent: usize) {
        loop {
            let left = 2 * parent + 1;
            if left >= self.size {
                return;
            }
            let right = left + 1;
            let mut largest = if self.items[left] > self.items[parent] {
                left
            } else {
                parent
            };
            if right < self.size && self.items[right] > self.items[largest] {
                largest = right;
            }
            if largest == parent {
                return;
            }
            self.items.swap(parent, largest);
            parent = largest;
        }
    }
}
