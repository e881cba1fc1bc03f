use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Cell index with the `f` it was pushed with, ordered for a min-heap.
#[derive(Clone, Copy, Debug)]
struct Entry {
    f: f32,
    idx: usize,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first; ties go to
        // the lower index so pop order is deterministic.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

/// Binary min-heap of cell indices keyed by estimated total cost.
///
/// A cell may be pushed several times; the heap does not deduplicate.
/// Whoever pops decides whether an entry is stale.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Entry>,
}

impl Frontier {
    /// Create an empty frontier with room for `capacity` entries.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    /// Push cell `idx` with estimated total cost `f`.
    #[inline]
    pub(crate) fn push(&mut self, idx: usize, f: f32) {
        self.heap.push(Entry { f, idx });
    }

    /// Pop the cell with the smallest `f`.
    #[inline]
    pub(crate) fn pop(&mut self) -> Option<usize> {
        self.heap.pop().map(|e| e.idx)
    }

    /// Number of queued entries, stale duplicates included.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }

    /// Remove every entry, keeping the allocation.
    #[inline]
    pub(crate) fn clear(&mut self) {
        self.heap.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_f_order() {
        let mut fr = Frontier::default();
        for (idx, f) in [(7, 3.5), (2, 1.0), (9, 8.0), (4, 2.25)] {
            fr.push(idx, f);
        }
        let order: Vec<usize> = std::iter::from_fn(|| fr.pop()).collect();
        assert_eq!(order, vec![2, 4, 7, 9]);
        assert_eq!(fr.pop(), None);
    }

    #[test]
    fn ties_break_on_index() {
        let mut fr = Frontier::default();
        fr.push(5, 1.0);
        fr.push(3, 1.0);
        fr.push(8, 1.0);
        assert_eq!(fr.pop(), Some(3));
        assert_eq!(fr.pop(), Some(5));
        assert_eq!(fr.pop(), Some(8));
    }

    #[test]
    fn duplicates_allowed() {
        let mut fr = Frontier::with_capacity(4);
        fr.push(1, 4.0);
        fr.push(1, 2.0);
        assert_eq!(fr.len(), 2);
        assert_eq!(fr.pop(), Some(1));
        assert_eq!(fr.pop(), Some(1));
        assert_eq!(fr.pop(), None);
    }

    #[test]
    fn clear_empties() {
        let mut fr = Frontier::default();
        fr.push(0, 0.0);
        fr.push(1, 1.0);
        fr.clear();
        assert_eq!(fr.pop(), None);
    }
}
