//! Binary min-heap keyed by an integer estimate.
//!
//! Stored as an implicit tree in a `Vec`: the parent of index `i` is
//! `(i - 1) / 2`, its children are `2i + 1` and `2i + 2`. Entries only move
//! past one another on a strictly smaller key, so an entry never overtakes
//! an equal-keyed parent.

#[derive(Debug, Clone)]
struct Entry<T> {
    key: i32,
    value: T,
}

/// A min-heap of values ordered by an `i32` key.
#[derive(Debug, Clone)]
pub struct MinHeap<T> {
    items: Vec<Entry<T>>,
}

impl<T> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MinHeap<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// The minimum key and its value, without removing it.
    pub fn peek(&self) -> Option<(i32, &T)> {
        self.items.first().map(|e| (e.key, &e.value))
    }

    /// Append `value` and sift it up toward the root.
    pub fn insert(&mut self, key: i32, value: T) {
        self.items.push(Entry { key, value });
        let mut i = self.items.len() - 1;
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.items[i].key >= self.items[parent].key {
                break;
            }
            self.items.swap(i, parent);
            i = parent;
        }
    }

    /// Remove and return the entry with the smallest key.
    pub fn extract_min(&mut self) -> Option<(i32, T)> {
        if self.items.is_empty() {
            return None;
        }
        let last = self.items.len() - 1;
        self.items.swap(0, last);
        let min = self.items.pop()?;
        self.sift_down(0);
        Some((min.key, min.value))
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.items.len();
        loop {
            let left = 2 * i + 1;
            if left >= n {
                return;
            }
            let right = left + 1;
            let smaller = if right < n && self.items[right].key < self.items[left].key {
                right
            } else {
                left
            };
            if self.items[smaller].key >= self.items[i].key {
                return;
            }
            self.items.swap(i, smaller);
            i = smaller;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn extracts_in_key_order() {
        let mut h = MinHeap::new();
        for (k, v) in [(5, 'a'), (1, 'b'), (4, 'c'), (2, 'd'), (3, 'e')] {
            h.insert(k, v);
        }
        assert_eq!(h.peek(), Some((1, &'b')));
        let keys: Vec<i32> = std::iter::from_fn(|| h.extract_min().map(|(k, _)| k)).collect();
        assert_eq!(keys, vec![1, 2, 3, 4, 5]);
        assert!(h.is_empty());
        assert_eq!(h.extract_min(), None);
    }

    #[test]
    fn equal_key_does_not_overtake_parent() {
        let mut h = MinHeap::new();
        h.insert(3, "first");
        h.insert(3, "second");
        assert_eq!(h.peek(), Some((3, &"first")));
    }

    #[derive(Debug, Clone)]
    enum Op {
        Insert(i32),
        Extract,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            3 => (-50i32..50).prop_map(Op::Insert),
            2 => Just(Op::Extract),
        ]
    }

    proptest! {
        #[test]
        fn root_is_always_the_minimum(ops in proptest::collection::vec(op(), 0..200)) {
            let mut heap = MinHeap::new();
            let mut reference: Vec<i32> = Vec::new();
            for op in ops {
                match op {
                    Op::Insert(k) => {
                        heap.insert(k, ());
                        reference.push(k);
                    }
                    Op::Extract => {
                        reference.sort_unstable();
                        let expected = if reference.is_empty() {
                            None
                        } else {
                            Some(reference.remove(0))
                        };
                        prop_assert_eq!(heap.extract_min().map(|(k, _)| k), expected);
                    }
                }
                prop_assert_eq!(heap.len(), reference.len());
                prop_assert_eq!(heap.peek().map(|(k, _)| k), reference.iter().copied().min());
            }
        }
    }
}
