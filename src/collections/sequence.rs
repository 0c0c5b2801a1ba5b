//! `Sequence` — an ordered, indexable, mutable sequence.
//!
//! This is the storage behind [`Queue`](super::Queue) and [`Stack`](super::Stack).
//!
//! Implementation:
//! - Backed by a `VecDeque<T>` ring buffer, so both ends are cheap.
//! - Positions are plain indices; there is no node relinking.
//! - Out-of-range access returns `None` (or hands the value back) instead of panicking.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `append` / `prepend` | \(O(1)\) amortized | ring buffer ends |
//! | `insert` / `remove` | \(O(\min(i, n - i))\) | shifts the shorter side |
//! | `get` | \(O(1)\) | modular index |
//! | `index_of` | \(O(n)\) | linear scan |
//! | `sort` | \(O(n \log n)\) | stable, in place |

use core::fmt;
use std::collections::VecDeque;

/// An ordered sequence of `T` with index-based access at both ends and in the middle.
#[derive(Clone, PartialEq, Eq)]
#[repr(transparent)]
pub struct Sequence<T> {
    inner: VecDeque<T>,
}

impl<T> Sequence<T> {
    /// Creates an empty sequence.
    pub fn new() -> Self {
        Self {
            inner: VecDeque::new(),
        }
    }

    /// Creates an empty sequence with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: VecDeque::with_capacity(capacity),
        }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Adds `value` after the last element.
    #[inline]
    pub fn append(&mut self, value: T) {
        self.inner.push_back(value);
    }

    /// Adds `value` before the first element.
    #[inline]
    pub fn prepend(&mut self, value: T) {
        self.inner.push_front(value);
    }

    /// Inserts `value` so that it ends up at `index`, shifting later elements back.
    ///
    /// `index == len()` appends. Any larger index is rejected and the value is
    /// returned in `Err`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), T> {
        if index > self.inner.len() {
            return Err(value);
        }
        self.inner.insert(index, value);
        Ok(())
    }

    /// Removes and returns the element at `index`, or `None` if out of bounds.
    #[inline]
    pub fn remove(&mut self, index: usize) -> Option<T> {
        self.inner.remove(index)
    }

    /// Returns a shared reference to the element at `index`, if in bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.inner.get(index)
    }

    /// Returns the first element, if any.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.inner.front()
    }

    /// Iterates over the elements front to back.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator + '_ {
        self.inner.iter()
    }
}

impl<T: PartialEq> Sequence<T> {
    /// Returns the index of the first element equal to `value`.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.inner.iter().position(|item| item == value)
    }

    /// Returns `true` if some element equals `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.inner.contains(value)
    }
}

impl<T: Ord> Sequence<T> {
    /// Sorts the elements into ascending order.
    pub fn sort(&mut self) {
        self.inner.make_contiguous().sort();
    }

    /// Inserts `value` before the first element greater than it.
    ///
    /// On an ascending sequence this is the same as appending and re-sorting, and
    /// equal elements keep their arrival order.
    pub fn insert_ordered(&mut self, value: T) {
        let at = self.inner.partition_point(|item| item <= &value);
        self.inner.insert(at, value);
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::collections::vec_deque::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::collections::vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            inner: VecDeque::from(items),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.iter()).finish()
    }
}

/// Renders as `[a, b, c]`, or `[]` when empty.
impl<T: fmt::Display> fmt::Display for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.inner.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str("]")
    }
}
