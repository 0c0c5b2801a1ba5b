//! `Queue` — first-in first-out view over a [`Sequence`].

use core::fmt;

use super::Sequence;

/// A FIFO queue: `enqueue` appends, `dequeue` removes from the front.
#[derive(Clone, PartialEq, Eq)]
pub struct Queue<T> {
    items: Sequence<T>,
}

impl<T> Queue<T> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            items: Sequence::new(),
        }
    }

    /// Adds `value` at the back.
    #[inline]
    pub fn enqueue(&mut self, value: T) {
        self.items.append(value);
    }

    /// Removes and returns the front element.
    #[inline]
    pub fn dequeue(&mut self) -> Option<T> {
        self.items.remove(0)
    }

    /// Returns the front element without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    /// Number of queued elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if nothing is queued.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates front to back.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.items.iter()
    }
}

impl<T: Ord> Queue<T> {
    /// Enqueues `value` at its ascending position.
    ///
    /// On a queue that is already ascending this equals `enqueue` followed by
    /// [`sort`](Self::sort).
    #[inline]
    pub fn enqueue_ordered(&mut self, value: T) {
        self.items.insert_ordered(value);
    }

    /// Reorders the queued elements ascending.
    pub fn sort(&mut self) {
        self.items.sort();
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Queue").field(&self.items).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.items, f)
    }
}
