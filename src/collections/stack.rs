//! `Stack` — last-in first-out view over a [`Sequence`].
//!
//! The top of the stack is the front of the sequence, so `Display` lists the top
//! element first.

use core::fmt;

use super::Sequence;

/// A LIFO stack: `push` inserts at the front, `pop` removes from the front.
#[derive(Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: Sequence<T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self {
            items: Sequence::new(),
        }
    }

    /// Places `value` on top.
    #[inline]
    pub fn push(&mut self, value: T) {
        self.items.prepend(value);
    }

    /// Removes and returns the top element.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.items.remove(0)
    }

    /// Returns the top element without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    /// Number of stacked elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the stack holds nothing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Stack").field(&self.items).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.items, f)
    }
}
