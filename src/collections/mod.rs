//! Sequence containers used as traversal frontiers.
//!
//! - `Sequence`: ordered, indexable storage
//! - `Queue`: FIFO over `Sequence`
//! - `Stack`: LIFO over `Sequence`

pub mod queue;
pub mod sequence;
pub mod stack;

pub use queue::Queue;
pub use sequence::Sequence;
pub use stack::Stack;
