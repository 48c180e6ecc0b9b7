//! Errors which can happen while building pointer events.

use thiserror::Error;

use crate::pointer::PointerId;

/// A [`crate::PointerEvent`] could not be built because its shape is inconsistent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PointerEventError {
    /// Every pointer event carries at least the pointer which triggered it
    #[error("pointer event without any active pointer")]
    NoPointers,
    #[error("action index {index} out of range for {count} active pointers")]
    ActionIndexOutOfRange { index: usize, count: usize },
    #[error("pointer id {0} is active more than once")]
    DuplicatePointerId(PointerId),
}
