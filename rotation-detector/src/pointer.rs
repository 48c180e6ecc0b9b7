//! Pointer events as delivered by the host view.

use std::{fmt, fmt::Formatter};

use cgmath::Point2;

use crate::error::PointerEventError;

/// Stable identifier of a contact for as long as it touches the surface.
///
/// Hosts may hand out the same id again once the contact has lifted.
#[derive(Ord, PartialOrd, Eq, PartialEq, Hash, Copy, Clone, Debug)]
pub struct PointerId(pub u64);

impl fmt::Display for PointerId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u64> for PointerId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// The kind of pointer lifecycle notification.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum PointerAction {
    /// The first contact of a gesture went down
    Down,
    /// A further contact went down while others are active
    PointerDown,
    /// One or more active contacts moved
    Move,
    /// A contact lifted while others stay active
    PointerUp,
    /// The last active contact lifted
    Up,
    /// The host aborted the gesture
    Cancel,
    /// Any other notification, never used by the detector
    Other,
}

/// One active contact within a [`PointerEvent`].
#[derive(PartialEq, Copy, Clone, Debug)]
pub struct Pointer {
    pub id: PointerId,
    pub position: Point2<f64>,
}

impl Pointer {
    pub fn new(id: PointerId, position: Point2<f64>) -> Self {
        Self { id, position }
    }
}

/// A single pointer notification together with a snapshot of every active contact.
///
/// Pointers are addressed by their index within the snapshot. The pointer which triggered the
/// event is found at [`PointerEvent::action_index`]. For [`PointerAction::PointerUp`] and
/// [`PointerAction::Up`] the lifted contact is still part of the snapshot.
#[derive(Clone, Debug)]
pub struct PointerEvent {
    action: PointerAction,
    action_index: usize,
    pointers: Vec<Pointer>,
}

impl PointerEvent {
    /// Creates a new pointer event.
    ///
    /// # Arguments
    ///
    /// * `action`: What happened.
    /// * `action_index`: Index of the pointer within `pointers` which triggered the event.
    /// * `pointers`: All currently active pointers, including a pointer which is lifting.
    ///
    /// returns: Result<PointerEvent, PointerEventError>
    ///
    pub fn new(
        action: PointerAction,
        action_index: usize,
        pointers: Vec<Pointer>,
    ) -> Result<Self, PointerEventError> {
        if pointers.is_empty() {
            return Err(PointerEventError::NoPointers);
        }

        if action_index >= pointers.len() {
            return Err(PointerEventError::ActionIndexOutOfRange {
                index: action_index,
                count: pointers.len(),
            });
        }

        for (i, pointer) in pointers.iter().enumerate() {
            if pointers[..i].iter().any(|other| other.id == pointer.id) {
                return Err(PointerEventError::DuplicatePointerId(pointer.id));
            }
        }

        Ok(Self {
            action,
            action_index,
            pointers,
        })
    }

    pub fn action(&self) -> PointerAction {
        self.action
    }

    pub fn action_index(&self) -> usize {
        self.action_index
    }

    /// Id of the pointer which triggered this event.
    pub fn action_pointer_id(&self) -> PointerId {
        self.pointers[self.action_index].id
    }

    pub fn pointer_count(&self) -> usize {
        self.pointers.len()
    }

    pub fn pointers(&self) -> &[Pointer] {
        &self.pointers
    }

    pub fn pointer_id(&self, index: usize) -> Option<PointerId> {
        self.pointers.get(index).map(|pointer| pointer.id)
    }

    pub fn position(&self, index: usize) -> Option<Point2<f64>> {
        self.pointers.get(index).map(|pointer| pointer.position)
    }

    /// Finds the index of the pointer with the given id, if it is active.
    pub fn find_pointer_index(&self, id: PointerId) -> Option<usize> {
        self.pointers.iter().position(|pointer| pointer.id == id)
    }
}
