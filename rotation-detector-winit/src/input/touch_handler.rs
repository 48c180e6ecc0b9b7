use cgmath::Point2;
use rotation_detector::{Pointer, PointerAction, PointerEvent, PointerId};

/// Keeps track of the active touches and turns single winit touch updates into pointer events
/// which carry every active contact.
///
/// Touches are kept in the order they went down, so the index of a touch only changes when an
/// earlier touch lifts.
#[derive(Default)]
pub struct TouchHandler {
    touches: Vec<Pointer>,
}

impl TouchHandler {
    pub fn process_touch_start(
        &mut self,
        id: PointerId,
        position: Point2<f64>,
    ) -> Option<PointerEvent> {
        if self.index_of(id).is_some() {
            log::warn!("touch {} started twice", id);
            return None;
        }

        let action = if self.touches.is_empty() {
            PointerAction::Down
        } else {
            PointerAction::PointerDown
        };

        self.touches.push(Pointer::new(id, position));
        self.snapshot(action, self.touches.len() - 1)
    }

    pub fn process_touch_move(
        &mut self,
        id: PointerId,
        position: Point2<f64>,
    ) -> Option<PointerEvent> {
        let index = self.index_of(id)?;
        self.touches[index].position = position;
        self.snapshot(PointerAction::Move, index)
    }

    /// Emits the lift of a touch. The lifted touch is part of the event and forgotten afterwards.
    pub fn process_touch_end(
        &mut self,
        id: PointerId,
        position: Point2<f64>,
    ) -> Option<PointerEvent> {
        let index = self.index_of(id)?;
        self.touches[index].position = position;

        let action = if self.touches.len() == 1 {
            PointerAction::Up
        } else {
            PointerAction::PointerUp
        };

        let event = self.snapshot(action, index);
        self.touches.remove(index);
        event
    }

    pub fn active_touches(&self) -> usize {
        self.touches.len()
    }

    fn index_of(&self, id: PointerId) -> Option<usize> {
        self.touches.iter().position(|touch| touch.id == id)
    }

    fn snapshot(&self, action: PointerAction, index: usize) -> Option<PointerEvent> {
        match PointerEvent::new(action, index, self.touches.clone()) {
            Ok(event) => Some(event),
            Err(e) => {
                log::error!("dropping touch update: {}", e);
                None
            }
        }
    }
}
