//! Two finger rotation state machine.

use cgmath::{Deg, Point2, Rad, Zero};

use crate::{
    listener::RotationListener,
    pointer::{PointerAction, PointerEvent, PointerId},
    util::math::angle_between_lines,
};

/// Settings which control how a [`RotationGestureDetector`] talks to its listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DetectorSettings {
    /// Ask [`RotationListener::on_rotation_begin`] whenever a second pointer starts to be tracked.
    pub notify_begin: bool,
    /// Let a `false` from [`RotationListener::on_rotation_begin`] decline the gesture. A declined
    /// gesture is still followed, but reports neither rotation nor end until the next begin.
    pub begin_can_decline: bool,
}

impl Default for DetectorSettings {
    fn default() -> Self {
        Self {
            notify_begin: true,
            begin_can_decline: false,
        }
    }
}

/// One of the two pointers followed by the detector.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSlot {
    /// `None` while the slot is free
    pub id: Option<PointerId>,
    /// Last known position of the pointer
    pub position: Point2<f64>,
}

impl PointerSlot {
    fn bind(&mut self, id: PointerId, position: Point2<f64>) {
        self.id = Some(id);
        self.position = position;
    }

    fn clear(&mut self) {
        self.id = None;
    }

    pub fn is_bound(&self) -> bool {
        self.id.is_some()
    }
}

impl Default for PointerSlot {
    fn default() -> Self {
        Self {
            id: None,
            position: Point2::new(0.0, 0.0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureState {
    /// No pointer is tracked
    Idle,
    /// Only the primary pointer is tracked
    Single,
    /// Both pointers are tracked and the angle between them is followed
    Tracking,
}

/// Detects two finger rotation gestures and reports the rotation angle to a listener.
///
/// At most two pointers are tracked. Further pointers are ignored until one of the tracked
/// pointers lifts, in which case they may take its place.
pub struct RotationGestureDetector<L> {
    listener: L,
    settings: DetectorSettings,

    primary: PointerSlot,
    secondary: PointerSlot,
    /// Rotation which has not yet been consumed by the listener
    angle: Rad<f64>,
    /// Whether the listener accepted the current rotation
    rotating: bool,
}

impl<L: RotationListener> RotationGestureDetector<L> {
    pub fn new(listener: L) -> Self {
        Self::with_settings(listener, DetectorSettings::default())
    }

    pub fn with_settings(listener: L, settings: DetectorSettings) -> Self {
        Self {
            listener,
            settings,
            primary: PointerSlot::default(),
            secondary: PointerSlot::default(),
            angle: Rad::zero(),
            rotating: false,
        }
    }

    /// Process the given pointer event.
    /// Returns true if the event has been used for the rotation gesture and false otherwise.
    pub fn on_touch_event(&mut self, event: &PointerEvent) -> bool {
        match event.action() {
            PointerAction::Down => self.process_down(event),
            PointerAction::PointerDown => self.process_pointer_down(event),
            PointerAction::Move => self.process_move(event),
            PointerAction::PointerUp => self.process_pointer_up(event),
            PointerAction::Up => {
                self.primary.clear();
                self.secondary.clear();
                self.angle = Rad::zero();
                self.rotating = false;
                log::debug!("last pointer up, rotation detector idle");
                true
            }
            PointerAction::Cancel | PointerAction::Other => false,
        }
    }

    /// Forgets all tracked pointers, for example after the host cancelled the gesture.
    pub fn reset(&mut self) {
        let was_rotating = self.rotating;
        self.primary.clear();
        self.secondary.clear();
        self.angle = Rad::zero();
        self.rotating = false;

        if was_rotating {
            self.listener.on_rotation_end();
        }
    }

    pub fn state(&self) -> GestureState {
        match (self.primary.is_bound(), self.secondary.is_bound()) {
            (true, true) => GestureState::Tracking,
            (true, false) => GestureState::Single,
            _ => GestureState::Idle,
        }
    }

    /// Whether a rotation is in progress and has been accepted by the listener.
    pub fn is_rotating(&self) -> bool {
        self.rotating
    }

    /// Rotation which has been reported but not yet consumed by the listener.
    pub fn accumulated_angle(&self) -> Rad<f64> {
        self.angle
    }

    pub fn primary(&self) -> &PointerSlot {
        &self.primary
    }

    pub fn secondary(&self) -> &PointerSlot {
        &self.secondary
    }

    pub fn settings(&self) -> &DetectorSettings {
        &self.settings
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    pub fn into_listener(self) -> L {
        self.listener
    }

    fn process_down(&mut self, event: &PointerEvent) -> bool {
        let index = event.action_index();
        let Some(position) = event.position(index) else {
            return false;
        };

        // A first contact always starts a new gesture, even if the host never lifted the old one.
        self.secondary.clear();
        self.angle = Rad::zero();
        if self.rotating {
            self.rotating = false;
            self.listener.on_rotation_end();
        }

        self.primary.bind(event.action_pointer_id(), position);
        log::debug!("pointer {} down", event.action_pointer_id());
        true
    }

    fn process_pointer_down(&mut self, event: &PointerEvent) -> bool {
        if !self.primary.is_bound() || self.secondary.is_bound() {
            return false;
        }

        let index = event.action_index();
        let Some(position) = event.position(index) else {
            return false;
        };

        self.secondary.bind(event.action_pointer_id(), position);
        self.begin_tracking();
        true
    }

    fn process_move(&mut self, event: &PointerEvent) -> bool {
        if event.pointer_count() < 2 {
            return false;
        }

        let (Some(primary_id), Some(secondary_id)) = (self.primary.id, self.secondary.id) else {
            return false;
        };

        let (Some(first), Some(second)) = (
            event
                .find_pointer_index(primary_id)
                .and_then(|index| event.position(index)),
            event
                .find_pointer_index(secondary_id)
                .and_then(|index| event.position(index)),
        ) else {
            return false;
        };

        if self.rotating {
            let delta = angle_between_lines(
                self.primary.position,
                self.secondary.position,
                first,
                second,
            );
            self.angle += delta;
            log::trace!("rotation delta {:?}", Deg::from(delta));

            if self.listener.on_rotation(self.angle) {
                self.angle = Rad::zero();
            }
        }

        self.primary.position = first;
        self.secondary.position = second;
        true
    }

    fn process_pointer_up(&mut self, event: &PointerEvent) -> bool {
        let id = event.action_pointer_id();
        let was_tracking = self.secondary.is_bound();

        if Some(id) == self.primary.id {
            self.primary = self.secondary;
            self.secondary.clear();
        } else if Some(id) == self.secondary.id {
            self.secondary.clear();
        } else {
            return false;
        }

        log::debug!("tracked pointer {} up", id);

        // Take over the remaining pointers, skipping the lifting one and the primary.
        let index = event.action_index();
        let primary_index = self
            .primary
            .id
            .and_then(|primary_id| event.find_pointer_index(primary_id));
        let mut candidates = event
            .pointers()
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index && Some(*i) != primary_index)
            .map(|(_, pointer)| pointer);

        if !self.primary.is_bound() {
            if let Some(pointer) = candidates.next() {
                self.primary.bind(pointer.id, pointer.position);
            }
        }

        if let Some(pointer) = candidates.next() {
            self.secondary.bind(pointer.id, pointer.position);
            log::debug!("pointer {} replaces the lifted pointer", pointer.id);
        }

        if self.secondary.is_bound() {
            if !was_tracking {
                self.begin_tracking();
            }
        } else {
            self.angle = Rad::zero();
            if self.rotating {
                self.rotating = false;
                self.listener.on_rotation_end();
            }
            log::debug!("rotation ended");
        }

        true
    }

    fn begin_tracking(&mut self) {
        self.angle = Rad::zero();
        let accepted = !self.settings.notify_begin || self.listener.on_rotation_begin();
        self.rotating = accepted || !self.settings.begin_can_decline;
        log::debug!(
            "tracking pointers {:?} and {:?}, rotation accepted: {}",
            self.primary.id,
            self.secondary.id,
            self.rotating
        );
    }
}
