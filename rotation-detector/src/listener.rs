use cgmath::Rad;

/// Receives the rotation detected by a [`crate::RotationGestureDetector`].
pub trait RotationListener {
    /// A second pointer started to be tracked.
    ///
    /// The result is ignored unless [`crate::DetectorSettings::begin_can_decline`] is set, in which
    /// case false declines the gesture: both pointers are still followed, but neither
    /// [`RotationListener::on_rotation`] nor [`RotationListener::on_rotation_end`] is called until
    /// a new rotation begins.
    fn on_rotation_begin(&mut self) -> bool;

    /// The tracked pointers lost their second pointer and no other pointer could replace it.
    fn on_rotation_end(&mut self);

    /// The line between the tracked pointers turned.
    ///
    /// `angle` is the rotation accumulated since the last time this method returned true.
    /// Return true if the rotation was consumed, false to keep accumulating.
    fn on_rotation(&mut self, angle: Rad<f64>) -> bool;
}

impl<L: RotationListener + ?Sized> RotationListener for &mut L {
    fn on_rotation_begin(&mut self) -> bool {
        (**self).on_rotation_begin()
    }

    fn on_rotation_end(&mut self) {
        (**self).on_rotation_end()
    }

    fn on_rotation(&mut self, angle: Rad<f64>) -> bool {
        (**self).on_rotation(angle)
    }
}

impl<L: RotationListener + ?Sized> RotationListener for Box<L> {
    fn on_rotation_begin(&mut self) -> bool {
        (**self).on_rotation_begin()
    }

    fn on_rotation_end(&mut self) {
        (**self).on_rotation_end()
    }

    fn on_rotation(&mut self, angle: Rad<f64>) -> bool {
        (**self).on_rotation(angle)
    }
}

/// A [`RotationListener`] made of three closures.
pub struct RotationCallbacks<B, R, E> {
    begin: B,
    rotation: R,
    end: E,
}

impl<B, R, E> RotationCallbacks<B, R, E>
where
    B: FnMut() -> bool,
    R: FnMut(Rad<f64>) -> bool,
    E: FnMut(),
{
    pub fn new(begin: B, rotation: R, end: E) -> Self {
        Self {
            begin,
            rotation,
            end,
        }
    }
}

impl<B, R, E> RotationListener for RotationCallbacks<B, R, E>
where
    B: FnMut() -> bool,
    R: FnMut(Rad<f64>) -> bool,
    E: FnMut(),
{
    fn on_rotation_begin(&mut self) -> bool {
        (self.begin)()
    }

    fn on_rotation_end(&mut self) {
        (self.end)()
    }

    fn on_rotation(&mut self, angle: Rad<f64>) -> bool {
        (self.rotation)(angle)
    }
}
