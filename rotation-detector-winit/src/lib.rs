//! Feeds winit touch events into a [`rotation_detector::RotationGestureDetector`].

pub mod input;

pub use input::TouchController;
pub use winit;
