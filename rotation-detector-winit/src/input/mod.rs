//! Handles the touch input which is dispatched by the main event loop.

use cgmath::Point2;
use rotation_detector::{DetectorSettings, PointerId, RotationGestureDetector, RotationListener};
use winit::event::{TouchPhase, WindowEvent};

use crate::input::touch_handler::TouchHandler;

mod touch_handler;

pub struct TouchController<L> {
    touch_handler: TouchHandler,
    detector: RotationGestureDetector<L>,
}

impl<L: RotationListener> TouchController<L> {
    pub fn new(listener: L) -> Self {
        Self::with_settings(listener, DetectorSettings::default())
    }

    pub fn with_settings(listener: L, settings: DetectorSettings) -> Self {
        Self {
            touch_handler: TouchHandler::default(),
            detector: RotationGestureDetector::with_settings(listener, settings),
        }
    }

    /// Process the given winit `[winit::event::WindowEvent]`.
    /// Returns true if the event has been used for the rotation gesture and false otherwise.
    pub fn window_input(&mut self, event: &WindowEvent, scale_factor: f64) -> bool {
        match event {
            WindowEvent::Touch(touch) => {
                let position: (f64, f64) = touch.location.to_owned().into();
                let position = Point2::from(position) / scale_factor;
                self.process_touch(touch.id, touch.phase, position)
            }
            _ => false,
        }
    }

    /// Process a single touch update at a position in logical window coordinates.
    pub fn process_touch(&mut self, id: u64, phase: TouchPhase, position: Point2<f64>) -> bool {
        let id = PointerId(id);
        let event = match phase {
            TouchPhase::Started => self.touch_handler.process_touch_start(id, position),
            TouchPhase::Moved => self.touch_handler.process_touch_move(id, position),
            // A cancelled touch is lifted so that the detector does not keep following it.
            TouchPhase::Ended | TouchPhase::Cancelled => {
                self.touch_handler.process_touch_end(id, position)
            }
        };

        match event {
            Some(event) => self.detector.on_touch_event(&event),
            None => false,
        }
    }

    pub fn active_touches(&self) -> usize {
        self.touch_handler.active_touches()
    }

    pub fn detector(&self) -> &RotationGestureDetector<L> {
        &self.detector
    }

    pub fn detector_mut(&mut self) -> &mut RotationGestureDetector<L> {
        &mut self.detector
    }
}
