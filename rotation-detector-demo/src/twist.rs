//! Synthetic twist gesture driven through the winit touch controller.

use cgmath::{Deg, Point2, Rad, Vector2, Zero};
use rotation_detector::RotationListener;
use rotation_detector_winit::{winit::event::TouchPhase, TouchController};

const FIRST: u64 = 0;
const SECOND: u64 = 1;
const THIRD: u64 = 2;

pub struct TwistConfig {
    pub steps: u32,
    pub degrees_per_step: f64,
    pub radius: f64,
    pub snap_degrees: f64,
    pub third_finger: bool,
}

impl Default for TwistConfig {
    fn default() -> Self {
        Self {
            steps: 36,
            degrees_per_step: 5.0,
            radius: 120.0,
            snap_degrees: 0.0,
            third_finger: false,
        }
    }
}

#[derive(Debug)]
pub struct TwistSummary {
    /// Rotation consumed by the listener
    pub applied: Rad<f64>,
    /// Rotation still accumulating when the fingers lifted
    pub pending: Rad<f64>,
    pub updates: usize,
    pub ends: usize,
}

/// Applies the rotation in chunks of at least `snap`.
struct SnappingListener {
    snap: Rad<f64>,
    applied: Rad<f64>,
    updates: usize,
    ends: usize,
}

impl RotationListener for SnappingListener {
    fn on_rotation_begin(&mut self) -> bool {
        log::info!("rotation began");
        true
    }

    fn on_rotation_end(&mut self) {
        self.ends += 1;
        log::info!("rotation ended at {:?}", Deg::from(self.applied));
    }

    fn on_rotation(&mut self, angle: Rad<f64>) -> bool {
        if angle.0.abs() < self.snap.0 {
            log::debug!("holding back {:?}", Deg::from(angle));
            return false;
        }

        self.applied += angle;
        self.updates += 1;
        log::info!(
            "rotate by {:?}, now at {:?}",
            Deg::from(angle),
            Deg::from(self.applied)
        );
        true
    }
}

fn finger(angle: Rad<f64>, radius: f64) -> Point2<f64> {
    let (sin, cos) = (angle.0.sin(), angle.0.cos());
    Point2::new(400.0, 300.0) + Vector2::new(cos, sin) * radius
}

/// Twists two fingers around the same center and reports what the listener applied.
pub fn run_twist(config: &TwistConfig) -> TwistSummary {
    let listener = SnappingListener {
        snap: Deg(config.snap_degrees).into(),
        applied: Rad::zero(),
        updates: 0,
        ends: 0,
    };
    let mut controller = TouchController::new(listener);

    let step: Rad<f64> = Deg(config.degrees_per_step).into();
    let radius = config.radius;
    let mut angle = Rad::zero();

    let (mut partner, mut partner_radius) = (SECOND, radius);
    controller.process_touch(FIRST, TouchPhase::Started, finger(angle, -radius));
    controller.process_touch(SECOND, TouchPhase::Started, finger(angle, radius));

    for frame in 1..=config.steps {
        if config.third_finger && frame == config.steps / 2 + 1 {
            // Lands on the line between the fingers, so the hand-over does not rotate anything.
            partner_radius = radius / 2.0;
            controller.process_touch(THIRD, TouchPhase::Started, finger(angle, partner_radius));
            controller.process_touch(SECOND, TouchPhase::Ended, finger(angle, radius));
            partner = THIRD;
            log::info!("third finger took over at frame {}", frame);
        }

        angle += step;
        controller.process_touch(FIRST, TouchPhase::Moved, finger(angle, -radius));
        controller.process_touch(partner, TouchPhase::Moved, finger(angle, partner_radius));
    }

    let pending = controller.detector().accumulated_angle();

    controller.process_touch(partner, TouchPhase::Ended, finger(angle, partner_radius));
    controller.process_touch(FIRST, TouchPhase::Ended, finger(angle, -radius));

    let listener = controller.detector().listener();
    TwistSummary {
        applied: listener.applied,
        pending,
        updates: listener.updates,
        ends: listener.ends,
    }
}
