//! # rotation-detector
//!
//! Detects two finger rotation gestures in a stream of multi-touch pointer events and reports the
//! rotation angle to a [`RotationListener`].
//!
//! The detector is meant to live next to the pan and zoom handling of an interactive view, for
//! example an image viewer or a map. It is a plain synchronous state machine: the host forwards
//! every pointer event to [`RotationGestureDetector::on_touch_event`] and learns whether the event
//! was used for the rotation gesture.
//!
//! ```
//! use cgmath::{Deg, Point2, Rad};
//! use rotation_detector::{
//!     Pointer, PointerAction, PointerEvent, PointerId, RotationCallbacks, RotationGestureDetector,
//! };
//!
//! let mut total = Rad(0.0);
//! let listener = RotationCallbacks::new(
//!     || true,
//!     |angle: Rad<f64>| {
//!         total += angle;
//!         true
//!     },
//!     || {},
//! );
//! let mut detector = RotationGestureDetector::new(listener);
//!
//! let first = Pointer::new(PointerId(0), Point2::new(0.0, 0.0));
//! let second = Pointer::new(PointerId(1), Point2::new(1.0, 0.0));
//! let rotated = Pointer::new(PointerId(1), Point2::new(0.0, 1.0));
//!
//! detector.on_touch_event(&PointerEvent::new(PointerAction::Down, 0, vec![first]).unwrap());
//! detector
//!     .on_touch_event(&PointerEvent::new(PointerAction::PointerDown, 1, vec![first, second]).unwrap());
//! detector.on_touch_event(&PointerEvent::new(PointerAction::Move, 1, vec![first, rotated]).unwrap());
//!
//! drop(detector);
//! assert!((Deg::from(total).0 - 90.0).abs() < 1e-9);
//! ```

pub mod detector;
pub mod error;
pub mod listener;
pub mod pointer;
pub mod util;

pub use detector::{DetectorSettings, GestureState, PointerSlot, RotationGestureDetector};
pub use error::PointerEventError;
pub use listener::{RotationCallbacks, RotationListener};
pub use pointer::{Pointer, PointerAction, PointerEvent, PointerId};
pub use util::math::RAD_TO_DEG;
