use std::f64::consts::PI;

use cgmath::{Angle, Point2, Rad};

/// Factor converting radians into degrees.
pub const RAD_TO_DEG: f64 = 180.0 / PI;

/// Orientation of the line running from `to` towards `from`.
///
/// With a y axis pointing downwards, as in window coordinates, positive angles are clockwise.
pub fn line_orientation(from: Point2<f64>, to: Point2<f64>) -> Rad<f64> {
    let d = from - to;
    Rad::atan2(d.y, d.x)
}

/// Rotation which turns the line `(first1, second1)` into the line `(first2, second2)`.
///
/// The result is normalized into `(-pi, pi]` so that a line crossing the branch cut of `atan2`
/// between two samples still yields the small rotation instead of a full turn.
pub fn angle_between_lines(
    first1: Point2<f64>,
    second1: Point2<f64>,
    first2: Point2<f64>,
    second2: Point2<f64>,
) -> Rad<f64> {
    let previous = line_orientation(first1, second1);
    let current = line_orientation(first2, second2);

    (current - previous).normalize_signed()
}
