use crate::keypoint::Keypoint;
use crate::vector::Vector3D;
use tracing::debug;

/// Body side, used for diagnostics only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

pub(crate) const Q_ANGLE_MIN: f64 = 0.0;
pub(crate) const Q_ANGLE_MAX: f64 = 40.0;

/// Q-angle (knee valgus deviation) in degrees for one leg, clamped to
/// [0, 40].
///
/// The femur and tibia vectors meet at the knee; the supplement of their
/// interior angle measures how far the tibia deviates from the femur line,
/// and the clamp bounds physiologically implausible values from noisy
/// detections. Note that a fully extended leg produces a raw angle near 0°
/// and therefore reports the clamp ceiling; kept as-is pending verification
/// against real capture data.
pub fn q_angle(hip: Keypoint, knee: Keypoint, ankle: Keypoint, side: Side) -> f64 {
    let femur = Vector3D::from_points(hip.position(), knee.position());
    let tibia = Vector3D::from_points(knee.position(), ankle.position());

    let raw_angle = femur.angle_degrees(tibia);
    let q_angle = (180.0 - raw_angle).max(Q_ANGLE_MIN).min(Q_ANGLE_MAX);

    debug!(?side, raw_angle, q_angle, "computed Q angle");
    q_angle
}
