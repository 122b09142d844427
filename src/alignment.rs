use crate::keypoint::Keypoint;
use crate::vector::Vector3D;
use tracing::debug;

/// Forward head posture measurement: the head vector's tilt from vertical
/// and the horizontal neck-to-ear-center offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForwardHead {
    /// Degrees from the +z (up) axis.
    pub angle: f64,
    /// Horizontal offset in centimeters.
    pub distance_cm: f64,
}

/// Forward head posture from the neck and the midpoint between the ears.
/// No clamping is applied.
pub fn forward_head_posture(neck: Keypoint, left_ear: Keypoint, right_ear: Keypoint) -> ForwardHead {
    let neck = neck.position();
    let ear_center = Vector3D::new(
        (left_ear.x + right_ear.x) / 2.0,
        (left_ear.y + right_ear.y) / 2.0,
        (left_ear.z + right_ear.z) / 2.0,
    );

    let head = Vector3D::from_points(neck, ear_center);
    let angle = head.angle_from_vertical();
    let distance_cm = neck.horizontal_distance_to(ear_center) * 100.0;

    debug!(angle, distance_cm, "computed forward head posture");
    ForwardHead { angle, distance_cm }
}

/// Shoulder asymmetry in centimeters. Only the depth (z) offset between the
/// shoulders carries the signal.
pub fn shoulder_asymmetry(left_shoulder: Keypoint, right_shoulder: Keypoint) -> f64 {
    let asymmetry_cm = (left_shoulder.z - right_shoulder.z).abs() * 100.0;
    debug!(asymmetry_cm, "computed shoulder asymmetry");
    asymmetry_cm
}

#[cfg(test)]
mod tests {
    use crate::keypoint::Keypoint;

    fn kp(x: f64, y: f64, z: f64) -> Keypoint {
        Keypoint::new(x, y, z).unwrap()
    }

    mod forward_head_posture_tests {
        use super::kp;
        use crate::alignment::forward_head_posture;
        use assert_approx_eq::assert_approx_eq;

        #[test]
        fn head_tilted_forward() {
            // ear center (0, 0.10, 1.55), head vector (0, 0.10, 0.15)
            let result = forward_head_posture(
                kp(0.0, 0.0, 1.40),
                kp(-0.05, 0.10, 1.55),
                kp(0.05, 0.10, 1.55),
            );
            assert_approx_eq!(result.angle, 33.690068, 1e-5);
            assert_approx_eq!(result.distance_cm, 10.0, 1e-9);
        }

        #[test]
        fn head_directly_above_neck() {
            let result = forward_head_posture(
                kp(0.0, 0.0, 1.40),
                kp(-0.05, 0.0, 1.55),
                kp(0.05, 0.0, 1.55),
            );
            assert_approx_eq!(result.angle, 0.0);
            assert_approx_eq!(result.distance_cm, 0.0);
        }

        #[test]
        fn small_forward_offset_in_centimeters() {
            // ear center (0, 0.02, 1.55): 2 cm horizontal offset
            let result = forward_head_posture(
                kp(0.0, 0.0, 1.40),
                kp(-0.05, 0.02, 1.55),
                kp(0.05, 0.02, 1.55),
            );
            assert_approx_eq!(result.distance_cm, 2.0, 1e-9);
            assert_approx_eq!(result.angle, 7.594643, 1e-5);
        }
    }

    mod shoulder_asymmetry_tests {
        use super::kp;
        use crate::alignment::shoulder_asymmetry;
        use assert_approx_eq::assert_approx_eq;

        #[test]
        fn depth_offset_in_centimeters() {
            let left = kp(-0.15, 0.0, 1.36);
            let right = kp(0.15, 0.0, 1.38);
            assert_approx_eq!(shoulder_asymmetry(left, right), 2.0, 1e-9);
        }

        #[test]
        fn level_shoulders() {
            let left = kp(-0.15, 0.0, 1.40);
            let right = kp(0.15, 0.0, 1.40);
            assert_approx_eq!(shoulder_asymmetry(left, right), 0.0);
        }

        #[test]
        fn sign_of_offset_does_not_matter() {
            let left = kp(-0.15, 0.0, 1.43);
            let right = kp(0.15, 0.0, 1.40);
            assert_approx_eq!(shoulder_asymmetry(left, right), 3.0, 1e-9);
            assert_approx_eq!(shoulder_asymmetry(right, left), 3.0, 1e-9);
        }
    }
}
