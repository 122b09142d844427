use crate::metrics::{BiomechanicsMetrics, RiskLevel};

const FHP_ANGLE_THRESHOLD: f64 = 10.0;
const Q_ANGLE_AVG_THRESHOLD: f64 = 17.0;
const SHOULDER_ASYMMETRY_THRESHOLD_CM: f64 = 2.0;

/// Rule-based advice derived from the metrics. Rules fire independently, in
/// fixed order; an empty list means no threshold was crossed.
pub fn generate_recommendations(metrics: &BiomechanicsMetrics) -> Vec<String> {
    let mut recommendations = Vec::new();

    if metrics.fhp_angle > FHP_ANGLE_THRESHOLD {
        recommendations.push(
            "Forward Head Posture detected: Recommended exercise - Chin Tucks \
             (Cervical Retraction) to activate deep flexors. \
             Adjust your monitor to eye level."
                .to_owned(),
        );
    }

    let q_angle_avg = (metrics.q_angle_left + metrics.q_angle_right) / 2.0;
    if q_angle_avg > Q_ANGLE_AVG_THRESHOLD {
        recommendations.push(
            "Increased Q Angle detected: Strengthen quadriceps and glutes. \
             Avoid deep squats and running on hard surfaces."
                .to_owned(),
        );
    }

    if metrics.shoulder_asymmetry_cm > SHOULDER_ASYMMETRY_THRESHOLD_CM {
        recommendations.push(
            "Shoulder Asymmetry: Check if you carry your bag on one shoulder. \
             Bilateral stretching exercises recommended."
                .to_owned(),
        );
    }

    if metrics.risk_level == RiskLevel::High {
        recommendations.push(
            "WARNING: High risk score detected. \
             Consultation with a physiotherapist or rehabilitation doctor is recommended."
                .to_owned(),
        );
    }

    recommendations
}
