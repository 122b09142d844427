use crate::{
    alignment,
    angles::{self, Side},
    error::Error,
    keypoint::{KeypointKind, Skeleton},
    metrics::{round2_half_up, BiomechanicsMetrics},
    recommend,
    score::{self, Demographics},
};
use serde::Serialize;
use tracing::info;

/// Complete analysis output: the metrics record plus the ordered advice
/// list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub metrics: BiomechanicsMetrics,
    pub recommendations: Vec<String>,
}

/// Derive the full metrics record from one scan.
///
/// All-or-nothing: the first sub-calculation that cannot proceed (a missing
/// required keypoint, a NaN coordinate) fails the whole computation, and the
/// failure reaches the caller as a single wrapped error. No partial metric
/// set can escape.
pub fn calculate_metrics(
    skeleton: &Skeleton,
    demographics: &Demographics,
) -> Result<BiomechanicsMetrics, Error> {
    compute(skeleton, demographics).map_err(|e| Error::MetricsCalculation(Box::new(e)))
}

/// Metrics plus recommendations in one call.
pub fn analyze(
    skeleton: &Skeleton,
    demographics: &Demographics,
) -> Result<AnalysisReport, Error> {
    let metrics = calculate_metrics(skeleton, demographics)?;
    let recommendations = recommend::generate_recommendations(&metrics);
    Ok(AnalysisReport {
        metrics,
        recommendations,
    })
}

fn compute(
    skeleton: &Skeleton,
    demographics: &Demographics,
) -> Result<BiomechanicsMetrics, Error> {
    if let Some(meta) = skeleton.meta() {
        info!(
            method = ?meta.method,
            best_score = ?meta.best_score,
            "analyzing scan"
        );
    }

    // each metric is rounded as it is produced; the composite score is
    // computed from the rounded values, matching what gets persisted
    let q_angle_left = round2_half_up(angles::q_angle(
        skeleton.get(KeypointKind::LeftHip)?,
        skeleton.get(KeypointKind::LeftKnee)?,
        skeleton.get(KeypointKind::LeftAnkle)?,
        Side::Left,
    ));

    let q_angle_right = round2_half_up(angles::q_angle(
        skeleton.get(KeypointKind::RightHip)?,
        skeleton.get(KeypointKind::RightKnee)?,
        skeleton.get(KeypointKind::RightAnkle)?,
        Side::Right,
    ));

    let forward_head = alignment::forward_head_posture(
        skeleton.get(KeypointKind::Neck)?,
        skeleton.get(KeypointKind::LeftEar)?,
        skeleton.get(KeypointKind::RightEar)?,
    );
    let fhp_angle = round2_half_up(forward_head.angle);
    let fhp_distance_cm = round2_half_up(forward_head.distance_cm);

    let shoulder_asymmetry_cm = round2_half_up(alignment::shoulder_asymmetry(
        skeleton.get(KeypointKind::LeftShoulder)?,
        skeleton.get(KeypointKind::RightShoulder)?,
    ));

    let global_posture_score = round2_half_up(score::global_posture_score(
        q_angle_left,
        q_angle_right,
        fhp_angle,
        shoulder_asymmetry_cm,
        demographics,
    ));
    let risk_level = score::risk_level(global_posture_score);

    info!(global_posture_score, ?risk_level, "metrics calculated");

    Ok(BiomechanicsMetrics {
        q_angle_left,
        q_angle_right,
        fhp_angle,
        fhp_distance_cm,
        shoulder_asymmetry_cm,
        global_posture_score,
        risk_level,
    })
}
