use crate::metrics::RiskLevel;
use serde::Deserialize;
use tracing::debug;

/// Biological sex, used only to select the normative Q-angle band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Sex {
    Male,
    Female,
}

/// Demographic context for threshold adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Demographics {
    /// Age in years.
    pub age: u32,
    pub sex: Sex,
}

impl Demographics {
    /// Normative thresholds relax for subjects over 60.
    fn age_factor(&self) -> f64 {
        if self.age > 60 {
            0.85
        } else {
            1.0
        }
    }
}

const FHP_WEIGHT: f64 = 3.0;
const Q_ANGLE_WEIGHT: f64 = 2.0;
const SHOULDER_WEIGHT: f64 = 1.0;

/// Global Posture Score: a weighted mean of the 0-10 sub-scores rescaled to
/// a 0-100 percentage and clamped.
pub fn global_posture_score(
    q_angle_left: f64,
    q_angle_right: f64,
    fhp_angle: f64,
    shoulder_asymmetry_cm: f64,
    demographics: &Demographics,
) -> f64 {
    let age_factor = demographics.age_factor();

    let fhp_score = fhp_subscore(fhp_angle, age_factor);
    debug!(score = fhp_score, weight = FHP_WEIGHT, "FHP subscore");

    let q_angle_avg = (q_angle_left + q_angle_right) / 2.0;
    let q_angle_score = q_angle_subscore(q_angle_avg, demographics.sex, age_factor);
    debug!(score = q_angle_score, weight = Q_ANGLE_WEIGHT, "Q angle subscore");

    let shoulder_score = shoulder_subscore(shoulder_asymmetry_cm);
    debug!(score = shoulder_score, weight = SHOULDER_WEIGHT, "shoulder subscore");

    let total_weight = FHP_WEIGHT + Q_ANGLE_WEIGHT + SHOULDER_WEIGHT;
    let weighted = fhp_score * FHP_WEIGHT
        + q_angle_score * Q_ANGLE_WEIGHT
        + shoulder_score * SHOULDER_WEIGHT;

    (weighted / total_weight * 10.0).max(0.0).min(100.0)
}

/// Piecewise-linear forward-head-posture sub-score on a 0-10 scale.
/// Normal up to 5° (age-adjusted), moderate up to 15°, saturating once the
/// excess beyond the moderate band reaches 20°.
fn fhp_subscore(fhp_angle: f64, age_factor: f64) -> f64 {
    let normal_max = 5.0 * age_factor;
    let moderate_max = 15.0 * age_factor;

    if fhp_angle <= normal_max {
        0.0
    } else if fhp_angle <= moderate_max {
        (fhp_angle - normal_max) / (moderate_max - normal_max) * 5.0
    } else {
        let excess = (fhp_angle - moderate_max).min(20.0);
        5.0 + excess / 20.0 * 5.0
    }
}

/// Q-angle sub-score against the sex-specific normative band (male 10-14°,
/// female 15-17°, age-adjusted). Below-band deviation caps at 3; above-band
/// deviation saturates at 10 once it exceeds 6°.
fn q_angle_subscore(q_angle: f64, sex: Sex, age_factor: f64) -> f64 {
    let (normal_min, normal_max) = match sex {
        Sex::Male => (10.0, 14.0),
        Sex::Female => (15.0, 17.0),
    };
    let normal_min = normal_min * age_factor;
    let normal_max = normal_max * age_factor;

    if q_angle >= normal_min && q_angle <= normal_max {
        0.0
    } else if q_angle < normal_min {
        ((normal_min - q_angle) / 5.0).min(1.0) * 3.0
    } else {
        let deviation = q_angle - normal_max;
        if deviation > 6.0 {
            10.0
        } else {
            deviation / 6.0 * 10.0
        }
    }
}

/// Shoulder asymmetry sub-score: normal up to 1.5 cm, moderate up to 3 cm,
/// saturating at 5 cm.
fn shoulder_subscore(asymmetry_cm: f64) -> f64 {
    if asymmetry_cm <= 1.5 {
        0.0
    } else if asymmetry_cm <= 3.0 {
        (asymmetry_cm - 1.5) / 1.5 * 5.0
    } else {
        5.0 + ((asymmetry_cm - 3.0) / 2.0).min(1.0) * 5.0
    }
}

/// Risk bands over the Global Posture Score, inclusive on the lower side.
pub fn risk_level(score: f64) -> RiskLevel {
    if score <= 20.0 {
        RiskLevel::Low
    } else if score <= 50.0 {
        RiskLevel::Moderate
    } else {
        RiskLevel::High
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod fhp_subscore_tests {
        use super::fhp_subscore;
        use assert_approx_eq::assert_approx_eq;

        #[test]
        fn normal_band_scores_zero() {
            assert_approx_eq!(fhp_subscore(5.0, 1.0), 0.0);
        }

        #[test]
        fn midpoint_of_moderate_band() {
            assert_approx_eq!(fhp_subscore(10.0, 1.0), 2.5);
        }

        #[test]
        fn top_of_moderate_band() {
            assert_approx_eq!(fhp_subscore(15.0, 1.0), 5.0);
        }

        #[test]
        fn severe_band() {
            assert_approx_eq!(fhp_subscore(25.0, 1.0), 7.5);
        }

        #[test]
        fn saturates_at_ten() {
            assert_approx_eq!(fhp_subscore(35.0, 1.0), 10.0);
            assert_approx_eq!(fhp_subscore(80.0, 1.0), 10.0);
        }

        #[test]
        fn age_factor_tightens_thresholds() {
            // over-60 normal band ends at 4.25°
            assert_approx_eq!(fhp_subscore(4.25, 0.85), 0.0);
            assert!(fhp_subscore(5.0, 0.85) > 0.0);
        }
    }

    mod q_angle_subscore_tests {
        use super::{q_angle_subscore, Sex};
        use assert_approx_eq::assert_approx_eq;

        #[test]
        fn male_normal_band_scores_zero() {
            assert_approx_eq!(q_angle_subscore(12.0, Sex::Male, 1.0), 0.0);
            assert_approx_eq!(q_angle_subscore(10.0, Sex::Male, 1.0), 0.0);
            assert_approx_eq!(q_angle_subscore(14.0, Sex::Male, 1.0), 0.0);
        }

        #[test]
        fn female_normal_band_scores_zero() {
            assert_approx_eq!(q_angle_subscore(16.0, Sex::Female, 1.0), 0.0);
        }

        #[test]
        fn below_band_caps_at_three() {
            assert_approx_eq!(q_angle_subscore(5.0, Sex::Male, 1.0), 3.0);
            assert_approx_eq!(q_angle_subscore(0.0, Sex::Male, 1.0), 3.0);
            assert_approx_eq!(q_angle_subscore(7.5, Sex::Male, 1.0), 1.5);
        }

        #[test]
        fn above_band_ramps_to_ten() {
            assert_approx_eq!(q_angle_subscore(17.0, Sex::Male, 1.0), 5.0);
            assert_approx_eq!(q_angle_subscore(20.0, Sex::Male, 1.0), 10.0);
            assert_approx_eq!(q_angle_subscore(40.0, Sex::Male, 1.0), 10.0);
        }

        #[test]
        fn age_factor_scales_band() {
            // over-60 male band is [8.5, 11.9]
            assert_approx_eq!(q_angle_subscore(11.9, Sex::Male, 0.85), 0.0);
            assert!(q_angle_subscore(13.0, Sex::Male, 0.85) > 0.0);
        }
    }

    mod shoulder_subscore_tests {
        use super::shoulder_subscore;
        use assert_approx_eq::assert_approx_eq;

        #[test]
        fn normal_band_scores_zero() {
            assert_approx_eq!(shoulder_subscore(1.5), 0.0);
            assert_approx_eq!(shoulder_subscore(0.0), 0.0);
        }

        #[test]
        fn moderate_band_ramps_to_five() {
            assert_approx_eq!(shoulder_subscore(2.25), 2.5);
            assert_approx_eq!(shoulder_subscore(3.0), 5.0);
        }

        #[test]
        fn severe_band_saturates_at_ten() {
            assert_approx_eq!(shoulder_subscore(4.0), 7.5);
            assert_approx_eq!(shoulder_subscore(5.0), 10.0);
            assert_approx_eq!(shoulder_subscore(12.0), 10.0);
        }
    }

    mod global_posture_score_tests {
        use super::{global_posture_score, Demographics, Sex};
        use assert_approx_eq::assert_approx_eq;

        const MALE_30: Demographics = Demographics {
            age: 30,
            sex: Sex::Male,
        };

        #[test]
        fn all_normal_scores_zero() {
            let gps = global_posture_score(12.0, 12.0, 3.0, 1.0, &MALE_30);
            assert_approx_eq!(gps, 0.0);
        }

        #[test]
        fn all_saturated_scores_one_hundred() {
            let gps = global_posture_score(40.0, 40.0, 60.0, 10.0, &MALE_30);
            assert_approx_eq!(gps, 100.0);
        }

        #[test]
        fn weighted_mean_of_subscores() {
            // fhp 10° -> 2.5 (w 3), q avg 17° -> 5.0 (w 2), shoulder 3 cm -> 5.0 (w 1)
            // (7.5 + 10 + 5) / 6 * 10 = 37.5
            let gps = global_posture_score(17.0, 17.0, 10.0, 3.0, &MALE_30);
            assert_approx_eq!(gps, 37.5);
        }
    }

    mod risk_level_tests {
        use super::risk_level;
        use crate::metrics::RiskLevel;

        #[test]
        fn boundaries_inclusive_on_the_lower_side() {
            assert_eq!(risk_level(20.0), RiskLevel::Low);
            assert_eq!(risk_level(20.01), RiskLevel::Moderate);
            assert_eq!(risk_level(50.0), RiskLevel::Moderate);
            assert_eq!(risk_level(50.01), RiskLevel::High);
        }

        #[test]
        fn extremes() {
            assert_eq!(risk_level(0.0), RiskLevel::Low);
            assert_eq!(risk_level(100.0), RiskLevel::High);
        }
    }
}
