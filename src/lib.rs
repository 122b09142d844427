//! Posture and biomechanics risk metrics derived from 3-D body keypoints.
//!
//! Given a [`Skeleton`] produced by an external pose-estimation process and
//! the subject's [`Demographics`], the engine computes per-joint angle and
//! alignment metrics, aggregates them into a 0-100 Global Posture Score,
//! classifies risk, and emits rule-based recommendations:
//!
//! ```
//! use posture_metrics::{analyze, Demographics, Keypoint, KeypointKind, Sex, Skeleton};
//!
//! # fn main() -> Result<(), posture_metrics::Error> {
//! let skeleton = Skeleton::from_keypoints(vec![
//!     (KeypointKind::Neck, Keypoint::new(0.0, 0.0, 1.40)?),
//!     (KeypointKind::LeftEar, Keypoint::new(-0.05, 0.02, 1.55)?),
//!     (KeypointKind::RightEar, Keypoint::new(0.05, 0.02, 1.55)?),
//!     (KeypointKind::LeftShoulder, Keypoint::new(-0.15, 0.0, 1.38)?),
//!     (KeypointKind::RightShoulder, Keypoint::new(0.15, 0.0, 1.38)?),
//!     (KeypointKind::LeftHip, Keypoint::new(-0.10, 0.0, 1.00)?),
//!     (KeypointKind::LeftKnee, Keypoint::new(-0.10, 0.0, 0.50)?),
//!     (KeypointKind::LeftAnkle, Keypoint::new(-0.10, 0.0, 0.0)?),
//!     (KeypointKind::RightHip, Keypoint::new(0.10, 0.0, 1.00)?),
//!     (KeypointKind::RightKnee, Keypoint::new(0.10, 0.0, 0.50)?),
//!     (KeypointKind::RightAnkle, Keypoint::new(0.10, 0.0, 0.0)?),
//! ])?;
//!
//! let report = analyze(&skeleton, &Demographics { age: 30, sex: Sex::Male })?;
//! assert!(report.metrics.global_posture_score <= 100.0);
//! # Ok(())
//! # }
//! ```
//!
//! Computation is pure, synchronous and stateless; persistence, transport
//! and the pose detection itself belong to the caller.

pub mod alignment;
pub mod angles;
pub mod engine;
pub mod error;
pub mod keypoint;
pub mod metrics;
pub mod recommend;
pub mod score;
pub mod vector;

pub use engine::{analyze, calculate_metrics, AnalysisReport};
pub use error::Error;
pub use keypoint::{Keypoint, KeypointKind, ScanMetadata, Skeleton, NUM_KEYPOINTS};
pub use metrics::{round2_half_up, BiomechanicsMetrics, RiskLevel};
pub use recommend::generate_recommendations;
pub use score::{risk_level, Demographics, Sex};
pub use vector::Vector3D;
