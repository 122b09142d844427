use crate::error::Error;
use crate::vector::Vector3D;
use num_traits::ToPrimitive;
use ordered_float::NotNan;
use serde::Deserialize;

/// Anatomical landmark labels produced by the external pose-detection
/// collaborator.
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    num_derive::FromPrimitive,
    num_derive::ToPrimitive,
)]
pub enum KeypointKind {
    Nose,
    LeftEar,
    RightEar,
    Neck,
    LeftShoulder,
    RightShoulder,
    LeftHip,
    RightHip,
    Pelvis,
    LeftKnee,
    RightKnee,
    LeftAnkle,
    RightAnkle,
}

impl KeypointKind {
    pub(crate) fn idx(self) -> Result<usize, Error> {
        self.to_usize().ok_or(Error::KeypointVariantToUsize(self))
    }
}

pub const NUM_KEYPOINTS: usize = 13;

/// A single landmark position in meters, already scaled to real-world units
/// by the detection collaborator.
#[derive(Debug, Copy, Clone, PartialEq, Deserialize)]
pub struct Keypoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Keypoint {
    /// Construct a keypoint, rejecting NaN coordinates so they never enter
    /// the calculation pipeline.
    pub fn new(x: f64, y: f64, z: f64) -> Result<Self, Error> {
        for &value in &[x, y, z] {
            NotNan::new(value).map_err(|e| Error::ConstructNotNan(e, value))?;
        }
        Ok(Self { x, y, z })
    }

    pub(crate) fn position(self) -> Vector3D {
        Vector3D::new(self.x, self.y, self.z)
    }
}

/// Optional capture metadata forwarded by the detection collaborator. The
/// engine treats it as opaque diagnostics; all coordinates are assumed
/// already expressed in meters.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ScanMetadata {
    pub method: Option<String>,
    pub target_height: Option<f64>,
    pub scaling_factor: Option<f64>,
    pub best_score: Option<f64>,
}

type Keypoints = [Option<Keypoint>; NUM_KEYPOINTS];

/// The named keypoint set for one scan. Immutable after construction; a
/// landmark the detector failed to place is simply absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "RawSkeleton")]
pub struct Skeleton {
    keypoints: Keypoints,
    meta: Option<ScanMetadata>,
}

impl Skeleton {
    pub fn from_keypoints<I>(keypoints: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (KeypointKind, Keypoint)>,
    {
        let mut slots: Keypoints = Default::default();
        for (kind, keypoint) in keypoints {
            slots[kind.idx()?] = Some(keypoint);
        }
        Ok(Self {
            keypoints: slots,
            meta: None,
        })
    }

    pub fn with_meta(mut self, meta: ScanMetadata) -> Self {
        self.meta = Some(meta);
        self
    }

    pub fn get(&self, kind: KeypointKind) -> Result<Keypoint, Error> {
        self.keypoints[kind.idx()?].ok_or(Error::MissingKeypoint(kind))
    }

    pub fn meta(&self) -> Option<&ScanMetadata> {
        self.meta.as_ref()
    }
}

/// Wire shape emitted by the detection collaborator.
#[derive(Debug, Default, Deserialize)]
struct RawSkeleton {
    nose: Option<Keypoint>,
    l_ear: Option<Keypoint>,
    r_ear: Option<Keypoint>,
    neck: Option<Keypoint>,
    l_shoulder: Option<Keypoint>,
    r_shoulder: Option<Keypoint>,
    l_hip: Option<Keypoint>,
    r_hip: Option<Keypoint>,
    pelvis: Option<Keypoint>,
    l_knee: Option<Keypoint>,
    r_knee: Option<Keypoint>,
    l_ankle: Option<Keypoint>,
    r_ankle: Option<Keypoint>,
    meta: Option<ScanMetadata>,
}

impl From<RawSkeleton> for Skeleton {
    fn from(raw: RawSkeleton) -> Self {
        // array order matches the KeypointKind discriminant order
        Self {
            keypoints: [
                raw.nose,
                raw.l_ear,
                raw.r_ear,
                raw.neck,
                raw.l_shoulder,
                raw.r_shoulder,
                raw.l_hip,
                raw.r_hip,
                raw.pelvis,
                raw.l_knee,
                raw.r_knee,
                raw.l_ankle,
                raw.r_ankle,
            ],
            meta: raw.meta,
        }
    }
}
