#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("missing required keypoint: {0:?}")]
    MissingKeypoint(crate::keypoint::KeypointKind),

    #[error("failed to construct NotNan from f64: {1}")]
    ConstructNotNan(#[source] ordered_float::FloatIsNan, f64),

    #[error("failed to convert keypoint variant to usize: {0:?}")]
    KeypointVariantToUsize(crate::keypoint::KeypointKind),

    #[error("failed to calculate biomechanics metrics")]
    MetricsCalculation(#[source] Box<Error>),
}
