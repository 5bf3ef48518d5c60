//! Error types for the batch pipeline

use thiserror::Error;
use voxel_batch_common::{Roi, VolumeError, VolumeType};

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("{stage} requires {required} to produce {requested_by}, but it is not in the request")]
    MissingRequiredVolume {
        stage: String,
        required: VolumeType,
        requested_by: VolumeType,
    },

    #[error("{stage} expected {volume_type} in the batch, but upstream did not provide it")]
    MissingBatchVolume { stage: String, volume_type: VolumeType },

    #[error("No provider declares {0}")]
    UnsupportedVolume(VolumeType),

    #[error("Requested ROI {requested} for {volume_type} exceeds provided ROI {available}")]
    RoiOutOfBounds {
        volume_type: VolumeType,
        requested: Roi,
        available: Roi,
    },

    #[error("Shape mismatch between {left} {left_shape:?} and {right} {right_shape:?}")]
    ShapeMismatch {
        left: VolumeType,
        left_shape: Vec<usize>,
        right: VolumeType,
        right_shape: Vec<usize>,
    },

    #[error("Label {max} in {volume_type} leaves no room for a new label id")]
    LabelOverflow { volume_type: VolumeType, max: u64 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Pipeline has not been built; call build() before requesting batches")]
    NotBuilt,

    #[error("Volume error: {0}")]
    Volume(#[from] VolumeError),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, PipelineError>;
