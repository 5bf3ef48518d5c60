/// Common types for volumetric batch processing: volume identifiers, regions
/// of interest, and volumes.
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub mod roi;
pub mod volume;

pub use roi::Roi;
pub use volume::{DataKind, Volume, VolumeData};

/// Volume errors
#[derive(Debug, Error)]
pub enum VolumeError {
    #[error("Dimension mismatch: expected {expected} axes, got {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("Crop out of bounds on axis {axis}: end {end} exceeds length {len}")]
    CropOutOfBounds { axis: usize, end: usize, len: usize },

    #[error("ROI {requested} is not contained in {available}")]
    RoiNotContained { requested: Roi, available: Roi },

    #[error("Wrong data kind: expected {expected}, found {found}")]
    WrongKind { expected: DataKind, found: DataKind },
}

/// Result type for volume operations
pub type Result<T> = std::result::Result<T, VolumeError>;

/// Identifier of a logical kind of volume within specs, requests and batches
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VolumeType {
    Raw,
    AlphaMask,
    GtLabels,
    GtAffinities,
    GtMask,
    GtIgnore,
    PredAffinities,
    LossScale,
    LossGradient,
    /// Stacked negative/positive pass labels for two-phase MALIS training
    MalisCompLabel,
}

impl VolumeType {
    pub const ALL: [VolumeType; 10] = [
        VolumeType::Raw,
        VolumeType::AlphaMask,
        VolumeType::GtLabels,
        VolumeType::GtAffinities,
        VolumeType::GtMask,
        VolumeType::GtIgnore,
        VolumeType::PredAffinities,
        VolumeType::LossScale,
        VolumeType::LossGradient,
        VolumeType::MalisCompLabel,
    ];

    /// Canonical upper-case name, matching the serialized form
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            VolumeType::Raw => "RAW",
            VolumeType::AlphaMask => "ALPHA_MASK",
            VolumeType::GtLabels => "GT_LABELS",
            VolumeType::GtAffinities => "GT_AFFINITIES",
            VolumeType::GtMask => "GT_MASK",
            VolumeType::GtIgnore => "GT_IGNORE",
            VolumeType::PredAffinities => "PRED_AFFINITIES",
            VolumeType::LossScale => "LOSS_SCALE",
            VolumeType::LossGradient => "LOSS_GRADIENT",
            VolumeType::MalisCompLabel => "MALIS_COMP_LABEL",
        }
    }
}

impl fmt::Display for VolumeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
