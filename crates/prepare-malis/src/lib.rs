//! Component label preparation for two-phase MALIS training
//!
//! MALIS evaluates connectivity between regions in two passes. This crate
//! builds the label volume both passes are scored against: a stack of a
//! *negative pass* and a *positive pass*, each shaped like the ground-truth
//! labels.
//!
//! - The positive pass is the ground truth as-is. Affinities outside GT
//!   regions are set to zero in this pass, so masked-out areas produce no
//!   loss.
//! - The negative pass relabels every voxel outside the ignore mask with a
//!   fresh id (`max + 1`). Affinities inside GT regions are set to one in
//!   this pass and the masked area becomes a single foreground region. Loss
//!   is only counted on edges between different labels, so the masked area
//!   only contributes through its boundary with real objects.
//!
//! GT affinities need no matching rewrite: they are already zero in the
//! masked area, which is treated as background.
//!
//! # Example
//! ```
//! use ndarray::{ArrayD, IxDyn};
//! use voxel_batch_prepare_malis::split_components;
//!
//! let labels = ArrayD::from_shape_vec(IxDyn(&[4]), vec![0u64, 1, 1, 2]).unwrap();
//! let outside = ArrayD::from_shape_vec(IxDyn(&[4]), vec![true, false, false, true]).unwrap();
//!
//! let components = split_components(&labels, Some(&outside)).unwrap();
//! assert_eq!(components.next_id(), 3);
//! assert_eq!(components.negative().as_slice().unwrap(), &[3, 1, 1, 3]);
//! assert_eq!(components.into_stacked().shape(), &[2, 4]);
//! ```

pub mod filter;

pub use filter::PrepareMalis;

use ndarray::{ArrayD, Axis, IxDyn, Zip};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use voxel_batch_common::VolumeType;
use voxel_batch_core::PipelineError;

/// Which volume types the stage reads and writes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PrepareMalisConfig {
    /// Ground-truth labels to split
    pub labels_volume_type: VolumeType,
    /// Ignore mask, used if it appears in the batch
    pub ignore_volume_type: VolumeType,
    /// Component volume to generate
    pub malis_comp_volume_type: VolumeType,
}

impl Default for PrepareMalisConfig {
    fn default() -> Self {
        Self {
            labels_volume_type: VolumeType::GtLabels,
            ignore_volume_type: VolumeType::GtIgnore,
            malis_comp_volume_type: VolumeType::MalisCompLabel,
        }
    }
}

impl PrepareMalisConfig {
    /// Parse and validate a YAML config; omitted keys take their defaults
    pub fn from_yaml_str(contents: &str) -> Result<Self, PipelineError> {
        let config: Self = serde_yaml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml(path: impl AsRef<Path>) -> Result<Self, PipelineError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&contents)
    }

    /// The three volume types must be pairwise distinct
    pub fn validate(&self) -> Result<(), PipelineError> {
        let pairs = [
            ("labels", self.labels_volume_type, "ignore", self.ignore_volume_type),
            ("labels", self.labels_volume_type, "malis_comp", self.malis_comp_volume_type),
            ("ignore", self.ignore_volume_type, "malis_comp", self.malis_comp_volume_type),
        ];
        for (a_name, a, b_name, b) in pairs {
            if a == b {
                return Err(PipelineError::InvalidConfig(format!(
                    "{a_name}_volume_type and {b_name}_volume_type are both {a}"
                )));
            }
        }
        Ok(())
    }
}

/// Errors from [`split_components`]
#[derive(Error, Debug)]
pub enum ComponentError {
    #[error("label {max} leaves no room for a new label id")]
    LabelOverflow { max: u64 },

    #[error("ignore mask shape {mask:?} does not match label shape {labels:?}")]
    ShapeMismatch {
        labels: Vec<usize>,
        mask: Vec<usize>,
    },
}

/// Negative and positive pass labels for one batch
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentLabels {
    next_id: u64,
    negative: ArrayD<u64>,
    positive: ArrayD<u64>,
}

impl ComponentLabels {
    /// Label assigned to voxels outside the ignore mask in the negative pass
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    pub fn negative(&self) -> &ArrayD<u64> {
        &self.negative
    }

    pub fn positive(&self) -> &ArrayD<u64> {
        &self.positive
    }

    /// Stack as `[negative, positive]` along a new leading axis
    pub fn into_stacked(self) -> ArrayD<u64> {
        let mut shape = Vec::with_capacity(self.positive.ndim() + 1);
        shape.push(2);
        shape.extend_from_slice(self.positive.shape());

        let mut stacked = ArrayD::zeros(IxDyn(&shape));
        stacked.index_axis_mut(Axis(0), 0).assign(&self.negative);
        stacked.index_axis_mut(Axis(0), 1).assign(&self.positive);
        stacked
    }
}

/// Split ground-truth labels into MALIS negative and positive passes
///
/// `outside_mask` is `true` for voxels not covered by the ignore mask (mask
/// value zero). Those voxels get `max(labels) + 1` in the negative pass.
/// Without a mask both passes are independent copies of `labels`.
///
/// Labels are expected to be non-negative ids that do not already use
/// `max + 1`.
pub fn split_components(
    labels: &ArrayD<u64>,
    outside_mask: Option<&ArrayD<bool>>,
) -> Result<ComponentLabels, ComponentError> {
    let next_id = match labels.iter().copied().max() {
        Some(max) => max
            .checked_add(1)
            .ok_or(ComponentError::LabelOverflow { max })?,
        None => 1,
    };

    let positive = labels.clone();
    let negative = match outside_mask {
        Some(outside) => {
            if outside.shape() != labels.shape() {
                return Err(ComponentError::ShapeMismatch {
                    labels: labels.shape().to_vec(),
                    mask: outside.shape().to_vec(),
                });
            }
            let mut negative = labels.clone();
            Zip::from(&mut negative)
                .and(outside)
                .for_each(|label, &is_outside| {
                    if is_outside {
                        *label = next_id;
                    }
                });
            negative
        }
        None => labels.clone(),
    };

    Ok(ComponentLabels {
        next_id,
        negative,
        positive,
    })
}
