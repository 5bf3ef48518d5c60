//! Voxel Batch - volumetric batch pipelines for segmentation training
//!
//! Re-exports the workspace crates under one roof:
//! - [`common`]: volume types, ROIs and volumes
//! - [`pipeline_core`]: specs, requests, batches, provider/filter traits and the
//!   linear pipeline driver
//! - [`prepare_malis`]: the MALIS component label stage

pub use voxel_batch_common as common;
pub use voxel_batch_core as pipeline_core;
pub use voxel_batch_prepare_malis as prepare_malis;

pub use voxel_batch_common::{Roi, Volume, VolumeData, VolumeType};
pub use voxel_batch_core::{
    ArraySource, Batch, BatchFilter, BatchProvider, BatchRequest, Pipeline, PipelineError,
    Preparation, ProviderSpec, VolumeSpec,
};
pub use voxel_batch_prepare_malis::{split_components, PrepareMalis, PrepareMalisConfig};
