//! Pipeline filter wrapper for MALIS component preparation

use crate::{split_components, ComponentError, PrepareMalisConfig};
use std::path::Path;
use tracing::{debug, info, warn};
use voxel_batch_common::{Volume, VolumeData};
use voxel_batch_core::{
    Batch, BatchFilter, BatchRequest, PipelineError, Preparation, ProviderSpec, Result,
};

const NAME: &str = "prepare_malis";

/// Creates the component label volume needed for two-phase MALIS training
///
/// Declares the component volume wherever the labels are available
/// upstream, strips it from requests going upstream, and synthesizes it
/// from the labels (and the ignore mask, if it appears in the batch).
#[derive(Debug, Clone)]
pub struct PrepareMalis {
    config: PrepareMalisConfig,
    spec: ProviderSpec,
}

impl PrepareMalis {
    /// Create the filter after validating `config`
    pub fn new(config: PrepareMalisConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            spec: ProviderSpec::new(),
        })
    }

    /// Load the filter from a YAML config file
    pub fn from_yaml(yaml_path: impl AsRef<Path>) -> Result<Self> {
        Self::new(PrepareMalisConfig::from_yaml(yaml_path)?)
    }

    pub fn config(&self) -> &PrepareMalisConfig {
        &self.config
    }

    fn component_error(&self, err: ComponentError) -> PipelineError {
        match err {
            ComponentError::LabelOverflow { max } => PipelineError::LabelOverflow {
                volume_type: self.config.labels_volume_type,
                max,
            },
            ComponentError::ShapeMismatch { labels, mask } => PipelineError::ShapeMismatch {
                left: self.config.labels_volume_type,
                left_shape: labels,
                right: self.config.ignore_volume_type,
                right_shape: mask,
            },
        }
    }
}

// PrepareMalisConfig::default() uses three distinct types, so it always validates
impl Default for PrepareMalis {
    fn default() -> Self {
        Self {
            config: PrepareMalisConfig::default(),
            spec: ProviderSpec::new(),
        }
    }
}

impl BatchFilter for PrepareMalis {
    fn name(&self) -> &str {
        NAME
    }

    fn setup(&mut self, upstream_spec: &ProviderSpec) -> Result<()> {
        let labels = self.config.labels_volume_type;
        let comp = self.config.malis_comp_volume_type;

        self.spec = upstream_spec.clone();

        // a missing label volume is only reported once a request needs it
        match upstream_spec.get(labels) {
            Some(labels_spec) => {
                self.spec.insert(comp, labels_spec.clone());
                debug!("{}: declaring {} over {}", NAME, comp, labels_spec.roi);
            }
            None => debug!("{}: {} not provided upstream, not declaring {}", NAME, labels, comp),
        }
        Ok(())
    }

    fn spec(&self) -> &ProviderSpec {
        &self.spec
    }

    fn prepare(&self, request: &mut BatchRequest) -> Result<Preparation> {
        let labels = self.config.labels_volume_type;
        let comp = self.config.malis_comp_volume_type;

        if !request.contains(comp) {
            warn!("no {} requested, will do nothing", comp);
            return Ok(Preparation::Skip);
        }

        if !request.contains(labels) {
            return Err(PipelineError::MissingRequiredVolume {
                stage: NAME.to_string(),
                required: labels,
                requested_by: comp,
            });
        }

        request.remove(comp);
        Ok(Preparation::Run)
    }

    fn process(
        &self,
        batch: &mut Batch,
        request: &BatchRequest,
        preparation: Preparation,
    ) -> Result<()> {
        if preparation.is_skip() {
            return Ok(());
        }

        let labels_type = self.config.labels_volume_type;
        let comp = self.config.malis_comp_volume_type;

        let roi = request
            .get(labels_type)
            .cloned()
            .ok_or_else(|| PipelineError::MissingRequiredVolume {
                stage: NAME.to_string(),
                required: labels_type,
                requested_by: comp,
            })?;

        let labels = batch
            .get(labels_type)
            .ok_or_else(|| PipelineError::MissingBatchVolume {
                stage: NAME.to_string(),
                volume_type: labels_type,
            })?
            .data
            .as_labels()?;

        let outside = batch
            .get(self.config.ignore_volume_type)
            .map(|ignore| ignore.data.zero_mask());

        let components = split_components(labels, outside.as_ref())
            .map_err(|e| self.component_error(e))?;

        info!(
            "{}: {} from {} {:?} (ignore mask: {}, next id: {})",
            NAME,
            comp,
            labels_type,
            labels.shape(),
            outside.is_some(),
            components.next_id()
        );

        let stacked = components.into_stacked();
        batch.insert(comp, Volume::new(VolumeData::Labels(stacked), roi));
        Ok(())
    }
}
