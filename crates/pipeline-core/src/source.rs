//! In-memory batch source

use crate::error::{PipelineError, Result};
use crate::{Batch, BatchProvider, BatchRequest, ProviderSpec, VolumeSpec};
use std::collections::HashMap;
use tracing::debug;
use voxel_batch_common::{DataKind, Volume, VolumeType};

/// Serves crops of whole volumes held in memory
pub struct ArraySource {
    name: String,
    volumes: HashMap<VolumeType, Volume>,
    spec: ProviderSpec,
}

impl ArraySource {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            volumes: HashMap::new(),
            spec: ProviderSpec::new(),
        }
    }

    /// Add a volume; its ROI becomes the declared ROI for `volume_type`
    pub fn with_volume(mut self, volume_type: VolumeType, volume: Volume) -> Self {
        let interpolatable = volume.data.kind() == DataKind::Intensity;
        self.spec.insert(
            volume_type,
            VolumeSpec::new(volume.roi.clone(), interpolatable),
        );
        self.volumes.insert(volume_type, volume);
        self
    }
}

impl BatchProvider for ArraySource {
    fn name(&self) -> &str {
        &self.name
    }

    fn spec(&self) -> &ProviderSpec {
        &self.spec
    }

    fn provide(&self, request: &BatchRequest) -> Result<Batch> {
        let mut batch = Batch::new();

        for (&volume_type, roi) in &request.volumes {
            let volume = self
                .volumes
                .get(&volume_type)
                .ok_or(PipelineError::UnsupportedVolume(volume_type))?;

            if !volume.roi.contains(roi) {
                return Err(PipelineError::RoiOutOfBounds {
                    volume_type,
                    requested: roi.clone(),
                    available: volume.roi.clone(),
                });
            }

            debug!("{}: providing {} over {}", self.name, volume_type, roi);
            batch.insert(volume_type, volume.crop(roi)?);
        }

        Ok(batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{ArrayD, IxDyn};
    use voxel_batch_common::{Roi, VolumeData};

    fn source() -> ArraySource {
        let labels = ArrayD::from_shape_fn(IxDyn(&[6, 6]), |ix| (ix[0] * 6 + ix[1]) as u64);
        let raw = ArrayD::from_elem(IxDyn(&[6, 6]), 0.5f32);
        ArraySource::new("test_source")
            .with_volume(
                VolumeType::GtLabels,
                Volume::new(VolumeData::Labels(labels), Roi::from_shape(vec![6, 6])),
            )
            .with_volume(
                VolumeType::Raw,
                Volume::new(VolumeData::Intensity(raw), Roi::from_shape(vec![6, 6])),
            )
    }

    #[test]
    fn test_spec_declares_volumes() {
        let source = source();
        let spec = source.spec();
        assert_eq!(spec.len(), 2);
        assert!(!spec.get(VolumeType::GtLabels).unwrap().interpolatable);
        assert!(spec.get(VolumeType::Raw).unwrap().interpolatable);
    }

    #[test]
    fn test_provide_crops_requested_roi() {
        let roi = Roi::new(vec![2, 3], vec![2, 2]).unwrap();
        let request = BatchRequest::new().with_volume(VolumeType::GtLabels, roi.clone());

        let batch = source().provide(&request).unwrap();

        assert_eq!(batch.len(), 1);
        let volume = batch.get(VolumeType::GtLabels).unwrap();
        assert_eq!(volume.roi, roi);
        let labels = volume.data.as_labels().unwrap();
        assert_eq!(labels.as_slice().unwrap(), &[15, 16, 21, 22]);
    }

    #[test]
    fn test_provide_rejects_unknown_volume() {
        let request =
            BatchRequest::new().with_volume(VolumeType::GtIgnore, Roi::from_shape(vec![2, 2]));
        assert!(matches!(
            source().provide(&request),
            Err(PipelineError::UnsupportedVolume(VolumeType::GtIgnore))
        ));
    }

    #[test]
    fn test_provide_rejects_roi_out_of_bounds() {
        let request = BatchRequest::new()
            .with_volume(VolumeType::Raw, Roi::new(vec![4, 4], vec![4, 4]).unwrap());
        assert!(matches!(
            source().provide(&request),
            Err(PipelineError::RoiOutOfBounds {
                volume_type: VolumeType::Raw,
                ..
            })
        ));
    }
}
