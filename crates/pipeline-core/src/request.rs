//! Batch requests flowing upstream

use std::collections::HashMap;
use voxel_batch_common::{Roi, VolumeType};

/// Requested ROI per volume type, for one pipeline invocation
///
/// Stages may add or remove entries before forwarding the request upstream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchRequest {
    pub volumes: HashMap<VolumeType, Roi>,
}

impl BatchRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_volume(mut self, volume_type: VolumeType, roi: Roi) -> Self {
        self.volumes.insert(volume_type, roi);
        self
    }

    pub fn contains(&self, volume_type: VolumeType) -> bool {
        self.volumes.contains_key(&volume_type)
    }

    pub fn get(&self, volume_type: VolumeType) -> Option<&Roi> {
        self.volumes.get(&volume_type)
    }

    pub fn insert(&mut self, volume_type: VolumeType, roi: Roi) -> Option<Roi> {
        self.volumes.insert(volume_type, roi)
    }

    pub fn remove(&mut self, volume_type: VolumeType) -> Option<Roi> {
        self.volumes.remove(&volume_type)
    }

    pub fn len(&self) -> usize {
        self.volumes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.volumes.is_empty()
    }
}
