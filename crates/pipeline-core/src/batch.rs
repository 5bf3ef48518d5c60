//! Materialized batches flowing downstream

use std::collections::HashMap;
use voxel_batch_common::{Volume, VolumeType};

/// Volumes produced for one pipeline invocation
///
/// The batch owns every volume inserted into it for the rest of the
/// invocation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Batch {
    pub volumes: HashMap<VolumeType, Volume>,
}

impl Batch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, volume_type: VolumeType) -> bool {
        self.volumes.contains_key(&volume_type)
    }

    pub fn get(&self, volume_type: VolumeType) -> Option<&Volume> {
        self.volumes.get(&volume_type)
    }

    pub fn insert(&mut self, volume_type: VolumeType, volume: Volume) -> Option<Volume> {
        self.volumes.insert(volume_type, volume)
    }

    pub fn remove(&mut self, volume_type: VolumeType) -> Option<Volume> {
        self.volumes.remove(&volume_type)
    }

    pub fn len(&self) -> usize {
        self.volumes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.volumes.is_empty()
    }
}
