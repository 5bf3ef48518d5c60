//! Provider specs: what each node of a pipeline can supply

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use voxel_batch_common::{Roi, VolumeType};

/// What a provider can supply for one volume type, if asked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumeSpec {
    /// Region the provider can serve
    pub roi: Roi,

    /// Whether values may be interpolated (false for labels and masks)
    pub interpolatable: bool,
}

impl VolumeSpec {
    pub fn new(roi: Roi, interpolatable: bool) -> Self {
        Self {
            roi,
            interpolatable,
        }
    }
}

/// Declared capabilities of a provider, keyed by volume type
///
/// Built once per pipeline topology. `Clone` produces an independent copy;
/// no entry is shared between clones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderSpec {
    pub volumes: HashMap<VolumeType, VolumeSpec>,
}

impl ProviderSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_volume(mut self, volume_type: VolumeType, spec: VolumeSpec) -> Self {
        self.volumes.insert(volume_type, spec);
        self
    }

    pub fn contains(&self, volume_type: VolumeType) -> bool {
        self.volumes.contains_key(&volume_type)
    }

    pub fn get(&self, volume_type: VolumeType) -> Option<&VolumeSpec> {
        self.volumes.get(&volume_type)
    }

    /// Insert or overwrite the entry for `volume_type`
    pub fn insert(&mut self, volume_type: VolumeType, spec: VolumeSpec) -> Option<VolumeSpec> {
        self.volumes.insert(volume_type, spec)
    }

    pub fn remove(&mut self, volume_type: VolumeType) -> Option<VolumeSpec> {
        self.volumes.remove(&volume_type)
    }

    pub fn len(&self) -> usize {
        self.volumes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.volumes.is_empty()
    }

    /// Declared volume types in a stable order
    pub fn volume_types(&self) -> Vec<VolumeType> {
        let mut types: Vec<VolumeType> = self.volumes.keys().copied().collect();
        types.sort();
        types
    }
}
