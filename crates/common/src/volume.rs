//! Volumes: N-dimensional arrays paired with the region they cover

use crate::{Result, Roi, VolumeError};
use ndarray::{ArrayD, Slice};
use std::fmt;

/// Element kind carried by a [`VolumeData`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataKind {
    Labels,
    Mask,
    Intensity,
}

impl fmt::Display for DataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataKind::Labels => write!(f, "labels"),
            DataKind::Mask => write!(f, "mask"),
            DataKind::Intensity => write!(f, "intensity"),
        }
    }
}

/// Array payload of a volume
#[derive(Debug, Clone, PartialEq)]
pub enum VolumeData {
    /// Non-negative integer object labels
    Labels(ArrayD<u64>),
    /// Binary or small-integer masks
    Mask(ArrayD<u8>),
    /// Raw intensities, affinities, loss weights
    Intensity(ArrayD<f32>),
}

impl VolumeData {
    pub fn kind(&self) -> DataKind {
        match self {
            VolumeData::Labels(_) => DataKind::Labels,
            VolumeData::Mask(_) => DataKind::Mask,
            VolumeData::Intensity(_) => DataKind::Intensity,
        }
    }

    pub fn shape(&self) -> &[usize] {
        match self {
            VolumeData::Labels(a) => a.shape(),
            VolumeData::Mask(a) => a.shape(),
            VolumeData::Intensity(a) => a.shape(),
        }
    }

    pub fn ndim(&self) -> usize {
        self.shape().len()
    }

    /// Borrow the label array
    ///
    /// # Errors
    /// Returns `WrongKind` for mask or intensity data
    pub fn as_labels(&self) -> Result<&ArrayD<u64>> {
        match self {
            VolumeData::Labels(a) => Ok(a),
            other => Err(VolumeError::WrongKind {
                expected: DataKind::Labels,
                found: other.kind(),
            }),
        }
    }

    /// `true` wherever the voxel value is zero
    pub fn zero_mask(&self) -> ArrayD<bool> {
        match self {
            VolumeData::Labels(a) => a.mapv(|v| v == 0),
            VolumeData::Mask(a) => a.mapv(|v| v == 0),
            VolumeData::Intensity(a) => a.mapv(|v| v == 0.0),
        }
    }

    /// Copy out the block starting at `start` with extent `extent`
    pub fn crop(&self, start: &[usize], extent: &[usize]) -> Result<VolumeData> {
        Ok(match self {
            VolumeData::Labels(a) => VolumeData::Labels(crop_array(a, start, extent)?),
            VolumeData::Mask(a) => VolumeData::Mask(crop_array(a, start, extent)?),
            VolumeData::Intensity(a) => VolumeData::Intensity(crop_array(a, start, extent)?),
        })
    }
}

fn crop_array<T: Clone>(array: &ArrayD<T>, start: &[usize], extent: &[usize]) -> Result<ArrayD<T>> {
    for found in [start.len(), extent.len()] {
        if found != array.ndim() {
            return Err(VolumeError::DimensionMismatch {
                expected: array.ndim(),
                found,
            });
        }
    }
    for (axis, &len) in array.shape().iter().enumerate() {
        let end = start[axis] + extent[axis];
        if end > len {
            return Err(VolumeError::CropOutOfBounds { axis, end, len });
        }
    }

    let view = array.slice_each_axis(|ax| {
        let i = ax.axis.index();
        Slice::from(start[i]..start[i] + extent[i])
    });
    Ok(view.to_owned())
}

/// A volume: array data over a region of interest
///
/// The ROI describes the trailing (spatial) axes of the data. Leading axes
/// beyond the ROI's dimensionality are channels, e.g. the two passes of a
/// MALIS component volume or the three directions of an affinity volume.
#[derive(Debug, Clone, PartialEq)]
pub struct Volume {
    pub data: VolumeData,
    pub roi: Roi,
}

impl Volume {
    pub fn new(data: VolumeData, roi: Roi) -> Self {
        Self { data, roi }
    }

    /// Number of leading channel axes not covered by the ROI
    pub fn channel_dims(&self) -> usize {
        self.data.ndim().saturating_sub(self.roi.dims())
    }

    /// Extract the sub-volume covering `roi`, keeping all channels
    ///
    /// # Errors
    /// Returns an error if `roi` has a different dimensionality or is not
    /// contained in this volume's ROI
    pub fn crop(&self, roi: &Roi) -> Result<Volume> {
        if roi.dims() != self.roi.dims() || self.data.ndim() < self.roi.dims() {
            return Err(VolumeError::DimensionMismatch {
                expected: self.roi.dims(),
                found: roi.dims(),
            });
        }
        if !self.roi.contains(roi) {
            return Err(VolumeError::RoiNotContained {
                requested: roi.clone(),
                available: self.roi.clone(),
            });
        }

        let channels = self.channel_dims();
        let mut start = vec![0usize; channels];
        let mut extent = self.data.shape()[..channels].to_vec();
        for d in 0..roi.dims() {
            start.push((roi.offset()[d] - self.roi.offset()[d]) as usize);
            extent.push(roi.shape()[d]);
        }

        Ok(Volume::new(self.data.crop(&start, &extent)?, roi.clone()))
    }
}
