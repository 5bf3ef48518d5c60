//! Regions of interest in voxel coordinates

use crate::{Result, VolumeError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Axis-aligned region: a signed offset plus an extent per axis
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Roi {
    offset: Vec<i64>,
    shape: Vec<usize>,
}

impl Roi {
    /// Create a ROI from an offset and a shape of equal dimensionality
    ///
    /// # Errors
    /// Returns `DimensionMismatch` if offset and shape have different lengths
    pub fn new(offset: impl Into<Vec<i64>>, shape: impl Into<Vec<usize>>) -> Result<Self> {
        let offset = offset.into();
        let shape = shape.into();
        if offset.len() != shape.len() {
            return Err(VolumeError::DimensionMismatch {
                expected: offset.len(),
                found: shape.len(),
            });
        }
        Ok(Self { offset, shape })
    }

    /// ROI anchored at the origin
    pub fn from_shape(shape: impl Into<Vec<usize>>) -> Self {
        let shape = shape.into();
        Self {
            offset: vec![0; shape.len()],
            shape,
        }
    }

    pub fn offset(&self) -> &[i64] {
        &self.offset
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn dims(&self) -> usize {
        self.shape.len()
    }

    pub fn begin(&self) -> Vec<i64> {
        self.offset.clone()
    }

    /// Exclusive upper corner
    pub fn end(&self) -> Vec<i64> {
        self.offset
            .iter()
            .zip(&self.shape)
            .map(|(&o, &s)| o + s as i64)
            .collect()
    }

    /// Whether `other` lies entirely inside this ROI
    pub fn contains(&self, other: &Roi) -> bool {
        if self.dims() != other.dims() {
            return false;
        }
        let (begin, end) = (self.begin(), self.end());
        let (other_begin, other_end) = (other.begin(), other.end());
        (0..self.dims()).all(|d| other_begin[d] >= begin[d] && other_end[d] <= end[d])
    }
}

impl fmt::Display for Roi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let axes: Vec<String> = self
            .begin()
            .iter()
            .zip(self.end())
            .map(|(b, e)| format!("{b}..{e}"))
            .collect();
        write!(f, "[{}]", axes.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_mismatched_dims() {
        assert!(Roi::new(vec![0, 0], vec![1, 2, 3]).is_err());
    }

    #[test]
    fn test_begin_end_display() {
        let roi = Roi::new(vec![-2, 4, 0], vec![4, 2, 10]).unwrap();
        assert_eq!(roi.begin(), vec![-2, 4, 0]);
        assert_eq!(roi.end(), vec![2, 6, 10]);
        assert_eq!(roi.to_string(), "[-2..2, 4..6, 0..10]");
    }

    #[test]
    fn test_contains() {
        let outer = Roi::new(vec![0, 0], vec![10, 10]).unwrap();
        let inner = Roi::new(vec![2, 3], vec![4, 7]).unwrap();
        let straddling = Roi::new(vec![8, 0], vec![4, 4]).unwrap();

        assert!(outer.contains(&inner));
        assert!(outer.contains(&outer));
        assert!(!outer.contains(&straddling));
        assert!(!inner.contains(&outer));
        assert!(!outer.contains(&Roi::from_shape(vec![1, 1, 1])));
    }
}
