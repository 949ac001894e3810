//! Owned row-major f32 arrays with an arbitrary number of axes.
//!
//! `Volume` generalizes a single-channel float image to N axes: a flat
//! `Vec<f32>` plus an explicit shape, row-major (the last axis is the fastest
//! varying). Multichannel images store the channel axis last, so a 2D RGB
//! image has shape `[rows, cols, 3]`.

use crate::error::Error;

/// Owned N-dimensional f32 array in row-major layout.
#[derive(Clone, Debug)]
pub struct Volume {
    shape: Vec<usize>,
    data: Vec<f32>,
}

impl Volume {
    /// Construct a zero-initialized volume of the given shape.
    pub fn zeros(shape: &[usize]) -> Self {
        let len = shape.iter().product();
        Self {
            shape: shape.to_vec(),
            data: vec![0.0; len],
        }
    }

    /// Construct a volume from a shape and a row-major buffer.
    pub fn from_shape_vec(shape: &[usize], data: Vec<f32>) -> Result<Self, Error> {
        let expected: usize = shape.iter().product();
        if data.len() != expected {
            return Err(Error::ShapeMismatch {
                shape: shape.to_vec(),
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            shape: shape.to_vec(),
            data,
        })
    }

    /// Number of axes.
    #[inline]
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Extent of each axis.
    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Backing storage in row-major order.
    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    #[inline]
    fn idx(&self, index: &[usize]) -> usize {
        debug_assert_eq!(index.len(), self.shape.len());
        let mut linear = 0usize;
        for (i, &extent) in index.iter().zip(&self.shape) {
            debug_assert!(*i < extent);
            linear = linear * extent + i;
        }
        linear
    }

    /// Value at a full N-dimensional index.
    #[inline]
    pub fn get(&self, index: &[usize]) -> f32 {
        self.data[self.idx(index)]
    }

    /// Set the value at a full N-dimensional index.
    #[inline]
    pub fn set(&mut self, index: &[usize], v: f32) {
        let i = self.idx(index);
        self.data[i] = v;
    }
}

/// Borrowed view over the spatial axes of a volume with one channel fixed.
///
/// When `spatial_rank` equals the volume rank the view is the whole volume
/// (`channels == 1`). When it is one less, the trailing axis is treated as a
/// channel axis and lookups read the selected channel only.
pub(crate) struct SpatialView<'a> {
    data: &'a [f32],
    shape: [usize; 3],
    rank: usize,
    channels: usize,
    channel: usize,
}

impl<'a> SpatialView<'a> {
    pub fn new(volume: &'a Volume, spatial_rank: usize, channel: usize) -> Self {
        let ndim = volume.ndim();
        debug_assert!(spatial_rank == ndim || spatial_rank + 1 == ndim);
        debug_assert!(spatial_rank >= 2 && spatial_rank <= 3);
        let channels = if spatial_rank < ndim {
            volume.shape()[ndim - 1]
        } else {
            1
        };
        debug_assert!(channel < channels);
        let mut shape = [1usize; 3];
        shape[..spatial_rank].copy_from_slice(&volume.shape()[..spatial_rank]);
        Self {
            data: volume.data(),
            shape,
            rank: spatial_rank,
            channels,
            channel,
        }
    }

    /// Number of spatial axes (2 or 3).
    #[inline]
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Extent of a spatial axis.
    #[inline]
    pub fn dim(&self, axis: usize) -> usize {
        debug_assert!(axis < self.rank);
        self.shape[axis]
    }

    /// Value at a spatial index, for the channel the view was built with.
    #[inline]
    pub fn value(&self, index: &[usize]) -> f32 {
        debug_assert_eq!(index.len(), self.rank);
        let mut linear = 0usize;
        for (i, &extent) in index.iter().zip(&self.shape[..self.rank]) {
            debug_assert!(*i < extent);
            linear = linear * extent + i;
        }
        self.data[linear * self.channels + self.channel]
    }
}
