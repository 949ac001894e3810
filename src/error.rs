//! Error type shared across the crate.

use thiserror::Error;

/// Errors reported by coordinate generation and profile extraction.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// The image rank is outside the supported 2..=4 range.
    #[error("profile extraction is not implemented for images with {0} axes")]
    UnsupportedImageRank(usize),

    /// The scan-line endpoints carry different numbers of coordinates.
    #[error("scan-line endpoints have mismatched ranks ({src} vs {dst})")]
    EndpointRankMismatch { src: usize, dst: usize },

    /// The scan-line endpoints are neither 2D nor 3D.
    #[error("scan-line endpoints must have 2 or 3 coordinates, got {0}")]
    UnsupportedPointRank(usize),

    /// The image spatial rank and the endpoint rank disagree.
    #[error("image has {spatial} spatial axes but endpoints have {point} coordinates")]
    SpatialRankMismatch { spatial: usize, point: usize },

    /// `src` and `dst` coincide, so the scan line has zero length.
    #[error("scan-line endpoints coincide; the line has zero length")]
    DegenerateLine,

    /// Interpolation order outside the supported set {0, 1, 3}.
    #[error("interpolation order {0} is not supported")]
    UnsupportedOrder(usize),

    /// `linewidth` must be at least 1.
    #[error("linewidth must be at least 1")]
    InvalidLinewidth,

    /// `num_sample_points` must be at least 1.
    #[error("num_sample_points must be at least 1")]
    InvalidSampleCount,

    /// Volume construction with an inconsistent shape / buffer length pair.
    #[error("volume shape {shape:?} requires {expected} elements, got {actual}")]
    ShapeMismatch {
        shape: Vec<usize>,
        expected: usize,
        actual: usize,
    },
}
