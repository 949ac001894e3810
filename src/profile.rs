//! Scan-line profile extraction.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::coords::line_profile_coordinates;
use crate::error::Error;
use crate::interp::{map_coordinates, BorderMode};
use crate::volume::{SpatialView, Volume};

/// Parameters controlling profile extraction.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileOptions {
    /// Width of the scan, perpendicular to the line, in point-center spacing.
    /// In 3D this is the diameter of the sampling cylinder around the line.
    pub linewidth: usize,
    /// Interpolation neighbor order: 0 nearest, 1 linear, 3 cubic.
    pub order: usize,
    /// How values falling outside the image are computed.
    pub mode: BorderMode,
    /// Fill value used by [`BorderMode::Constant`].
    pub cval: f32,
    /// Whether the last axis of a 3-axis image holds channels rather than a
    /// third spatial dimension. 4-axis images always carry a channel axis.
    pub multichannel: bool,
    /// If true, the destination point is included in the profile.
    pub endpoint: bool,
    /// Number of rotational copies of the half-band used for 3D scan lines.
    pub num_sample_points: usize,
}

impl Default for ProfileOptions {
    fn default() -> Self {
        Self {
            linewidth: 1,
            order: 1,
            mode: BorderMode::Constant,
            cval: 0.0,
            multichannel: true,
            endpoint: true,
            num_sample_points: 4,
        }
    }
}

/// Intensity profile along a scan line: one row of `channels` mean values per
/// position. Grayscale images yield a single channel.
#[derive(Clone, Debug, Serialize)]
pub struct Profile {
    values: Vec<f32>,
    positions: usize,
    channels: usize,
}

impl Profile {
    /// Number of positions along the scan line.
    #[inline]
    pub fn positions(&self) -> usize {
        self.positions
    }

    /// Number of channels per position.
    #[inline]
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// All values in position-major order (`positions × channels`).
    #[inline]
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Channel values at one position.
    #[inline]
    pub fn at(&self, pos: usize) -> &[f32] {
        &self.values[pos * self.channels..(pos + 1) * self.channels]
    }
}

/// Returns the intensity profile of an image measured along a scan line.
///
/// `image` is a grayscale or multichannel volume with 2 to 4 axes; `src` and
/// `dst` are the scan-line endpoints in axis order (row, column) or (plane,
/// row, column). The endpoints may lie outside the image; out-of-range
/// samples follow `options.mode`. The destination point is included in the
/// profile when `options.endpoint` is true, in contrast to half-open
/// indexing.
///
/// With `linewidth > 1` each returned value is the mean over a band of
/// samples perpendicular to the line (a strip in 2D, a spoke-sampled
/// cylinder in 3D).
///
/// ```
/// use line_profile::{profile_line, ProfileOptions, Volume};
///
/// let image = Volume::from_shape_vec(&[2, 3], vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])?;
/// let profile = profile_line(&image, &[0.0, 0.0], &[0.0, 2.0], &ProfileOptions::default())?;
/// assert_eq!(profile.values(), &[1.0, 2.0, 3.0]);
/// # Ok::<(), line_profile::Error>(())
/// ```
pub fn profile_line(
    image: &Volume,
    src: &[f32],
    dst: &[f32],
    options: &ProfileOptions,
) -> Result<Profile, Error> {
    let ndim = image.ndim();
    if !(2..=4).contains(&ndim) {
        return Err(Error::UnsupportedImageRank(ndim));
    }
    let has_channels = ndim == 4 || (ndim == 3 && options.multichannel);
    let spatial_rank = if has_channels { ndim - 1 } else { ndim };
    if src.len() != dst.len() {
        return Err(Error::EndpointRankMismatch {
            src: src.len(),
            dst: dst.len(),
        });
    }
    if src.len() != spatial_rank {
        return Err(Error::SpatialRankMismatch {
            spatial: spatial_rank,
            point: src.len(),
        });
    }

    let coords = line_profile_coordinates(
        src,
        dst,
        options.linewidth,
        options.endpoint,
        options.num_sample_points,
    )?;
    let positions = coords.positions();
    let band = coords.band();
    let channels = if has_channels {
        image.shape()[ndim - 1]
    } else {
        1
    };
    debug!(
        "profile_line: {positions} positions, band {band}, {channels} channel(s), order {}",
        options.order
    );

    let mut values = vec![0.0f32; positions * channels];
    for ch in 0..channels {
        let view = SpatialView::new(image, spatial_rank, ch);
        let samples = map_coordinates(&view, &coords, options.order, options.mode, options.cval)?;
        for p in 0..positions {
            let row = &samples[p * band..(p + 1) * band];
            values[p * channels + ch] = row.iter().sum::<f32>() / band as f32;
        }
    }

    Ok(Profile {
        values,
        positions,
        channels,
    })
}
