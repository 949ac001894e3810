//! Interpolated sampling of a volume at fractional coordinates.
//!
//! This is the numeric collaborator behind `profile_line`: given the grid of
//! sampling coordinates, evaluate the image at each one using a separable
//! neighbor kernel and a border policy for out-of-range taps. Supported
//! neighbor orders are 0 (nearest), 1 (multilinear), and 3 (cubic,
//! Catmull-Rom). Other orders are rejected with [`Error::UnsupportedOrder`].

use serde::{Deserialize, Serialize};

use crate::coords::SampleCoordinates;
use crate::error::Error;
use crate::volume::SpatialView;

/// Policy for coordinates falling outside the image extent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderMode {
    /// Fill with a constant value (`cval`).
    #[default]
    Constant,
    /// Clamp to the nearest edge element.
    Nearest,
    /// Reflect about the edge, repeating the edge element: `d c b a | a b c d`.
    Reflect,
    /// Reflect about the edge element without repeating it: `d c b | a b c d`.
    Mirror,
    /// Wrap around periodically: `a b c d | a b c d`.
    Wrap,
}

/// Maps a possibly out-of-range index into `[0, len)` according to `mode`.
///
/// Returns `None` only for `Constant` mode, where the caller substitutes the
/// fill value.
pub fn map_index(i: isize, len: usize, mode: BorderMode) -> Option<usize> {
    debug_assert!(len > 0);
    let n = len as isize;
    if (0..n).contains(&i) {
        return Some(i as usize);
    }
    match mode {
        BorderMode::Constant => None,
        BorderMode::Nearest => Some(i.clamp(0, n - 1) as usize),
        BorderMode::Reflect => {
            let m = i.rem_euclid(2 * n);
            Some(if m < n { m as usize } else { (2 * n - 1 - m) as usize })
        }
        BorderMode::Mirror => {
            if len == 1 {
                return Some(0);
            }
            let m = i.rem_euclid(2 * n - 2);
            Some(if m < n { m as usize } else { (2 * n - 2 - m) as usize })
        }
        BorderMode::Wrap => Some(i.rem_euclid(n) as usize),
    }
}

/// Per-axis interpolation taps: base index, kernel weights, tap count.
fn axis_taps(x: f32, order: usize) -> (isize, [f32; 4], usize) {
    match order {
        0 => {
            // Round half away from the lower neighbor, matching
            // nearest-neighbor sampling on pixel centers.
            let i = (x + 0.5).floor() as isize;
            (i, [1.0, 0.0, 0.0, 0.0], 1)
        }
        1 => {
            let f = x.floor();
            let t = x - f;
            (f as isize, [1.0 - t, t, 0.0, 0.0], 2)
        }
        3 => {
            // Catmull-Rom kernel: interpolating, C1, with linear precision.
            let f = x.floor();
            let t = x - f;
            let t2 = t * t;
            let t3 = t2 * t;
            let w0 = 0.5 * (-t3 + 2.0 * t2 - t);
            let w1 = 0.5 * (3.0 * t3 - 5.0 * t2 + 2.0);
            let w2 = 0.5 * (-3.0 * t3 + 4.0 * t2 + t);
            let w3 = 0.5 * (t3 - t2);
            (f as isize - 1, [w0, w1, w2, w3], 4)
        }
        _ => unreachable!("order validated by map_coordinates"),
    }
}

/// Evaluates the view at one fractional point via the separable kernel.
fn sample_point(
    view: &SpatialView<'_>,
    point: &[f32],
    order: usize,
    mode: BorderMode,
    cval: f32,
) -> f32 {
    let rank = view.rank();
    debug_assert_eq!(point.len(), rank);

    let mut bases = [0isize; 3];
    let mut weights = [[0.0f32; 4]; 3];
    let mut counts = [1usize; 3];
    for d in 0..rank {
        let (b, w, c) = axis_taps(point[d], order);
        bases[d] = b;
        weights[d] = w;
        counts[d] = c;
    }

    let mut acc = 0.0f32;
    let mut offs = [0usize; 3];
    let mut idx = [0usize; 3];
    'taps: loop {
        let mut w = 1.0f32;
        let mut oob = false;
        for d in 0..rank {
            w *= weights[d][offs[d]];
            match map_index(bases[d] + offs[d] as isize, view.dim(d), mode) {
                Some(i) => idx[d] = i,
                None => oob = true,
            }
        }
        if w != 0.0 {
            acc += w * if oob { cval } else { view.value(&idx[..rank]) };
        }

        for d in (0..rank).rev() {
            offs[d] += 1;
            if offs[d] < counts[d] {
                continue 'taps;
            }
            offs[d] = 0;
        }
        break;
    }
    acc
}

/// Evaluates the view at every sampling coordinate.
///
/// Returns `positions × band` values in position-major order, so the band
/// samples of each position are contiguous.
pub(crate) fn map_coordinates(
    view: &SpatialView<'_>,
    coords: &SampleCoordinates,
    order: usize,
    mode: BorderMode,
    cval: f32,
) -> Result<Vec<f32>, Error> {
    if !matches!(order, 0 | 1 | 3) {
        return Err(Error::UnsupportedOrder(order));
    }
    debug_assert_eq!(view.rank(), coords.dims());

    let positions = coords.positions();
    let band = coords.band();
    let rank = coords.dims();
    let mut out = Vec::with_capacity(positions * band);
    let mut point = [0.0f32; 3];
    for p in 0..positions {
        for w in 0..band {
            for d in 0..rank {
                point[d] = coords.at(d, p, w);
            }
            out.push(sample_point(view, &point[..rank], order, mode, cval));
        }
    }
    Ok(out)
}
