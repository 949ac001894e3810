//! Evenly spaced sampling coordinates along a scan line.
//!
//! The generator produces the grid of points that the profile sampler feeds
//! to the interpolator: `positions` points along the segment from `src`
//! toward `dst`, each carrying a `band` of points perpendicular to the line.
//! In 2D the band is a flat strip; in 3D it approximates a cylinder built
//! from copies of a half-band rotated around the line axis.

use nalgebra::{Point3, Vector3};

use crate::error::Error;
use crate::geom::{any_perpendicular, axis_rotation, transform_points};

/// Tolerance used to merge band columns that coincide after rotation.
const DEDUP_TOL: f32 = 1e-4;

/// Sampling coordinates with shape `(dims, positions, band)`.
///
/// Storage is dimension-major: `at(d, p, w)` reads element
/// `d * positions * band + p * band + w`. For odd linewidths the band column
/// at `w == 0` lies on the scan line itself; even linewidths straddle the
/// centerline without sampling it exactly.
#[derive(Clone, Debug)]
pub struct SampleCoordinates {
    dims: usize,
    positions: usize,
    band: usize,
    data: Vec<f32>,
}

impl SampleCoordinates {
    fn zeros(dims: usize, positions: usize, band: usize) -> Self {
        Self {
            dims,
            positions,
            band,
            data: vec![0.0; dims * positions * band],
        }
    }

    /// Number of spatial dimensions (2 or 3).
    #[inline]
    pub fn dims(&self) -> usize {
        self.dims
    }

    /// Number of positions along the scan line.
    #[inline]
    pub fn positions(&self) -> usize {
        self.positions
    }

    /// Number of band points per position.
    #[inline]
    pub fn band(&self) -> usize {
        self.band
    }

    /// Coordinate of one sample along one axis.
    #[inline]
    pub fn at(&self, dim: usize, pos: usize, w: usize) -> f32 {
        debug_assert!(dim < self.dims && pos < self.positions && w < self.band);
        self.data[(dim * self.positions + pos) * self.band + w]
    }

    #[inline]
    fn set(&mut self, dim: usize, pos: usize, w: usize, v: f32) {
        debug_assert!(dim < self.dims && pos < self.positions && w < self.band);
        self.data[(dim * self.positions + pos) * self.band + w] = v;
    }
}

/// Generates the sampling coordinates for a scan line from `src` to `dst`.
///
/// `length` is the ceiling of the Euclidean distance between the endpoints;
/// the line carries `length + 1` positions when `endpoint` is true (the
/// destination is included, in contrast to half-open indexing) and `length`
/// otherwise, with the same spacing in both cases. `linewidth` is the width
/// of the perpendicular band in point-center spacing, so a linewidth of 1
/// yields zero spread. `num_sample_points` is only used for 3D lines: the
/// number of rotational copies of the half-band spread evenly over a full
/// turn around the axis.
pub fn line_profile_coordinates(
    src: &[f32],
    dst: &[f32],
    linewidth: usize,
    endpoint: bool,
    num_sample_points: usize,
) -> Result<SampleCoordinates, Error> {
    if src.len() != dst.len() {
        return Err(Error::EndpointRankMismatch {
            src: src.len(),
            dst: dst.len(),
        });
    }
    let rank = src.len();
    if rank != 2 && rank != 3 {
        return Err(Error::UnsupportedPointRank(rank));
    }
    if linewidth < 1 {
        return Err(Error::InvalidLinewidth);
    }
    if num_sample_points < 1 {
        return Err(Error::InvalidSampleCount);
    }

    let dist: f32 = src
        .iter()
        .zip(dst)
        .map(|(a, b)| (b - a) * (b - a))
        .sum::<f32>()
        .sqrt();
    let length = dist.ceil() as usize;
    if length == 0 {
        return Err(Error::DegenerateLine);
    }
    let positions = if endpoint { length + 1 } else { length };

    // Step between consecutive positions. This also serves as the direction
    // vector for the perpendicular construction; its norm is dist / length,
    // slightly below one when the distance is fractional.
    let step: Vec<f32> = src
        .iter()
        .zip(dst)
        .map(|(a, b)| (b - a) / length as f32)
        .collect();

    if rank == 2 {
        Ok(band_2d(src, &step, linewidth, positions))
    } else {
        Ok(band_3d(
            src,
            dst,
            &step,
            linewidth,
            positions,
            num_sample_points,
        ))
    }
}

/// Flat 2D band: `linewidth` points per position along the rotated direction
/// `(d_col, -d_row)`, spanning `±(linewidth - 1) / 2` around the centerline.
fn band_2d(src: &[f32], step: &[f32], linewidth: usize, positions: usize) -> SampleCoordinates {
    let (d_row, d_col) = (step[0], step[1]);
    // Half-width in point-center spacing, not pixel count: a 1-wide line has
    // zero spread.
    let row_hw = (linewidth - 1) as f32 * d_col / 2.0;
    let col_hw = (linewidth - 1) as f32 * -d_row / 2.0;

    let mut out = SampleCoordinates::zeros(2, positions, linewidth);
    for p in 0..positions {
        let cr = src[0] + p as f32 * d_row;
        let cc = src[1] + p as f32 * d_col;
        for w in 0..linewidth {
            let t = if linewidth == 1 {
                0.0
            } else {
                -1.0 + 2.0 * w as f32 / (linewidth - 1) as f32
            };
            out.set(0, p, w, cr + t * row_hw);
            out.set(1, p, w, cc + t * col_hw);
        }
    }
    out
}

/// Cylindrical 3D band: the half of the perpendicular band on one side of the
/// centerline, plus rotated copies spread evenly around the line axis.
fn band_3d(
    src: &[f32],
    dst: &[f32],
    step: &[f32],
    linewidth: usize,
    positions: usize,
    num_sample_points: usize,
) -> SampleCoordinates {
    let dir = Vector3::new(step[0], step[1], step[2]);
    let centers: Vec<Point3<f32>> = (0..positions)
        .map(|p| {
            Point3::new(
                src[0] + p as f32 * step[0],
                src[1] + p as f32 * step[1],
                src[2] + p as f32 * step[2],
            )
        })
        .collect();

    if linewidth == 1 {
        let mut out = SampleCoordinates::zeros(3, positions, 1);
        for (p, c) in centers.iter().enumerate() {
            for d in 0..3 {
                out.set(d, p, 0, c[d]);
            }
        }
        return out;
    }

    let perp = any_perpendicular(&dir);
    let hw = (linewidth - 1) as f32 / 2.0;

    // One-sided half of the full band (offset spacing is exactly one point
    // spacing), ordered centerline-first. Odd linewidths include the exact
    // centerline offset; even ones start half a spacing away from it.
    let half = linewidth.div_ceil(2);
    let offsets: Vec<f32> = (0..half).map(|w| -hw + w as f32).rev().collect();

    let primary: Vec<Vec<Point3<f32>>> = offsets
        .iter()
        .map(|&o| centers.iter().map(|c| *c + perp * o).collect())
        .collect();

    // Rotated copies at angles 2πk / num_sample_points, k ≥ 1; angle zero is
    // the primary band itself. Columns that land on an existing one (the
    // rotated centerline copies in particular) are merged.
    let pivot = Point3::new(dst[0], dst[1], dst[2]);
    let mut columns: Vec<Vec<Point3<f32>>> = primary.clone();
    for k in 1..num_sample_points {
        let angle = 2.0 * std::f32::consts::PI * k as f32 / num_sample_points as f32;
        let m = axis_rotation(angle, &dir, &pivot);
        for column in &primary {
            let rotated = transform_points(&m, column);
            if !columns.iter().any(|kept| columns_match(kept, &rotated)) {
                columns.push(rotated);
            }
        }
    }

    let mut out = SampleCoordinates::zeros(3, positions, columns.len());
    for (w, column) in columns.iter().enumerate() {
        for (p, point) in column.iter().enumerate() {
            for d in 0..3 {
                out.set(d, p, w, point[d]);
            }
        }
    }
    out
}

fn columns_match(a: &[Point3<f32>], b: &[Point3<f32>]) -> bool {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b)
        .all(|(p, q)| (p - q).norm_squared() < DEDUP_TOL * DEDUP_TOL)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn straight_2d_line_has_unit_spaced_positions() {
        let coords = line_profile_coordinates(&[0.0, 2.0], &[0.0, 8.0], 1, true, 4).unwrap();
        assert_eq!(coords.dims(), 2);
        assert_eq!(coords.positions(), 7);
        assert_eq!(coords.band(), 1);
        for p in 0..7 {
            assert!(approx(coords.at(0, p, 0), 0.0));
            assert!(approx(coords.at(1, p, 0), 2.0 + p as f32));
        }
    }

    #[test]
    fn excluding_the_endpoint_drops_one_position_keeps_spacing() {
        let with = line_profile_coordinates(&[0.0, 0.0], &[0.0, 5.0], 1, true, 4).unwrap();
        let without = line_profile_coordinates(&[0.0, 0.0], &[0.0, 5.0], 1, false, 4).unwrap();
        assert_eq!(with.positions(), 6);
        assert_eq!(without.positions(), 5);
        for p in 0..without.positions() {
            assert!(approx(with.at(1, p, 0), without.at(1, p, 0)));
        }
    }

    #[test]
    fn fractional_length_rounds_up() {
        // Distance 6√2 ≈ 8.49 → 9 steps, 10 positions.
        let coords = line_profile_coordinates(&[2.0, 2.0], &[8.0, 8.0], 1, true, 4).unwrap();
        assert_eq!(coords.positions(), 10);
        assert!(approx(coords.at(0, 9, 0), 8.0));
        assert!(approx(coords.at(1, 9, 0), 8.0));
    }

    #[test]
    fn band_2d_spans_the_perpendicular() {
        // Vertical line downward: perpendicular offsets move along columns.
        let coords = line_profile_coordinates(&[0.0, 3.0], &[4.0, 3.0], 3, true, 4).unwrap();
        assert_eq!(coords.band(), 3);
        for p in 0..coords.positions() {
            assert!(approx(coords.at(0, p, 0), p as f32));
            assert!(approx(coords.at(0, p, 2), p as f32));
            // d_row = 1 → col offsets are ∓(linewidth - 1) / 2.
            assert!(approx(coords.at(1, p, 0), 4.0));
            assert!(approx(coords.at(1, p, 1), 3.0));
            assert!(approx(coords.at(1, p, 2), 2.0));
        }
    }

    #[test]
    fn band_3d_single_width_is_the_centerline() {
        let coords =
            line_profile_coordinates(&[0.0, 2.0, 2.0], &[4.0, 2.0, 2.0], 1, true, 4).unwrap();
        assert_eq!(coords.dims(), 3);
        assert_eq!(coords.band(), 1);
        for p in 0..5 {
            assert!(approx(coords.at(0, p, 0), p as f32));
            assert!(approx(coords.at(1, p, 0), 2.0));
            assert!(approx(coords.at(2, p, 0), 2.0));
        }
    }

    #[test]
    fn band_3d_odd_width_keeps_one_centerline_column() {
        // linewidth 3, 4 rotational copies: the rotated centerline columns
        // collapse onto the primary one, leaving 4·⌊3/2⌋ + 1 = 5 columns.
        let coords =
            line_profile_coordinates(&[0.0, 2.0, 2.0], &[4.0, 2.0, 2.0], 3, true, 4).unwrap();
        assert_eq!(coords.band(), 5);
        // Column 0 is the centerline.
        for p in 0..coords.positions() {
            assert!(approx(coords.at(1, p, 0), 2.0));
            assert!(approx(coords.at(2, p, 0), 2.0));
        }
        // Every other column sits at unit distance from the axis.
        for w in 1..coords.band() {
            for p in 0..coords.positions() {
                let dr = coords.at(1, p, w) - 2.0;
                let dc = coords.at(2, p, w) - 2.0;
                assert!(approx((dr * dr + dc * dc).sqrt(), 1.0));
            }
        }
    }

    #[test]
    fn band_3d_even_width_omits_the_centerline() {
        // linewidth 4: offsets ±0.5 and ±1.5 around the axis, no exact
        // centerline sample, 4·(4/2) = 8 columns.
        let coords =
            line_profile_coordinates(&[0.0, 2.0, 2.0], &[4.0, 2.0, 2.0], 4, true, 4).unwrap();
        assert_eq!(coords.band(), 8);
        for w in 0..coords.band() {
            let dr = coords.at(1, 0, w) - 2.0;
            let dc = coords.at(2, 0, w) - 2.0;
            let r = (dr * dr + dc * dc).sqrt();
            assert!(approx(r, 0.5) || approx(r, 1.5), "unexpected radius {r}");
        }
    }

    #[test]
    fn band_3d_five_wide_has_two_rings() {
        let coords =
            line_profile_coordinates(&[0.0, 2.0, 2.0], &[4.0, 2.0, 2.0], 5, true, 4).unwrap();
        assert_eq!(coords.band(), 9);
        let mut ring1 = 0;
        let mut ring2 = 0;
        for w in 0..coords.band() {
            let dr = coords.at(1, 0, w) - 2.0;
            let dc = coords.at(2, 0, w) - 2.0;
            let r = (dr * dr + dc * dc).sqrt();
            if approx(r, 1.0) {
                ring1 += 1;
            } else if approx(r, 2.0) {
                ring2 += 1;
            } else {
                assert!(approx(r, 0.0), "unexpected radius {r}");
            }
        }
        assert_eq!(ring1, 4);
        assert_eq!(ring2, 4);
    }

    #[test]
    fn coincident_endpoints_are_rejected() {
        let err = line_profile_coordinates(&[1.0, 1.0], &[1.0, 1.0], 1, true, 4).unwrap_err();
        assert_eq!(err, Error::DegenerateLine);
    }

    #[test]
    fn bad_ranks_are_rejected() {
        assert_eq!(
            line_profile_coordinates(&[0.0, 0.0], &[1.0, 1.0, 1.0], 1, true, 4).unwrap_err(),
            Error::EndpointRankMismatch { src: 2, dst: 3 }
        );
        assert_eq!(
            line_profile_coordinates(&[0.0], &[1.0], 1, true, 4).unwrap_err(),
            Error::UnsupportedPointRank(1)
        );
        assert_eq!(
            line_profile_coordinates(&[0.0, 0.0], &[1.0, 1.0], 0, true, 4).unwrap_err(),
            Error::InvalidLinewidth
        );
        assert_eq!(
            line_profile_coordinates(&[0.0, 0.0, 0.0], &[1.0, 1.0, 1.0], 3, true, 0).unwrap_err(),
            Error::InvalidSampleCount
        );
    }
}
