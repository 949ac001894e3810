//! Synthetic images and volumes shared by the integration tests.

use line_profile::Volume;

/// 10×10 ramp where pixel (r, c) stores `10r + c`.
pub fn ramp_10x10() -> Volume {
    let data = (0..100).map(|v| v as f32).collect();
    Volume::from_shape_vec(&[10, 10], data).expect("valid shape")
}

/// 5×6 banded image: a zero row, three rows of `[1, 1, 1, 2, 2, 2]`, a zero
/// row.
pub fn banded_5x6() -> Volume {
    let mut v = Volume::zeros(&[5, 6]);
    for r in 1..4 {
        for c in 0..6 {
            v.set(&[r, c], if c < 3 { 1.0 } else { 2.0 });
        }
    }
    v
}

/// 6×7 image with a bright 3-4-5 diagonal stripe (1.8) flanked by dimmer
/// pixels (0.6) above and below, dark elsewhere. A width-3 scan along the
/// stripe averages each band to exactly 1.0.
pub fn stripe_6x7() -> Volume {
    let mut v = Volume::zeros(&[6, 7]);
    let line = [(1, 1), (2, 2), (2, 3), (3, 3), (3, 4), (4, 5)];
    let below = [(2, 0), (2, 1), (3, 2), (4, 3), (4, 4), (5, 4)];
    let above = [(0, 2), (1, 2), (1, 3), (2, 4), (3, 5), (3, 6)];
    for (r, c) in line {
        v.set(&[r, c], 1.8);
    }
    for (r, c) in below.into_iter().chain(above) {
        v.set(&[r, c], 0.6);
    }
    v
}

/// 2×2 RGB image: first row (0, 0, 255), second row (255, 255, 0).
pub fn two_row_rgb() -> Volume {
    let first = [0.0, 0.0, 255.0];
    let second = [255.0, 255.0, 0.0];
    let mut data = Vec::new();
    for color in [first, first, second, second] {
        data.extend_from_slice(&color);
    }
    Volume::from_shape_vec(&[2, 2, 3], data).expect("valid shape")
}

/// 5×5×5 volume of ones with a zero voxel at (row 2, col 2) of every plane,
/// so the line through the plane centers runs along a dark column.
pub fn holed_cube() -> Volume {
    let mut v = Volume::from_shape_vec(&[5, 5, 5], vec![1.0; 125]).expect("valid shape");
    for p in 0..5 {
        v.set(&[p, 2, 2], 0.0);
    }
    v
}

/// 2×2×2×3 volume: the first slab of the third axis holds (0, 0, 255), the
/// second (255, 255, 0).
pub fn two_plane_rgb() -> Volume {
    let first = [0.0, 0.0, 255.0];
    let second = [255.0, 255.0, 0.0];
    let mut data = Vec::new();
    for _ in 0..4 {
        data.extend_from_slice(&first);
        data.extend_from_slice(&second);
    }
    Volume::from_shape_vec(&[2, 2, 2, 3], data).expect("valid shape")
}

/// 2D helper: reverse the row order.
pub fn flip_rows(v: &Volume) -> Volume {
    let (h, w) = (v.shape()[0], v.shape()[1]);
    let mut out = Volume::zeros(&[h, w]);
    for r in 0..h {
        for c in 0..w {
            out.set(&[r, c], v.get(&[h - 1 - r, c]));
        }
    }
    out
}

/// 2D helper: reverse the column order.
pub fn flip_cols(v: &Volume) -> Volume {
    let (h, w) = (v.shape()[0], v.shape()[1]);
    let mut out = Volume::zeros(&[h, w]);
    for r in 0..h {
        for c in 0..w {
            out.set(&[r, c], v.get(&[r, w - 1 - c]));
        }
    }
    out
}

/// 2D helper: swap rows and columns.
pub fn transpose(v: &Volume) -> Volume {
    let (h, w) = (v.shape()[0], v.shape()[1]);
    let mut out = Volume::zeros(&[w, h]);
    for r in 0..h {
        for c in 0..w {
            out.set(&[c, r], v.get(&[r, c]));
        }
    }
    out
}

/// Asserts element-wise closeness of a profile against expected values.
pub fn assert_values(actual: &[f32], expected: &[f32], tol: f32) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "length mismatch: {actual:?} vs {expected:?}"
    );
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            (a - e).abs() <= tol,
            "value {i}: got {a}, expected {e} (tol {tol})\nactual: {actual:?}"
        );
    }
}
