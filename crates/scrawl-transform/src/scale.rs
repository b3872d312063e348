//! Surface scaling operations
//!
//! Provides three deterministic scaling algorithms:
//! - Sampling (nearest neighbor on pixel centers)
//! - Linear (bilinear interpolation of each RGBA channel)
//! - Area mapping (exact box-filter average over each destination
//!   pixel's source footprint)
//!
//! Horizontal and vertical factors are independent. Any non-zero source
//! size is accepted, including 1x1.

use crate::{TransformError, TransformResult};
use scrawl_core::color::{self, compose_rgba};
use scrawl_core::{Surface, SurfaceMut};
use serde::{Deserialize, Serialize};

/// Scaling method to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleMethod {
    /// Nearest-neighbor sampling of pixel centers
    Sampling,
    /// Bilinear interpolation
    Linear,
    /// Box-filter average of the exact source footprint.
    ///
    /// Alpha is rounded up, so a destination pixel whose footprint touches
    /// any covered source pixel keeps non-zero coverage.
    #[default]
    AreaMap,
}

/// Scale a surface to an exact size
///
/// # Errors
///
/// Returns [`TransformError::InvalidParameters`] if `width` or `height` is 0.
pub fn scale_to_size(
    surface: &Surface,
    width: u32,
    height: u32,
    method: ScaleMethod,
) -> TransformResult<Surface> {
    if width == 0 || height == 0 {
        return Err(TransformError::InvalidParameters(format!(
            "target size must be non-zero, got {}x{}",
            width, height
        )));
    }
    if width == surface.width() && height == surface.height() {
        return Ok(surface.deep_clone());
    }

    let mut out = SurfaceMut::new(width, height)?;
    match method {
        ScaleMethod::Sampling => sample_into(surface, &mut out),
        ScaleMethod::Linear => linear_into(surface, &mut out),
        ScaleMethod::AreaMap => area_map_into(surface, &mut out),
    }
    Ok(out.into())
}

/// Source index whose pixel center is nearest to destination pixel `d`.
#[inline]
fn nearest_source(d: u32, src_len: u32, dst_len: u32) -> u32 {
    let s = ((2 * d as u64 + 1) * src_len as u64) / (2 * dst_len as u64);
    (s as u32).min(src_len - 1)
}

fn sample_into(src: &Surface, out: &mut SurfaceMut) {
    let (sw, sh) = (src.width(), src.height());
    let (dw, dh) = (out.width(), out.height());
    let xmap: Vec<u32> = (0..dw).map(|x| nearest_source(x, sw, dw)).collect();

    for y in 0..dh {
        let src_row = src.row_data(nearest_source(y, sh, dh));
        let dst_row = out.row_data_mut(y);
        for (dst, &sx) in dst_row.iter_mut().zip(&xmap) {
            *dst = src_row[sx as usize];
        }
    }
}

/// Bilinear source position for destination pixel `d`: lower index, upper
/// index and fractional weight of the upper one.
#[inline]
fn linear_source(d: u32, src_len: u32, dst_len: u32) -> (u32, u32, f32) {
    let pos = (d as f32 + 0.5) * src_len as f32 / dst_len as f32 - 0.5;
    let pos = pos.clamp(0.0, (src_len - 1) as f32);
    let lo = pos.floor() as u32;
    let hi = (lo + 1).min(src_len - 1);
    (lo, hi, pos - lo as f32)
}

fn linear_into(src: &Surface, out: &mut SurfaceMut) {
    let (sw, sh) = (src.width(), src.height());
    let (dw, dh) = (out.width(), out.height());
    let xmap: Vec<(u32, u32, f32)> = (0..dw).map(|x| linear_source(x, sw, dw)).collect();

    for y in 0..dh {
        let (y0, y1, fy) = linear_source(y, sh, dh);
        let (row0, row1) = (src.row_data(y0), src.row_data(y1));
        let dst_row = out.row_data_mut(y);
        for (dst, &(x0, x1, fx)) in dst_row.iter_mut().zip(&xmap) {
            let p00 = color::extract_rgba(row0[x0 as usize]);
            let p10 = color::extract_rgba(row0[x1 as usize]);
            let p01 = color::extract_rgba(row1[x0 as usize]);
            let p11 = color::extract_rgba(row1[x1 as usize]);
            let lerp = |a: u8, b: u8, c: u8, d: u8| -> u8 {
                let top = a as f32 * (1.0 - fx) + b as f32 * fx;
                let bot = c as f32 * (1.0 - fx) + d as f32 * fx;
                (top * (1.0 - fy) + bot * fy).round().clamp(0.0, 255.0) as u8
            };
            *dst = compose_rgba(
                lerp(p00.0, p10.0, p01.0, p11.0),
                lerp(p00.1, p10.1, p01.1, p11.1),
                lerp(p00.2, p10.2, p01.2, p11.2),
                lerp(p00.3, p10.3, p01.3, p11.3),
            );
        }
    }
}

/// Source pixels overlapping destination pixel `d`, with integer overlap
/// weights.
///
/// Destination pixel `d` spans `[d * src_len, (d + 1) * src_len)` and
/// source pixel `i` spans `[i * dst_len, (i + 1) * dst_len)`, both in units
/// of `1 / dst_len` source pixels, so the weights are exact and sum to
/// `src_len`.
fn area_footprint(d: u32, src_len: u32, dst_len: u32) -> Vec<(u32, u64)> {
    let (sl, dl) = (src_len as u64, dst_len as u64);
    let start = d as u64 * sl;
    let end = start + sl;
    let first = start / dl;
    let last = (end - 1) / dl;
    (first..=last)
        .map(|i| {
            let lo = start.max(i * dl);
            let hi = end.min((i + 1) * dl);
            (i as u32, hi - lo)
        })
        .filter(|&(_, w)| w > 0)
        .collect()
}

fn area_map_into(src: &Surface, out: &mut SurfaceMut) {
    let (sw, sh) = (src.width(), src.height());
    let (dw, dh) = (out.width(), out.height());
    let xfoot: Vec<Vec<(u32, u64)>> = (0..dw).map(|x| area_footprint(x, sw, dw)).collect();
    let total = sw as u64 * sh as u64;

    for y in 0..dh {
        let yfoot = area_footprint(y, sh, dh);
        let dst_row = out.row_data_mut(y);
        for (dst, xs) in dst_row.iter_mut().zip(&xfoot) {
            let mut sums = [0u64; 4];
            for &(sy, wy) in &yfoot {
                let row = src.row_data(sy);
                for &(sx, wx) in xs {
                    let (r, g, b, a) = color::extract_rgba(row[sx as usize]);
                    let w = wx * wy;
                    sums[0] += r as u64 * w;
                    sums[1] += g as u64 * w;
                    sums[2] += b as u64 * w;
                    sums[3] += a as u64 * w;
                }
            }
            let round = |s: u64| ((s + total / 2) / total).min(255) as u8;
            let ceil = |s: u64| s.div_ceil(total).min(255) as u8;
            *dst = compose_rgba(round(sums[0]), round(sums[1]), round(sums[2]), ceil(sums[3]));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INK: u32 = 0x0000_00FF;

    fn single_pixel(w: u32, h: u32, x: u32, y: u32) -> Surface {
        let mut m = SurfaceMut::new(w, h).unwrap();
        m.set_pixel(x, y, INK).unwrap();
        m.into()
    }

    #[test]
    fn test_nearest_source() {
        // 4 -> 2: centers 1 and 3
        assert_eq!(nearest_source(0, 4, 2), 1);
        assert_eq!(nearest_source(1, 4, 2), 3);
        // 1 -> anything stays at 0
        assert!((0..28).all(|d| nearest_source(d, 1, 28) == 0));
        // 2 -> 4 duplicates
        let v: Vec<u32> = (0..4).map(|d| nearest_source(d, 2, 4)).collect();
        assert_eq!(v, vec![0, 0, 1, 1]);
    }

    #[test]
    fn test_area_footprint_weights_sum() {
        for (sl, dl) in [(200u32, 28u32), (5, 28), (1, 28), (41, 41), (3, 2)] {
            for d in 0..dl {
                let total: u64 = area_footprint(d, sl, dl).iter().map(|&(_, w)| w).sum();
                assert_eq!(total, sl as u64, "src {} dst {} d {}", sl, dl, d);
            }
        }
    }

    #[test]
    fn test_exact_output_size_all_methods() {
        let s = single_pixel(37, 11, 3, 4);
        for method in [ScaleMethod::Sampling, ScaleMethod::Linear, ScaleMethod::AreaMap] {
            let out = scale_to_size(&s, 28, 28, method).unwrap();
            assert_eq!((out.width(), out.height()), (28, 28), "{:?}", method);
        }
    }

    #[test]
    fn test_one_by_one_upscale() {
        let s = single_pixel(1, 1, 0, 0);
        for method in [ScaleMethod::Sampling, ScaleMethod::Linear, ScaleMethod::AreaMap] {
            let out = scale_to_size(&s, 28, 28, method).unwrap();
            assert_eq!(out.count_foreground(), 28 * 28, "{:?}", method);
        }
    }

    #[test]
    fn test_area_map_keeps_thin_coverage() {
        // one ink pixel in 200x200 -> its 28x28 cell stays covered
        let s = single_pixel(200, 200, 101, 57);
        let out = scale_to_size(&s, 28, 28, ScaleMethod::AreaMap).unwrap();
        // x: [14.14, 14.28) lies in one cell, y: [7.98, 8.12) straddles two
        assert_eq!(out.count_foreground(), 2);
        assert!(out.is_foreground(14, 7));
        assert!(out.is_foreground(14, 8));
    }

    #[test]
    fn test_sampling_can_drop_thin_coverage() {
        let s = single_pixel(200, 200, 101, 57);
        let out = scale_to_size(&s, 28, 28, ScaleMethod::Sampling).unwrap();
        assert_eq!(out.count_foreground(), 0);
    }

    #[test]
    fn test_identity_size_copies() {
        let s = single_pixel(9, 9, 4, 4);
        let out = scale_to_size(&s, 9, 9, ScaleMethod::Linear).unwrap();
        assert_eq!(out.data(), s.data());
        assert_eq!(s.ref_count(), 1);
    }

    #[test]
    fn test_zero_target_rejected() {
        let s = Surface::new(10, 20).unwrap();
        assert!(matches!(
            scale_to_size(&s, 0, 5, ScaleMethod::AreaMap),
            Err(TransformError::InvalidParameters(_))
        ));
        assert!(scale_to_size(&s, 5, 0, ScaleMethod::Sampling).is_err());
    }

    #[test]
    fn test_linear_blends_alpha() {
        let mut m = SurfaceMut::new(2, 1).unwrap();
        m.set_pixel(1, 0, INK).unwrap();
        let s: Surface = m.into();
        let out = scale_to_size(&s, 4, 1, ScaleMethod::Linear).unwrap();
        let alphas: Vec<u8> = (0..4).map(|x| out.get_alpha(x, 0).unwrap()).collect();
        // positions -0.25, 0.25, 0.75, 1.25 clamped to [0, 1]
        assert_eq!(alphas, vec![0, 64, 191, 255]);
    }
}
