//! Crop, resample and encode stages
//!
//! Each stage is a plain function from its input to its output, run in a
//! fixed order by [`process_surface`]:
//!
//! ```text
//! Surface --crop_stage--> (crop, Rect) --resample_stage--> Surface --encode_stage--> Bitmap
//! ```

use crate::rasterizer::rasterize;
use crate::{GestureError, GestureResult, PipelineConfig};
use scrawl_core::{Path, Rect, Surface, SurfaceSize};
use scrawl_encode::{Bitmap, binarize};
use scrawl_transform::resample;
use tracing::debug;

/// Output of a full pipeline run
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// Foreground box on the input surface
    pub crop: Rect,
    /// Encoded bitmap, `bitmap_size x bitmap_size`
    pub bitmap: Bitmap,
}

/// Cut the surface down to the bounding box of its foreground.
///
/// # Errors
///
/// Returns [`GestureError::EmptyGesture`] if no pixel has non-zero alpha.
#[tracing::instrument(level = "debug", skip(surface), fields(w = surface.width(), h = surface.height()))]
pub fn crop_stage(surface: &Surface) -> GestureResult<(Surface, Rect)> {
    match surface.crop_to_foreground() {
        Ok((crop, rect)) => {
            debug!(x = rect.x, y = rect.y, w = rect.w, h = rect.h, "cropped");
            Ok((crop, rect))
        }
        Err(scrawl_core::Error::EmptyForeground) => Err(GestureError::EmptyGesture),
        Err(e) => Err(e.into()),
    }
}

/// Resample a crop to the configured square size.
#[tracing::instrument(level = "debug", skip(crop, config), fields(w = crop.width(), h = crop.height()))]
pub fn resample_stage(crop: &Surface, config: &PipelineConfig) -> GestureResult<Surface> {
    Ok(resample(crop, &config.resample_options())?)
}

/// Binarize a resampled surface, checking it has the configured shape.
///
/// # Errors
///
/// Returns [`GestureError::ShapeMismatch`] if the surface is not
/// `bitmap_size x bitmap_size`.
#[tracing::instrument(level = "debug", skip(resampled, config))]
pub fn encode_stage(resampled: &Surface, config: &PipelineConfig) -> GestureResult<Bitmap> {
    let bitmap = binarize(resampled);
    check_shape(&bitmap, config)?;
    debug!(ones = bitmap.count_ones(), "encoded");
    Ok(bitmap)
}

/// Fail unless `bitmap` is exactly `bitmap_size x bitmap_size`.
pub fn check_shape(bitmap: &Bitmap, config: &PipelineConfig) -> GestureResult<()> {
    if bitmap.rows() != config.rows() || bitmap.columns() != config.columns() {
        return Err(GestureError::ShapeMismatch {
            expected: (config.rows(), config.columns()),
            actual: (bitmap.rows(), bitmap.columns()),
        });
    }
    Ok(())
}

/// Run crop, resample and encode on a finished surface.
pub fn process_surface(surface: &Surface, config: &PipelineConfig) -> GestureResult<PipelineOutput> {
    let (cropped, crop) = crop_stage(surface)?;
    let resampled = resample_stage(&cropped, config)?;
    let bitmap = encode_stage(&resampled, config)?;
    Ok(PipelineOutput { crop, bitmap })
}

/// Rasterize a stored path and encode it, exactly as a live capture would.
pub fn encode_path(
    size: SurfaceSize,
    path: &Path,
    config: &PipelineConfig,
) -> GestureResult<Bitmap> {
    let surface = rasterize(size, path, &config.stroke)?;
    Ok(process_surface(&surface, config)?.bitmap)
}
