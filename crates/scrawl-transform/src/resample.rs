//! Fixed-size resampling
//!
//! Maps a cropped surface of any size onto the `rows x columns` grid the
//! classifier consumes. The aspect policy decides whether the crop keeps
//! its proportions (letterbox) or is stretched to fill the grid.

use crate::scale::{ScaleMethod, scale_to_size};
use crate::{TransformError, TransformResult};
use scrawl_core::Surface;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How a non-square crop is fitted into the target grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AspectPolicy {
    /// Pad the crop to a centered square with transparent pixels, then scale
    #[default]
    Letterbox,
    /// Scale each axis independently to the target size
    Stretch,
}

/// Options for [`resample`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResampleOptions {
    /// Output height
    pub rows: u32,
    /// Output width
    pub columns: u32,
    /// Interpolation method
    pub method: ScaleMethod,
    /// Aspect handling
    pub aspect: AspectPolicy,
}

impl Default for ResampleOptions {
    fn default() -> Self {
        Self {
            rows: 28,
            columns: 28,
            method: ScaleMethod::AreaMap,
            aspect: AspectPolicy::Letterbox,
        }
    }
}

impl ResampleOptions {
    /// Create options for a square `size x size` grid
    pub fn square(size: u32) -> Self {
        Self {
            rows: size,
            columns: size,
            ..Default::default()
        }
    }

    /// Create options with a specific method
    pub fn with_method(method: ScaleMethod) -> Self {
        Self {
            method,
            ..Default::default()
        }
    }

    /// Set the output grid size
    pub fn size(mut self, rows: u32, columns: u32) -> Self {
        self.rows = rows;
        self.columns = columns;
        self
    }

    /// Set the interpolation method
    pub fn method(mut self, method: ScaleMethod) -> Self {
        self.method = method;
        self
    }

    /// Set the aspect policy
    pub fn aspect(mut self, aspect: AspectPolicy) -> Self {
        self.aspect = aspect;
        self
    }

    /// Check that the target grid is non-empty.
    pub fn validate(&self) -> TransformResult<()> {
        if self.rows == 0 || self.columns == 0 {
            return Err(TransformError::InvalidParameters(format!(
                "target grid must be non-empty, got {}x{}",
                self.rows, self.columns
            )));
        }
        Ok(())
    }
}

/// Resample a surface to exactly `options.rows x options.columns`.
///
/// Any source size is accepted, including 1x1. The result is deterministic
/// for a given input and options.
///
/// # Errors
///
/// Returns [`TransformError::InvalidParameters`] if the target grid is empty.
#[tracing::instrument(level = "debug", skip(surface), fields(src_w = surface.width(), src_h = surface.height()))]
pub fn resample(surface: &Surface, options: &ResampleOptions) -> TransformResult<Surface> {
    options.validate()?;

    let fitted = match options.aspect {
        AspectPolicy::Letterbox => surface.pad_to_square()?,
        AspectPolicy::Stretch => surface.clone(),
    };
    if fitted.width() != surface.width() || fitted.height() != surface.height() {
        debug!(side = fitted.width(), "letterboxed crop");
    }

    scale_to_size(&fitted, options.columns, options.rows, options.method)
}
