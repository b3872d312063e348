//! Pipeline configuration
//!
//! One [`PipelineConfig`] is shared by capture and prediction so that a
//! gesture is always rasterized and encoded the same way. Every field has
//! a default, so a JSON document only needs the fields it changes:
//!
//! ```
//! use scrawl_gesture::PipelineConfig;
//!
//! let config = PipelineConfig::from_json_str(r#"{"bitmap_size": 100}"#).unwrap();
//! assert_eq!(config.bitmap_size, 100);
//! assert_eq!(config.stroke.width, 5);
//! ```

use crate::{GestureError, GestureResult};
use scrawl_core::StrokeStyle;
use scrawl_encode::Label;
use scrawl_transform::{AspectPolicy, ResampleOptions, ScaleMethod};
use serde::{Deserialize, Serialize};

/// Bitmap side length used by [`PipelineConfig::mnist`]
pub const MNIST_SIZE: u32 = 28;

/// Bitmap side length used by [`PipelineConfig::high_res`]
pub const HIGH_RES_SIZE: u32 = 100;

/// Width of the classifier head
pub const DEFAULT_NUM_CLASSES: usize = 10;

/// Settings for rasterizing and encoding gestures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Stroke used by the rasterizer
    pub stroke: StrokeStyle,
    /// Side length of the square output bitmap
    pub bitmap_size: u32,
    /// Interpolation used by the resampler
    pub resample: ScaleMethod,
    /// How non-square crops are fitted
    pub aspect: AspectPolicy,
    /// Length of one-hot label vectors
    pub num_classes: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            stroke: StrokeStyle::default(),
            bitmap_size: MNIST_SIZE,
            resample: ScaleMethod::AreaMap,
            aspect: AspectPolicy::Letterbox,
            num_classes: DEFAULT_NUM_CLASSES,
        }
    }
}

impl PipelineConfig {
    /// 28x28 bitmaps
    pub fn mnist() -> Self {
        Self::default()
    }

    /// 100x100 bitmaps
    pub fn high_res() -> Self {
        Self::default().bitmap_size(HIGH_RES_SIZE)
    }

    /// Parse a JSON document and validate it
    pub fn from_json_str(json: &str) -> GestureResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the stroke style
    pub fn stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = stroke;
        self
    }

    /// Set the bitmap side length
    pub fn bitmap_size(mut self, size: u32) -> Self {
        self.bitmap_size = size;
        self
    }

    /// Set the resampling method
    pub fn resample(mut self, method: ScaleMethod) -> Self {
        self.resample = method;
        self
    }

    /// Set the aspect policy
    pub fn aspect(mut self, aspect: AspectPolicy) -> Self {
        self.aspect = aspect;
        self
    }

    /// Set the one-hot width
    pub fn num_classes(mut self, num_classes: usize) -> Self {
        self.num_classes = num_classes;
        self
    }

    /// Check the configuration for values the pipeline cannot use
    ///
    /// # Errors
    ///
    /// Returns [`GestureError::InvalidConfig`] for a stroke width outside
    /// `1..=StrokeStyle::MAX_WIDTH`, a zero bitmap size or fewer classes
    /// than labels.
    pub fn validate(&self) -> GestureResult<()> {
        if self.stroke.width == 0 {
            return Err(GestureError::InvalidConfig(
                "stroke width must be at least 1".to_string(),
            ));
        }
        if self.stroke.width > StrokeStyle::MAX_WIDTH {
            return Err(GestureError::InvalidConfig(format!(
                "stroke width {} exceeds the maximum of {}",
                self.stroke.width,
                StrokeStyle::MAX_WIDTH
            )));
        }
        if self.bitmap_size == 0 {
            return Err(GestureError::InvalidConfig(
                "bitmap size must be at least 1".to_string(),
            ));
        }
        if self.num_classes < Label::COUNT {
            return Err(GestureError::InvalidConfig(format!(
                "num_classes {} is smaller than the label count {}",
                self.num_classes,
                Label::COUNT
            )));
        }
        Ok(())
    }

    /// Bitmap rows
    #[inline]
    pub fn rows(&self) -> u32 {
        self.bitmap_size
    }

    /// Bitmap columns
    #[inline]
    pub fn columns(&self) -> u32 {
        self.bitmap_size
    }

    /// Options for the resampling stage
    pub fn resample_options(&self) -> ResampleOptions {
        ResampleOptions::square(self.bitmap_size)
            .method(self.resample)
            .aspect(self.aspect)
    }
}
