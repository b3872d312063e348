//! scrawl-transform - Fixed-size resampling
//!
//! This crate turns a cropped surface of arbitrary size into the fixed
//! square resolution the classifier expects:
//!
//! - Scaling to an exact size ([`scale_to_size`])
//! - Interpolation policies: nearest sampling, bilinear, area mapping
//! - Aspect handling before scaling: letterbox or stretch ([`resample`])

mod error;
pub mod resample;
pub mod scale;

pub use error::{TransformError, TransformResult};
pub use resample::{AspectPolicy, ResampleOptions, resample};
pub use scale::{ScaleMethod, scale_to_size};
