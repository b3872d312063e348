//! scrawl - Gesture-to-bitmap preprocessing
//!
//! A freehand gesture is recorded as a path, rasterized onto a surface,
//! cropped to its foreground, resampled to a fixed square grid and
//! binarized into the bitmap a shape classifier consumes.
//!
//! # Overview
//!
//! - Surfaces, paths and stroke rendering ([`Surface`], [`Path`], [`StrokeStyle`])
//! - Fixed-size resampling ([`transform`])
//! - Binarization, labels and training batches ([`encode`])
//! - Recording, sessions and the pipeline ([`gesture`])
//! - PNG and PBM export ([`io`])
//!
//! # Example
//!
//! ```
//! use scrawl::SurfaceSize;
//! use scrawl::gesture::{GestureSession, PipelineConfig, PointerEvent};
//!
//! let mut session = GestureSession::new(PipelineConfig::default(), SurfaceSize::new(200, 200)).unwrap();
//! session.handle(PointerEvent::down(30.0, 30.0)).unwrap();
//! session.handle(PointerEvent::moved(170.0, 40.0)).unwrap();
//! let encoded = session.handle(PointerEvent::up(170.0, 40.0)).unwrap().unwrap();
//! assert_eq!((encoded.bitmap.rows(), encoded.bitmap.columns()), (28, 28));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use scrawl_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use scrawl_encode as encode;
pub use scrawl_gesture as gesture;
pub use scrawl_io as io;
pub use scrawl_transform as transform;
