//! scrawl-gesture - Gesture capture and encoding
//!
//! This crate connects pointer input to the classifier:
//!
//! - **Recording**: [`StrokeRecorder`] collects points between down and up
//! - **Rasterizing**: [`Rasterizer`] paints each new segment as it arrives
//! - **Pipeline**: crop, resample and encode stages ([`process_surface`])
//! - **Session**: [`GestureSession`] state machine over [`PointerEvent`]s
//! - **Training data**: [`LabeledSample`] records and [`SampleStore`]
//! - **Classification**: the [`Classifier`] trait and [`Prediction`]
//!
//! # Quick Start
//!
//! ```
//! use scrawl_core::SurfaceSize;
//! use scrawl_gesture::{GestureSession, PipelineConfig, PointerEvent};
//!
//! let mut session = GestureSession::new(PipelineConfig::mnist(), SurfaceSize::new(200, 200)).unwrap();
//! session.handle(PointerEvent::down(20.0, 20.0)).unwrap();
//! session.handle(PointerEvent::moved(180.0, 180.0)).unwrap();
//! let encoded = session.handle(PointerEvent::up(180.0, 180.0)).unwrap().unwrap();
//! assert_eq!(encoded.bitmap.rows(), 28);
//! ```

pub mod classifier;
pub mod config;
mod error;
pub mod gesture;
pub mod pipeline;
pub mod rasterizer;
pub mod record;
pub mod recorder;
pub mod session;

pub use classifier::{Classifier, Prediction};
pub use config::PipelineConfig;
pub use error::{GestureError, GestureResult};
pub use gesture::{EncodedGesture, Gesture};
pub use pipeline::{
    PipelineOutput, crop_stage, encode_path, encode_stage, process_surface, resample_stage,
};
pub use rasterizer::{Rasterizer, rasterize};
pub use record::{
    LabeledSample, MemorySampleStore, SampleRecord, SampleStore, load_samples, save_sample,
    training_set,
};
pub use recorder::StrokeRecorder;
pub use session::{GestureSession, PointerEvent, PointerKind, SessionState};

// Re-export lower crates for convenience
pub use scrawl_core;
pub use scrawl_encode;
pub use scrawl_transform;
