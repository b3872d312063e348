//! Gestures and their encoded form

use scrawl_core::{Path, Rect, Surface, SurfaceSize};
use scrawl_encode::{Bitmap, Label};
use serde::{Deserialize, Serialize};

/// One recorded gesture: its path, the surface size it was drawn on and
/// an optional label.
///
/// Only the label may change after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gesture {
    path: Path,
    label: Option<Label>,
    surface: SurfaceSize,
}

impl Gesture {
    /// Create an unlabeled gesture drawn on a surface of `surface` size
    pub fn new(path: Path, surface: SurfaceSize) -> Self {
        Self {
            path,
            label: None,
            surface,
        }
    }

    /// Attach a label
    pub fn with_label(mut self, label: Label) -> Self {
        self.label = Some(label);
        self
    }

    /// Recorded points in stroke order
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Label, if one was assigned
    pub fn label(&self) -> Option<Label> {
        self.label
    }

    /// Size of the surface the gesture was drawn on
    pub fn surface_size(&self) -> SurfaceSize {
        self.surface
    }

    /// Set or clear the label
    pub fn set_label(&mut self, label: Option<Label>) {
        self.label = label;
    }
}

/// A gesture after the crop, resample and encode stages
#[derive(Debug, Clone)]
pub struct EncodedGesture {
    pub gesture: Gesture,
    /// Full-size rendering of the gesture
    pub surface: Surface,
    /// Foreground box on `surface`
    pub crop: Rect,
    /// Classifier input
    pub bitmap: Bitmap,
}
