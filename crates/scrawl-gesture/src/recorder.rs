//! Stroke recorder
//!
//! Accumulates pointer positions into a [`Path`] between a begin and an
//! end event. Points are taken as given; no geometric validation happens
//! here.

use scrawl_core::{Path, Point};
use tracing::warn;

/// Records one path at a time
#[derive(Debug, Default)]
pub struct StrokeRecorder {
    current: Option<Path>,
}

impl StrokeRecorder {
    /// Create an idle recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new path containing `point`.
    ///
    /// A path that is still open is discarded.
    pub fn begin(&mut self, point: Point) {
        if let Some(prev) = self.current.take() {
            warn!(points = prev.len(), "discarding in-progress path");
        }
        self.current = Some(Path::starting_at(point));
    }

    /// Append `point` to the open path. Returns `false` if none is open.
    pub fn append(&mut self, point: Point) -> bool {
        match self.current.as_mut() {
            Some(path) => {
                path.push(point);
                true
            }
            None => false,
        }
    }

    /// Close the open path and return it.
    pub fn end(&mut self) -> Option<Path> {
        self.current.take()
    }

    /// Whether a path is open
    pub fn is_recording(&self) -> bool {
        self.current.is_some()
    }

    /// The open path, if any
    pub fn path(&self) -> Option<&Path> {
        self.current.as_ref()
    }
}
