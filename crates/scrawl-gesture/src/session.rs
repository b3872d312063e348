//! Gesture session
//!
//! Drives the recorder and the rasterizer from pointer events and runs the
//! pipeline on each finished gesture.
//!
//! # States
//!
//! ```text
//! Idle --down--> Drawing --move--> Drawing --up--> Finalized --process--> Idle
//! ```
//!
//! At most one finalized gesture waits for processing. A pointer-down while
//! one is pending fails with [`GestureError::PipelineBusy`].

use crate::gesture::{EncodedGesture, Gesture};
use crate::pipeline::process_surface;
use crate::rasterizer::Rasterizer;
use crate::recorder::StrokeRecorder;
use crate::{GestureError, GestureResult, PipelineConfig};
use scrawl_core::{Point, Surface, SurfaceMut, SurfaceSize};
use scrawl_encode::Label;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Kind of pointer event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerKind {
    Down,
    Move,
    Up,
}

/// Pointer event in surface coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub x: f32,
    pub y: f32,
}

impl PointerEvent {
    /// Pointer pressed at `(x, y)`
    pub fn down(x: f32, y: f32) -> Self {
        Self {
            kind: PointerKind::Down,
            x,
            y,
        }
    }

    /// Pointer moved to `(x, y)`
    pub fn moved(x: f32, y: f32) -> Self {
        Self {
            kind: PointerKind::Move,
            x,
            y,
        }
    }

    /// Pointer released at `(x, y)`
    pub fn up(x: f32, y: f32) -> Self {
        Self {
            kind: PointerKind::Up,
            x,
            y,
        }
    }

    /// Event position
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Session state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    /// No gesture in progress
    Idle,
    /// Pointer is down, points are being recorded
    Drawing,
    /// A finished gesture waits for [`GestureSession::process`]
    Finalized,
}

#[derive(Debug)]
struct Pending {
    gesture: Gesture,
    surface: Surface,
}

/// Captures gestures and turns them into bitmaps
#[derive(Debug)]
pub struct GestureSession {
    config: PipelineConfig,
    size: SurfaceSize,
    recorder: StrokeRecorder,
    rasterizer: Rasterizer,
    pending: Option<Pending>,
    gestures: Vec<Gesture>,
}

impl GestureSession {
    /// Create a session drawing on a surface of `size`
    ///
    /// # Errors
    ///
    /// Returns [`GestureError::InvalidConfig`] for an unusable configuration
    /// and [`GestureError::InvalidSurfaceDimensions`] for a zero size.
    pub fn new(config: PipelineConfig, size: SurfaceSize) -> GestureResult<Self> {
        config.validate()?;
        validate_size(size)?;
        Ok(Self {
            config,
            size,
            recorder: StrokeRecorder::new(),
            rasterizer: Rasterizer::new(config.stroke),
            pending: None,
            gestures: Vec::new(),
        })
    }

    /// Configuration shared by every gesture of the session
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Surface size used by the next gesture
    pub fn surface_size(&self) -> SurfaceSize {
        self.size
    }

    /// Change the surface size used by the next gesture
    pub fn set_surface_size(&mut self, size: SurfaceSize) -> GestureResult<()> {
        self.size = validate_size(size)?;
        Ok(())
    }

    /// Current state, derived from the recorder and the pending gesture
    pub fn state(&self) -> SessionState {
        if self.pending.is_some() {
            SessionState::Finalized
        } else if self.recorder.is_recording() {
            SessionState::Drawing
        } else {
            SessionState::Idle
        }
    }

    /// Surface of the gesture being drawn, for live display
    pub fn drawing_surface(&self) -> Option<&SurfaceMut> {
        self.rasterizer.surface()
    }

    /// Start a gesture at `point` on a cleared surface.
    ///
    /// # Errors
    ///
    /// Returns [`GestureError::PipelineBusy`] while a finalized gesture is
    /// pending.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn pointer_down(&mut self, point: Point) -> GestureResult<()> {
        if self.pending.is_some() {
            return Err(GestureError::PipelineBusy);
        }
        self.rasterizer.begin(self.size, point)?;
        self.recorder.begin(point);
        debug!(state = ?self.state(), "gesture started");
        Ok(())
    }

    /// Record and paint `point`. Ignored unless drawing.
    pub fn pointer_move(&mut self, point: Point) -> bool {
        if !self.recorder.append(point) {
            return false;
        }
        self.rasterizer.extend(point);
        true
    }

    /// Finish the gesture being drawn. Returns `false` if none was.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn pointer_up(&mut self) -> bool {
        let Some(path) = self.recorder.end() else {
            return false;
        };
        let Some(surface) = self.rasterizer.finish() else {
            return false;
        };
        debug!(points = path.len(), "gesture finalized");
        self.pending = Some(Pending {
            gesture: Gesture::new(path, self.size),
            surface,
        });
        true
    }

    /// Run the pipeline on the pending gesture.
    ///
    /// Returns `Ok(None)` if nothing is pending. The session is idle again
    /// afterwards, whether or not encoding succeeded.
    ///
    /// # Errors
    ///
    /// Returns [`GestureError::EmptyGesture`] if the gesture left no
    /// foreground.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn process(&mut self) -> GestureResult<Option<EncodedGesture>> {
        let Some(Pending { gesture, surface }) = self.pending.take() else {
            return Ok(None);
        };
        let out = match process_surface(&surface, &self.config) {
            Ok(out) => out,
            Err(e) => {
                debug!(error = %e, "gesture dropped");
                return Err(e);
            }
        };
        self.gestures.push(gesture.clone());
        Ok(Some(EncodedGesture {
            gesture,
            surface,
            crop: out.crop,
            bitmap: out.bitmap,
        }))
    }

    /// Feed one pointer event. An up event is processed immediately and its
    /// encoded gesture returned.
    pub fn handle(&mut self, event: PointerEvent) -> GestureResult<Option<EncodedGesture>> {
        match event.kind {
            PointerKind::Down => {
                self.pointer_down(event.point())?;
                Ok(None)
            }
            PointerKind::Move => {
                self.pointer_move(event.point());
                Ok(None)
            }
            PointerKind::Up => {
                if self.pointer_up() {
                    self.process()
                } else {
                    Ok(None)
                }
            }
        }
    }

    /// Drop the gesture being drawn and any pending one.
    pub fn cancel(&mut self) {
        if let Some(path) = self.recorder.end() {
            warn!(points = path.len(), "cancelled in-progress gesture");
        }
        self.rasterizer.reset();
        self.pending = None;
    }

    /// Every successfully encoded gesture, oldest first
    pub fn gestures(&self) -> &[Gesture] {
        &self.gestures
    }

    /// Set or clear the label of gesture `index`
    pub fn label_gesture(&mut self, index: usize, label: Option<Label>) -> GestureResult<()> {
        let len = self.gestures.len();
        let gesture = self
            .gestures
            .get_mut(index)
            .ok_or(scrawl_core::Error::IndexOutOfBounds { index, len })?;
        gesture.set_label(label);
        Ok(())
    }

    /// Remove and return every collected gesture
    pub fn take_gestures(&mut self) -> Vec<Gesture> {
        std::mem::take(&mut self.gestures)
    }
}

fn validate_size(size: SurfaceSize) -> GestureResult<SurfaceSize> {
    size.validate()
        .map_err(|_| GestureError::InvalidSurfaceDimensions {
            width: size.width,
            height: size.height,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> GestureSession {
        GestureSession::new(PipelineConfig::default(), SurfaceSize::new(100, 100)).unwrap()
    }

    #[test]
    fn test_state_transitions() {
        let mut s = session();
        assert_eq!(s.state(), SessionState::Idle);
        s.pointer_down(Point::new(10.0, 10.0)).unwrap();
        assert_eq!(s.state(), SessionState::Drawing);
        assert!(s.pointer_move(Point::new(60.0, 10.0)));
        assert_eq!(s.state(), SessionState::Drawing);
        assert!(s.pointer_up());
        assert_eq!(s.state(), SessionState::Finalized);
        let encoded = s.process().unwrap().unwrap();
        assert_eq!(s.state(), SessionState::Idle);
        assert_eq!(encoded.gesture.path().len(), 2);
        assert_eq!(encoded.bitmap.rows(), 28);
        assert_eq!(s.gestures().len(), 1);
    }

    #[test]
    fn test_busy_while_pending() {
        let mut s = session();
        s.pointer_down(Point::new(10.0, 10.0)).unwrap();
        s.pointer_move(Point::new(20.0, 20.0));
        s.pointer_up();
        assert!(matches!(
            s.pointer_down(Point::new(0.0, 0.0)),
            Err(GestureError::PipelineBusy)
        ));
        s.process().unwrap();
        assert!(s.pointer_down(Point::new(0.0, 0.0)).is_ok());
    }

    #[test]
    fn test_move_and_up_ignored_when_idle() {
        let mut s = session();
        assert!(!s.pointer_move(Point::new(1.0, 1.0)));
        assert!(!s.pointer_up());
        assert!(s.process().unwrap().is_none());
        assert!(s.handle(PointerEvent::up(1.0, 1.0)).unwrap().is_none());
    }

    #[test]
    fn test_empty_gesture_returns_to_idle() {
        let mut s = session();
        s.pointer_down(Point::new(10.0, 10.0)).unwrap();
        s.pointer_up();
        assert!(matches!(s.process(), Err(GestureError::EmptyGesture)));
        assert_eq!(s.state(), SessionState::Idle);
        assert!(s.gestures().is_empty());
    }

    #[test]
    fn test_cancel() {
        let mut s = session();
        s.pointer_down(Point::new(10.0, 10.0)).unwrap();
        s.cancel();
        assert_eq!(s.state(), SessionState::Idle);
        assert!(s.drawing_surface().is_none());
    }

    #[test]
    fn test_label_gesture() {
        let mut s = session();
        for e in [
            PointerEvent::down(10.0, 10.0),
            PointerEvent::moved(50.0, 50.0),
            PointerEvent::up(50.0, 50.0),
        ] {
            s.handle(e).unwrap();
        }
        s.label_gesture(0, Some(Label::Star)).unwrap();
        assert_eq!(s.gestures()[0].label(), Some(Label::Star));
        assert!(matches!(
            s.label_gesture(3, None),
            Err(GestureError::Core(scrawl_core::Error::IndexOutOfBounds { index: 3, len: 1 }))
        ));
        assert_eq!(s.take_gestures().len(), 1);
        assert!(s.gestures().is_empty());
    }

    #[test]
    fn test_invalid_construction() {
        assert!(matches!(
            GestureSession::new(PipelineConfig::default(), SurfaceSize::new(0, 5)),
            Err(GestureError::InvalidSurfaceDimensions { .. })
        ));
        assert!(GestureSession::new(PipelineConfig::default().bitmap_size(0), SurfaceSize::new(5, 5)).is_err());
        let mut s = session();
        assert!(s.set_surface_size(SurfaceSize::new(5, 0)).is_err());
        assert_eq!(s.surface_size(), SurfaceSize::new(100, 100));
    }

    #[test]
    fn test_pointer_event_serde() {
        let e: PointerEvent = serde_json::from_str(r#"{"kind":"move","x":1.5,"y":2.0}"#).unwrap();
        assert_eq!(e, PointerEvent::moved(1.5, 2.0));
    }
}
