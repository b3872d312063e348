//! Classifier boundary
//!
//! The network itself lives outside this crate. It sees encoded bitmaps and
//! training batches through [`Classifier`], and reports raw per-class
//! scores that [`Prediction::from_scores`] maps back to a [`Label`].

use crate::{GestureError, GestureResult};
use scrawl_encode::{Bitmap, Label, TrainingBatch};

/// Synchronous classifier over encoded bitmaps
pub trait Classifier {
    /// Model failure
    type Error;

    /// Score one bitmap
    fn predict(&self, bitmap: &Bitmap) -> Result<Prediction, Self::Error>;

    /// Fit on a batch of labeled bitmaps
    fn train(&mut self, batch: &TrainingBatch) -> Result<(), Self::Error>;
}

/// Most likely label and the scores it was picked from
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub label: Label,
    /// Score of `label`
    pub confidence: f32,
    /// Raw score per class, indexed by label id
    pub scores: Vec<f32>,
}

impl Prediction {
    /// Pick the highest-scoring known label.
    ///
    /// Classes beyond the known labels are ignored. Ties go to the lower id.
    ///
    /// # Errors
    ///
    /// Returns [`GestureError::InvalidScores`] if there are fewer scores
    /// than labels or a known label's score is NaN.
    pub fn from_scores(scores: Vec<f32>) -> GestureResult<Self> {
        if scores.len() < Label::COUNT {
            return Err(GestureError::InvalidScores(format!(
                "expected at least {} scores, got {}",
                Label::COUNT,
                scores.len()
            )));
        }
        let known = &scores[..Label::COUNT];
        if known.iter().any(|s| s.is_nan()) {
            return Err(GestureError::InvalidScores("NaN score".to_string()));
        }
        let mut best = 0;
        for (i, &s) in known.iter().enumerate().skip(1) {
            if s > known[best] {
                best = i;
            }
        }
        Ok(Self {
            label: Label::ALL[best],
            confidence: known[best],
            scores,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argmax() {
        let p = Prediction::from_scores(vec![0.1, 0.05, 0.6, 0.1, 0.1, 0.05, 0.0, 0.0, 0.0, 0.0]).unwrap();
        assert_eq!(p.label, Label::Triangle);
        assert_eq!(p.confidence, 0.6);
        assert_eq!(p.scores.len(), 10);
    }

    #[test]
    fn test_unknown_classes_ignored() {
        let p = Prediction::from_scores(vec![0.0, 0.0, 0.0, 0.0, 0.1, 0.0, 0.9]).unwrap();
        assert_eq!(p.label, Label::Zigzag);
    }

    #[test]
    fn test_ties_and_errors() {
        let p = Prediction::from_scores(vec![0.5; 6]).unwrap();
        assert_eq!(p.label, Label::Square);
        assert!(matches!(
            Prediction::from_scores(vec![1.0; 3]),
            Err(GestureError::InvalidScores(_))
        ));
        assert!(Prediction::from_scores(vec![0.0, f32::NAN, 0.0, 0.0, 0.0, 0.0]).is_err());
    }
}
