//! Shape labels
//!
//! The closed set of gesture categories a sample can be tagged with. The
//! numeric id is the class index of the classifier head and the value
//! persisted with each sample.

use crate::{EncodeError, EncodeResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Gesture shape category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum Label {
    Square = 0,
    Circle = 1,
    Triangle = 2,
    Star = 3,
    Zigzag = 4,
    Heart = 5,
}

impl Label {
    /// Number of labels
    pub const COUNT: usize = 6;

    /// All labels in id order
    pub const ALL: [Label; Label::COUNT] = [
        Label::Square,
        Label::Circle,
        Label::Triangle,
        Label::Star,
        Label::Zigzag,
        Label::Heart,
    ];

    /// Class index of this label
    #[inline]
    pub fn id(self) -> u32 {
        self as u32
    }

    /// Look up a label by class index
    pub fn from_id(id: u32) -> EncodeResult<Self> {
        Self::ALL
            .get(id as usize)
            .copied()
            .ok_or_else(|| EncodeError::UnknownLabel(format!("id {}", id)))
    }

    /// Lowercase name of the label
    pub fn name(self) -> &'static str {
        match self {
            Label::Square => "square",
            Label::Circle => "circle",
            Label::Triangle => "triangle",
            Label::Star => "star",
            Label::Zigzag => "zigzag",
            Label::Heart => "heart",
        }
    }

    /// One-hot vector of length `num_classes` with a 1 at this label's id
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::InvalidParameters`] if `num_classes` is too
    /// small to hold every label.
    pub fn one_hot(self, num_classes: usize) -> EncodeResult<Vec<f32>> {
        if num_classes < Self::COUNT {
            return Err(EncodeError::InvalidParameters(format!(
                "num_classes {} is smaller than the label count {}",
                num_classes,
                Self::COUNT
            )));
        }
        let mut v = vec![0.0; num_classes];
        v[self.id() as usize] = 1.0;
        Ok(v)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Label {
    type Err = EncodeError;

    fn from_str(s: &str) -> EncodeResult<Self> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|l| l.name() == lower)
            .ok_or_else(|| EncodeError::UnknownLabel(s.to_string()))
    }
}

impl TryFrom<u32> for Label {
    type Error = EncodeError;

    fn try_from(id: u32) -> EncodeResult<Self> {
        Self::from_id(id)
    }
}

impl From<Label> for u32 {
    fn from(label: Label) -> Self {
        label.id()
    }
}
