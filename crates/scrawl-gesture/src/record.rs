//! Persistence records
//!
//! A [`LabeledSample`] is the unit of training data kept by a storage
//! backend. On the wire it becomes a [`SampleRecord`], whose bitmap and
//! path fields are JSON strings.

use crate::gesture::EncodedGesture;
use crate::pipeline::check_shape;
use crate::{GestureError, GestureResult, PipelineConfig};
use scrawl_core::Path;
use scrawl_encode::{Bitmap, Label, TrainingSet};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use tracing::debug;

/// Bitmap, path and label of one captured sample
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledSample {
    pub bitmap: Bitmap,
    pub path: Path,
    pub label: Label,
}

impl LabeledSample {
    /// Create a sample, rejecting an empty path
    pub fn new(bitmap: Bitmap, path: Path, label: Label) -> GestureResult<Self> {
        if path.is_empty() {
            return Err(GestureError::EmptyGesture);
        }
        Ok(Self {
            bitmap,
            path,
            label,
        })
    }

    /// Create a sample from an encoded, labeled gesture
    ///
    /// # Errors
    ///
    /// Returns [`GestureError::MissingLabel`] if the gesture is unlabeled.
    pub fn from_encoded(encoded: &EncodedGesture) -> GestureResult<Self> {
        let label = encoded.gesture.label().ok_or(GestureError::MissingLabel)?;
        Self::new(encoded.bitmap.clone(), encoded.gesture.path().clone(), label)
    }

    /// Serialize into the storage wire shape
    pub fn to_record(&self) -> GestureResult<SampleRecord> {
        Ok(SampleRecord {
            bitmap: serde_json::to_string(&self.bitmap)?,
            path: serde_json::to_string(&self.path)?,
            label: self.label.id(),
        })
    }

    /// Decode a stored record, checking the bitmap against `config`
    ///
    /// # Errors
    ///
    /// Returns [`GestureError::ShapeMismatch`] for a bitmap of another size,
    /// [`GestureError::EmptyGesture`] for an empty path and
    /// [`GestureError::Serde`] for malformed JSON.
    pub fn from_record(record: &SampleRecord, config: &PipelineConfig) -> GestureResult<Self> {
        let bitmap: Bitmap = serde_json::from_str(&record.bitmap)?;
        check_shape(&bitmap, config)?;
        let path: Path = serde_json::from_str(&record.path)?;
        let label = Label::from_id(record.label)?;
        Self::new(bitmap, path, label)
    }
}

/// Storage wire shape of a sample
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleRecord {
    /// JSON of the nested `rows x columns x 1` bitmap
    pub bitmap: String,
    /// JSON of the path's point array
    pub path: String,
    /// Label id
    pub label: u32,
}

/// Backend that persists sample records
pub trait SampleStore {
    /// Backend failure
    type Error;

    /// Persist one record
    fn save(&mut self, record: &SampleRecord) -> Result<(), Self::Error>;

    /// Fetch every stored record
    fn load_all(&self) -> Result<Vec<SampleRecord>, Self::Error>;
}

/// In-process [`SampleStore`]
#[derive(Debug, Clone, Default)]
pub struct MemorySampleStore {
    records: Vec<SampleRecord>,
}

impl MemorySampleStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether nothing was stored
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl SampleStore for MemorySampleStore {
    type Error = Infallible;

    fn save(&mut self, record: &SampleRecord) -> Result<(), Infallible> {
        self.records.push(record.clone());
        Ok(())
    }

    fn load_all(&self) -> Result<Vec<SampleRecord>, Infallible> {
        Ok(self.records.clone())
    }
}

/// Encode and persist one sample
pub fn save_sample<S>(store: &mut S, sample: &LabeledSample) -> GestureResult<()>
where
    S: SampleStore,
    GestureError: From<S::Error>,
{
    let record = sample.to_record()?;
    store.save(&record)?;
    Ok(())
}

/// Load every stored sample, validated against `config`
pub fn load_samples<S>(store: &S, config: &PipelineConfig) -> GestureResult<Vec<LabeledSample>>
where
    S: SampleStore,
    GestureError: From<S::Error>,
{
    let records = store.load_all()?;
    let samples = records
        .iter()
        .map(|r| LabeledSample::from_record(r, config))
        .collect::<GestureResult<Vec<_>>>()?;
    debug!(count = samples.len(), "loaded samples");
    Ok(samples)
}

/// Collect samples into a training set shaped by `config`
pub fn training_set<'a, I>(samples: I, config: &PipelineConfig) -> GestureResult<TrainingSet>
where
    I: IntoIterator<Item = &'a LabeledSample>,
{
    let mut set = TrainingSet::new(config.rows(), config.columns(), config.num_classes)?;
    for sample in samples {
        set.push(sample.bitmap.clone(), sample.label)?;
    }
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrawl_core::Point;

    fn sample(label: Label) -> LabeledSample {
        let mut bitmap = Bitmap::new(28, 28).unwrap();
        bitmap.set(3, 4, true).unwrap();
        let path: Path = [(1.0, 2.0), (3.0, 4.0)].into_iter().map(Point::from).collect();
        LabeledSample::new(bitmap, path, label).unwrap()
    }

    #[test]
    fn test_empty_path_rejected() {
        let bitmap = Bitmap::new(28, 28).unwrap();
        assert!(matches!(
            LabeledSample::new(bitmap, Path::new(), Label::Square),
            Err(GestureError::EmptyGesture)
        ));
    }

    #[test]
    fn test_record_wire_shape() {
        let record = sample(Label::Triangle).to_record().unwrap();
        assert_eq!(record.label, 2);
        assert_eq!(record.path, r#"[{"x":1.0,"y":2.0},{"x":3.0,"y":4.0}]"#);
        assert!(record.bitmap.starts_with("[[[0],[0],"));
        let back = LabeledSample::from_record(&record, &PipelineConfig::default()).unwrap();
        assert_eq!(back, sample(Label::Triangle));
    }

    #[test]
    fn test_record_validation() {
        let record = sample(Label::Star).to_record().unwrap();
        assert!(matches!(
            LabeledSample::from_record(&record, &PipelineConfig::high_res()),
            Err(GestureError::ShapeMismatch {
                expected: (100, 100),
                actual: (28, 28)
            })
        ));

        let mut bad = record.clone();
        bad.label = 42;
        assert!(matches!(
            LabeledSample::from_record(&bad, &PipelineConfig::default()),
            Err(GestureError::Encode(_))
        ));

        let mut bad = record.clone();
        bad.path = "[]".to_string();
        assert!(matches!(
            LabeledSample::from_record(&bad, &PipelineConfig::default()),
            Err(GestureError::EmptyGesture)
        ));

        let mut bad = record;
        bad.bitmap = "{".to_string();
        assert!(matches!(
            LabeledSample::from_record(&bad, &PipelineConfig::default()),
            Err(GestureError::Serde(_))
        ));
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let config = PipelineConfig::default();
        let mut store = MemorySampleStore::new();
        save_sample(&mut store, &sample(Label::Heart)).unwrap();
        save_sample(&mut store, &sample(Label::Circle)).unwrap();
        assert_eq!(store.len(), 2);

        let samples = load_samples(&store, &config).unwrap();
        assert_eq!(samples[0].label, Label::Heart);
        assert_eq!(samples[1].label, Label::Circle);

        let set = training_set(&samples, &config).unwrap();
        let batch = set.to_batch().unwrap();
        assert_eq!(batch.input_shape(), [2, 28, 28, 1]);
        assert_eq!(batch.label_shape(), [2, 10]);
    }
}
