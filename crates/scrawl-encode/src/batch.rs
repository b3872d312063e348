//! Training sets and batches
//!
//! A [`TrainingSet`] collects labeled bitmaps of one fixed shape and turns
//! them into a [`TrainingBatch`]: an `[N, rows, columns, 1]` input tensor
//! and an `[N, num_classes]` one-hot label tensor, both flat `f32`.

use crate::{Bitmap, EncodeError, EncodeResult, Label};
use tracing::debug;

/// Labeled bitmaps of a fixed shape
#[derive(Debug, Clone)]
pub struct TrainingSet {
    rows: u32,
    columns: u32,
    num_classes: usize,
    samples: Vec<(Bitmap, Label)>,
}

impl TrainingSet {
    /// Create an empty set for `rows x columns` bitmaps
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::InvalidParameters`] if a dimension is 0 or
    /// `num_classes` cannot hold every [`Label`].
    pub fn new(rows: u32, columns: u32, num_classes: usize) -> EncodeResult<Self> {
        if rows == 0 || columns == 0 {
            return Err(EncodeError::InvalidParameters(format!(
                "training shape must be non-empty, got {}x{}",
                rows, columns
            )));
        }
        if num_classes < Label::COUNT {
            return Err(EncodeError::InvalidParameters(format!(
                "num_classes {} is smaller than the label count {}",
                num_classes,
                Label::COUNT
            )));
        }
        Ok(Self {
            rows,
            columns,
            num_classes,
            samples: Vec::new(),
        })
    }

    /// Add a sample; the bitmap must have the set's shape
    pub fn push(&mut self, bitmap: Bitmap, label: Label) -> EncodeResult<()> {
        bitmap.ensure_shape(self.rows, self.columns)?;
        self.samples.push((bitmap, label));
        Ok(())
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether no sample was added
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Length of each one-hot label
    pub fn num_classes(&self) -> usize {
        self.num_classes
    }

    /// Iterate over samples in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&Bitmap, Label)> {
        self.samples.iter().map(|(b, l)| (b, *l))
    }

    /// Number of samples per label, indexed by label id
    pub fn label_counts(&self) -> [usize; Label::COUNT] {
        let mut counts = [0; Label::COUNT];
        for (_, label) in &self.samples {
            counts[label.id() as usize] += 1;
        }
        counts
    }

    /// Remove every sample, keeping the shape
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Assemble every sample into one batch
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::InvalidParameters`] if the set is empty.
    pub fn to_batch(&self) -> EncodeResult<TrainingBatch> {
        if self.samples.is_empty() {
            return Err(EncodeError::InvalidParameters(
                "cannot build a batch from an empty training set".to_string(),
            ));
        }
        let cells = self.rows as usize * self.columns as usize;
        let mut inputs = Vec::with_capacity(self.samples.len() * cells);
        let mut labels = Vec::with_capacity(self.samples.len() * self.num_classes);
        for (bitmap, label) in &self.samples {
            inputs.extend(bitmap.to_f32());
            labels.extend(label.one_hot(self.num_classes)?);
        }
        debug!(
            samples = self.samples.len(),
            rows = self.rows,
            columns = self.columns,
            num_classes = self.num_classes,
            "assembled training batch"
        );
        Ok(TrainingBatch {
            len: self.samples.len(),
            rows: self.rows,
            columns: self.columns,
            num_classes: self.num_classes,
            inputs,
            labels,
        })
    }
}

/// Flat tensors ready for a classifier's `fit` call
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingBatch {
    len: usize,
    rows: u32,
    columns: u32,
    num_classes: usize,
    inputs: Vec<f32>,
    labels: Vec<f32>,
}

impl TrainingBatch {
    /// Number of samples
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the batch holds no sample
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Input tensor, [`input_shape`](Self::input_shape), row-major
    pub fn inputs(&self) -> &[f32] {
        &self.inputs
    }

    /// One-hot label tensor, [`label_shape`](Self::label_shape)
    pub fn labels(&self) -> &[f32] {
        &self.labels
    }

    /// `[N, rows, columns, 1]`
    pub fn input_shape(&self) -> [usize; 4] {
        [self.len, self.rows as usize, self.columns as usize, 1]
    }

    /// `[N, num_classes]`
    pub fn label_shape(&self) -> [usize; 2] {
        [self.len, self.num_classes]
    }

    /// Input cells of sample `i`
    pub fn input(&self, i: usize) -> Option<&[f32]> {
        let n = self.rows as usize * self.columns as usize;
        self.inputs.get(i * n..(i + 1) * n)
    }

    /// One-hot label of sample `i`
    pub fn label(&self, i: usize) -> Option<&[f32]> {
        self.labels
            .get(i * self.num_classes..(i + 1) * self.num_classes)
    }
}
