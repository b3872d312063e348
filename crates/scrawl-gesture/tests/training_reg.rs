//! Training data regression test
//!
//! Captures labeled gestures, persists them through a sample store, loads
//! them back into a training batch and feeds a small template classifier.

use scrawl_core::SurfaceSize;
use scrawl_encode::{Bitmap, Label, TrainingBatch};
use scrawl_gesture::{
    Classifier, GestureError, GestureSession, LabeledSample, MemorySampleStore, PipelineConfig,
    PointerEvent, Prediction, load_samples, save_sample, training_set,
};
use scrawl_test::RegParams;

/// Scores each label by cell agreement with the mean of its training inputs.
#[derive(Default)]
struct TemplateClassifier {
    templates: Vec<Option<Vec<f32>>>,
}

impl Classifier for TemplateClassifier {
    type Error = GestureError;

    fn predict(&self, bitmap: &Bitmap) -> Result<Prediction, GestureError> {
        let cells = bitmap.to_f32();
        let scores = self
            .templates
            .iter()
            .map(|t| match t {
                Some(t) => -t.iter().zip(&cells).map(|(a, b)| (a - b).abs()).sum::<f32>(),
                None => f32::NEG_INFINITY,
            })
            .collect();
        Prediction::from_scores(scores)
    }

    fn train(&mut self, batch: &TrainingBatch) -> Result<(), GestureError> {
        let [_, num_classes] = batch.label_shape();
        let mut sums: Vec<Option<(Vec<f32>, f32)>> = vec![None; num_classes];
        for i in 0..batch.len() {
            let (Some(input), Some(label)) = (batch.input(i), batch.label(i)) else {
                continue;
            };
            let Some(class) = label.iter().position(|&v| v == 1.0) else {
                continue;
            };
            let entry = sums[class].get_or_insert_with(|| (vec![0.0; input.len()], 0.0));
            for (acc, v) in entry.0.iter_mut().zip(input) {
                *acc += v;
            }
            entry.1 += 1.0;
        }
        self.templates = sums
            .into_iter()
            .map(|s| s.map(|(sum, n)| sum.into_iter().map(|v| v / n).collect()))
            .collect();
        Ok(())
    }
}

fn capture(session: &mut GestureSession, points: &[(f32, f32)], label: Label) -> LabeledSample {
    session.handle(PointerEvent::down(points[0].0, points[0].1)).unwrap();
    for &(x, y) in &points[1..] {
        session.handle(PointerEvent::moved(x, y)).unwrap();
    }
    let mut encoded = session
        .handle(PointerEvent::up(0.0, 0.0))
        .unwrap()
        .expect("encoded gesture");
    encoded.gesture.set_label(Some(label));
    LabeledSample::from_encoded(&encoded).unwrap()
}

const SQUARE: &[(f32, f32)] = &[
    (20.0, 20.0),
    (180.0, 20.0),
    (180.0, 180.0),
    (20.0, 180.0),
    (20.0, 20.0),
];
const TRIANGLE: &[(f32, f32)] = &[(100.0, 20.0), (180.0, 180.0), (20.0, 180.0), (100.0, 20.0)];
const ZIGZAG: &[(f32, f32)] = &[
    (10.0, 100.0),
    (50.0, 40.0),
    (90.0, 160.0),
    (130.0, 40.0),
    (170.0, 160.0),
];

#[test]
fn training_reg() {
    scrawl_test::init_tracing();
    let mut rp = RegParams::new("training");
    let config = PipelineConfig::default();
    let mut session = GestureSession::new(config, SurfaceSize::new(200, 200)).unwrap();
    let mut store = MemorySampleStore::new();

    for (points, label) in [(SQUARE, Label::Square), (TRIANGLE, Label::Triangle), (ZIGZAG, Label::Zigzag)] {
        let sample = capture(&mut session, points, label);
        save_sample(&mut store, &sample).unwrap();
    }
    rp.compare_values(3.0, store.len() as f64, 0.0);
    rp.compare_values(3.0, session.gestures().len() as f64, 0.0);

    let samples = load_samples(&store, &config).unwrap();
    let set = training_set(&samples, &config).unwrap();
    rp.compare_true(set.label_counts() == [1, 0, 1, 0, 1, 0], "label counts");

    let batch = set.to_batch().unwrap();
    rp.compare_true(batch.input_shape() == [3, 28, 28, 1], "input shape");
    rp.compare_true(batch.label_shape() == [3, 10], "label shape");

    let mut classifier = TemplateClassifier::default();
    classifier.train(&batch).unwrap();
    for sample in &samples {
        let p = classifier.predict(&sample.bitmap).unwrap();
        rp.compare_true(p.label == sample.label, "template recalls its own label");
        rp.compare_values(0.0, p.confidence as f64, 0.0);
    }

    assert!(rp.cleanup(), "training regression test failed");
}

#[test]
fn unlabeled_gesture_is_not_a_sample() {
    let mut session =
        GestureSession::new(PipelineConfig::default(), SurfaceSize::new(200, 200)).unwrap();
    session.handle(PointerEvent::down(20.0, 20.0)).unwrap();
    session.handle(PointerEvent::moved(150.0, 90.0)).unwrap();
    let encoded = session.handle(PointerEvent::up(0.0, 0.0)).unwrap().unwrap();
    assert!(matches!(
        LabeledSample::from_encoded(&encoded),
        Err(GestureError::MissingLabel)
    ));
}
