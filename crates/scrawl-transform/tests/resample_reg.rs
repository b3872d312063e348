//! Fixed-size resampler regression test
//!
//! Every source size must come out at exactly the requested grid, and
//! letterboxing must keep a thin vertical crop in the middle columns.

use scrawl_core::{StrokeStyle, SurfaceSize};
use scrawl_test::{RegParams, stroke_surface, surface_from_ascii};
use scrawl_transform::{AspectPolicy, ResampleOptions, ScaleMethod, resample};

const METHODS: [ScaleMethod; 3] = [ScaleMethod::Sampling, ScaleMethod::Linear, ScaleMethod::AreaMap];

#[test]
fn resample_reg() {
    scrawl_test::init_tracing();
    let mut rp = RegParams::new("resample");
    let src = stroke_surface(
        SurfaceSize::new(150, 150),
        &[(0.0, 0.0), (149.0, 149.0)],
        &StrokeStyle::default(),
    )
    .expect("stroke");

    let sizes = [(1, 1), (1, 37), (37, 1), (5, 41), (28, 28), (29, 27), (150, 150)];
    let grids = [(28, 28), (100, 100), (8, 16)];

    for (w, h) in sizes {
        let crop = src.clip_rectangle(0, 0, w, h).expect("clip");
        for (rows, columns) in grids {
            for method in METHODS {
                for aspect in [AspectPolicy::Letterbox, AspectPolicy::Stretch] {
                    let o = ResampleOptions::default()
                        .size(rows, columns)
                        .method(method)
                        .aspect(aspect);
                    let out = resample(&crop, &o).expect("resample");
                    rp.compare_values(columns as f64, out.width() as f64, 0.0);
                    rp.compare_values(rows as f64, out.height() as f64, 0.0);
                }
            }
        }
    }

    assert!(rp.cleanup(), "resample regression test failed");
}

#[test]
fn resample_single_pixel_fills_grid() {
    let s = surface_from_ascii(&["#"]).unwrap();
    for method in METHODS {
        let out = resample(&s, &ResampleOptions::default().method(method)).unwrap();
        assert_eq!((out.width(), out.height()), (28, 28));
        assert_eq!(out.count_foreground(), 28 * 28, "{:?}", method);
    }
}

#[test]
fn resample_vertical_line_letterbox_band() {
    let s = stroke_surface(
        SurfaceSize::new(100, 100),
        &[(10.0, 10.0), (10.0, 50.0)],
        &StrokeStyle::default(),
    )
    .unwrap();
    let (crop, _) = s.crop_to_foreground().unwrap();
    assert_eq!((crop.width(), crop.height()), (5, 41));

    let out = resample(&crop, &ResampleOptions::default()).unwrap();
    let mut rp = RegParams::new("resample_band");
    rp.show_surface("letterboxed vertical line", &out);
    for y in 0..28 {
        for x in 0..28 {
            let in_band = (12..=15).contains(&x);
            rp.compare_true(
                out.is_foreground(x, y) == in_band,
                &format!("cell ({}, {}) foreground iff in center band", x, y),
            );
        }
    }
    assert!(rp.cleanup(), "vertical line band check failed");
}

#[test]
fn resample_is_deterministic() {
    let s = stroke_surface(
        SurfaceSize::new(64, 48),
        &[(3.0, 40.0), (30.0, 5.0), (60.0, 44.0)],
        &StrokeStyle::with_width(3),
    )
    .unwrap();
    let (crop, _) = s.crop_to_foreground().unwrap();
    for method in METHODS {
        let o = ResampleOptions::with_method(method);
        let a = resample(&crop, &o).unwrap();
        let b = resample(&crop, &o).unwrap();
        assert_eq!(a.data(), b.data());
    }
}
