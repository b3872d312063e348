//! Center-crop regression test
//!
//! Renders several strokes and checks that the foreground crop contains
//! every painted pixel while dropping all-background border rows and
//! columns.

use scrawl_core::{Error, Rect, StrokeCap, StrokeStyle, Surface, SurfaceSize};
use scrawl_test::{RegParams, stroke_surface, surface_from_ascii};

fn row_has_fg(s: &Surface, y: u32) -> bool {
    (0..s.width()).any(|x| s.is_foreground(x, y))
}

fn col_has_fg(s: &Surface, x: u32) -> bool {
    (0..s.height()).any(|y| s.is_foreground(x, y))
}

/// Crop `s` and verify the tight-box properties against the source.
fn check_crop(rp: &mut RegParams, s: &Surface) {
    let (crop, bbox) = s.crop_to_foreground().expect("non-empty surface");

    rp.compare_values(s.count_foreground() as f64, crop.count_foreground() as f64, 0.0);
    rp.compare_values(bbox.w as f64, crop.width() as f64, 0.0);
    rp.compare_values(bbox.h as f64, crop.height() as f64, 0.0);

    let mut outside = 0;
    for y in 0..s.height() {
        for x in 0..s.width() {
            if s.is_foreground(x, y) && !bbox.contains_point(x as i32, y as i32) {
                outside += 1;
            }
        }
    }
    rp.compare_values(0.0, outside as f64, 0.0);

    let last_row = crop.height() - 1;
    let last_col = crop.width() - 1;
    rp.compare_true(row_has_fg(&crop, 0), "top crop row has foreground");
    rp.compare_true(row_has_fg(&crop, last_row), "bottom crop row has foreground");
    rp.compare_true(col_has_fg(&crop, 0), "left crop column has foreground");
    rp.compare_true(col_has_fg(&crop, last_col), "right crop column has foreground");
}

#[test]
fn crop_reg() {
    let mut rp = RegParams::new("crop");
    let size = SurfaceSize::new(120, 90);
    let butt = StrokeStyle::default();
    let round = StrokeStyle::with_width(7).cap(StrokeCap::Round);

    let strokes: [&[(f32, f32)]; 5] = [
        &[(10.0, 10.0), (10.0, 50.0)],
        &[(5.0, 80.0), (110.0, 12.0)],
        &[(40.0, 40.0), (60.0, 20.0), (80.0, 40.0), (60.0, 60.0), (40.0, 40.0)],
        &[(-20.0, 45.0), (200.0, 45.0)],
        &[(3.0, 3.0), (4.0, 3.0)],
    ];

    for points in strokes {
        for style in [&butt, &round] {
            let s = stroke_surface(size, points, style).expect("stroke");
            rp.show_surface("stroke", &s);
            check_crop(&mut rp, &s);
        }
    }

    assert!(rp.cleanup(), "crop regression test failed");
}

#[test]
fn crop_vertical_line_box() {
    // width 5 => half width 2 around x = 10, butt caps keep y in [10, 50]
    let s = stroke_surface(
        SurfaceSize::new(100, 100),
        &[(10.0, 10.0), (10.0, 50.0)],
        &StrokeStyle::default(),
    )
    .unwrap();
    let (crop, bbox) = s.crop_to_foreground().unwrap();
    assert_eq!(bbox, Rect::from_inclusive(8, 10, 12, 50));
    assert_eq!((crop.width(), crop.height()), (5, 41));
}

#[test]
fn crop_ascii_fixture() {
    let s = surface_from_ascii(&[
        "........",
        "...#....",
        "..###...",
        "....#...",
        "........",
    ])
    .unwrap();
    let (crop, bbox) = s.crop_to_foreground().unwrap();
    assert_eq!(bbox, Rect::new_unchecked(2, 1, 3, 3));
    assert_eq!(
        scrawl_test::ascii_rows(&crop),
        [".#.", "###", "..#"]
    );
}

#[test]
fn crop_fails_without_foreground() {
    let s = stroke_surface(
        SurfaceSize::new(50, 50),
        &[(-30.0, -30.0), (-10.0, -5.0)],
        &StrokeStyle::default(),
    )
    .unwrap();
    assert!(matches!(s.crop_to_foreground(), Err(Error::EmptyForeground)));
}
