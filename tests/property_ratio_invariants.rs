use proptest::prelude::*;

use fatigue_monitor::geometry::{eye_aspect_ratio, mouth_aspect_ratio};
use fatigue_monitor::Point;

fn translate(points: &[Point], dx: f64, dy: f64) -> Vec<Point> {
    points
        .iter()
        .map(|p| Point::new(p.x + dx, p.y + dy))
        .collect()
}

fn scale(points: &[Point], s: f64) -> Vec<Point> {
    points.iter().map(|p| Point::new(p.x * s, p.y * s)).collect()
}

/// 6 corner/lid points with a guaranteed non-degenerate horizontal span
fn eye_strategy() -> impl Strategy<Value = Vec<Point>> {
    (
        1.0_f64..50.0,
        proptest::collection::vec((-20.0_f64..20.0, -20.0_f64..20.0), 4),
    )
        .prop_map(|(h, lids)| {
            let mut eye = vec![Point::new(0.0, 0.0), Point::new(h, 0.0)];
            eye.extend(lids.into_iter().map(|(x, y)| Point::new(x, y)));
            // reorder into p1..p6 convention: corners at 0 and 3
            eye.swap(1, 3);
            eye
        })
}

fn mouth_strategy() -> impl Strategy<Value = Vec<Point>> {
    (
        1.0_f64..50.0,
        proptest::collection::vec((-20.0_f64..20.0, -20.0_f64..20.0), 10),
    )
        .prop_map(|(h, rest)| {
            let mut mouth = vec![Point::new(0.0, 0.0)];
            let mut rest: Vec<Point> = rest.into_iter().map(|(x, y)| Point::new(x, y)).collect();
            mouth.append(&mut rest);
            mouth.push(Point::new(0.0, 0.0));
            mouth[6] = Point::new(h, 0.0);
            mouth
        })
}

proptest! {
    #[test]
    fn pt_ear_non_negative(eye in eye_strategy()) {
        let ear = eye_aspect_ratio(&eye).unwrap();
        prop_assert!(ear >= 0.0);
        prop_assert!(ear.is_finite());
    }

    #[test]
    fn pt_ear_translation_invariant(
        eye in eye_strategy(),
        dx in -500.0_f64..500.0,
        dy in -500.0_f64..500.0,
    ) {
        let ear = eye_aspect_ratio(&eye).unwrap();
        let shifted = eye_aspect_ratio(&translate(&eye, dx, dy)).unwrap();
        prop_assert!((ear - shifted).abs() < 1e-6 * (1.0 + ear));
    }

    #[test]
    fn pt_ear_scale_invariant(eye in eye_strategy(), s in 0.1_f64..100.0) {
        let ear = eye_aspect_ratio(&eye).unwrap();
        let scaled = eye_aspect_ratio(&scale(&eye, s)).unwrap();
        prop_assert!((ear - scaled).abs() < 1e-9 * (1.0 + ear));
    }

    #[test]
    fn pt_ear_deterministic(eye in eye_strategy()) {
        let a = eye_aspect_ratio(&eye).unwrap();
        let b = eye_aspect_ratio(&eye).unwrap();
        prop_assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn pt_mar_translation_invariant(
        mouth in mouth_strategy(),
        dx in -500.0_f64..500.0,
        dy in -500.0_f64..500.0,
    ) {
        let mar = mouth_aspect_ratio(&mouth).unwrap();
        let shifted = mouth_aspect_ratio(&translate(&mouth, dx, dy)).unwrap();
        prop_assert!((mar - shifted).abs() < 1e-6 * (1.0 + mar));
    }

    #[test]
    fn pt_mar_scale_invariant(mouth in mouth_strategy(), s in 0.1_f64..100.0) {
        let mar = mouth_aspect_ratio(&mouth).unwrap();
        let scaled = mouth_aspect_ratio(&scale(&mouth, s)).unwrap();
        prop_assert!((mar - scaled).abs() < 1e-9 * (1.0 + mar));
    }
}
