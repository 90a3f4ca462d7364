use super::*;

const EPS: f64 = 1e-9;

fn bounds(projection: &BoxProjection) -> (f64, f64, f64, f64) {
    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for p in projection.faces.iter().flat_map(|f| f.points.iter()) {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }
    (min_x, min_y, max_x, max_y)
}

#[test]
fn project_box_returns_three_visible_faces() {
    let projection = project_box(10.0, 4.0, 3.0, Viewport::default());
    let kinds: Vec<FaceKind> = projection.faces.iter().map(|f| f.kind).collect();
    assert_eq!(kinds, vec![FaceKind::Top, FaceKind::Left, FaceKind::Right]);
}

#[test]
fn project_box_fits_inside_padded_viewport() {
    let vp = Viewport::default();
    let projection = project_box(10.0, 4.0, 3.0, vp);
    let (min_x, min_y, max_x, max_y) = bounds(&projection);
    assert!(min_x >= vp.padding - EPS);
    assert!(min_y >= vp.padding - EPS);
    assert!(max_x <= vp.width - vp.padding + EPS);
    assert!(max_y <= vp.height - vp.padding + EPS);
}

#[test]
fn project_box_is_centered() {
    let vp = Viewport { width: 400.0, height: 300.0, padding: 10.0 };
    let projection = project_box(5.0, 5.0, 5.0, vp);
    let (min_x, min_y, max_x, max_y) = bounds(&projection);
    assert!(((min_x + max_x) * 0.5 - 200.0).abs() < EPS);
    assert!(((min_y + max_y) * 0.5 - 150.0).abs() < EPS);
}

#[test]
fn larger_box_gets_smaller_scale() {
    let vp = Viewport::default();
    let small = project_box(1.0, 1.0, 1.0, vp);
    let large = project_box(2.0, 2.0, 2.0, vp);
    assert!((small.scale - large.scale * 2.0).abs() < EPS);
}

#[test]
fn top_face_sits_above_side_faces() {
    let projection = project_box(3.0, 3.0, 3.0, Viewport::default());
    let top_min_y = projection.faces[0].points.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
    let (_, min_y, _, _) = bounds(&projection);
    assert!((top_min_y - min_y).abs() < EPS);
}

#[test]
fn degenerate_dimensions_produce_no_faces() {
    assert!(project_box(0.0, 1.0, 1.0, Viewport::default()).faces.is_empty());
    assert!(project_box(1.0, -1.0, 1.0, Viewport::default()).faces.is_empty());
    assert!(project_box(1.0, 1.0, f64::NAN, Viewport::default()).faces.is_empty());
}

#[test]
fn huge_dimensions_still_fit_the_viewport() {
    let vp = Viewport::default();
    for (l, w, h) in [(1e308, 1e308, 1e308), (1e308, 1.0, 1.0), (f64::MAX, f64::MAX, 2.0)] {
        let projection = project_box(l, w, h, vp);
        assert_eq!(projection.faces.len(), 3);
        let (min_x, min_y, max_x, max_y) = bounds(&projection);
        assert!([min_x, min_y, max_x, max_y].iter().all(|v| v.is_finite()), "{l} x {w} x {h}");
        assert!(min_x >= vp.padding - EPS && max_x <= vp.width - vp.padding + EPS);
        assert!(min_y >= vp.padding - EPS && max_y <= vp.height - vp.padding + EPS);
        assert!(!projection.faces[0].svg_points().contains("NaN"));
    }
}

#[test]
fn scale_is_independent_of_normalization() {
    let vp = Viewport::default();
    let metres = project_box(10.0, 4.0, 3.0, vp);
    let tenths = project_box(100.0, 40.0, 30.0, vp);
    assert!((metres.scale - tenths.scale * 10.0).abs() < EPS);
    assert_eq!(metres.faces, tenths.faces);
}

#[test]
fn svg_points_formats_pairs() {
    let face = Face {
        kind: FaceKind::Top,
        points: [Point::new(0.0, 1.0), Point::new(2.5, 3.0), Point::new(4.0, 5.126), Point::new(6.0, 7.0)],
    };
    assert_eq!(face.svg_points(), "0.00,1.00 2.50,3.00 4.00,5.13 6.00,7.00");
}
