//! Isometric projection of a house's bounding box for the detail view.
//!
//! The box is `length` along x, `width` along y and `height` up. Only the
//! three faces facing the viewer are produced; the SVG scene draws them in
//! order, so no depth sorting is needed.

#[cfg(test)]
#[path = "box_geometry_test.rs"]
mod box_geometry_test;

use std::fmt::Write;

const COS_30: f64 = 0.866_025_403_784_438_6;
const SIN_30: f64 = 0.5;

/// A point in viewport space (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceKind {
    Top,
    Left,
    Right,
}

impl FaceKind {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Top => "box-scene__face box-scene__face--top",
            Self::Left => "box-scene__face box-scene__face--left",
            Self::Right => "box-scene__face box-scene__face--right",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    pub kind: FaceKind,
    pub points: [Point; 4],
}

impl Face {
    /// SVG `points` attribute value.
    pub fn svg_points(&self) -> String {
        let mut out = String::new();
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            let _ = write!(out, "{:.2},{:.2}", p.x, p.y);
        }
        out
    }
}

/// Target drawing area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { width: 320.0, height: 240.0, padding: 16.0 }
    }
}

/// Projected box faces, scaled and centered in a viewport.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoxProjection {
    pub faces: Vec<Face>,
    /// Viewport units per metre.
    pub scale: f64,
}

fn project(x: f64, y: f64, z: f64) -> Point {
    Point::new((x - y) * COS_30, (x + y) * SIN_30 - z)
}

/// Project a `length x width x height` box into `viewport`.
///
/// Returns no faces for non-finite or non-positive dimensions. The box is
/// projected in units of its largest side, so any finite input yields finite
/// points.
pub fn project_box(length: f64, width: f64, height: f64, viewport: Viewport) -> BoxProjection {
    let dims_ok = [length, width, height].iter().all(|d| d.is_finite() && *d > 0.0);
    if !dims_ok {
        return BoxProjection::default();
    }

    let unit = length.max(width).max(height);
    let (l, w, h) = (length / unit, width / unit, height / unit);
    let raw = [
        (FaceKind::Top, [project(0.0, 0.0, h), project(l, 0.0, h), project(l, w, h), project(0.0, w, h)]),
        (FaceKind::Left, [project(0.0, w, 0.0), project(l, w, 0.0), project(l, w, h), project(0.0, w, h)]),
        (FaceKind::Right, [project(l, 0.0, 0.0), project(l, w, 0.0), project(l, w, h), project(l, 0.0, h)]),
    ];

    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for p in raw.iter().flat_map(|(_, pts)| pts.iter()) {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }

    let bounds_w = (max_x - min_x).max(f64::EPSILON);
    let bounds_h = (max_y - min_y).max(f64::EPSILON);
    let draw_w = (viewport.width - viewport.padding * 2.0).max(1.0);
    let draw_h = (viewport.height - viewport.padding * 2.0).max(1.0);
    let scale = (draw_w / bounds_w).min(draw_h / bounds_h);
    let offset_x = (viewport.width - bounds_w * scale) * 0.5 - min_x * scale;
    let offset_y = (viewport.height - bounds_h * scale) * 0.5 - min_y * scale;

    let faces = raw
        .into_iter()
        .map(|(kind, pts)| Face {
            kind,
            points: pts.map(|p| Point::new(p.x * scale + offset_x, p.y * scale + offset_y)),
        })
        .collect();

    BoxProjection { faces, scale: scale / unit }
}
