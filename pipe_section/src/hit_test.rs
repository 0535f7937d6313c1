// Copyright 2025 the PipeSection Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolving device-space clicks to scene primitives.
//!
//! A click is mapped to logical space with the same rounding the mapper
//! applies ([`CoordinateMapper::to_logical`]), then the scene is scanned in
//! order and the first primitive whose predicate accepts the point wins.
//! All predicates are inclusive on their boundary.

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use kurbo::{Line, ParamCurveNearest, Point};

use crate::mapper::round2;
use crate::{CoordinateMapper, Primitive, Scene};

/// How clicks are matched against polylines.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LineHitTest {
    /// The click is within `tolerance_px` device pixels of some segment,
    /// measured to the closest point of the bounded segment.
    Segment {
        /// Maximum distance in device pixels.
        tolerance_px: f64,
    },
    /// Slope colinearity: for some segment `(a, b)` the slopes `a -> click`
    /// and `click -> b` differ by at most `max_delta` after rounding to two
    /// decimals.
    ///
    /// This treats each segment as an unbounded line, so points colinear with
    /// but outside a segment still hit. Segments where either slope is not
    /// finite (click on a vertex, or vertically aligned with an endpoint) never
    /// match.
    SlopeTolerance {
        /// Maximum slope difference.
        max_delta: f64,
    },
}

impl LineHitTest {
    /// The slope test with a `0.1` tolerance.
    pub const SLOPE_PARITY: Self = Self::SlopeTolerance { max_delta: 0.1 };
}

impl Default for LineHitTest {
    fn default() -> Self {
        Self::Segment { tolerance_px: 3.0 }
    }
}

/// Whether `p` lies inside or on the circle.
pub fn arc_contains(center: Point, radius: f64, p: Point) -> bool {
    (p - center).hypot2() <= radius * radius
}

/// Whether `p` lies inside or on a rectangle anchored at its upper-left corner.
///
/// The rectangle spans `[origin.x, origin.x + width]` and
/// `[origin.y - height, origin.y]`.
pub fn rect_contains(origin: Point, width: f64, height: f64, p: Point) -> bool {
    p.x >= origin.x && p.x <= origin.x + width && p.y >= origin.y - height && p.y <= origin.y
}

/// Slope-colinearity polyline test (see [`LineHitTest::SlopeTolerance`]).
pub fn line_hit_slope(path: &[Point], p: Point, max_delta: f64) -> bool {
    path.windows(2).any(|w| {
        let (a, b) = (w[0], w[1]);
        let k1 = (p.y - a.y) / (p.x - a.x);
        let k2 = (b.y - p.y) / (b.x - p.x);
        if !k1.is_finite() || !k2.is_finite() {
            return false;
        }
        round2(k2 - k1).abs() <= max_delta
    })
}

/// Bounded polyline test: `p` is within `tolerance` of some segment.
///
/// Zero-length segments degrade to a distance check against their endpoint.
pub fn line_hit_segment(path: &[Point], p: Point, tolerance: f64) -> bool {
    let limit = tolerance * tolerance;
    path.windows(2).any(|w| {
        let (a, b) = (w[0], w[1]);
        let distance_sq = if a == b {
            (p - a).hypot2()
        } else {
            Line::new(a, b).nearest(p, 1e-9).distance_sq
        };
        distance_sq <= limit
    })
}

/// A successful hit-test result.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit<'a> {
    /// Position of the primitive in the scene.
    pub index: usize,
    /// The primitive that was hit.
    pub primitive: &'a Primitive,
    /// The click in logical units, rounded to two decimals.
    pub logical: Point,
}

/// Finds the primitive under a device-space point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitTester {
    mapper: CoordinateMapper,
    line: LineHitTest,
}

impl HitTester {
    /// Creates a hit tester for a mapper and polyline policy.
    pub fn new(mapper: CoordinateMapper, line: LineHitTest) -> Self {
        Self { mapper, line }
    }

    /// The polyline policy in use.
    pub fn line_hit_test(&self) -> LineHitTest {
        self.line
    }

    /// Whether `primitive` accepts the logical point `p`.
    pub fn contains(&self, primitive: &Primitive, p: Point) -> bool {
        match primitive {
            Primitive::Arc { center, radius } => arc_contains(*center, *radius, p),
            Primitive::Rect {
                origin,
                width,
                height,
            } => rect_contains(*origin, *width, *height, p),
            Primitive::Line { path } => match self.line {
                LineHitTest::Segment { tolerance_px } => {
                    line_hit_segment(path, p, self.mapper.length_to_logical(tolerance_px))
                }
                LineHitTest::SlopeTolerance { max_delta } => line_hit_slope(path, p, max_delta),
            },
        }
    }

    /// Returns the first primitive in `scene` under the device point, if any.
    pub fn locate<'a>(&self, device: Point, scene: &'a Scene) -> Option<Hit<'a>> {
        let logical = self.mapper.to_logical(device);
        let hit = scene
            .iter()
            .enumerate()
            .find(|(_, primitive)| self.contains(primitive, logical))
            .map(|(index, primitive)| Hit {
                index,
                primitive,
                logical,
            });
        match &hit {
            Some(h) => log::trace!(
                "click {device:?} -> {logical:?} hit {} #{}",
                h.primitive.kind(),
                h.index
            ),
            None => log::trace!("click {device:?} -> {logical:?} missed"),
        }
        hit
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;
    use crate::ViewConfig;

    fn view() -> ViewConfig {
        ViewConfig::new(400.0, 400.0).with_min(-5.0, -5.0)
    }

    fn tester(line: LineHitTest) -> HitTester {
        HitTester::new(CoordinateMapper::new(view()), line)
    }

    fn device(p: (f64, f64)) -> Point {
        CoordinateMapper::new(view()).to_device(Point::new(p.0, p.1))
    }

    #[test]
    fn arc_boundary_is_inclusive() {
        let c = Point::new(1.0, -1.0);
        assert!(arc_contains(c, 2.0, Point::new(3.0, -1.0)));
        assert!(arc_contains(c, 2.0, Point::new(1.0, 1.0)));
        assert!(!arc_contains(c, 2.0, Point::new(3.01, -1.0)));
        assert!(!arc_contains(c, 2.0, Point::new(1.0, 1.0 + 1e-6)));
    }

    #[test]
    fn rect_edges_are_inclusive() {
        let o = Point::new(0.0, 0.0);
        for p in [(0.0, 0.0), (4.0, 0.0), (4.0, -3.0), (0.0, -3.0), (2.0, -1.5)] {
            assert!(rect_contains(o, 4.0, 3.0, Point::new(p.0, p.1)), "{p:?}");
        }
        for p in [(5.0, 0.0), (-1.0, -1.0), (2.0, 1.0), (2.0, -4.0)] {
            assert!(!rect_contains(o, 4.0, 3.0, Point::new(p.0, p.1)), "{p:?}");
        }
    }

    #[test]
    fn rect_scenario_hit_and_miss() {
        let scene = Scene::from(vec![Primitive::rect((0.0, 0.0), 4.0, 3.0)]);
        let t = tester(LineHitTest::default());
        let hit = t.locate(device((2.0, -1.0)), &scene).unwrap();
        assert_eq!(hit.index, 0);
        assert_eq!(hit.logical, Point::new(2.0, -1.0));
        assert!(t.locate(device((5.0, 0.0)), &scene).is_none());
    }

    #[test]
    fn first_primitive_wins_on_overlap() {
        let scene = Scene::from(vec![
            Primitive::arc((1.0, -1.0), 2.0),
            Primitive::rect((0.0, 0.0), 4.0, 3.0),
        ]);
        let t = tester(LineHitTest::default());
        let hit = t.locate(device((1.0, -1.0)), &scene).unwrap();
        assert_eq!(hit.index, 0);
        assert_eq!(hit.primitive, &Primitive::arc((1.0, -1.0), 2.0));
        // Outside the circle but inside the rectangle.
        let hit = t.locate(device((3.9, -2.9)), &scene).unwrap();
        assert_eq!(hit.index, 1);
    }

    #[test]
    fn click_is_rounded_before_testing() {
        let scene = Scene::from(vec![Primitive::arc((0.0, 0.0), 2.0)]);
        let t = tester(LineHitTest::default());
        // 0.08 px right of the boundary is 0.004 units, which rounds back onto it.
        let click = device((2.0, 0.0)) + kurbo::Vec2::new(0.08, 0.0);
        assert!(t.locate(click, &scene).is_some());
        let click = device((2.0, 0.0)) + kurbo::Vec2::new(0.2, 0.0);
        assert!(t.locate(click, &scene).is_none());
    }

    #[test]
    fn colinear_click_hits_line_under_both_policies() {
        let scene = Scene::from(vec![Primitive::line([(0.0, 0.0), (10.0, 0.0)])]);
        for policy in [LineHitTest::default(), LineHitTest::SLOPE_PARITY] {
            let hit = tester(policy).locate(device((5.0, 0.0)), &scene);
            assert!(hit.is_some(), "{policy:?}");
        }
    }

    #[test]
    fn slope_policy_accepts_points_beyond_the_segment() {
        let path = [Point::new(0.0, 0.0), Point::new(2.0, 2.0)];
        let beyond = Point::new(5.0, 5.0);
        assert!(line_hit_slope(&path, beyond, 0.1));
        assert!(!line_hit_segment(&path, beyond, 0.15));
    }

    #[test]
    fn slope_policy_rejects_indeterminate_slopes() {
        let path = [Point::new(0.0, 0.0), Point::new(4.0, 0.0)];
        // On the first vertex: 0 / 0.
        assert!(!line_hit_slope(&path, Point::new(0.0, 0.0), 0.1));
        // Vertically aligned with the second vertex: division by zero.
        assert!(!line_hit_slope(&path, Point::new(4.0, 1.0), 0.1));
        // The bounded test handles the vertex.
        assert!(line_hit_segment(&path, Point::new(0.0, 0.0), 0.1));
    }

    #[test]
    fn segment_policy_uses_pixel_tolerance() {
        let scene = Scene::from(vec![Primitive::line([(0.0, 0.0), (0.0, 4.0), (4.0, 4.0)])]);
        let t = tester(LineHitTest::Segment { tolerance_px: 3.0 });
        // 2 px beside the vertical segment.
        let near = device((0.0, 2.0)) + kurbo::Vec2::new(2.0, 0.0);
        assert!(t.locate(near, &scene).is_some());
        // 5 px away.
        let far = device((0.0, 2.0)) + kurbo::Vec2::new(5.0, 0.0);
        assert!(t.locate(far, &scene).is_none());
    }

    #[test]
    fn degenerate_segments_fall_back_to_point_distance() {
        let path = [Point::new(1.0, 1.0), Point::new(1.0, 1.0)];
        assert!(line_hit_segment(&path, Point::new(1.05, 1.0), 0.1));
        assert!(!line_hit_segment(&path, Point::new(1.5, 1.0), 0.1));
    }

    #[test]
    fn short_lines_and_empty_scenes_never_hit() {
        let t = tester(LineHitTest::default());
        let scene = Scene::from(vec![Primitive::line([(0.0, 0.0)])]);
        assert!(t.locate(device((0.0, 0.0)), &scene).is_none());
        assert!(t.locate(device((0.0, 0.0)), &Scene::new()).is_none());
    }
}
