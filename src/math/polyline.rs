use super::{project_local, rot90, Point2d, Vector2d, EPSILON};
use crate::util::Interval;
use cgmath::prelude::*;

/// A piecewise linear curve, parameterised by arc length.
#[derive(Clone, Debug)]
pub struct Polyline {
    /// The vertices of the polyline.
    points: Vec<Point2d>,
    /// The accumulated arc length at each vertex.
    dists: Vec<f64>,
}

/// The result of sampling a [Polyline].
#[derive(Clone, Copy, Debug)]
pub struct PolylineSample {
    /// The position on the polyline.
    pub pos: Point2d,
    /// The tangent unit vector of the polyline.
    pub tan: Vector2d,
}

impl Polyline {
    /// Creates a polyline through the given points.
    /// Consecutive duplicate points are dropped.
    /// Returns `None` if any point is not finite, or fewer than two distinct points remain.
    pub fn new(points: impl IntoIterator<Item = Point2d>) -> Option<Self> {
        let mut out: Vec<Point2d> = vec![];
        let mut dists = vec![];
        for point in points {
            if !point.x.is_finite() || !point.y.is_finite() {
                return None;
            }
            match out.last() {
                None => dists.push(0.0),
                Some(last) => {
                    let dist = last.distance(point);
                    if dist < EPSILON {
                        continue;
                    }
                    dists.push(dists[dists.len() - 1] + dist);
                }
            }
            out.push(point);
        }
        if out.len() < 2 {
            return None;
        }
        Some(Self { points: out, dists })
    }

    /// The length of the polyline.
    pub fn length(&self) -> f64 {
        self.bounds().length()
    }

    /// The range of valid arc length values.
    pub fn bounds(&self) -> Interval<f64> {
        Interval::new(0.0, self.dists[self.dists.len() - 1])
    }

    /// Samples the polyline at the given arc length, clamped to the polyline's ends.
    pub fn sample(&self, s: f64) -> PolylineSample {
        let s = self.bounds().clamp(s);
        let idx = self.segment_at(s);
        let (start, tan) = self.segment(idx);
        PolylineSample {
            pos: start + tan * (s - self.dists[idx]),
            tan,
        }
    }

    /// Projects a point onto the polyline, returning its arc length
    /// and its lateral offset (positive to the left of travel).
    ///
    /// Points beyond either end are projected onto the extension of the end segment,
    /// so the returned arc length may lie outside of [Self::bounds].
    pub fn project(&self, point: Point2d) -> (f64, f64) {
        let last = self.points.len() - 2;
        (0..=last)
            .map(|idx| {
                let (start, tan) = self.segment(idx);
                let local = project_local(point, start, tan, rot90(tan));
                let lo = if idx == 0 { f64::NEG_INFINITY } else { 0.0 };
                let hi = if idx == last {
                    f64::INFINITY
                } else {
                    self.dists[idx + 1] - self.dists[idx]
                };
                let along = local.x.clamp(lo, hi);
                let dist2 = (local.x - along).powi(2) + local.y.powi(2);
                (dist2, self.dists[idx] + along, local.y)
            })
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(_, s, l)| (s, l))
            .unwrap_or_default()
    }

    /// The index of the segment containing arc length `s`.
    fn segment_at(&self, s: f64) -> usize {
        let idx = self.dists.partition_point(|d| *d <= s);
        idx.clamp(1, self.points.len() - 1) - 1
    }

    /// The start point and unit tangent of a segment.
    fn segment(&self, idx: usize) -> (Point2d, Vector2d) {
        let start = self.points[idx];
        let tan = (self.points[idx + 1] - start).normalize();
        (start, tan)
    }
}
