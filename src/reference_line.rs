use crate::math::{Point2d, Polyline};

/// A point in a reference line's Frenet frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SlPoint {
    /// The arc length along the reference line in m.
    pub s: f64,
    /// The lateral offset, positive to the left, in m.
    pub l: f64,
}

/// The line that Frenet coordinates are measured against.
pub trait ReferenceLine {
    /// The length of the reference line in m.
    fn length(&self) -> f64;

    /// Converts a world space point into the Frenet frame.
    /// Returns `None` if the point cannot be mapped.
    fn to_frenet(&self, point: Point2d) -> Option<SlPoint>;
}

/// A reference line defined by a polyline.
#[derive(Clone, Debug)]
pub struct PolylineReferenceLine {
    line: Polyline,
    /// Points further than this from the line cannot be mapped.
    max_lateral_offset: f64,
}

impl PolylineReferenceLine {
    /// Creates a reference line that maps every finite point.
    pub fn new(line: Polyline) -> Self {
        Self {
            line,
            max_lateral_offset: f64::INFINITY,
        }
    }

    /// Limits how far from the line a point may be and still be mapped.
    pub fn with_max_lateral_offset(mut self, offset: f64) -> Self {
        self.max_lateral_offset = offset;
        self
    }
}

impl ReferenceLine for PolylineReferenceLine {
    fn length(&self) -> f64 {
        self.line.length()
    }

    /// Points before the start or past the end are mapped onto
    /// the extensions of the end segments.
    fn to_frenet(&self, point: Point2d) -> Option<SlPoint> {
        if !point.x.is_finite() || !point.y.is_finite() {
            return None;
        }
        let (s, l) = self.line.project(point);
        (l.abs() <= self.max_lateral_offset).then_some(SlPoint { s, l })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn frenet_conversion() {
        let line = Polyline::new([Point2d::new(0.0, 0.0), Point2d::new(50.0, 0.0)]).unwrap();
        let line = PolylineReferenceLine::new(line);
        assert_approx_eq!(line.length(), 50.0);

        let sl = line.to_frenet(Point2d::new(20.0, -1.0)).unwrap();
        assert_approx_eq!(sl.s, 20.0);
        assert_approx_eq!(sl.l, -1.0);

        let sl = line.to_frenet(Point2d::new(60.0, 0.5)).unwrap();
        assert_approx_eq!(sl.s, 60.0);

        let line = line.with_max_lateral_offset(2.0);
        assert!(line.to_frenet(Point2d::new(20.0, -3.0)).is_none());
        assert!(line.to_frenet(Point2d::new(f64::NAN, 0.0)).is_none());
    }
}
