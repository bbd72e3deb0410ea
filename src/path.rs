use serde::{Deserialize, Serialize};

/// A pose on the ego vehicle's path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PathPoint {
    /// World x coordinate in m.
    pub x: f64,
    /// World y coordinate in m.
    pub y: f64,
    /// Heading in radians.
    pub theta: f64,
    /// Arc length from the start of the path in m.
    pub s: f64,
}

impl PathPoint {
    pub const fn new(x: f64, y: f64, theta: f64, s: f64) -> Self {
        Self { x, y, theta, s }
    }
}

/// The fixed path the speed plan is computed for.
/// Points are ordered by non-decreasing arc length.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PathData {
    points: Vec<PathPoint>,
}

impl PathData {
    pub fn new(points: Vec<PathPoint>) -> Self {
        Self { points }
    }

    /// Builds a path by accumulating arc length over a sequence of `(x, y)` coordinates.
    /// Each point's heading faces the next point; the last point copies its predecessor.
    pub fn from_xy(coords: &[(f64, f64)]) -> Self {
        let mut points: Vec<PathPoint> = Vec::with_capacity(coords.len());
        for (idx, &(x, y)) in coords.iter().enumerate() {
            let theta = match (coords.get(idx + 1), points.last()) {
                (Some(&(nx, ny)), _) => (ny - y).atan2(nx - x),
                (None, Some(prev)) => prev.theta,
                (None, None) => 0.0,
            };
            let s = points
                .last()
                .map(|prev| prev.s + (x - prev.x).hypot(y - prev.y))
                .unwrap_or(0.0);
            points.push(PathPoint::new(x, y, theta, s));
        }
        Self { points }
    }

    pub fn points(&self) -> &[PathPoint] {
        &self.points
    }

    pub fn num_points(&self) -> usize {
        self.points.len()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn accumulates_arc_length() {
        let path = PathData::from_xy(&[(0.0, 0.0), (3.0, 4.0), (3.0, 10.0)]);
        let s: Vec<_> = path.points().iter().map(|p| p.s).collect();
        assert_eq!(s, vec![0.0, 5.0, 11.0]);
        assert_approx_eq!(path.points()[1].theta, std::f64::consts::FRAC_PI_2);
        assert_approx_eq!(path.points()[2].theta, std::f64::consts::FRAC_PI_2);
    }
}
