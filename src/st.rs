//! Station-time (S-T) graph primitives.

use serde::{Deserialize, Serialize};
pub use area::{has_positive_area, signed_area};

mod area;

/// A vertex time marking a boundary that extends without an upper time limit.
pub const UNBOUNDED_TIME: f64 = -1.0;

/// A point in the S-T plane.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct STPoint {
    /// The arc length along the path in m.
    pub s: f64,
    /// The time offset from the start of the planning cycle in s.
    pub t: f64,
}

impl STPoint {
    pub const fn new(s: f64, t: f64) -> Self {
        Self { s, t }
    }
}

/// How the speed optimizer must treat a boundary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoundaryType {
    #[default]
    Unknown,
    Stop,
    Follow,
    Yield,
    Overtake,
}

/// A forbidden quadrilateral region of the S-T plane.
///
/// Vertices are ordered: lower edge at the earlier time, lower edge at the later time,
/// upper edge at the later time, upper edge at the earlier time.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StGraphBoundary {
    points: [STPoint; 4],
    boundary_type: BoundaryType,
    characteristic_length: f64,
}

impl StGraphBoundary {
    /// Creates a boundary from its vertices, or `None` if their signed area is not positive.
    pub fn new(points: [STPoint; 4], boundary_type: BoundaryType) -> Option<Self> {
        has_positive_area(&points).then_some(Self {
            points,
            boundary_type,
            characteristic_length: 0.0,
        })
    }

    /// Sets the buffer distance the optimizer uses when smoothing around this boundary.
    pub fn with_characteristic_length(mut self, length: f64) -> Self {
        self.characteristic_length = length;
        self
    }

    /// The four vertices of the boundary.
    pub fn points(&self) -> &[STPoint; 4] {
        &self.points
    }

    pub fn boundary_type(&self) -> BoundaryType {
        self.boundary_type
    }

    pub fn characteristic_length(&self) -> f64 {
        self.characteristic_length
    }

    /// The signed area of the boundary, always positive.
    pub fn area(&self) -> f64 {
        signed_area(&self.points)
    }

    /// The smallest arc length covered by the boundary.
    pub fn min_s(&self) -> f64 {
        self.points.iter().map(|p| p.s).fold(f64::INFINITY, f64::min)
    }

    /// The largest arc length covered by the boundary.
    pub fn max_s(&self) -> f64 {
        self.points.iter().map(|p| p.s).fold(f64::NEG_INFINITY, f64::max)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rejects_inverted_boundary() {
        let points = [
            STPoint::new(0.0, 0.0),
            STPoint::new(0.0, 8.0),
            STPoint::new(10.0, 8.0),
            STPoint::new(10.0, 0.0),
        ];
        let boundary = StGraphBoundary::new(points, BoundaryType::Stop).unwrap();
        assert_eq!(boundary.boundary_type(), BoundaryType::Stop);
        assert_eq!(boundary.min_s(), 0.0);
        assert_eq!(boundary.max_s(), 10.0);

        let mut reversed = points;
        reversed.reverse();
        assert!(StGraphBoundary::new(reversed, BoundaryType::Stop).is_none());
    }

    #[test]
    fn boundary_serializes_to_json() {
        let points = [
            STPoint::new(0.0, 0.0),
            STPoint::new(0.0, 8.0),
            STPoint::new(10.0, 8.0),
            STPoint::new(10.0, 0.0),
        ];
        let boundary = StGraphBoundary::new(points, BoundaryType::Yield)
            .unwrap()
            .with_characteristic_length(0.5);
        let json = serde_json::to_value(&boundary).unwrap();
        assert_eq!(json["boundary_type"], "Yield");
        assert_eq!(json["characteristic_length"], 0.5);
        assert_eq!(json["points"][2]["s"], 10.0);
        assert_eq!(json["points"][2]["t"], 8.0);
    }
}
