use crate::error::Result;
use crate::math::{heading_vector, Box2d, Point2d};
use crate::path::PathPoint;
use serde::{Deserialize, Serialize};

/// The dimensions of the ego vehicle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleParam {
    /// The vehicle length in m.
    pub length: f64,
    /// The vehicle width in m.
    pub width: f64,
    /// Distance from the rear axle centre to the front bumper, in m.
    pub front_edge_to_center: f64,
}

impl Default for VehicleParam {
    fn default() -> Self {
        Self {
            length: 4.933,
            width: 2.11,
            front_edge_to_center: 3.89,
        }
    }
}

impl VehicleParam {
    /// Parses vehicle parameters from JSON. Missing fields take their default values.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The vehicle's footprint when its rear axle sits on `point`,
    /// grown by `buffer` on every side.
    pub fn footprint(&self, point: &PathPoint, buffer: f64) -> Box2d {
        let centre_ahead = self.front_edge_to_center - 0.5 * self.length;
        let centre =
            Point2d::new(point.x, point.y) + heading_vector(point.theta) * centre_ahead;
        Box2d::new(
            centre,
            point.theta,
            self.length + 2.0 * buffer,
            self.width + 2.0 * buffer,
        )
    }
}
