//! Lane geometry lookup.

use crate::math::{Point2d, Polyline};
use std::collections::HashMap;

/// Resolves lane-relative positions to world space.
pub trait LaneRepository {
    /// The smoothed world space point `s` m along the given lane,
    /// or `None` if there is no such lane.
    fn smooth_point(&self, lane_id: &str, s: f64) -> Option<Point2d>;
}

/// An in-memory collection of lane centre lines.
#[derive(Clone, Debug, Default)]
pub struct LaneMap {
    lanes: HashMap<String, Polyline>,
}

impl LaneMap {
    pub fn new() -> Self {
        Default::default()
    }

    /// Adds or replaces a lane.
    pub fn add_lane(&mut self, id: impl Into<String>, centre_line: Polyline) {
        self.lanes.insert(id.into(), centre_line);
    }
}

impl LaneRepository for LaneMap {
    fn smooth_point(&self, lane_id: &str, s: f64) -> Option<Point2d> {
        self.lanes.get(lane_id).map(|lane| lane.sample(s).pos)
    }
}
