use crate::obstacle::Obstacle;
use serde::{Deserialize, Serialize};

/// A stop line on a specific lane.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnforcedLine {
    pub lane_id: String,
    /// The arc length of the stop line along its lane, in m.
    pub distance_s: f64,
}

/// A mandated stop for the ego vehicle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MainStop {
    pub enforced_line: EnforcedLine,
    /// The distance from the ego vehicle to the stop, in m.
    pub distance_s: f64,
}

/// A decision applying to the ego vehicle itself.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum MainDecision {
    #[default]
    Cruise,
    Stop(MainStop),
    EmergencyStop,
    MissionComplete,
}

/// The decisions made in one planning cycle.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DecisionData {
    pub main_decision: MainDecision,
    pub static_obstacles: Vec<Obstacle>,
    pub dynamic_obstacles: Vec<Obstacle>,
}
