use crate::math::{Box2d, Point2d};
use crate::path::PathPoint;
use serde::{Deserialize, Serialize};

/// A perceived object the speed plan may need to react to.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Obstacle {
    /// The obstacle's ID.
    pub id: String,
    /// The obstacle's speed in m/s.
    pub speed: f64,
    /// The obstacle's length in m.
    pub length: f64,
    /// The obstacle's width in m.
    pub width: f64,
    /// Hypotheses of the obstacle's future motion.
    pub trajectories: Vec<PredictionTrajectory>,
    /// Decisions made about this obstacle by the upstream decider.
    pub decisions: Vec<ObjectDecisionType>,
}

/// One predicted future motion of an obstacle.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PredictionTrajectory {
    /// The sampled points, ordered by increasing `relative_time`.
    pub points: Vec<TrajectoryPoint>,
    /// The absolute time that `relative_time` is measured from, in s.
    pub start_timestamp: f64,
}

/// A timed pose on a trajectory.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    pub path_point: PathPoint,
    /// Velocity in m/s.
    pub v: f64,
    /// Acceleration in m/s^2.
    pub a: f64,
    /// Time since the trajectory's start timestamp, in s.
    pub relative_time: f64,
}

/// A decision about how the ego vehicle treats an obstacle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum ObjectDecisionType {
    Ignore,
    Stop { distance_s: f64 },
    /// Stay behind the obstacle, `distance_s` behind it.
    Follow { distance_s: f64 },
    /// Let the obstacle pass first, keeping `distance_s` clear of its path.
    Yield { distance_s: f64 },
    /// Pass ahead of the obstacle, `distance_s` in front of it.
    Overtake { distance_s: f64 },
    Nudge { distance_l: f64 },
}

impl TrajectoryPoint {
    pub fn new(x: f64, y: f64, theta: f64, relative_time: f64) -> Self {
        Self {
            path_point: PathPoint::new(x, y, theta, 0.0),
            relative_time,
            ..Default::default()
        }
    }
}

impl PredictionTrajectory {
    pub fn new(points: Vec<TrajectoryPoint>, start_timestamp: f64) -> Self {
        Self {
            points,
            start_timestamp,
        }
    }

    /// The time of one of this trajectory's points, relative to the given cycle timestamp.
    pub fn time_of(&self, point: &TrajectoryPoint, timestamp: f64) -> f64 {
        point.relative_time + self.start_timestamp - timestamp
    }
}

impl Obstacle {
    /// The obstacle's footprint at a trajectory point, with its length and width scaled by `coeff`.
    pub fn footprint(&self, point: &TrajectoryPoint, coeff: f64) -> Box2d {
        let pose = &point.path_point;
        Box2d::new(
            Point2d::new(pose.x, pose.y),
            pose.theta,
            self.length * coeff,
            self.width * coeff,
        )
    }
}
