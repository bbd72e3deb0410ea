//! Maps the decisions of one planning cycle onto S-T boundaries.

use crate::config::MapperConfig;
#[cfg(feature = "debug")]
use crate::debug::debug_boundary;
use crate::decision::{DecisionData, MainDecision};
use crate::error::{MapStatus, MapperError, Result};
use crate::map::LaneRepository;
use crate::obstacle::{ObjectDecisionType, Obstacle, TrajectoryPoint};
use crate::path::PathData;
use crate::reference_line::ReferenceLine;
use crate::st::StGraphBoundary;
use crate::vehicle::VehicleParam;
use log::{debug, error};

mod overlap;
mod prediction;
mod stop;

pub use overlap::{check_overlap, find_overlap_range};

/// The extent of the speed plan.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlanningHorizon {
    /// The planned distance along the path in m.
    pub distance: f64,
    /// The planned duration in s.
    pub time: f64,
}

/// Builds the S-T boundaries consumed by the QP speed optimizer.
pub struct BoundaryMapper<'a> {
    config: MapperConfig,
    vehicle: VehicleParam,
    lanes: &'a dyn LaneRepository,
}

impl<'a> BoundaryMapper<'a> {
    /// Creates a new mapper.
    ///
    /// # Parameters
    /// * `config` - The mapper's tunable parameters
    /// * `vehicle` - The ego vehicle's dimensions
    /// * `lanes` - Used to locate stop lines
    pub fn new(
        config: MapperConfig,
        vehicle: VehicleParam,
        lanes: &'a dyn LaneRepository,
    ) -> Self {
        Self {
            config,
            vehicle,
            lanes,
        }
    }

    /// Computes the boundaries for one planning cycle.
    ///
    /// Failing to map a main decision, a static obstacle or a follow decision is an error.
    /// Failing to map a yield or overtake decision stops processing, and the boundaries
    /// accumulated so far are returned successfully.
    ///
    /// # Parameters
    /// * `initial_point` - The ego vehicle's state at the start of the plan
    /// * `timestamp` - The absolute time of the planning cycle, in s
    /// * `decision_data` - The decisions to map
    /// * `path` - The ego vehicle's fixed path
    /// * `reference_line` - The line stop decisions are located on
    /// * `horizon` - The planned distance and duration
    pub fn get_graph_boundary(
        &self,
        initial_point: &TrajectoryPoint,
        timestamp: f64,
        decision_data: &DecisionData,
        path: &PathData,
        reference_line: &dyn ReferenceLine,
        horizon: PlanningHorizon,
    ) -> Result<Vec<StGraphBoundary>> {
        if horizon.time.is_nan() || horizon.time < 0.0 {
            error!("Cannot map boundaries, planning time {} < 0", horizon.time);
            return Err(MapperError::NegativePlanningTime(horizon.time));
        }
        if path.num_points() < 2 {
            error!(
                "Cannot map boundaries, too few path points: {}",
                path.num_points()
            );
            return Err(MapperError::TooFewPathPoints(path.num_points()));
        }

        let mut boundaries = vec![];

        let main_status = match &decision_data.main_decision {
            MainDecision::Stop(stop) => {
                self.map_main_decision_stop(stop, reference_line, horizon, &mut boundaries)
            }
            MainDecision::MissionComplete => {
                self.map_mission_complete(reference_line, horizon, &mut boundaries)
            }
            MainDecision::Cruise | MainDecision::EmergencyStop => Ok(MapStatus::Skipped),
        };
        main_status.map_err(|err| {
            error!("Failed to map main decision: {}", err);
            MapperError::MainDecision(Box::new(err))
        })?;

        for obstacle in &decision_data.static_obstacles {
            self.map_obstacle_without_trajectory(initial_point, obstacle, path, horizon)
                .map_err(|err| {
                    error!("Failed to map static obstacle {}: {}", obstacle.id, err);
                    MapperError::StaticObstacle {
                        id: obstacle.id.clone(),
                        source: Box::new(err),
                    }
                })?;
        }

        for obstacle in &decision_data.dynamic_obstacles {
            for decision in &obstacle.decisions {
                match decision {
                    ObjectDecisionType::Follow { .. } => {
                        self.map_obstacle_with_planning(initial_point, obstacle, path, horizon)
                            .map_err(|err| {
                                error!("Failed to map follow obstacle {}: {}", obstacle.id, err);
                                MapperError::FollowObstacle {
                                    id: obstacle.id.clone(),
                                    source: Box::new(err),
                                }
                            })?;
                    }
                    ObjectDecisionType::Yield { .. } | ObjectDecisionType::Overtake { .. } => {
                        let status = self.map_obstacle_with_prediction_trajectory(
                            obstacle,
                            decision,
                            path,
                            timestamp,
                            &mut boundaries,
                        );
                        // Keep what has been mapped so far.
                        if let Err(err) = status {
                            error!("Failed to map dynamic obstacle {}: {}", obstacle.id, err);
                            return Ok(boundaries);
                        }
                    }
                    ObjectDecisionType::Ignore
                    | ObjectDecisionType::Stop { .. }
                    | ObjectDecisionType::Nudge { .. } => {}
                }
            }
        }

        debug!("Mapped {} st boundaries", boundaries.len());
        Ok(boundaries)
    }

    /// Maps an obstacle that has no predicted motion. Contributes no boundaries.
    fn map_obstacle_without_trajectory(
        &self,
        _initial_point: &TrajectoryPoint,
        _obstacle: &Obstacle,
        _path: &PathData,
        _horizon: PlanningHorizon,
    ) -> Result<MapStatus> {
        Ok(MapStatus::Skipped)
    }

    /// Maps a followed obstacle against the planned path. Contributes no boundaries.
    fn map_obstacle_with_planning(
        &self,
        _initial_point: &TrajectoryPoint,
        _obstacle: &Obstacle,
        _path: &PathData,
        _horizon: PlanningHorizon,
    ) -> Result<MapStatus> {
        Ok(MapStatus::Skipped)
    }
}

/// Appends a boundary to the output.
fn emit(boundaries: &mut Vec<StGraphBoundary>, boundary: StGraphBoundary) {
    debug!(
        "{:?} boundary, s in [{:.2}, {:.2}]",
        boundary.boundary_type(),
        boundary.min_s(),
        boundary.max_s()
    );
    #[cfg(feature = "debug")]
    debug_boundary("st boundary", &boundary);
    boundaries.push(boundary);
}
