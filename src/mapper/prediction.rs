use super::overlap::find_overlap_range;
use super::{emit, BoundaryMapper};
use crate::error::{MapStatus, MapperError, Result};
use crate::obstacle::{ObjectDecisionType, Obstacle};
use crate::path::PathData;
use crate::st::{BoundaryType, STPoint, StGraphBoundary, UNBOUNDED_TIME};
use log::{info, warn};
use smallvec::SmallVec;

/// Fallback distances the lower edge of a yield boundary is pulled back by,
/// when the yield distance would take it behind the start of the path.
const YIELD_FALLBACKS: [f64; 2] = [2.0, 4.0]; // m

/// The decision-specific change applied to an obstacle's boundary.
#[derive(Clone, Copy, Debug)]
enum Adjustment {
    /// Pull the lower edge back by the follow distance, with no upper time limit.
    Follow { distance: f64 },
    /// Pull the lower edge back by the yield distance, never below zero.
    Yield { distance: f64 },
    /// Push the upper edge forward by the overtake distance.
    Overtake { distance: f64 },
}

impl<'a> BoundaryMapper<'a> {
    /// Maps an obstacle's predicted trajectories onto boundaries,
    /// one per trajectory that overlaps the path.
    ///
    /// # Parameters
    /// * `obstacle` - The obstacle to map
    /// * `decision` - The decision made about the obstacle
    /// * `path` - The ego vehicle's path
    /// * `timestamp` - The absolute time of the planning cycle, in s
    /// * `boundaries` - Receives the boundaries
    pub fn map_obstacle_with_prediction_trajectory(
        &self,
        obstacle: &Obstacle,
        decision: &ObjectDecisionType,
        path: &PathData,
        timestamp: f64,
        boundaries: &mut Vec<StGraphBoundary>,
    ) -> Result<MapStatus> {
        let dims_valid = [obstacle.length, obstacle.width]
            .iter()
            .all(|dim| dim.is_finite() && *dim >= 0.0);
        if !dims_valid || !obstacle.speed.is_finite() {
            return Err(MapperError::InvalidObstacle(obstacle.id.clone()));
        }

        let Some(adjustment) = self.adjustment(obstacle, decision) else {
            return Ok(MapStatus::Skipped);
        };

        if obstacle.trajectories.is_empty() {
            warn!("Obstacle {} has no prediction trajectory", obstacle.id);
        }

        let config = &self.config.st_boundary;
        let path_points = path.points();
        let mut status = MapStatus::Skipped;

        for trajectory in &obstacle.trajectories {
            let mut lower = SmallVec::<[STPoint; 16]>::new();
            let mut upper = SmallVec::<[STPoint; 16]>::new();

            for (idx, point) in trajectory.points.iter().enumerate() {
                let t = trajectory.time_of(point, timestamp);
                let obstacle_box = obstacle.footprint(point, config.expending_coeff);
                let range = find_overlap_range(
                    path_points,
                    &self.vehicle,
                    &obstacle_box,
                    config.boundary_buffer,
                );
                match range {
                    Some((low, high)) => {
                        lower.push(STPoint::new(path_points[low].s - config.point_extension, t));
                        upper.push(STPoint::new(path_points[high].s + config.point_extension, t));
                    }
                    None => {
                        if !matches!(adjustment, Adjustment::Follow { .. }) {
                            info!(
                                "Obstacle {} point [{}] does not overlap the path",
                                obstacle.id, idx
                            );
                        }
                    }
                }
            }

            let Some(mut points) = self.candidate(&lower, &upper) else {
                continue;
            };
            if lower[0].t > lower[lower.len() - 1].t || upper[0].t > upper[upper.len() - 1].t {
                warn!("Lower/upper points of obstacle {} are reversed", obstacle.id);
            }
            let boundary_type = adjustment.apply(&mut points);

            if let Some(boundary) = StGraphBoundary::new(points, boundary_type) {
                emit(boundaries, boundary);
                status = MapStatus::Mapped;
            }
        }

        Ok(status)
    }

    /// Builds the unadjusted boundary spanning the first and last overlap bounds.
    /// The series need not be ordered in time. Returns `None` if either series is empty.
    fn candidate(&self, lower: &[STPoint], upper: &[STPoint]) -> Option<[STPoint; 4]> {
        let config = &self.config.st_boundary;
        let buffer = config.follow_buffer;
        let (lower_first, lower_last) = (lower.first()?, lower.last()?);
        let (upper_first, upper_last) = (upper.first()?, upper.last()?);
        Some([
            STPoint::new(lower_first.s - buffer, lower_first.t),
            STPoint::new(lower_last.s - buffer, lower_last.t),
            STPoint::new(upper_last.s + buffer + config.boundary_buffer, upper_last.t),
            STPoint::new(upper_first.s + buffer, upper_first.t),
        ])
    }

    /// Determines how the boundary for a decision is adjusted,
    /// or `None` if the decision does not constrain the speed plan through a boundary.
    fn adjustment(
        &self,
        obstacle: &Obstacle,
        decision: &ObjectDecisionType,
    ) -> Option<Adjustment> {
        match *decision {
            ObjectDecisionType::Follow { distance_s } => {
                let min_time = self.config.st_boundary.minimal_follow_time;
                let distance = f64::max(obstacle.speed * min_time, distance_s.abs())
                    + self.vehicle.front_edge_to_center;
                Some(Adjustment::Follow { distance })
            }
            ObjectDecisionType::Yield { distance_s } => Some(Adjustment::Yield {
                distance: distance_s.abs(),
            }),
            ObjectDecisionType::Overtake { distance_s } => Some(Adjustment::Overtake {
                distance: distance_s.abs(),
            }),
            ObjectDecisionType::Ignore
            | ObjectDecisionType::Stop { .. }
            | ObjectDecisionType::Nudge { .. } => None,
        }
    }
}

impl Adjustment {
    /// Adjusts the boundary's vertices and returns the resulting boundary type.
    fn apply(&self, points: &mut [STPoint; 4]) -> BoundaryType {
        match *self {
            Adjustment::Follow { distance } => {
                points[0].s -= distance;
                points[1].s -= distance;
                points[3].t = UNBOUNDED_TIME;
                BoundaryType::Follow
            }
            Adjustment::Yield { distance } => {
                for (point, fallback) in points.iter_mut().zip(YIELD_FALLBACKS) {
                    let pulled = if point.s - distance < 0.0 {
                        point.s - fallback
                    } else {
                        point.s - distance
                    };
                    point.s = f64::max(pulled, 0.0);
                }
                BoundaryType::Yield
            }
            Adjustment::Overtake { distance } => {
                points[2].s += distance;
                points[3].s += distance;
                BoundaryType::Unknown
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::MapperConfig;
    use crate::map::LaneMap;
    use crate::obstacle::{PredictionTrajectory, TrajectoryPoint};
    use crate::vehicle::VehicleParam;
    use assert_approx_eq::assert_approx_eq;

    fn config() -> MapperConfig {
        let mut config = MapperConfig::default();
        let st = &mut config.st_boundary;
        st.boundary_buffer = 0.0;
        st.expending_coeff = 1.0;
        st.point_extension = 1.0;
        st.follow_buffer = 0.5;
        st.minimal_follow_time = 2.0;
        config
    }

    fn vehicle() -> VehicleParam {
        VehicleParam {
            length: 4.0,
            width: 2.0,
            front_edge_to_center: 2.0,
        }
    }

    /// A straight path along the x axis with a point every 10 m.
    fn path() -> PathData {
        let coords: Vec<_> = (0..10).map(|i| (10.0 * i as f64, 0.0)).collect();
        PathData::from_xy(&coords)
    }

    /// An obstacle crossing the path at x = 30, overlapping path points 2 to 4.
    fn crossing(decision: ObjectDecisionType, ys: &[f64]) -> Obstacle {
        let points = ys
            .iter()
            .enumerate()
            .map(|(i, y)| TrajectoryPoint::new(30.0, *y, 0.0, i as f64))
            .collect();
        Obstacle {
            id: "crossing".into(),
            speed: 3.0,
            length: 30.0,
            width: 2.0,
            trajectories: vec![PredictionTrajectory::new(points, 10.0)],
            decisions: vec![decision],
        }
    }

    fn map(obstacle: &Obstacle) -> (MapStatus, Vec<StGraphBoundary>) {
        let lanes = LaneMap::new();
        let mapper = BoundaryMapper::new(config(), vehicle(), &lanes);
        let mut boundaries = vec![];
        let status = mapper
            .map_obstacle_with_prediction_trajectory(
                obstacle,
                &obstacle.decisions[0],
                &path(),
                10.5,
                &mut boundaries,
            )
            .unwrap();
        (status, boundaries)
    }

    #[test]
    fn follow_boundary() {
        let obstacle = crossing(ObjectDecisionType::Follow { distance_s: -4.0 }, &[0.0; 3]);
        let (status, boundaries) = map(&obstacle);
        assert_eq!(status, MapStatus::Mapped);
        assert_eq!(boundaries.len(), 1);

        // Follow distance: max(3 * 2, 4) + 2 = 8.
        let boundary = &boundaries[0];
        let points = boundary.points();
        assert_eq!(boundary.boundary_type(), BoundaryType::Follow);
        assert_approx_eq!(points[0].s, 20.0 - 1.0 - 0.5 - 8.0);
        assert_approx_eq!(points[1].s, 20.0 - 1.0 - 0.5 - 8.0);
        assert_approx_eq!(points[2].s, 40.0 + 1.0 + 0.5);
        assert_approx_eq!(points[3].s, 40.0 + 1.0 + 0.5);
        assert_approx_eq!(points[0].t, -0.5);
        assert_approx_eq!(points[1].t, 1.5);
        assert_approx_eq!(points[2].t, 1.5);
        assert_eq!(points[3].t, UNBOUNDED_TIME);
    }

    #[test]
    fn yield_boundary() {
        let obstacle = crossing(ObjectDecisionType::Yield { distance_s: 5.0 }, &[0.0; 3]);
        let (_, boundaries) = map(&obstacle);
        let boundary = &boundaries[0];
        assert_eq!(boundary.boundary_type(), BoundaryType::Yield);
        assert_approx_eq!(boundary.points()[0].s, 18.5 - 5.0);
        assert_approx_eq!(boundary.points()[1].s, 18.5 - 5.0);
        assert_approx_eq!(boundary.points()[2].s, 41.5);
    }

    #[test]
    fn yield_fallbacks_never_go_negative() {
        let mut points = [
            STPoint::new(3.0, 0.0),
            STPoint::new(3.0, 2.0),
            STPoint::new(10.0, 2.0),
            STPoint::new(10.0, 0.0),
        ];
        let boundary_type = Adjustment::Yield { distance: 5.0 }.apply(&mut points);
        assert_eq!(boundary_type, BoundaryType::Yield);
        assert_approx_eq!(points[0].s, 1.0);
        assert_approx_eq!(points[1].s, 0.0);
        assert_approx_eq!(points[2].s, 10.0);
        assert_approx_eq!(points[3].s, 10.0);
    }

    #[test]
    fn overtake_boundary() {
        let obstacle = crossing(ObjectDecisionType::Overtake { distance_s: -3.0 }, &[0.0; 3]);
        let (_, boundaries) = map(&obstacle);
        let points = boundaries[0].points();
        assert_eq!(boundaries[0].boundary_type(), BoundaryType::Unknown);
        assert_approx_eq!(points[0].s, 18.5);
        assert_approx_eq!(points[1].s, 18.5);
        assert_approx_eq!(points[2].s, 41.5 + 3.0);
        assert_approx_eq!(points[3].s, 41.5 + 3.0);
    }

    #[test]
    fn samples_off_the_path_are_skipped() {
        let obstacle = crossing(ObjectDecisionType::Yield { distance_s: 1.0 }, &[0.0, 20.0, 0.0]);
        let (_, boundaries) = map(&obstacle);
        let points = boundaries[0].points();
        assert_approx_eq!(points[0].t, -0.5);
        assert_approx_eq!(points[1].t, 1.5);
    }

    #[test]
    fn no_overlap_is_skipped() {
        let obstacle = crossing(ObjectDecisionType::Yield { distance_s: 1.0 }, &[20.0; 3]);
        let (status, boundaries) = map(&obstacle);
        assert_eq!(status, MapStatus::Skipped);
        assert!(boundaries.is_empty());
    }

    #[test]
    fn single_sample_has_no_area() {
        let obstacle = crossing(ObjectDecisionType::Yield { distance_s: 1.0 }, &[0.0]);
        let (status, boundaries) = map(&obstacle);
        assert_eq!(status, MapStatus::Skipped);
        assert!(boundaries.is_empty());
    }

    #[test]
    fn reversed_series_reach_the_area_check() {
        // Samples run backwards in time, so the lower series starts at t = 1.5
        // and ends at t = -0.5.
        let mut obstacle = crossing(ObjectDecisionType::Yield { distance_s: 1.0 }, &[0.0; 3]);
        for (point, time) in obstacle.trajectories[0].points.iter_mut().zip([2.0, 1.0, 0.0]) {
            point.relative_time = time;
        }

        let lanes = LaneMap::new();
        let mapper = BoundaryMapper::new(config(), vehicle(), &lanes);
        let lower = [
            STPoint::new(19.0, 1.5),
            STPoint::new(19.0, 0.5),
            STPoint::new(19.0, -0.5),
        ];
        let upper = lower.map(|p| STPoint::new(41.0, p.t));
        let mut points = mapper.candidate(&lower, &upper).unwrap();
        assert_approx_eq!(points[0].t, 1.5);
        assert_approx_eq!(points[1].t, -0.5);
        Adjustment::Yield { distance: 1.0 }.apply(&mut points);
        assert!(crate::st::signed_area(&points) < 0.0);

        // The reversed winding fails the area check, so nothing is emitted.
        let (status, boundaries) = map(&obstacle);
        assert_eq!(status, MapStatus::Skipped);
        assert!(boundaries.is_empty());
    }

    #[test]
    fn one_boundary_per_trajectory() {
        let mut obstacle = crossing(ObjectDecisionType::Yield { distance_s: 1.0 }, &[0.0; 3]);
        let trajectory = obstacle.trajectories[0].clone();
        obstacle.trajectories.push(trajectory);
        obstacle.trajectories.push(PredictionTrajectory::default());
        let (status, boundaries) = map(&obstacle);
        assert_eq!(status, MapStatus::Mapped);
        assert_eq!(boundaries.len(), 2);
        assert_eq!(boundaries[0], boundaries[1]);
    }

    #[test]
    fn invalid_dimensions_are_an_error() {
        let mut obstacle = crossing(ObjectDecisionType::Yield { distance_s: 1.0 }, &[0.0; 3]);
        obstacle.width = f64::NAN;
        let lanes = LaneMap::new();
        let mapper = BoundaryMapper::new(config(), vehicle(), &lanes);
        let mut boundaries = vec![];
        let result = mapper.map_obstacle_with_prediction_trajectory(
            &obstacle,
            &obstacle.decisions[0],
            &path(),
            0.0,
            &mut boundaries,
        );
        assert!(matches!(result, Err(MapperError::InvalidObstacle(_))));
    }
}
