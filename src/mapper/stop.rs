use super::{emit, BoundaryMapper, PlanningHorizon};
use crate::decision::MainStop;
use crate::error::{MapStatus, MapperError, Result};
use crate::math::EPSILON;
use crate::reference_line::ReferenceLine;
use crate::st::{BoundaryType, STPoint, StGraphBoundary};
use log::{error, warn};

impl<'a> BoundaryMapper<'a> {
    /// Maps a stop at an enforced stop line.
    ///
    /// Skips the stop if the vehicle's stopping position lies beyond the mapped part
    /// of the reference line.
    pub fn map_main_decision_stop(
        &self,
        stop: &MainStop,
        reference_line: &dyn ReferenceLine,
        horizon: PlanningHorizon,
        boundaries: &mut Vec<StGraphBoundary>,
    ) -> Result<MapStatus> {
        let line = &stop.enforced_line;
        let map_point = self
            .lanes
            .smooth_point(&line.lane_id, line.distance_s)
            .ok_or_else(|| {
                error!("Cannot map stop, lane {} not found", line.lane_id);
                MapperError::LaneNotFound(line.lane_id.clone())
            })?;
        let sl_point = reference_line.to_frenet(map_point).ok_or_else(|| {
            error!("Cannot map stop, stop point is off the reference line");
            MapperError::FrenetConversion {
                x: map_point.x,
                y: map_point.y,
            }
        })?;

        let routing = &self.config.routing;
        let stop_s = sl_point.s
            - routing.backward_routing_distance
            - routing.decision_valid_stop_range
            - self.vehicle.front_edge_to_center;
        let max_stop_s = reference_line.length() - routing.backward_routing_distance;
        if stop_s < -EPSILON {
            warn!("Stop position {:.2} is behind the vehicle", stop_s);
        } else if stop_s >= max_stop_s {
            warn!(
                "Skipping stop, stop position {:.2} is beyond the reference line ({:.2})",
                stop_s, max_stop_s
            );
            return Ok(MapStatus::Skipped);
        }

        let s_min = f64::max(stop_s, 0.0);
        let s_max = f64::max(
            s_min + 1.0,
            f64::max(horizon.distance, reference_line.length()),
        );
        Ok(self.emit_stop_region(s_min, s_max, horizon.time, boundaries))
    }

    /// Maps the end of the mission, requiring the vehicle to stop
    /// after the success tunnel and within the planning horizon.
    pub fn map_mission_complete(
        &self,
        reference_line: &dyn ReferenceLine,
        horizon: PlanningHorizon,
        boundaries: &mut Vec<StGraphBoundary>,
    ) -> Result<MapStatus> {
        let s_min = self.config.st_boundary.success_tunnel;
        let s_max = f64::min(
            horizon.distance,
            reference_line.length() - self.config.routing.backward_routing_distance,
        );
        Ok(self.emit_stop_region(s_min, s_max, horizon.time, boundaries))
    }

    /// Adds a stop boundary covering `[s_min, s_max]` for the whole planning duration,
    /// unless that region is empty.
    fn emit_stop_region(
        &self,
        s_min: f64,
        s_max: f64,
        time: f64,
        boundaries: &mut Vec<StGraphBoundary>,
    ) -> MapStatus {
        let buffer = self.config.st_boundary.boundary_buffer;
        let points = [
            STPoint::new(s_min, 0.0),
            STPoint::new(s_min, time),
            STPoint::new(s_max + buffer, time),
            STPoint::new(s_max, 0.0),
        ];
        match StGraphBoundary::new(points, BoundaryType::Stop) {
            Some(boundary) => {
                emit(boundaries, boundary.with_characteristic_length(buffer));
                MapStatus::Mapped
            }
            None => MapStatus::Skipped,
        }
    }
}
