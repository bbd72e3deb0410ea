//! Tunable parameters of the boundary mapper.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Parameters shaping the S-T boundaries.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StBoundaryConfig {
    /// Extra arc length added to the far edge of each boundary, in m.
    pub boundary_buffer: f64,
    /// Arc length at which a mission-complete stop region begins, in m.
    pub success_tunnel: f64,
    /// The minimum time gap to keep behind a followed obstacle, in s.
    pub minimal_follow_time: f64,
    /// Scale factor applied to obstacle length and width.
    pub expending_coeff: f64,
    /// Distance each overlap bound is pushed outward, in m.
    pub point_extension: f64,
    /// Distance the lower and upper edges are pushed apart, in m.
    pub follow_buffer: f64,
}

impl Default for StBoundaryConfig {
    fn default() -> Self {
        Self {
            boundary_buffer: 0.1,
            success_tunnel: 1.5,
            minimal_follow_time: 2.0,
            expending_coeff: 1.0,
            point_extension: 1.0,
            follow_buffer: 1.0,
        }
    }
}

/// All parameters consumed by the [BoundaryMapper](crate::BoundaryMapper).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapperConfig {
    pub st_boundary: StBoundaryConfig,
    pub routing: RoutingConfig,
}

/// Parameters tied to routing and stop decisions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutingConfig {
    /// Arc length of the reference line lying behind the vehicle, in m.
    pub backward_routing_distance: f64,
    /// Margin kept between a stop line and the stopped vehicle's front, in m.
    pub decision_valid_stop_range: f64,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            backward_routing_distance: 100.0,
            decision_valid_stop_range: 0.5,
        }
    }
}

impl MapperConfig {
    /// Parses a configuration from JSON. Missing fields take their default values.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = MapperConfig::from_json(
            r#"{ "st_boundary": { "follow_buffer": 2.5 }, "routing": { "backward_routing_distance": 10 } }"#,
        )
        .unwrap();
        assert_eq!(config.st_boundary.follow_buffer, 2.5);
        assert_eq!(config.st_boundary.boundary_buffer, 0.1);
        assert_eq!(config.routing.backward_routing_distance, 10.0);
        assert_eq!(config.routing.decision_valid_stop_range, 0.5);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(MapperConfig::from_json("{ \"st_boundary\": 3 }").is_err());
    }
}
