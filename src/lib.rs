pub use cgmath;
pub use config::{MapperConfig, RoutingConfig, StBoundaryConfig};
#[cfg(feature = "debug")]
pub use debug::take_debug_frame;
pub use decision::{DecisionData, EnforcedLine, MainDecision, MainStop};
pub use error::{MapStatus, MapperError, Result};
pub use map::{LaneMap, LaneRepository};
pub use mapper::{BoundaryMapper, PlanningHorizon};
pub use obstacle::{ObjectDecisionType, Obstacle, PredictionTrajectory, TrajectoryPoint};
pub use path::{PathData, PathPoint};
pub use reference_line::{PolylineReferenceLine, ReferenceLine, SlPoint};
pub use st::{BoundaryType, STPoint, StGraphBoundary, UNBOUNDED_TIME};
pub use util::Interval;
pub use vehicle::VehicleParam;

mod config;
mod debug;
mod decision;
mod error;
pub mod map;
pub mod mapper;
pub mod math;
mod obstacle;
mod path;
mod reference_line;
pub mod st;
mod util;
mod vehicle;
