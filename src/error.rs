use thiserror::Error;

/// Errors raised while mapping decisions onto S-T boundaries.
#[derive(Debug, Error)]
pub enum MapperError {
    #[error("planning time {0} is not a non-negative number")]
    NegativePlanningTime(f64),

    #[error("path has {0} points, at least 2 are required")]
    TooFewPathPoints(usize),

    #[error("lane {0} not found in the map")]
    LaneNotFound(String),

    #[error("point ({x}, {y}) cannot be converted to the reference line's Frenet frame")]
    FrenetConversion { x: f64, y: f64 },

    #[error("obstacle {0} has invalid dimensions or speed")]
    InvalidObstacle(String),

    #[error("failed to map main decision")]
    MainDecision(#[source] Box<MapperError>),

    #[error("failed to map static obstacle {id}")]
    StaticObstacle {
        id: String,
        #[source]
        source: Box<MapperError>,
    },

    #[error("failed to map follow decision for dynamic obstacle {id}")]
    FollowObstacle {
        id: String,
        #[source]
        source: Box<MapperError>,
    },

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// The outcome of a single mapping step that did not fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MapStatus {
    /// At least one boundary was added.
    Mapped,
    /// No boundary was needed or could be built. This is not an error.
    Skipped,
}

/// Convenience type alias for results using [`MapperError`].
pub type Result<T> = std::result::Result<T, MapperError>;
