use crate::st::StGraphBoundary;
#[cfg(feature = "debug")]
use serde_json::json;

#[cfg(feature = "debug")]
thread_local!(
    static DEBUG_FRAME: std::cell::RefCell<Vec<serde_json::Value>> = Default::default();
);

#[allow(unused)]
pub fn debug_boundary(name: &str, boundary: &StGraphBoundary) {
    #[cfg(feature = "debug")]
    DEBUG_FRAME.with(|frame| {
        frame.borrow_mut().push(json!({
            "type": "boundary",
            "name": name,
            "boundary_type": boundary.boundary_type(),
            "points": boundary.points().map(|p| [p.s, p.t]),
        }))
    })
}

/// Takes the debugging information recorded on this thread since the last call, as a JSON array.
#[cfg(feature = "debug")]
pub fn take_debug_frame() -> serde_json::Value {
    json!(DEBUG_FRAME.with(|frame| frame.take()))
}
