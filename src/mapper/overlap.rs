use crate::math::Box2d;
use crate::path::PathPoint;
use crate::vehicle::VehicleParam;

/// Whether the ego vehicle, with its rear axle at `point` and grown by `buffer`,
/// overlaps the obstacle's footprint.
pub fn check_overlap(
    point: &PathPoint,
    vehicle: &VehicleParam,
    obstacle: &Box2d,
    buffer: f64,
) -> bool {
    vehicle.footprint(point, buffer).has_overlap(obstacle)
}

/// Finds the first and last path points at which the ego vehicle overlaps the obstacle.
///
/// Two cursors walk inwards from either end of the path, each stopping at the first
/// overlap it meets. Returns `None` unless both cursors find an overlap before meeting,
/// so an overlap confined to a single path point is not reported.
pub fn find_overlap_range(
    points: &[PathPoint],
    vehicle: &VehicleParam,
    obstacle: &Box2d,
    buffer: f64,
) -> Option<(usize, usize)> {
    let overlaps = |idx: usize| check_overlap(&points[idx], vehicle, obstacle, buffer);

    let mut low = 0;
    let mut high = points.len().checked_sub(1)?;
    let mut find_low = false;
    let mut find_high = false;

    while low < high && !(find_low && find_high) {
        if !find_low {
            if overlaps(low) {
                find_low = true;
            } else {
                low += 1;
            }
        }
        if !find_high {
            if overlaps(high) {
                find_high = true;
            } else {
                high -= 1;
            }
        }
    }

    (find_low && find_high).then_some((low, high))
}
