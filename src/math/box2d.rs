use super::{heading_vector, rot90, Point2d, Vector2d};
use crate::util::Interval;
use cgmath::prelude::*;

/// An oriented rectangle in world space.
#[derive(Clone, Copy, Debug)]
pub struct Box2d {
    /// The centre of the box.
    centre: Point2d,
    /// Unit vector along the box's length.
    dir: Vector2d,
    /// Half the length of the box.
    half_len: f64,
    /// Half the width of the box.
    half_wid: f64,
}

impl Box2d {
    /// Creates a box centred on `centre`, with its length aligned to `heading` (in radians).
    pub fn new(centre: Point2d, heading: f64, length: f64, width: f64) -> Self {
        Self {
            centre,
            dir: heading_vector(heading),
            half_len: 0.5 * length,
            half_wid: 0.5 * width,
        }
    }

    /// The centre of the box.
    pub fn centre(&self) -> Point2d {
        self.centre
    }

    /// The length of the box.
    pub fn length(&self) -> f64 {
        2.0 * self.half_len
    }

    /// The width of the box.
    pub fn width(&self) -> f64 {
        2.0 * self.half_wid
    }

    /// The four corners of the box, counter-clockwise from the rear right.
    pub fn corners(&self) -> [Point2d; 4] {
        let long = self.dir * self.half_len;
        let lat = rot90(self.dir) * self.half_wid;
        [
            self.centre - long - lat,
            self.centre + long - lat,
            self.centre + long + lat,
            self.centre - long + lat,
        ]
    }

    /// Determines whether two boxes overlap, using the separating axis theorem.
    /// Boxes that merely touch do not overlap.
    pub fn has_overlap(&self, other: &Box2d) -> bool {
        let axes = [self.dir, rot90(self.dir), other.dir, rot90(other.dir)];
        axes.iter()
            .all(|axis| self.project(*axis).overlaps(&other.project(*axis)))
    }

    /// Projects the box onto an axis.
    fn project(&self, axis: Vector2d) -> Interval<f64> {
        let centre = self.centre.to_vec().dot(axis);
        let radius = self.half_len * self.dir.dot(axis).abs()
            + self.half_wid * rot90(self.dir).dot(axis).abs();
        Interval::new(centre - radius, centre + radius)
    }
}
