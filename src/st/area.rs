use super::STPoint;
use crate::math::EPSILON;
use itertools::Itertools;

/// Computes the signed area of a polygon in the S-T plane with the shoelace formula,
/// treating `t` as the horizontal axis and `s` as the vertical axis.
///
/// Vertices that run forward in time along the lower edge and back along the
/// upper edge give a positive area.
pub fn signed_area(points: &[STPoint]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let sum: f64 = points
        .iter()
        .circular_tuple_windows()
        .map(|(a, b)| a.t * b.s - b.t * a.s)
        .sum();
    0.5 * sum
}

/// Whether the polygon's signed area is positive, beyond numerical tolerance.
pub fn has_positive_area(points: &[STPoint]) -> bool {
    signed_area(points) > EPSILON
}

#[cfg(test)]
mod test {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use rand::{Rng, SeedableRng};

    fn trapezoid() -> [STPoint; 4] {
        [
            STPoint::new(1.0, 0.0),
            STPoint::new(3.0, 4.0),
            STPoint::new(9.0, 4.0),
            STPoint::new(6.0, 0.0),
        ]
    }

    #[test]
    fn trapezoid_area() {
        // Parallel sides of 5 and 6 m, 4 s apart.
        assert_approx_eq!(signed_area(&trapezoid()), 22.0);
        assert!(has_positive_area(&trapezoid()));
    }

    #[test]
    fn degenerate_polygons_have_no_area() {
        let flat = [STPoint::new(2.0, 1.0); 4];
        assert!(!has_positive_area(&flat));
        assert_eq!(signed_area(&trapezoid()[..2]), 0.0);
    }

    #[test]
    fn rotation_and_reversal() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let points: Vec<_> = (0..4)
                .map(|_| STPoint::new(rng.gen_range(-50.0..50.0), rng.gen_range(0.0..8.0)))
                .collect();
            let area = signed_area(&points);

            for shift in 1..points.len() {
                let mut rotated = points.clone();
                rotated.rotate_left(shift);
                assert_approx_eq!(signed_area(&rotated), area, 1e-9);
            }

            let mut reversed = points.clone();
            reversed.reverse();
            assert_approx_eq!(signed_area(&reversed), -area, 1e-9);
        }
    }
}
