// Test helper functions

use glam::DVec2;

pub const MAX_ABSOLUTE_DIFFERENCE: f64 = 1e-6;

/// Compare points by allowing some maximum absolute difference to account for floating point errors
pub fn compare_points(p1: DVec2, p2: DVec2) -> bool {
	p1.abs_diff_eq(p2, MAX_ABSOLUTE_DIFFERENCE)
}

/// Compare two `f64` values within the test tolerance
pub fn compare_f64s(a: f64, b: f64) -> bool {
	(a - b).abs() < MAX_ABSOLUTE_DIFFERENCE
}

/// Compare two angles in degrees, treating values a full turn apart as equal
pub fn compare_angles(a: f64, b: f64) -> bool {
	let difference = (a - b).rem_euclid(360.);
	difference < MAX_ABSOLUTE_DIFFERENCE || 360. - difference < MAX_ABSOLUTE_DIFFERENCE
}
