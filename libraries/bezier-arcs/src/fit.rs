use crate::arc::CircleArc;
use crate::consts::{COINCIDENT_POINT_EPSILON, COLLINEAR_EPSILON};
use crate::utils::{angle_between_points, compute_circle_center_from_points};
use glam::DVec2;

/// Result of fitting a circle through three points of a curve.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum ThreePointFit {
	/// The unique circle through the points, walked from the first point through the second to the third.
	Circle(CircleArc),
	/// The points lie on a straight line. `angle` is the direction from the first point to the last in degrees.
	Collinear { angle: f64 },
}

/// Fit a circle, or detect a line, through the chord end points `start` and `end` and a point `middle` between them on the curve.
///
/// Returns `None` when two of the points coincide, since they no longer determine a unique circle or line.
pub fn fit_arc_through_points(start: DVec2, middle: DVec2, end: DVec2) -> Option<ThreePointFit> {
	let coincident = |a: DVec2, b: DVec2| a.distance(b) <= COINCIDENT_POINT_EPSILON;
	if coincident(start, middle) || coincident(middle, end) || coincident(start, end) {
		return None;
	}

	let chord = end - start;
	let cross = (middle - start).perp_dot(chord);
	if cross.abs() <= COLLINEAR_EPSILON * chord.length_squared() {
		return Some(ThreePointFit::Collinear { angle: angle_between_points(start, end) });
	}

	let center = compute_circle_center_from_points(start, middle, end)?;
	// A negative cross product means `middle` lies left of the chord, so the path bulges left and turns clockwise
	let counterclockwise = cross > 0.;
	Some(ThreePointFit::Circle(CircleArc::from_endpoints(center, start, end, counterclockwise)))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::compare::{compare_angles, compare_f64s, compare_points};

	#[test]
	fn test_fit_counterclockwise_circle() {
		// Lower half of a circle around (50, 0), walked left to right
		let fit = fit_arc_through_points(DVec2::new(0., 0.), DVec2::new(50., -50.), DVec2::new(100., 0.));
		let Some(ThreePointFit::Circle(arc)) = fit else { panic!("Expected a circle, got {fit:?}") };

		assert!(compare_points(arc.center, DVec2::new(50., 0.)));
		assert!(compare_f64s(arc.radius, 50.));
		assert!(compare_angles(arc.start_angle, 180.));
		assert!(compare_f64s(arc.sweep_angle, 180.));
		assert!(arc.contains_angle(270.));
		assert!(compare_points(arc.start_point(), DVec2::new(0., 0.)));
		assert!(compare_points(arc.end_point(), DVec2::new(100., 0.)));
	}

	#[test]
	fn test_fit_clockwise_circle() {
		// Upper half of the same circle, walked left to right
		let fit = fit_arc_through_points(DVec2::new(0., 0.), DVec2::new(50., 50.), DVec2::new(100., 0.));
		let Some(ThreePointFit::Circle(arc)) = fit else { panic!("Expected a circle, got {fit:?}") };

		assert!(compare_f64s(arc.radius, -50.));
		assert!(compare_angles(arc.start_angle, 0.));
		assert!(compare_f64s(arc.sweep_angle, 180.));
		assert!(arc.contains_angle(90.));
		assert!(compare_points(arc.start_point(), DVec2::new(0., 0.)));
		assert!(compare_points(arc.end_point(), DVec2::new(100., 0.)));
	}

	#[test]
	fn test_fit_collinear() {
		let fit = fit_arc_through_points(DVec2::new(0., 0.), DVec2::new(15., 15.), DVec2::new(30., 30.));
		let Some(ThreePointFit::Collinear { angle }) = fit else { panic!("Expected a line, got {fit:?}") };
		assert!(compare_f64s(angle, 45.));

		// The middle point does not have to lie between the others
		let fit = fit_arc_through_points(DVec2::new(0., 0.), DVec2::new(-10., 0.), DVec2::new(30., 0.));
		assert!(matches!(fit, Some(ThreePointFit::Collinear { .. })));
	}

	#[test]
	fn test_fit_degenerate() {
		let p = DVec2::new(3., 4.);
		assert_eq!(fit_arc_through_points(p, p, DVec2::new(10., 10.)), None);
		assert_eq!(fit_arc_through_points(DVec2::ZERO, p, p), None);
		assert_eq!(fit_arc_through_points(p, DVec2::new(10., 10.), p), None);
	}
}
