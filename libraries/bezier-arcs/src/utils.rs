use glam::DVec2;

/// Normalize an angle in degrees into the range `[0, 360)`.
pub fn normalize_degrees(angle: f64) -> f64 {
	let normalized = angle.rem_euclid(360.);
	// `rem_euclid` can round up to exactly 360 for tiny negative inputs
	if normalized >= 360. { 0. } else { normalized }
}

/// Direction of a vector in degrees, counterclockwise from the +x axis, in the range `(-180, 180]`.
pub fn vector_angle(vector: DVec2) -> f64 {
	vector.y.atan2(vector.x).to_degrees()
}

/// Direction from `from` towards `to` in degrees, normalized into `[0, 360)`.
pub fn angle_between_points(from: DVec2, to: DVec2) -> f64 {
	normalize_degrees(vector_angle(to - from))
}

/// Point on a circle at the given angle in degrees.
pub fn point_on_circle(center: DVec2, radius: f64, angle: f64) -> DVec2 {
	let (sin, cos) = angle.to_radians().sin_cos();
	center + radius.abs() * DVec2::new(cos, sin)
}

/// Shortest distance from `point` to the line segment between `start` and `end`.
/// The perpendicular foot is clamped to the segment, so points beyond either end measure to that end point.
pub fn distance_to_line_segment(point: DVec2, start: DVec2, end: DVec2) -> f64 {
	let segment = end - start;
	let length_squared = segment.length_squared();
	if length_squared == 0. {
		return point.distance(start);
	}
	let projection = ((point - start).dot(segment) / length_squared).clamp(0., 1.);
	point.distance(start + segment * projection)
}

/// Compute the center of the circle that passes through all three provided points.
/// Returns `None` when the points are exactly collinear, since no such circle exists.
pub fn compute_circle_center_from_points(p1: DVec2, p2: DVec2, p3: DVec2) -> Option<DVec2> {
	// Work relative to `p1` to keep the determinant well conditioned far from the origin
	let b = p2 - p1;
	let c = p3 - p1;
	let determinant = 2. * b.perp_dot(c);
	if determinant == 0. {
		return None;
	}

	let b_squared = b.length_squared();
	let c_squared = c.length_squared();
	let offset = DVec2::new(c.y * b_squared - b.y * c_squared, b.x * c_squared - c.x * b_squared) / determinant;
	Some(p1 + offset)
}
