use super::*;

/// Functionality relating to core `CubicBezier` operations, such as constructors and simple transformations.
impl CubicBezier {
	/// Create a cubic bezier from its four control points.
	pub fn new(points: [DVec2; 4]) -> Self {
		Self { points }
	}

	/// Create a cubic bezier using the provided coordinates as the start, handles, and end points.
	#[allow(clippy::too_many_arguments)]
	pub fn from_coordinates(x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64, x4: f64, y4: f64) -> Self {
		Self::new([DVec2::new(x1, y1), DVec2::new(x2, y2), DVec2::new(x3, y3), DVec2::new(x4, y4)])
	}

	/// Create a cubic bezier from a flat `[x0, y0, x1, y1, x2, y2, x3, y3]` array.
	pub fn from_flat(coordinates: [f64; 8]) -> Self {
		let [x1, y1, x2, y2, x3, y3, x4, y4] = coordinates;
		Self::from_coordinates(x1, y1, x2, y2, x3, y3, x4, y4)
	}

	/// Returns the start point of the curve.
	pub fn start(&self) -> DVec2 {
		self.points[0]
	}

	/// Returns the end point of the curve.
	pub fn end(&self) -> DVec2 {
		self.points[3]
	}

	/// Returns the same curve walked from its end to its start.
	#[must_use]
	pub fn reversed(&self) -> Self {
		let [p0, p1, p2, p3] = self.points;
		Self::new([p3, p2, p1, p0])
	}

	/// Returns the curve moved by `offset`.
	#[must_use]
	pub fn translated(&self, offset: DVec2) -> Self {
		Self::new(self.points.map(|point| point + offset))
	}

	/// Returns a copy with the control point at `index` replaced.
	/// Indices outside `0..4` leave the curve unchanged.
	#[must_use]
	pub fn with_point(&self, index: usize, point: DVec2) -> Self {
		let mut points = self.points;
		if let Some(slot) = points.get_mut(index) {
			*slot = point;
		}
		Self::new(points)
	}

	/// Returns the outward facing directions at the two end points, in degrees in the range `[0, 360)`.
	/// The first angle points from the start handle back through the start point, the second from the end handle out through the end point.
	pub fn end_angles(&self) -> [f64; 2] {
		let [p0, p1, p2, p3] = self.points;
		[utils::angle_between_points(p1, p0), utils::angle_between_points(p2, p3)]
	}

	/// Returns true if every control point has finite coordinates.
	pub fn is_finite(&self) -> bool {
		self.points.iter().all(|point| point.is_finite())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::compare::compare_f64s;

	#[test]
	fn test_constructors() {
		let bezier = CubicBezier::from_coordinates(0., 1., 2., 3., 4., 5., 6., 7.);
		assert_eq!(bezier, CubicBezier::from_flat([0., 1., 2., 3., 4., 5., 6., 7.]));
		assert_eq!(bezier.start(), DVec2::new(0., 1.));
		assert_eq!(bezier.end(), DVec2::new(6., 7.));
	}

	#[test]
	fn test_reversed_and_translated() {
		let bezier = CubicBezier::from_coordinates(0., 0., 10., 0., 20., 10., 30., 10.);
		assert_eq!(bezier.reversed().points, [DVec2::new(30., 10.), DVec2::new(20., 10.), DVec2::new(10., 0.), DVec2::new(0., 0.)]);
		assert_eq!(bezier.reversed().reversed(), bezier);
		assert_eq!(bezier.translated(DVec2::new(1., -1.)).start(), DVec2::new(1., -1.));
	}

	#[test]
	fn test_with_point() {
		let bezier = CubicBezier::from_coordinates(0., 0., 10., 0., 20., 10., 30., 10.);
		assert_eq!(bezier.with_point(2, DVec2::new(5., 5.)).points[2], DVec2::new(5., 5.));
		assert_eq!(bezier.with_point(4, DVec2::new(5., 5.)), bezier);
	}

	#[test]
	fn test_end_angles() {
		let bezier = CubicBezier::from_coordinates(0., 0., 10., 0., 20., 10., 20., 20.);
		let [start_angle, end_angle] = bezier.end_angles();
		assert!(compare_f64s(start_angle, 180.));
		assert!(compare_f64s(end_angle, 90.));
	}
}
