use super::*;

/// Functionality that evaluates and measures the curve itself, independent of any approximation.
impl CubicBezier {
	/// Calculate the point on the curve at parameter `t` using the cubic Bernstein basis:
	/// `(1-t)³·P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³·P3`.
	pub fn evaluate(&self, t: f64) -> DVec2 {
		let [p0, p1, p2, p3] = self.points;
		let one_minus_t = 1. - t;
		let squared_one_minus_t = one_minus_t * one_minus_t;
		let t_squared = t * t;
		squared_one_minus_t * one_minus_t * p0 + 3. * squared_one_minus_t * t * p1 + 3. * one_minus_t * t_squared * p2 + t_squared * t * p3
	}

	/// Returns the first derivative of the curve with respect to `t`.
	pub fn derivative(&self, t: f64) -> DVec2 {
		let [p0, p1, p2, p3] = self.points;
		let one_minus_t = 1. - t;
		3. * one_minus_t * one_minus_t * (p1 - p0) + 6. * one_minus_t * t * (p2 - p1) + 3. * t * t * (p3 - p2)
	}

	/// Returns the second derivative of the curve with respect to `t`.
	pub fn second_derivative(&self, t: f64) -> DVec2 {
		let [p0, p1, p2, p3] = self.points;
		6. * (1. - t) * (p2 - 2. * p1 + p0) + 6. * t * (p3 - 2. * p2 + p1)
	}

	/// Returns the unsigned curvature of the curve at parameter `t`.
	/// A curve that stops moving at `t` (a cusp or a collapsed handle) has no defined curvature and returns `f64::INFINITY`.
	pub fn curvature(&self, t: f64) -> f64 {
		let d1 = self.derivative(t);
		let d2 = self.second_derivative(t);
		let speed_cubed = d1.length().powi(3);
		if speed_cubed == 0. {
			return f64::INFINITY;
		}
		d1.perp_dot(d2).abs() / speed_cubed
	}

	/// Estimate the tightest radius of the curve from its maximum curvature, sampled over [CURVATURE_SAMPLES] parameter steps.
	/// Returns `0.` when the maximum curvature is too large or too small for the radius to be meaningful.
	pub fn curvature_min_radius(&self) -> f64 {
		let max_curvature = (0..CURVATURE_SAMPLES).map(|step| self.curvature(step as f64 / CURVATURE_SAMPLES as f64)).fold(0., f64::max);
		if max_curvature >= MAX_MEANINGFUL_CURVATURE || max_curvature <= MIN_MEANINGFUL_CURVATURE {
			return 0.;
		}
		1. / max_curvature
	}

	/// Split the curve at parameter `t` using de Casteljau's algorithm.
	/// The first curve runs from the start to `t`, the second from `t` to the end.
	pub fn split(&self, t: f64) -> [CubicBezier; 2] {
		let [p0, p1, p2, p3] = self.points;
		let p01 = p0.lerp(p1, t);
		let p12 = p1.lerp(p2, t);
		let p23 = p2.lerp(p3, t);
		let p012 = p01.lerp(p12, t);
		let p123 = p12.lerp(p23, t);
		let split_point = p012.lerp(p123, t);
		[CubicBezier::new([p0, p01, p012, split_point]), CubicBezier::new([split_point, p123, p23, p3])]
	}

	/// Find the sampled parameter closest to `point`.
	/// The curve is sampled at `samples + 1` evenly spaced parameters; `samples` defaults to [DEFAULT_NEAREST_SAMPLES].
	/// Returns the parameter and the distance from `point` to the curve at that parameter.
	pub fn nearest_point(&self, point: DVec2, samples: Option<usize>) -> (f64, f64) {
		let samples = samples.unwrap_or(DEFAULT_NEAREST_SAMPLES).max(1);
		let mut closest = (0., point.distance(self.start()));
		for step in 1..=samples {
			let t = step as f64 / samples as f64;
			let distance = point.distance(self.evaluate(t));
			if distance < closest.1 {
				closest = (t, distance);
			}
		}
		closest
	}

	/// Returns the sampled point on the curve closest to `point`. See [CubicBezier::nearest_point].
	pub fn project(&self, point: DVec2, samples: Option<usize>) -> DVec2 {
		let (t, _) = self.nearest_point(point, samples);
		self.evaluate(t)
	}

	/// Estimate the arc length by recursively splitting the curve until each piece's control polygon is within `error` of its chord.
	/// An `error` of zero falls back to [DEFAULT_LENGTH_ERROR].
	pub fn polygon_length(&self, error: f64) -> f64 {
		let error = if error == 0. { DEFAULT_LENGTH_ERROR } else { error.abs() };
		self.polygon_length_within(error, 0)
	}

	fn polygon_length_within(&self, error: f64, depth: usize) -> f64 {
		// Floating point noise can keep a polygon from ever matching its chord, so the recursion is bounded
		const MAX_DEPTH: usize = 32;

		let polygon_length = self.points.windows(2).map(|pair| pair[0].distance(pair[1])).sum::<f64>();
		let chord_length = self.start().distance(self.end());
		if polygon_length - chord_length <= error || depth >= MAX_DEPTH {
			return polygon_length;
		}

		let [left, right] = self.split(0.5);
		left.polygon_length_within(error, depth + 1) + right.polygon_length_within(error, depth + 1)
	}
}
