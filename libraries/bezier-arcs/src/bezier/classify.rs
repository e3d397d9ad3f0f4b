use super::*;

/// Functionality for deciding the qualitative shape of a `CubicBezier`.
impl CubicBezier {
	/// Classify the curve as plain, looped, cusped, inflected or degenerate.
	///
	/// The shape is read from where the end point falls in the canonical frame of the first three control points (Stone and DeRose).
	/// Degenerate inputs are sorted out first, in this order:
	/// - `Ends` when `closed_track` is set and the start and end points are identical
	/// - `Coincident` when more than two of the point pairs `01`, `12`, `23`, `02`, `13` are identical
	/// - `Line` when the distances between the points chain up exactly along one line
	/// - `Plain` when the discriminant would divide by zero
	///
	/// All comparisons in the degenerate checks are exact, so points that are only nearly coincident or nearly collinear fall through to the discriminant.
	/// This never fails: every input maps to exactly one shape.
	pub fn classify(&self, closed_track: bool) -> Classification {
		let [p0, p1, p2, p3] = self.points;

		if closed_track && p0 == p3 {
			return Classification::early(CurveShape::Ends);
		}

		let coincident_pairs = [(p0, p1), (p1, p2), (p2, p3), (p0, p2), (p1, p3)].into_iter().filter(|(a, b)| a == b).count();
		if coincident_pairs > 2 {
			return Classification::early(CurveShape::Coincident);
		}

		if self.is_exact_line() {
			return Classification::early(CurveShape::Line);
		}

		// Move the start point to the origin, walking the curve backwards if the first handle lies on the x axis
		let mut canonical = self.translated(-p0);
		if canonical.points[1].y == 0. {
			canonical = self.reversed().translated(-p3);
			if canonical.points[1].y == 0. {
				log::trace!("Both handles of {self:?} are level with their end points, classifying as plain");
				return Classification::early(CurveShape::Plain);
			}
		}
		let [_, c1, c2, c3] = canonical.points;

		let f21 = c2.y / c1.y;
		let f31 = c3.y / c1.y;
		let denominator = c2.x - c1.x * f21;
		if denominator.abs() < DISCRIMINANT_DENOMINATOR_EPSILON {
			return Classification::early(CurveShape::Plain);
		}

		let fx = (c3.x - c1.x * f31) / denominator;
		let fy = f31 + (1. - f21) * fx;
		let cusp_boundary = (-(fx * fx) + 2. * fx + 3.) / 4.;
		let cusp = (fy - cusp_boundary).abs();

		let shape = if fy > 1. {
			CurveShape::Inflection
		} else if fx >= 1. {
			CurveShape::Plain
		} else if cusp < CUSP_THRESHOLD {
			CurveShape::Cusp
		} else if fy < cusp_boundary {
			if fx <= 0. && fy >= (3. * fx - fx * fx) / 3. {
				CurveShape::Loop
			} else if fx > 0. && fy >= ((3. * (4. * fx - fx * fx)).sqrt() - fx) / 2. {
				CurveShape::Loop
			} else {
				CurveShape::Plain
			}
		} else {
			CurveShape::DoubleInflection
		};

		Classification { shape, fx, fy, cusp }
	}

	/// Whether the control points satisfy the triangle equality exactly, first for `p0, p1, p2` and then for `p0, p2, p3`.
	fn is_exact_line(&self) -> bool {
		let [p0, p1, p2, p3] = self.points;
		let d02 = p0.distance(p2);
		p0.distance(p1) + p1.distance(p2) == d02 && d02 + p2.distance(p3) == p0.distance(p3)
	}
}
