use super::*;
use crate::approximation::{Approximation, ApproximationSegment, SegmentColor, SegmentGeometry, Stroke};
use crate::error::ApproximationError;
use crate::fit::{ThreePointFit, fit_arc_through_points};

/// A candidate segment found while growing from a fixed start parameter.
#[derive(Copy, Clone, Debug)]
struct Trial {
	geometry: SegmentGeometry,
	t_end: f64,
}

/// Functionality for approximating a `CubicBezier` with circular arcs and straight segments.
impl CubicBezier {
	/// Replace the curve with a chain of circular arcs and straight segments that together run from its start point to its end point.
	///
	/// The curve is walked greedily from `t = 0`. Each segment starts where the previous one ended and is grown as far as the fit allows:
	/// a trial through the points at `t_start`, the middle and `t_end` is accepted when the curve strays at most half of `options.error_threshold` from it at the quarter points.
	/// Accepted trials are widened by half their span, rejected ones are halved, and the first rejection after an accepted trial commits that trial.
	///
	/// The segment parameter ranges tile `[0, 1]` exactly. Either every segment is found or the whole call fails, there is no partial result.
	pub fn approximate(&self, options: &ArcsOptions) -> Result<Approximation, ApproximationError> {
		let mut segments = Vec::new();
		let mut t_start = 0.;

		while t_start < 1. {
			let trial = self.grow_segment(t_start, options)?;
			let segment = self.commit(trial, t_start, options);
			log::trace!("Committed {:?} over [{}, {}]", segment.geometry, segment.t_start, segment.t_end);
			segments.push(segment);
			t_start = trial.t_end;
		}

		log::debug!("Approximated {self:?} with {} segments", segments.len());
		Ok(Approximation { segments })
	}

	/// Sum of the deviations of the curve from `geometry` at the quarter and three quarter points of `[t_start, t_end]`.
	///
	/// For arcs this is the radial distance of the sampled points from the circle, for straights the distance to the line segment.
	pub fn deviation(&self, geometry: &SegmentGeometry, t_start: f64, t_end: f64) -> f64 {
		let quarter = (t_end - t_start) / 4.;
		let samples = [self.evaluate(t_start + quarter), self.evaluate(t_end - quarter)];

		match geometry {
			SegmentGeometry::Arc(arc) => samples.iter().map(|sample| (arc.center.distance(*sample) - arc.radius.abs()).abs()).sum(),
			SegmentGeometry::Straight { start, end } => samples.iter().map(|sample| utils::distance_to_line_segment(*sample, *start, *end)).sum(),
		}
	}

	/// Search for the widest acceptable segment starting at `t_start`.
	fn grow_segment(&self, t_start: f64, options: &ArcsOptions) -> Result<Trial, ApproximationError> {
		let tolerance = options.error_threshold / 2.;
		let mut t_end = 1.;
		let mut best: Option<Trial> = None;

		for _ in 0..options.max_iterations {
			let t_mid = (t_start + t_end) / 2.;
			let start = self.evaluate(t_start);
			let end = self.evaluate(t_end);

			let geometry = match fit_arc_through_points(start, self.evaluate(t_mid), end) {
				Some(ThreePointFit::Circle(arc)) => SegmentGeometry::Arc(arc),
				Some(ThreePointFit::Collinear { .. }) => SegmentGeometry::Straight { start, end },
				None => return Err(ApproximationError::DegenerateFit { t_start, t_end }),
			};
			let error = self.deviation(&geometry, t_start, t_end);
			log::trace!("Trial [{t_start}, {t_end}] deviates by {error}");

			if error <= tolerance {
				let trial = Trial { geometry, t_end };
				if t_end >= 1. {
					return Ok(trial);
				}
				best = Some(trial);
				t_end = (t_end + (t_end - t_start) / 2.).min(1.);
			} else if let Some(trial) = best {
				return Ok(trial);
			} else {
				t_end = t_mid;
			}
		}

		log::debug!("No segment starting at t = {t_start} converged within {} iterations", options.max_iterations);
		Err(ApproximationError::IterationLimit {
			t_start,
			iterations: options.max_iterations,
		})
	}

	/// Turn an accepted trial into an output segment.
	fn commit(&self, trial: Trial, t_start: f64, options: &ArcsOptions) -> ApproximationSegment {
		let mut stroke: Stroke = options.stroke;

		let geometry = match trial.geometry {
			SegmentGeometry::Arc(mut arc) => {
				// The last arc must finish exactly on the curve's end point
				if trial.t_end >= 1. {
					arc = arc.with_exit_towards(self.end());
				}
				if options.track.is_some_and(|rules| rules.violated_by(arc.radius)) {
					log::debug!("Arc of radius {} is tighter than the track allows", arc.radius.abs());
					stroke.color = SegmentColor::Exception;
				}
				SegmentGeometry::Arc(arc)
			}
			straight => straight,
		};

		ApproximationSegment {
			geometry,
			stroke,
			t_start,
			t_end: trial.t_end,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::compare::{compare_f64s, compare_points};

	const HANDLE: f64 = 100. * 0.5522847498;

	fn quarter_circle() -> CubicBezier {
		CubicBezier::from_coordinates(100., 0., 100., HANDLE, HANDLE, 100., 0., 100.)
	}

	fn assert_tiles_unit_interval(approximation: &Approximation) {
		let segments = &approximation.segments;
		assert!(!segments.is_empty());
		assert_eq!(segments[0].t_start, 0.);
		assert_eq!(segments[segments.len() - 1].t_end, 1.);
		for pair in segments.windows(2) {
			assert_eq!(pair[0].t_end, pair[1].t_start);
		}
		assert!(segments.iter().all(|segment| segment.t_start < segment.t_end));
	}

	#[test]
	fn test_straight_line() {
		let bezier = CubicBezier::from_flat([0., 0., 10., 0., 20., 0., 30., 0.]);
		let approximation = bezier.approximate(&ArcsOptions::default()).unwrap();

		assert_eq!(approximation.len(), 1);
		let segment = approximation.segments[0];
		assert_eq!(
			segment.geometry,
			SegmentGeometry::Straight {
				start: DVec2::new(0., 0.),
				end: DVec2::new(30., 0.)
			}
		);
		assert_eq!((segment.t_start, segment.t_end), (0., 1.));
		assert!(compare_f64s(approximation.length(), 30.));
		assert_eq!(approximation.min_radius(), MIN_RADIUS_SENTINEL);
	}

	#[test]
	fn test_quarter_circle() {
		let bezier = quarter_circle();
		let approximation = bezier.approximate(&ArcsOptions::default()).unwrap();
		assert_tiles_unit_interval(&approximation);

		for segment in &approximation {
			let SegmentGeometry::Arc(arc) = segment.geometry else { panic!("Expected only arcs, got {segment:?}") };
			assert!(arc.is_counterclockwise());
			// The cubic only approximates the circle, so the fitted radius drifts a little below 100
			assert!((arc.radius - 100.).abs() < 0.5, "Radius was {}", arc.radius);
			assert!(bezier.deviation(&segment.geometry, segment.t_start, segment.t_end) <= 0.025);
		}
		assert!((approximation.length() - 50. * std::f64::consts::PI).abs() < 0.5);
		let min_radius = approximation.min_radius();
		assert!((min_radius - 100.).abs() < 0.5, "Minimum radius was {min_radius}");
		assert!(approximation.iter().any(|segment| segment.geometry.radius() == Some(min_radius)));
	}

	#[test]
	fn test_segments_are_continuous() {
		let bezier = CubicBezier::from_flat([0., 0., 40., 80., 120., -60., 160., 20.]);
		let approximation = bezier.approximate(&ArcsOptions::default()).unwrap();
		assert_tiles_unit_interval(&approximation);

		let first = approximation.segments[0].geometry;
		let last = approximation.segments[approximation.len() - 1].geometry;
		assert!(first.start_point().distance(bezier.start()) < 1e-5);
		assert!(last.end_point().distance(bezier.end()) < 1e-5);
		for pair in approximation.segments.windows(2) {
			assert!(pair[0].geometry.end_point().distance(pair[1].geometry.start_point()) < 1e-5);
		}
	}

	#[test]
	fn test_error_bound() {
		let bezier = CubicBezier::from_flat([0., 0., 40., 80., 120., -60., 160., 20.]);
		let options = ArcsOptions::default();
		let approximation = bezier.approximate(&options).unwrap();

		for segment in &approximation {
			assert!(bezier.deviation(&segment.geometry, segment.t_start, segment.t_end) <= options.error_threshold / 2.);
		}
	}

	#[test]
	fn test_tighter_threshold_gives_more_segments() {
		let bezier = quarter_circle().translated(DVec2::new(-30., 5.)).with_point(2, DVec2::new(20., 140.));
		let coarse = bezier.approximate(&ArcsOptions { error_threshold: 1., ..Default::default() }).unwrap();
		let fine = bezier.approximate(&ArcsOptions { error_threshold: 0.001, ..Default::default() }).unwrap();
		assert!(fine.len() >= coarse.len());
	}

	#[test]
	fn test_track_exception_color() {
		let stroke = Stroke {
			color: SegmentColor::Custom(0x00ff00),
			width: 2.,
		};

		let loose = ArcsOptions { stroke, ..ArcsOptions::track(50.) };
		let approximation = quarter_circle().approximate(&loose).unwrap();
		assert!(approximation.iter().all(|segment| segment.stroke == stroke));

		let tight = ArcsOptions { stroke, ..ArcsOptions::track(150.) };
		let approximation = quarter_circle().approximate(&tight).unwrap();
		assert!(approximation.iter().all(|segment| segment.stroke.color == SegmentColor::Exception && segment.stroke.width == 2.));
		assert!(approximation.has_exceptions());
	}

	#[test]
	fn test_straight_segments_are_never_exceptions() {
		let bezier = CubicBezier::from_flat([0., 0., 10., 0., 20., 0., 30., 0.]);
		let approximation = bezier.approximate(&ArcsOptions::track(1000.)).unwrap();
		assert!(!approximation.has_exceptions());
	}

	#[test]
	fn test_iteration_limit() {
		// With the default cap, repeated halving reaches coincident fit points and fails as degenerate first, so the cap is lowered to reach the limit
		let bezier = CubicBezier::from_flat([0., 0., 500., 500., 500., -500., 1000., 0.]);
		let options = ArcsOptions { max_iterations: 1, ..Default::default() };
		assert_eq!(bezier.approximate(&options), Err(ApproximationError::IterationLimit { t_start: 0., iterations: 1 }));
	}

	#[test]
	fn test_degenerate_fit() {
		let point = DVec2::new(4., 4.);
		let bezier = CubicBezier::new([point; 4]);
		assert_eq!(bezier.approximate(&ArcsOptions::default()), Err(ApproximationError::DegenerateFit { t_start: 0., t_end: 1. }));
	}

	#[test]
	fn test_last_arc_reaches_end_point() {
		let bezier = CubicBezier::from_flat([0., 0., 0., 60., 90., 100., 130., 40.]);
		let approximation = bezier.approximate(&ArcsOptions::default()).unwrap();
		let last = approximation.segments[approximation.len() - 1];
		assert!(compare_points(last.geometry.end_point(), bezier.end()));
	}
}
