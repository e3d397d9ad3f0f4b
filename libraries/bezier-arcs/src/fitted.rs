use crate::approximation::Approximation;
use crate::bezier::{ArcsOptions, Classification, CubicBezier};
use crate::error::ApproximationError;
use glam::DVec2;

/// A cubic bezier together with everything derived from it: its shape, its arc approximation and the metrics of that approximation.
///
/// The derived values are always recomputed in full whenever the curve changes, since moving one control point can move every segment boundary.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FittedBezier {
	curve: CubicBezier,
	closed_track: bool,
	options: ArcsOptions,
	classification: Classification,
	approximation: Approximation,
	length: f64,
	min_radius: f64,
	end_angles: [f64; 2],
}

impl FittedBezier {
	/// Classify and approximate `curve`.
	/// `closed_track` marks a curve whose start and end are expected to join into a closed loop.
	pub fn new(curve: CubicBezier, closed_track: bool, options: ArcsOptions) -> Result<Self, ApproximationError> {
		let approximation = curve.approximate(&options)?;
		Ok(Self {
			curve,
			closed_track,
			options,
			classification: curve.classify(closed_track),
			length: approximation.length(),
			min_radius: approximation.min_radius(),
			end_angles: curve.end_angles(),
			approximation,
		})
	}

	/// Move the control point at `index` and recompute everything.
	/// If the moved curve cannot be approximated, the error is returned and the previous curve is kept.
	pub fn set_control_point(&mut self, index: usize, point: DVec2) -> Result<(), ApproximationError> {
		self.replace_curve(self.curve.with_point(index, point))
	}

	/// Replace the whole curve and recompute everything, keeping the previous state on failure.
	pub fn replace_curve(&mut self, curve: CubicBezier) -> Result<(), ApproximationError> {
		*self = Self::new(curve, self.closed_track, self.options)?;
		Ok(())
	}

	/// Change the approximation options and recompute, keeping the previous state on failure.
	pub fn set_options(&mut self, options: ArcsOptions) -> Result<(), ApproximationError> {
		*self = Self::new(self.curve, self.closed_track, options)?;
		Ok(())
	}

	pub fn curve(&self) -> &CubicBezier {
		&self.curve
	}

	pub fn closed_track(&self) -> bool {
		self.closed_track
	}

	pub fn options(&self) -> &ArcsOptions {
		&self.options
	}

	pub fn classification(&self) -> &Classification {
		&self.classification
	}

	pub fn approximation(&self) -> &Approximation {
		&self.approximation
	}

	/// Length of the approximation.
	pub fn length(&self) -> f64 {
		self.length
	}

	/// Smallest arc radius of the approximation, see [Approximation::min_radius].
	pub fn min_radius(&self) -> f64 {
		self.min_radius
	}

	/// Outward directions at the start and end point in degrees, see [CubicBezier::end_angles].
	pub fn end_angles(&self) -> [f64; 2] {
		self.end_angles
	}
}
