use crate::approximation::Stroke;
use crate::consts::{DEFAULT_ERROR_THRESHOLD, DEFAULT_MAX_ITERATIONS, DEFAULT_RADIUS_EPSILON};

/// The qualitative shape of a cubic bezier, as determined by [CubicBezier::classify](super::CubicBezier::classify).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CurveShape {
	/// A simple curve without loops, cusps or inflections.
	Plain,
	/// The curve crosses itself.
	Loop,
	/// The curve has a point where its tangent degenerates.
	Cusp,
	/// The curvature changes sign once.
	Inflection,
	/// The curvature changes sign twice.
	DoubleInflection,
	/// All four control points lie in order along one straight line.
	Line,
	/// The start and end points of a closed track coincide.
	Ends,
	/// Three or more control point pairs coincide.
	Coincident,
}

impl CurveShape {
	/// Whether a curve of this shape can be used to model track.
	/// Loops, cusps and collapsed curves cannot.
	pub fn is_valid(&self) -> bool {
		!matches!(self, Self::Loop | Self::Cusp | Self::Ends | Self::Coincident)
	}
}

/// The result of classifying a cubic bezier.
///
/// Besides the shape, this carries the diagnostic values of the discriminant test:
/// `fx` and `fy` locate the end point in the canonical frame of the first three control points, and `cusp` is the distance of `fy` from the cusp boundary curve.
/// Classifications decided before the discriminant is computed report all three as zero.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Classification {
	pub shape: CurveShape,
	pub fx: f64,
	pub fy: f64,
	pub cusp: f64,
}

impl Classification {
	pub(crate) fn early(shape: CurveShape) -> Self {
		Self { shape, fx: 0., fy: 0., cusp: 0. }
	}
}

/// Minimum radius rules applied when the approximated curve models track.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackRules {
	/// The smallest radius the layout allows for track.
	pub min_radius: f64,
	/// Slack below `min_radius` that is still accepted. The default value is `0.001`.
	pub radius_epsilon: f64,
}

impl TrackRules {
	pub fn new(min_radius: f64) -> Self {
		Self {
			min_radius,
			radius_epsilon: DEFAULT_RADIUS_EPSILON,
		}
	}

	/// Whether an arc of the given radius is tighter than the layout allows.
	pub fn violated_by(&self, radius: f64) -> bool {
		radius.abs() < self.min_radius - self.radius_epsilon
	}
}

/// Struct to represent optional parameters that can be passed to the `approximate` function.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArcsOptions {
	/// The maximum deviation allowed between the approximation and the curve.
	/// Each segment is accepted when its sampled error is at most half of this value. The default is `0.05`.
	pub error_threshold: f64,
	/// The maximum number of search iterations used while growing a single segment. Exceeding it fails the whole approximation. The default is `100`.
	pub max_iterations: usize,
	/// Stroke copied onto every emitted segment.
	pub stroke: Stroke,
	/// Set when the curve models track. Arcs tighter than the rules allow are given the exception color. The default is `None`.
	pub track: Option<TrackRules>,
}

impl Default for ArcsOptions {
	fn default() -> Self {
		Self {
			error_threshold: DEFAULT_ERROR_THRESHOLD,
			max_iterations: DEFAULT_MAX_ITERATIONS,
			stroke: Stroke::default(),
			track: None,
		}
	}
}

impl ArcsOptions {
	/// Options for a curve that models track with the given minimum radius.
	pub fn track(min_radius: f64) -> Self {
		Self {
			track: Some(TrackRules::new(min_radius)),
			..Default::default()
		}
	}
}
