use crate::approximation::{ApproximationSegment, SegmentGeometry, Stroke};
use crate::arc::CircleArc;
use crate::bezier::{ArcsOptions, CubicBezier};
use crate::consts::MIN_RADIUS_SENTINEL;
use crate::error::ApproximationError;
use crate::fitted::FittedBezier;
use glam::DVec2;

/// One piece of a [Compound] curve. Beziers carry their own nested approximation.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CompoundSegment {
	Straight { start: DVec2, end: DVec2 },
	Arc(CircleArc),
	Bezier(Box<FittedBezier>),
}

impl CompoundSegment {
	pub fn start_point(&self) -> DVec2 {
		match self {
			Self::Straight { start, .. } => *start,
			Self::Arc(arc) => arc.start_point(),
			Self::Bezier(bezier) => bezier.curve().start(),
		}
	}

	pub fn end_point(&self) -> DVec2 {
		match self {
			Self::Straight { end, .. } => *end,
			Self::Arc(arc) => arc.end_point(),
			Self::Bezier(bezier) => bezier.curve().end(),
		}
	}

	pub fn length(&self) -> f64 {
		match self {
			Self::Straight { start, end } => start.distance(*end),
			Self::Arc(arc) => arc.length(),
			Self::Bezier(bezier) => bezier.length(),
		}
	}

	/// Tightest absolute radius in this piece, or `None` if it contains no arc.
	fn radius(&self) -> Option<f64> {
		match self {
			Self::Straight { .. } => None,
			Self::Arc(arc) => Some(arc.radius.abs()),
			Self::Bezier(bezier) => bezier.approximation().iter().filter_map(|segment| segment.geometry.radius()).reduce(f64::min),
		}
	}
}

/// A curve built from straights, arcs and approximated beziers, drawn with one stroke.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Compound {
	pub segments: Vec<CompoundSegment>,
	pub stroke: Stroke,
}

impl Compound {
	pub fn new(stroke: Stroke) -> Self {
		Self { segments: Vec::new(), stroke }
	}

	pub fn push_straight(&mut self, start: DVec2, end: DVec2) {
		self.segments.push(CompoundSegment::Straight { start, end });
	}

	pub fn push_arc(&mut self, arc: CircleArc) {
		self.segments.push(CompoundSegment::Arc(arc));
	}

	/// Approximate `curve` and append it. The compound's stroke replaces the one in `options`.
	/// Nothing is appended if the approximation fails.
	pub fn push_bezier(&mut self, curve: CubicBezier, options: ArcsOptions) -> Result<(), ApproximationError> {
		let options = ArcsOptions { stroke: self.stroke, ..options };
		let fitted = FittedBezier::new(curve, false, options)?;
		self.segments.push(CompoundSegment::Bezier(Box::new(fitted)));
		Ok(())
	}

	/// Total length, including the approximated length of every nested bezier.
	pub fn length(&self) -> f64 {
		self.segments.iter().map(CompoundSegment::length).sum()
	}

	/// The tightest absolute arc radius anywhere in the compound, or [MIN_RADIUS_SENTINEL] when there are no arcs.
	pub fn min_radius(&self) -> f64 {
		self.segments.iter().filter_map(CompoundSegment::radius).fold(MIN_RADIUS_SENTINEL, f64::min)
	}

	/// The start of the first segment and the end of the last one.
	pub fn end_points(&self) -> Option<[DVec2; 2]> {
		let first = self.segments.first()?;
		let last = self.segments.last()?;
		Some([first.start_point(), last.end_point()])
	}

	/// Iterate over the drawable primitives in traversal order, expanding nested approximations.
	pub fn flatten(&self) -> impl Iterator<Item = SegmentGeometry> + '_ {
		self.segments.iter().flat_map(|segment| {
			let (own, nested): (Option<SegmentGeometry>, &[ApproximationSegment]) = match segment {
				CompoundSegment::Straight { start, end } => (Some(SegmentGeometry::Straight { start: *start, end: *end }), &[][..]),
				CompoundSegment::Arc(arc) => (Some(SegmentGeometry::Arc(*arc)), &[][..]),
				CompoundSegment::Bezier(bezier) => (None, bezier.approximation().segments.as_slice()),
			};
			own.into_iter().chain(nested.iter().map(|segment| segment.geometry))
		})
	}
}
