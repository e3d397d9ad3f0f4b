use crate::arc::CircleArc;
use crate::consts::MIN_RADIUS_SENTINEL;
use crate::utils::angle_between_points;
use glam::DVec2;

/// Color tag carried by a segment for the rendering side.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SegmentColor {
	/// The caller's own color value, passed through untouched.
	Custom(u32),
	/// The segment breaks a track rule and should be drawn as a warning.
	Exception,
}

impl Default for SegmentColor {
	fn default() -> Self {
		Self::Custom(0)
	}
}

/// Presentation metadata copied from the request onto each segment.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stroke {
	pub color: SegmentColor,
	pub width: f64,
}

/// The drawable primitive of a segment.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SegmentGeometry {
	Arc(CircleArc),
	Straight { start: DVec2, end: DVec2 },
}

impl SegmentGeometry {
	/// The point where the curve enters this primitive.
	pub fn start_point(&self) -> DVec2 {
		match self {
			Self::Arc(arc) => arc.start_point(),
			Self::Straight { start, .. } => *start,
		}
	}

	/// The point where the curve leaves this primitive.
	pub fn end_point(&self) -> DVec2 {
		match self {
			Self::Arc(arc) => arc.end_point(),
			Self::Straight { end, .. } => *end,
		}
	}

	/// Length of the primitive. Arcs measure `|radius * sweep|`, straights the distance between their end points.
	pub fn length(&self) -> f64 {
		match self {
			Self::Arc(arc) => arc.length(),
			Self::Straight { start, end } => start.distance(*end),
		}
	}

	/// Absolute radius of an arc. Straights have none.
	pub fn radius(&self) -> Option<f64> {
		match self {
			Self::Arc(arc) => Some(arc.radius.abs()),
			Self::Straight { .. } => None,
		}
	}

	/// Direction of travel in degrees at the end of the primitive.
	pub fn exit_direction(&self) -> f64 {
		match self {
			Self::Arc(arc) => arc.exit_direction(),
			Self::Straight { start, end } => angle_between_points(*start, *end),
		}
	}
}

/// One primitive of an approximation, together with the parameter range of the bezier it replaces.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ApproximationSegment {
	pub geometry: SegmentGeometry,
	pub stroke: Stroke,
	pub t_start: f64,
	pub t_end: f64,
}

/// The ordered segments replacing a bezier, from its start point to its end point.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Approximation {
	pub segments: Vec<ApproximationSegment>,
}

impl Approximation {
	pub fn len(&self) -> usize {
		self.segments.len()
	}

	pub fn is_empty(&self) -> bool {
		self.segments.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &ApproximationSegment> {
		self.segments.iter()
	}

	/// Total length of all segments.
	pub fn length(&self) -> f64 {
		self.segments.iter().map(|segment| segment.geometry.length()).sum()
	}

	/// The tightest absolute radius among the arcs.
	/// Straights do not constrain the radius, so an approximation without arcs reports [MIN_RADIUS_SENTINEL].
	pub fn min_radius(&self) -> f64 {
		self.segments.iter().filter_map(|segment| segment.geometry.radius()).fold(MIN_RADIUS_SENTINEL, f64::min)
	}

	/// Whether any segment was flagged for breaking a track rule.
	pub fn has_exceptions(&self) -> bool {
		self.segments.iter().any(|segment| segment.stroke.color == SegmentColor::Exception)
	}
}

impl<'a> IntoIterator for &'a Approximation {
	type Item = &'a ApproximationSegment;
	type IntoIter = std::slice::Iter<'a, ApproximationSegment>;

	fn into_iter(self) -> Self::IntoIter {
		self.segments.iter()
	}
}
