use crate::utils::{normalize_degrees, point_on_circle, vector_angle};
use glam::DVec2;
use std::fmt::{Debug, Formatter, Result};

/// A circular arc produced by the approximation.
///
/// The arc spans the counterclockwise angular range `[start_angle, start_angle + sweep_angle]`.
/// The sign of `radius` encodes which way the approximated curve walks along that range:
/// - positive: counterclockwise, starting at `start_angle`
/// - negative: clockwise, starting at `start_angle + sweep_angle`
#[derive(Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CircleArc {
	/// The center point of the circle.
	pub center: DVec2,
	/// The signed radius of the circle.
	pub radius: f64,
	/// The counterclockwise-most start of the covered range, in degrees from the +x axis.
	pub start_angle: f64,
	/// The angular extent of the arc in degrees, never negative.
	pub sweep_angle: f64,
}

impl Debug for CircleArc {
	fn fmt(&self, f: &mut Formatter<'_>) -> Result {
		write!(f, "Center: {}, radius: {}, start angle: {}°, sweep: {}°", self.center, self.radius, self.start_angle, self.sweep_angle)
	}
}

impl CircleArc {
	/// Build the arc around `center` that runs from `from` to `to` in the given direction.
	/// The radius is taken from the distance to `from`.
	pub fn from_endpoints(center: DVec2, from: DVec2, to: DVec2, counterclockwise: bool) -> Self {
		let radius = center.distance(from);
		let from_angle = vector_angle(from - center);
		let to_angle = vector_angle(to - center);

		let (start_angle, sweep_angle, radius) = if counterclockwise {
			(normalize_degrees(from_angle), normalize_degrees(to_angle - from_angle), radius)
		} else {
			(normalize_degrees(to_angle), normalize_degrees(from_angle - to_angle), -radius)
		};

		Self {
			center,
			radius,
			start_angle,
			sweep_angle,
		}
	}

	/// Whether the approximated curve walks this arc counterclockwise.
	pub fn is_counterclockwise(&self) -> bool {
		self.radius > 0.
	}

	/// Angle in degrees where the curve enters the arc.
	pub fn entry_angle(&self) -> f64 {
		if self.is_counterclockwise() { self.start_angle } else { self.start_angle + self.sweep_angle }
	}

	/// Angle in degrees where the curve leaves the arc.
	pub fn exit_angle(&self) -> f64 {
		if self.is_counterclockwise() { self.start_angle + self.sweep_angle } else { self.start_angle }
	}

	/// Point on the circle at the given angle in degrees.
	pub fn point_at_angle(&self, angle: f64) -> DVec2 {
		point_on_circle(self.center, self.radius, angle)
	}

	/// The point where the curve enters the arc.
	pub fn start_point(&self) -> DVec2 {
		self.point_at_angle(self.entry_angle())
	}

	/// The point where the curve leaves the arc.
	pub fn end_point(&self) -> DVec2 {
		self.point_at_angle(self.exit_angle())
	}

	/// Direction of travel in degrees at the point where the curve leaves the arc.
	pub fn exit_direction(&self) -> f64 {
		let turn = if self.is_counterclockwise() { 90. } else { -90. };
		normalize_degrees(self.exit_angle() + turn)
	}

	/// Length of the arc, `|radius * sweep|` with the sweep in radians.
	pub fn length(&self) -> f64 {
		(self.radius * self.sweep_angle.to_radians()).abs()
	}

	/// Whether the angle in degrees falls within the covered range.
	pub fn contains_angle(&self, angle: f64) -> bool {
		normalize_degrees(angle - self.start_angle) <= self.sweep_angle
	}

	/// Stretch or shrink the arc's exit so it lands on the angle of `point` around the center.
	/// The entry and the circle itself are unchanged.
	#[must_use]
	pub fn with_exit_towards(&self, point: DVec2) -> Self {
		let target = vector_angle(point - self.center);
		let mut correction = normalize_degrees(target - self.exit_angle());
		if correction > 180. {
			correction -= 360.;
		}

		let mut arc = *self;
		if self.is_counterclockwise() {
			arc.sweep_angle = (self.sweep_angle + correction).max(0.);
		} else {
			// Clockwise exits sit at `start_angle`, so moving the exit moves the start and shrinks the sweep by the same amount
			let sweep = (self.sweep_angle - correction).max(0.);
			arc.start_angle = normalize_degrees(self.start_angle + self.sweep_angle - sweep);
			arc.sweep_angle = sweep;
		}
		arc
	}
}
