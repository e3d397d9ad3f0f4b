mod arcs;
mod classify;
mod core;
mod solvers;
mod structs;

use crate::consts::*;
use crate::utils;
use glam::DVec2;
use std::fmt::{Debug, Formatter};
pub use structs::*;

/// Representation of a cubic bezier curve by its four control points.
///
/// `points[0]` and `points[3]` are the end points of the curve.
/// `points[1]` and `points[2]` are the handles that set the tangent direction and curvature at the start and end.
#[derive(Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubicBezier {
	pub points: [DVec2; 4],
}

impl Debug for CubicBezier {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let [start, handle_start, handle_end, end] = self.points;
		f.debug_struct("CubicBezier")
			.field("start", &start)
			.field("handle_start", &handle_start)
			.field("handle_end", &handle_end)
			.field("end", &end)
			.finish()
	}
}
