//! Bezier-arcs: shape classification and circular arc approximation of cubic Bézier track curves
#[cfg(test)]
pub(crate) mod compare;

mod approximation;
mod arc;
mod bezier;
mod compound;
pub mod consts;
mod error;
mod fit;
mod fitted;
mod utils;

pub use approximation::*;
pub use arc::CircleArc;
pub use bezier::*;
pub use compound::{Compound, CompoundSegment};
pub use error::ApproximationError;
pub use fit::{ThreePointFit, fit_arc_through_points};
pub use fitted::FittedBezier;
pub use utils::{angle_between_points, distance_to_line_segment, normalize_degrees};
