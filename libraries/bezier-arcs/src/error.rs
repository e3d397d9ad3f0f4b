use thiserror::Error;

/// Reasons a curve cannot be represented by arcs and straight segments.
/// Either one is fatal for the whole approximation, no partial result is produced.
#[derive(Copy, Clone, PartialEq, Debug, Error)]
pub enum ApproximationError {
	#[error("Cannot approximate the curve: no segment starting at t = {t_start} converged within {iterations} iterations")]
	IterationLimit { t_start: f64, iterations: usize },

	#[error("Cannot approximate the curve: the points at t = {t_start} to {t_end} do not determine an arc or a line")]
	DegenerateFit { t_start: f64, t_end: f64 },
}
