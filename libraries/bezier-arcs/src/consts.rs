// Classification
/// Distance from the cusp boundary curve below which a curve counts as a cusp.
pub const CUSP_THRESHOLD: f64 = 0.100;
/// Magnitude below which the discriminant's `fx` denominator is treated as zero.
pub const DISCRIMINANT_DENOMINATOR_EPSILON: f64 = 0.0001;

// Arc approximation
/// Default maximum deviation allowed between the approximation and the curve.
pub const DEFAULT_ERROR_THRESHOLD: f64 = 0.05;
/// Default number of search iterations allowed while growing a single segment.
pub const DEFAULT_MAX_ITERATIONS: usize = 100;
/// Minimum radius reported when an approximation contains no arcs.
pub const MIN_RADIUS_SENTINEL: f64 = 100000.;
/// Slack subtracted from the minimum track radius before an arc is flagged.
pub const DEFAULT_RADIUS_EPSILON: f64 = 0.001;

// Three-point fitting
/// Two fit points closer than this are considered coincident.
pub const COINCIDENT_POINT_EPSILON: f64 = 1e-9;
/// Relative area (cross product over squared chord) below which three points are collinear.
pub const COLLINEAR_EPSILON: f64 = 1e-10;

// Curve calculus
/// Number of parameter steps used when sampling curvature.
pub const CURVATURE_SAMPLES: usize = 100;
/// Curvatures at or above this value leave the minimum radius undefined.
pub const MAX_MEANINGFUL_CURVATURE: f64 = 1000.;
/// Curvatures at or below this value leave the minimum radius undefined.
pub const MIN_MEANINGFUL_CURVATURE: f64 = 0.001;
/// Length tolerance used by `polygon_length` when none is given.
pub const DEFAULT_LENGTH_ERROR: f64 = 0.01;

// Method argument defaults
/// Default number of segments scanned by `nearest_point`.
pub const DEFAULT_NEAREST_SAMPLES: usize = 100;
