use anyhow::{Context, Result, bail};
use bezier_arcs::consts::{DEFAULT_ERROR_THRESHOLD, DEFAULT_MAX_ITERATIONS, DEFAULT_RADIUS_EPSILON};
use bezier_arcs::{ArcsOptions, SegmentColor, Stroke, TrackRules};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Approximation settings read from a RON file. Missing fields keep their defaults.
///
/// ```ron
/// (
/// 	error_threshold: 0.02,
/// 	track_min_radius: Some(150.0),
/// )
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
	pub error_threshold: f64,
	pub max_iterations: usize,
	/// Set when the curve models track. Arcs tighter than this are flagged.
	pub track_min_radius: Option<f64>,
	pub radius_epsilon: f64,
	pub color: u32,
	pub stroke_width: f64,
}

impl Default for CliConfig {
	fn default() -> Self {
		Self {
			error_threshold: DEFAULT_ERROR_THRESHOLD,
			max_iterations: DEFAULT_MAX_ITERATIONS,
			track_min_radius: None,
			radius_epsilon: DEFAULT_RADIUS_EPSILON,
			color: 0,
			stroke_width: 1.,
		}
	}
}

impl CliConfig {
	pub fn load(path: &Path) -> Result<Self> {
		let data = std::fs::read_to_string(path).with_context(|| format!("Failed to read config file {}", path.display()))?;
		Self::parse(&data).with_context(|| format!("Failed to parse config file {}", path.display()))
	}

	pub fn parse(data: &str) -> Result<Self> {
		Ok(ron::from_str(data)?)
	}

	/// Apply the values given on the command line, which take precedence over the file.
	#[must_use]
	pub fn with_overrides(mut self, threshold: Option<f64>, max_iterations: Option<usize>, track_min_radius: Option<f64>) -> Self {
		if let Some(threshold) = threshold {
			self.error_threshold = threshold;
		}
		if let Some(max_iterations) = max_iterations {
			self.max_iterations = max_iterations;
		}
		if track_min_radius.is_some() {
			self.track_min_radius = track_min_radius;
		}
		self
	}

	pub fn validate(&self) -> Result<()> {
		if !self.error_threshold.is_finite() || self.error_threshold <= 0. {
			bail!("The error threshold must be a positive number, got {}", self.error_threshold);
		}
		if self.max_iterations == 0 {
			bail!("The iteration limit must be at least 1");
		}
		if let Some(min_radius) = self.track_min_radius {
			if !min_radius.is_finite() || min_radius < 0. {
				bail!("The minimum track radius must be zero or more, got {min_radius}");
			}
		}
		if !self.radius_epsilon.is_finite() || self.radius_epsilon < 0. {
			bail!("The radius epsilon must be zero or more, got {}", self.radius_epsilon);
		}
		if !self.stroke_width.is_finite() || self.stroke_width < 0. {
			bail!("The stroke width must be zero or more, got {}", self.stroke_width);
		}
		Ok(())
	}

	pub fn arcs_options(&self) -> ArcsOptions {
		ArcsOptions {
			error_threshold: self.error_threshold,
			max_iterations: self.max_iterations,
			stroke: Stroke {
				color: SegmentColor::Custom(self.color),
				width: self.stroke_width,
			},
			track: self.track_min_radius.map(|min_radius| TrackRules {
				min_radius,
				radius_epsilon: self.radius_epsilon,
			}),
		}
	}
}
