mod config;

use anyhow::{Context, Result};
use bezier_arcs::{Approximation, ApproximationSegment, Classification, CubicBezier, SegmentGeometry};
use clap::{Parser, Subcommand, ValueEnum};
use config::CliConfig;
use glam::DVec2;
use serde::Serialize;
use std::fmt::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
enum OutputFormat {
	/// Human readable lines
	Text,
	/// Pretty printed JSON
	Json,
}

#[derive(Parser)]
#[command(name = "bezier-arcs")]
#[command(about = "Classify cubic Bézier curves and approximate them with circular arcs and straight segments")]
struct Args {
	/// Log debug output (`RUST_LOG` takes precedence)
	#[arg(short, long, global = true)]
	verbose: bool,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand)]
enum Command {
	/// Report the shape of the curve and the discriminant values it was read from
	Classify {
		/// The four control points as `X0 Y0 X1 Y1 X2 Y2 X3 Y3`
		#[arg(num_args = 8, required = true, allow_negative_numbers = true, value_names = ["X0", "Y0", "X1", "Y1", "X2", "Y2", "X3", "Y3"])]
		coordinates: Vec<f64>,

		/// Treat the curve as part of a closed track, so identical end points are reported
		#[arg(long)]
		closed: bool,

		/// Output format
		#[arg(short, long, value_enum, default_value = "text")]
		format: OutputFormat,
	},
	/// Replace the curve with arcs and straight segments
	Approximate {
		/// The four control points as `X0 Y0 X1 Y1 X2 Y2 X3 Y3`
		#[arg(num_args = 8, required = true, allow_negative_numbers = true, value_names = ["X0", "Y0", "X1", "Y1", "X2", "Y2", "X3", "Y3"])]
		coordinates: Vec<f64>,

		/// Maximum deviation between the curve and its approximation
		#[arg(short, long)]
		threshold: Option<f64>,

		/// Search iterations allowed per segment before giving up
		#[arg(long)]
		max_iterations: Option<usize>,

		/// Flag arcs tighter than this radius
		#[arg(long)]
		track_min_radius: Option<f64>,

		/// RON file with approximation settings, overridden by the flags above
		#[arg(short, long)]
		config: Option<PathBuf>,

		/// Output format
		#[arg(short, long, value_enum, default_value = "text")]
		format: OutputFormat,
	},
}

#[derive(Serialize)]
struct ClassifyReport {
	#[serde(flatten)]
	classification: Classification,
	valid: bool,
}

#[derive(Serialize)]
struct ApproximateReport<'a> {
	segments: &'a [ApproximationSegment],
	length: f64,
	min_radius: f64,
}

fn main() -> Result<()> {
	let args = Args::parse();

	let level = if args.verbose { log::LevelFilter::Debug } else { log::LevelFilter::Warn };
	env_logger::builder().filter_level(level).parse_default_env().init();

	let output = run(args.command)?;
	print!("{output}");
	Ok(())
}

/// Execute a command and render its output. Nothing is rendered unless the command succeeds as a whole.
fn run(command: Command) -> Result<String> {
	match command {
		Command::Classify { coordinates, closed, format } => {
			let curve = curve_from(&coordinates)?;
			let classification = curve.classify(closed);
			log::debug!("Classified {curve:?} as {:?}", classification.shape);
			render_classification(&classification, format)
		}
		Command::Approximate {
			coordinates,
			threshold,
			max_iterations,
			track_min_radius,
			config,
			format,
		} => {
			let curve = curve_from(&coordinates)?;
			let config = match config {
				Some(path) => CliConfig::load(&path)?,
				None => CliConfig::default(),
			}
			.with_overrides(threshold, max_iterations, track_min_radius);
			config.validate().context("Invalid approximation settings")?;

			let approximation = curve.approximate(&config.arcs_options())?;
			render_approximation(&approximation, format)
		}
	}
}

fn curve_from(coordinates: &[f64]) -> Result<CubicBezier> {
	let coordinates: [f64; 8] = coordinates.try_into().context("Expected exactly 8 coordinates")?;
	let curve = CubicBezier::from_flat(coordinates);
	anyhow::ensure!(curve.is_finite(), "Control point coordinates must be finite numbers");
	Ok(curve)
}

fn render_classification(classification: &Classification, format: OutputFormat) -> Result<String> {
	let valid = classification.shape.is_valid();
	match format {
		OutputFormat::Json => {
			let report = ClassifyReport { classification: *classification, valid };
			Ok(serde_json::to_string_pretty(&report)? + "\n")
		}
		OutputFormat::Text => {
			let mut output = String::new();
			writeln!(output, "shape: {:?}", classification.shape)?;
			writeln!(output, "valid: {valid}")?;
			writeln!(output, "fx: {:.3}", classification.fx)?;
			writeln!(output, "fy: {:.3}", classification.fy)?;
			writeln!(output, "cusp: {:.3}", classification.cusp)?;
			Ok(output)
		}
	}
}

fn render_approximation(approximation: &Approximation, format: OutputFormat) -> Result<String> {
	match format {
		OutputFormat::Json => {
			let report = ApproximateReport {
				segments: &approximation.segments,
				length: approximation.length(),
				min_radius: approximation.min_radius(),
			};
			Ok(serde_json::to_string_pretty(&report)? + "\n")
		}
		OutputFormat::Text => {
			let point = |point: DVec2| format!("({:.3}, {:.3})", point.x, point.y);
			let mut output = String::new();
			for segment in approximation {
				match segment.geometry {
					SegmentGeometry::Arc(arc) => write!(
						output,
						"arc      center {} radius {:.3} start {:.3}° sweep {:.3}°",
						point(arc.center),
						arc.radius,
						arc.start_angle,
						arc.sweep_angle
					)?,
					SegmentGeometry::Straight { start, end } => write!(output, "straight {} -> {}", point(start), point(end))?,
				}
				writeln!(output, "  t [{:.4}, {:.4}] {:?}", segment.t_start, segment.t_end, segment.stroke.color)?;
			}
			writeln!(output, "length: {:.3}", approximation.length())?;
			writeln!(output, "min_radius: {:.3}", approximation.min_radius())?;
			Ok(output)
		}
	}
}
