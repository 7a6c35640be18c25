//! Recovery of the constant term from a threshold of shares.
//!
//! The first `k` selected points define a linear system `V * c = y` over the Vandermonde matrix
//! `V`. The coefficient vector `c` runs from the highest power down, so its last entry is the
//! secret.

use crate::error::ReconError;
use crate::input::{parse_input, Dataset, Point};
use crate::linalg::{invert_with_epsilon, mul_vec, vandermonde, DEFAULT_PIVOT_EPSILON};
use serde::Deserialize;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use tracing::*;

pub const DEFAULT_RESIDUAL_TOLERANCE: f64 = 1e-6;

// i64::MAX is not representable as f64, 2^63 is the first value past it
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Which `k` of the available points take part in the reconstruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Selection {
	/// Smallest `k` x-coordinates
	#[serde(rename = "sorted")]
	SortedByX,
	/// First `k` shares in dataset order
	#[serde(rename = "input")]
	InputOrder,
}

impl Default for Selection {
	fn default() -> Self {
		Self::SortedByX
	}
}

impl FromStr for Selection {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"sorted" => Ok(Self::SortedByX),
			"input" => Ok(Self::InputOrder),
			other => Err(format!("unknown selection {:?}, expected sorted or input", other)),
		}
	}
}

impl Display for Selection {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::SortedByX => write!(f, "sorted"),
			Self::InputOrder => write!(f, "input"),
		}
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecoveryOptions {
	pub selection: Selection,
	pub pivot_epsilon: f64,
	/// Allowed absolute distance of the constant term from the nearest integer
	pub residual_tolerance: f64,
	/// Fail instead of warning when the residual is above the tolerance
	pub strict: bool,
}

impl Default for RecoveryOptions {
	fn default() -> Self {
		Self {
			selection: Selection::default(),
			pivot_epsilon: DEFAULT_PIVOT_EPSILON,
			residual_tolerance: DEFAULT_RESIDUAL_TOLERANCE,
			strict: false,
		}
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct Recovery {
	pub secret: i64,
	/// Constant term before rounding
	pub raw: f64,
	pub residual: f64,
	/// Points the system was built from, in row order
	pub used: Vec<Point>,
}

/// Recovers the secret with [`RecoveryOptions::default`].
pub fn recover_secret(dataset: &Dataset) -> Result<i64, ReconError> {
	recover(dataset, &RecoveryOptions::default()).map(|r| r.secret)
}

pub fn recover(dataset: &Dataset, options: &RecoveryOptions) -> Result<Recovery, ReconError> {
	let parsed = parse_input(dataset)?;
	recover_points(&parsed.points, parsed.k, options)
}

pub fn recover_points(points: &[Point], k: usize, options: &RecoveryOptions) -> Result<Recovery, ReconError> {
	if k == 0 {
		return Err(ReconError::malformed("threshold must be at least 1"));
	}
	if points.len() < k {
		return Err(ReconError::InsufficientPoints { available: points.len(), required: k });
	}

	let used = select(points, k, options.selection);
	debug!("Reconstructing from {} of {} points ({}): {:?}", k, points.len(), options.selection, used);

	let xs: Vec<i64> = used.iter().map(|p| p.x).collect();
	let ys: Vec<f64> = used.iter().map(|p| p.y as f64).collect();

	let m = vandermonde(&xs, k)?;
	let inverse = invert_with_epsilon(&m, options.pivot_epsilon)?;
	let coefficients = mul_vec(&inverse, &ys)?;
	let raw = coefficients
		.last()
		.copied()
		.ok_or(ReconError::DimensionMismatch { expected: k, found: 0 })?;

	let (secret, residual) = round_secret(raw, options)?;
	Ok(Recovery {
		secret,
		raw,
		residual,
		used,
	})
}

fn select(points: &[Point], k: usize, selection: Selection) -> Vec<Point> {
	let mut selected = points.to_vec();
	if selection == Selection::SortedByX {
		selected.sort_by_key(|p| p.x);
	}
	selected.truncate(k);
	selected
}

/// Rounds half away from zero and checks the residual against the absolute tolerance.
fn round_secret(raw: f64, options: &RecoveryOptions) -> Result<(i64, f64), ReconError> {
	if !raw.is_finite() {
		return Err(ReconError::NonIntegralSecret { value: raw, residual: f64::NAN });
	}
	let rounded = raw.round();
	let residual = (raw - rounded).abs();
	if residual > options.residual_tolerance {
		if options.strict {
			return Err(ReconError::NonIntegralSecret { value: raw, residual });
		}
		warn!("Constant term {} is {} away from an integer, rounding to {}", raw, residual, rounded);
	}
	if rounded >= I64_BOUND || rounded < -I64_BOUND {
		return Err(ReconError::SecretOutOfRange { value: raw });
	}
	Ok((rounded as i64, residual))
}
