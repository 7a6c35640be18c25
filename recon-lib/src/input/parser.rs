use crate::codec::decode_value;
use crate::error::ReconError;
use crate::input::dataset::Dataset;
use std::convert::TryFrom;
use tracing::*;

/// A decoded share, `x` is the share index and `y` the share value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
	pub x: i64,
	pub y: i64,
}

impl Point {
	pub fn new(x: i64, y: i64) -> Self {
		Self { x, y }
	}
}

impl From<(i64, i64)> for Point {
	fn from(p: (i64, i64)) -> Self {
		Point::new(p.0, p.1)
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedInput {
	/// Decoded shares in dataset order
	pub points: Vec<Point>,
	pub n: usize,
	pub k: usize,
}

pub fn parse_input(dataset: &Dataset) -> Result<ParsedInput, ReconError> {
	let n = dataset.keys.n.resolve_usize("keys.n")?;
	let k = dataset.keys.k.resolve_usize("keys.k")?;
	if k == 0 {
		return Err(ReconError::malformed("keys.k must be at least 1"));
	}

	let mut points = Vec::with_capacity(dataset.shares.len());
	for share in dataset.shares.iter() {
		let x: i64 = share.name
			.trim()
			.parse()
			.map_err(|_| ReconError::malformed(format!("share name {:?} is not an integer", share.name)))?;
		let base = share.record.base.resolve(&format!("base of share {}", share.name))?;
		let base = u32::try_from(base)
			.map_err(|_| ReconError::malformed(format!("base {} of share {} out of range", base, share.name)))?;
		let y = decode_value(&share.record.value, base)?;
		trace!("Decoded share {} => ({}, {})", share.name, x, y);
		points.push(Point::new(x, y));
	}

	if points.len() < n {
		warn!("keys.n declares {} shares but only {} are present", n, points.len());
	}

	Ok(ParsedInput { points, n, k })
}
