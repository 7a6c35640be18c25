use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ReconError {
	#[error("Malformed input => {0}")]
	MalformedInput(String),
	#[error("Digit {digit:?} is not valid in base {base}")]
	InvalidDigit {
		digit: char,
		base: u32,
	},
	#[error("Value {value:?} in base {base} does not fit into 64 bits")]
	ValueOverflow {
		value: String,
		base: u32,
	},
	#[error("Need {required} points for reconstruction, only {available} available")]
	InsufficientPoints {
		available: usize,
		required: usize,
	},
	#[error("Matrix is singular, no usable pivot in column {column}")]
	SingularMatrix {
		column: usize,
	},
	#[error("Dimension mismatch, expected {expected} but found {found}")]
	DimensionMismatch {
		expected: usize,
		found: usize,
	},
	#[error("Recovered secret {value} does not fit into 64 bits")]
	SecretOutOfRange {
		value: f64,
	},
	#[error("Constant term {value} is not integral (residual {residual})")]
	NonIntegralSecret {
		value: f64,
		residual: f64,
	},
}

impl ReconError {
	pub(crate) fn malformed<S: Into<String>>(msg: S) -> Self {
		Self::MalformedInput(msg.into())
	}
}
