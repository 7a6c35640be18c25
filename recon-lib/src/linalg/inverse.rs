use crate::error::ReconError;
use crate::linalg::matrix::Matrix;
use tracing::*;

pub const DEFAULT_PIVOT_EPSILON: f64 = 1e-12;

pub fn invert(m: &Matrix) -> Result<Matrix, ReconError> {
	invert_with_epsilon(m, DEFAULT_PIVOT_EPSILON)
}

/// Gauss-Jordan elimination on `[M | I]` with partial pivoting.
///
/// A column whose best pivot is not above `epsilon` times the largest entry of `m` is treated
/// as singular.
pub fn invert_with_epsilon(m: &Matrix, epsilon: f64) -> Result<Matrix, ReconError> {
	if !m.is_square() {
		return Err(ReconError::DimensionMismatch { expected: m.rows(), found: m.cols() });
	}
	let size = m.rows();
	let scale = match m.max_abs() {
		s if s > 0.0 => s,
		_ => 1.0,
	};
	let threshold = epsilon * scale;

	let mut augmented = Matrix::zeros(size, 2 * size);
	for r in 0..size {
		for c in 0..size {
			augmented[(r, c)] = m[(r, c)];
		}
		augmented[(r, size + r)] = 1.0;
	}

	for i in 0..size {
		let mut pivot_row = i;
		for r in i + 1..size {
			if augmented[(r, i)].abs() > augmented[(pivot_row, i)].abs() {
				pivot_row = r;
			}
		}
		let pivot = augmented[(pivot_row, i)];
		// written so that NaN also counts as singular
		if !(pivot.abs() > threshold) {
			debug!("No usable pivot in column {} ({} <= {})", i, pivot.abs(), threshold);
			return Err(ReconError::SingularMatrix { column: i });
		}
		if pivot_row != i {
			trace!("Swapping rows {} and {}", i, pivot_row);
			augmented.swap_rows(i, pivot_row);
		}

		augmented.scale_row(i, pivot);
		for r in 0..size {
			if r == i {
				continue;
			}
			let multiplier = augmented[(r, i)];
			if multiplier != 0.0 {
				augmented.sub_scaled_row(r, i, multiplier);
			}
		}
		trace!("Eliminated column {} with pivot {}", i, pivot);
	}

	Ok(augmented.columns(size, 2 * size))
}
