use crate::error::ReconError;
use crate::linalg::matrix::Matrix;

/// `M[i][j] = x[i]^(k-1-j)`, highest power first and a column of ones last.
pub fn vandermonde(xs: &[i64], k: usize) -> Result<Matrix, ReconError> {
	if xs.len() != k {
		return Err(ReconError::DimensionMismatch { expected: k, found: xs.len() });
	}

	let mut m = Matrix::zeros(k, k);
	for (i, x) in xs.iter().enumerate() {
		let x = *x as f64;
		let mut power = 1.0;
		for j in (0..k).rev() {
			m[(i, j)] = power;
			power *= x;
		}
	}
	Ok(m)
}
