use crate::error::ReconError;
use crate::linalg::matrix::Matrix;

/// `result[i] = sum_j M[i][j] * v[j]`
pub fn mul_vec(m: &Matrix, v: &[f64]) -> Result<Vec<f64>, ReconError> {
	if m.cols() != v.len() {
		return Err(ReconError::DimensionMismatch { expected: m.cols(), found: v.len() });
	}
	let result = (0..m.rows())
		.map(|r| v.iter().enumerate().fold(0.0, |sum, (c, x)| sum + m[(r, c)] * x))
		.collect();
	Ok(result)
}

pub fn mul(a: &Matrix, b: &Matrix) -> Result<Matrix, ReconError> {
	if a.cols() != b.rows() {
		return Err(ReconError::DimensionMismatch { expected: a.cols(), found: b.rows() });
	}
	let mut result = Matrix::zeros(a.rows(), b.cols());
	for r in 0..a.rows() {
		for c in 0..b.cols() {
			result[(r, c)] = (0..a.cols()).fold(0.0, |sum, i| sum + a[(r, i)] * b[(i, c)]);
		}
	}
	Ok(result)
}
