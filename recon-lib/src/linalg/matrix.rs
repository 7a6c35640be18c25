use crate::error::ReconError;
use core::ops::{Index, IndexMut};
use nalgebra::DMatrix;

/// Dense `f64` matrix on top of [`DMatrix`], with the row operations elimination needs.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix(DMatrix<f64>);

impl Matrix {
	pub fn zeros(rows: usize, cols: usize) -> Self {
		Self(DMatrix::zeros(rows, cols))
	}

	pub fn identity(size: usize) -> Self {
		Self(DMatrix::identity(size, size))
	}

	/// Builds a matrix from its rows, which all have to be of the same length.
	pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, ReconError> {
		let cols = rows.first().map(|r| r.len()).unwrap_or(0);
		let mut data = Vec::with_capacity(rows.len() * cols);
		for row in rows.iter() {
			if row.len() != cols {
				return Err(ReconError::DimensionMismatch { expected: cols, found: row.len() });
			}
			data.extend_from_slice(row);
		}
		Ok(Self(DMatrix::from_row_slice(rows.len(), cols, &data)))
	}

	pub fn rows(&self) -> usize {
		self.0.nrows()
	}

	pub fn cols(&self) -> usize {
		self.0.ncols()
	}

	pub fn is_square(&self) -> bool {
		self.0.is_square()
	}

	pub fn as_dmatrix(&self) -> &DMatrix<f64> {
		&self.0
	}

	pub fn row(&self, r: usize) -> Vec<f64> {
		self.0.row(r).iter().copied().collect()
	}

	pub fn swap_rows(&mut self, a: usize, b: usize) {
		if a != b {
			self.0.swap_rows(a, b);
		}
	}

	/// `row[target] -= factor * row[source]`
	pub fn sub_scaled_row(&mut self, target: usize, source: usize, factor: f64) {
		for c in 0..self.cols() {
			let delta = factor * self.0[(source, c)];
			self.0[(target, c)] -= delta;
		}
	}

	pub fn scale_row(&mut self, r: usize, divisor: f64) {
		for c in 0..self.cols() {
			self.0[(r, c)] /= divisor;
		}
	}

	/// Largest absolute entry, zero for an empty matrix.
	pub fn max_abs(&self) -> f64 {
		self.0.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()))
	}

	/// Copies the columns `from..to` of every row into a new matrix.
	pub fn columns(&self, from: usize, to: usize) -> Matrix {
		Self(DMatrix::from_fn(self.rows(), to - from, |r, c| self.0[(r, from + c)]))
	}

	pub fn to_rows(&self) -> Vec<Vec<f64>> {
		(0..self.rows()).map(|r| self.row(r)).collect()
	}

	pub fn approx_eq(&self, other: &Matrix, tolerance: f64) -> bool {
		self.0.shape() == other.0.shape()
			&& self.0.iter().zip(other.0.iter()).all(|(a, b)| (a - b).abs() <= tolerance)
	}
}

impl From<DMatrix<f64>> for Matrix {
	fn from(m: DMatrix<f64>) -> Self {
		Self(m)
	}
}

impl Index<(usize, usize)> for Matrix {
	type Output = f64;

	fn index(&self, index: (usize, usize)) -> &Self::Output {
		&self.0[index]
	}
}

impl IndexMut<(usize, usize)> for Matrix {
	fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
		&mut self.0[index]
	}
}
