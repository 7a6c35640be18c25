pub mod inverse;
pub mod matrix;
pub mod multiply;
pub mod vandermonde;

pub use inverse::{invert, invert_with_epsilon, DEFAULT_PIVOT_EPSILON};
pub use matrix::Matrix;
pub use multiply::{mul, mul_vec};
pub use vandermonde::vandermonde;
