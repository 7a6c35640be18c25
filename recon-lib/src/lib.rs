//! # Recon-Lib
//! Recovers the hidden constant term of a polynomial from shares whose values are written in
//! arbitrary bases. Reconstruction solves the Vandermonde system of `k` shares through a
//! Gauss-Jordan inverse, see [recover_secret].
//!

pub mod codec;
pub mod error;
pub mod input;
pub mod linalg;
pub mod recovery;

pub use error::ReconError;
pub use input::{Dataset, Point};
pub use recovery::{recover, recover_secret, Recovery, RecoveryOptions, Selection};
