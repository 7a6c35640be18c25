pub mod base;

pub use base::{decode_value, encode_value};
