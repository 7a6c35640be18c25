pub mod dataset;
pub mod parser;

pub use dataset::{Dataset, Keys, Numeric, Share, ShareRecord};
pub use parser::{parse_input, ParsedInput, Point};
