use crate::error::ReconError;
use serde::Deserialize;
use serde_json::Value;
use std::convert::TryFrom;
use std::str::FromStr;

pub const KEYS_FIELD: &str = "keys";

/// A scalar that fixtures write either as a JSON number or as a decimal string.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Numeric {
	Number(u64),
	Text(String),
}

impl Numeric {
	pub fn resolve(&self, field: &str) -> Result<u64, ReconError> {
		match self {
			Numeric::Number(n) => Ok(*n),
			Numeric::Text(s) => u64::from_str(s.trim())
				.map_err(|_| ReconError::malformed(format!("{} is not numeric: {:?}", field, s))),
		}
	}

	pub(crate) fn resolve_usize(&self, field: &str) -> Result<usize, ReconError> {
		let n = self.resolve(field)?;
		usize::try_from(n).map_err(|_| ReconError::malformed(format!("{} out of range: {}", field, n)))
	}
}

impl From<u64> for Numeric {
	fn from(n: u64) -> Self {
		Numeric::Number(n)
	}
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Keys {
	pub n: Numeric,
	pub k: Numeric,
}

/// One share before decoding.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ShareRecord {
	pub base: Numeric,
	pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Share {
	/// Field name of the share, the x-coordinate in decimal
	pub name: String,
	pub record: ShareRecord,
}

/// Raw input: the `keys` block plus every share in the order the source object listed them.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
	pub keys: Keys,
	pub shares: Vec<Share>,
}

impl Dataset {
	pub fn new(n: u64, k: u64) -> Self {
		Self {
			keys: Keys { n: n.into(), k: k.into() },
			shares: Vec::new(),
		}
	}

	pub fn with_share<N: Into<String>, V: Into<String>>(mut self, name: N, base: u64, value: V) -> Self {
		self.shares.push(Share {
			name: name.into(),
			record: ShareRecord { base: base.into(), value: value.into() },
		});
		self
	}

	pub fn from_json_str(s: &str) -> Result<Self, ReconError> {
		let value: Value = serde_json::from_str(s)
			.map_err(|e| ReconError::malformed(format!("invalid JSON: {}", e)))?;
		Self::from_value(&value)
	}

	pub fn from_value(value: &Value) -> Result<Self, ReconError> {
		let object = value
			.as_object()
			.ok_or_else(|| ReconError::malformed("dataset is not a JSON object"))?;

		let keys = object
			.get(KEYS_FIELD)
			.ok_or_else(|| ReconError::malformed("missing keys"))?;
		let keys = Keys::deserialize(keys)
			.map_err(|e| ReconError::malformed(format!("keys: {}", e)))?;

		let mut shares = Vec::with_capacity(object.len().saturating_sub(1));
		for (name, entry) in object.iter() {
			if name == KEYS_FIELD {
				continue;
			}
			let record = ShareRecord::deserialize(entry)
				.map_err(|e| ReconError::malformed(format!("share {:?}: {}", name, e)))?;
			shares.push(Share {
				name: name.clone(),
				record,
			});
		}

		Ok(Self { keys, shares })
	}
}

impl FromStr for Dataset {
	type Err = ReconError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::from_json_str(s)
	}
}

#[cfg(test)]
mod dataset_test {
	use crate::error::ReconError;
	use crate::input::dataset::{Dataset, Numeric};

	#[test]
	fn keeps_field_order() {
		let inp = r#"{"3": {"base": "10", "value": "1"}, "keys": {"n": 3, "k": 2}, "1": {"base": "2", "value": "1"}, "2": {"base": 8, "value": "7"}}"#;
		let dataset = Dataset::from_json_str(inp).unwrap();
		let names: Vec<&str> = dataset.shares.iter().map(|s| s.name.as_str()).collect();
		assert_eq!(names, vec!["3", "1", "2"]);
		assert_eq!(dataset.shares[2].record.base, Numeric::Number(8));
		assert_eq!(dataset.keys.k, Numeric::Number(2));
	}

	#[test]
	fn numeric_accepts_both_forms() {
		assert_eq!(Numeric::Number(16).resolve("base").unwrap(), 16);
		assert_eq!(Numeric::Text(String::from("16")).resolve("base").unwrap(), 16);
		assert!(matches!(Numeric::Text(String::from("sixteen")).resolve("base"), Err(ReconError::MalformedInput(_))));
	}

	#[test]
	fn missing_keys() {
		let err = Dataset::from_json_str(r#"{"1": {"base": "10", "value": "4"}}"#).unwrap_err();
		assert_eq!(err, ReconError::MalformedInput(String::from("missing keys")));
	}

	#[test]
	fn missing_k() {
		let err = Dataset::from_json_str(r#"{"keys": {"n": 1}}"#).unwrap_err();
		assert!(matches!(err, ReconError::MalformedInput(_)));
	}

	#[test]
	fn missing_value_or_base() {
		let no_value = r#"{"keys": {"n": 1, "k": 1}, "1": {"base": "10"}}"#;
		assert!(matches!(Dataset::from_json_str(no_value), Err(ReconError::MalformedInput(_))));
		let no_base = r#"{"keys": {"n": 1, "k": 1}, "1": {"value": "10"}}"#;
		assert!(matches!(Dataset::from_json_str(no_base), Err(ReconError::MalformedInput(_))));
	}

	#[test]
	fn not_an_object() {
		assert!(matches!(Dataset::from_json_str("[1, 2]"), Err(ReconError::MalformedInput(_))));
		assert!(matches!(Dataset::from_json_str("{"), Err(ReconError::MalformedInput(_))));
	}

	#[test]
	fn builder_matches_parsed() {
		let parsed: Dataset = r#"{"keys": {"n": 1, "k": 1}, "5": {"base": 10, "value": "9"}}"#.parse().unwrap();
		let built = Dataset::new(1, 1).with_share("5", 10, "9");
		assert_eq!(parsed, built);
	}
}
