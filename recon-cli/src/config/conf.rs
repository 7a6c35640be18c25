use anyhow::Context;
use recon_lib::recovery::{RecoveryOptions, Selection, DEFAULT_RESIDUAL_TOLERANCE};
use recon_lib::linalg::DEFAULT_PIVOT_EPSILON;
use serde_derive::Deserialize;
use std::fs::read_to_string;
use std::path::Path;
use std::str::FromStr;
use tracing::Level;

#[derive(Deserialize, Debug, Default, PartialEq)]
#[serde(default)]
pub(crate) struct Conf {
	pub recovery: RecoveryConf,
	pub logging: LoggingConf,
}

#[derive(Deserialize, Debug, PartialEq)]
#[serde(default)]
pub(crate) struct RecoveryConf {
	pub selection: Selection,
	pub pivot_epsilon: f64,
	pub residual_tolerance: f64,
	pub strict: bool,
}

#[derive(Deserialize, Debug, PartialEq)]
#[serde(default)]
pub(crate) struct LoggingConf {
	pub level: String,
}

impl Default for RecoveryConf {
	fn default() -> Self {
		Self {
			selection: Selection::default(),
			pivot_epsilon: DEFAULT_PIVOT_EPSILON,
			residual_tolerance: DEFAULT_RESIDUAL_TOLERANCE,
			strict: false,
		}
	}
}

impl Default for LoggingConf {
	fn default() -> Self {
		Self {
			level: String::from("info"),
		}
	}
}

impl From<&RecoveryConf> for RecoveryOptions {
	fn from(conf: &RecoveryConf) -> Self {
		RecoveryOptions {
			selection: conf.selection,
			pivot_epsilon: conf.pivot_epsilon,
			residual_tolerance: conf.residual_tolerance,
			strict: conf.strict,
		}
	}
}

impl LoggingConf {
	pub fn level(&self) -> anyhow::Result<Level> {
		Level::from_str(&self.level)
			.map_err(|_| anyhow::anyhow!("Unknown log level {:?}", self.level))
	}
}

impl FromStr for Conf {
	type Err = toml::de::Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		toml::from_str(s)
	}
}

impl Conf {
	pub fn from_path(path: &Path) -> anyhow::Result<Self> {
		let content = read_to_string(path)
			.with_context(|| format!("Couldn't read config file {}", path.display()))?;
		let conf = Conf::from_str(&content)
			.with_context(|| format!("Couldn't parse config file {}", path.display()))?;
		Ok(conf)
	}
}
