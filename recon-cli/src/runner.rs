use anyhow::Context;
use recon_lib::{recover, Dataset, Recovery, RecoveryOptions};
use std::fs::read_to_string;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::*;

pub(crate) fn recover_file(path: &Path, options: &RecoveryOptions) -> anyhow::Result<Recovery> {
	let content = read_to_string(path)
		.with_context(|| format!("Couldn't read {}", path.display()))?;
	let dataset = Dataset::from_json_str(&content)
		.with_context(|| format!("Couldn't parse {}", path.display()))?;
	let recovery = recover(&dataset, options)?;
	debug!("{} => raw constant term {} (residual {})", path.display(), recovery.raw, recovery.residual);
	Ok(recovery)
}

/// Recovers every file in order and returns how many failed.
pub(crate) fn run_all<O: Write, E: Write>(files: &[PathBuf], options: &RecoveryOptions, out: &mut O, err: &mut E) -> anyhow::Result<usize> {
	let mut failures = 0;
	for (i, path) in files.iter().enumerate() {
		let number = i + 1;
		match recover_file(path, options) {
			Ok(recovery) => {
				info!("Recovered testcase {} from {}", number, path.display());
				writeln!(out, "Secret for testcase {}: {}", number, recovery.secret)?;
			}
			Err(e) => {
				error!("Testcase {} ({}) failed: {:#}", number, path.display(), e);
				writeln!(err, "Failed to recover testcase {} ({}): {:#}", number, path.display(), e)?;
				failures += 1;
			}
		}
	}
	Ok(failures)
}
