use tracing::Level;

use structopt::StructOpt;
use recon_lib::{RecoveryOptions, Selection};
use crate::config::Conf;
use std::path::PathBuf;

mod config;
mod runner;

const DEFAULT_TESTCASES: [&str; 2] = ["testcase1.json", "testcase2.json"];

#[derive(Debug, StructOpt, Clone)]
#[structopt(name = "Recon", about = "Recovers the secret constant term from JSON share files.", version = "0.1.0")]
struct Opt {
	/// Share files
	///
	/// JSON files holding a `keys` block with n and k, plus one entry per share keyed by its x-coordinate.
	/// Defaults to testcase1.json and testcase2.json in the working directory.
	#[structopt(parse(from_os_str))]
	files: Vec<PathBuf>,

	/// Path to TOML configuration
	#[structopt(long, short, parse(from_os_str))]
	config: Option<PathBuf>,

	/// Which k shares to use, "sorted" (smallest x first) or "input" (file order)
	#[structopt(long)]
	selection: Option<Selection>,

	/// Fail when the constant term isn't close to an integer
	#[structopt(long)]
	strict: bool,

	/// Relative threshold below which a pivot counts as zero
	#[structopt(long)]
	pivot_epsilon: Option<f64>,

	/// Raise log verbosity, -v for debug and -vv for trace
	#[structopt(short, long, parse(from_occurrences))]
	verbose: u8,
}

impl Opt {
	fn level(&self, conf: &Conf) -> anyhow::Result<Level> {
		match self.verbose {
			0 => conf.logging.level(),
			1 => Ok(Level::DEBUG),
			_ => Ok(Level::TRACE),
		}
	}

	fn recovery_options(&self, conf: &Conf) -> RecoveryOptions {
		let mut options = RecoveryOptions::from(&conf.recovery);
		if let Some(selection) = self.selection {
			options.selection = selection;
		}
		if let Some(epsilon) = self.pivot_epsilon {
			options.pivot_epsilon = epsilon;
		}
		options.strict |= self.strict;
		options
	}

	fn files(&self) -> Vec<PathBuf> {
		if self.files.is_empty() {
			DEFAULT_TESTCASES.iter().map(PathBuf::from).collect()
		} else {
			self.files.clone()
		}
	}
}

fn main() -> anyhow::Result<()> {
	let opt = Opt::from_args();

	let conf = match &opt.config {
		Some(path) => Conf::from_path(path)?,
		None => Conf::default(),
	};

	let collector = tracing_subscriber::fmt()
		.with_max_level(opt.level(&conf)?)
		.with_writer(std::io::stderr)
		.finish();
	tracing::subscriber::set_global_default(collector)?;

	let options = opt.recovery_options(&conf);
	let files = opt.files();

	let stdout = std::io::stdout();
	let stderr = std::io::stderr();
	let failures = runner::run_all(&files, &options, &mut stdout.lock(), &mut stderr.lock())?;
	if failures > 0 {
		anyhow::bail!("{} of {} testcases failed", failures, files.len());
	}
	Ok(())
}

#[cfg(test)]
mod opt_test {
	use crate::config::Conf;
	use crate::Opt;
	use recon_lib::Selection;
	use std::path::PathBuf;
	use std::str::FromStr;
	use structopt::StructOpt;
	use tracing::Level;

	#[test]
	fn defaults() {
		let opt = Opt::from_iter(vec!["recon"]);
		let conf = Conf::default();
		assert_eq!(opt.files(), vec![PathBuf::from("testcase1.json"), PathBuf::from("testcase2.json")]);
		assert_eq!(opt.level(&conf).unwrap(), Level::INFO);
		assert_eq!(opt.recovery_options(&conf), recon_lib::RecoveryOptions::default());
	}

	#[test]
	fn flags_override_config() {
		let conf = Conf::from_str("[recovery]\nselection = \"input\"\npivot_epsilon = 1e-6\n[logging]\nlevel = \"warn\"\n").unwrap();

		let opt = Opt::from_iter(vec!["recon", "a.json"]);
		let options = opt.recovery_options(&conf);
		assert_eq!(options.selection, Selection::InputOrder);
		assert_eq!(options.pivot_epsilon, 1e-6);
		assert_eq!(opt.level(&conf).unwrap(), Level::WARN);

		let opt = Opt::from_iter(vec!["recon", "--selection", "sorted", "--pivot-epsilon", "1e-10", "--strict", "-vv", "a.json", "b.json"]);
		let options = opt.recovery_options(&conf);
		assert_eq!(options.selection, Selection::SortedByX);
		assert_eq!(options.pivot_epsilon, 1e-10);
		assert!(options.strict);
		assert_eq!(opt.level(&conf).unwrap(), Level::TRACE);
		assert_eq!(opt.files().len(), 2);
	}

	#[test]
	fn unknown_selection() {
		assert!(Opt::from_iter_safe(vec!["recon", "--selection", "random"]).is_err());
	}
}
