//! appspoof binary.
//!
//! Reads and edits the per-app spoof profile registry stored in a
//! file-backed settings store, restarting affected apps on change.

mod cli;
mod commands;

use appspoof_assign::AssignmentController;
use appspoof_config::Config;
use appspoof_process::{NoTermination, ProcessController, SystemProcessController};
use appspoof_profiles::ValidationPolicy;
use appspoof_settings::FileStore;
use clap::Parser;
use cli::Cli;
use tracing::debug;

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();

	let subscriber = tracing_subscriber::fmt()
		.with_max_level(if cli.verbose {
			tracing::Level::DEBUG
		} else {
			tracing::Level::INFO
		})
		.with_writer(std::io::stderr)
		.finish();
	tracing::subscriber::set_global_default(subscriber)?;

	let mut config = Config::load_or_default(cli.config.as_deref())?;
	if let Some(dir) = cli.store_dir {
		config.store_dir = dir;
	}
	if cli.strict {
		config.validation = ValidationPolicy::Strict;
	}
	if cli.no_kill {
		config.terminate = false;
	}
	debug!(store = %config.store_dir.display(), key = %config.setting_key, "using settings store");

	let processes: Box<dyn ProcessController> = if config.terminate {
		Box::new(SystemProcessController::new())
	} else {
		Box::new(NoTermination)
	};
	let controller = AssignmentController::new(FileStore::new(config.store_dir), processes)
		.with_key(config.setting_key)
		.with_catalog(config.catalog, config.validation);

	commands::execute(&controller, cli.command, &mut std::io::stdout().lock())
}
