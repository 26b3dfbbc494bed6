//! CLI schema for the appspoof binary.

use std::path::PathBuf;

use appspoof_profiles::{AppId, ProfileSelection};
use clap::{Parser, Subcommand};


#[derive(Parser, Debug)]
#[command(name = "appspoof")]
#[command(about = "Assign spoof profiles to installed applications")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Configuration file (defaults to <config dir>/appspoof/config.toml)
	#[arg(long, short = 'c', value_name = "PATH", global = true)]
	pub config: Option<PathBuf>,

	/// Directory of the settings store, overriding the config file
	#[arg(long, value_name = "DIR", global = true)]
	pub store_dir: Option<PathBuf>,

	/// Reject profiles that are not listed in the config
	#[arg(long, global = true)]
	pub strict: bool,

	/// Persist changes without terminating running apps
	#[arg(long, global = true)]
	pub no_kill: bool,

	/// Verbose logging
	#[arg(long, short = 'v', global = true)]
	pub verbose: bool,

	/// Subcommand to execute.
	#[command(subcommand)]
	pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
	/// List all assignments
	List,
	/// Show the profile assigned to an app
	Get {
		/// Package name, e.g. com.example.app
		app: AppId,
	},
	/// Assign a profile to an app ("None" clears it)
	Set {
		/// Package name, e.g. com.example.app
		app: AppId,
		/// Profile id from `appspoof profiles`
		profile: ProfileSelection,
	},
	/// Remove an app's assignment
	Clear {
		/// Package name, e.g. com.example.app
		app: AppId,
	},
	/// List selectable profiles
	Profiles,
}
