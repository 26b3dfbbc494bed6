//! Subcommand execution against an assignment controller.

use std::io::Write;

use anyhow::Context;
use appspoof_assign::{AssignmentController, Termination};
use appspoof_process::ProcessController;
use appspoof_profiles::{AppId, ProfileSelection};
use appspoof_settings::SettingsStore;

use crate::cli::Command;

/// Runs one subcommand, writing its report to `out`.
pub fn execute<S, P>(controller: &AssignmentController<S, P>, command: Command, out: &mut impl Write) -> anyhow::Result<()>
where
	S: SettingsStore,
	P: ProcessController,
{
	match command {
		Command::List => {
			let registry = controller.load()?;
			let mut rows: Vec<_> = registry.iter().collect();
			rows.sort();
			for (app, profile) in rows {
				let selection = ProfileSelection::Profile(profile.clone());
				writeln!(out, "{app}\t{}", controller.catalog().label(&selection))?;
			}
		}
		Command::Get { app } => {
			let selection = controller.load()?.get(&app);
			writeln!(out, "{selection}\t{}", controller.catalog().label(&selection))?;
		}
		Command::Set { app, profile } => assign(controller, &app, profile, out)?,
		Command::Clear { app } => assign(controller, &app, ProfileSelection::None, out)?,
		Command::Profiles => {
			for (index, entry) in controller.catalog().entries().iter().enumerate() {
				writeln!(out, "{index}\t{}\t{}", entry.selection, entry.label)?;
			}
		}
	}
	Ok(())
}

fn assign<S, P>(
	controller: &AssignmentController<S, P>,
	app: &AppId,
	selection: ProfileSelection,
	out: &mut impl Write,
) -> anyhow::Result<()>
where
	S: SettingsStore,
	P: ProcessController,
{
	let outcome = controller
		.assign(app, selection)
		.with_context(|| format!("could not update profile for {app}"))?;

	let label = controller.catalog().label(&outcome.current);
	writeln!(out, "{app}: {} -> {label}", outcome.previous)?;
	if let Termination::Failed(error) = &outcome.termination {
		writeln!(out, "warning: {error}; restart {app} to apply")?;
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use appspoof_assign::DEFAULT_SETTING_KEY;
	use appspoof_process::NoTermination;
	use appspoof_profiles::{ProfileCatalog, ValidationPolicy};
	use appspoof_settings::MemoryStore;
	use pretty_assertions::assert_eq;

	use super::*;

	fn controller(initial: &str) -> AssignmentController<MemoryStore, NoTermination> {
		let catalog = ProfileCatalog::from_pairs("Off", [("Pixel9", "Pixel 9 Pro")]).unwrap();
		AssignmentController::new(MemoryStore::with_value(DEFAULT_SETTING_KEY, initial), NoTermination)
			.with_catalog(catalog, ValidationPolicy::Permissive)
	}

	fn run(controller: &AssignmentController<MemoryStore, NoTermination>, command: Command) -> String {
		let mut out = Vec::new();
		execute(controller, command, &mut out).unwrap();
		String::from_utf8(out).unwrap()
	}

	fn app(id: &str) -> AppId {
		AppId::new(id).unwrap()
	}

	#[test]
	fn list_uses_catalog_labels() {
		let c = controller("com.app.y:Custom,com.app.x:Pixel9");
		assert_eq!(run(&c, Command::List), "com.app.x\tPixel 9 Pro\ncom.app.y\tCustom\n");
	}

	#[test]
	fn get_unassigned_reports_none() {
		let c = controller("");
		assert_eq!(run(&c, Command::Get { app: app("com.app.x") }), "None\tOff\n");
	}

	#[test]
	fn set_then_clear() {
		let c = controller("");
		let set = Command::Set {
			app: app("com.app.x"),
			profile: "Pixel9".parse().unwrap(),
		};
		assert_eq!(run(&c, set), "com.app.x: None -> Pixel 9 Pro\n");
		assert_eq!(
			c.store().read_string(DEFAULT_SETTING_KEY).unwrap().as_deref(),
			Some("com.app.x:Pixel9")
		);

		assert_eq!(run(&c, Command::Clear { app: app("com.app.x") }), "com.app.x: Pixel9 -> Off\n");
		assert_eq!(c.store().read_string(DEFAULT_SETTING_KEY).unwrap().as_deref(), Some(""));
	}

	#[test]
	fn profiles_lists_catalog_in_order() {
		let c = controller("");
		assert_eq!(run(&c, Command::Profiles), "0\tNone\tOff\n1\tPixel9\tPixel 9 Pro\n");
	}
}
