use appspoof_profiles::{AppId, ProfileSelection, Registry};

use crate::AssignOutcome;

/// Read-only projection of the registry for list rendering.
///
/// Seeded once from [`crate::AssignmentController::load`] and replaced
/// from each successful [`AssignOutcome`]. It never writes back.
#[derive(Debug, Clone, Default)]
pub struct AssignmentView {
	registry: Registry,
}

impl AssignmentView {
	pub fn new(registry: Registry) -> Self {
		Self { registry }
	}

	/// Adopts the registry written by a committed assignment.
	pub fn refresh(&mut self, outcome: &AssignOutcome) {
		self.registry = outcome.registry.clone();
	}

	pub fn profile(&self, app: &AppId) -> ProfileSelection {
		self.registry.get(app)
	}

	pub fn registry(&self) -> &Registry {
		&self.registry
	}

	/// Row title: `"Label (Profile)"` when assigned, else just `"Label"`.
	pub fn display_label(&self, app: &AppId, app_label: &str) -> String {
		match self.registry.get(app) {
			ProfileSelection::None => app_label.to_owned(),
			ProfileSelection::Profile(profile) => format!("{app_label} ({profile})"),
		}
	}
}

/// Per-session list filter state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
	/// Case-insensitive substring matched against app labels.
	pub search: String,
	pub show_system: bool,
}

impl ViewState {
	pub fn toggle_system(&mut self) {
		self.show_system = !self.show_system;
	}

	/// Whether an app with `label` is listed under the current filter.
	pub fn matches(&self, label: &str, is_system: bool) -> bool {
		if is_system && !self.show_system {
			return false;
		}
		self.search.is_empty() || label.to_lowercase().contains(&self.search.to_lowercase())
	}
}

#[cfg(test)]
mod tests {
	use appspoof_process::TerminationReport;
	use appspoof_profiles::ProfileId;
	use rstest::rstest;

	use super::*;
	use crate::Termination;

	fn app(id: &str) -> AppId {
		AppId::new(id).unwrap()
	}

	#[test]
	fn display_label_shows_assigned_profile() {
		let registry = Registry::new().set(app("com.app.x"), ProfileId::new("Pixel9").unwrap().into());
		let view = AssignmentView::new(registry);
		assert_eq!(view.display_label(&app("com.app.x"), "Camera"), "Camera (Pixel9)");
		assert_eq!(view.display_label(&app("com.app.y"), "Maps"), "Maps");
	}

	#[test]
	fn refresh_adopts_outcome_registry() {
		let mut view = AssignmentView::default();
		let registry = Registry::new().set(app("com.app.x"), ProfileId::new("Pixel9").unwrap().into());
		let outcome = AssignOutcome {
			app_id: app("com.app.x"),
			previous: ProfileSelection::None,
			current: ProfileId::new("Pixel9").unwrap().into(),
			registry: registry.clone(),
			termination: Termination::Terminated(TerminationReport::default()),
		};
		view.refresh(&outcome);
		assert_eq!(view.registry(), &registry);
		assert_eq!(view.profile(&app("com.app.x")), outcome.current);
	}

	#[rstest]
	#[case::empty_search("", "Camera", false, true)]
	#[case::case_insensitive("cam", "Camera", false, true)]
	#[case::no_match("maps", "Camera", false, false)]
	#[case::system_hidden("", "Settings", true, false)]
	fn filter(#[case] search: &str, #[case] label: &str, #[case] is_system: bool, #[case] expected: bool) {
		let state = ViewState {
			search: search.into(),
			show_system: false,
		};
		assert_eq!(state.matches(label, is_system), expected);
	}

	#[test]
	fn toggled_state_lists_system_apps() {
		let mut state = ViewState::default();
		state.toggle_system();
		assert!(state.matches("Settings", true));
	}
}
