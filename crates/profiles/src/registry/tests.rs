use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;

fn app(id: &str) -> AppId {
	AppId::new(id).unwrap()
}

fn profile(id: &str) -> ProfileSelection {
	ProfileSelection::Profile(ProfileId::new(id).unwrap())
}

#[test]
fn get_defaults_to_none() {
	assert_eq!(Registry::new().get(&app("com.app.x")), ProfileSelection::None);
}

#[test]
fn set_then_get() {
	let reg = Registry::new().set(app("com.app.x"), profile("ProfileA"));
	assert_eq!(reg.get(&app("com.app.x")), profile("ProfileA"));
	assert_eq!(reg.len(), 1);
}

#[test]
fn set_overrides_previous_profile() {
	let reg = Registry::new()
		.set(app("com.app.x"), profile("ProfileA"))
		.set(app("com.app.x"), profile("ProfileB"));
	assert_eq!(reg.get(&app("com.app.x")), profile("ProfileB"));
	assert_eq!(reg.len(), 1);
}

#[test]
fn set_none_removes() {
	let base = Registry::new()
		.set(app("com.app.x"), profile("ProfileA"))
		.set(app("com.app.y"), profile("ProfileB"));
	let cleared = base.clone().set(app("com.app.x"), ProfileSelection::None);
	assert!(!cleared.contains(&app("com.app.x")));
	assert_eq!(cleared, base.remove(&app("com.app.x")));
}

#[test]
fn remove_absent_is_noop() {
	let reg = Registry::new().set(app("com.app.y"), profile("ProfileB"));
	assert_eq!(reg.clone().remove(&app("com.app.x")), reg);
}

#[test]
fn set_leaves_unrelated_entries() {
	let reg = Registry::new()
		.set(app("com.app.x"), profile("ProfileA"))
		.set(app("com.app.y"), profile("ProfileB"));
	assert_eq!(reg.get(&app("com.app.x")), profile("ProfileA"));
}

fn arb_app() -> impl Strategy<Value = AppId> {
	"[a-z]{1,3}".prop_map(|s| AppId::new(s).unwrap())
}

fn arb_selection() -> impl Strategy<Value = ProfileSelection> {
	prop_oneof![
		Just(ProfileSelection::None),
		"P[0-9]".prop_map(|s| ProfileSelection::Profile(ProfileId::new(s).unwrap())),
	]
}

fn arb_registry() -> impl Strategy<Value = Registry> {
	prop::collection::vec((arb_app(), arb_selection()), 0..8)
		.prop_map(|ops| ops.into_iter().fold(Registry::new(), |reg, (a, s)| reg.set(a, s)))
}

proptest! {
	#[test]
	fn prop_remove_idempotent(reg in arb_registry(), k in arb_app()) {
		let once = reg.clone().remove(&k);
		prop_assert_eq!(once.clone().remove(&k), once);
	}

	#[test]
	fn prop_set_idempotent(reg in arb_registry(), k in arb_app(), v in arb_selection()) {
		let once = reg.set(k.clone(), v.clone());
		prop_assert_eq!(once.clone().set(k, v), once);
	}

	#[test]
	fn prop_set_none_is_remove(reg in arb_registry(), k in arb_app()) {
		prop_assert_eq!(reg.clone().set(k.clone(), ProfileSelection::None), reg.remove(&k));
	}

	/// Mutating one key never touches another.
	#[test]
	fn prop_set_preserves_other_keys(reg in arb_registry(), k in arb_app(), other in arb_app(), v in arb_selection()) {
		prop_assume!(k != other);
		let before = reg.get(&other);
		prop_assert_eq!(reg.set(k, v).get(&other), before);
	}
}
