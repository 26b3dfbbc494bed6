use rstest::{fixture, rstest};

use super::*;

#[fixture]
fn catalog() -> ProfileCatalog {
	ProfileCatalog::from_pairs("Off", [("Pixel9", "Pixel 9 Pro"), ("Tablet", "Generic tablet")]).unwrap()
}

fn sel(id: &str) -> ProfileSelection {
	id.parse().unwrap()
}

#[rstest]
fn none_entry_comes_first(catalog: ProfileCatalog) {
	assert_eq!(catalog.len(), 3);
	assert_eq!(catalog.entries()[0].selection, ProfileSelection::None);
	assert_eq!(catalog.entries()[0].label, "Off");
	assert_eq!(catalog.index_of(&sel("Tablet")), 2);
}

#[rstest]
fn unknown_selection_falls_back_to_none_index(catalog: ProfileCatalog) {
	assert_eq!(catalog.index_of(&sel("Retired")), 0);
	assert_eq!(catalog.index_of(&ProfileSelection::None), 0);
}

#[rstest]
#[case::listed("Pixel9", "Pixel 9 Pro")]
#[case::none("None", "Off")]
#[case::unlisted("Retired", "Retired")]
fn labels(catalog: ProfileCatalog, #[case] id: &str, #[case] expected: &str) {
	let selection = sel(id);
	assert_eq!(catalog.label(&selection), expected);
}

#[rstest]
fn permissive_accepts_unknown(catalog: ProfileCatalog) {
	assert_eq!(catalog.validate(&sel("Retired"), ValidationPolicy::Permissive), Ok(()));
}

#[rstest]
fn strict_rejects_unknown(catalog: ProfileCatalog) {
	assert_eq!(
		catalog.validate(&sel("Retired"), ValidationPolicy::Strict),
		Err(CatalogError::Unknown(ProfileId::new("Retired").unwrap()))
	);
	assert_eq!(catalog.validate(&sel("Pixel9"), ValidationPolicy::Strict), Ok(()));
	assert_eq!(catalog.validate(&ProfileSelection::None, ValidationPolicy::Strict), Ok(()));
}

#[test]
fn duplicate_ids_are_rejected() {
	let err = ProfileCatalog::from_pairs("None", [("A", "a"), ("A", "again")]).unwrap_err();
	assert_eq!(err, CatalogError::Duplicate(ProfileId::new("A").unwrap()));
}

#[test]
fn sentinel_cannot_be_declared() {
	let err = ProfileCatalog::from_pairs("None", [("None", "nothing")]).unwrap_err();
	assert_eq!(err, CatalogError::InvalidId(IdError::Reserved));
}

#[test]
fn default_catalog_only_has_none() {
	let catalog = ProfileCatalog::default();
	assert_eq!(catalog.len(), 1);
	assert_eq!(catalog.label(&ProfileSelection::None), NONE_TOKEN);
}
