use crate::category::Category;

mod dedup;
mod catalog;
mod storage;

#[test]
fn test_category_keys_roundtrip() {
    for category in Category::list() {
        assert_eq!(Category::from_key(category.key()), Some(*category));
    }
}

#[test]
fn test_category_type_values() {
    assert_eq!(Category::from_type_value("outfit"), Some(Category::Outfits));
    assert_eq!(Category::from_type_value("pickaxe"), Some(Category::Pickaxes));
    assert_eq!(Category::from_type_value("loadingscreen"), Some(Category::LoadingScreens));

    assert_eq!(Category::from_type_value("banner"), None);
    assert_eq!(Category::from_type_value(""), None);
}

#[test]
fn test_from_key_is_verbatim() {
    // Battle pass routing matches document keys only, never type values
    assert_eq!(Category::from_key("outfit"), None);
    assert_eq!(Category::from_key("loading_screens"), Some(Category::LoadingScreens));
    assert_eq!(Category::from_key("loadingscreen"), None);
}

#[test]
fn test_rarity_ranks() {
    assert_eq!(crate::rarity::rank("Mythic"), 0);
    assert_eq!(crate::rarity::rank("Legendary"), 1);
    assert_eq!(crate::rarity::rank("Common"), 15);

    assert_eq!(crate::rarity::rank("Totally New Series"), 100);
    assert_eq!(crate::rarity::rank(""), 100);
}
