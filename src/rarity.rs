use crate::catalog::CatalogItem;

/// Rank a rarity below all named ones when it's not in the table
pub const UNKNOWN_RARITY_RANK: u8 = 100;

/// Sort priority of a rarity display label
///
/// The table is a closed set; labels the game adds later fall through
/// to `UNKNOWN_RARITY_RANK` and sort after everything named here
pub fn rank(rarity: &str) -> u8 {
    match rarity {
        "Mythic" => 0,
        "Legendary" => 1,
        "DARK SERIES" => 2,
        "Slurp Series" => 3,
        "Star Wars Series" => 4,
        "MARVEL SERIES" => 5,
        "Lava Series" => 6,
        "Frozen Series" => 7,
        "Gaming Legends Series" => 8,
        "Shadow Series" => 9,
        "Icon Series" => 10,
        "DC SERIES" => 11,
        "Epic" => 12,
        "Rare" => 13,
        "Uncommon" => 14,
        "Common" => 15,

        _ => UNKNOWN_RARITY_RANK
    }
}

/// Sort catalog items ascending by (rarity rank, id)
///
/// The key is total over (rank, id), so sorting the same set of items
/// always produces the same sequence
pub fn sort_items(items: &mut [CatalogItem]) {
    items.sort_by(|a, b| {
        rank(&a.rarity).cmp(&rank(&b.rarity))
            .then_with(|| a.id.cmp(&b.id))
    });
}
