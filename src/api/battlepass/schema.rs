use serde::{Serialize, Deserialize};

// The endpoint is tolerant by nature: early seasons miss whole
// subobjects, so almost everything defaults instead of failing

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    #[serde(default)]
    pub rewards: Vec<Reward>
}

#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reward {
    #[serde(default)]
    pub item: Item,

    /// Account level required to unlock the reward. Newer seasons
    /// report this instead of a plain tier number
    pub levelsNeededForUnlock: Option<u32>,

    pub tier: Option<u32>
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default)]
    pub id: String,

    #[serde(default, rename = "type")]
    pub item_type: ItemType,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub rarity: ItemRarity,

    pub battlepass: Option<BattlepassInfo>
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemType {
    #[serde(default)]
    pub id: String
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRarity {
    #[serde(default)]
    pub id: String
}

#[allow(non_snake_case)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattlepassInfo {
    #[serde(default)]
    pub displayText: DisplayText
}

#[allow(non_snake_case)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayText {
    pub chapterSeason: Option<String>
}
