use std::collections::HashMap;

use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub data: Data
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Data {
    /// Battle royale cosmetics. The only section the catalog cares about
    #[serde(default)]
    pub br: Vec<Cosmetic>
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cosmetic {
    pub id: String,

    /// Display name per language code. "en" is always present
    #[serde(default)]
    pub name: HashMap<String, String>,

    #[serde(rename = "type")]
    pub cosmetic_type: CosmeticType,

    pub rarity: Rarity,

    #[serde(default)]
    pub images: Images
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CosmeticType {
    #[serde(default)]
    pub value: String
}

#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rarity {
    #[serde(default)]
    pub displayValue: String
}

#[allow(non_snake_case)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Images {
    pub icon: Option<String>,
    pub smallIcon: Option<String>,
    pub featured: Option<String>
}
