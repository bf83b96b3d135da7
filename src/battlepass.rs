use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;

use serde::{Serialize, Deserialize};

use crate::api::battlepass;
use crate::api::battlepass::schema::Response;
use crate::category::{Category, CategoryMap};
use crate::config::Config;
use crate::consts::FIRST_BATTLEPASS_SEASON;
use crate::dedup::HasId;
use crate::storage;

/// Raw id prefixes marking character items
pub const CHARACTER_ID_PREFIXES: &[&str] = &["CID", "Character"];

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to fetch data: {0}")]
    Fetch(#[from] anyhow::Error),

    #[error("Failed to read catalog document: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to write season catalog: {0}")]
    Storage(#[from] storage::Error)
}

/// Season number to rewards, in ascending season order
pub type SeasonCatalog = BTreeMap<u32, CategoryMap<SeasonRewardRecord>>;

/// Unlock tier of a reward. Seasons that report neither a level
/// requirement nor a tier number store an empty string instead,
/// keeping the document shape stable across seasons
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Tier {
    Level(u32),
    Empty(String)
}

impl Default for Tier {
    #[inline]
    fn default() -> Self {
        Self::Empty(String::new())
    }
}

impl From<Option<u32>> for Tier {
    fn from(level: Option<u32>) -> Self {
        match level {
            Some(level) => Self::Level(level),
            None => Self::default()
        }
    }
}

/// One classified battle pass reward, as stored in the season catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonRewardRecord {
    pub id: String,
    pub name: String,

    /// Rarity id as the battle pass endpoint reports it
    pub rarity: String,

    pub tier: Tier,

    /// Human readable season label, empty when the response has none
    pub season_name: String
}

impl HasId for SeasonRewardRecord {
    #[inline]
    fn id(&self) -> &str {
        &self.id
    }
}

/// Read the canonical outfit ids from a previously written catalog
/// document, in file order
pub fn load_outfit_ids(catalog_path: &Path) -> Result<Vec<String>, Error> {
    #[derive(Deserialize)]
    struct OutfitIndex {
        outfits: Vec<OutfitRef>
    }

    #[derive(Deserialize)]
    struct OutfitRef {
        id: String
    }

    let index: OutfitIndex = serde_json::from_reader(File::open(catalog_path)?)?;

    Ok(index.outfits.into_iter()
        .map(|outfit| outfit.id)
        .collect())
}

/// Reconcile a battle pass outfit id with the catalog
///
/// Battle pass responses carry synthetic fragments (`VTID_` infixes,
/// `_StyleA` variants) which the catalog doesn't know about. Those are
/// stripped, then the first catalog id containing the stripped value is
/// taken. Short fragments can match the wrong outfit; the upstream data
/// has no better join key, so the first hit wins. When nothing matches,
/// the stripped value itself is kept
pub fn resolve_outfit_id(raw_id: &str, outfit_ids: &[String]) -> String {
    let stripped = raw_id.replace("VTID_", "").replace("_StyleA", "");

    outfit_ids.iter()
        .find(|id| id.contains(&stripped))
        .cloned()
        .unwrap_or(stripped)
}

/// Classify one season's rewards into the category schema
///
/// Rewards keep the order they appear in the response; there's no sort
/// pass here. Rewards of unrecognized types are dropped
pub fn build_season(response: Response, outfit_ids: &[String]) -> CategoryMap<SeasonRewardRecord> {
    let mut rewards = CategoryMap::new();

    for reward in response.rewards {
        let item = reward.item;
        let type_id = item.item_type.id.to_lowercase();

        let tier = Tier::from(reward.levelsNeededForUnlock.or(reward.tier));

        let season_name = item.battlepass
            .and_then(|battlepass| battlepass.displayText.chapterSeason)
            .unwrap_or_default();

        let is_character_item = CHARACTER_ID_PREFIXES.iter()
            .any(|prefix| item.id.starts_with(prefix));

        if type_id == "outfit" && is_character_item {
            rewards.push(Category::Outfits, SeasonRewardRecord {
                id: resolve_outfit_id(&item.id, outfit_ids),
                name: item.name,
                rarity: item.rarity.id,
                tier,
                season_name
            });
        }

        else if let Some(category) = Category::from_key(&type_id) {
            rewards.push(category, SeasonRewardRecord {
                id: item.id,
                name: item.name,
                rarity: item.rarity.id,
                tier,
                season_name
            });
        }
    }

    rewards
}

/// Fetch every season's battle pass and write the season catalog document
///
/// Seasons are fetched one at a time, each response fully handled before
/// the next request. A failure on any season aborts the whole run and
/// nothing is written
#[tracing::instrument(level = "debug", skip(config))]
pub fn run(config: &Config) -> Result<(), Error> {
    tracing::debug!("Loading battle pass seasons");

    let outfit_ids = load_outfit_ids(&config.catalog_path)?;

    let mut seasons = SeasonCatalog::new();

    for season in FIRST_BATTLEPASS_SEASON..=config.current_season {
        let response = battlepass::request(&config.api_key, &config.language, season)?;
        let rewards = build_season(response, &outfit_ids);

        tracing::debug!(season, rewards = rewards.len(), "Season classified");

        seasons.insert(season, rewards);
    }

    storage::write_pretty_json(&config.battlepass_path, &seasons)?;

    Ok(())
}
