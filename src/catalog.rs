use serde::{Serialize, Deserialize};

use crate::api::cosmetics;
use crate::api::cosmetics::schema::Response;
use crate::category::{Category, CategoryMap};
use crate::config::Config;
use crate::consts::DEFAULT_LANGUAGE;
use crate::dedup::HasId;
use crate::rarity;
use crate::storage;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to fetch data: {0}")]
    Fetch(#[from] anyhow::Error),

    #[error("Failed to write catalog: {0}")]
    Storage(#[from] storage::Error)
}

/// Reduced form of one catalog record, as stored in the catalog document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,

    /// Name localized to the requested language
    pub name: String,

    /// Rarity display label, used as the sort key
    pub rarity: String,

    pub files: IconSet
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconSet {
    pub big_icon: Option<String>,
    pub small_icon: Option<String>,
    pub featured: Option<String>
}

impl HasId for CatalogItem {
    #[inline]
    fn id(&self) -> &str {
        &self.id
    }
}

/// Reshape an API response into the catalog document
///
/// Records are routed by their declared type; anything outside the known
/// categories is dropped. Each category ends up sorted by (rarity rank, id)
pub fn build(response: Response, language: &str) -> CategoryMap<CatalogItem> {
    let mut items = CategoryMap::new();

    for cosmetic in response.data.br {
        let Some(category) = Category::from_type_value(&cosmetic.cosmetic_type.value) else {
            continue;
        };

        // Not every record is translated, so missing localizations
        // fall back to the default language name
        let name = cosmetic.name.get(language)
            .or_else(|| cosmetic.name.get(DEFAULT_LANGUAGE))
            .cloned()
            .unwrap_or_default();

        items.push(category, CatalogItem {
            id: cosmetic.id,
            name,
            rarity: cosmetic.rarity.displayValue,
            files: IconSet {
                big_icon: cosmetic.images.icon,
                small_icon: cosmetic.images.smallIcon,
                featured: cosmetic.images.featured
            }
        });
    }

    for category in Category::list() {
        rarity::sort_items(items.get_mut(*category));
    }

    items
}

/// Fetch the whole cosmetics catalog and write the catalog document
///
/// The document is shaped fully in memory and written once at the end,
/// so a failed run leaves the previous file untouched
#[tracing::instrument(level = "debug", skip(config))]
pub fn run(config: &Config) -> Result<(), Error> {
    tracing::debug!("Loading cosmetics catalog");

    let response = cosmetics::request(config.language.clone())?;
    let items = build(response, &config.language);

    tracing::debug!(items = items.len(), "Catalog shaped, writing document");

    storage::write_pretty_json(&config.catalog_path, &items)?;

    Ok(())
}
