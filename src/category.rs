use serde::{Serialize, Deserialize};

/// Closed set of cosmetic categories both documents are keyed by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Outfits,
    Pickaxes,
    Emotes,
    Backpacks,
    Toys,
    Emojis,
    Gliders,
    LoadingScreens,
    Sprays,
    Wraps,
    Contrails
}

impl Category {
    pub fn list() -> &'static [Category] {
        &[
            Self::Outfits,
            Self::Pickaxes,
            Self::Emotes,
            Self::Backpacks,
            Self::Toys,
            Self::Emojis,
            Self::Gliders,
            Self::LoadingScreens,
            Self::Sprays,
            Self::Wraps,
            Self::Contrails
        ]
    }

    /// Key of this category in the output documents
    pub fn key(&self) -> &'static str {
        match self {
            Category::Outfits => "outfits",
            Category::Pickaxes => "pickaxes",
            Category::Emotes => "emotes",
            Category::Backpacks => "backpacks",
            Category::Toys => "toys",
            Category::Emojis => "emojis",
            Category::Gliders => "gliders",
            Category::LoadingScreens => "loading_screens",
            Category::Sprays => "sprays",
            Category::Wraps => "wraps",
            Category::Contrails => "contrails"
        }
    }

    /// Resolve a verbatim document key. Battle pass rewards are routed
    /// through this, so only exact key matches count
    pub fn from_key(key: &str) -> Option<Category> {
        match key {
            "outfits" => Some(Category::Outfits),
            "pickaxes" => Some(Category::Pickaxes),
            "emotes" => Some(Category::Emotes),
            "backpacks" => Some(Category::Backpacks),
            "toys" => Some(Category::Toys),
            "emojis" => Some(Category::Emojis),
            "gliders" => Some(Category::Gliders),
            "loading_screens" => Some(Category::LoadingScreens),
            "sprays" => Some(Category::Sprays),
            "wraps" => Some(Category::Wraps),
            "contrails" => Some(Category::Contrails),

            _ => None
        }
    }

    /// Resolve a `type.value` field of a catalog record
    ///
    /// Unknown values return `None` and the record is dropped, there's
    /// no bucket for unrecognized types
    pub fn from_type_value(value: &str) -> Option<Category> {
        match value {
            "outfit" => Some(Category::Outfits),
            "pickaxe" => Some(Category::Pickaxes),
            "emote" => Some(Category::Emotes),
            "backpack" => Some(Category::Backpacks),
            "toy" => Some(Category::Toys),
            "emoji" => Some(Category::Emojis),
            "glider" => Some(Category::Gliders),
            "loadingscreen" => Some(Category::LoadingScreens),
            "spray" => Some(Category::Sprays),
            "wrap" => Some(Category::Wraps),
            "contrail" => Some(Category::Contrails),

            _ => None
        }
    }
}

/// One ordered list of records per category
///
/// Serde field order is the canonical key order of the output documents,
/// and each list keeps its insertion order, so the "dict preserves the
/// order items arrived in" behavior of the upstream data is an explicit
/// contract here
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryMap<T> {
    pub outfits: Vec<T>,
    pub pickaxes: Vec<T>,
    pub emotes: Vec<T>,
    pub backpacks: Vec<T>,
    pub toys: Vec<T>,
    pub emojis: Vec<T>,
    pub gliders: Vec<T>,
    pub loading_screens: Vec<T>,
    pub sprays: Vec<T>,
    pub wraps: Vec<T>,
    pub contrails: Vec<T>
}

impl<T> Default for CategoryMap<T> {
    fn default() -> Self {
        Self {
            outfits: Vec::new(),
            pickaxes: Vec::new(),
            emotes: Vec::new(),
            backpacks: Vec::new(),
            toys: Vec::new(),
            emojis: Vec::new(),
            gliders: Vec::new(),
            loading_screens: Vec::new(),
            sprays: Vec::new(),
            wraps: Vec::new(),
            contrails: Vec::new()
        }
    }
}

impl<T> CategoryMap<T> {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, category: Category) -> &Vec<T> {
        match category {
            Category::Outfits => &self.outfits,
            Category::Pickaxes => &self.pickaxes,
            Category::Emotes => &self.emotes,
            Category::Backpacks => &self.backpacks,
            Category::Toys => &self.toys,
            Category::Emojis => &self.emojis,
            Category::Gliders => &self.gliders,
            Category::LoadingScreens => &self.loading_screens,
            Category::Sprays => &self.sprays,
            Category::Wraps => &self.wraps,
            Category::Contrails => &self.contrails
        }
    }

    pub fn get_mut(&mut self, category: Category) -> &mut Vec<T> {
        match category {
            Category::Outfits => &mut self.outfits,
            Category::Pickaxes => &mut self.pickaxes,
            Category::Emotes => &mut self.emotes,
            Category::Backpacks => &mut self.backpacks,
            Category::Toys => &mut self.toys,
            Category::Emojis => &mut self.emojis,
            Category::Gliders => &mut self.gliders,
            Category::LoadingScreens => &mut self.loading_screens,
            Category::Sprays => &mut self.sprays,
            Category::Wraps => &mut self.wraps,
            Category::Contrails => &mut self.contrails
        }
    }

    #[inline]
    pub fn push(&mut self, category: Category, record: T) {
        self.get_mut(category).push(record);
    }

    /// Total amount of records across all categories
    pub fn len(&self) -> usize {
        Category::list().iter()
            .map(|category| self.get(*category).len())
            .sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
