pub mod consts;
pub mod config;
pub mod category;
pub mod rarity;
pub mod dedup;
pub mod api;
pub mod catalog;
pub mod battlepass;
pub mod storage;

#[cfg(test)]
mod tests;

pub mod prelude {
    pub use super::consts::*;
    pub use super::config::Config;
    pub use super::category::{Category, CategoryMap};
    pub use super::catalog::CatalogItem;
    pub use super::battlepass::SeasonRewardRecord;
    pub use super::dedup::remove_duplicates;
}

lazy_static::lazy_static! {
    /// Timeout of outgoing API requests, in seconds
    ///
    /// Can be overridden with the `REQUESTS_TIMEOUT` environment variable
    pub static ref REQUESTS_TIMEOUT: u64 = std::env::var("REQUESTS_TIMEOUT")
        .ok()
        .and_then(|timeout| timeout.parse().ok())
        .unwrap_or(30);
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
