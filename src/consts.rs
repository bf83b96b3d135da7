/// Cosmetics catalog endpoint. Open API, no key needed
pub const CATALOG_API_URI: &str = "https://fortnite-api.com/v2/cosmetics";

/// Battle pass endpoint. Requires an API key in the `Authorization` header
pub const BATTLEPASS_API_URI: &str = "https://fortniteapi.io/v2/battlepass";

/// Name of the environment variable holding the battle pass API key
pub const API_KEY_VARIABLE: &str = "api_key";

pub const DEFAULT_LANGUAGE: &str = "en";

/// Latest in-game season. Bumped manually between runs
pub const CURRENT_SEASON: u32 = 37;

/// Season 1 predates the battle pass, so loading starts here
pub const FIRST_BATTLEPASS_SEASON: u32 = 2;

/// Catalog document, relative to the base directory
pub const CATALOG_FILE_PATH: &str = "files/json/every_item.json";

/// Season catalog document, relative to the base directory
pub const BATTLEPASS_FILE_PATH: &str = "files/json/battlepasses.json";
