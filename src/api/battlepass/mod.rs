pub mod schema;

use crate::consts::BATTLEPASS_API_URI;

#[tracing::instrument(level = "trace", skip(api_key))]
pub fn request(api_key: &str, language: &str, season: u32) -> anyhow::Result<schema::Response> {
    tracing::trace!("Fetching battle pass rewards");

    Ok(minreq::get(format!("{BATTLEPASS_API_URI}?lang={language}&season={season}"))
        .with_header("Authorization", api_key)
        .with_timeout(*crate::REQUESTS_TIMEOUT)
        .send()?.json()?)
}
