pub mod schema;

use crate::consts::CATALOG_API_URI;

#[cached::proc_macro::cached(result)]
#[tracing::instrument(level = "trace")]
pub fn request(language: String) -> anyhow::Result<schema::Response> {
    tracing::trace!("Fetching cosmetics catalog");

    Ok(minreq::get(format!("{CATALOG_API_URI}?language={language}"))
        .with_timeout(*crate::REQUESTS_TIMEOUT)
        .send()?.json()?)
}
