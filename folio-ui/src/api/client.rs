//! HTTP API Client

use folio::config::{SiteConfig, SITE_CONFIG_PATH};
use gloo_net::http::Request;

/// Fetch the `[site]` section published by `folio serve`
pub async fn fetch_site_config() -> Result<SiteConfig, String> {
    let response = Request::get(SITE_CONFIG_PATH)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<SiteConfig>()
        .await
        .map_err(|e| format!("Invalid site config: {}", e))
}
