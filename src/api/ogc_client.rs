use crate::api::parsers::{find_next_link, parse_page};
use crate::config::FetcherSettings;
use crate::domain::{FeatureCollection, Page};
use crate::errors::FetchError;
use crate::http::RateLimitedClient;
use anyhow::Result;
use log::{debug, info};

/// Client for an OGC API - Features collection endpoint
pub struct OgcFeaturesClient {
    http: RateLimitedClient,
    collection_url: String,
    format: &'static str,
}

impl OgcFeaturesClient {
    pub fn new(settings: &FetcherSettings) -> Result<Self> {
        let http = RateLimitedClient::new(
            settings.user_agent,
            settings.timeout_secs,
            settings.rate_limit_ms,
        )?;

        Ok(Self {
            http,
            collection_url: settings.collection_url.clone(),
            format: settings.format,
        })
    }

    /// Fetch every feature in the collection, following `"next"` links until
    /// the API stops advertising one. Any failure aborts the whole run; there
    /// is no partial result.
    pub async fn fetch_all_features(&mut self) -> Result<FeatureCollection> {
        let mut collection = FeatureCollection::new();
        let mut next_url = Some(self.collection_url.clone());
        // The format parameter goes on the first request only; next links
        // already encode whatever parameters they need.
        let mut query: &[(&str, &str)] = &[("f", self.format)];
        let mut pages = 0;

        while let Some(url) = next_url {
            let page = self.fetch_page(&url, query).await?;
            query = &[];
            pages += 1;

            debug!("Page {} carried {} features", pages, page.features.len());
            next_url = find_next_link(&page.links).map(str::to_string);
            collection.extend(page.features);
        }

        info!(
            "Fetched {} features over {} pages",
            collection.len(),
            pages
        );
        Ok(collection)
    }

    async fn fetch_page(&mut self, url: &str, query: &[(&str, &str)]) -> Result<Page, FetchError> {
        let response = self
            .http
            .get(url, query)
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|source| FetchError::Http {
                url: url.to_string(),
                source,
            })?;

        let body = response.text().await.map_err(|source| FetchError::Http {
            url: url.to_string(),
            source,
        })?;

        parse_page(&body).map_err(|source| FetchError::Parse {
            url: url.to_string(),
            source,
        })
    }
}
