use std::path::PathBuf;

use anyhow::Result;
use log::info;

use crate::api::OgcFeaturesClient;
use crate::config::AppConfig;
use crate::output;

/// One-shot run: fetch every page, then write the aggregate file once
pub struct FetchService {
    client: OgcFeaturesClient,
    output_path: PathBuf,
}

impl FetchService {
    pub fn new(config: AppConfig) -> Result<Self> {
        let client = OgcFeaturesClient::new(&config.fetcher)?;

        Ok(Self {
            client,
            output_path: config.fetcher.output_path,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        info!("=== Starting District Fetch ===");

        let collection = self.client.fetch_all_features().await?;
        let count = collection.len();

        output::write_document(&self.output_path, &collection.into_document())?;

        println!("Saved {} records to {}", count, self.output_path.display());
        Ok(())
    }
}
