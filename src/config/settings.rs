use std::path::PathBuf;

/// Source-level constants for the district fetcher
pub struct FetcherSettings {
    pub collection_url: String,
    pub format: &'static str,
    pub output_path: PathBuf,
    pub user_agent: &'static str,
    pub timeout_secs: u64,
    pub rate_limit_ms: u64,
}

impl Default for FetcherSettings {
    fn default() -> Self {
        Self {
            collection_url:
                "https://opaskartta.turku.fi/trimbleogcapi/collections/GIS:Kaupunginosat/items"
                    .to_string(),
            format: "application/json",
            output_path: PathBuf::from("turku_districts_all.json"),
            user_agent: "TurkuDistricts/1.0",
            timeout_secs: 30,
            rate_limit_ms: 100, // 10 req/sec
        }
    }
}

pub struct AppConfig {
    pub fetcher: FetcherSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            fetcher: FetcherSettings::default(),
        }
    }
}
