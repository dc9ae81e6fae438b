mod ogc_client;
pub mod parsers;

pub use ogc_client::OgcFeaturesClient;
