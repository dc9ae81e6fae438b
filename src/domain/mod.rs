mod collection;
pub mod models;

pub use collection::{FeatureCollection, FeatureDocument};
pub use models::{Page, PageLink};
