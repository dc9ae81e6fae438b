use serde::Deserialize;
use serde_json::Value;

/// One response body from the collection endpoint.
///
/// Features are kept opaque: whatever the API returns is re-serialized
/// verbatim into the output document. Absent keys deserialize as empty.
#[derive(Debug, Default, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub features: Vec<Value>,
    #[serde(default)]
    pub links: Vec<PageLink>,
}

/// Pagination link entry from a page's `links` array.
///
/// Entries missing `rel` or `href` deserialize to empty strings and never
/// match the next-link scan.
#[derive(Debug, Default, Deserialize)]
pub struct PageLink {
    #[serde(default)]
    pub rel: String,
    #[serde(default)]
    pub href: String,
}
