use crate::domain::Page;

/// Parse one response body into a page. Absent `features` or `links` keys
/// yield empty sequences; anything that is not a JSON object is an error.
pub fn parse_page(body: &str) -> Result<Page, serde_json::Error> {
    serde_json::from_str(body)
}
