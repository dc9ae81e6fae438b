use serde::Serialize;
use serde_json::Value;

/// Ordered, append-only accumulator of features across pages
#[derive(Debug)]
pub struct FeatureCollection {
    features: Vec<Value>,
}

impl FeatureCollection {
    pub fn new() -> Self {
        Self {
            features: Vec::new(),
        }
    }

    /// Append a page's features, preserving their order.
    pub fn extend(&mut self, features: Vec<Value>) {
        self.features.extend(features);
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn features(&self) -> &[Value] {
        &self.features
    }

    pub fn into_document(self) -> FeatureDocument {
        FeatureDocument {
            features: self.features,
        }
    }
}

impl Default for FeatureCollection {
    fn default() -> Self {
        Self::new()
    }
}

/// The output document: `{"features": [...]}`, built once after the loop
#[derive(Debug, Serialize)]
pub struct FeatureDocument {
    pub features: Vec<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extend_preserves_page_order() {
        let mut collection = FeatureCollection::new();
        collection.extend(vec![json!({"id": 1}), json!({"id": 2})]);
        collection.extend(vec![json!({"id": 3})]);

        assert_eq!(collection.len(), 3);
        let ids: Vec<i64> = collection
            .features()
            .iter()
            .map(|f| f["id"].as_i64().unwrap())
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_empty_collection_into_document() {
        let collection = FeatureCollection::new();
        assert!(collection.is_empty());

        let document = collection.into_document();
        assert!(document.features.is_empty());
    }
}
