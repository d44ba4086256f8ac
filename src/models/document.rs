//! Document model: the complete persisted state.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{Collection, Record};

/// The root document containing all collections.
///
/// Top-level fields other than the two collections are kept verbatim in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub enrollment_events: Vec<Record>,
    pub news: Vec<Record>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Document {
    pub fn records(&self, collection: Collection) -> &[Record] {
        match collection {
            Collection::EnrollmentEvents => &self.enrollment_events,
            Collection::News => &self.news,
        }
    }

    pub fn records_mut(&mut self, collection: Collection) -> &mut Vec<Record> {
        match collection {
            Collection::EnrollmentEvents => &mut self.enrollment_events,
            Collection::News => &mut self.news,
        }
    }

    /// Id for the next record of `collection`: 1 when empty, else max id + 1.
    /// `None` once the max id is `i64::MAX`.
    pub fn next_id(&self, collection: Collection) -> Option<i64> {
        match self.records(collection).iter().map(|record| record.id).max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extra_fields_pass_through() {
        let raw = json!({
            "hero": {"title": "Welcome"},
            "enrollmentEvents": [],
            "news": [{"id": 1, "title": "A"}]
        });
        let document: Document = serde_json::from_value(raw).unwrap();

        assert_eq!(document.news.len(), 1);
        assert_eq!(document.extra["hero"], json!({"title": "Welcome"}));

        let back = serde_json::to_value(&document).unwrap();
        assert_eq!(back["hero"]["title"], "Welcome");
        assert_eq!(back["news"][0]["title"], "A");
    }

    #[test]
    fn test_missing_collection_is_rejected() {
        let result: Result<Document, _> = serde_json::from_value(json!({"news": []}));
        assert!(result.is_err());
    }

    #[test]
    fn test_next_id() {
        let mut document = Document::default();
        assert_eq!(document.next_id(Collection::News), Some(1));

        document.news.push(Record::new(7, Map::new()));
        document.news.push(Record::new(3, Map::new()));
        assert_eq!(document.next_id(Collection::News), Some(8));
        assert_eq!(document.next_id(Collection::EnrollmentEvents), Some(1));
    }

    #[test]
    fn test_next_id_exhausted() {
        let mut document = Document::default();
        document.news.push(Record::new(i64::MAX, Map::new()));
        assert_eq!(document.next_id(Collection::News), None);
    }
}
