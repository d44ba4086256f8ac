//! Record model shared by every collection.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Name of the server-owned identifier field.
pub const ID_FIELD: &str = "id";

/// A single entry of a collection: a unique integer id plus arbitrary client fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: i64,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Record {
    /// Build a record from a client body. Any `id` in the body is dropped in favor of `id`.
    pub fn new(id: i64, mut body: Map<String, Value>) -> Self {
        body.remove(ID_FIELD);
        Self { id, fields: body }
    }

    /// Shallow-merge `body` onto this record: body fields win, absent fields are kept.
    /// The record's id is never changed.
    pub fn merge(&mut self, mut body: Map<String, Value>) {
        body.remove(ID_FIELD);
        for (key, value) in body {
            self.fields.insert(key, value);
        }
    }
}

/// Parse a path segment into a record id, leniently.
///
/// Leading whitespace is skipped, an optional sign is honored and parsing stops at the first
/// non-digit, so `"12abc"` yields 12. Returns `None` when no digit leads the segment or the
/// value overflows.
pub fn parse_record_id(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let magnitude: i64 = digits[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_new_ignores_client_id() {
        let record = Record::new(3, body(json!({"id": 99, "title": "B"})));
        assert_eq!(record.id, 3);
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({"id": 3, "title": "B"})
        );
    }

    #[test]
    fn test_merge_keeps_untouched_fields() {
        let mut record = Record::new(1, body(json!({"title": "A", "body": "text"})));
        record.merge(body(json!({"title": "A2", "id": 5, "pinned": true})));

        assert_eq!(record.id, 1);
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({"id": 1, "title": "A2", "body": "text", "pinned": true})
        );
    }

    #[test]
    fn test_serialized_id_comes_first() {
        let record = Record::new(2, body(json!({"title": "B"})));
        assert_eq!(serde_json::to_string(&record).unwrap(), r#"{"id":2,"title":"B"}"#);
    }

    #[test]
    fn test_parse_record_id() {
        assert_eq!(parse_record_id("42"), Some(42));
        assert_eq!(parse_record_id("  7"), Some(7));
        assert_eq!(parse_record_id("12abc"), Some(12));
        assert_eq!(parse_record_id("1.5"), Some(1));
        assert_eq!(parse_record_id("-3"), Some(-3));
        assert_eq!(parse_record_id("+8"), Some(8));
        assert_eq!(parse_record_id("abc"), None);
        assert_eq!(parse_record_id(""), None);
        assert_eq!(parse_record_id("-"), None);
        assert_eq!(parse_record_id("99999999999999999999"), None);
    }
}
