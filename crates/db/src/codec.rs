//! Typed-attribute codec for DynamoDB items.
//!
//! DynamoDB distinguishes string (`S`) and numeric (`N`) attributes; this
//! module keeps that distinction behind plain Rust types so the rest of the
//! system only ever sees structured records. Decoding is lenient: a missing
//! or wrongly-typed attribute reads as `None` rather than failing the item.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;

/// Item shape as DynamoDB hands it to us.
pub type Item = HashMap<String, AttributeValue>;

/// Encode a string attribute.
pub fn string_attr(value: impl Into<String>) -> AttributeValue {
    AttributeValue::S(value.into())
}

/// Encode a numeric attribute. DynamoDB numbers travel as strings.
pub fn number_attr(value: i64) -> AttributeValue {
    AttributeValue::N(value.to_string())
}

/// Read a string attribute, `None` when absent or not a string.
pub fn read_string(item: &Item, name: &str) -> Option<String> {
    item.get(name).and_then(|value| value.as_s().ok()).cloned()
}

/// Read a numeric attribute, `None` when absent, not a number, or unparsable.
pub fn read_number(item: &Item, name: &str) -> Option<i64> {
    item.get(name)?.as_n().ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_item() -> Item {
        let mut item = Item::new();
        item.insert("title".to_string(), string_attr("Dune"));
        item.insert("publishYear".to_string(), number_attr(1965));
        item
    }

    #[test]
    fn string_round_trip() {
        let item = sample_item();
        assert_eq!(read_string(&item, "title"), Some("Dune".to_string()));
    }

    #[test]
    fn number_round_trip() {
        let item = sample_item();
        assert_eq!(read_number(&item, "publishYear"), Some(1965));
    }

    #[test]
    fn missing_attribute_reads_as_none() {
        let item = sample_item();
        assert_eq!(read_string(&item, "author"), None);
        assert_eq!(read_number(&item, "pages"), None);
    }

    #[test]
    fn type_mismatch_reads_as_none() {
        let item = sample_item();
        // "title" is a string attribute, "publishYear" a numeric one.
        assert_eq!(read_number(&item, "title"), None);
        assert_eq!(read_string(&item, "publishYear"), None);
    }

    #[test]
    fn unparsable_number_reads_as_none() {
        let mut item = Item::new();
        item.insert(
            "publishYear".to_string(),
            AttributeValue::N("not-a-number".to_string()),
        );
        assert_eq!(read_number(&item, "publishYear"), None);
    }
}
