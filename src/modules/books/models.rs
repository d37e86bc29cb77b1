use serde::{Deserialize, Serialize};

/// One catalog record, as stored and as served.
///
/// `id` is the store's primary key; every other attribute is decoded
/// leniently, so a persisted item missing one surfaces that field as absent
/// in JSON rather than failing the whole response. Field names are camelCase
/// on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publish_year: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Request body for create and update.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookInput {
    pub title: Option<String>,
    pub author: Option<String>,
    pub publish_year: Option<i64>,
}

impl BookInput {
    /// Names of required fields that are missing or empty, in wire casing.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.title.as_deref().is_none_or(str::is_empty) {
            missing.push("title");
        }
        if self.author.as_deref().is_none_or(str::is_empty) {
            missing.push("author");
        }
        if self.publish_year.is_none() {
            missing.push("publishYear");
        }
        missing
    }
}

/// Exact attribute set an update touches; `id` and `createdAt` never appear.
#[derive(Debug, Clone)]
pub struct BookPatch {
    pub title: String,
    pub author: String,
    pub publish_year: i64,
    pub updated_at: String,
}

/// Response body for list-all.
#[derive(Debug, Serialize, Deserialize)]
pub struct BookList {
    pub count: usize,
    pub data: Vec<Book>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn complete_input_has_no_missing_fields() {
        let input = BookInput {
            title: Some("Dune".to_string()),
            author: Some("Frank Herbert".to_string()),
            publish_year: Some(1965),
        };
        assert!(input.missing_fields().is_empty());
    }

    #[test]
    fn absent_and_empty_fields_are_both_missing() {
        let input = BookInput {
            title: Some(String::new()),
            author: None,
            publish_year: None,
        };
        assert_eq!(
            input.missing_fields(),
            vec!["title", "author", "publishYear"]
        );
    }

    #[test]
    fn input_deserializes_from_camel_case() {
        let input: BookInput =
            serde_json::from_value(json!({"title": "A", "author": "B", "publishYear": 2020}))
                .unwrap();
        assert_eq!(input.publish_year, Some(2020));
    }

    #[test]
    fn book_serializes_camel_case_and_omits_absent_fields() {
        let book = Book {
            id: "2024-01-01T00:00:00Z".to_string(),
            title: Some("Dune".to_string()),
            author: None,
            publish_year: Some(1965),
            created_at: None,
            updated_at: None,
        };

        let value = serde_json::to_value(&book).unwrap();
        assert_eq!(value["title"], "Dune");
        assert_eq!(value["publishYear"], 1965);
        assert!(value.get("author").is_none());
        assert!(value.get("createdAt").is_none());
    }
}
