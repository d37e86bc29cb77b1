//! Persistence boundary for book records.
//!
//! Handlers talk to a [`BookStore`] trait object and only ever see plain
//! [`Book`] records; the DynamoDB attribute encoding stays behind
//! [`encode_book`]/[`decode_book`]. The production implementation holds the
//! process-wide client handle built once at startup.

use std::sync::Arc;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use aws_sdk_dynamodb::Client;
use bookshop_db::codec::{self, Item};
use bookshop_db::StoreError;

use super::models::{Book, BookPatch};

/// Primary key attribute of the books table.
pub const KEY_ATTR: &str = "id";

pub type SharedBookStore = Arc<dyn BookStore>;

/// Single-table key-value access for book records, one round trip per call.
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Unconditional upsert of a complete record.
    async fn put(&self, book: &Book) -> Result<(), StoreError>;

    /// Full unordered enumeration of the table.
    async fn scan(&self) -> Result<Vec<Book>, StoreError>;

    /// Point lookup by primary key.
    async fn get(&self, id: &str) -> Result<Option<Book>, StoreError>;

    /// Conditional update of exactly the patch attributes.
    /// Returns `false` when no item existed at the key.
    async fn update(&self, id: &str, patch: &BookPatch) -> Result<bool, StoreError>;

    /// Delete by primary key. Returns `false` when nothing existed there.
    async fn delete(&self, id: &str) -> Result<bool, StoreError>;
}

/// DynamoDB-backed implementation of [`BookStore`].
pub struct DynamoBookStore {
    client: Client,
    table: String,
}

impl DynamoBookStore {
    pub fn new(client: Client, table: String) -> Self {
        Self { client, table }
    }

    fn key(id: &str) -> AttributeValue {
        codec::string_attr(id)
    }
}

#[async_trait]
impl BookStore for DynamoBookStore {
    async fn put(&self, book: &Book) -> Result<(), StoreError> {
        self.client
            .put_item()
            .table_name(&self.table)
            .set_item(Some(encode_book(book)))
            .send()
            .await
            .map_err(StoreError::from_sdk)?;

        Ok(())
    }

    async fn scan(&self) -> Result<Vec<Book>, StoreError> {
        // Drain the paginator so the caller sees the complete table, not the
        // first page.
        let mut pages = self
            .client
            .scan()
            .table_name(&self.table)
            .into_paginator()
            .items()
            .send();

        let mut books = Vec::new();
        while let Some(item) = pages.try_next().await.map_err(StoreError::from_sdk)? {
            if let Some(book) = decode_book(&item) {
                books.push(book);
            }
        }

        Ok(books)
    }

    async fn get(&self, id: &str) -> Result<Option<Book>, StoreError> {
        let output = self
            .client
            .get_item()
            .table_name(&self.table)
            .key(KEY_ATTR, Self::key(id))
            .send()
            .await
            .map_err(StoreError::from_sdk)?;

        Ok(output.item.as_ref().and_then(decode_book))
    }

    async fn update(&self, id: &str, patch: &BookPatch) -> Result<bool, StoreError> {
        // `attribute_exists(id)` turns DynamoDB's default upsert into the
        // existence check the API contract needs; a failed condition is a
        // miss, not an error. Attribute names are aliased because `title` is
        // a DynamoDB reserved word.
        let result = self
            .client
            .update_item()
            .table_name(&self.table)
            .key(KEY_ATTR, Self::key(id))
            .condition_expression("attribute_exists(id)")
            .update_expression(
                "SET #title = :title, #author = :author, \
                 #publishYear = :publishYear, #updatedAt = :updatedAt",
            )
            .expression_attribute_names("#title", "title")
            .expression_attribute_names("#author", "author")
            .expression_attribute_names("#publishYear", "publishYear")
            .expression_attribute_names("#updatedAt", "updatedAt")
            .expression_attribute_values(":title", codec::string_attr(&patch.title))
            .expression_attribute_values(":author", codec::string_attr(&patch.author))
            .expression_attribute_values(":publishYear", codec::number_attr(patch.publish_year))
            .expression_attribute_values(":updatedAt", codec::string_attr(&patch.updated_at))
            .return_values(ReturnValue::UpdatedNew)
            .send()
            .await;

        match result {
            Ok(output) => Ok(output.attributes.is_some_and(|attrs| !attrs.is_empty())),
            Err(err)
                if err
                    .as_service_error()
                    .is_some_and(|e| e.is_conditional_check_failed_exception()) =>
            {
                Ok(false)
            }
            Err(err) => Err(StoreError::from_sdk(err)),
        }
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let output = self
            .client
            .delete_item()
            .table_name(&self.table)
            .key(KEY_ATTR, Self::key(id))
            .return_values(ReturnValue::AllOld)
            .send()
            .await
            .map_err(StoreError::from_sdk)?;

        // No prior attributes means nothing existed at the key.
        Ok(output.attributes.is_some_and(|attrs| !attrs.is_empty()))
    }
}

/// Encode a record into its typed-attribute representation.
/// Every present field is written; create always passes a complete record.
pub fn encode_book(book: &Book) -> Item {
    let mut item = Item::new();
    item.insert(KEY_ATTR.to_string(), codec::string_attr(&book.id));
    if let Some(title) = &book.title {
        item.insert("title".to_string(), codec::string_attr(title));
    }
    if let Some(author) = &book.author {
        item.insert("author".to_string(), codec::string_attr(author));
    }
    if let Some(publish_year) = book.publish_year {
        item.insert("publishYear".to_string(), codec::number_attr(publish_year));
    }
    if let Some(created_at) = &book.created_at {
        item.insert("createdAt".to_string(), codec::string_attr(created_at));
    }
    if let Some(updated_at) = &book.updated_at {
        item.insert("updatedAt".to_string(), codec::string_attr(updated_at));
    }
    item
}

/// Decode an item back into a plain record. An item without the key
/// attribute is unusable and decodes to `None`; any other absent attribute
/// just surfaces as an absent field.
pub fn decode_book(item: &Item) -> Option<Book> {
    Some(Book {
        id: codec::read_string(item, KEY_ATTR)?,
        title: codec::read_string(item, "title"),
        author: codec::read_string(item, "author"),
        publish_year: codec::read_number(item, "publishYear"),
        created_at: codec::read_string(item, "createdAt"),
        updated_at: codec::read_string(item, "updatedAt"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_book() -> Book {
        Book {
            id: "2024-05-01T12:00:00Z".to_string(),
            title: Some("Dune".to_string()),
            author: Some("Frank Herbert".to_string()),
            publish_year: Some(1965),
            created_at: Some("2024-05-01T12:00:00Z".to_string()),
            updated_at: Some("2024-05-01T12:00:00Z".to_string()),
        }
    }

    #[test]
    fn complete_record_round_trips() {
        let book = sample_book();
        let item = encode_book(&book);

        assert_eq!(item.len(), 6);
        assert_eq!(decode_book(&item), Some(book));
    }

    #[test]
    fn publish_year_is_a_numeric_attribute() {
        let item = encode_book(&sample_book());
        assert!(item["publishYear"].as_n().is_ok());
        assert!(item["title"].as_s().is_ok());
    }

    #[test]
    fn item_without_key_attribute_is_skipped() {
        let mut item = encode_book(&sample_book());
        item.remove(KEY_ATTR);
        assert_eq!(decode_book(&item), None);
    }

    #[test]
    fn partial_item_decodes_with_absent_fields() {
        let mut item = Item::new();
        item.insert(KEY_ATTR.to_string(), codec::string_attr("some-id"));
        item.insert("title".to_string(), codec::string_attr("Dune"));

        let book = decode_book(&item).unwrap();
        assert_eq!(book.id, "some-id");
        assert_eq!(book.title.as_deref(), Some("Dune"));
        assert_eq!(book.author, None);
        assert_eq!(book.publish_year, None);
    }
}
