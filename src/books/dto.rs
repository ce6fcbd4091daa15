use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::core::library::{CatalogError, CatalogResult};

// BookDto is the wire representation of a catalog record; camelCase field
// names match the JSON consumed by the bookstore frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BookDto {
    // absent on create payloads, assigned by the store
    #[serde(default)]
    pub book_id: i64,
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub isbn: String,
    pub category: String,
    pub price: f64,
    pub page_count: i64,
}

impl BookDto {
    pub fn new(title: &str, author: &str, publisher: &str, isbn: &str,
               category: &str, price: f64, page_count: i64) -> BookDto {
        BookDto {
            book_id: 0,
            title: title.to_string(),
            author: author.to_string(),
            publisher: publisher.to_string(),
            isbn: isbn.to_string(),
            category: category.to_string(),
            price,
            page_count,
        }
    }

    pub fn validate(&self) -> CatalogResult<()> {
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(CatalogError::validation(
                format!("price must be a non-negative number, got {}", self.price).as_str(), None));
        }
        if self.page_count < 0 {
            return Err(CatalogError::validation(
                format!("pageCount must be non-negative, got {}", self.page_count).as_str(), None));
        }
        Ok(())
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> i64 {
        self.book_id
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::BookDto;

    #[tokio::test]
    async fn test_should_build_book() {
        let book = BookDto::new("title", "author", "publisher", "isbn", "category", 9.99, 120);
        assert_eq!("title", book.title.as_str());
        assert_eq!("author", book.author.as_str());
        assert!(book.validate().is_ok());
    }

    #[tokio::test]
    async fn test_should_reject_negative_price() {
        let book = BookDto::new("title", "author", "publisher", "isbn", "category", -1.0, 120);
        assert!(book.validate().is_err());
    }

    #[tokio::test]
    async fn test_should_reject_non_finite_price() {
        let book = BookDto::new("title", "author", "publisher", "isbn", "category", f64::NAN, 120);
        assert!(book.validate().is_err());
    }

    #[tokio::test]
    async fn test_should_reject_negative_page_count() {
        let book = BookDto::new("title", "author", "publisher", "isbn", "category", 9.99, -5);
        assert!(book.validate().is_err());
    }

    #[tokio::test]
    async fn test_should_parse_create_payload_without_id() {
        let book: BookDto = serde_json::from_str(
            r#"{"title":"t","author":"a","publisher":"p","isbn":"i","category":"c","price":1.5,"pageCount":10}"#)
            .expect("should parse book");
        assert_eq!(0, book.book_id);
        assert_eq!(10, book.page_count);
    }
}
