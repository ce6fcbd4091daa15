use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;

// BookEntity is the stored representation of a single catalog record. The
// store assigns book_id on create; all other fields come from the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct BookEntity {
    pub book_id: i64,
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub isbn: String,
    pub category: String,
    pub price: f64,
    pub page_count: i64,
}

impl BookEntity {
    pub fn new(title: &str, author: &str, publisher: &str, isbn: &str,
               category: &str, price: f64, page_count: i64) -> Self {
        Self {
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

    pub fn with_id(&self, book_id: i64) -> Self {
        Self {
            book_id,
            ..self.clone()
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> i64 {
        self.book_id
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;
    use crate::core::domain::Identifiable;

    #[tokio::test]
    async fn test_should_build_book() {
        let book = BookEntity::new("title", "author", "publisher", "isbn", "category", 9.99, 120);
        assert_eq!("title", book.title.as_str());
        assert_eq!("author", book.author.as_str());
        assert_eq!(0, book.book_id);
    }

    #[tokio::test]
    async fn test_should_assign_id() {
        let book = BookEntity::new("title", "author", "publisher", "isbn", "category", 9.99, 120);
        let book = book.with_id(12);
        assert_eq!(12, book.id());
        assert_eq!("title", book.title.as_str());
    }
}
