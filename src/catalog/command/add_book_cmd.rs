use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct AddBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl AddBookCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

// create payload carries no id; the store assigns one
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AddBookCommandRequest {
    pub(crate) title: String,
    pub(crate) author: String,
    pub(crate) publisher: String,
    pub(crate) isbn: String,
    pub(crate) category: String,
    pub(crate) price: f64,
    pub(crate) page_count: i64,
}

impl AddBookCommandRequest {
    pub fn build_book(&self) -> BookDto {
        BookDto::new(self.title.as_str(), self.author.as_str(), self.publisher.as_str(),
                     self.isbn.as_str(), self.category.as_str(), self.price, self.page_count)
    }
}

impl From<&BookDto> for AddBookCommandRequest {
    fn from(book: &BookDto) -> Self {
        Self {
            title: book.title.to_string(),
            author: book.author.to_string(),
            publisher: book.publisher.to_string(),
            isbn: book.isbn.to_string(),
            category: book.category.to_string(),
            price: book.price,
            page_count: book.page_count,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct AddBookCommandResponse {
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let book = req.build_book();
        self.catalog_service.add_book(&book).await
            .map_err(CommandError::from)
            .map(AddBookCommandResponse::new)
    }
}
