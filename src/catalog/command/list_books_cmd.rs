use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::SortKey;

pub(crate) struct ListBooksCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl ListBooksCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ListBooksCommandRequest {
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_page_size")]
    pub page_size: i64,
    // unrecognized values silently fall back to sorting by title
    #[serde(default)]
    pub sort_by: String,
}

fn default_page() -> i64 {
    1
}

fn default_page_size() -> i64 {
    5
}

impl ListBooksCommandRequest {
    pub fn new(page: i64, page_size: i64, sort_by: &str) -> Self {
        Self {
            page,
            page_size,
            sort_by: sort_by.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ListBooksCommandResponse {
    pub books: Vec<BookDto>,
    pub total_books: usize,
}

impl ListBooksCommandResponse {
    pub fn new(books: Vec<BookDto>, total_books: usize) -> Self {
        Self {
            books,
            total_books,
        }
    }
}

#[async_trait]
impl Command<ListBooksCommandRequest, ListBooksCommandResponse> for ListBooksCommand {
    async fn execute(&self, req: ListBooksCommandRequest) -> Result<ListBooksCommandResponse, CommandError> {
        let sort_by = SortKey::from(req.sort_by);
        self.catalog_service.list_books(req.page, req.page_size, sort_by).await
            .map_err(CommandError::from)
            .map(|res| ListBooksCommandResponse::new(res.records, res.total_records))
    }
}
