pub mod service;

use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::core::library::{CatalogResult, PaginatedResult, SortKey};

#[async_trait]
pub(crate) trait CatalogService: Sync + Send {
    async fn list_books(&self, page: i64, page_size: i64,
                        sort_by: SortKey) -> CatalogResult<PaginatedResult<BookDto>>;
    async fn find_book_by_id(&self, id: i64) -> CatalogResult<BookDto>;
    async fn add_book(&self, book: &BookDto) -> CatalogResult<BookDto>;
    async fn update_book(&self, id: i64, book: &BookDto) -> CatalogResult<BookDto>;
    async fn remove_book(&self, id: i64) -> CatalogResult<()>;
}
