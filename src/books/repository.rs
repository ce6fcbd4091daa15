pub mod memory_book_repository;

use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::core::library::{CatalogResult, PaginatedResult, SortKey};
use crate::core::repository::Repository;

#[async_trait]
pub(crate) trait BookRepository: Repository<BookEntity> {
    // ordered slice plus total count from one consistent read, so a record
    // visible in the slice is always accounted for in the total
    async fn find_page(&self, sort_by: SortKey,
                       offset: usize, limit: usize) -> CatalogResult<PaginatedResult<BookEntity>>;
}
