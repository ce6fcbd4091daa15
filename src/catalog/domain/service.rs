use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::library::{CatalogError, CatalogResult, PaginatedResult, SortKey};

pub(crate) struct CatalogServiceImpl {
    book_repository: Box<dyn BookRepository>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(_config: &Configuration, book_repository: Box<dyn BookRepository>) -> Self {
        Self {
            book_repository,
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn list_books(&self, page: i64, page_size: i64,
                        sort_by: SortKey) -> CatalogResult<PaginatedResult<BookDto>> {
        // page is 1-based; out-of-range inputs are clamped rather than rejected
        let page = page.max(1) as usize;
        let page_size = page_size.max(1) as usize;
        let offset = (page - 1).saturating_mul(page_size);
        let res = self.book_repository.find_page(sort_by, offset, page_size).await?;
        Ok(PaginatedResult::new(res.offset, res.page_size, res.total_records,
                                res.records.iter().map(BookDto::from).collect()))
    }

    async fn find_book_by_id(&self, id: i64) -> CatalogResult<BookDto> {
        self.book_repository.get(id).await.map(|b| BookDto::from(&b))
    }

    async fn add_book(&self, book: &BookDto) -> CatalogResult<BookDto> {
        book.validate()?;
        let entity = self.book_repository.create(&BookEntity::from(book)).await?;
        Ok(BookDto::from(&entity))
    }

    async fn update_book(&self, id: i64, book: &BookDto) -> CatalogResult<BookDto> {
        // identity check happens before any store interaction; the store
        // rechecks existence so a concurrently deleted record reports
        // NotFound instead of turning into an insert
        if book.book_id != id {
            return Err(CatalogError::identity_mismatch(
                format!("book id {} does not match payload id {}", id, book.book_id).as_str()));
        }
        book.validate()?;
        let _ = self.book_repository.update(id, &BookEntity::from(book)).await?;
        Ok(book.clone())
    }

    async fn remove_book(&self, id: i64) -> CatalogResult<()> {
        self.book_repository.delete(id).await.map(|_| ())
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            book_id: other.book_id,
            title: other.title.to_string(),
            author: other.author.to_string(),
            publisher: other.publisher.to_string(),
            isbn: other.isbn.to_string(),
            category: other.category.to_string(),
            price: other.price,
            page_count: other.page_count,
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            book_id: other.book_id,
            title: other.title.to_string(),
            author: other.author.to_string(),
            publisher: other.publisher.to_string(),
            isbn: other.isbn.to_string(),
            category: other.category.to_string(),
            price: other.price,
            page_count: other.page_count,
        }
    }
}
