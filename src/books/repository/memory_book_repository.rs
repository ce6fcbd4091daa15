use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::{CatalogError, CatalogResult, PaginatedResult, SortKey};
use crate::core::repository::Repository;

// Shelf keeps the records together with the id counter under one lock so
// id assignment and insertion happen as a single atomic step. The counter
// only ever grows, so a deleted id is never handed out again.
#[derive(Debug)]
struct Shelf {
    next_book_id: i64,
    books: BTreeMap<i64, BookEntity>,
}

// In-memory book store. The write guard serializes all mutations, so an
// update and a delete racing on the same id resolve deterministically and
// the loser observes NotFound. Readers never see a partially written record.
#[derive(Debug)]
pub struct MemoryBookRepository {
    shelf: RwLock<Shelf>,
}

impl MemoryBookRepository {
    pub(crate) fn new() -> Self {
        Self {
            shelf: RwLock::new(Shelf {
                next_book_id: 1,
                books: BTreeMap::new(),
            }),
        }
    }

    fn read_shelf(&self) -> CatalogResult<RwLockReadGuard<Shelf>> {
        self.shelf.read().map_err(|_|
            CatalogError::storage("book store lock poisoned", None, false))
    }

    fn write_shelf(&self) -> CatalogResult<RwLockWriteGuard<Shelf>> {
        self.shelf.write().map_err(|_|
            CatalogError::storage("book store lock poisoned", None, false))
    }
}

fn compare(sort_by: SortKey, a: &BookEntity, b: &BookEntity) -> Ordering {
    // book_id breaks ties so pagination stays deterministic when sort-key
    // values repeat
    match sort_by {
        SortKey::Title => a.title.cmp(&b.title).then(a.book_id.cmp(&b.book_id)),
        SortKey::Author => a.author.cmp(&b.author).then(a.book_id.cmp(&b.book_id)),
    }
}

#[async_trait]
impl Repository<BookEntity> for MemoryBookRepository {
    async fn create(&self, entity: &BookEntity) -> CatalogResult<BookEntity> {
        let mut shelf = self.write_shelf()?;
        let book = entity.with_id(shelf.next_book_id);
        shelf.next_book_id += 1;
        shelf.books.insert(book.book_id, book.clone());
        Ok(book)
    }

    async fn update(&self, id: i64, entity: &BookEntity) -> CatalogResult<usize> {
        if entity.book_id != id {
            return Err(CatalogError::identity_mismatch(
                format!("book id {} does not match payload id {}", id, entity.book_id).as_str()));
        }
        let mut shelf = self.write_shelf()?;
        match shelf.books.get_mut(&id) {
            Some(book) => {
                *book = entity.clone();
                Ok(1)
            }
            None => Err(CatalogError::not_found(
                format!("book not found for {}", id).as_str())),
        }
    }

    async fn get(&self, id: i64) -> CatalogResult<BookEntity> {
        let shelf = self.read_shelf()?;
        shelf.books.get(&id).cloned().ok_or_else(||
            CatalogError::not_found(format!("book not found for {}", id).as_str()))
    }

    async fn delete(&self, id: i64) -> CatalogResult<usize> {
        let mut shelf = self.write_shelf()?;
        match shelf.books.remove(&id) {
            Some(_) => Ok(1),
            None => Err(CatalogError::not_found(
                format!("book not found for {}", id).as_str())),
        }
    }

    async fn count(&self) -> CatalogResult<usize> {
        let shelf = self.read_shelf()?;
        Ok(shelf.books.len())
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn find_page(&self, sort_by: SortKey,
                       offset: usize, limit: usize) -> CatalogResult<PaginatedResult<BookEntity>> {
        // slice and total come from the same read guard, so the total can
        // never exclude a record present in the returned page
        let shelf = self.read_shelf()?;
        let total = shelf.books.len();
        let mut ordered: Vec<&BookEntity> = shelf.books.values().collect();
        ordered.sort_by(|a, b| compare(sort_by, a, b));
        let records = ordered.into_iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect();
        Ok(PaginatedResult::new(offset, limit, total, records))
    }
}
