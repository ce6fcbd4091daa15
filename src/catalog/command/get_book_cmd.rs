use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct GetBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl GetBookCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GetBookCommandRequest {
    pub book_id: i64,
}

#[derive(Debug, Serialize)]
pub(crate) struct GetBookCommandResponse {
    pub book: BookDto,
}

impl GetBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<GetBookCommandRequest, GetBookCommandResponse> for GetBookCommand {
    async fn execute(&self, req: GetBookCommandRequest) -> Result<GetBookCommandResponse, CommandError> {
        self.catalog_service.find_book_by_id(req.book_id).await
            .map_err(CommandError::from)
            .map(GetBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::BookDto;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    #[tokio::test]
    async fn test_should_run_get_book() {
        let svc = factory::create_catalog_service(&Configuration::new(), RepositoryStore::Memory);
        let add_cmd = AddBookCommand::new(svc.clone());
        let get_cmd = GetBookCommand::new(svc);

        let book = BookDto::new("test book", "author", "publisher", "isbn", "category", 9.99, 120);
        let added = add_cmd.execute(AddBookCommandRequest::from(&book))
            .await.expect("should add book");

        let res = get_cmd.execute(GetBookCommandRequest { book_id: added.book.book_id })
            .await.expect("should return book");
        assert_eq!(added.book, res.book);
    }

    #[tokio::test]
    async fn test_should_fail_get_unknown_book() {
        let svc = factory::create_catalog_service(&Configuration::new(), RepositoryStore::Memory);
        let cmd = GetBookCommand::new(svc);

        let res = cmd.execute(GetBookCommandRequest { book_id: 42 }).await;
        assert!(matches!(res, Err(CommandError::NotFound { message: _ })));
    }
}
