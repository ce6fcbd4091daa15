include!("lib.rs");

use std::net::SocketAddr;
use axum::{
    routing::get,
    Router,
};
use crate::catalog::controller::{add_book, find_book_by_id, list_books, remove_book, update_book};
use crate::catalog::factory;
use crate::core::controller::AppState;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = Configuration::new();
    let service = factory::create_catalog_service(&config, RepositoryStore::Memory);
    let addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));
    let state = AppState::new(config, service);

    let app = Router::new()
        .route("/api/books", get(list_books).post(add_book))
        .route("/api/books/:id",
               get(find_book_by_id).put(update_book).delete(remove_book))
        .with_state(state);

    tracing::info!("bookstore catalog listening on {}", addr);
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await?;
    Ok(())
}

fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        .json()
        .init();
}
