use serde::{Deserialize, Serialize};

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable : Sync + Send {
    fn id(&self) -> i64;
}

// Configuration abstracts config options for the bookstore catalog
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub(crate) struct Configuration {
    pub http_port: u16,
    pub default_page: usize,
    pub default_page_size: usize,
}

impl Configuration {
    pub fn new() -> Self {
        let http_port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(5000);
        Configuration {
            http_port,
            default_page: 1,
            default_page_size: 5,
        }
    }
}
