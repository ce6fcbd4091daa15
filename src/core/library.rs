use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum CatalogError {
    Storage {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    NotFound {
        message: String,
    },
    IdentityMismatch {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl CatalogError {
    pub fn storage(message: &str, reason_code: Option<String>, retryable: bool) -> CatalogError {
        CatalogError::Storage { message: message.to_string(), reason_code, retryable }
    }

    pub fn not_found(message: &str) -> CatalogError {
        CatalogError::NotFound { message: message.to_string() }
    }

    pub fn identity_mismatch(message: &str) -> CatalogError {
        CatalogError::IdentityMismatch { message: message.to_string() }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> CatalogError {
        CatalogError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> CatalogError {
        CatalogError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> CatalogError {
        CatalogError::Runtime { message: message.to_string(), reason_code }
    }

    pub fn retryable(&self) -> bool {
        match self {
            CatalogError::Storage { retryable, .. } => { *retryable }
            CatalogError::NotFound { .. } => { false }
            CatalogError::IdentityMismatch { .. } => { false }
            CatalogError::Validation { .. } => { false }
            CatalogError::Serialization { .. } => { false }
            CatalogError::Runtime { .. } => { false }
        }
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        CatalogError::runtime(
            format!("serde io {:?}", err).as_str(), None)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Storage { message, reason_code, retryable } => {
                write!(f, "{} {:?} {}", message, reason_code, retryable)
            }
            CatalogError::NotFound { message } => {
                write!(f, "{}", message)
            }
            CatalogError::IdentityMismatch { message } => {
                write!(f, "{}", message)
            }
            CatalogError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            CatalogError::Serialization { message } => {
                write!(f, "{}", message)
            }
            CatalogError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

/// A specialized Result type for Repository .
pub type CatalogResult<T> = Result<T, CatalogError>;

// It defines abstraction for a single page of an ordered collection along
// with the total count taken from the same consistent read of the store.
#[derive(Debug, Clone)]
pub struct PaginatedResult<T> {
    // zero-based offset the page starts at
    pub offset: usize,
    // page size
    pub page_size: usize,
    // total number of records in the collection at read time
    pub total_records: usize,
    // list of records
    pub records: Vec<T>,
}

impl<T> PaginatedResult<T> {
    pub(crate) fn new(offset: usize, page_size: usize,
                      total_records: usize, records: Vec<T>) -> Self {
        PaginatedResult {
            offset,
            page_size,
            total_records,
            records,
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub(crate) enum SortKey {
    Title,
    Author,
}

impl From<String> for SortKey {
    fn from(s: String) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "author" => SortKey::Author,
            _ => SortKey::Title,
        }
    }
}

impl Display for SortKey {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            SortKey::Title => write!(f, "title"),
            SortKey::Author => write!(f, "author"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::library::{CatalogError, SortKey};

    #[tokio::test]
    async fn test_should_create_storage_error() {
        assert!(matches!(CatalogError::storage("test", None, false), CatalogError::Storage{ message: _, reason_code: _, retryable: _ }));
    }

    #[tokio::test]
    async fn test_should_create_not_found_error() {
        assert!(matches!(CatalogError::not_found("test"), CatalogError::NotFound{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_identity_mismatch_error() {
        assert!(matches!(CatalogError::identity_mismatch("test"), CatalogError::IdentityMismatch{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_validation_error() {
        assert!(matches!(CatalogError::validation("test", None), CatalogError::Validation{ message: _, reason_code: _ }));
    }

    #[tokio::test]
    async fn test_should_create_serialization_error() {
        assert!(matches!(CatalogError::serialization("test"), CatalogError::Serialization{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_runtime_error() {
        assert!(matches!(CatalogError::runtime("test", None), CatalogError::Runtime{ message: _, reason_code: _ }));
    }

    #[tokio::test]
    async fn test_should_create_retryable_error() {
        assert_eq!(false, CatalogError::storage("test", None, false).retryable());
        assert_eq!(true, CatalogError::storage("test", None, true).retryable());
        assert_eq!(false, CatalogError::not_found("test").retryable());
        assert_eq!(false, CatalogError::identity_mismatch("test").retryable());
        assert_eq!(false, CatalogError::validation("test", None).retryable());
        assert_eq!(false, CatalogError::serialization("test").retryable());
        assert_eq!(false, CatalogError::runtime("test", None).retryable());
    }

    #[tokio::test]
    async fn test_should_parse_sort_key() {
        assert_eq!(SortKey::Author, SortKey::from("author".to_string()));
        assert_eq!(SortKey::Author, SortKey::from("Author".to_string()));
        assert_eq!(SortKey::Title, SortKey::from("title".to_string()));
        assert_eq!(SortKey::Title, SortKey::from("Title".to_string()));
        assert_eq!(SortKey::Title, SortKey::from("isbn".to_string()));
        assert_eq!(SortKey::Title, SortKey::from("".to_string()));
    }

    #[tokio::test]
    async fn test_should_format_sort_key() {
        for key in [SortKey::Title, SortKey::Author] {
            let str = key.to_string();
            let str_key = SortKey::from(str);
            assert_eq!(key, str_key);
        }
    }
}
