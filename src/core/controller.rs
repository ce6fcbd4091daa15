use std::sync::Arc;
use axum::http::StatusCode;
use crate::catalog::domain::CatalogService;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;

// Shared handler state; the service owns the single store instance so every
// request operates on the same catalog.
#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) config: Configuration,
    pub(crate) service: Arc<dyn CatalogService>,
}

impl AppState {
    pub fn new(config: Configuration, service: Arc<dyn CatalogService>) -> AppState {
        AppState {
            config,
            service,
        }
    }
}

pub(crate) type ServerError = (StatusCode, String);

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    (StatusCode::BAD_REQUEST, format!("{}", err))
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::Storage { .. } => {
                tracing::error!("storage failure: {:?}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, format!("{:?}", err))
            }
            CommandError::NotFound { .. } => {
                (StatusCode::NOT_FOUND, format!("{:?}", err))
            }
            CommandError::IdentityMismatch { .. } => {
                (StatusCode::BAD_REQUEST, format!("{:?}", err))
            }
            CommandError::Validation { .. } => {
                (StatusCode::BAD_REQUEST, format!("{:?}", err))
            }
            CommandError::Serialization { .. } => {
                (StatusCode::BAD_REQUEST, format!("{:?}", err))
            }
            CommandError::Runtime { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("{:?}", err))
            }
            CommandError::Other { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("{:?}", err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use crate::core::command::CommandError;
    use crate::core::controller::ServerError;

    #[tokio::test]
    async fn test_should_map_command_errors_to_status() {
        let err: ServerError = CommandError::NotFound { message: "test".to_string() }.into();
        assert_eq!(StatusCode::NOT_FOUND, err.0);
        let err: ServerError = CommandError::IdentityMismatch { message: "test".to_string() }.into();
        assert_eq!(StatusCode::BAD_REQUEST, err.0);
        let err: ServerError = CommandError::Validation { message: "test".to_string(), reason_code: None }.into();
        assert_eq!(StatusCode::BAD_REQUEST, err.0);
        let err: ServerError = CommandError::Storage { message: "test".to_string(), reason_code: None, retryable: false }.into();
        assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, err.0);
    }
}
