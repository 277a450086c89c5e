use std::sync::Arc;
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};
use crate::catalog::domain::CatalogService;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;

#[derive(Clone)]
pub struct AppState {
    pub config: Configuration,
    pub catalog: Arc<dyn CatalogService>,
}

impl AppState {
    pub fn new(config: Configuration, catalog: Arc<dyn CatalogService>) -> AppState {
        AppState {
            config,
            catalog,
        }
    }
}

pub type ServerError = (StatusCode, Json<Value>);

fn error_body(status: StatusCode, message: &str) -> ServerError {
    (status, Json(json!({ "error": message })))
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::NotFound { .. } => {
                error_body(StatusCode::NOT_FOUND, err.message())
            }
            CommandError::Validation { .. } => {
                error_body(StatusCode::BAD_REQUEST, err.message())
            }
        }
    }
}
