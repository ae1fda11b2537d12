use crate::catalog::{
    CatalogServiceError, CriteriaError, InvestmentError, PropertyImportError, RepositoryError,
};
use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Seed(serde_json::Error),
    Render(serde_json::Error),
    Import(PropertyImportError),
    Criteria(CriteriaError),
    Catalog(CatalogServiceError),
    Investment(InvestmentError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Seed(err) => write!(f, "invalid catalog snapshot: {}", err),
            AppError::Render(err) => write!(f, "failed to render output: {}", err),
            AppError::Import(err) => write!(f, "import error: {}", err),
            AppError::Criteria(err) => write!(f, "invalid filter: {}", err),
            AppError::Catalog(err) => write!(f, "catalog error: {}", err),
            AppError::Investment(err) => write!(f, "investment error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Seed(err) => Some(err),
            AppError::Render(err) => Some(err),
            AppError::Import(err) => Some(err),
            AppError::Criteria(err) => Some(err),
            AppError::Catalog(err) => Some(err),
            AppError::Investment(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Import(_)
            | AppError::Criteria(_)
            | AppError::Investment(_)
            | AppError::Catalog(CatalogServiceError::Import(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Catalog(CatalogServiceError::Repository(RepositoryError::Forbidden)) => {
                StatusCode::FORBIDDEN
            }
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Seed(_)
            | AppError::Render(_)
            | AppError::Catalog(CatalogServiceError::Repository(RepositoryError::Unavailable(_))) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Seed(value)
    }
}

impl From<PropertyImportError> for AppError {
    fn from(value: PropertyImportError) -> Self {
        Self::Import(value)
    }
}

impl From<CriteriaError> for AppError {
    fn from(value: CriteriaError) -> Self {
        Self::Criteria(value)
    }
}

impl From<CatalogServiceError> for AppError {
    fn from(value: CatalogServiceError) -> Self {
        Self::Catalog(value)
    }
}

impl From<InvestmentError> for AppError {
    fn from(value: InvestmentError) -> Self {
        Self::Investment(value)
    }
}
