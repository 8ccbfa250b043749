use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;
use tracing::{error, warn};

use crate::server::types::ErrorResponse;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),

    #[error(transparent)]
    Multipart(#[from] MultipartError),

    #[error("Classifier error: {0}")]
    Classifier(String),

    #[error("No image uploaded")]
    NoImageUploaded,

    #[error("No image selected")]
    NoImageSelected,
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn classifier(msg: impl Into<String>) -> Self {
        Self::Classifier(msg.into())
    }

    /// Client input problems are 400, everything else is a processing failure.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NoImageUploaded | Self::NoImageSelected => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        if status.is_server_error() {
            error!("Request failed: {}", message);
        } else {
            warn!("Rejected request: {}", message);
        }

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
