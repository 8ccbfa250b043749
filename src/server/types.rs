use serde::Serialize;

pub use crate::classifier::Prediction as PredictResponse;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// An uploaded file, held only for the lifetime of one request.
#[derive(Debug)]
pub struct Upload {
    pub file_name: String,
    pub bytes: axum::body::Bytes,
}
