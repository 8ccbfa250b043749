use super::types::{PredictResponse, Upload};
use crate::{Error, Result, classifier::Classifier};
use axum::{
    extract::{Multipart, State, multipart::MultipartRejection},
    response::Json,
};
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

/// Multipart field that carries the image.
pub const IMAGE_FIELD: &str = "image";

#[derive(Clone)]
pub struct AppState {
    pub classifier: Arc<dyn Classifier>,
}

impl AppState {
    pub fn new(classifier: Arc<dyn Classifier>) -> Self {
        Self { classifier }
    }
}

#[instrument(skip_all, fields(request_id = %Uuid::new_v4()))]
pub async fn predict(
    State(state): State<AppState>,
    multipart: std::result::Result<Multipart, MultipartRejection>,
) -> Result<Json<PredictResponse>> {
    // A body that is not multipart/form-data carries no files at all.
    let mut multipart = multipart.map_err(|_| Error::NoImageUploaded)?;
    let upload = read_upload(&mut multipart).await?;

    info!(
        "Received image '{}' ({} bytes)",
        upload.file_name,
        upload.bytes.len()
    );

    let prediction = state.classifier.classify(&upload.bytes).await?;

    info!(
        "Prediction: {} with confidence {}",
        prediction.prediction, prediction.confidence
    );

    Ok(Json(prediction))
}

/// Finds the first `image` part that is a file upload and reads it fully.
///
/// Parts named `image` without a filename are plain form fields and are skipped.
async fn read_upload(multipart: &mut Multipart) -> Result<Upload> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        let Some(file_name) = field.file_name().map(str::to_owned) else {
            continue;
        };

        if file_name.is_empty() {
            return Err(Error::NoImageSelected);
        }

        let bytes = field.bytes().await?;
        return Ok(Upload { file_name, bytes });
    }

    Err(Error::NoImageUploaded)
}
