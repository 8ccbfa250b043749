use super::types::*;
use crate::{Result, config::ClassifierConfig};
use async_trait::async_trait;
use rand::Rng;
use tracing::debug;

/// Turns raw image bytes into a diagnosis.
///
/// A trained model would be loaded once at start-up and shared behind an
/// `Arc<dyn Classifier>`; decoding and preprocessing belong in `classify`.
#[async_trait]
pub trait Classifier: Send + Sync {
    async fn classify(&self, image: &[u8]) -> Result<Prediction>;
}

/// Stand-in for real inference: a uniformly random label and confidence.
///
/// The image content is never inspected.
#[derive(Debug, Clone, Default)]
pub struct RandomClassifier {
    config: ClassifierConfig,
}

impl RandomClassifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    fn sample(&self) -> Prediction {
        let mut rng = rand::thread_rng();
        let prediction = Diagnosis::ALL[rng.gen_range(0..Diagnosis::ALL.len())];
        let raw = rng.gen_range(self.config.confidence_min..=self.config.confidence_max);

        Prediction {
            prediction,
            confidence: round_confidence(raw),
        }
    }
}

#[async_trait]
impl Classifier for RandomClassifier {
    async fn classify(&self, image: &[u8]) -> Result<Prediction> {
        let prediction = self.sample();
        debug!(
            "Classified {} bytes as {} ({})",
            image.len(),
            prediction.prediction,
            prediction.confidence
        );
        Ok(prediction)
    }
}
