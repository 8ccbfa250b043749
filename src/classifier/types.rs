use serde::{Deserialize, Serialize};
use std::fmt;

/// Label set produced by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Diagnosis {
    Pneumonia,
    Normal,
}

impl Diagnosis {
    pub const ALL: [Diagnosis; 2] = [Diagnosis::Pneumonia, Diagnosis::Normal];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pneumonia => "Pneumonia",
            Self::Normal => "Normal",
        }
    }
}

impl fmt::Display for Diagnosis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub prediction: Diagnosis,
    pub confidence: f64,
}

/// Rounds a confidence score to two decimal places.
pub fn round_confidence(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
