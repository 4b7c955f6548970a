use serde::{Deserialize, Serialize};

use crate::model::record::FeatureRecord;

/// Read-only view of one evaluation run (a fold or one split of an
/// iteration). `scores()[i]` belongs to `records()[i]`.
pub trait ScoredOutcome {
    fn records(&self) -> &[FeatureRecord];
    fn scores(&self) -> &[f64];
    fn prediction_quality(&self) -> f64;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    pub records: Vec<FeatureRecord>,
    pub scores: Vec<f64>,
    #[serde(default)]
    pub prediction_quality: f64,
}

impl ScoredOutcome for Outcome {
    fn records(&self) -> &[FeatureRecord] {
        &self.records
    }

    fn scores(&self) -> &[f64] {
        &self.scores
    }

    fn prediction_quality(&self) -> f64 {
        self.prediction_quality
    }
}
