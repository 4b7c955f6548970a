use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::input::{InputError, open_maybe_gz};
use crate::model::Outcome;

/// Everything an evaluation run hands over for reporting. Each section is
/// optional; reports whose section is absent are skipped.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EvaluationResults {
    /// Outcome of the final model trained on all data.
    #[serde(default)]
    pub outcome: Option<Outcome>,
    /// One outcome per cross-validation fold, index = fold number.
    #[serde(default)]
    pub folds: Option<Vec<Outcome>>,
    /// Repeated experiment runs, each holding one outcome per split.
    #[serde(default)]
    pub iterations: Option<Vec<Vec<Outcome>>>,
}

impl EvaluationResults {
    pub fn is_empty(&self) -> bool {
        self.outcome.is_none() && self.folds.is_none() && self.iterations.is_none()
    }
}

pub fn load_results(path: &Path) -> Result<EvaluationResults, InputError> {
    let reader = open_maybe_gz(path)?;
    let results = parse_results(reader, &path.display().to_string())?;
    info!(
        "loaded {}: outcome={}, folds={}, iterations={}",
        path.display(),
        results.outcome.is_some(),
        results.folds.as_ref().map_or(0, Vec::len),
        results.iterations.as_ref().map_or(0, Vec::len)
    );
    Ok(results)
}

pub fn parse_results<R: std::io::Read>(
    reader: R,
    source_name: &str,
) -> Result<EvaluationResults, InputError> {
    let results: EvaluationResults =
        serde_json::from_reader(reader).map_err(|source| InputError::Json {
            path: source_name.to_string(),
            source,
        })?;
    if results.is_empty() {
        return Err(InputError::InvalidInput(format!(
            "{source_name} has no outcome, folds or iterations section"
        )));
    }
    Ok(results)
}
