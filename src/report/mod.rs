pub mod features;
pub mod folds;
pub mod iterations;
pub mod writer;

use std::fmt::Display;

use thiserror::Error;

use crate::model::{LookupError, ScoredOutcome};

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("{context}: outcome has {records} records but {scores} scores")]
    MisalignedOutcome {
        context: String,
        records: usize,
        scores: usize,
    },
    #[error("abundance lookup failed: {0}")]
    Lookup(#[from] LookupError),
    #[error("iteration {iteration} has no outcomes; cannot summarize prediction quality")]
    EmptyIteration { iteration: usize },
    #[error("{report} report requires an abundance table")]
    MissingAbundance { report: &'static str },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("manifest serialization failed: {0}")]
    Manifest(#[from] serde_json::Error),
}

/// Joins fields with tabs using each field's `Display` form. No quoting or
/// escaping: fields are expected to be plain identifiers and numbers.
pub fn render_line(fields: &[&dyn Display]) -> String {
    let mut line = String::new();
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            line.push('\t');
        }
        line.push_str(&field.to_string());
    }
    line
}

pub fn render_header(columns: &[&str]) -> String {
    let fields = columns
        .iter()
        .map(|c| c as &dyn Display)
        .collect::<Vec<_>>();
    render_line(&fields)
}

pub(crate) fn check_aligned<O: ScoredOutcome + ?Sized>(
    outcome: &O,
    context: impl FnOnce() -> String,
) -> Result<(), ReportError> {
    let records = outcome.records().len();
    let scores = outcome.scores().len();
    if records != scores {
        return Err(ReportError::MisalignedOutcome {
            context: context(),
            records,
            scores,
        });
    }
    Ok(())
}

/// Returns `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population standard deviation (denominator N). `None` for an empty slice.
pub fn std_dev(values: &[f64]) -> Option<f64> {
    let m = mean(values)?;
    let var = values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / values.len() as f64;
    Some(var.sqrt())
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
