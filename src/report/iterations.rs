use tracing::debug;

use crate::model::ScoredOutcome;
use crate::report::{ReportError, mean, render_header, render_line, std_dev};

pub const ITERATION_HEADER: [&str; 3] = [
    "ITERATION",
    "AVG_PREDICTION_SCORE",
    "STD_DEV_PREDICTION_SCORE",
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationRow {
    pub iteration: usize,
    pub mean: f64,
    pub std_dev: f64,
}

impl IterationRow {
    pub fn render(&self) -> String {
        render_line(&[&self.iteration, &self.mean, &self.std_dev])
    }
}

pub fn iteration_rows<O: ScoredOutcome>(
    iterations: &[Vec<O>],
) -> Result<Vec<IterationRow>, ReportError> {
    let mut rows = Vec::with_capacity(iterations.len());
    for (iteration, outcomes) in iterations.iter().enumerate() {
        let quality = outcomes
            .iter()
            .map(|o| o.prediction_quality())
            .collect::<Vec<_>>();
        let (Some(avg), Some(std)) = (mean(&quality), std_dev(&quality)) else {
            return Err(ReportError::EmptyIteration { iteration });
        };
        debug!(
            "iteration {}: {} outcomes, mean={}, std={}",
            iteration,
            quality.len(),
            avg,
            std
        );
        rows.push(IterationRow {
            iteration,
            mean: avg,
            std_dev: std,
        });
    }
    Ok(rows)
}

/// Rows stay in iteration order; they are never re-sorted.
pub fn iteration_summary_lines<O: ScoredOutcome>(
    iterations: &[Vec<O>],
) -> Result<Vec<String>, ReportError> {
    let rows = iteration_rows(iterations)?;

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(render_header(&ITERATION_HEADER));
    lines.extend(rows.iter().map(IterationRow::render));
    Ok(lines)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/iterations.rs"]
mod tests;
