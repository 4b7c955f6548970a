use std::cmp::Ordering;

use tracing::debug;

use crate::model::{AbundanceLookup, FeatureId, ScoredOutcome};
use crate::report::{ReportError, check_aligned, render_header, render_line};

pub const FEATURE_HEADER: [&str; 4] = [
    "GROUP_ID",
    "GROUP_SCOPE",
    "GROUP_SCORE",
    "GROUP_ABUNDANCE",
];

#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRow {
    pub id: FeatureId,
    pub scope: String,
    pub score: f64,
    pub abundance: f64,
}

impl FeatureRow {
    pub fn render(&self) -> String {
        render_line(&[&self.id, &self.scope, &self.score, &self.abundance])
    }
}

/// Pairs every record of `outcome` with its score and abundance.
/// Rows come back in record order.
pub fn scored_rows<O: ScoredOutcome + ?Sized>(
    outcome: &O,
    lookup: &dyn AbundanceLookup,
) -> Result<Vec<FeatureRow>, ReportError> {
    let records = outcome.records();
    let scores = outcome.scores();
    let mut rows = Vec::with_capacity(records.len());
    for (record, &score) in records.iter().zip(scores) {
        let abundance = lookup.abundance(record.scope(), record.id())?;
        rows.push(FeatureRow {
            id: record.id().clone(),
            scope: record.scope().to_string(),
            score,
            abundance,
        });
    }
    Ok(rows)
}

/// Score descending; equal scores fall back to scope then id so the output
/// never depends on input order.
pub(crate) fn by_score_desc(
    a: (f64, &str, &FeatureId),
    b: (f64, &str, &FeatureId),
) -> Ordering {
    match b.0.total_cmp(&a.0) {
        Ordering::Equal => match a.1.cmp(b.1) {
            Ordering::Equal => a.2.cmp(b.2),
            other => other,
        },
        other => other,
    }
}

pub fn feature_rows<O: ScoredOutcome + ?Sized>(
    outcome: &O,
    lookup: &dyn AbundanceLookup,
) -> Result<Vec<FeatureRow>, ReportError> {
    check_aligned(outcome, || "feature report".to_string())?;
    let mut rows = scored_rows(outcome, lookup)?;
    rows.sort_by(|a, b| {
        by_score_desc((a.score, a.scope.as_str(), &a.id), (b.score, b.scope.as_str(), &b.id))
    });
    Ok(rows)
}

pub fn feature_report_lines<O: ScoredOutcome + ?Sized>(
    outcome: &O,
    lookup: &dyn AbundanceLookup,
) -> Result<Vec<String>, ReportError> {
    let rows = feature_rows(outcome, lookup)?;
    debug!("feature report: {} ranked groups", rows.len());

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(render_header(&FEATURE_HEADER));
    lines.extend(rows.iter().map(FeatureRow::render));
    Ok(lines)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/features.rs"]
mod tests;
