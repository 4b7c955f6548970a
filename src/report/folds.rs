use tracing::debug;

use crate::model::{AbundanceLookup, FeatureId, ScoredOutcome};
use crate::report::features::{by_score_desc, scored_rows};
use crate::report::{ReportError, check_aligned, render_header, render_line};

// Column names follow the established output; rows carry scope before id.
pub const FOLD_HEADER: [&str; 5] = [
    "FOLD_NUMBER",
    "GROUP_ID",
    "GROUP_SCOPE",
    "GROUP_SCORE",
    "GROUP_ABUNDANCE",
];

#[derive(Debug, Clone, PartialEq)]
pub struct FoldFeatureRow {
    pub fold: usize,
    pub scope: String,
    pub id: FeatureId,
    pub score: f64,
    pub abundance: f64,
}

impl FoldFeatureRow {
    pub fn render(&self) -> String {
        render_line(&[
            &self.fold,
            &self.scope,
            &self.id,
            &self.score,
            &self.abundance,
        ])
    }
}

/// Ranks each fold independently and concatenates the ranked folds in fold
/// order. A top-scoring group of fold 1 still comes after every fold 0 row.
pub fn fold_rows<O: ScoredOutcome>(
    folds: &[O],
    lookup: &dyn AbundanceLookup,
) -> Result<Vec<FoldFeatureRow>, ReportError> {
    let mut out = Vec::new();
    for (fold, outcome) in folds.iter().enumerate() {
        check_aligned(outcome, || format!("fold {fold}"))?;
        let mut batch = scored_rows(outcome, lookup)?
            .into_iter()
            .map(|row| FoldFeatureRow {
                fold,
                scope: row.scope,
                id: row.id,
                score: row.score,
                abundance: row.abundance,
            })
            .collect::<Vec<_>>();
        batch.sort_by(|a, b| {
            by_score_desc((a.score, a.scope.as_str(), &a.id), (b.score, b.scope.as_str(), &b.id))
        });
        debug!("fold {}: {} ranked groups", fold, batch.len());
        out.extend(batch);
    }
    Ok(out)
}

pub fn fold_report_lines<O: ScoredOutcome>(
    folds: &[O],
    lookup: &dyn AbundanceLookup,
) -> Result<Vec<String>, ReportError> {
    let rows = fold_rows(folds, lookup)?;

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(render_header(&FOLD_HEADER));
    lines.extend(rows.iter().map(FoldFeatureRow::render));
    Ok(lines)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/folds.rs"]
mod tests;
