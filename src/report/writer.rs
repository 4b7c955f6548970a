use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use tracing::{info, warn};

use crate::input::results::EvaluationResults;
use crate::model::AbundanceLookup;
use crate::report::ReportError;
use crate::report::features::feature_report_lines;
use crate::report::folds::fold_report_lines;
use crate::report::iterations::iteration_summary_lines;

pub const MANIFEST_FILE: &str = "manifest.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    Features,
    Folds,
    Summary,
}

impl ReportKind {
    pub const ALL: [ReportKind; 3] = [
        ReportKind::Features,
        ReportKind::Folds,
        ReportKind::Summary,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ReportKind::Features => "features",
            ReportKind::Folds => "folds",
            ReportKind::Summary => "summary",
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            ReportKind::Features => "features.tsv",
            ReportKind::Folds => "fold_features.tsv",
            ReportKind::Summary => "testing_summary.tsv",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestEntry {
    pub report: ReportKind,
    pub file: String,
    pub rows: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunManifest {
    pub tool: String,
    pub version: String,
    pub reports: Vec<ManifestEntry>,
}

/// Writes each line followed by `\n`, truncating any existing file.
pub fn write_lines(lines: &[String], path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    for line in lines {
        w.write_all(line.as_bytes())?;
        w.write_all(b"\n")?;
    }
    // BufWriter swallows errors on drop.
    w.flush()
}

/// Builds every requested report that has input, then writes them together
/// with `manifest.json`. Nothing is written if any report fails to build.
pub fn write_reports(
    results: &EvaluationResults,
    lookup: Option<&dyn AbundanceLookup>,
    out_dir: &Path,
    kinds: &[ReportKind],
) -> Result<RunManifest, ReportError> {
    let mut selected = kinds.to_vec();
    selected.sort();
    selected.dedup();

    let mut built = Vec::with_capacity(selected.len());
    for kind in selected {
        if let Some(lines) = build_report(results, lookup, kind)? {
            built.push((kind, lines));
        }
    }

    fs::create_dir_all(out_dir)?;

    let mut reports = Vec::with_capacity(built.len());
    for (kind, lines) in &built {
        let path = out_dir.join(kind.file_name());
        write_lines(lines, &path)?;
        let rows = lines.len().saturating_sub(1);
        info!("wrote {} report: {} ({} rows)", kind.name(), path.display(), rows);
        reports.push(ManifestEntry {
            report: *kind,
            file: kind.file_name().to_string(),
            rows,
        });
    }

    let manifest = RunManifest {
        tool: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        reports,
    };
    write_manifest(&manifest, &out_dir.join(MANIFEST_FILE))?;

    Ok(manifest)
}

fn build_report(
    results: &EvaluationResults,
    lookup: Option<&dyn AbundanceLookup>,
    kind: ReportKind,
) -> Result<Option<Vec<String>>, ReportError> {
    let lines = match kind {
        ReportKind::Features => {
            let Some(outcome) = &results.outcome else {
                warn!("no final outcome in input; skipping features report");
                return Ok(None);
            };
            let lookup = lookup.ok_or(ReportError::MissingAbundance { report: "features" })?;
            feature_report_lines(outcome, lookup)?
        }
        ReportKind::Folds => {
            let Some(folds) = &results.folds else {
                warn!("no fold outcomes in input; skipping folds report");
                return Ok(None);
            };
            let lookup = lookup.ok_or(ReportError::MissingAbundance { report: "folds" })?;
            fold_report_lines(folds, lookup)?
        }
        ReportKind::Summary => {
            let Some(iterations) = &results.iterations else {
                warn!("no iteration outcomes in input; skipping summary report");
                return Ok(None);
            };
            iteration_summary_lines(iterations)?
        }
    };
    Ok(Some(lines))
}

fn write_manifest(manifest: &RunManifest, path: &Path) -> Result<(), ReportError> {
    let mut w = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut w, manifest)?;
    w.write_all(b"\n")?;
    w.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/writer.rs"]
mod tests;
