use super::*;
use crate::model::{AbundanceTable, FeatureRecord, LookupError, Outcome};

fn outcome(records: &[(&str, &str)], scores: &[f64]) -> Outcome {
    Outcome {
        records: records
            .iter()
            .map(|(scope, id)| FeatureRecord::new(*scope, *id))
            .collect(),
        scores: scores.to_vec(),
        prediction_quality: 0.0,
    }
}

fn table() -> AbundanceTable {
    let mut table = AbundanceTable::new();
    for (scope, id, value) in [
        ("g1", "A", 5.0),
        ("g1", "B", 10.0),
        ("g2", "C", 1.5),
        ("g2", "D", 7.0),
    ] {
        table.insert(scope, &FeatureId::from(id), value);
    }
    table
}

fn parse(line: &str) -> (usize, f64) {
    let fields = line.split('\t').collect::<Vec<_>>();
    (fields[0].parse().unwrap(), fields[3].parse().unwrap())
}

#[test]
fn test_header_and_row_layout() {
    let folds = vec![outcome(&[("g1", "A")], &[0.4])];
    let lines = fold_report_lines(&folds, &table()).unwrap();
    assert_eq!(
        lines[0],
        "FOLD_NUMBER\tGROUP_ID\tGROUP_SCOPE\tGROUP_SCORE\tGROUP_ABUNDANCE"
    );
    assert_eq!(lines[1], "0\tg1\tA\t0.4\t5");
}

#[test]
fn test_sorts_within_each_fold_not_globally() {
    let folds = vec![
        outcome(&[("g1", "A"), ("g1", "B")], &[0.1, 0.3]),
        outcome(&[("g2", "C"), ("g2", "D")], &[0.9, 0.2]),
    ];
    let lines = fold_report_lines(&folds, &table()).unwrap();
    assert_eq!(
        lines[1..].to_vec(),
        vec![
            "0\tg1\tB\t0.3\t10".to_string(),
            "0\tg1\tA\t0.1\t5".to_string(),
            "1\tg2\tC\t0.9\t1.5".to_string(),
            "1\tg2\tD\t0.2\t7".to_string(),
        ]
    );
}

#[test]
fn test_fold_groups_ascending_and_scores_descending_within() {
    let folds = vec![
        outcome(&[("g1", "A"), ("g1", "B"), ("g2", "C")], &[0.2, 0.7, 0.5]),
        outcome(&[("g2", "D")], &[0.95]),
        outcome(&[("g2", "C"), ("g1", "A"), ("g2", "D")], &[0.01, 0.6, 0.33]),
    ];
    let lines = fold_report_lines(&folds, &table()).unwrap();
    assert_eq!(lines.len(), 1 + 3 + 1 + 3);

    let rows = lines[1..].iter().map(|l| parse(l)).collect::<Vec<_>>();
    for pair in rows.windows(2) {
        let ((fold_a, score_a), (fold_b, score_b)) = (pair[0], pair[1]);
        assert!(fold_a <= fold_b);
        if fold_a == fold_b {
            assert!(score_a >= score_b);
        }
    }
    assert_eq!(rows[3], (1, 0.95));

    assert!(lines.iter().all(|l| l.split('\t').count() == FOLD_HEADER.len()));
}

#[test]
fn test_no_folds_yields_header_only() {
    let folds: Vec<Outcome> = Vec::new();
    let lines = fold_report_lines(&folds, &table()).unwrap();
    assert_eq!(lines.len(), 1);
}

#[test]
fn test_misaligned_fold_names_the_fold() {
    let folds = vec![
        outcome(&[("g1", "A")], &[0.4]),
        outcome(&[("g1", "A"), ("g1", "B")], &[0.4]),
    ];
    let err = fold_report_lines(&folds, &table()).unwrap_err();
    assert!(matches!(err, ReportError::MisalignedOutcome { .. }));
    assert_eq!(err.to_string(), "fold 1: outcome has 2 records but 1 scores");
}

#[test]
fn test_unknown_abundance_in_later_fold_fails() {
    let folds = vec![
        outcome(&[("g1", "A")], &[0.4]),
        outcome(&[("g9", "X")], &[0.4]),
    ];
    let err = fold_report_lines(&folds, &table()).unwrap_err();
    assert!(matches!(
        err,
        ReportError::Lookup(LookupError::Unknown { .. })
    ));
}
