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

fn table(entries: &[(&str, &str, f64)]) -> AbundanceTable {
    let mut table = AbundanceTable::new();
    for (scope, id, value) in entries {
        table.insert(scope, &FeatureId::from(*id), *value);
    }
    table
}

fn score_column(line: &str, idx: usize) -> f64 {
    line.split('\t').nth(idx).unwrap().parse().unwrap()
}

#[test]
fn test_ranks_two_groups() {
    let o = outcome(&[("g1", "A"), ("g1", "B")], &[0.2, 0.9]);
    let t = table(&[("g1", "A", 5.0), ("g1", "B", 10.0)]);
    let lines = feature_report_lines(&o, &t).unwrap();
    assert_eq!(
        lines,
        vec![
            "GROUP_ID\tGROUP_SCOPE\tGROUP_SCORE\tGROUP_ABUNDANCE".to_string(),
            "B\tg1\t0.9\t10".to_string(),
            "A\tg1\t0.2\t5".to_string(),
        ]
    );
}

#[test]
fn test_line_count_and_descending_scores() {
    let o = outcome(
        &[("g1", "A"), ("g1", "B"), ("g2", "C"), ("g2", "D"), ("g3", "E")],
        &[0.3, 0.05, 0.8, 0.3, 0.61],
    );
    let t = table(&[
        ("g1", "A", 1.0),
        ("g1", "B", 2.0),
        ("g2", "C", 3.0),
        ("g2", "D", 4.0),
        ("g3", "E", 5.0),
    ]);
    let lines = feature_report_lines(&o, &t).unwrap();
    assert_eq!(lines.len(), 6);

    let scores = lines[1..]
        .iter()
        .map(|l| score_column(l, 2))
        .collect::<Vec<_>>();
    assert!(scores.windows(2).all(|w| w[0] >= w[1]));

    let header_fields = lines[0].split('\t').count();
    assert!(lines.iter().all(|l| l.split('\t').count() == header_fields));
}

#[test]
fn test_ties_are_deterministic() {
    let t = table(&[("g2", "A", 1.0), ("g1", "B", 2.0), ("g1", "A", 3.0)]);
    let forward = outcome(&[("g2", "A"), ("g1", "B"), ("g1", "A")], &[0.5, 0.5, 0.5]);
    let reverse = outcome(&[("g1", "A"), ("g1", "B"), ("g2", "A")], &[0.5, 0.5, 0.5]);

    let a = feature_report_lines(&forward, &t).unwrap();
    let b = feature_report_lines(&reverse, &t).unwrap();
    assert_eq!(a, b);
    assert_eq!(a[1], "A\tg1\t0.5\t3");
    assert_eq!(a[2], "B\tg1\t0.5\t2");
    assert_eq!(a[3], "A\tg2\t0.5\t1");
}

#[test]
fn test_integer_ids_render_bare() {
    let o = Outcome {
        records: vec![FeatureRecord::new("otu", 17i64), FeatureRecord::new("otu", 4i64)],
        scores: vec![0.1, 0.4],
        prediction_quality: 0.0,
    };
    let mut t = AbundanceTable::new();
    t.insert("otu", &FeatureId::Int(17), 2.5);
    t.insert("otu", &FeatureId::Int(4), 12.0);
    let lines = feature_report_lines(&o, &t).unwrap();
    assert_eq!(lines[1], "4\totu\t0.4\t12");
    assert_eq!(lines[2], "17\totu\t0.1\t2.5");
}

#[test]
fn test_empty_outcome_yields_header_only() {
    let o = outcome(&[], &[]);
    let lines = feature_report_lines(&o, &AbundanceTable::new()).unwrap();
    assert_eq!(lines, vec![render_header(&FEATURE_HEADER)]);
}

#[test]
fn test_misaligned_outcome_fails() {
    let o = outcome(&[("g1", "A"), ("g1", "B")], &[0.2]);
    let t = table(&[("g1", "A", 5.0), ("g1", "B", 10.0)]);
    let err = feature_report_lines(&o, &t).unwrap_err();
    match err {
        ReportError::MisalignedOutcome {
            records, scores, ..
        } => {
            assert_eq!(records, 2);
            assert_eq!(scores, 1);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_unknown_abundance_propagates() {
    let o = outcome(&[("g1", "A"), ("g1", "Z")], &[0.2, 0.3]);
    let t = table(&[("g1", "A", 5.0)]);
    let err = feature_report_lines(&o, &t).unwrap_err();
    match err {
        ReportError::Lookup(LookupError::Unknown { scope, id }) => {
            assert_eq!(scope, "g1");
            assert_eq!(id, "Z");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_scored_rows_keep_record_order() {
    let o = outcome(&[("g1", "A"), ("g1", "B")], &[0.2, 0.9]);
    let t = table(&[("g1", "A", 5.0), ("g1", "B", 10.0)]);
    let rows = scored_rows(&o, &t).unwrap();
    assert_eq!(rows[0].id, FeatureId::from("A"));
    assert_eq!(rows[1].abundance, 10.0);
}
