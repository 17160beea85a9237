//! Tests for the ordered reader configurations

use crate::app::models::CellValue;
use crate::app::services::arff_parser::strategies::{
    STRATEGIES, StrategyOutcome, apply_strategy,
};

fn rows_of(outcome: StrategyOutcome) -> (Vec<Vec<CellValue>>, usize) {
    match outcome {
        StrategyOutcome::Rows { rows, rows_skipped } => (rows, rows_skipped),
        StrategyOutcome::Failed { reason } => panic!("attempt rejected: {}", reason),
    }
}

#[test]
fn test_configuration_order() {
    assert_eq!(STRATEGIES.len(), 4);
    assert_eq!(STRATEGIES[0].name, "comma-escaped");
    assert_eq!(STRATEGIES[0].escape, Some(b'\\'));
    assert_eq!(STRATEGIES[1].name, "comma-quoted");
    assert_eq!(STRATEGIES[2].delimiter, b'\t');
    assert!(!STRATEGIES[3].quoting);
}

#[test]
fn test_clean_rows_are_typed() {
    let (rows, skipped) = rows_of(apply_strategy(&STRATEGIES[0], "1,true\n2.5,x\n", None));

    assert_eq!(skipped, 0);
    assert_eq!(
        rows,
        vec![
            vec![CellValue::Int(1), CellValue::Bool(true)],
            vec![CellValue::Float(2.5), CellValue::Text("x".to_string())],
        ]
    );
}

#[test]
fn test_fields_are_trimmed_before_typing() {
    let (rows, _) = rows_of(apply_strategy(&STRATEGIES[0], " 1 ,  2 \n", None));
    assert_eq!(rows, vec![vec![CellValue::Int(1), CellValue::Int(2)]]);
}

#[test]
fn test_comment_lines_are_skipped() {
    let (rows, skipped) = rows_of(apply_strategy(&STRATEGIES[0], "% note\n1,2\n", None));

    assert_eq!(rows.len(), 1);
    assert_eq!(skipped, 0);
}

#[test]
fn test_short_row_rejects_the_attempt() {
    let outcome = apply_strategy(&STRATEGIES[0], "1,2,3\n4,5\n", None);
    assert!(matches!(outcome, StrategyOutcome::Failed { .. }));
}

#[test]
fn test_overlong_row_is_dropped() {
    let (rows, skipped) = rows_of(apply_strategy(&STRATEGIES[0], "1,2\n1,2,3\n4,5\n", None));

    assert_eq!(rows.len(), 2);
    assert_eq!(skipped, 1);
}

#[test]
fn test_unsplit_input_needs_a_declared_single_column() {
    let outcome = apply_strategy(&STRATEGIES[0], "alpha\nbeta\n", None);
    assert!(matches!(outcome, StrategyOutcome::Failed { .. }));

    let (rows, _) = rows_of(apply_strategy(&STRATEGIES[0], "alpha\nbeta\n", Some(1)));
    assert_eq!(rows.len(), 2);
}

#[test]
fn test_tab_configuration_splits_on_tabs() {
    let (rows, _) = rows_of(apply_strategy(&STRATEGIES[2], "a\tb\nc\td\n", None));
    assert_eq!(rows[0].len(), 2);

    // The comma configurations never split this input
    let outcome = apply_strategy(&STRATEGIES[0], "a\tb\n", None);
    assert!(matches!(outcome, StrategyOutcome::Failed { .. }));
}

#[test]
fn test_quoted_fields_keep_embedded_delimiters() {
    let (rows, _) = rows_of(apply_strategy(&STRATEGIES[1], "\"a,b\",c\n", None));

    assert_eq!(
        rows,
        vec![vec![
            CellValue::Text("a,b".to_string()),
            CellValue::Text("c".to_string()),
        ]]
    );
}

#[test]
fn test_quoting_disabled_splits_inside_quotes() {
    let (rows, _) = rows_of(apply_strategy(&STRATEGIES[3], "\"a,b\",c\n", None));
    assert_eq!(rows[0].len(), 3);
}

#[test]
fn test_escaped_quotes_inside_fields() {
    let (rows, _) = rows_of(apply_strategy(&STRATEGIES[0], "\"a\\\"b\",c\n", None));
    assert_eq!(rows[0][0], CellValue::Text("a\"b".to_string()));
}

#[test]
fn test_empty_segment_is_rejected() {
    assert!(matches!(
        apply_strategy(&STRATEGIES[0], "", None),
        StrategyOutcome::Failed { .. }
    ));
    assert!(matches!(
        apply_strategy(&STRATEGIES[0], "% only comments\n", None),
        StrategyOutcome::Failed { .. }
    ));
}
