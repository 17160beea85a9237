//! Tests for the quote-aware fallback splitter

use crate::app::models::CellValue;
use crate::app::services::arff_parser::manual::{parse_manually, split_quoted_line};

fn text(value: &str) -> CellValue {
    CellValue::Text(value.to_string())
}

#[test]
fn test_split_respects_quoted_commas() {
    assert_eq!(split_quoted_line("\"a,b\",c"), vec!["a,b", "c"]);
}

#[test]
fn test_split_trims_and_strips_quotes() {
    assert_eq!(split_quoted_line(" \"x\" ,  y  "), vec!["x", "y"]);
}

#[test]
fn test_unbalanced_quote_runs_to_end_of_line() {
    assert_eq!(split_quoted_line("\"a,b"), vec!["a,b"]);
}

#[test]
fn test_rows_padded_to_widest() {
    let rows = parse_manually("1,2,3\n4,5\n").unwrap();

    assert_eq!(
        rows,
        vec![
            vec![text("1"), text("2"), text("3")],
            vec![text("4"), text("5"), text("")],
        ]
    );
}

#[test]
fn test_blank_and_comment_lines_ignored() {
    let rows = parse_manually("% header note\n\n1,2\n   \n").unwrap();
    assert_eq!(rows.len(), 1);
}

#[test]
fn test_nothing_usable_is_none() {
    assert!(parse_manually("").is_none());
    assert!(parse_manually("% only\n   \n").is_none());
}

#[test]
fn test_cells_stay_textual() {
    let rows = parse_manually("42,true\n").unwrap();
    assert_eq!(rows, vec![vec![text("42"), text("true")]]);
}
