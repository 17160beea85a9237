//! Tests for non-finite value cleanup

use crate::app::models::{CellValue, DataTable};
use crate::app::services::arff_parser::sanitize::sanitize_table;

fn table_with(cells: Vec<CellValue>) -> DataTable {
    let columns = (0..cells.len()).map(|index| format!("c{}", index)).collect();
    DataTable::new(columns, vec![cells]).unwrap()
}

#[test]
fn test_non_finite_floats_become_null() {
    let mut table = table_with(vec![
        CellValue::Float(f64::NAN),
        CellValue::Float(f64::INFINITY),
        CellValue::Float(f64::NEG_INFINITY),
        CellValue::Float(1.5),
    ]);

    let replaced = sanitize_table(&mut table);

    assert_eq!(replaced, 3);
    assert_eq!(table.rows[0][0], CellValue::Null);
    assert_eq!(table.rows[0][1], CellValue::Null);
    assert_eq!(table.rows[0][2], CellValue::Null);
    assert_eq!(table.rows[0][3], CellValue::Float(1.5));
}

#[test]
fn test_clean_table_is_untouched() {
    let mut table = table_with(vec![
        CellValue::Int(1),
        CellValue::Text("inf-ish".to_string()),
        CellValue::Null,
    ]);
    let before = table.clone();

    assert_eq!(sanitize_table(&mut table), 0);
    assert_eq!(table, before);
}
