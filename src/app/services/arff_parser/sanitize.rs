//! Post-parse cell cleanup
//!
//! Non-finite floats have no JSON representation, so they are nulled out
//! before a table is cached or serialized.

use tracing::debug;

use crate::app::models::{CellValue, DataTable};

/// Replace every NaN or infinite float cell with a null
///
/// Returns the number of cells replaced.
pub fn sanitize_table(table: &mut DataTable) -> usize {
    let mut replaced = 0usize;

    for row in &mut table.rows {
        for cell in row {
            if cell.is_non_finite() {
                *cell = CellValue::Null;
                replaced += 1;
            }
        }
    }

    if replaced > 0 {
        debug!("Nulled {} non-finite float cells", replaced);
    }

    replaced
}
