//! Last-resort line splitter for data no configuration accepts
//!
//! Splits each usable line on commas outside double quotes, strips the
//! quotes afterwards, and right-pads short rows so the result is
//! rectangular. Everything stays textual; this path makes no attempt at
//! type inference.

use crate::app::models::CellValue;
use crate::constants::is_blank_or_comment;

/// Split every usable line and square the result off
///
/// Blank and comment lines are ignored. Returns `None` when nothing
/// usable remains, otherwise rows padded with empty text cells to the
/// widest row seen.
pub fn parse_manually(data: &str) -> Option<Vec<Vec<CellValue>>> {
    let mut rows: Vec<Vec<String>> = Vec::new();

    for line in data.lines() {
        if is_blank_or_comment(line) {
            continue;
        }
        rows.push(split_quoted_line(line));
    }

    if rows.is_empty() {
        return None;
    }

    let width = rows.iter().map(|row| row.len()).max().unwrap_or(0);
    Some(
        rows.into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row.into_iter().map(CellValue::Text).collect()
            })
            .collect(),
    )
}

/// Split one line on commas that sit outside double quotes
///
/// A quote character toggles quoted state and stays in the field until the
/// final cleanup, which trims whitespace and strips surrounding quotes.
pub fn split_quoted_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                current.push(ch);
            }
            ',' if !in_quotes => {
                fields.push(finish_field(&current));
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    fields.push(finish_field(&current));

    fields
}

fn finish_field(raw: &str) -> String {
    raw.trim().trim_matches('"').to_string()
}
