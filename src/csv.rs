// src/csv.rs
use std::io::{self, Write};
use std::mem::take;

use crate::config::consts::DATE_COLUMN;
use crate::data::Snapshot;

/* ---------------- Parsing ---------------- */

/// Minimal CSV parser (quotes + CRLF tolerant). Used to read back the header
/// of a log we are about to append to.
pub fn parse_rows(text: &str, sep: char) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut field = String::new();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // double-quote escape
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            c if c == sep && !in_quotes => {
                row.push(take(&mut field));
            }
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) { chars.next(); }
                row.push(take(&mut field));
                if !(row.len() == 1 && row[0].is_empty()) {
                    rows.push(take(&mut row));
                } else {
                    row.clear();
                }
            }
            _ => field.push(ch),
        }
    }

    // Trailing row without newline
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single row to any writer.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/* ---------------- Snapshot rows ---------------- */

/// `date`, then every key in snapshot order.
pub fn header_row(snapshot: &Snapshot) -> Vec<&str> {
    std::iter::once(DATE_COLUMN).chain(snapshot.keys()).collect()
}

/// The date cell, then every value in snapshot order; missing values are empty.
pub fn data_row<'a>(snapshot: &'a Snapshot, date: &'a str) -> Vec<&'a str> {
    std::iter::once(date)
        .chain(snapshot.records().iter().map(|r| r.value.as_deref().unwrap_or("")))
        .collect()
}
