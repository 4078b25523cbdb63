//! Boxed ASCII table for terminals

use std::fmt::Write;

use super::{row_count, TableRenderer};
use crate::error::Result;

/// Aligned table with a row count footer
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiTableRenderer;

impl TableRenderer for AsciiTableRenderer {
    fn render(&self, header: &[&str], rows: &[Vec<String>]) -> Result<Vec<u8>> {
        let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
        for row in rows {
            for (i, cell) in row.iter().enumerate() {
                let len = cell.chars().count();
                match widths.get_mut(i) {
                    Some(w) => *w = (*w).max(len),
                    None => widths.push(len),
                }
            }
        }

        let mut out = String::new();
        let separator = separator_line(&widths);

        out.push_str(&separator);
        write_row(&mut out, &widths, header.iter().copied());
        out.push_str(&separator);
        for row in rows {
            write_row(&mut out, &widths, row.iter().map(String::as_str));
        }
        out.push_str(&separator);
        let _ = writeln!(out, "({})", row_count(rows.len()));

        Ok(out.into_bytes())
    }
}

fn separator_line(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for w in widths {
        line.push_str(&"-".repeat(w + 2));
        line.push('+');
    }
    line.push('\n');
    line
}

fn write_row<'a>(out: &mut String, widths: &[usize], cells: impl Iterator<Item = &'a str>) {
    let mut cells = cells;
    out.push('|');
    for w in widths {
        let cell = cells.next().unwrap_or("");
        let pad = w - cell.chars().count();
        let _ = write!(out, " {}{} |", cell, " ".repeat(pad));
    }
    out.push('\n');
}
