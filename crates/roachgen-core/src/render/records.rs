//! One block per row, one line per column

use std::fmt::Write;

use super::TableRenderer;
use crate::error::Result;

#[derive(Debug, Clone, Copy, Default)]
pub struct RecordsRenderer;

impl TableRenderer for RecordsRenderer {
    fn render(&self, header: &[&str], rows: &[Vec<String>]) -> Result<Vec<u8>> {
        let width = header.iter().map(|h| h.chars().count()).max().unwrap_or(0);
        let mut out = String::new();

        for (i, row) in rows.iter().enumerate() {
            let _ = writeln!(out, "-[ RECORD {} ]", i + 1);
            for (j, name) in header.iter().enumerate() {
                let cell = row.get(j).map(String::as_str).unwrap_or("");
                let pad = width - name.chars().count();
                let _ = writeln!(out, "{}{} | {}", name, " ".repeat(pad), cell);
            }
        }

        if rows.is_empty() {
            out.push_str("(0 rows)\n");
        }

        Ok(out.into_bytes())
    }
}
