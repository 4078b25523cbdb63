//! Tabular renderers
//!
//! A renderer turns a header and string rows into bytes for the terminal,
//! a spreadsheet or a web page. Callers that want inline markup in cells
//! check [`TableRenderer::supports_markup`] first.

mod ascii;
mod delimited;
mod html;
mod records;

pub use ascii::AsciiTableRenderer;
pub use delimited::DelimitedRenderer;
pub use html::HtmlRenderer;
pub use records::RecordsRenderer;

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

use crate::error::{GenError, Result};

/// Renders a header plus rows into display bytes
pub trait TableRenderer {
    fn render(&self, header: &[&str], rows: &[Vec<String>]) -> Result<Vec<u8>>;

    /// Whether cells may carry inline markup such as `<code>`
    fn supports_markup(&self) -> bool {
        false
    }
}

/// Table display format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableFormat {
    Tsv,
    Csv,
    Table,
    Records,
    Html,
}

impl TableFormat {
    pub const ALL: [TableFormat; 5] = [
        TableFormat::Tsv,
        TableFormat::Csv,
        TableFormat::Table,
        TableFormat::Records,
        TableFormat::Html,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TableFormat::Tsv => "tsv",
            TableFormat::Csv => "csv",
            TableFormat::Table => "table",
            TableFormat::Records => "records",
            TableFormat::Html => "html",
        }
    }
}

impl fmt::Display for TableFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TableFormat {
    type Err = GenError;

    fn from_str(s: &str) -> Result<Self> {
        TableFormat::ALL
            .iter()
            .copied()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| {
                GenError::invalid_parameter(format!(
                    "invalid table display format: {} \
                     (possible values: tsv, csv, table, records, html)",
                    s
                ))
            })
    }
}

/// Build the default renderer for a display format
pub fn make_renderer(format: TableFormat) -> Box<dyn TableRenderer> {
    match format {
        TableFormat::Tsv => Box::new(DelimitedRenderer::tsv()),
        TableFormat::Csv => Box::new(DelimitedRenderer::csv()),
        TableFormat::Table => Box::new(AsciiTableRenderer),
        TableFormat::Records => Box::new(RecordsRenderer),
        TableFormat::Html => Box::new(HtmlRenderer::default()),
    }
}

/// `(1 row)` / `(N rows)`
fn row_count(n: usize) -> String {
    if n == 1 {
        "1 row".to_string()
    } else {
        format!("{} rows", n)
    }
}
