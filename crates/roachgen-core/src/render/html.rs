//! HTML table output

use std::fmt::Write;

use super::{row_count, TableRenderer};
use crate::error::Result;

/// HTML `<table>` renderer
///
/// With `escape` off, cell text is emitted as-is so callers can embed
/// markup, and only then does the renderer report markup support.
/// `row_stats` adds a leading row-number column and a footer with the row
/// count.
#[derive(Debug, Clone, Copy)]
pub struct HtmlRenderer {
    pub escape: bool,
    pub row_stats: bool,
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self {
            escape: true,
            row_stats: true,
        }
    }
}

impl HtmlRenderer {
    /// Renderer that leaves cell markup intact and omits row statistics
    pub fn raw() -> Self {
        Self {
            escape: false,
            row_stats: false,
        }
    }

    fn cell<'a>(&self, s: &'a str) -> std::borrow::Cow<'a, str> {
        if self.escape {
            escape_html(s).into()
        } else {
            s.into()
        }
    }
}

impl TableRenderer for HtmlRenderer {
    fn render(&self, header: &[&str], rows: &[Vec<String>]) -> Result<Vec<u8>> {
        let mut out = String::from("<table>\n<thead><tr>");
        if self.row_stats {
            out.push_str("<th>row</th>");
        }
        for h in header {
            let _ = write!(out, "<th>{}</th>", self.cell(h));
        }
        out.push_str("</tr></thead>\n<tbody>\n");

        for (i, row) in rows.iter().enumerate() {
            out.push_str("<tr>");
            if self.row_stats {
                let _ = write!(out, "<td>{}</td>", i + 1);
            }
            for cell in row {
                let _ = write!(out, "<td>{}</td>", self.cell(cell));
            }
            out.push_str("</tr>\n");
        }
        out.push_str("</tbody>\n");

        if self.row_stats {
            let _ = writeln!(
                out,
                "<tfoot><tr><td colspan={}>{}</td></tr></tfoot>",
                header.len() + 1,
                row_count(rows.len())
            );
        }
        out.push_str("</table>\n");

        Ok(out.into_bytes())
    }

    fn supports_markup(&self) -> bool {
        !self.escape
    }
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
