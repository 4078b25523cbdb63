//! CSV and TSV output

use super::TableRenderer;
use crate::error::Result;

/// Delimiter-separated values with quoting handled by the `csv` crate
#[derive(Debug, Clone, Copy)]
pub struct DelimitedRenderer {
    delimiter: u8,
}

impl DelimitedRenderer {
    pub fn csv() -> Self {
        Self { delimiter: b',' }
    }

    pub fn tsv() -> Self {
        Self { delimiter: b'\t' }
    }
}

impl TableRenderer for DelimitedRenderer {
    fn render(&self, header: &[&str], rows: &[Vec<String>]) -> Result<Vec<u8>> {
        let mut wtr = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .flexible(true)
            .from_writer(vec![]);

        wtr.write_record(header)?;
        for row in rows {
            wtr.write_record(row)?;
        }

        wtr.flush()?;
        wtr.into_inner()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()).into())
    }
}
