//! CSV audit table.

use std::io::Write;

use voltick_pipeline::AuditRow;

use crate::FormatError;

/// Writes per-symbol audit rows as delimited text.
///
/// The audit table is the raw-data escape hatch for verifying a
/// series: one row per emitted history point, carrying the source bar
/// next to the derived values at full precision.
#[derive(Debug, Clone, Copy)]
pub struct CsvWriter {
    /// Field delimiter (default: comma).
    delimiter: char,
    /// Whether to include header row.
    include_header: bool,
}

impl Default for CsvWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvWriter {
    /// Creates a writer with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delimiter: ',',
            include_header: true,
        }
    }

    /// Sets the field delimiter.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether to include a header row.
    #[must_use]
    pub const fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Creates a tab-separated values (TSV) writer.
    #[must_use]
    pub const fn tsv() -> Self {
        Self {
            delimiter: '\t',
            include_header: true,
        }
    }

    /// Writes the audit rows of one symbol's series.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write_audit<W: Write>(
        &self,
        rows: &[AuditRow],
        mut writer: W,
    ) -> Result<(), FormatError> {
        let d = self.delimiter;

        if self.include_header {
            writeln!(writer, "date{d}open{d}high{d}low{d}close{d}atr{d}atr_ticks")?;
        }

        for row in rows {
            writeln!(
                writer,
                "{}{d}{}{d}{}{d}{}{d}{}{d}{}{d}{}",
                row.date.format("%Y-%m-%d"),
                row.open,
                row.high,
                row.low,
                row.close,
                row.atr,
                row.atr_ticks
            )?;
        }

        Ok(())
    }
}
