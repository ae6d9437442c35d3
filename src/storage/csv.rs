//! CSV export for sweep rows.

use std::io::Write;
use std::path::Path;

use crate::core::SweepRow;
use crate::BenchError;

/// CSV column headers in deterministic order. No index column is written;
/// these three columns are the whole schema.
pub const CSV_HEADERS: &[&str] = &["program", "flags", "runtime"];

/// CSV exporter for sweep rows.
///
/// Writes the full result table once, at the end of a sweep, overwriting
/// any existing file at the output path.
#[derive(Debug, Clone, Default)]
pub struct CsvExporter;

impl CsvExporter {
    /// Create a new CsvExporter.
    pub fn new() -> Self {
        CsvExporter
    }

    /// Export rows to a CSV file, truncating any existing file.
    ///
    /// # Errors
    /// Returns an error if file operations or CSV writing fails.
    pub fn export(&self, rows: &[SweepRow], output: &Path) -> Result<(), BenchError> {
        // Ensure parent directory exists
        if let Some(parent) = output.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| BenchError::Message(format!("failed to create directory: {e}")))?;
            }
        }

        let file = std::fs::File::create(output)
            .map_err(|e| BenchError::Message(format!("failed to create file: {e}")))?;

        self.export_to_writer(rows, file)
    }

    /// Export rows to stdout.
    pub fn export_to_stdout(&self, rows: &[SweepRow]) -> Result<(), BenchError> {
        let stdout = std::io::stdout();
        let handle = stdout.lock();
        self.export_to_writer(rows, handle)
    }

    /// Export rows to any writer implementing Write.
    pub fn export_to_writer<W: Write>(
        &self,
        rows: &[SweepRow],
        writer: W,
    ) -> Result<(), BenchError> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer
            .write_record(CSV_HEADERS)
            .map_err(|e| BenchError::Message(format!("failed to write CSV headers: {e}")))?;

        for row in rows {
            csv_writer
                .write_record([&row.program, &row.flags, &row.runtime])
                .map_err(|e| BenchError::Message(format!("failed to write CSV row: {e}")))?;
        }

        csv_writer
            .flush()
            .map_err(|e| BenchError::Message(format!("failed to flush CSV writer: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_export_to_writer() {
        let exporter = CsvExporter::new();
        let rows = vec![
            SweepRow::new("ipv4_ttl_safe", &[], "0.12"),
            SweepRow::new("ipv4_ttl_safe", &flags(&["-f", "-i", "-n", "-d"]), "0.08"),
        ];

        let mut buffer = Vec::new();
        exporter.export_to_writer(&rows, &mut buffer).unwrap();

        let csv_str = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = csv_str.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "program,flags,runtime");
        assert_eq!(lines[1], "ipv4_ttl_safe,,0.12");
        assert_eq!(lines[2], "ipv4_ttl_safe,-f -i -n -d,0.08");
    }

    #[test]
    fn test_export_empty_rows_writes_header_only() {
        let exporter = CsvExporter::new();

        let mut buffer = Vec::new();
        exporter.export_to_writer(&[], &mut buffer).unwrap();

        let csv_str = String::from_utf8(buffer).unwrap();
        assert_eq!(csv_str.lines().count(), 1);
        assert_eq!(csv_str.lines().next(), Some("program,flags,runtime"));
    }

    #[test]
    fn test_export_to_file() {
        let exporter = CsvExporter::new();
        let rows = vec![SweepRow::new("vlan_decap_unsafe", &flags(&["-d"]), "1.5")];

        let dir = tempfile::tempdir().unwrap();
        let output_path = dir.path().join("out").join("results.csv");

        exporter.export(&rows, &output_path).unwrap();

        assert!(output_path.exists());
        let contents = std::fs::read_to_string(&output_path).unwrap();
        assert!(contents.starts_with("program,flags,runtime"));
        assert!(contents.contains("vlan_decap_unsafe,-d,1.5"));
    }

    #[test]
    fn test_export_overwrites_existing_file() {
        let exporter = CsvExporter::new();
        let dir = tempfile::tempdir().unwrap();
        let output_path = dir.path().join("results.csv");

        let first = vec![
            SweepRow::new("a_safe", &[], "1"),
            SweepRow::new("a_safe", &[], "2"),
        ];
        exporter.export(&first, &output_path).unwrap();

        let second = vec![SweepRow::new("b_safe", &[], "3")];
        exporter.export(&second, &output_path).unwrap();

        let contents = std::fs::read_to_string(&output_path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        // Truncated, not appended
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "b_safe,,3");
    }

    #[test]
    fn test_row_order_is_preserved() {
        let exporter = CsvExporter::new();
        let rows: Vec<SweepRow> = (0..5)
            .map(|i| SweepRow::new("a_safe", &[], i.to_string()))
            .collect();

        let mut buffer = Vec::new();
        exporter.export_to_writer(&rows, &mut buffer).unwrap();

        let csv_str = String::from_utf8(buffer).unwrap();
        let runtimes: Vec<&str> = csv_str
            .lines()
            .skip(1)
            .map(|l| l.rsplit(',').next().unwrap())
            .collect();
        assert_eq!(runtimes, vec!["0", "1", "2", "3", "4"]);
    }
}
