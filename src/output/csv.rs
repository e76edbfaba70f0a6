//! CSV report sink

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;

use super::common::csv_line;
use crate::config::report::HEADER;
use crate::error::{Result, TfeError};
use crate::usage::UsageRow;

/// Write the header and one line per row
pub fn write_usage_csv<W: Write>(mut writer: W, rows: &[UsageRow]) -> std::io::Result<()> {
    writeln!(writer, "{}", csv_line(&HEADER))?;
    for row in rows {
        writeln!(writer, "{}", csv_line(&row.fields()))?;
    }
    Ok(())
}

/// Create (or truncate) the report file at `path` and write all rows to it
pub fn write_usage_report(path: &Path, rows: &[UsageRow]) -> Result<()> {
    debug!("Writing {} rows to {}", rows.len(), path.display());

    let file = File::create(path).map_err(|e| {
        TfeError::Report(format!("failed to create {}: {}", path.display(), e))
    })?;

    let mut writer = BufWriter::new(file);
    write_usage_csv(&mut writer, rows)
        .and_then(|_| writer.flush())
        .map_err(|e| TfeError::Report(format!("failed to write {}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(org: &str, ws: &str, resources: u32, billable: u32) -> UsageRow {
        UsageRow {
            organization: org.to_string(),
            workspace: ws.to_string(),
            resource_count: resources,
            billable_resource_count: billable,
        }
    }

    #[test]
    fn test_write_usage_csv_header_only() {
        let mut out = Vec::new();
        write_usage_csv(&mut out, &[]).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Organization,Workspace,Resource Count,Billable Resource Count\n"
        );
    }

    #[test]
    fn test_write_usage_csv_rows_and_quoting() {
        let rows = vec![row("acme", "net", 10, 8), row("acme", "db, primary", 0, 0)];

        let mut out = Vec::new();
        write_usage_csv(&mut out, &rows).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "acme,net,10,8");
        assert_eq!(lines[2], "acme,\"db, primary\",0,0");
    }

    #[test]
    fn test_write_usage_report_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("usage.csv");

        write_usage_report(&path, &[row("acme", "net", 3, 1)]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("Organization,Workspace"));
        assert!(content.ends_with("acme,net,3,1\n"));
    }

    #[test]
    fn test_write_usage_report_bad_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("usage.csv");

        match write_usage_report(&path, &[]) {
            Err(TfeError::Report(msg)) => assert!(msg.contains("failed to create")),
            other => panic!("Expected TfeError::Report, got {:?}", other),
        }
    }
}
