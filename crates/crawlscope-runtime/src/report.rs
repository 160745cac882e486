use crawlscope_engine::{IntervalRow, ProtocolRow};
use crawlscope_types::SessionDuration;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::Result;

/// Header of the protocol census CSV
pub const PROTOCOL_HEADER: [&str; 2] = ["nodeid", "protocol"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// `;`-delimited rows
    Csv,
    /// Pretty-printed JSON array of row objects
    Json,
}

impl ReportFormat {
    /// `.json` files get JSON, everything else CSV
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ReportFormat::Json,
            _ => ReportFormat::Csv,
        }
    }
}

/// Serializes report rows to CSV or JSON.
///
/// Session rows carry no CSV header so the file reads as plain
/// `peer;duration` lines; the protocol census is written with one.
#[derive(Debug, Clone, Copy)]
pub struct ReportWriter {
    format: ReportFormat,
}

impl ReportWriter {
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    pub fn for_path(path: &Path) -> Self {
        Self::new(ReportFormat::from_path(path))
    }

    pub fn format(&self) -> ReportFormat {
        self.format
    }

    pub fn write_sessions<W: Write>(&self, out: W, rows: &[SessionDuration]) -> Result<()> {
        self.write_rows(out, None, rows)
    }

    pub fn write_intervals<W: Write>(&self, out: W, rows: &[IntervalRow]) -> Result<()> {
        self.write_rows(out, None, rows)
    }

    pub fn write_protocols<W: Write>(&self, out: W, rows: &[ProtocolRow]) -> Result<()> {
        self.write_rows(out, Some(&PROTOCOL_HEADER), rows)
    }

    fn write_rows<W: Write, T: Serialize>(
        &self,
        mut out: W,
        header: Option<&[&str]>,
        rows: &[T],
    ) -> Result<()> {
        match self.format {
            ReportFormat::Json => {
                serde_json::to_writer_pretty(&mut out, rows)?;
                writeln!(out)?;
            }
            ReportFormat::Csv => {
                let mut writer = csv::WriterBuilder::new()
                    .delimiter(b';')
                    .has_headers(false)
                    .from_writer(&mut out);
                if let Some(header) = header {
                    writer.write_record(header)?;
                }
                for row in rows {
                    writer.serialize(row)?;
                }
                writer.flush()?;
            }
        }
        out.flush()?;
        Ok(())
    }
}

/// Create (or truncate) a report file, making parent directories as needed
pub fn create_report_file(path: &Path) -> Result<BufWriter<File>> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    Ok(BufWriter::new(File::create(path)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crawlscope_types::PeerId;

    fn durations() -> Vec<SessionDuration> {
        vec![
            SessionDuration {
                peer_id: PeerId::from("QmA"),
                duration_seconds: 1800,
            },
            SessionDuration {
                peer_id: PeerId::from("QmB"),
                duration_seconds: 0,
            },
        ]
    }

    fn render(writer: ReportWriter, f: impl FnOnce(&ReportWriter, &mut Vec<u8>) -> Result<()>) -> String {
        let mut buf = Vec::new();
        f(&writer, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(ReportFormat::from_path(Path::new("a/b.json")), ReportFormat::Json);
        assert_eq!(ReportFormat::from_path(Path::new("a/b.JSON")), ReportFormat::Json);
        assert_eq!(ReportFormat::from_path(Path::new("a/b.csv")), ReportFormat::Csv);
        assert_eq!(ReportFormat::from_path(Path::new("report")), ReportFormat::Csv);
    }

    #[test]
    fn test_session_csv_has_no_header() {
        let out = render(ReportWriter::new(ReportFormat::Csv), |w, buf| {
            w.write_sessions(buf, &durations())
        });
        assert_eq!(out, "QmA;1800\nQmB;0\n");
    }

    #[test]
    fn test_session_json() {
        let out = render(ReportWriter::new(ReportFormat::Json), |w, buf| {
            w.write_sessions(buf, &durations())
        });
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["peer_id"], "QmA");
        assert_eq!(value[1]["duration_seconds"], 0);
    }

    #[test]
    fn test_interval_csv() {
        let day = NaiveDate::from_ymd_opt(2019, 11, 29).unwrap();
        let rows = vec![IntervalRow {
            peer_id: PeerId::from("QmA"),
            start: day.and_hms_opt(10, 0, 0).unwrap(),
            end: day.and_hms_opt(10, 30, 0).unwrap(),
            duration_seconds: 1800,
        }];
        let out = render(ReportWriter::new(ReportFormat::Csv), |w, buf| {
            w.write_intervals(buf, &rows)
        });
        assert_eq!(out, "QmA;2019-11-29T10:00:00;2019-11-29T10:30:00;1800\n");
    }

    #[test]
    fn test_protocol_csv_has_header() {
        let rows = vec![
            ProtocolRow {
                peer_id: PeerId::from("QmA"),
                protocol: "ip4".to_string(),
            },
            ProtocolRow {
                peer_id: PeerId::from("QmA"),
                protocol: "ip6".to_string(),
            },
        ];
        let out = render(ReportWriter::new(ReportFormat::Csv), |w, buf| {
            w.write_protocols(buf, &rows)
        });
        assert_eq!(out, "nodeid;protocol\nQmA;ip4\nQmA;ip6\n");
    }

    #[test]
    fn test_create_report_file_makes_parents() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("plot_data").join("session_lengths.csv");
        let file = create_report_file(&path).unwrap();
        ReportWriter::for_path(&path)
            .write_sessions(file, &durations())
            .unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "QmA;1800\nQmB;0\n");
    }
}
