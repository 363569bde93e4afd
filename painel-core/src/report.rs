// Report generation for link status results

use crate::check::StatusReport;
use painel_scanner::StatusResult;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl ReportFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Some(ReportFormat::Text),
            "json" => Some(ReportFormat::Json),
            _ => None,
        }
    }
}

/// One `<url>: <result>` line per entry, in report order.
pub fn generate_text_report(report: &StatusReport) -> String {
    let mut output = String::new();
    for (url, result) in report {
        output.push_str(&format!("{}: {}\n", url, result));
    }
    output
}

pub fn generate_json_report(report: &StatusReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

/// Write `report` to `path`, replacing whatever was there.
pub fn write_report(report: &StatusReport, path: &Path, format: ReportFormat) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);

    match format {
        ReportFormat::Text => writer.write_all(generate_text_report(report).as_bytes())?,
        ReportFormat::Json => {
            let json = generate_json_report(report).map_err(io::Error::other)?;
            writeln!(writer, "{}", json)?;
        }
    }

    writer.flush()
}

/// Entries whose result is anything other than a plain 200, in report order.
pub fn broken_links(report: &StatusReport) -> Vec<(&str, &StatusResult)> {
    report
        .iter()
        .filter(|(_, result)| !result.is_ok())
        .map(|(url, result)| (url.as_str(), result))
        .collect()
}

/// Console lines for [`broken_links`], formatted like the report file.
pub fn generate_broken_links_summary(report: &StatusReport) -> String {
    let mut summary = String::new();
    for (url, result) in broken_links(report) {
        summary.push_str(&format!("{}: {}\n", url, result));
    }
    summary
}
