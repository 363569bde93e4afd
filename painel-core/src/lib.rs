use colored::Colorize;

pub mod check;
pub mod extract;
pub mod report;

pub use check::{CheckOptions, CheckProgressCallback, StatusReport, check_links, execute_check};
pub use extract::{ExtractError, extract_links, parse_links, read_links};
pub use painel_scanner::{ProbeOptions, StatusResult};
pub use report::{
    ReportFormat, broken_links, generate_broken_links_summary, generate_text_report, write_report,
};

pub fn print_banner() {
    println!(
        "{} {}",
        "painel".bright_green().bold(),
        format!("v{}", env!("CARGO_PKG_VERSION")).dimmed()
    );
}
