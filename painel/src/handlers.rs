use anyhow::{Context, Result};
use clap::ArgMatches;
use colored::Colorize;
use painel_core::{
    CheckOptions, ProbeOptions, ReportFormat, StatusReport, execute_check, extract_links,
    generate_broken_links_summary, write_report,
};
use painel_map::MapConfig;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

/// Expand a leading `~` in a user supplied path
pub fn resolve_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).as_ref())
}

/// Settings for a single `check-links` run
pub struct CheckLinksRun {
    pub input: PathBuf,
    pub output: PathBuf,
    pub format: ReportFormat,
    pub options: CheckOptions,
}

impl CheckLinksRun {
    pub fn from_args(args: &ArgMatches) -> Self {
        let input = args
            .get_one::<String>("INPUT")
            .map(|s| resolve_path(s))
            .unwrap_or_else(|| PathBuf::from("src/data/dataSources.js"));
        let output = args
            .get_one::<String>("output")
            .map(|s| resolve_path(s))
            .unwrap_or_else(|| PathBuf::from("link_statuses.txt"));
        let format = args
            .get_one::<String>("format")
            .and_then(|s| ReportFormat::from_str(s))
            .unwrap_or_default();

        let mut probe = ProbeOptions::default();
        if let Some(timeout) = args.get_one::<u64>("timeout") {
            probe.timeout_secs = *timeout;
        }
        if let Some(user_agent) = args.get_one::<String>("user-agent") {
            probe.user_agent = user_agent.clone();
        }

        Self {
            input,
            output,
            format,
            options: CheckOptions {
                probe,
                show_progress_bars: io::stderr().is_terminal(),
            },
        }
    }
}

/// Extract, probe, save and summarise. Console output goes to `out`.
///
/// Returns `None` when the input held no links, in which case no report file
/// is written. Failing to write the report is an error.
pub async fn run_check_links<W: Write>(run: CheckLinksRun, out: &mut W) -> Result<Option<StatusReport>> {
    let CheckLinksRun {
        input,
        output,
        format,
        options,
    } = run;

    writeln!(out, "Extracting links from {}...", input.display())?;
    let links = extract_links(&input, &mut *out)?;

    if links.is_empty() {
        writeln!(out, "No links found or an error occurred during extraction.")?;
        return Ok(None);
    }

    writeln!(out, "Found {} links. Checking their status...", links.len())?;
    let report = execute_check(&links, options)
        .await
        .context("Failed to set up link prober")?;

    writeln!(out, "Saving status results to {}...", output.display())?;
    write_report(&report, &output, format)
        .with_context(|| format!("Failed to write report to {}", output.display()))?;
    writeln!(out, "{}", "Done.".green().bold())?;

    print_broken_links(&report, out)?;

    Ok(Some(report))
}

fn print_broken_links<W: Write>(report: &StatusReport, out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "Broken links:".red().bold())?;
    write!(out, "{}", generate_broken_links_summary(report))
}

pub async fn handle_check_links(args: &ArgMatches) {
    let run = CheckLinksRun::from_args(args);
    let mut stdout = io::stdout();

    if let Err(e) = run_check_links(run, &mut stdout).await {
        eprintln!("{} {:#}", "✗".red().bold(), e);
        std::process::exit(1);
    }
}

/// Fold `serve-map` arguments into an immutable map configuration
pub fn map_config_from_args(args: &ArgMatches) -> MapConfig {
    let mut config = MapConfig::default();

    if let Some(token) = args.get_one::<String>("token") {
        config = config.with_access_token(token.trim());
    }
    if let Some(tile_url) = args.get_one::<String>("tile-url") {
        config = config.with_tile_url(tile_url.as_str());
    }
    if let (Some(lat), Some(lon)) = (
        args.get_one::<f64>("center-lat"),
        args.get_one::<f64>("center-lon"),
    ) {
        config = config.with_center(*lat, *lon);
    }
    if let Some(zoom) = args.get_one::<u8>("zoom") {
        config = config.with_zoom(*zoom);
    }

    config
}

pub async fn handle_serve_map(args: &ArgMatches) {
    let host = args
        .get_one::<String>("host")
        .map(String::as_str)
        .unwrap_or("127.0.0.1");
    let port = *args.get_one::<u16>("port").unwrap_or(&8050);
    let config = map_config_from_args(args);

    println!(
        "{} Serving map on {}",
        "→".blue(),
        format!("http://{}:{}/", host, port).bright_white()
    );

    if let Err(e) = painel_map::run_map_server(host, port, config).await {
        eprintln!("{} {:#}", "✗".red().bold(), e);
        std::process::exit(1);
    }
}

