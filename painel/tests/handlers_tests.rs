use painel::handlers::*;
use painel::{CheckOptions, ProbeOptions, ReportFormat, StatusResult};
use painel_core::generate_broken_links_summary;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tempfile::{NamedTempFile, TempDir};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

fn quiet_options() -> CheckOptions {
    CheckOptions {
        probe: ProbeOptions::default(),
        show_progress_bars: false,
    }
}

#[test]
fn test_resolve_path_plain() {
    assert_eq!(
        resolve_path("src/data/dataSources.js"),
        PathBuf::from("src/data/dataSources.js")
    );
}

#[test]
fn test_resolve_path_expands_tilde() {
    let resolved = resolve_path("~/link_statuses.txt");
    assert!(!resolved.to_string_lossy().starts_with('~'));
    assert!(resolved.ends_with("link_statuses.txt"));
}

#[tokio::test]
async fn test_run_check_links_full_flow() -> Result<(), Box<dyn std::error::Error>> {
    let mock_server = MockServer::start().await;

    Mock::given(method("HEAD"))
        .and(path("/cidades"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    Mock::given(method("HEAD"))
        .and(path("/removed"))
        .respond_with(ResponseTemplate::new(410))
        .mount(&mock_server)
        .await;

    let ok_url = format!("{}/cidades", mock_server.uri());
    let gone_url = format!("{}/removed", mock_server.uri());

    let mut input = NamedTempFile::new()?;
    writeln!(input, r#"{{ name: "IBGE", link: "{}" }},"#, ok_url)?;
    writeln!(input, r#"{{ name: "Antigo", link: "{}" }},"#, gone_url)?;
    writeln!(input, r#"{{ name: "Quebrado", link: "htp:/broken" }},"#)?;

    let dir = TempDir::new()?;
    let output = dir.path().join("link_statuses.txt");

    let run = CheckLinksRun {
        input: input.path().to_path_buf(),
        output: output.clone(),
        format: ReportFormat::Text,
        options: quiet_options(),
    };

    let mut console = Vec::new();
    let report = run_check_links(run, &mut console).await?.unwrap();

    assert_eq!(report.len(), 3);
    assert_eq!(report.get(&ok_url), Some(&StatusResult::Code(200)));
    assert_eq!(report.get(&gone_url), Some(&StatusResult::Code(410)));

    let written = fs::read_to_string(&output)?;
    assert_eq!(written.lines().count(), 3);
    assert!(written.contains(&format!("{}: 200\n", ok_url)));
    assert!(written.contains(&format!("{}: 410\n", gone_url)));

    let console = String::from_utf8(console)?;
    assert!(console.contains("Found 3 links. Checking their status..."));
    assert!(console.contains("Broken links:"));

    let summary = console.split("Broken links:").nth(1).unwrap();
    assert_eq!(
        summary.trim_start_matches(|c| c != '\n').trim_start_matches('\n'),
        generate_broken_links_summary(&report)
    );
    assert!(summary.contains(&format!("{}: 410", gone_url)));
    assert!(summary.contains("htp:/broken: "));
    assert!(!summary.contains(&ok_url));

    Ok(())
}

#[tokio::test]
async fn test_run_check_links_missing_input_writes_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let output = dir.path().join("link_statuses.txt");

    let run = CheckLinksRun {
        input: dir.path().join("does-not-exist.js"),
        output: output.clone(),
        format: ReportFormat::Text,
        options: quiet_options(),
    };

    let mut console = Vec::new();
    let report = run_check_links(run, &mut console).await?;

    assert!(report.is_none());
    assert!(!output.exists());

    let console = String::from_utf8(console)?;
    let lines: Vec<&str> = console.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Extracting links from "));
    assert!(lines[1].starts_with("Error: The file "));
    assert!(lines[1].ends_with("does-not-exist.js was not found."));
    assert_eq!(
        lines[2],
        "No links found or an error occurred during extraction."
    );

    Ok(())
}

#[tokio::test]
async fn test_run_check_links_write_failure_is_error() -> Result<(), Box<dyn std::error::Error>> {
    let mock_server = MockServer::start().await;

    Mock::given(method("HEAD"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let mut input = NamedTempFile::new()?;
    writeln!(input, r#"link: "{}""#, mock_server.uri())?;

    let dir = TempDir::new()?;
    let run = CheckLinksRun {
        input: input.path().to_path_buf(),
        // A directory cannot be opened as the report file
        output: dir.path().to_path_buf(),
        format: ReportFormat::Text,
        options: quiet_options(),
    };

    let mut console = Vec::new();
    let result = run_check_links(run, &mut console).await;

    assert!(result.is_err());
    assert!(
        format!("{:#}", result.unwrap_err()).contains("Failed to write report")
    );

    Ok(())
}
