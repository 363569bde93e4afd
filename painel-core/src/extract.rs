// Link extraction from source files
//
// Only one format is recognised: a `link` label, a colon, optional whitespace
// and a double-quoted value. The label may appear anywhere in the file.

use regex::Regex;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use thiserror::Error;
use tracing::debug;

static LINK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"link:\s*"([^"]+)""#).unwrap());

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("The file {} was not found.", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Collect every quoted `link: "..."` value in `content`, in order of
/// appearance. Duplicates are kept.
pub fn parse_links(content: &str) -> Vec<String> {
    LINK_PATTERN
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Read `path` and parse its links, surfacing read failures to the caller.
pub fn read_links(path: &Path) -> Result<Vec<String>, ExtractError> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ExtractError::NotFound(path.to_path_buf()),
        _ => ExtractError::Read {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let links = parse_links(&content);
    debug!("Parsed {} links from {}", links.len(), path.display());
    Ok(links)
}

/// Read `path` and parse its links. A missing or unreadable file is reported
/// on `out` and treated as a file without links.
pub fn extract_links<W: Write>(path: &Path, out: &mut W) -> io::Result<Vec<String>> {
    match read_links(path) {
        Ok(links) => Ok(links),
        Err(e @ ExtractError::NotFound(_)) => {
            writeln!(out, "Error: {}", e)?;
            Ok(Vec::new())
        }
        Err(e) => {
            writeln!(out, "An error occurred: {}", e)?;
            Ok(Vec::new())
        }
    }
}
