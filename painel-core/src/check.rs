use indexmap::IndexMap;
use indexmap::map::Iter;
use indicatif::{ProgressBar, ProgressStyle};
use painel_scanner::{ProbeOptions, Prober, ScanError, StatusResult};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Ordered mapping of link to probe outcome.
///
/// Entries keep the position of the first time a URL was seen; probing the
/// same URL again replaces its result in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct StatusReport {
    entries: IndexMap<String, StatusResult>,
}

impl StatusReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, url: impl Into<String>, result: StatusResult) {
        self.entries.insert(url.into(), result);
    }

    pub fn get(&self, url: &str) -> Option<&StatusResult> {
        self.entries.get(url)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, String, StatusResult> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a StatusReport {
    type Item = (&'a String, &'a StatusResult);
    type IntoIter = Iter<'a, String, StatusResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<K: Into<String>> FromIterator<(K, StatusResult)> for StatusReport {
    fn from_iter<I: IntoIterator<Item = (K, StatusResult)>>(iter: I) -> Self {
        let mut report = StatusReport::new();
        for (url, result) in iter {
            report.insert(url, result);
        }
        report
    }
}

/// Options for configuring a check run
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    pub probe: ProbeOptions,
    pub show_progress_bars: bool,
}

/// Callback invoked before each probe with the 1-based position, the total
/// and the URL about to be checked
pub type CheckProgressCallback = Arc<dyn Fn(usize, usize, &str) + Send + Sync>;

/// Probe every link in order, one request at a time.
pub async fn check_links(
    prober: &Prober,
    links: &[String],
    progress_callback: Option<CheckProgressCallback>,
) -> StatusReport {
    let mut report = StatusReport::new();

    for (idx, link) in links.iter().enumerate() {
        if let Some(ref callback) = progress_callback {
            callback(idx + 1, links.len(), link);
        }
        let result = prober.probe(link).await;
        report.insert(link.as_str(), result);
    }

    report
}

/// Build a prober from `options` and check `links`, optionally drawing a
/// progress bar on stderr.
pub async fn execute_check(
    links: &[String],
    options: CheckOptions,
) -> Result<StatusReport, ScanError> {
    let CheckOptions {
        probe,
        show_progress_bars,
    } = options;

    let prober = Prober::new(&probe)?;
    info!(
        "Checking {} links (timeout {}s)",
        links.len(),
        prober.timeout_secs()
    );

    let progress_bar = if show_progress_bars {
        let pb = ProgressBar::new(links.len() as u64);
        if let Ok(style) =
            ProgressStyle::default_bar().template("{spinner:.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        {
            pb.set_style(style.progress_chars("=>-"));
        }
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(Arc::new(pb))
    } else {
        None
    };

    let progress_callback: Option<CheckProgressCallback> = progress_bar.clone().map(|pb| {
        Arc::new(move |position: usize, _total: usize, url: &str| {
            pb.set_position(position.saturating_sub(1) as u64);
            pb.set_message(url.to_string());
        }) as CheckProgressCallback
    });

    let report = check_links(&prober, links, progress_callback).await;

    if let Some(ref pb) = progress_bar {
        pb.finish_and_clear();
    }

    let failures = report.iter().filter(|(_, r)| r.is_failure()).count();
    info!(
        "Check complete. {} unique links, {} transport failures",
        report.len(),
        failures
    );

    Ok(report)
}
