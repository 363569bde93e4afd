use crate::error::{Result, ScanError};
use crate::result::StatusResult;
use reqwest::{Client, header};
use std::time::{Duration, Instant};
use tracing::{debug, warn};
use url::Url;

/// Browser-like client signature sent with every probe; some hosts reject
/// requests that do not look like they come from a browser.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

const MAX_REDIRECTS: usize = 30;

/// Settings for the probe client
#[derive(Debug, Clone)]
pub struct ProbeOptions {
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for ProbeOptions {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Issues HEAD requests and turns each outcome into a [`StatusResult`].
pub struct Prober {
    client: Client,
    timeout_secs: u64,
}

impl Prober {
    pub fn new(options: &ProbeOptions) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_str(&options.user_agent)?,
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(options.timeout_secs))
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()?;

        Ok(Self {
            client,
            timeout_secs: options.timeout_secs,
        })
    }

    pub fn with_defaults() -> Result<Self> {
        Self::new(&ProbeOptions::default())
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }

    /// Send one HEAD request to `url` and return the final status code after
    /// redirects.
    pub async fn try_probe(&self, url: &str) -> Result<u16> {
        let parsed = Url::parse(url).map_err(|e| ScanError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        debug!("HEAD {}", parsed);
        let start = Instant::now();
        let response = self.client.head(parsed).send().await?;
        let status_code = response.status().as_u16();
        debug!(
            "{} answered {} in {:?}",
            url,
            status_code,
            start.elapsed()
        );

        Ok(status_code)
    }

    /// Like [`Prober::try_probe`] but never fails: transport errors become a
    /// [`StatusResult::Failure`] carrying the error description.
    pub async fn probe(&self, url: &str) -> StatusResult {
        match self.try_probe(url).await {
            Ok(code) => StatusResult::Code(code),
            Err(e) => {
                let description = e.describe();
                warn!("Probe failed for {}: {}", url, description);
                StatusResult::Failure(description)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{header as header_matcher, method, path},
    };

    #[tokio::test]
    async fn test_probe_returns_status_code() {
        let mock_server = MockServer::start().await;

        Mock::given(method("HEAD"))
            .and(path("/ok"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&mock_server)
            .await;

        Mock::given(method("HEAD"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let prober = Prober::with_defaults().unwrap();

        let ok = prober.probe(&format!("{}/ok", mock_server.uri())).await;
        assert_eq!(ok, StatusResult::Code(200));

        let missing = prober.probe(&format!("{}/missing", mock_server.uri())).await;
        assert_eq!(missing, StatusResult::Code(404));
    }

    #[tokio::test]
    async fn test_probe_sends_browser_user_agent() {
        let mock_server = MockServer::start().await;

        Mock::given(method("HEAD"))
            .and(header_matcher("user-agent", DEFAULT_USER_AGENT))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        let prober = Prober::with_defaults().unwrap();
        let result = prober.probe(&mock_server.uri()).await;

        assert_eq!(result, StatusResult::Code(204));
    }

    #[tokio::test]
    async fn test_probe_follows_redirects() {
        let mock_server = MockServer::start().await;

        Mock::given(method("HEAD"))
            .and(path("/old"))
            .respond_with(
                ResponseTemplate::new(301)
                    .insert_header("location", format!("{}/new", mock_server.uri())),
            )
            .mount(&mock_server)
            .await;

        Mock::given(method("HEAD"))
            .and(path("/new"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&mock_server)
            .await;

        let prober = Prober::with_defaults().unwrap();
        let result = prober.probe(&format!("{}/old", mock_server.uri())).await;

        assert_eq!(result, StatusResult::Code(200));
    }

    #[tokio::test]
    async fn test_probe_invalid_url_is_failure() {
        let prober = Prober::with_defaults().unwrap();
        let result = prober.probe("not a url").await;

        match result {
            StatusResult::Failure(reason) => {
                assert!(reason.contains("Invalid URL 'not a url'"), "{}", reason);
            }
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_probe_connection_refused_is_failure() {
        // Bind then release a port so nothing is listening on it
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let prober = Prober::with_defaults().unwrap();
        let result = prober.probe(&format!("http://127.0.0.1:{}/", port)).await;

        assert!(result.is_failure());
        assert!(!result.to_string().is_empty());
    }

    #[tokio::test]
    async fn test_probe_timeout_is_failure() {
        let mock_server = MockServer::start().await;

        Mock::given(method("HEAD"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
            .mount(&mock_server)
            .await;

        let options = ProbeOptions {
            timeout_secs: 1,
            ..ProbeOptions::default()
        };
        let prober = Prober::new(&options).unwrap();
        let result = prober.probe(&mock_server.uri()).await;

        assert!(result.is_failure(), "expected timeout, got {:?}", result);
    }

    #[test]
    fn test_invalid_user_agent_is_rejected() {
        let options = ProbeOptions {
            user_agent: "bad\nagent".to_string(),
            ..ProbeOptions::default()
        };

        assert!(matches!(
            Prober::new(&options),
            Err(ScanError::InvalidHeader(_))
        ));
    }
}
