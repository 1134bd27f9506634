//! HTTP client that submits the timetable lookup form.

use crate::error::TimetableError;
use crate::timetable::TimetableRequest;
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::info;
use url::Url;

/// Page that receives the lookup form submission.
const TIMETABLE_URL: &str = "https://www.itsligo.ie/student-hub/my-timetable/";

/// Configuration for the timetable client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// URL the form is POSTed to
    pub base_url: String,
    /// User agent string
    pub user_agent: String,
    /// Overall request timeout
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: TIMETABLE_URL.to_string(),
            user_agent: format!("ttscrape/{}", env!("CARGO_PKG_VERSION")),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Client for fetching timetable pages.
#[derive(Debug, Clone)]
pub struct TimetableClient {
    client: Client,
    base_url: Url,
}

impl TimetableClient {
    /// Creates a client with the default configuration.
    pub fn new() -> Result<Self, TimetableError> {
        Self::with_config(ClientConfig::default())
    }

    /// Creates a client with custom configuration. The base URL is
    /// validated here so a typo fails at construction, not mid-fetch.
    pub fn with_config(config: ClientConfig) -> Result<Self, TimetableError> {
        let base_url = Url::parse(&config.base_url)?;
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(Duration::from_secs(10))
            .timeout(config.timeout)
            .build()
            .map_err(|e| TimetableError::Fetch {
                message: format!("Failed to build HTTP client: {}", e),
            })?;
        Ok(Self { client, base_url })
    }

    /// Submits the lookup form for one request identity and returns the raw
    /// page body. Transport failures and non-success statuses surface as
    /// [`TimetableError::Fetch`]; nothing is retried here.
    pub async fn fetch(&self, request: &TimetableRequest) -> Result<String, TimetableError> {
        let fields = request.form_fields();
        info!(url = %self.base_url, request = %request, "submitting timetable form");

        let started = Instant::now();
        let response = self
            .client
            .post(self.base_url.clone())
            .form(&fields)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TimetableError::Fetch {
                message: format!("server answered with status {status}"),
            });
        }

        let body = response.text().await?;
        info!(
            status = %status,
            bytes = body.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "timetable page fetched"
        );
        Ok(body)
    }
}
