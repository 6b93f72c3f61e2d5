//! e-solat HTTP client
//!
//! One request per attempt: GET for week/month/year, POST with a form body for
//! duration. Every failure (transport, status, body shape, API error status) is
//! retried by the configured [`RetryPolicy`].

use super::models::{parse_envelope, PrayerTimeEnvelope};
use crate::config::ApiConfig;
use crate::core::retry::RetryPolicy;
use crate::domain::{FetchError, FetchRequest, Result, WaktuError};
use reqwest::{Client, ClientBuilder};
use std::time::Duration;

/// Longest slice of an error body kept in [`FetchError::HttpStatus`]
const MAX_ERROR_BODY: usize = 200;

/// Client for the JAKIM e-solat `takwimsolat` endpoint
///
/// # Example
///
/// ```no_run
/// use waktusolat::adapters::esolat::EsolatClient;
/// use waktusolat::config::ApiConfig;
/// use waktusolat::domain::{FetchRequest, Period, ZoneCode};
///
/// # async fn example() -> waktusolat::domain::Result<()> {
/// let client = EsolatClient::new(&ApiConfig::default())?;
/// let request = FetchRequest::new(ZoneCode::new("SGR01").unwrap(), Period::Month, None, None)?;
/// let envelope = client.fetch(&request).await?;
/// println!("{} days", envelope.len());
/// # Ok(())
/// # }
/// ```
pub struct EsolatClient {
    /// Base URL, without the routing parameter
    base_url: String,

    /// Value of the `r` query parameter
    route: String,

    /// HTTP client with the per-attempt timeout applied
    client: Client,

    retry: RetryPolicy,
}

impl EsolatClient {
    /// Create a client from the API configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        Self::with_retry(config, RetryPolicy::from_config(&config.retry))
    }

    /// Create a client with an explicit retry policy
    pub fn with_retry(config: &ApiConfig, retry: RetryPolicy) -> Result<Self> {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| WaktuError::Configuration(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            base_url: config.base_url.clone(),
            route: config.route.clone(),
            client,
            retry,
        })
    }

    /// Fetch the schedule described by `request`, retrying on failure
    ///
    /// # Errors
    ///
    /// Returns the [`FetchError`] of the final attempt once all attempts fail.
    pub async fn fetch(&self, request: &FetchRequest) -> Result<PrayerTimeEnvelope> {
        let max_attempts = self.retry.max_attempts();

        self.retry
            .run(move |attempt| self.fetch_once(request, attempt, max_attempts))
            .await
            .map_err(WaktuError::from)
    }

    /// A single attempt, without retries
    async fn fetch_once(
        &self,
        request: &FetchRequest,
        attempt: u32,
        max_attempts: u32,
    ) -> std::result::Result<PrayerTimeEnvelope, FetchError> {
        crate::log_fetch_attempt!(attempt, max_attempts, request);

        let builder = match request.form_params() {
            Some(form) => self
                .client
                .post(&self.base_url)
                .query(&[("r", self.route.as_str())])
                .query(&request.query_params())
                .form(&form),
            None => self
                .client
                .get(&self.base_url)
                .query(&[("r", self.route.as_str())])
                .query(&request.query_params()),
        };

        let response = builder.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
                message: truncate(&body, MAX_ERROR_BODY),
            });
        }

        let body = response.text().await?;
        let envelope = parse_envelope(&body)?;

        tracing::debug!(
            days = envelope.len(),
            zone = envelope.zone.as_deref().unwrap_or(""),
            server_time = envelope.server_time.as_deref().unwrap_or(""),
            "Received prayer times"
        );

        Ok(envelope)
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    let mut out: String = text.trim().chars().take(max_chars).collect();
    if text.trim().chars().count() > max_chars {
        out.push('…');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = EsolatClient::new(&ApiConfig::default()).unwrap();
        assert_eq!(client.base_url, "https://www.e-solat.gov.my/index.php");
        assert_eq!(client.route, "esolatApi/takwimsolat");
        assert_eq!(client.retry.max_attempts(), 3);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("  short  ", 10), "short");
        assert_eq!(truncate("abcdef", 3), "abc…");
    }
}
