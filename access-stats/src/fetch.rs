use std::time::Duration;

use reqwest::Client;
use tracing::{info, warn};
use tryhard::{RetryPolicy, retry_fn};

const INITIAL_RETRY_DELAY: Duration = Duration::from_millis(100);
const MAX_RETRY_DELAY: Duration = Duration::from_secs(5);

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("error fetching log file: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("failed to download log file. Status code: {0}")]
    Status(u16),

    #[error("error reading response body: {0}")]
    Body(#[source] reqwest::Error),
}

impl FetchError {
    /// Connection and body read failures may go away on another attempt. An
    /// error status from the server will not.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Body(_))
    }
}

/// Downloads the whole log body. Any non-2xx status is a failure.
pub async fn fetch_log(client: &Client, url: &str) -> Result<String, FetchError> {
    info!("Downloading log file from: {url}");
    let response = client
        .get(url)
        .send()
        .await
        .map_err(FetchError::Transport)?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    response.text().await.map_err(FetchError::Body)
}

/// Runs [`fetch_log`] up to `retries + 1` times, backing off exponentially
/// between transient failures.
pub async fn fetch_log_with_retries(
    client: &Client,
    url: &str,
    retries: u32,
) -> Result<String, FetchError> {
    retry_fn(|| fetch_log(client, url))
        .retries(retries)
        .custom_backoff(retry_policy)
        .await
}

fn retry_policy(attempt: u32, error: &FetchError) -> RetryPolicy {
    if !error.is_transient() {
        return RetryPolicy::Break;
    }
    let delay = backoff_delay(attempt);
    warn!(attempt, error = %error, ?delay, "retrying log download");
    RetryPolicy::Delay(delay)
}

// `attempt` counts failures so far, starting at 1.
fn backoff_delay(attempt: u32) -> Duration {
    let factor = 2u32.saturating_pow(attempt.saturating_sub(1));
    INITIAL_RETRY_DELAY
        .saturating_mul(factor)
        .min(MAX_RETRY_DELAY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use asserting::prelude::*;

    #[test]
    fn error_status_is_not_retried() {
        for code in [404, 403, 503] {
            let error = FetchError::Status(code);
            assert_that!(error.is_transient()).is_false();
            assert_that!(matches!(retry_policy(1, &error), RetryPolicy::Break)).is_true();
        }
    }

    #[test]
    fn backoff_doubles_up_to_the_cap() {
        assert_that!(backoff_delay(1)).is_equal_to(Duration::from_millis(100));
        assert_that!(backoff_delay(2)).is_equal_to(Duration::from_millis(200));
        assert_that!(backoff_delay(4)).is_equal_to(Duration::from_millis(800));
        assert_that!(backoff_delay(7)).is_equal_to(MAX_RETRY_DELAY);
        assert_that!(backoff_delay(u32::MAX)).is_equal_to(MAX_RETRY_DELAY);
    }
}
