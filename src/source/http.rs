use tracing::debug;

use crate::error::ChartResult;

use super::{PaymentRecord, parse_payment_records};

/// HTTP client abstraction so data fetching can be swapped out in tests.
pub trait HttpClient {
    /// Performs a GET request and returns the response body.
    fn get(&self, url: &str) -> ChartResult<String>;
}

/// Fetches and parses a JSON array of payment records.
pub fn fetch_payment_records(
    client: &impl HttpClient,
    url: &str,
) -> ChartResult<Vec<PaymentRecord>> {
    debug!(url, "fetching payment records");
    let body = client.get(url)?;
    parse_payment_records(&body)
}

#[cfg(feature = "fetch")]
pub use reqwest_client::ReqwestClient;

#[cfg(feature = "fetch")]
mod reqwest_client {
    use std::time::Duration;

    use crate::error::{ChartError, ChartResult};

    use super::HttpClient;

    const REQUEST_TIMEOUT_SECS: u64 = 30;

    /// Blocking HTTP client using reqwest.
    #[derive(Debug, Default)]
    pub struct ReqwestClient;

    impl HttpClient for ReqwestClient {
        fn get(&self, url: &str) -> ChartResult<String> {
            let fetch_error = |message: String| ChartError::Fetch {
                url: url.to_owned(),
                message,
            };

            let client = reqwest::blocking::Client::builder()
                .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .map_err(|e| fetch_error(format!("failed to create HTTP client: {e}")))?;

            let response = client.get(url).send().map_err(|e| {
                if e.is_timeout() {
                    fetch_error("request timed out".to_owned())
                } else if e.is_connect() {
                    fetch_error("connection failed".to_owned())
                } else {
                    fetch_error(e.to_string())
                }
            })?;

            let status = response.status();
            if !status.is_success() {
                return Err(fetch_error(format!("HTTP {status}")));
            }

            response
                .text()
                .map_err(|e| fetch_error(format!("failed to read response body: {e}")))
        }
    }
}
