//! Generic HTTP client tools
//!
//! Provides the reusable request-processing flow shared by solver
//! implementations: send one request, log it, classify failures, read the
//! body. Each solver keeps full control over how it builds the
//! `RequestBuilder` (URL, headers, body encoding).
//!
//! A failed request is a failed operation; there are no retries here. The
//! host decides whether to attempt the challenge again.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::SolverError;

/// Cap on response-body fragments included in log output, so validation
/// tokens and account details echoed back by the API are not dumped in full.
const LOG_BODY_LIMIT: usize = 256;

/// Truncate a response body for safe logging.
fn truncate_for_log(s: &str) -> String {
    if s.len() <= LOG_BODY_LIMIT {
        return s.to_string();
    }
    let mut end = LOG_BODY_LIMIT;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}... [truncated, total {} bytes]", &s[..end], s.len())
}

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs one HTTP request and returns the response body.
    ///
    /// Any non-2xx status is a transport failure, distinct from the API's
    /// own semantic failure signalled inside a 2xx body.
    ///
    /// # Arguments
    /// * `request_builder` - configured request constructor (URL, headers, body)
    /// * `provider_name` - solver name (for logging and error context)
    /// * `method_name` - request method name (such as "POST", used for logs)
    /// * `url_or_action` - URL or action name (for logging)
    ///
    /// # Returns
    /// * `Ok(response_text)` - body of a 2xx response
    /// * `Err(SolverError::Timeout)` - the request timed out
    /// * `Err(SolverError::NetworkError)` - connection-level failure
    /// * `Err(SolverError::HttpError)` - non-2xx status
    pub async fn execute_request(
        request_builder: RequestBuilder,
        provider_name: &str,
        method_name: &str,
        url_or_action: &str,
    ) -> Result<String, SolverError> {
        log::debug!("[{provider_name}] {method_name} {url_or_action}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                SolverError::Timeout {
                    provider: provider_name.to_string(),
                    detail: e.to_string(),
                }
            } else {
                SolverError::NetworkError {
                    provider: provider_name.to_string(),
                    detail: e.to_string(),
                }
            }
        })?;

        let status = response.status();
        log::debug!("[{provider_name}] Response Status: {status}");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::warn!(
                "[{provider_name}] HTTP {status}: {}",
                truncate_for_log(&body)
            );
            return Err(SolverError::HttpError {
                provider: provider_name.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| SolverError::NetworkError {
                provider: provider_name.to_string(),
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!(
            "[{provider_name}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok(response_text)
    }

    /// Parse a JSON response body.
    ///
    /// # Arguments
    /// * `response_text` - JSON text
    /// * `provider_name` - solver name (used for error context)
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(SolverError::ParseError)` - undecodable body
    pub fn parse_json<T>(response_text: &str, provider_name: &str) -> Result<T, SolverError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{provider_name}] JSON parse failed: {e}");
            log::error!(
                "[{provider_name}] Raw response: {}",
                truncate_for_log(response_text)
            );
            SolverError::ParseError {
                provider: provider_name.to_string(),
                detail: e.to_string(),
            }
        })
    }
}
