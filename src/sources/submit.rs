//! HTTP submission of the field configuration.

use std::time::Duration;

use crate::logic::FieldConfig;

/// A submit the event loop hands to the background worker.
#[derive(Clone, Debug)]
pub struct SubmitRequest {
    /// Payload to post.
    pub config: FieldConfig,
    /// Target URL.
    pub endpoint: String,
    /// When `true`, log the payload and report success without sending.
    pub dry_run: bool,
    /// Per-request timeout.
    pub timeout: Duration,
}

/// Result of a submit as reported back to the event loop.
pub type SubmitOutcome = Result<SubmitReceipt, String>;

/// What a successful submit reports back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitReceipt {
    /// HTTP status code; `None` for a dry run.
    pub status: Option<u16>,
    /// Endpoint the payload went to.
    pub endpoint: String,
}

/// What: Build the HTTP client used for submissions.
///
/// Output:
/// - A `reqwest::Client`, or an error message if the TLS backend cannot start.
pub fn build_client() -> Result<reqwest::Client, String> {
    reqwest::Client::builder()
        .user_agent(concat!("fieldwright/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| format!("Failed to create HTTP client: {e}"))
}

/// What: POST a field configuration as JSON.
///
/// Inputs:
/// - `client`: Reqwest HTTP client.
/// - `endpoint`: Target URL.
/// - `config`: Payload to serialize.
/// - `timeout`: Per-request timeout.
///
/// Output:
/// - The response status on 2xx, or an error message on network failure or
///   non-success status.
///
/// Details:
/// - The body is the bare `FieldConfig` object; it is not wrapped under a
///   `"json"` key.
pub async fn post_field_config(
    client: &reqwest::Client,
    endpoint: &str,
    config: &FieldConfig,
    timeout: Duration,
) -> Result<reqwest::StatusCode, String> {
    tracing::debug!(endpoint = %endpoint, choices = config.choices.len(), "[Submit] Posting field configuration");
    let response = client
        .post(endpoint)
        .timeout(timeout)
        .json(config)
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;

    let status = response.status();
    if !status.is_success() {
        return Err(format!("Submit failed with status: {status}"));
    }
    Ok(status)
}

/// What: Carry out one submit request.
///
/// Inputs:
/// - `client`: Reqwest HTTP client.
/// - `req`: The request to carry out.
///
/// Output:
/// - A [`SubmitOutcome`] for the event loop.
///
/// Details:
/// - Dry runs log the serialized payload at `info` and never touch the network.
pub async fn submit(client: &reqwest::Client, req: SubmitRequest) -> SubmitOutcome {
    if req.dry_run {
        let body = serde_json::to_string(&req.config)
            .map_err(|e| format!("Failed to serialize payload: {e}"))?;
        tracing::info!(endpoint = %req.endpoint, payload = %body, "[Submit] Dry run: payload not sent");
        return Ok(SubmitReceipt {
            status: None,
            endpoint: req.endpoint,
        });
    }
    match post_field_config(client, &req.endpoint, &req.config, req.timeout).await {
        Ok(status) => {
            tracing::info!(endpoint = %req.endpoint, status = %status, "[Submit] Field configuration saved");
            Ok(SubmitReceipt {
                status: Some(status.as_u16()),
                endpoint: req.endpoint,
            })
        }
        Err(msg) => {
            tracing::warn!(endpoint = %req.endpoint, error = %msg, "[Submit] Submission failed");
            Err(msg)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// What: Minimal payload for submit tests.
    fn config() -> FieldConfig {
        FieldConfig {
            label: "Colors".to_string(),
            required: false,
            choices: vec!["Red".to_string()],
            display_alpha: false,
            default: "Red".to_string(),
        }
    }

    #[tokio::test]
    /// What: A dry run succeeds without any network access.
    ///
    /// Inputs:
    /// - Dry-run request to an unroutable endpoint
    ///
    /// Output:
    /// - `Ok` receipt with no status
    async fn dry_run_never_sends() {
        let client = build_client().expect("client");
        let req = SubmitRequest {
            config: config(),
            endpoint: "http://invalid.invalid/never".to_string(),
            dry_run: true,
            timeout: Duration::from_millis(10),
        };
        let receipt = submit(&client, req).await.expect("dry run succeeds");
        assert_eq!(receipt.status, None);
        assert_eq!(receipt.endpoint, "http://invalid.invalid/never");
    }
}
