// src/submit.rs

//! The submit operation: one POST, a classified outcome.
//!
//! `FormSubmitter` owns the HTTP client and the destination URL. Each call
//! encodes the form, issues a single POST, and resolves to a result value.
//! Nothing escapes the boundary: transport faults and non-2xx responses
//! both collapse into the result, never into a propagated error.

use crate::form::FormData;

use anyhow::{Context, Result};
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use std::time::Duration;
use url::Url;

/// MIME type sent with every submission body.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// The coarse two-valued contract: a submission either lands on the
/// endpoint with a 2xx status, or it does not. Callers that need to know
/// *why* use [`FormSubmitter::submit_detailed`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionResult {
    Success,
    Error,
}

/// Detailed outcome of a submission attempt.
///
/// `HttpError` means the request completed but the endpoint answered with
/// a non-2xx status. `TransportError` means the request never completed
/// (connect failure, DNS failure, timeout, malformed response).
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SubmitOutcome {
    Success { status: u16 },
    HttpError { status: u16 },
    TransportError { cause: String },
}

impl SubmitOutcome {
    /// Collapse to the two-valued contract.
    pub fn collapse(&self) -> SubmissionResult {
        match self {
            SubmitOutcome::Success { .. } => SubmissionResult::Success,
            SubmitOutcome::HttpError { .. } | SubmitOutcome::TransportError { .. } => {
                SubmissionResult::Error
            }
        }
    }
}

/// Submits url-encoded form data to a fixed endpoint.
///
/// The endpoint is injected at construction, so tests and local
/// development can point at a capture server instead of the real
/// destination. Holds no state across calls; safe to share between tasks.
#[derive(Debug, Clone)]
pub struct FormSubmitter {
    client: reqwest::Client,
    endpoint: Url,
    timeout: Option<Duration>,
}

impl FormSubmitter {
    pub fn new(endpoint: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
            timeout: None,
        }
    }

    /// Build a submitter from a raw endpoint string, validating the URL
    /// up front so submission itself has no parse failure mode.
    pub fn from_endpoint(endpoint: &str) -> Result<Self> {
        let url = Url::parse(endpoint)
            .with_context(|| format!("Invalid endpoint URL '{}'", endpoint))?;
        Ok(Self::new(url))
    }

    /// Apply a per-request timeout. Without one, a submission runs until
    /// the transport itself resolves or fails.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Submit the form and report the two-valued outcome.
    ///
    /// Exactly one outbound POST per call. Always resolves to a value;
    /// never panics and never returns an error type.
    pub async fn submit(&self, form: &FormData) -> SubmissionResult {
        self.submit_detailed(form).await.collapse()
    }

    /// Submit the form and report the tagged outcome.
    ///
    /// Only the response status is inspected; the body and headers of the
    /// response are discarded.
    pub async fn submit_detailed(&self, form: &FormData) -> SubmitOutcome {
        let body = form.encode();

        let mut request = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(body);

        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        match request.send().await {
            Ok(response) => {
                let status = response.status();
                if status.is_success() {
                    SubmitOutcome::Success {
                        status: status.as_u16(),
                    }
                } else {
                    SubmitOutcome::HttpError {
                        status: status.as_u16(),
                    }
                }
            }
            Err(e) => SubmitOutcome::TransportError {
                cause: e.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcomes_collapse_to_the_two_valued_contract() {
        assert_eq!(
            SubmitOutcome::Success { status: 204 }.collapse(),
            SubmissionResult::Success
        );
        assert_eq!(
            SubmitOutcome::HttpError { status: 500 }.collapse(),
            SubmissionResult::Error
        );
        assert_eq!(
            SubmitOutcome::TransportError {
                cause: "connection refused".into()
            }
            .collapse(),
            SubmissionResult::Error
        );
    }

    #[test]
    fn invalid_endpoint_is_rejected_at_construction() {
        assert!(FormSubmitter::from_endpoint("not a url").is_err());
        assert!(FormSubmitter::from_endpoint("http://127.0.0.1:8787/").is_ok());
    }
}
