//! HTTP dispatch with bounded exponential backoff
//!
//! Server-side failures (5xx) and transport failures retry with doubling
//! delays until the policy is exhausted. Anything below 500, including
//! client errors, is the vendor's final word and returns immediately. A
//! final 5xx comes back as a response so the caller sees what the vendor
//! said; a final transport failure surfaces as an error.

use crate::error::{Error, Result};
use crate::metrics::INTEGRATION_RETRIES_TOTAL;
use crate::types::{HttpMethod, VendorRequest, VendorResponse};
use integration_core::RetryPolicy;
use reqwest::{Client, Method};
use std::time::Duration;
use tracing::warn;

/// Dispatches built vendor requests, applying the config's retry policy
pub struct HttpExecutor {
    client: Client,
}

impl HttpExecutor {
    /// New executor with a shared connection pool
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(crate::USER_AGENT)
            .build()
            .map_err(|e| Error::Connection(e.to_string()))?;
        Ok(Self { client })
    }

    /// Send the request, retrying per policy
    pub async fn execute(
        &self,
        request: &VendorRequest,
        operation: &str,
        timeout: Duration,
        policy: &RetryPolicy,
    ) -> Result<VendorResponse> {
        let mut attempts: u32 = 0;
        loop {
            attempts += 1;
            let failure = match self.attempt(request, operation, timeout).await {
                Ok(response) if response.status < 500 => return Ok(response),
                Ok(response) => {
                    if attempts > policy.max_retries {
                        warn!(
                            "Giving up on {} after {} attempts, returning {} to caller",
                            operation, attempts, response.status
                        );
                        return Ok(response);
                    }
                    format!("vendor returned {}", response.status)
                }
                Err(err) => {
                    if attempts > policy.max_retries {
                        return Err(match err {
                            e @ Error::Timeout { .. } => e,
                            other => Error::RetryExhausted {
                                attempts,
                                last_error: other.to_string(),
                            },
                        });
                    }
                    err.to_string()
                }
            };

            // Delay doubles per retry; the shift is capped to keep the math sane
            let delay = policy
                .base_backoff_ms
                .saturating_mul(1u64 << (attempts - 1).min(16));
            INTEGRATION_RETRIES_TOTAL.with_label_values(&[operation]).inc();
            warn!(
                "Attempt {} for {} failed ({}), retrying in {}ms",
                attempts, operation, failure, delay
            );
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
    }

    async fn attempt(
        &self,
        request: &VendorRequest,
        operation: &str,
        timeout: Duration,
    ) -> Result<VendorResponse> {
        let method = match request.method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Patch => Method::PATCH,
            HttpMethod::Delete => Method::DELETE,
        };

        let mut builder = self.client.request(method, &request.url).timeout(timeout);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = &request.body {
            builder = builder.body(serde_json::to_string(body)?);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                Error::Timeout {
                    ms: timeout.as_millis() as u64,
                    operation: operation.to_string(),
                }
            } else {
                Error::Http(e)
            }
        })?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(VendorResponse { status, body })
    }
}
