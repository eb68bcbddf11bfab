//! Remote classifier trait and implementations.
//!
//! - `HttpRemoteClassifier`: JSON POST to an inference endpoint
//! - `UnavailableRemote`: no endpoint configured, always errors

use std::time::Duration;

use futures::future::BoxFuture;
use lahja_core::{Error, Result};
use lahja_lexicon::{ClassificationResult, Language};
use reqwest::{Client, Url};
use tracing::debug;

use crate::types::{RemoteRequest, RemoteResponse};

/// A network-backed dialect classifier.
pub trait RemoteClassifier: Send + Sync {
    /// Classify `text`. Any error makes callers fall back to the lexical pipeline.
    fn classify<'a>(
        &'a self,
        text: &'a str,
        language: Language,
    ) -> BoxFuture<'a, Result<Vec<ClassificationResult>>>;

    /// Whether a call is worth attempting at all.
    fn is_available(&self) -> bool;

    /// Short name for logs and status output.
    fn name(&self) -> &'static str;
}

/// Placeholder used when no remote endpoint is configured.
pub struct UnavailableRemote;

impl RemoteClassifier for UnavailableRemote {
    fn classify<'a>(
        &'a self,
        _text: &'a str,
        _language: Language,
    ) -> BoxFuture<'a, Result<Vec<ClassificationResult>>> {
        Box::pin(async { Err(Error::Remote("no remote classifier configured".into())) })
    }

    fn is_available(&self) -> bool {
        false
    }

    fn name(&self) -> &'static str {
        "unavailable"
    }
}

/// Remote classifier reached over HTTP: POST `{text, language}`, expect `{results}`.
pub struct HttpRemoteClassifier {
    client: Client,
    endpoint: Url,
}

impl HttpRemoteClassifier {
    pub fn new(endpoint: &str, timeout_ms: u64) -> Result<Self> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| Error::Config(format!("invalid remote endpoint '{}': {}", endpoint, e)))?;
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| Error::Http(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn request(&self, text: &str, language: Language) -> Result<Vec<ClassificationResult>> {
        let body = RemoteRequest {
            text: text.to_string(),
            language,
        };

        debug!("Requesting remote classification from {}", self.endpoint);

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Http(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Remote(format!("API error {}: {}", status, body)));
        }

        let parsed: RemoteResponse = response
            .json()
            .await
            .map_err(|e| Error::Remote(format!("malformed response: {}", e)))?;

        validate_results(parsed.results)
    }
}

impl RemoteClassifier for HttpRemoteClassifier {
    fn classify<'a>(
        &'a self,
        text: &'a str,
        language: Language,
    ) -> BoxFuture<'a, Result<Vec<ClassificationResult>>> {
        Box::pin(self.request(text, language))
    }

    fn is_available(&self) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "http"
    }
}

/// Reject empty result lists and confidences outside [0, 1].
pub fn validate_results(results: Vec<ClassificationResult>) -> Result<Vec<ClassificationResult>> {
    if results.is_empty() {
        return Err(Error::Remote("remote returned no results".into()));
    }
    if let Some(bad) = results
        .iter()
        .find(|r| !(0.0..=1.0).contains(&r.confidence))
    {
        return Err(Error::Remote(format!(
            "confidence {} for '{}' out of range",
            bad.confidence, bad.dialect
        )));
    }
    Ok(results)
}
