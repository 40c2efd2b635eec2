//! Fire-and-forget analytics capture to PostHog.
//!
//! Handlers push records onto an unbounded queue through [`AnalyticsClient`] and return
//! immediately. A single [`AnalyticsWorker`] task posts them one by one to the capture
//! endpoint. Delivery failures are logged and the record is dropped.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use url::Url;

use crate::error::AppError;
use crate::model::analytics::{AnalyticsEvent, AnalyticsRecord};

/// Body of a PostHog `/capture/` request.
#[derive(Serialize)]
struct CapturePayload<'a> {
    api_key: &'a str,
    event: &'static str,
    distinct_id: &'a str,
    properties: &'a Map<String, Value>,
    timestamp: DateTime<Utc>,
}

/// Cheap, cloneable handle used by event handlers to emit records.
#[derive(Clone)]
pub struct AnalyticsClient {
    tx: UnboundedSender<AnalyticsRecord>,
}

impl AnalyticsClient {
    /// Creates the client and the worker that delivers its records.
    ///
    /// # Arguments
    /// - `http` - Shared reqwest client
    /// - `host` - PostHog host, e.g. `https://app.posthog.com`
    /// - `api_key` - PostHog project API key
    ///
    /// # Returns
    /// - `Ok((AnalyticsClient, AnalyticsWorker))` - Worker must be spawned to deliver records
    /// - `Err(AppError::UrlErr)` - The host is not a valid URL
    pub fn new(
        http: reqwest::Client,
        host: &str,
        api_key: String,
    ) -> Result<(Self, AnalyticsWorker), AppError> {
        let endpoint = capture_endpoint(host)?;
        let (tx, rx) = mpsc::unbounded_channel();

        let worker = AnalyticsWorker {
            http,
            endpoint,
            api_key,
            rx,
        };

        Ok((Self { tx }, worker))
    }

    /// Client whose records are kept in memory for inspection.
    #[cfg(test)]
    pub fn in_memory() -> (Self, UnboundedReceiver<AnalyticsRecord>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Queues a record. Never blocks and never fails the caller.
    pub fn capture(&self, event: AnalyticsEvent, distinct_id: impl ToString, properties: Value) {
        let record = AnalyticsRecord::new(event, distinct_id, properties);

        if self.tx.send(record).is_err() {
            tracing::debug!(
                "Analytics worker stopped, dropping {} record",
                event.as_str()
            );
        }
    }
}

/// Delivers queued records to PostHog.
pub struct AnalyticsWorker {
    http: reqwest::Client,
    endpoint: Url,
    api_key: String,
    rx: UnboundedReceiver<AnalyticsRecord>,
}

impl AnalyticsWorker {
    /// Delivers records until every [`AnalyticsClient`] has been dropped and the queue is
    /// empty.
    pub async fn run(mut self) {
        let mut delivered = 0u64;

        while let Some(record) = self.rx.recv().await {
            match self.send(&record).await {
                Ok(()) => delivered += 1,
                Err(e) => {
                    tracing::warn!("Failed to capture {} event: {}", record.event.as_str(), e)
                }
            }
        }

        tracing::info!("Analytics worker stopped after {} deliveries", delivered);
    }

    async fn send(&self, record: &AnalyticsRecord) -> Result<(), AppError> {
        self.http
            .post(self.endpoint.clone())
            .json(&payload(&self.api_key, record))
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}

fn payload<'a>(api_key: &'a str, record: &'a AnalyticsRecord) -> CapturePayload<'a> {
    CapturePayload {
        api_key,
        event: record.event.as_str(),
        distinct_id: &record.distinct_id,
        properties: &record.properties,
        timestamp: record.timestamp,
    }
}

/// Resolves `{host}/capture/`, tolerating a host with or without a trailing slash.
fn capture_endpoint(host: &str) -> Result<Url, AppError> {
    let base = Url::parse(&format!("{}/", host.trim_end_matches('/')))?;
    Ok(base.join("capture/")?)
}
