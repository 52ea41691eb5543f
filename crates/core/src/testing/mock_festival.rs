//! Mock festival-detail gateway for testing.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::gateway::{FestivalGateway, GatewayError};
use crate::model::Reservation;

/// One scripted response: optional artificial latency plus the result.
#[derive(Debug, Clone)]
struct ScriptedResponse {
    delay: Option<Duration>,
    result: Result<Reservation, GatewayError>,
}

/// Mock implementation of [`FestivalGateway`].
///
/// Provides controllable behavior for testing:
/// - a default result for every call, with optional artificial latency
/// - a queue of per-call scripted responses (consumed first, in order),
///   which makes superseded-call races reproducible
/// - recorded call arguments for assertions
#[derive(Debug)]
pub struct MockFestivalGateway {
    result: RwLock<Result<Reservation, GatewayError>>,
    delay: RwLock<Option<Duration>>,
    scripted: RwLock<VecDeque<ScriptedResponse>>,
    calls: RwLock<Vec<i64>>,
}

impl Default for MockFestivalGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl MockFestivalGateway {
    pub fn new() -> Self {
        Self {
            result: RwLock::new(Err(GatewayError::NotFound(
                "festival detail not scripted".to_string(),
            ))),
            delay: RwLock::new(None),
            scripted: RwLock::new(VecDeque::new()),
            calls: RwLock::new(Vec::new()),
        }
    }

    /// Set the result returned by subsequent calls.
    pub async fn set_result(&self, result: Result<Reservation, GatewayError>) {
        *self.result.write().await = result;
    }

    /// Add artificial latency to every subsequent call.
    pub async fn set_delay(&self, delay: Duration) {
        *self.delay.write().await = Some(delay);
    }

    /// Queue a response for the next call, ahead of the default result.
    pub async fn enqueue(&self, result: Result<Reservation, GatewayError>) {
        self.enqueue_delayed(None, result).await;
    }

    /// Queue a delayed response for the next call.
    pub async fn enqueue_delayed(
        &self,
        delay: Option<Duration>,
        result: Result<Reservation, GatewayError>,
    ) {
        self.scripted
            .write()
            .await
            .push_back(ScriptedResponse { delay, result });
    }

    /// Festival ids requested so far, in call order.
    pub async fn recorded_calls(&self) -> Vec<i64> {
        self.calls.read().await.clone()
    }

    /// Number of calls performed.
    pub async fn call_count(&self) -> usize {
        self.calls.read().await.len()
    }
}

#[async_trait]
impl FestivalGateway for MockFestivalGateway {
    async fn festival_detail(&self, festival_id: i64) -> Result<Reservation, GatewayError> {
        self.calls.write().await.push(festival_id);

        let scripted = self.scripted.write().await.pop_front();
        if let Some(response) = scripted {
            if let Some(delay) = response.delay {
                tokio::time::sleep(delay).await;
            }
            return response.result;
        }

        let delay = *self.delay.read().await;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        self.result.read().await.clone()
    }
}
