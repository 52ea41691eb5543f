//! Mock ticket-type gateway for testing.

use async_trait::async_trait;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::gateway::{GatewayError, TicketTypeGateway};
use crate::model::ReservationTickets;

/// Mock implementation of [`TicketTypeGateway`].
#[derive(Debug)]
pub struct MockTicketTypeGateway {
    result: RwLock<Result<ReservationTickets, GatewayError>>,
    delay: RwLock<Option<Duration>>,
    calls: RwLock<Vec<i64>>,
}

impl Default for MockTicketTypeGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTicketTypeGateway {
    pub fn new() -> Self {
        Self {
            result: RwLock::new(Err(GatewayError::NotFound(
                "ticket types not scripted".to_string(),
            ))),
            delay: RwLock::new(None),
            calls: RwLock::new(Vec::new()),
        }
    }

    /// Set the result returned by subsequent calls.
    pub async fn set_result(&self, result: Result<ReservationTickets, GatewayError>) {
        *self.result.write().await = result;
    }

    /// Add artificial latency to every subsequent call.
    pub async fn set_delay(&self, delay: Duration) {
        *self.delay.write().await = Some(delay);
    }

    /// Stage ids requested so far, in call order.
    pub async fn recorded_calls(&self) -> Vec<i64> {
        self.calls.read().await.clone()
    }

    /// Number of calls performed.
    pub async fn call_count(&self) -> usize {
        self.calls.read().await.len()
    }
}

#[async_trait]
impl TicketTypeGateway for MockTicketTypeGateway {
    async fn ticket_types(&self, stage_id: i64) -> Result<ReservationTickets, GatewayError> {
        self.calls.write().await.push(stage_id);

        let delay = *self.delay.read().await;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        self.result.read().await.clone()
    }
}
