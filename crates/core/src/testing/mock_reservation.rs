//! Mock reservation-submission gateway for testing.

use async_trait::async_trait;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::gateway::{GatewayError, ReservationGateway};
use crate::model::ReservedTicket;

/// Mock implementation of [`ReservationGateway`].
#[derive(Debug)]
pub struct MockReservationGateway {
    result: RwLock<Result<ReservedTicket, GatewayError>>,
    delay: RwLock<Option<Duration>>,
    calls: RwLock<Vec<i64>>,
}

impl Default for MockReservationGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl MockReservationGateway {
    pub fn new() -> Self {
        Self {
            result: RwLock::new(Err(GatewayError::NotFound(
                "reservation not scripted".to_string(),
            ))),
            delay: RwLock::new(None),
            calls: RwLock::new(Vec::new()),
        }
    }

    /// Set the result returned by subsequent calls.
    pub async fn set_result(&self, result: Result<ReservedTicket, GatewayError>) {
        *self.result.write().await = result;
    }

    /// Add artificial latency to every subsequent call.
    pub async fn set_delay(&self, delay: Duration) {
        *self.delay.write().await = Some(delay);
    }

    /// Ticket ids submitted so far, in call order.
    pub async fn recorded_calls(&self) -> Vec<i64> {
        self.calls.read().await.clone()
    }

    /// Number of calls performed.
    pub async fn call_count(&self) -> usize {
        self.calls.read().await.len()
    }
}

#[async_trait]
impl ReservationGateway for MockReservationGateway {
    async fn reserve(&self, ticket_id: i64) -> Result<ReservedTicket, GatewayError> {
        self.calls.write().await.push(ticket_id);

        let delay = *self.delay.read().await;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        self.result.read().await.clone()
    }
}
