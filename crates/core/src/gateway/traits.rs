use async_trait::async_trait;

use super::error::GatewayError;
use crate::model::{Reservation, ReservationTickets, ReservedTicket};

/// Loads the reservable detail of a festival.
#[async_trait]
pub trait FestivalGateway: Send + Sync {
    /// Fetch the reservation snapshot for a festival.
    ///
    /// Invoked at most once per triggering call; latency-bearing.
    async fn festival_detail(&self, festival_id: i64) -> Result<Reservation, GatewayError>;
}

/// Loads the ticket types offered for a stage.
#[async_trait]
pub trait TicketTypeGateway: Send + Sync {
    async fn ticket_types(&self, stage_id: i64) -> Result<ReservationTickets, GatewayError>;
}

/// Submits a ticket reservation.
#[async_trait]
pub trait ReservationGateway: Send + Sync {
    async fn reserve(&self, ticket_id: i64) -> Result<ReservedTicket, GatewayError>;
}

/// Answers whether the current session is signed in.
///
/// Must be cheap and safe to call repeatedly; token persistence lives
/// behind this boundary.
pub trait AuthGateway: Send + Sync {
    fn is_signed(&self) -> bool;
}
