//! Collaborator ports consumed by the reservation orchestrator.
//!
//! Every port is a pure trait so that real network implementations and
//! scripted test doubles satisfy them identically. Failures are always
//! expressed as a [`GatewayError`] result; nothing past this boundary is
//! allowed to surface an uncategorized fault.

mod analytics;
mod error;
mod traits;

pub use analytics::{create_analytics, Analytics, NoopAnalytics, TracingAnalytics};
pub use error::GatewayError;
pub use traits::{AuthGateway, FestivalGateway, ReservationGateway, TicketTypeGateway};
