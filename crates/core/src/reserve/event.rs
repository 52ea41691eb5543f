//! One-shot events for the reservation screen.

use crate::model::{ReservationTicket, ReservedTicket};

/// A one-shot signal for the UI layer.
///
/// Events are consumed by navigation and toasts, not by re-rendered screen
/// regions. Delivery is at most once and never replayed to a later
/// observer.
#[derive(Debug, Clone, PartialEq)]
pub enum ReserveEvent {
    /// Hand off from a listing screen to the reservation screen.
    ShowTicketReserve { festival_id: i64 },

    /// Present the ticket types of a stage, already in canonical order.
    ShowTicketTypes { tickets: Vec<ReservationTicket> },

    /// A reservation was confirmed.
    ReserveTicketSuccess { ticket: ReservedTicket },

    /// A reservation attempt failed.
    ReserveTicketFailed,

    /// The user must sign in before inspecting ticket types.
    ShowSignIn,

    /// Ticket sales for the requested stage have not opened yet.
    TicketSaleNotOpen,
}
