//! Core reservation data types.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Category of a reservable ticket.
///
/// The declaration order here is the canonical display order: sorting a
/// ticket collection by type must always put `Student` before `Visitor`,
/// independent of insertion order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TicketType {
    Student,
    Visitor,
}

impl TicketType {
    /// Fixed sort priority, total over all variants.
    pub const fn priority(self) -> u8 {
        match self {
            TicketType::Student => 0,
            TicketType::Visitor => 1,
        }
    }
}

/// One reservable ticket type within a stage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReservationTicket {
    /// Stage this ticket belongs to.
    pub stage_id: i64,
    /// Ticket category.
    pub ticket_type: TicketType,
    /// Remaining reservable count.
    pub remaining_amount: u32,
    /// Price in the festival's currency unit.
    pub price: u32,
}

/// The ticket types offered for a stage.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ReservationTickets {
    pub tickets: Vec<ReservationTicket>,
}

impl ReservationTickets {
    pub fn new(tickets: Vec<ReservationTicket>) -> Self {
        Self { tickets }
    }

    /// Tickets in the canonical `TicketType` order.
    ///
    /// The sort is stable: tickets sharing a type keep their relative
    /// insertion order.
    pub fn sorted_by_ticket_type(&self) -> Vec<ReservationTicket> {
        let mut sorted = self.tickets.clone();
        sorted.sort_by_key(|t| t.ticket_type.priority());
        sorted
    }
}

/// One performance/session within a festival, with its own sale window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReservationStage {
    pub id: i64,
    /// Performer line-up text for display.
    pub line_up: String,
    pub reservation_tickets: ReservationTickets,
    /// When the performance starts, as a naive UTC timestamp.
    pub start_time: NaiveDateTime,
    /// When ticket sales open for this stage, as a naive UTC timestamp.
    /// The sale-window gate compares this against the current UTC time.
    pub ticket_open_time: NaiveDateTime,
}

/// Snapshot of one festival's reservable content.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Reservation {
    pub id: i64,
    pub name: String,
    pub reservation_stages: Vec<ReservationStage>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Thumbnail image reference (URL).
    pub thumbnail: String,
}

/// A confirmed reservation, produced only by a successful submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReservedTicket {
    pub id: i64,
    /// Entry time assigned to the reserved ticket.
    pub entry_time: NaiveDateTime,
    /// Assigned sequence number within the stage.
    pub number: i32,
}
