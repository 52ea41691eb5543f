//! Testing utilities and mock gateways.
//!
//! Mock implementations of every collaborator port, allowing the
//! orchestrator to be exercised without real infrastructure.
//!
//! # Example
//!
//! ```rust,ignore
//! use stagepass_core::testing::{fixtures, MockFestivalGateway};
//!
//! let festival = MockFestivalGateway::new();
//! festival.set_result(Ok(fixtures::reservation())).await;
//!
//! // Use as Arc<dyn FestivalGateway> in a ReserveOrchestrator...
//! ```

mod mock_auth;
mod mock_festival;
mod mock_reservation;
mod mock_ticket_types;

pub use mock_auth::MockAuthGateway;
pub use mock_festival::MockFestivalGateway;
pub use mock_reservation::MockReservationGateway;
pub use mock_ticket_types::MockTicketTypeGateway;

use std::sync::{Arc, Mutex};

use crate::gateway::Analytics;

/// Analytics sink that records every event for assertions.
#[derive(Debug, Default)]
pub struct MockAnalytics {
    events: Mutex<Vec<(String, i64)>>,
}

impl MockAnalytics {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Every `(name, festival_id)` pair logged so far.
    pub fn recorded_events(&self) -> Vec<(String, i64)> {
        self.events
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }
}

impl Analytics for MockAnalytics {
    fn log_event(&self, name: &str, festival_id: i64) {
        self.events
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push((name.to_string(), festival_id));
    }
}

/// Test fixtures mirroring a small festival with one stage layout.
pub mod fixtures {
    use chrono::{NaiveDate, NaiveDateTime};

    use crate::model::{
        Reservation, ReservationStage, ReservationTicket, ReservationTickets, ReservedTicket,
        TicketType,
    };

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn datetime(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(h, 0, 0).expect("valid time")
    }

    /// Ticket types for stage 1: a student and a visitor ticket.
    pub fn reservation_tickets() -> ReservationTickets {
        ReservationTickets::new(vec![
            ReservationTicket {
                stage_id: 1,
                ticket_type: TicketType::Student,
                remaining_amount: 219,
                price: 500,
            },
            ReservationTicket {
                stage_id: 1,
                ticket_type: TicketType::Visitor,
                remaining_amount: 212,
                price: 300,
            },
        ])
    }

    /// A single stage with an already-open sale window.
    pub fn reservation_stage() -> ReservationStage {
        ReservationStage {
            id: 1,
            line_up: "르세라핌, 아이브, 뉴진스".to_string(),
            reservation_tickets: reservation_tickets(),
            start_time: datetime(2023, 8, 1, 18),
            ticket_open_time: datetime(2023, 7, 1, 12),
        }
    }

    /// A festival with five identical stages.
    pub fn reservation() -> Reservation {
        Reservation {
            id: 1,
            name: "테코대학교".to_string(),
            reservation_stages: vec![reservation_stage(); 5],
            start_date: date(2023, 8, 1),
            end_date: date(2023, 8, 3),
            thumbnail: "https://search2.kakaocdn.net/argon/656x0_80_wr/8vLywd3V06c".to_string(),
        }
    }

    /// A confirmed reservation.
    pub fn reserved_ticket() -> ReservedTicket {
        ReservedTicket {
            id: 1,
            entry_time: datetime(2023, 8, 1, 17),
            number: 1,
        }
    }
}
