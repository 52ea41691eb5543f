//! Reservation orchestration.
//!
//! The orchestrator sequences the asynchronous loads behind the ticket
//! reservation screen and maps every outcome onto two observable channels:
//! - a latest-value **state** channel (late subscribers see the current
//!   value immediately), and
//! - a one-shot **event** channel (no history, at-most-once delivery to
//!   whoever currently holds the receiver).

mod event;
mod orchestrator;
mod state;

pub use event::ReserveEvent;
pub use orchestrator::ReserveOrchestrator;
pub use state::{FestivalSummary, ReserveUiState};
