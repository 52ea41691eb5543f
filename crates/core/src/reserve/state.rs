//! UI-observable state for the reservation screen.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::Reservation;

/// Display projection of a festival, carried by the success state.
///
/// Deliberately smaller than [`Reservation`]: the screen header only needs
/// identity, name, thumbnail and the date range.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FestivalSummary {
    pub id: i64,
    pub name: String,
    pub thumbnail: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl From<&Reservation> for FestivalSummary {
    fn from(reservation: &Reservation) -> Self {
        Self {
            id: reservation.id,
            name: reservation.name.clone(),
            thumbnail: reservation.thumbnail.clone(),
            start_date: reservation.start_date,
            end_date: reservation.end_date,
        }
    }
}

/// State of the reservation-loading flow.
///
/// Exactly one variant is active at any time; every trigger resolves to
/// one of the three.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ReserveUiState {
    #[default]
    Loading,
    Success(FestivalSummary),
    Error,
}

impl ReserveUiState {
    pub fn should_show_loading(&self) -> bool {
        matches!(self, ReserveUiState::Loading)
    }

    pub fn should_show_success(&self) -> bool {
        matches!(self, ReserveUiState::Success(_))
    }

    pub fn should_show_error(&self) -> bool {
        matches!(self, ReserveUiState::Error)
    }
}
