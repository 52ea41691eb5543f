pub mod config;
pub mod gateway;
pub mod model;
pub mod reserve;
pub mod testing;

pub use config::{
    load_config, load_config_from_str, validate_config, AnalyticsConfig, Config, ConfigError,
    ReserveConfig,
};
pub use gateway::{
    create_analytics, Analytics, AuthGateway, FestivalGateway, GatewayError, ReservationGateway,
    TicketTypeGateway,
};
pub use model::{
    Reservation, ReservationStage, ReservationTicket, ReservationTickets, ReservedTicket,
    TicketType,
};
pub use reserve::{FestivalSummary, ReserveEvent, ReserveOrchestrator, ReserveUiState};
