//! The reservation orchestrator.
//!
//! Single logical owner of the reservation screen's state: all collaborator
//! calls run on spawned tasks, but every state write and event emission goes
//! through the channels owned here. Trigger methods return immediately.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use chrono::{NaiveDateTime, Utc};
use tokio::sync::{broadcast, mpsc, watch};
use tracing::{debug, warn};

use crate::config::ReserveConfig;
use crate::gateway::{
    Analytics, AuthGateway, FestivalGateway, ReservationGateway, TicketTypeGateway,
};

use super::event::ReserveEvent;
use super::state::{FestivalSummary, ReserveUiState};

/// Orchestrates the ticket reservation flow for one screen/session.
pub struct ReserveOrchestrator {
    config: ReserveConfig,
    festival: Arc<dyn FestivalGateway>,
    ticket_types: Arc<dyn TicketTypeGateway>,
    reservation: Arc<dyn ReservationGateway>,
    auth: Arc<dyn AuthGateway>,
    analytics: Arc<dyn Analytics>,

    state_tx: watch::Sender<ReserveUiState>,
    event_tx: mpsc::Sender<ReserveEvent>,
    event_rx: Mutex<Option<mpsc::Receiver<ReserveEvent>>>,
    observer_attached: Arc<AtomicBool>,

    // Runtime state
    load_generation: Arc<AtomicU64>,
    running: Arc<AtomicBool>,
    shutdown_tx: broadcast::Sender<()>,
}

impl ReserveOrchestrator {
    /// Create a new orchestrator. The initial state is `Loading`.
    pub fn new(
        config: ReserveConfig,
        festival: Arc<dyn FestivalGateway>,
        ticket_types: Arc<dyn TicketTypeGateway>,
        reservation: Arc<dyn ReservationGateway>,
        auth: Arc<dyn AuthGateway>,
        analytics: Arc<dyn Analytics>,
    ) -> Self {
        let (state_tx, _) = watch::channel(ReserveUiState::Loading);
        let (event_tx, event_rx) = mpsc::channel(config.event_capacity.max(1));
        let (shutdown_tx, _) = broadcast::channel(1);

        Self {
            config,
            festival,
            ticket_types,
            reservation,
            auth,
            analytics,
            state_tx,
            event_tx,
            event_rx: Mutex::new(Some(event_rx)),
            observer_attached: Arc::new(AtomicBool::new(false)),
            load_generation: Arc::new(AtomicU64::new(0)),
            running: Arc::new(AtomicBool::new(true)),
            shutdown_tx,
        }
    }

    /// Subscribe to the state channel.
    ///
    /// Latest-value semantics: a late subscriber observes the current state
    /// immediately.
    pub fn state(&self) -> watch::Receiver<ReserveUiState> {
        self.state_tx.subscribe()
    }

    /// The current state value.
    pub fn current_state(&self) -> ReserveUiState {
        self.state_tx.borrow().clone()
    }

    /// Take the event receiver.
    ///
    /// There is at most one active event observer; the receiver can be taken
    /// only once. Events emitted before any observer attaches are dropped,
    /// never replayed; once attached, events are buffered up to the
    /// configured capacity and overflow is dropped rather than blocking a
    /// trigger.
    pub fn take_events(&self) -> Option<mpsc::Receiver<ReserveEvent>> {
        let receiver = self
            .event_rx
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .take();
        if receiver.is_some() {
            self.observer_attached.store(true, Ordering::SeqCst);
        }
        receiver
    }

    /// Load the reservation detail for a festival.
    ///
    /// Publishes `Loading` immediately, then `Success` or `Error` when the
    /// gateway resolves. A second call supersedes the first: completions are
    /// generation-tagged and only the latest generation is applied, so a
    /// stale response can never overwrite newer state. Ignored after
    /// shutdown.
    pub fn load_reservation(&self, festival_id: Option<i64>) {
        if !self.running.load(Ordering::SeqCst) {
            debug!("ignoring reservation load after shutdown");
            return;
        }
        let festival_id = festival_id.unwrap_or(self.config.default_festival_id);
        let generation = self.load_generation.fetch_add(1, Ordering::SeqCst) + 1;

        self.state_tx.send_replace(ReserveUiState::Loading);
        self.analytics.log_event("reservation_detail", festival_id);

        let festival = Arc::clone(&self.festival);
        let state_tx = self.state_tx.clone();
        let current_generation = Arc::clone(&self.load_generation);
        let running = Arc::clone(&self.running);
        let mut shutdown_rx = self.shutdown_tx.subscribe();

        tokio::spawn(async move {
            tokio::select! {
                _ = shutdown_rx.recv() => {
                    debug!(festival_id, "reservation load cancelled by shutdown");
                }
                result = festival.festival_detail(festival_id) => {
                    if !running.load(Ordering::SeqCst) {
                        return;
                    }
                    if current_generation.load(Ordering::SeqCst) != generation {
                        debug!(festival_id, generation, "stale reservation load dropped");
                        return;
                    }
                    match result {
                        Ok(reservation) => {
                            state_tx.send_replace(ReserveUiState::Success(
                                FestivalSummary::from(&reservation),
                            ));
                        }
                        Err(e) => {
                            warn!(festival_id, "failed to load reservation: {e}");
                            state_tx.send_replace(ReserveUiState::Error);
                        }
                    }
                }
            }
        });
    }

    /// Show the ticket types of a stage.
    ///
    /// Preconditions, in order: the stage's sale window must be open, and
    /// the session must be signed in. Either gate short-circuits with a
    /// one-shot event and without touching the network or the state.
    /// `ticket_open_time` is a naive UTC timestamp and is compared against
    /// the current UTC wall clock; callers in another timezone must convert
    /// before triggering.
    /// Otherwise the loaded tickets are sorted into canonical order and
    /// emitted as exactly one `ShowTicketTypes` event; a load failure sets
    /// the state to `Error` and emits nothing.
    pub fn show_ticket_types(&self, stage_id: i64, ticket_open_time: NaiveDateTime) {
        if !self.running.load(Ordering::SeqCst) {
            debug!(stage_id, "ignoring ticket type request after shutdown");
            return;
        }

        if Utc::now().naive_utc() < ticket_open_time {
            debug!(stage_id, "ticket sale not open yet");
            emit(
                &self.observer_attached,
                &self.event_tx,
                ReserveEvent::TicketSaleNotOpen,
            );
            return;
        }

        if !self.auth.is_signed() {
            debug!(stage_id, "sign-in required for ticket types");
            emit(
                &self.observer_attached,
                &self.event_tx,
                ReserveEvent::ShowSignIn,
            );
            return;
        }

        let ticket_types = Arc::clone(&self.ticket_types);
        let state_tx = self.state_tx.clone();
        let event_tx = self.event_tx.clone();
        let observer_attached = Arc::clone(&self.observer_attached);
        let running = Arc::clone(&self.running);
        let mut shutdown_rx = self.shutdown_tx.subscribe();

        tokio::spawn(async move {
            tokio::select! {
                _ = shutdown_rx.recv() => {
                    debug!(stage_id, "ticket type load cancelled by shutdown");
                }
                result = ticket_types.ticket_types(stage_id) => {
                    if !running.load(Ordering::SeqCst) {
                        return;
                    }
                    match result {
                        Ok(tickets) => {
                            emit(&observer_attached, &event_tx, ReserveEvent::ShowTicketTypes {
                                tickets: tickets.sorted_by_ticket_type(),
                            });
                        }
                        Err(e) => {
                            warn!(stage_id, "failed to load ticket types: {e}");
                            state_tx.send_replace(ReserveUiState::Error);
                        }
                    }
                }
            }
        });
    }

    /// Reserve a ticket.
    ///
    /// The outcome is communicated purely via one-shot events; the
    /// persistent state is never touched by this sub-flow. Ignored after
    /// shutdown.
    pub fn reserve_ticket(&self, ticket_id: i64) {
        if !self.running.load(Ordering::SeqCst) {
            debug!(ticket_id, "ignoring reservation request after shutdown");
            return;
        }

        let reservation = Arc::clone(&self.reservation);
        let event_tx = self.event_tx.clone();
        let observer_attached = Arc::clone(&self.observer_attached);
        let running = Arc::clone(&self.running);
        let mut shutdown_rx = self.shutdown_tx.subscribe();

        tokio::spawn(async move {
            tokio::select! {
                _ = shutdown_rx.recv() => {
                    debug!(ticket_id, "ticket reservation cancelled by shutdown");
                }
                result = reservation.reserve(ticket_id) => {
                    if !running.load(Ordering::SeqCst) {
                        return;
                    }
                    match result {
                        Ok(ticket) => {
                            emit(
                                &observer_attached,
                                &event_tx,
                                ReserveEvent::ReserveTicketSuccess { ticket },
                            );
                        }
                        Err(e) => {
                            warn!(ticket_id, "failed to reserve ticket: {e}");
                            emit(&observer_attached, &event_tx, ReserveEvent::ReserveTicketFailed);
                        }
                    }
                }
            }
        });
    }

    /// Hand off from a listing screen to the reservation screen.
    ///
    /// Pure signal: emits exactly one event synchronously, no network
    /// interaction, no state change. Ignored after shutdown.
    pub fn show_ticket_reserve(&self, festival_id: i64) {
        if !self.running.load(Ordering::SeqCst) {
            debug!(festival_id, "ignoring handoff after shutdown");
            return;
        }
        self.analytics.log_event("ticket_reserve", festival_id);
        emit(
            &self.observer_attached,
            &self.event_tx,
            ReserveEvent::ShowTicketReserve { festival_id },
        );
    }

    /// End the owning session.
    ///
    /// In-flight collaborator calls are abandoned; their completions publish
    /// neither state nor events.
    pub fn shutdown(&self) {
        if !self.running.swap(false, Ordering::SeqCst) {
            debug!("orchestrator already shut down");
            return;
        }
        let _ = self.shutdown_tx.send(());
        debug!("orchestrator shut down");
    }
}

/// Emit an event without blocking.
///
/// Delivery is at most once to the currently attached observer: an event
/// emitted before anyone has taken the receiver is dropped outright, never
/// queued for a later subscriber. A full channel or a dropped receiver
/// likewise drops the event.
fn emit(
    observer_attached: &AtomicBool,
    event_tx: &mpsc::Sender<ReserveEvent>,
    event: ReserveEvent,
) {
    if !observer_attached.load(Ordering::SeqCst) {
        debug!("dropping reserve event, no observer attached");
        return;
    }
    if let Err(e) = event_tx.try_send(event) {
        warn!("dropping reserve event: {e}");
    }
}
