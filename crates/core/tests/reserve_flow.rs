//! Reservation flow integration tests.
//!
//! These exercise the orchestrator end to end against mock gateways:
//! loading the reservation detail, inspecting ticket types behind the
//! auth/sale-window gates, and submitting a reservation.

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDateTime;
use tokio::sync::mpsc;

use stagepass_core::testing::{
    fixtures, MockAnalytics, MockAuthGateway, MockFestivalGateway, MockReservationGateway,
    MockTicketTypeGateway,
};
use stagepass_core::{
    FestivalSummary, GatewayError, ReserveConfig, ReserveEvent, ReserveOrchestrator,
    ReserveUiState,
};

/// Test helper bundling all mock gateways.
struct TestHarness {
    festival: Arc<MockFestivalGateway>,
    ticket_types: Arc<MockTicketTypeGateway>,
    reservation: Arc<MockReservationGateway>,
    auth: Arc<MockAuthGateway>,
    analytics: Arc<MockAnalytics>,
}

impl TestHarness {
    fn new() -> Self {
        Self {
            festival: Arc::new(MockFestivalGateway::new()),
            ticket_types: Arc::new(MockTicketTypeGateway::new()),
            reservation: Arc::new(MockReservationGateway::new()),
            auth: Arc::new(MockAuthGateway::new()),
            analytics: MockAnalytics::new(),
        }
    }

    fn orchestrator(&self) -> ReserveOrchestrator {
        ReserveOrchestrator::new(
            ReserveConfig::default(),
            Arc::clone(&self.festival) as Arc<_>,
            Arc::clone(&self.ticket_types) as Arc<_>,
            Arc::clone(&self.reservation) as Arc<_>,
            Arc::clone(&self.auth) as Arc<_>,
            Arc::clone(&self.analytics) as Arc<_>,
        )
    }
}

/// Wait until the state matches the predicate, or panic after 2 seconds.
async fn wait_for_state(
    orchestrator: &ReserveOrchestrator,
    predicate: impl Fn(&ReserveUiState) -> bool,
) -> ReserveUiState {
    let mut rx = orchestrator.state();
    tokio::time::timeout(Duration::from_secs(2), async move {
        loop {
            let current = rx.borrow_and_update().clone();
            if predicate(&current) {
                return current;
            }
            rx.changed().await.expect("state channel closed");
        }
    })
    .await
    .expect("timed out waiting for state")
}

/// Receive the next event, or panic after 2 seconds.
async fn next_event(events: &mut mpsc::Receiver<ReserveEvent>) -> ReserveEvent {
    tokio::time::timeout(Duration::from_secs(2), events.recv())
        .await
        .expect("timed out waiting for event")
        .expect("event channel closed")
}

#[tokio::test]
async fn load_reservation_success_publishes_festival_summary() {
    let harness = TestHarness::new();
    harness.festival.set_result(Ok(fixtures::reservation())).await;

    let orchestrator = harness.orchestrator();
    orchestrator.load_reservation(Some(1));

    let state = wait_for_state(&orchestrator, ReserveUiState::should_show_success).await;
    let expected = FestivalSummary::from(&fixtures::reservation());
    assert_eq!(state, ReserveUiState::Success(expected));
    assert_eq!(harness.festival.recorded_calls().await, vec![1]);
}

#[tokio::test]
async fn load_reservation_failure_publishes_error() {
    let harness = TestHarness::new();
    harness
        .festival
        .set_result(Err(GatewayError::Connection("down".to_string())))
        .await;

    let orchestrator = harness.orchestrator();
    orchestrator.load_reservation(None);

    let state = wait_for_state(&orchestrator, ReserveUiState::should_show_error).await;
    assert!(state.should_show_error());
    assert!(!state.should_show_loading());
    assert!(!state.should_show_success());

    // Missing festival id falls back to the configured default
    assert_eq!(harness.festival.recorded_calls().await, vec![0]);
}

#[tokio::test]
async fn load_reservation_stays_loading_while_pending() {
    let harness = TestHarness::new();
    harness.festival.set_result(Ok(fixtures::reservation())).await;
    harness.festival.set_delay(Duration::from_millis(300)).await;

    let orchestrator = harness.orchestrator();
    orchestrator.load_reservation(Some(1));

    assert!(orchestrator.current_state().should_show_loading());

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(orchestrator.current_state().should_show_loading());

    let state = wait_for_state(&orchestrator, ReserveUiState::should_show_success).await;
    assert!(state.should_show_success());
}

#[tokio::test]
async fn stale_load_completion_does_not_overwrite_newer_state() {
    let harness = TestHarness::new();
    let slow = fixtures::reservation();
    let fast = stagepass_core::Reservation {
        name: "newer festival".to_string(),
        ..fixtures::reservation()
    };
    harness
        .festival
        .enqueue_delayed(Some(Duration::from_millis(300)), Ok(slow))
        .await;
    harness.festival.enqueue(Ok(fast.clone())).await;

    let orchestrator = harness.orchestrator();
    orchestrator.load_reservation(Some(1));
    orchestrator.load_reservation(Some(1));

    let state = wait_for_state(&orchestrator, ReserveUiState::should_show_success).await;
    assert_eq!(state, ReserveUiState::Success(FestivalSummary::from(&fast)));

    // Let the superseded call resolve; it must be dropped on the floor.
    tokio::time::sleep(Duration::from_millis(400)).await;
    assert_eq!(
        orchestrator.current_state(),
        ReserveUiState::Success(FestivalSummary::from(&fast))
    );
}

#[tokio::test]
async fn show_ticket_types_emits_sorted_tickets() {
    let harness = TestHarness::new();
    harness.auth.set_signed(true);
    harness
        .ticket_types
        .set_result(Ok(fixtures::reservation_tickets()))
        .await;

    let orchestrator = harness.orchestrator();
    let mut events = orchestrator.take_events().expect("first take");

    orchestrator.show_ticket_types(1, NaiveDateTime::MIN);

    let event = next_event(&mut events).await;
    assert_eq!(
        event,
        ReserveEvent::ShowTicketTypes {
            tickets: fixtures::reservation_tickets().sorted_by_ticket_type(),
        }
    );

    // Exactly one event per invocation
    assert!(events.try_recv().is_err());
}

#[tokio::test]
async fn show_ticket_types_failure_sets_error_without_event() {
    let harness = TestHarness::new();
    harness.auth.set_signed(true);
    harness
        .ticket_types
        .set_result(Err(GatewayError::UnexpectedResponse("boom".to_string())))
        .await;

    let orchestrator = harness.orchestrator();
    let mut events = orchestrator.take_events().expect("first take");

    orchestrator.show_ticket_types(1, NaiveDateTime::MIN);

    let state = wait_for_state(&orchestrator, ReserveUiState::should_show_error).await;
    assert!(state.should_show_error());
    assert!(events.try_recv().is_err());
}

#[tokio::test]
async fn show_ticket_types_requires_sign_in() {
    let harness = TestHarness::new();
    harness.auth.set_signed(false);
    harness
        .ticket_types
        .set_result(Ok(fixtures::reservation_tickets()))
        .await;

    let orchestrator = harness.orchestrator();
    let mut events = orchestrator.take_events().expect("first take");

    orchestrator.show_ticket_types(1, NaiveDateTime::MIN);

    assert_eq!(next_event(&mut events).await, ReserveEvent::ShowSignIn);
    assert_eq!(harness.ticket_types.call_count().await, 0);
    assert!(orchestrator.current_state().should_show_loading());
}

#[tokio::test]
async fn show_ticket_types_before_sale_window_short_circuits() {
    let harness = TestHarness::new();
    harness.auth.set_signed(true);

    let orchestrator = harness.orchestrator();
    let mut events = orchestrator.take_events().expect("first take");

    orchestrator.show_ticket_types(1, NaiveDateTime::MAX);

    assert_eq!(next_event(&mut events).await, ReserveEvent::TicketSaleNotOpen);
    assert_eq!(harness.ticket_types.call_count().await, 0);
}

#[tokio::test]
async fn reserve_ticket_success_emits_reserved_ticket() {
    let harness = TestHarness::new();
    harness
        .reservation
        .set_result(Ok(fixtures::reserved_ticket()))
        .await;

    let orchestrator = harness.orchestrator();
    let mut events = orchestrator.take_events().expect("first take");

    orchestrator.reserve_ticket(0);

    assert_eq!(
        next_event(&mut events).await,
        ReserveEvent::ReserveTicketSuccess {
            ticket: fixtures::reserved_ticket(),
        }
    );
    // The reservation sub-flow never touches persistent state
    assert!(orchestrator.current_state().should_show_loading());
}

#[tokio::test]
async fn reserve_ticket_failure_emits_failed_event() {
    let harness = TestHarness::new();
    harness
        .reservation
        .set_result(Err(GatewayError::Connection("down".to_string())))
        .await;

    let orchestrator = harness.orchestrator();
    let mut events = orchestrator.take_events().expect("first take");

    orchestrator.reserve_ticket(0);

    assert_eq!(next_event(&mut events).await, ReserveEvent::ReserveTicketFailed);
    assert!(orchestrator.current_state().should_show_loading());
}

#[tokio::test]
async fn show_ticket_reserve_emits_synchronously() {
    let harness = TestHarness::new();

    let orchestrator = harness.orchestrator();
    let mut events = orchestrator.take_events().expect("first take");

    orchestrator.show_ticket_reserve(7);

    // Already delivered before any await: the trigger is a pure signal
    assert_eq!(
        events.try_recv().expect("event should be queued synchronously"),
        ReserveEvent::ShowTicketReserve { festival_id: 7 }
    );
    assert_eq!(harness.festival.call_count().await, 0);
    assert_eq!(
        harness.analytics.recorded_events(),
        vec![("ticket_reserve".to_string(), 7)]
    );
}

#[tokio::test]
async fn events_are_delivered_in_emission_order() {
    let harness = TestHarness::new();

    let orchestrator = harness.orchestrator();
    let mut events = orchestrator.take_events().expect("first take");

    orchestrator.show_ticket_reserve(1);
    orchestrator.show_ticket_reserve(2);
    orchestrator.show_ticket_reserve(3);

    for expected_id in 1..=3 {
        assert_eq!(
            next_event(&mut events).await,
            ReserveEvent::ShowTicketReserve {
                festival_id: expected_id,
            }
        );
    }
}
