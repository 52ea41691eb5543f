//! Mock authentication gateway for testing.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::gateway::AuthGateway;

/// Mock implementation of [`AuthGateway`].
///
/// Starts signed out; flip with [`MockAuthGateway::set_signed`].
#[derive(Debug, Default)]
pub struct MockAuthGateway {
    signed: AtomicBool,
}

impl MockAuthGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_signed(&self, signed: bool) {
        self.signed.store(signed, Ordering::SeqCst);
    }
}

impl AuthGateway for MockAuthGateway {
    fn is_signed(&self) -> bool {
        self.signed.load(Ordering::SeqCst)
    }
}
