//! Hand-off to checkout.
//!
//! The builder produces the payload and passes it on. Transport, retries
//! and the checkout response belong to the submitter.

use crate::order::OrderPayload;

/// Receives the order once the user submits.
pub trait OrderSubmitter {
    /// Take ownership of the payload. Fire-and-forget.
    fn dispatch(&mut self, payload: &OrderPayload);
}

impl<F> OrderSubmitter for F
where
    F: FnMut(&OrderPayload),
{
    fn dispatch(&mut self, payload: &OrderPayload) {
        self(payload)
    }
}

/// Submitter that keeps every dispatched payload in memory.
#[derive(Debug, Default, Clone)]
pub struct Outbox {
    payloads: Vec<OrderPayload>,
}

impl Outbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn payloads(&self) -> &[OrderPayload] {
        &self.payloads
    }

    /// Remove and return the most recent payload.
    pub fn take_last(&mut self) -> Option<OrderPayload> {
        self.payloads.pop()
    }

    pub fn is_empty(&self) -> bool {
        self.payloads.is_empty()
    }
}

impl OrderSubmitter for Outbox {
    fn dispatch(&mut self, payload: &OrderPayload) {
        self.payloads.push(payload.clone());
    }
}
