//! Order number allocation.
//!
//! Numbers look like `ORD-20240315-4821`: the UTC date of the order and a random
//! four-digit suffix. The issuer remembers every number it has handed out, so a suffix that
//! was already used is drawn again instead of being reused.

use super::error::OrderError;
use chrono::{DateTime, Utc};
use rand::Rng;
use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};
use tracing::debug;

const SUFFIX_MIN: u16 = 1000;
const SUFFIX_MAX: u16 = 9999;

pub fn format_order_number(at: DateTime<Utc>, suffix: u16) -> String {
    format!("ORD-{}-{suffix}", at.format("%Y%m%d"))
}

/// Hands out unique order numbers.
///
/// Shared between the order actor's hooks through `Arc`.
#[derive(Debug)]
pub struct OrderNumberIssuer {
    issued: Mutex<HashSet<String>>,
    max_attempts: u32,
}

impl OrderNumberIssuer {
    pub fn new(max_attempts: u32) -> Self {
        Self {
            issued: Mutex::new(HashSet::new()),
            max_attempts: max_attempts.max(1),
        }
    }

    /// Issues a number for an order placed at `at`, drawing random suffixes.
    pub fn issue(&self, at: DateTime<Utc>) -> Result<String, OrderError> {
        let mut rng = rand::rng();
        self.issue_with(at, || rng.random_range(SUFFIX_MIN..=SUFFIX_MAX))
    }

    /// Issues a number using `draw` for the suffix.
    ///
    /// Gives up with `OrderNumberExhausted` after `max_attempts` draws that all collide.
    pub fn issue_with(
        &self,
        at: DateTime<Utc>,
        mut draw: impl FnMut() -> u16,
    ) -> Result<String, OrderError> {
        let mut issued = self.issued.lock().unwrap_or_else(PoisonError::into_inner);
        for attempt in 1..=self.max_attempts {
            let number = format_order_number(at, draw());
            if issued.insert(number.clone()) {
                return Ok(number);
            }
            debug!(%number, attempt, "Order number collision");
        }
        Err(OrderError::OrderNumberExhausted {
            attempts: self.max_attempts,
        })
    }

    /// Makes a number available again (the order it was issued for was never stored).
    pub fn release(&self, number: &str) {
        self.issued
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(number);
    }

    /// How many numbers are currently taken.
    pub fn issued(&self) -> usize {
        self.issued.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}
