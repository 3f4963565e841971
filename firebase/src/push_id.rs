// SPDX-FileCopyrightText: 2026 Expensify contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Chronologically ordered child keys, compatible with the ones Firebase SDKs push.
//!
//! A push id is 20 characters: 8 encode the millisecond timestamp, 12 are
//! random. Ids generated within the same millisecond reuse the previous random
//! part incremented by one, so ids from one generator sort strictly in
//! creation order.

use std::sync::{Mutex, PoisonError};
use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;

/// Alphabet in ascending ASCII order, so lexicographic order equals numeric order.
const PUSH_CHARS: &[u8; 64] = b"-0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ_abcdefghijklmnopqrstuvwxyz";

const TIME_LEN: usize = 8;
const RANDOM_LEN: usize = 12;

/// Length of a push id.
pub const PUSH_ID_LEN: usize = TIME_LEN + RANDOM_LEN;

static GENERATOR: Mutex<PushIdGenerator> = Mutex::new(PushIdGenerator::new());

/// Generates a push id for the current time from the process-wide generator.
#[must_use]
pub fn generate() -> String {
    GENERATOR
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .next_id()
}

/// Stateful push id generator.
#[derive(Debug, Clone)]
pub struct PushIdGenerator {
    last_time: Option<u64>,
    last_random: [u8; RANDOM_LEN],
}

impl PushIdGenerator {
    /// Creates a generator that has not produced any id yet.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            last_time: None,
            last_random: [0; RANDOM_LEN],
        }
    }

    /// Generates an id for the current wall-clock time.
    pub fn next_id(&mut self) -> String {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX));
        self.next_id_at(now)
    }

    /// Generates an id for the given time in milliseconds since the Unix epoch.
    pub fn next_id_at(&mut self, now_ms: u64) -> String {
        if self.last_time == Some(now_ms) {
            self.increment_random();
        } else {
            let mut rng = rand::rng();
            for digit in &mut self.last_random {
                *digit = rng.random_range(0..64);
            }
        }
        self.last_time = Some(now_ms);

        let mut time_digits = [0u8; TIME_LEN];
        let mut t = now_ms;
        for digit in time_digits.iter_mut().rev() {
            *digit = u8::try_from(t % 64).unwrap_or_default();
            t /= 64;
        }

        time_digits
            .iter()
            .chain(&self.last_random)
            .filter_map(|&d| PUSH_CHARS.get(usize::from(d)).copied().map(char::from))
            .collect()
    }

    fn increment_random(&mut self) {
        for digit in self.last_random.iter_mut().rev() {
            if *digit == 63 {
                *digit = 0;
            } else {
                *digit += 1;
                break;
            }
        }
    }
}

impl Default for PushIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
