//! Resolution statistics tracking.
//!
//! This module provides thread-safe counters for generated profiles, the
//! fallback tier that produced each address, and failed geocoder attempts.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::AttemptFailure;
use crate::resolver::Tier;

/// Thread-safe resolution statistics tracker.
///
/// All counters are atomics, so the tracker can be shared across request
/// tasks with `Arc` without adding a synchronization point. Every tier and
/// failure kind is initialized to zero on creation.
pub struct ResolutionStats {
    tier_hits: HashMap<Tier, AtomicUsize>,
    attempt_failures: HashMap<AttemptFailure, AtomicUsize>,
    requests: AtomicUsize,
    succeeded: AtomicUsize,
    unresolvable_country: AtomicUsize,
    no_address_found: AtomicUsize,
    persona_unavailable: AtomicUsize,
}

impl ResolutionStats {
    pub fn new() -> Self {
        let mut tier_hits = HashMap::new();
        for tier in Tier::iter() {
            tier_hits.insert(tier, AtomicUsize::new(0));
        }

        let mut attempt_failures = HashMap::new();
        for kind in AttemptFailure::iter() {
            attempt_failures.insert(kind, AtomicUsize::new(0));
        }

        ResolutionStats {
            tier_hits,
            attempt_failures,
            requests: AtomicUsize::new(0),
            succeeded: AtomicUsize::new(0),
            unresolvable_country: AtomicUsize::new(0),
            no_address_found: AtomicUsize::new(0),
            persona_unavailable: AtomicUsize::new(0),
        }
    }

    /// Records the tier that produced a verified address.
    pub fn record_tier_hit(&self, tier: Tier) {
        if let Some(counter) = self.tier_hits.get(&tier) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!("No counter for tier {:?}; ResolutionStats is missing a variant", tier);
        }
    }

    /// Records one failed geocoder attempt (retries count individually).
    pub fn record_attempt_failure(&self, kind: AttemptFailure) {
        if let Some(counter) = self.attempt_failures.get(&kind) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "No counter for attempt failure {:?}; ResolutionStats is missing a variant",
                kind
            );
        }
    }

    pub fn record_request(&self) {
        self.requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_success(&self) {
        self.succeeded.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_unresolvable_country(&self) {
        self.unresolvable_country.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_no_address_found(&self) {
        self.no_address_found.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_persona_unavailable(&self) {
        self.persona_unavailable.fetch_add(1, Ordering::Relaxed);
    }

    pub fn tier_hits(&self, tier: Tier) -> usize {
        self.tier_hits
            .get(&tier)
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    pub fn attempt_failures(&self, kind: AttemptFailure) -> usize {
        self.attempt_failures
            .get(&kind)
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::Relaxed)
    }

    pub fn succeeded(&self) -> usize {
        self.succeeded.load(Ordering::Relaxed)
    }

    pub fn unresolvable_country(&self) -> usize {
        self.unresolvable_country.load(Ordering::Relaxed)
    }

    pub fn no_address_found(&self) -> usize {
        self.no_address_found.load(Ordering::Relaxed)
    }

    pub fn persona_unavailable(&self) -> usize {
        self.persona_unavailable.load(Ordering::Relaxed)
    }

    /// Requests that ended in any error.
    pub fn failed(&self) -> usize {
        self.unresolvable_country() + self.no_address_found() + self.persona_unavailable()
    }
}

impl Default for ResolutionStats {
    fn default() -> Self {
        Self::new()
    }
}
