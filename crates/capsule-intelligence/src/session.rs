// ABOUTME: In-memory session history of recommended outfit fingerprints per user
// ABOUTME: TTL-bounded cache preventing repeat recommendations within a session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Capsule Wardrobe Intelligence

//! Session History
//!
//! This module provides an in-memory record of outfit fingerprints already
//! surfaced to (or rejected by) each user. The generator consults it to
//! avoid recommending the same combination twice within a session.
//!
//! Entries expire automatically and both per-user and total capacity are
//! bounded, so the cache cannot grow without limit.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

// ============================================================================
// Constants
// ============================================================================

/// Default entry TTL in minutes (one styling session)
const DEFAULT_SESSION_TTL_MINUTES: i64 = 240;

/// Maximum fingerprints remembered per user
const MAX_FINGERPRINTS_PER_USER: usize = 200;

/// Maximum total fingerprints across all users
const MAX_TOTAL_FINGERPRINTS: usize = 50_000;

// ============================================================================
// Entries
// ============================================================================

/// Why a fingerprint entered the history
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HistorySource {
    /// The engine recommended this outfit
    Recommended,
    /// The user explicitly rejected this outfit
    Rejected,
}

/// One remembered outfit fingerprint
#[derive(Debug, Clone)]
struct HistoryEntry {
    fingerprint: String,
    source: HistorySource,
    recorded_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

impl HistoryEntry {
    fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }
}

/// Session history configuration
#[derive(Debug, Clone)]
pub struct SessionHistoryConfig {
    /// Entry time-to-live in minutes
    pub ttl_minutes: i64,
    /// Maximum fingerprints per user
    pub max_per_user: usize,
    /// Maximum total fingerprints
    pub max_total: usize,
}

impl Default for SessionHistoryConfig {
    fn default() -> Self {
        Self {
            ttl_minutes: DEFAULT_SESSION_TTL_MINUTES,
            max_per_user: MAX_FINGERPRINTS_PER_USER,
            max_total: MAX_TOTAL_FINGERPRINTS,
        }
    }
}

/// Per-user history of recently surfaced outfit fingerprints
pub struct SessionHistory {
    entries: RwLock<HashMap<Uuid, Vec<HistoryEntry>>>,
    config: SessionHistoryConfig,
}

impl SessionHistory {
    /// Create a history with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SessionHistoryConfig::default())
    }

    /// Create a history with custom configuration
    #[must_use]
    pub fn with_config(config: SessionHistoryConfig) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            config,
        }
    }

    /// Record a fingerprint for a user
    ///
    /// Re-recording an existing fingerprint refreshes its expiry and source.
    /// Silently skipped if the lock is poisoned.
    pub fn record(&self, user_id: Uuid, fingerprint: &str, source: HistorySource) {
        let Ok(mut entries) = self.entries.write() else {
            return;
        };

        let now = Utc::now();
        let expires_at = now + Duration::minutes(self.config.ttl_minutes);
        let user_entries = entries.entry(user_id).or_default();

        if let Some(existing) = user_entries
            .iter_mut()
            .find(|entry| entry.fingerprint == fingerprint)
        {
            existing.source = source;
            existing.recorded_at = now;
            existing.expires_at = expires_at;
            return;
        }

        user_entries.push(HistoryEntry {
            fingerprint: fingerprint.to_owned(),
            source,
            recorded_at: now,
            expires_at,
        });

        // Per-user limit: drop oldest first
        if user_entries.len() > self.config.max_per_user {
            user_entries.sort_by_key(|entry| entry.recorded_at);
            let excess = user_entries.len() - self.config.max_per_user;
            user_entries.drain(0..excess);
        }

        self.enforce_total_limit(&mut entries);
    }

    /// True when the user has a live (non-expired) entry for this fingerprint
    ///
    /// Returns `false` if the lock is poisoned.
    #[must_use]
    pub fn contains(&self, user_id: Uuid, fingerprint: &str) -> bool {
        let Ok(entries) = self.entries.read() else {
            return false;
        };
        entries.get(&user_id).is_some_and(|user_entries| {
            user_entries
                .iter()
                .any(|entry| entry.fingerprint == fingerprint && !entry.is_expired())
        })
    }

    /// Remove expired entries and empty users
    ///
    /// Silently skipped if the lock is poisoned.
    pub fn cleanup_expired(&self) {
        let Ok(mut entries) = self.entries.write() else {
            return;
        };
        for user_entries in entries.values_mut() {
            user_entries.retain(|entry| !entry.is_expired());
        }
        entries.retain(|_, user_entries| !user_entries.is_empty());
    }

    /// Forget everything recorded for one user
    ///
    /// Silently skipped if the lock is poisoned.
    pub fn clear_user(&self, user_id: Uuid) {
        if let Ok(mut entries) = self.entries.write() {
            entries.remove(&user_id);
        }
    }

    /// Clear the entire history
    ///
    /// Silently skipped if the lock is poisoned.
    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.write() {
            entries.clear();
        }
    }

    /// Get history statistics
    ///
    /// Returns zeroed stats if the lock is poisoned.
    #[must_use]
    pub fn stats(&self) -> SessionStats {
        let Ok(entries) = self.entries.read() else {
            return SessionStats {
                total_entries: 0,
                user_count: 0,
                expired_count: 0,
                max_entries: self.config.max_total,
            };
        };

        let total_entries: usize = entries.values().map(Vec::len).sum();
        let user_count = entries.len();
        let expired_count = entries
            .values()
            .flat_map(|user_entries| user_entries.iter())
            .filter(|entry| entry.is_expired())
            .count();

        SessionStats {
            total_entries,
            user_count,
            expired_count,
            max_entries: self.config.max_total,
        }
    }

    /// Enforce the total capacity limit by evicting oldest entries globally
    fn enforce_total_limit(&self, entries: &mut HashMap<Uuid, Vec<HistoryEntry>>) {
        let total: usize = entries.values().map(Vec::len).sum();
        if total <= self.config.max_total {
            return;
        }

        let mut all: Vec<(Uuid, DateTime<Utc>, String)> = entries
            .iter()
            .flat_map(|(user_id, user_entries)| {
                user_entries
                    .iter()
                    .map(|entry| (*user_id, entry.recorded_at, entry.fingerprint.clone()))
            })
            .collect();
        all.sort_by(|a, b| a.1.cmp(&b.1));

        let to_remove = total - self.config.max_total;
        for (user_id, _, fingerprint) in all.into_iter().take(to_remove) {
            if let Some(user_entries) = entries.get_mut(&user_id) {
                user_entries.retain(|entry| entry.fingerprint != fingerprint);
            }
        }
        entries.retain(|_, user_entries| !user_entries.is_empty());
    }
}

impl Default for SessionHistory {
    fn default() -> Self {
        Self::new()
    }
}

/// Session history statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStats {
    /// Total number of entries
    pub total_entries: usize,
    /// Number of users with entries
    pub user_count: usize,
    /// Number of expired entries (pending cleanup)
    pub expired_count: usize,
    /// Maximum allowed entries
    pub max_entries: usize,
}

// ============================================================================
// Thread-Safe Handle
// ============================================================================

/// Thread-safe handle to a session history
pub type SharedSessionHistory = Arc<SessionHistory>;

/// Create a new shared session history
#[must_use]
pub fn create_shared_session_history() -> SharedSessionHistory {
    Arc::new(SessionHistory::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_and_finds_fingerprints() {
        let history = SessionHistory::new();
        let user = Uuid::new_v4();

        assert!(!history.contains(user, "a+b"));
        history.record(user, "a+b", HistorySource::Recommended);
        assert!(history.contains(user, "a+b"));
        assert!(!history.contains(Uuid::new_v4(), "a+b"));
    }

    #[test]
    fn expired_entries_do_not_match() {
        let history = SessionHistory::with_config(SessionHistoryConfig {
            ttl_minutes: -1,
            ..SessionHistoryConfig::default()
        });
        let user = Uuid::new_v4();
        history.record(user, "a+b", HistorySource::Recommended);
        assert!(!history.contains(user, "a+b"));

        history.cleanup_expired();
        assert_eq!(history.stats().total_entries, 0);
    }

    #[test]
    fn per_user_capacity_evicts_oldest() {
        let history = SessionHistory::with_config(SessionHistoryConfig {
            max_per_user: 3,
            ..SessionHistoryConfig::default()
        });
        let user = Uuid::new_v4();
        for i in 0..5 {
            history.record(user, &format!("fp-{i}"), HistorySource::Recommended);
        }
        let stats = history.stats();
        assert_eq!(stats.total_entries, 3);
        assert!(history.contains(user, "fp-4"));
    }

    #[test]
    fn clear_user_forgets_only_that_user() {
        let history = SessionHistory::new();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();
        history.record(alice, "a", HistorySource::Recommended);
        history.record(bob, "b", HistorySource::Rejected);

        history.clear_user(alice);
        assert!(!history.contains(alice, "a"));
        assert!(history.contains(bob, "b"));
    }
}
