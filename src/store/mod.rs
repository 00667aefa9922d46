//! Durable profile persistence with an integrity check and a staleness
//! policy. Backend failures never escape as errors: they degrade to `false`
//! or `None` and a warning, so a broken store reads as "no profile".

mod backend;

pub use backend::{BlobStore, FileStore, MemoryStore, StoreError};

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::clock::Clock;
use crate::core::thresholds::{DEFAULT_MAX_AGE_DAYS, SCHEMA_VERSION, STORAGE_KEY_PREFIX};
use crate::core::Profile;

pub struct ProfileStore<B: BlobStore, C: Clock> {
    backend: B,
    clock: C,
    key: String,
}

impl<B: BlobStore, C: Clock> ProfileStore<B, C> {
    /// The storage key is scoped per user identity: concurrent users must
    /// never share the single-profile slot.
    pub fn new(backend: B, clock: C, user: &str) -> Self {
        Self {
            backend,
            clock,
            key: format!("{STORAGE_KEY_PREFIX}:{user}"),
        }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Serializes and writes the profile under the fixed key. Returns `false`
    /// instead of erroring when the backend write fails.
    pub fn save(&mut self, profile: &Profile) -> bool {
        let blob = match serde_json::to_string(profile) {
            Ok(blob) => blob,
            Err(err) => {
                warn!(error = %err, "failed to serialize profile");
                return false;
            }
        };
        match self.backend.set(&self.key, &blob) {
            Ok(()) => true,
            Err(err) => {
                warn!(error = %err, key = %self.key, "failed to persist profile");
                false
            }
        }
    }

    /// Reads the profile back. A blob that fails the shape check (malformed
    /// JSON, missing or mistyped fields, unknown stage/category, or a
    /// schema-version mismatch) is proactively removed so subsequent loads
    /// do not re-trigger the same failure.
    pub fn load(&mut self) -> Option<Profile> {
        let blob = match self.backend.get(&self.key) {
            Ok(Some(blob)) => blob,
            Ok(None) => return None,
            Err(err) => {
                warn!(error = %err, key = %self.key, "failed to read profile");
                return None;
            }
        };

        match serde_json::from_str::<Profile>(&blob) {
            Ok(profile) if profile.schema_version == SCHEMA_VERSION => Some(profile),
            Ok(profile) => {
                warn!(
                    found = profile.schema_version,
                    expected = SCHEMA_VERSION,
                    "discarding profile with mismatched schema version"
                );
                self.discard_corrupt();
                None
            }
            Err(err) => {
                warn!(error = %err, key = %self.key, "discarding corrupt profile blob");
                self.discard_corrupt();
                None
            }
        }
    }

    fn discard_corrupt(&mut self) {
        if let Err(err) = self.backend.remove(&self.key) {
            warn!(error = %err, key = %self.key, "failed to remove corrupt profile blob");
        }
    }

    /// Clears the fixed key. Returns `false` on backend failure.
    pub fn remove(&mut self) -> bool {
        match self.backend.remove(&self.key) {
            Ok(()) => true,
            Err(err) => {
                warn!(error = %err, key = %self.key, "failed to remove profile");
                false
            }
        }
    }

    /// Existence only; no shape check is performed.
    pub fn exists(&self) -> bool {
        matches!(self.backend.get(&self.key), Ok(Some(_)))
    }

    /// Whole days since the profile was stamped, rounded up. `None` when no
    /// profile is stored or its timestamp does not parse.
    pub fn age_in_days(&mut self) -> Option<i64> {
        let profile = self.load()?;
        let stamped = match DateTime::parse_from_rfc3339(&profile.last_updated) {
            Ok(stamped) => stamped.with_timezone(&Utc),
            Err(err) => {
                debug!(error = %err, "profile timestamp does not parse");
                return None;
            }
        };

        let elapsed_secs = (self.clock.now() - stamped).num_seconds().abs();
        Some((elapsed_secs as f64 / 86_400.0).ceil() as i64)
    }

    /// Absence is always stale; otherwise staleness means strictly older
    /// than `max_days`.
    pub fn is_stale_after(&mut self, max_days: i64) -> bool {
        match self.age_in_days() {
            Some(age) => age > max_days,
            None => true,
        }
    }

    pub fn is_stale(&mut self) -> bool {
        self.is_stale_after(DEFAULT_MAX_AGE_DAYS)
    }
}
