use tracing::{debug, warn};

use crate::clock::Clock;
use crate::core::{
    compute_metrics, determine_category, determine_stage, generate_insights,
    generate_recommendations, validate, CalculationResult, Profile, RawProfileInput,
};
use crate::error::{Error, Result};
use crate::store::{BlobStore, ProfileStore};

/// Composes validation, metrics, classification, advice, and persistence
/// into the single entry point callers use.
pub struct ProfileService<B: BlobStore, C: Clock> {
    store: ProfileStore<B, C>,
}

impl<B: BlobStore, C: Clock> ProfileService<B, C> {
    pub fn new(store: ProfileStore<B, C>) -> Self {
        Self { store }
    }

    /// Runs the full pipeline. Fails only on validation; a persistence
    /// failure is logged and the result is still returned.
    pub fn calculate_profile(&mut self, raw: &RawProfileInput) -> Result<CalculationResult> {
        let report = validate(raw);
        if !report.is_valid {
            return Err(Error::Validation(report.errors));
        }
        let input = raw
            .resolve()
            .ok_or_else(|| Error::Validation(vec!["incomplete input".to_string()]))?;

        let metrics = compute_metrics(&input);
        let stage = determine_stage(&input, &metrics);
        let category = determine_category(&input, &metrics);
        let profile = Profile::from_parts(
            &input,
            stage,
            category,
            metrics,
            self.store.now().to_rfc3339(),
        );

        let insights = generate_insights(&profile);
        let recommendations = generate_recommendations(&profile);

        if !self.store.save(&profile) {
            warn!("profile calculated but could not be persisted");
        } else {
            debug!(stage = %profile.stage, category = %profile.category, "profile persisted");
        }

        Ok(CalculationResult {
            profile,
            insights,
            recommendations,
        })
    }

    /// Calculate-and-persist without the advisory text. `false` covers both
    /// validation and persistence failure.
    pub fn update_profile(&mut self, raw: &RawProfileInput) -> bool {
        match self.calculate_profile(raw) {
            Ok(_) => true,
            Err(Error::Validation(errors)) => {
                debug!(?errors, "update rejected by validation");
                false
            }
        }
    }

    pub fn clear_profile(&mut self) -> bool {
        self.store.remove()
    }

    /// Re-reads the stored profile without recomputation.
    pub fn refresh_profile(&mut self) -> Option<Profile> {
        self.store.load()
    }

    pub fn has_profile(&self) -> bool {
        self.store.exists()
    }

    /// Stale at the default 30-day threshold.
    pub fn is_profile_outdated(&mut self) -> bool {
        self.store.is_stale()
    }

    /// A profile is needed when none exists or the stored one is outdated.
    pub fn needs_profile(&mut self) -> bool {
        !self.has_profile() || self.is_profile_outdated()
    }

    pub fn store(&mut self) -> &mut ProfileStore<B, C> {
        &mut self.store
    }
}
