#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deterministic campaign generation for a single EXOBOUND session.
//!
//! A campaign is the tutorial trial, the staged wave 1 learning curve and a
//! run of randomized waves sampled without replacement from the cross-product
//! of the configured parameter pools. All randomness flows through the
//! caller-supplied [`Rng`], so a seeded source replays the same campaign.

mod config;

use std::collections::HashSet;

use exobound_core::{
    FleetSize, MessageProbability, TrialId, TrialParameters, TrialSpec, WaveId,
    WaveKind, TUTORIAL_TRIAL,
};
use rand::{seq::SliceRandom, Rng};
use sha2::{Digest, Sha256};
use thiserror::Error;

pub use config::{CampaignConfig, ParameterPools, StagedTrialConfig, TutorialConfig};

/// Wave that hosts the hand-authored learning curve.
pub const STAGED_WAVE: WaveId = WaveId::new(1);

const SESSION_SEED_LABEL: &str = "exobound/session";

/// Configuration problems that abort campaign generation.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum GenerationError {
    /// The pools cannot supply enough unique parameter tuples for the randomized waves.
    #[error("parameter pools yield {available} unique combinations but {required} are required")]
    InsufficientCombinations {
        /// Trials the randomized waves need.
        required: usize,
        /// Unique tuples spanned by the pools.
        available: usize,
    },
    /// A fleet size of zero was configured.
    #[error("{context} has a fleet size of zero")]
    NonPositiveFleetSize {
        /// Location of the offending value.
        context: String,
    },
    /// A message probability is not a finite value in `[0, 1]`.
    #[error("{context} has message probability {value} outside [0, 1]")]
    InvalidMessageProbability {
        /// Location of the offending value.
        context: String,
        /// Offending value.
        value: f64,
    },
    /// A parameter pool is empty.
    #[error("the {pool} pool is empty")]
    EmptyPool {
        /// Name of the pool.
        pool: &'static str,
    },
    /// A parameter pool lists the same value twice.
    #[error("the {pool} pool lists {value} more than once")]
    DuplicatePoolValue {
        /// Name of the pool.
        pool: &'static str,
        /// Repeated value.
        value: String,
    },
    /// The staged wave does not match the wave shape.
    #[error("staged wave has {found} trials, expected {expected}")]
    StagedWaveLength {
        /// Trials per wave.
        expected: usize,
        /// Trials configured for the staged wave.
        found: usize,
    },
    /// Waves were configured to hold no trials.
    #[error("trials per wave must be positive")]
    ZeroWaveShape,
}

/// Pure system that builds the ordered trial list of a campaign.
#[derive(Clone, Debug, Default)]
pub struct CampaignGenerator {
    config: CampaignConfig,
}

impl CampaignGenerator {
    /// Creates a generator for the provided configuration.
    #[must_use]
    pub fn new(config: CampaignConfig) -> Self {
        Self { config }
    }

    /// Configuration the generator draws from.
    #[must_use]
    pub fn config(&self) -> &CampaignConfig {
        &self.config
    }

    /// Builds the fixed onboarding trial.
    pub fn tutorial_trial(&self) -> Result<TrialSpec, GenerationError> {
        let tutorial = &self.config.tutorial;
        let context = "tutorial trial";
        Ok(TrialSpec::Tutorial {
            id: TUTORIAL_TRIAL,
            parameters: TrialParameters {
                ideal_size: tutorial.ideal_size,
                standard_size: tutorial.standard_size,
                fleet_size: fleet_size(tutorial.fleet_size, context)?,
                message_probability: message_probability(tutorial.message_probability, context)?,
                raider: tutorial.raider,
            },
        })
    }

    /// Builds wave 1 in its authored order.
    pub fn staged_wave(&self) -> Result<Vec<TrialSpec>, GenerationError> {
        let expected = self.wave_shape()?;
        let staged = &self.config.staged_wave;
        if staged.len() != expected {
            return Err(GenerationError::StagedWaveLength {
                expected,
                found: staged.len(),
            });
        }

        let mut trials = Vec::with_capacity(expected);
        for (step, (trial, id)) in staged.iter().zip(TUTORIAL_TRIAL.get() + 1..).enumerate() {
            let context = format!("staged trial {}", step + 1);
            trials.push(TrialSpec::Wave {
                id: TrialId::new(id),
                wave: STAGED_WAVE,
                wave_kind: WaveKind::Staged,
                parameters: TrialParameters {
                    ideal_size: trial.ideal_size,
                    standard_size: self.config.standard_size,
                    fleet_size: fleet_size(trial.fleet_size, &context)?,
                    message_probability: message_probability(trial.message_probability, &context)?,
                    raider: self.config.staged_raider,
                },
            });
        }
        Ok(trials)
    }

    /// Samples the randomized waves without replacement from the pool cross-product.
    ///
    /// The full cross-product is shuffled, the leading tuples are split into
    /// consecutive waves with ascending identifiers, and each wave is then
    /// shuffled on its own. Waves themselves are never reordered.
    pub fn randomized_waves<R>(&self, rng: &mut R) -> Result<Vec<TrialSpec>, GenerationError>
    where
        R: Rng + ?Sized,
    {
        let trials_per_wave = self.wave_shape()?;
        let required = self.config.randomized_trial_count();
        let mut combinations = combinations(&self.config.pools)?;
        if combinations.len() < required {
            return Err(GenerationError::InsufficientCombinations {
                required,
                available: combinations.len(),
            });
        }

        combinations.shuffle(rng);
        combinations.truncate(required);
        tracing::debug!(
            sampled = required,
            available = self.config.pools.combination_count(),
            "sampled randomized combinations"
        );

        let first_id = TUTORIAL_TRIAL.get() + 1 + self.config.staged_wave.len() as u32;
        let mut ids = first_id..;
        let mut trials = Vec::with_capacity(required);
        for (wave_offset, chunk) in (1..).zip(combinations.chunks(trials_per_wave)) {
            let wave = WaveId::new(STAGED_WAVE.get() + wave_offset);
            let mut wave_trials: Vec<TrialSpec> = chunk
                .iter()
                .zip(&mut ids)
                .map(|(parameters, id)| TrialSpec::Wave {
                    id: TrialId::new(id),
                    wave,
                    wave_kind: WaveKind::Randomized,
                    parameters: *parameters,
                })
                .collect();
            wave_trials.shuffle(rng);
            trials.extend(wave_trials);
        }
        Ok(trials)
    }

    /// Builds the complete ordered campaign: tutorial, staged wave, randomized waves.
    pub fn generate<R>(&self, rng: &mut R) -> Result<Vec<TrialSpec>, GenerationError>
    where
        R: Rng + ?Sized,
    {
        let mut trials = Vec::with_capacity(self.config.total_trial_count());
        trials.push(self.tutorial_trial()?);
        trials.extend(self.staged_wave()?);
        trials.extend(self.randomized_waves(rng)?);
        tracing::debug!(trials = trials.len(), "campaign generated");
        Ok(trials)
    }

    fn wave_shape(&self) -> Result<usize, GenerationError> {
        match self.config.trials_per_wave {
            0 => Err(GenerationError::ZeroWaveShape),
            trials => Ok(trials as usize),
        }
    }
}

/// Derives a reproducible session seed from a participant identifier.
#[must_use]
pub fn session_seed(participant: &str) -> u64 {
    let mut hasher = Sha256::new();
    hasher.update(SESSION_SEED_LABEL.as_bytes());
    hasher.update(participant.as_bytes());
    finalize_seed(hasher)
}

fn finalize_seed(hasher: Sha256) -> u64 {
    let digest = hasher.finalize();
    let mut bytes = [0_u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(bytes)
}

fn combinations(pools: &ParameterPools) -> Result<Vec<TrialParameters>, GenerationError> {
    ensure_distinct("ideal size", &pools.ideal_sizes, |size| *size)?;
    ensure_distinct("standard size", &pools.standard_sizes, |size| *size)?;
    ensure_distinct("fleet size", &pools.fleet_sizes, |size| *size)?;
    ensure_distinct("raider", &pools.raiders, |raider| *raider)?;

    let fleets = pools
        .fleet_sizes
        .iter()
        .map(|units| fleet_size(*units, "fleet size pool"))
        .collect::<Result<Vec<_>, _>>()?;
    let probabilities = pools
        .message_probabilities
        .iter()
        .map(|value| message_probability(*value, "message probability pool"))
        .collect::<Result<Vec<_>, _>>()?;
    ensure_distinct("message probability", &probabilities, |probability| {
        probability.basis_points()
    })?;

    let mut combinations = Vec::with_capacity(pools.combination_count());
    for &ideal_size in &pools.ideal_sizes {
        for &standard_size in &pools.standard_sizes {
            for &fleet_size in &fleets {
                for &message_probability in &probabilities {
                    for &raider in &pools.raiders {
                        combinations.push(TrialParameters {
                            ideal_size,
                            standard_size,
                            fleet_size,
                            message_probability,
                            raider,
                        });
                    }
                }
            }
        }
    }
    Ok(combinations)
}

fn ensure_distinct<T, K>(
    pool: &'static str,
    values: &[T],
    key: impl Fn(&T) -> K,
) -> Result<(), GenerationError>
where
    T: std::fmt::Debug,
    K: Eq + std::hash::Hash,
{
    if values.is_empty() {
        return Err(GenerationError::EmptyPool { pool });
    }
    let mut seen = HashSet::with_capacity(values.len());
    for value in values {
        if !seen.insert(key(value)) {
            return Err(GenerationError::DuplicatePoolValue {
                pool,
                value: format!("{value:?}"),
            });
        }
    }
    Ok(())
}

fn fleet_size(units: u32, context: &str) -> Result<FleetSize, GenerationError> {
    FleetSize::new(units).ok_or_else(|| GenerationError::NonPositiveFleetSize {
        context: context.to_owned(),
    })
}

fn message_probability(value: f64, context: &str) -> Result<MessageProbability, GenerationError> {
    MessageProbability::new(value).ok_or_else(|| GenerationError::InvalidMessageProbability {
        context: context.to_owned(),
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use exobound_core::RaiderKind;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn default_pools_span_reference_grid() {
        let pools = ParameterPools::default();
        assert_eq!(pools.combination_count(), 216);
        assert_eq!(combinations(&pools).expect("pools").len(), 216);
    }

    #[test]
    fn tutorial_uses_fixed_parameters() {
        let tutorial = CampaignGenerator::default()
            .tutorial_trial()
            .expect("tutorial");
        assert!(tutorial.is_tutorial());
        assert_eq!(tutorial.id(), TUTORIAL_TRIAL);
        let parameters = tutorial.parameters();
        assert_eq!(parameters.ideal_size, 80);
        assert_eq!(parameters.fleet_size.get(), 3);
        assert_eq!(parameters.message_probability.basis_points(), 7_500);
        assert_eq!(parameters.raider, RaiderKind::Red);
    }

    #[test]
    fn duplicate_pool_values_are_rejected() {
        let mut config = CampaignConfig::default();
        config.pools.message_probabilities = vec![0.5, 0.25, 0.5];
        let generator = CampaignGenerator::new(config);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        assert!(matches!(
            generator.randomized_waves(&mut rng),
            Err(GenerationError::DuplicatePoolValue {
                pool: "message probability",
                ..
            })
        ));
    }

    #[test]
    fn empty_pool_is_rejected() {
        let mut config = CampaignConfig::default();
        config.pools.raiders.clear();
        let generator = CampaignGenerator::new(config);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        assert_eq!(
            generator.randomized_waves(&mut rng),
            Err(GenerationError::EmptyPool { pool: "raider" })
        );
    }

    #[test]
    fn session_seed_is_stable_per_participant() {
        assert_eq!(session_seed("P-017"), session_seed("P-017"));
        assert_ne!(session_seed("P-017"), session_seed("P-018"));
    }
}
