#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Trial scoring: simulated order delivery, losses and the per-trial bonus.
//!
//! Each unit of the fleet independently receives the participant's order with
//! the trial's message probability. Units that receive it fill the intended
//! ideal quota first and then the standard target; units that miss it default
//! to the standard target. The losses penalise distance from the ideal
//! extreme (adaptation) and ideal-leaning orders that did not reach the fleet
//! (coordination).

use exobound_core::{Allocation, FleetSize, MessageProbability, TrialResult, TrialSpec};
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Loss weights and bonus shape used when scoring trials.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringConfig {
    /// Weight k1 applied to the squared distance between allocation and the ideal extreme.
    pub adaptation_weight: f64,
    /// Weight k2 applied per unit that missed the order, scaled by the squared allocation.
    pub coordination_weight: f64,
    /// Bonus paid for a loss-free trial; also the upper clamp of every bonus.
    pub max_bonus_per_trial: f64,
    /// Bonus deducted per unit of total loss.
    pub bonus_scale: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            adaptation_weight: 1_000.0,
            coordination_weight: 500.0,
            max_bonus_per_trial: 5.0 / 45.0,
            bonus_scale: 1.0 / 2_000.0,
        }
    }
}

/// Rejected scoring configuration value.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum ScoringConfigError {
    /// A weight is negative, NaN or infinite.
    #[error("{field} must be finite and non-negative, found {value}")]
    InvalidValue {
        /// Offending field.
        field: &'static str,
        /// Offending value.
        value: f64,
    },
}

impl ScoringConfig {
    /// Checks that every weight is finite and non-negative.
    pub fn validate(&self) -> Result<(), ScoringConfigError> {
        for (field, value) in [
            ("adaptation_weight", self.adaptation_weight),
            ("coordination_weight", self.coordination_weight),
            ("max_bonus_per_trial", self.max_bonus_per_trial),
            ("bonus_scale", self.bonus_scale),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ScoringConfigError::InvalidValue { field, value });
            }
        }
        Ok(())
    }

    /// Penalty for steering away from the ideal target: `k1 * (allocation - 1)^2`.
    #[must_use]
    pub fn adaptation_loss(&self, allocation: Allocation) -> f64 {
        let distance = allocation.get() - 1.0;
        self.adaptation_weight * distance * distance
    }

    /// Penalty for ideal-leaning orders the fleet did not follow:
    /// `k2 * (fleet - compliant) * allocation^2`.
    #[must_use]
    pub fn coordination_loss(
        &self,
        fleet_size: FleetSize,
        units_compliant: u32,
        allocation: Allocation,
    ) -> f64 {
        let missed = f64::from(fleet_size.get().saturating_sub(units_compliant));
        self.coordination_weight * missed * allocation.get() * allocation.get()
    }

    /// Bonus for a total loss, clamped into `[0, max_bonus_per_trial]`.
    #[must_use]
    pub fn bonus_for_loss(&self, total_loss: f64) -> f64 {
        let raw = self.max_bonus_per_trial - self.bonus_scale * total_loss;
        raw.max(0.0).min(self.max_bonus_per_trial)
    }
}

/// Per-unit outcome of delivering the participant's order to the fleet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FleetAssignment {
    /// Units the participant intended to send at the ideal target.
    pub intended_to_ideal: u32,
    /// Units the participant intended to leave on the standard target.
    pub intended_to_standard: u32,
    /// Units that received the order.
    pub units_compliant: u32,
    /// Units that engaged the ideal target.
    pub units_to_ideal: u32,
    /// Units that engaged the standard target.
    pub units_to_standard: u32,
}

/// Simulates order delivery for every unit of the fleet.
///
/// Draws exactly one Bernoulli sample per unit from `rng`.
pub fn assign_fleet<R>(
    fleet_size: FleetSize,
    allocation: Allocation,
    message_probability: MessageProbability,
    rng: &mut R,
) -> FleetAssignment
where
    R: Rng + ?Sized,
{
    let fleet = fleet_size.get();
    let intended_to_ideal = ((f64::from(fleet) * allocation.get()).round() as u32).min(fleet);
    let mut assignment = FleetAssignment {
        intended_to_ideal,
        intended_to_standard: fleet - intended_to_ideal,
        units_compliant: 0,
        units_to_ideal: 0,
        units_to_standard: 0,
    };

    for _ in 0..fleet {
        if rng.gen_bool(message_probability.get()) {
            assignment.units_compliant += 1;
            if assignment.units_to_ideal < intended_to_ideal {
                assignment.units_to_ideal += 1;
            } else {
                assignment.units_to_standard += 1;
            }
        } else {
            assignment.units_to_standard += 1;
        }
    }
    assignment
}

/// Pure system that turns a participant allocation into a [`TrialResult`].
#[derive(Clone, Debug, Default)]
pub struct TrialScorer {
    config: ScoringConfig,
}

impl TrialScorer {
    /// Creates a scorer after validating the configuration.
    pub fn new(config: ScoringConfig) -> Result<Self, ScoringConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Configuration used for scoring.
    #[must_use]
    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Scores one trial.
    ///
    /// Out-of-range allocations are clamped into `[0, 1]`; NaN counts as the
    /// standard target.
    pub fn score<R>(&self, trial: &TrialSpec, allocation: f64, rng: &mut R) -> TrialResult
    where
        R: Rng + ?Sized,
    {
        let allocation = Allocation::clamped(allocation);
        let fleet_size = trial.fleet_size();
        let assignment = assign_fleet(fleet_size, allocation, trial.message_probability(), rng);

        let adaptation_loss = self.config.adaptation_loss(allocation);
        let coordination_loss =
            self.config
                .coordination_loss(fleet_size, assignment.units_compliant, allocation);
        let bonus = self.config.bonus_for_loss(adaptation_loss + coordination_loss);

        tracing::debug!(
            trial = trial.id().get(),
            allocation = allocation.get(),
            compliant = assignment.units_compliant,
            fleet = fleet_size.get(),
            adaptation_loss,
            coordination_loss,
            bonus,
            "trial scored"
        );

        TrialResult {
            trial: trial.id(),
            allocation,
            fleet_size,
            intended_to_ideal: assignment.intended_to_ideal,
            intended_to_standard: assignment.intended_to_standard,
            units_compliant: assignment.units_compliant,
            units_to_ideal: assignment.units_to_ideal,
            units_to_standard: assignment.units_to_standard,
            adaptation_loss,
            coordination_loss,
            bonus,
        }
    }
}
