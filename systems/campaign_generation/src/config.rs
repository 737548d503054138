//! Static campaign configuration with reference defaults.

use exobound_core::RaiderKind;
use serde::{Deserialize, Serialize};

/// Tunable description of the campaign a session is built from.
///
/// `Default` yields the reference EXOBOUND campaign: a tutorial, a five-trial
/// staged wave and nine randomized waves of five trials each.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CampaignConfig {
    /// Fixed parameters of the onboarding trial.
    pub tutorial: TutorialConfig,
    /// Hand-authored learning curve of wave 1, presented in this order.
    pub staged_wave: Vec<StagedTrialConfig>,
    /// Standard target size used throughout the staged wave.
    pub standard_size: u32,
    /// Raider variant shown during the staged wave.
    pub staged_raider: RaiderKind,
    /// Value pools whose cross-product feeds the randomized waves.
    pub pools: ParameterPools,
    /// Number of randomized waves following the staged wave.
    pub randomized_waves: u32,
    /// Trials per wave, shared by the staged and the randomized waves.
    pub trials_per_wave: u32,
}

impl Default for CampaignConfig {
    fn default() -> Self {
        Self {
            tutorial: TutorialConfig::default(),
            staged_wave: vec![
                StagedTrialConfig::new(70, 3, 1.0),
                StagedTrialConfig::new(80, 3, 0.75),
                StagedTrialConfig::new(90, 6, 0.5),
                StagedTrialConfig::new(120, 6, 0.25),
                StagedTrialConfig::new(130, 9, 0.5),
            ],
            standard_size: 100,
            staged_raider: RaiderKind::Blue,
            pools: ParameterPools::default(),
            randomized_waves: 9,
            trials_per_wave: 5,
        }
    }
}

impl CampaignConfig {
    /// Number of trials the randomized waves draw from the pools.
    #[must_use]
    pub fn randomized_trial_count(&self) -> usize {
        self.randomized_waves as usize * self.trials_per_wave as usize
    }

    /// Total number of trials in a generated campaign.
    #[must_use]
    pub fn total_trial_count(&self) -> usize {
        1 + self.staged_wave.len() + self.randomized_trial_count()
    }
}

/// Parameters of the interactive tutorial trial.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TutorialConfig {
    /// Ideal target size.
    pub ideal_size: u32,
    /// Standard target size.
    pub standard_size: u32,
    /// Units under the participant's command.
    pub fleet_size: u32,
    /// Probability that each unit receives the order.
    pub message_probability: f64,
    /// Raider variant shown during the tutorial.
    pub raider: RaiderKind,
}

impl Default for TutorialConfig {
    fn default() -> Self {
        Self {
            ideal_size: 80,
            standard_size: 100,
            fleet_size: 3,
            message_probability: 0.75,
            raider: RaiderKind::Red,
        }
    }
}

/// One step of the staged learning curve.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StagedTrialConfig {
    /// Ideal target size.
    pub ideal_size: u32,
    /// Units under the participant's command.
    pub fleet_size: u32,
    /// Probability that each unit receives the order.
    pub message_probability: f64,
}

impl StagedTrialConfig {
    /// Creates a staged step from its raw parameters.
    #[must_use]
    pub const fn new(ideal_size: u32, fleet_size: u32, message_probability: f64) -> Self {
        Self {
            ideal_size,
            fleet_size,
            message_probability,
        }
    }
}

/// Value pools sampled by the randomized waves.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParameterPools {
    /// Candidate ideal target sizes.
    pub ideal_sizes: Vec<u32>,
    /// Candidate standard target sizes.
    pub standard_sizes: Vec<u32>,
    /// Candidate fleet sizes.
    pub fleet_sizes: Vec<u32>,
    /// Candidate message probabilities.
    pub message_probabilities: Vec<f64>,
    /// Candidate raider variants.
    pub raiders: Vec<RaiderKind>,
}

impl Default for ParameterPools {
    fn default() -> Self {
        Self {
            ideal_sizes: vec![60, 70, 80, 120, 130, 140],
            standard_sizes: vec![100],
            fleet_sizes: vec![3, 6, 9],
            message_probabilities: vec![0.25, 0.5, 0.75, 1.0],
            raiders: RaiderKind::ALL.to_vec(),
        }
    }
}

impl ParameterPools {
    /// Size of the cross-product spanned by the pools.
    #[must_use]
    pub fn combination_count(&self) -> usize {
        self.ideal_sizes.len()
            * self.standard_sizes.len()
            * self.fleet_sizes.len()
            * self.message_probabilities.len()
            * self.raiders.len()
    }
}
