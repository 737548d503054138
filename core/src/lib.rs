#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the EXOBOUND experiment engine.
//!
//! This crate defines the data surface that connects the campaign generator,
//! the trial scorer, the authoritative campaign ledger and the adapters.
//! Adapters submit [`Command`] values describing desired ledger mutations, the
//! ledger executes those commands via its `apply` entry point, and then
//! broadcasts [`Event`] values for systems to react to deterministically.
//! Every value that crosses a crate boundary is plain data and serializable so
//! the excluded presentation and persistence layers can consume it directly.

use std::{fmt, num::NonZeroU32};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Wave that hosts the single interactive tutorial trial.
pub const TUTORIAL_WAVE: WaveId = WaveId::new(0);

/// Identifier reserved for the tutorial trial.
pub const TUTORIAL_TRIAL: TrialId = TrialId::new(0);

/// Commands that express all permissible campaign ledger mutations.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Populates the ledger with the generated campaign. Accepted once per session.
    LoadCampaign {
        /// Ordered trials produced by the campaign generator.
        trials: Vec<TrialSpec>,
    },
    /// Appends a scored result for the active trial to the history.
    RecordResult {
        /// Outcome produced by the trial scorer.
        result: TrialResult,
        /// Wall-clock instant at which the participant completed the trial.
        recorded_at: DateTime<Utc>,
    },
    /// Moves the ledger on to the next trial once the active one is recorded.
    AdvanceTrial,
}

/// Events broadcast by the ledger and systems after processing commands.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// Confirms that the campaign trials were loaded into the ledger.
    CampaignLoaded {
        /// Number of trials contained in the campaign.
        trial_count: usize,
    },
    /// Announces the trial that is now awaiting a participant allocation.
    TrialActivated {
        /// Identifier of the newly active trial.
        trial: TrialId,
        /// Wave that owns the newly active trial.
        wave: WaveId,
    },
    /// Confirms that a trial result was appended to the history.
    ResultRecorded {
        /// Trial whose result was recorded.
        trial: TrialId,
        /// Bonus earned on the trial.
        bonus: f64,
        /// Running bonus total after the trial was recorded.
        cumulative_bonus: f64,
    },
    /// Announces that every trial belonging to a wave has a recorded result.
    WaveCompleted {
        /// Wave whose trials are all recorded.
        wave: WaveId,
    },
    /// Announces that the ledger moved past the final trial.
    CampaignExhausted,
    /// Reports that a command was rejected without mutating the ledger.
    CommandRejected {
        /// Specific sequencing violation that caused the rejection.
        reason: SequenceError,
    },
    /// Publishes a refreshed participant performance profile.
    PerformanceUpdated {
        /// Profile computed over the most recent trials.
        profile: PerformanceProfile,
    },
    /// Publishes the outcome assessment for a completed wave.
    WaveAssessed {
        /// Assessment derived from the wave summary.
        report: WaveReport,
    },
}

/// Reasons the campaign ledger rejects a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Error)]
pub enum SequenceError {
    /// The ledger already holds a campaign; trials are populated exactly once.
    #[error("campaign trials were already loaded")]
    AlreadyLoaded,
    /// No campaign has been loaded yet.
    #[error("no campaign has been loaded")]
    NotLoaded,
    /// The campaign lists the same trial identifier more than once.
    #[error("trial {trial} appears more than once in the campaign")]
    DuplicateTrial {
        /// Repeated trial identifier.
        trial: TrialId,
    },
    /// The result references a trial other than the active one.
    #[error("trial {found} is not the active trial")]
    TrialNotActive {
        /// Trial that is currently active, if any.
        active: Option<TrialId>,
        /// Trial referenced by the rejected result.
        found: TrialId,
    },
    /// A result for the trial already exists in the history.
    #[error("trial {trial} already has a recorded result")]
    DuplicateResult {
        /// Trial that was recorded twice.
        trial: TrialId,
    },
    /// The active trial cannot be left before its result is recorded.
    #[error("trial {trial} has no recorded result yet")]
    TrialIncomplete {
        /// Trial still awaiting its result.
        trial: TrialId,
    },
    /// The ledger already moved past the final trial.
    #[error("the campaign has no remaining trials")]
    CampaignExhausted,
}

/// Unique sequence number assigned to a trial in generation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TrialId(u32);

impl TrialId {
    /// Creates a new trial identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for TrialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Index of a wave within the campaign; 0 is the tutorial wave.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WaveId(u32);

impl WaveId {
    /// Creates a new wave identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for WaveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "wave {}", self.0)
    }
}

/// Number of cooperating units flying in a trial. Always strictly positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FleetSize(NonZeroU32);

impl FleetSize {
    /// Creates a fleet size, returning `None` for an empty fleet.
    #[must_use]
    pub const fn new(units: u32) -> Option<Self> {
        match NonZeroU32::new(units) {
            Some(units) => Some(Self(units)),
            None => None,
        }
    }

    /// Number of units in the fleet.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0.get()
    }
}

/// Probability that a single unit receives and follows the participant's order.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct MessageProbability(f64);

impl MessageProbability {
    /// Orders never reach any unit.
    pub const NEVER: Self = Self(0.0);
    /// Orders always reach every unit.
    pub const CERTAIN: Self = Self(1.0);

    /// Creates a probability, returning `None` unless the value is finite and within `[0, 1]`.
    #[must_use]
    pub fn new(value: f64) -> Option<Self> {
        (value.is_finite() && (0.0..=1.0).contains(&value)).then_some(Self(value))
    }

    /// Raw probability in `[0, 1]`.
    #[must_use]
    pub const fn get(&self) -> f64 {
        self.0
    }

    /// Probability expressed in basis points, used wherever exact equality matters.
    #[must_use]
    pub fn basis_points(&self) -> u32 {
        (self.0 * 10_000.0).round() as u32
    }

    /// Probability rounded to whole percent, the "comms integrity" shown to participants.
    #[must_use]
    pub fn percent(&self) -> u32 {
        (self.0 * 100.0).round() as u32
    }
}

impl TryFrom<f64> for MessageProbability {
    type Error = ProbabilityOutOfRange;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(ProbabilityOutOfRange(value))
    }
}

impl From<MessageProbability> for f64 {
    fn from(probability: MessageProbability) -> Self {
        probability.0
    }
}

/// Error returned when a raw value cannot be used as a [`MessageProbability`].
#[derive(Clone, Copy, Debug, PartialEq, Error)]
#[error("message probability {0} is outside [0, 1]")]
pub struct ProbabilityOutOfRange(pub f64);

/// Participant allocation between the standard (0) and the ideal (1) target.
///
/// Values are clamped into `[0, 1]` on construction and NaN collapses to the
/// standard target, so downstream scoring never observes an out-of-range
/// allocation.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Allocation(f64);

impl Allocation {
    /// Every unit assigned to the standard target.
    pub const STANDARD: Self = Self(0.0);
    /// Every unit assigned to the ideal target.
    pub const IDEAL: Self = Self(1.0);

    /// Creates an allocation, clamping the raw participant input into `[0, 1]`.
    #[must_use]
    pub fn clamped(value: f64) -> Self {
        if value.is_nan() {
            return Self::STANDARD;
        }
        // Adding positive zero folds a negative zero input onto +0.0.
        Self(value.clamp(0.0, 1.0) + 0.0)
    }

    /// Allocation share directed at the ideal target.
    #[must_use]
    pub const fn get(&self) -> f64 {
        self.0
    }

    /// Allocation share directed at the ideal target, in whole percent.
    #[must_use]
    pub fn percent_ideal(&self) -> u32 {
        (self.0 * 100.0).round() as u32
    }
}

impl From<f64> for Allocation {
    fn from(value: f64) -> Self {
        Self::clamped(value)
    }
}

impl From<Allocation> for f64 {
    fn from(allocation: Allocation) -> Self {
        allocation.0
    }
}

/// Cosmetic raider variant shown alongside a trial. Carries no scoring weight.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum RaiderKind {
    /// Red raider hull.
    Red,
    /// Blue raider hull.
    Blue,
    /// Green raider hull.
    Green,
}

impl RaiderKind {
    /// Every raider variant in canonical order.
    pub const ALL: [RaiderKind; 3] = [RaiderKind::Red, RaiderKind::Blue, RaiderKind::Green];

    /// Lowercase name used in exports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Green => "green",
        }
    }
}

impl fmt::Display for RaiderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Experimental parameters shared by tutorial and wave trials.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrialParameters {
    /// Size of the ideal target the participant should adapt to.
    pub ideal_size: u32,
    /// Size of the standard target the fleet defaults to.
    pub standard_size: u32,
    /// Number of cooperating units in the trial.
    pub fleet_size: FleetSize,
    /// Probability that each unit receives the participant's order.
    pub message_probability: MessageProbability,
    /// Cosmetic raider variant used for presentation only.
    pub raider: RaiderKind,
}

impl TrialParameters {
    /// Exact, hashable identity of the parameter tuple.
    #[must_use]
    pub fn combination_key(&self) -> CombinationKey {
        CombinationKey {
            ideal_size: self.ideal_size,
            standard_size: self.standard_size,
            fleet_size: self.fleet_size.get(),
            message_basis_points: self.message_probability.basis_points(),
            raider: self.raider,
        }
    }
}

/// Hashable identity of a [`TrialParameters`] tuple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CombinationKey {
    /// Ideal target size.
    pub ideal_size: u32,
    /// Standard target size.
    pub standard_size: u32,
    /// Fleet size in units.
    pub fleet_size: u32,
    /// Message probability in basis points.
    pub message_basis_points: u32,
    /// Cosmetic raider variant.
    pub raider: RaiderKind,
}

/// Role a non-tutorial wave plays in the campaign.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaveKind {
    /// Hand-authored learning curve presented in a fixed order.
    Staged,
    /// Sampled without replacement from the parameter grid and shuffled.
    Randomized,
}

/// Immutable description of one trial presented to the participant.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TrialSpec {
    /// Interactive onboarding trial with fixed parameters.
    Tutorial {
        /// Identifier of the trial.
        id: TrialId,
        /// Parameters presented during the tutorial.
        parameters: TrialParameters,
    },
    /// Trial belonging to a staged or randomized wave.
    Wave {
        /// Identifier of the trial.
        id: TrialId,
        /// Wave that owns the trial.
        wave: WaveId,
        /// Role of the owning wave.
        wave_kind: WaveKind,
        /// Parameters presented in the trial.
        parameters: TrialParameters,
    },
}

impl TrialSpec {
    /// Identifier of the trial.
    #[must_use]
    pub const fn id(&self) -> TrialId {
        match self {
            Self::Tutorial { id, .. } | Self::Wave { id, .. } => *id,
        }
    }

    /// Wave that owns the trial; the tutorial lives in [`TUTORIAL_WAVE`].
    #[must_use]
    pub const fn wave(&self) -> WaveId {
        match self {
            Self::Tutorial { .. } => TUTORIAL_WAVE,
            Self::Wave { wave, .. } => *wave,
        }
    }

    /// Role of the owning wave, or `None` for the tutorial.
    #[must_use]
    pub const fn wave_kind(&self) -> Option<WaveKind> {
        match self {
            Self::Tutorial { .. } => None,
            Self::Wave { wave_kind, .. } => Some(*wave_kind),
        }
    }

    /// Parameters presented in the trial.
    #[must_use]
    pub const fn parameters(&self) -> &TrialParameters {
        match self {
            Self::Tutorial { parameters, .. } | Self::Wave { parameters, .. } => parameters,
        }
    }

    /// Reports whether this is the onboarding trial.
    #[must_use]
    pub const fn is_tutorial(&self) -> bool {
        matches!(self, Self::Tutorial { .. })
    }

    /// Number of cooperating units in the trial.
    #[must_use]
    pub const fn fleet_size(&self) -> FleetSize {
        self.parameters().fleet_size
    }

    /// Probability that each unit receives the participant's order.
    #[must_use]
    pub const fn message_probability(&self) -> MessageProbability {
        self.parameters().message_probability
    }
}

/// Outcome of scoring one trial.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrialResult {
    /// Trial the result belongs to.
    pub trial: TrialId,
    /// Clamped participant allocation.
    pub allocation: Allocation,
    /// Number of units that flew in the trial.
    pub fleet_size: FleetSize,
    /// Units the participant intended to send at the ideal target.
    pub intended_to_ideal: u32,
    /// Units the participant intended to leave on the standard target.
    pub intended_to_standard: u32,
    /// Units that received the order and followed the intended split.
    pub units_compliant: u32,
    /// Units that ended up engaging the ideal target.
    pub units_to_ideal: u32,
    /// Units that ended up engaging the standard target.
    pub units_to_standard: u32,
    /// Penalty for the distance between the allocation and the ideal extreme.
    pub adaptation_loss: f64,
    /// Penalty for ideal-leaning allocations that units failed to follow.
    pub coordination_loss: f64,
    /// Bonus earned on the trial.
    pub bonus: f64,
}

impl TrialResult {
    /// Sum of the adaptation and coordination losses.
    #[must_use]
    pub fn total_loss(&self) -> f64 {
        self.adaptation_loss + self.coordination_loss
    }

    /// Units that missed the order and defaulted to the standard target.
    #[must_use]
    pub fn units_non_compliant(&self) -> u32 {
        self.fleet_size.get().saturating_sub(self.units_compliant)
    }
}

/// One entry of the campaign history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrialRecord {
    /// Trial that was presented.
    pub trial: TrialSpec,
    /// Scored outcome of the trial.
    pub result: TrialResult,
    /// Instant at which the result was recorded.
    pub recorded_at: DateTime<Utc>,
}

impl TrialRecord {
    /// Flattens the record into the row shape consumed by exporters.
    #[must_use]
    pub fn export_row(&self) -> ExportRow {
        let parameters = self.trial.parameters();
        ExportRow {
            trial_id: self.trial.id().get(),
            wave_id: self.trial.wave().get(),
            is_tutorial: self.trial.is_tutorial(),
            ideal_size: parameters.ideal_size,
            standard_size: parameters.standard_size,
            raider: parameters.raider,
            fleet_size: parameters.fleet_size.get(),
            message_probability: parameters.message_probability.get(),
            allocation: self.result.allocation.get(),
            units_compliant: self.result.units_compliant,
            units_to_ideal: self.result.units_to_ideal,
            units_to_standard: self.result.units_to_standard,
            adaptation_loss: self.result.adaptation_loss,
            coordination_loss: self.result.coordination_loss,
            total_loss: self.result.total_loss(),
            bonus: self.result.bonus,
            timestamp: self.recorded_at,
        }
    }
}

/// Flat history record handed to persistence collaborators.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExportRow {
    /// Trial identifier.
    pub trial_id: u32,
    /// Wave identifier.
    pub wave_id: u32,
    /// Whether the trial was the tutorial.
    pub is_tutorial: bool,
    /// Ideal target size.
    pub ideal_size: u32,
    /// Standard target size.
    pub standard_size: u32,
    /// Cosmetic raider variant.
    pub raider: RaiderKind,
    /// Units in the fleet.
    pub fleet_size: u32,
    /// Probability that each unit receives the order.
    pub message_probability: f64,
    /// Clamped participant allocation.
    pub allocation: f64,
    /// Units that received the order.
    pub units_compliant: u32,
    /// Units that engaged the ideal target.
    pub units_to_ideal: u32,
    /// Units that engaged the standard target.
    pub units_to_standard: u32,
    /// Adaptation loss.
    pub adaptation_loss: f64,
    /// Coordination loss.
    pub coordination_loss: f64,
    /// Sum of both losses.
    pub total_loss: f64,
    /// Bonus earned on the trial.
    pub bonus: f64,
    /// Instant at which the result was recorded.
    pub timestamp: DateTime<Utc>,
}

/// Aggregate statistics over the whole campaign history.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CampaignSummary {
    /// Trials contained in the campaign.
    pub total_trials: usize,
    /// Trials with a recorded result.
    pub trials_completed: usize,
    /// Sum of all recorded bonuses.
    pub cumulative_bonus: f64,
    /// Mean bonus per recorded trial, zero before the first result.
    pub average_bonus: f64,
    /// Sum of adaptation losses.
    pub total_adaptation_loss: f64,
    /// Sum of coordination losses.
    pub total_coordination_loss: f64,
    /// Mean adaptation loss per recorded trial.
    pub average_adaptation_loss: f64,
    /// Mean coordination loss per recorded trial.
    pub average_coordination_loss: f64,
    /// Whether every trial has a recorded result.
    pub complete: bool,
}

/// Aggregate statistics over the recorded trials of one wave.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WaveSummary {
    /// Wave being summarised.
    pub wave: WaveId,
    /// Trials that belong to the wave.
    pub total_trials: usize,
    /// Trials of the wave with a recorded result.
    pub completed_trials: usize,
    /// Recorded trials that earned a positive bonus.
    pub successful_trials: usize,
    /// Sum of bonuses earned in the wave.
    pub total_bonus: f64,
    /// Mean bonus per recorded trial of the wave.
    pub average_bonus: f64,
    /// Mean adaptation loss per recorded trial of the wave.
    pub average_adaptation_loss: f64,
    /// Mean coordination loss per recorded trial of the wave.
    pub average_coordination_loss: f64,
    /// Whether every trial of the wave has a recorded result.
    pub complete: bool,
}

/// Position of a trial inside its wave, counted from one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WavePosition {
    /// Wave that owns the trial.
    pub wave: WaveId,
    /// One-based presentation index of the trial within the wave.
    pub trial_in_wave: usize,
    /// Number of trials in the wave.
    pub trials_in_wave: usize,
}

impl WavePosition {
    /// Reports whether the trial is the final one presented in its wave.
    #[must_use]
    pub const fn is_last_in_wave(&self) -> bool {
        self.trial_in_wave == self.trials_in_wave
    }
}

/// Structured briefing data for the active trial.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialBriefing {
    /// Active trial.
    pub trial: TrialId,
    /// Placement of the trial inside its wave.
    pub position: WavePosition,
    /// Units under the participant's command.
    pub fleet_size: u32,
    /// Comms integrity shown to the participant, in whole percent.
    pub reception_percent: u32,
    /// Whether the trial is the tutorial.
    pub is_tutorial: bool,
}

/// Participant standing derived from recent performance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Standing {
    /// No trials have been recorded yet.
    Unknown,
    /// Overall score below the promising threshold.
    Struggling,
    /// Overall score of at least 0.4.
    Promising,
    /// Overall score of at least 0.6.
    Respected,
    /// Overall score of at least 0.8.
    Legendary,
}

/// Tactical leaning derived from the balance of adaptation and coordination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stance {
    /// No trials have been recorded yet.
    Neutral,
    /// Adaptation and coordination rates within 0.2 of each other.
    Balanced,
    /// Adapts to the ideal target noticeably more often than it coordinates.
    Innovator,
    /// Coordinates on the standard target noticeably more often than it adapts.
    Traditionalist,
}

/// Rolling summary of how the participant trades adaptation against coordination.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PerformanceProfile {
    /// Share of recent trials with a low normalised adaptation loss.
    pub adaptation_rate: f64,
    /// Share of recent trials with a low normalised coordination loss.
    pub coordination_rate: f64,
    /// Mean of the adaptation and coordination rates.
    pub overall_score: f64,
    /// Standing bucket for the overall score.
    pub standing: Standing,
    /// Tactical leaning.
    pub stance: Stance,
    /// Number of trials the rates were computed over.
    pub recent_trials: usize,
    /// Number of trials recorded in total.
    pub total_trials: usize,
}

/// Qualitative rating attached to a completed wave.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaveRating {
    /// Fewer than 20% of trials earned a bonus.
    Critical,
    /// At least 20% of trials earned a bonus.
    Concerning,
    /// At least 40% success with 30% bonus efficiency.
    Adequate,
    /// At least 60% success with 50% bonus efficiency.
    Commendable,
    /// At least 80% success with 70% bonus efficiency.
    Exceptional,
}

/// Outcome assessment published after a wave completes.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WaveReport {
    /// Summary the assessment was derived from.
    pub summary: WaveSummary,
    /// Share of recorded trials that earned a positive bonus, in percent.
    pub success_rate_percent: f64,
    /// Mean bonus relative to the per-trial maximum, in percent.
    pub bonus_efficiency_percent: f64,
    /// Qualitative rating.
    pub rating: WaveRating,
}
