#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative campaign ledger for a single EXOBOUND session.
//!
//! The ledger owns the ordered trial list, the pointer to the active trial,
//! the append-only result history and the running bonus. It is created empty,
//! loaded exactly once with the generated campaign and then mutated only
//! through [`apply`] (or the equivalent methods on [`CampaignState`]).

mod summary;

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use exobound_core::{
    CampaignSummary, Command, Event, ExportRow, SequenceError, TrialBriefing, TrialId,
    TrialRecord, TrialResult, TrialSpec, WaveId, WavePosition, WaveSummary,
};

/// Ledger tracking trial sequencing and recorded results for one participant.
#[derive(Clone, Debug, Default)]
pub struct CampaignState {
    trials: Vec<TrialSpec>,
    loaded: bool,
    current_index: usize,
    history: Vec<TrialRecord>,
    cumulative_bonus: f64,
}

impl CampaignState {
    /// Creates an empty ledger awaiting its campaign.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Populates the ledger with the generated campaign.
    ///
    /// Trials are fixed after loading; a second call is rejected, as is a list that
    /// repeats a trial identifier.
    pub fn load(&mut self, trials: Vec<TrialSpec>) -> Result<(), SequenceError> {
        if self.loaded {
            return Err(SequenceError::AlreadyLoaded);
        }
        let mut seen = HashSet::with_capacity(trials.len());
        if let Some(repeated) = trials.iter().find(|trial| !seen.insert(trial.id())) {
            return Err(SequenceError::DuplicateTrial {
                trial: repeated.id(),
            });
        }
        self.trials = trials;
        self.loaded = true;
        self.current_index = 0;
        Ok(())
    }

    /// Reports whether a campaign has been loaded.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Ordered trials of the campaign.
    #[must_use]
    pub fn trials(&self) -> &[TrialSpec] {
        &self.trials
    }

    /// Zero-based pointer to the active trial.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Trial awaiting a participant allocation, or `None` once exhausted.
    #[must_use]
    pub fn current(&self) -> Option<&TrialSpec> {
        self.trials.get(self.current_index)
    }

    /// Recorded results in completion order.
    #[must_use]
    pub fn history(&self) -> &[TrialRecord] {
        &self.history
    }

    /// Sum of every recorded bonus.
    #[must_use]
    pub fn cumulative_bonus(&self) -> f64 {
        self.cumulative_bonus
    }

    /// Reports whether the history already holds a result for the trial.
    #[must_use]
    pub fn is_recorded(&self, trial: TrialId) -> bool {
        self.history.iter().any(|record| record.trial.id() == trial)
    }

    /// Reports whether every trial of a loaded campaign has a recorded result.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.loaded && self.history.len() == self.trials.len()
    }

    /// Moves to the next trial and returns it, or `None` once the campaign is exhausted.
    ///
    /// The pointer only moves past a trial whose result is recorded, so it advances by
    /// exactly one per completed trial.
    pub fn advance(&mut self) -> Result<Option<&TrialSpec>, SequenceError> {
        if !self.loaded {
            return Err(SequenceError::NotLoaded);
        }
        let Some(current) = self.current() else {
            return Err(SequenceError::CampaignExhausted);
        };
        let trial = current.id();
        if !self.is_recorded(trial) {
            return Err(SequenceError::TrialIncomplete { trial });
        }

        self.current_index += 1;
        Ok(self.current())
    }

    /// Appends the result of the active trial to the history.
    ///
    /// Results for any trial other than the active one, and repeated results for the
    /// same trial, are rejected without touching the ledger.
    pub fn record_result(
        &mut self,
        result: TrialResult,
        recorded_at: DateTime<Utc>,
    ) -> Result<&TrialRecord, SequenceError> {
        if !self.loaded {
            return Err(SequenceError::NotLoaded);
        }
        if self.is_recorded(result.trial) {
            return Err(SequenceError::DuplicateResult {
                trial: result.trial,
            });
        }
        let active = self.current().copied();
        let trial = match active {
            Some(trial) if trial.id() == result.trial => trial,
            _ => {
                return Err(SequenceError::TrialNotActive {
                    active: active.map(|trial| trial.id()),
                    found: result.trial,
                })
            }
        };

        self.cumulative_bonus += result.bonus;
        self.history.push(TrialRecord {
            trial,
            result,
            recorded_at,
        });
        let index = self.history.len() - 1;
        Ok(&self.history[index])
    }

    /// Aggregates the whole history.
    #[must_use]
    pub fn summary(&self) -> CampaignSummary {
        summary::campaign(self)
    }

    /// Aggregates the recorded trials of one wave, or `None` when the wave has no trials.
    #[must_use]
    pub fn wave_summary(&self, wave: WaveId) -> Option<WaveSummary> {
        summary::wave(self, wave)
    }

    /// Placement of the active trial within its wave.
    #[must_use]
    pub fn wave_position(&self) -> Option<WavePosition> {
        let current = self.current()?;
        let wave = current.wave();
        let mut trials_in_wave = 0;
        let mut trial_in_wave = 0;
        for trial in self.trials.iter().filter(|trial| trial.wave() == wave) {
            trials_in_wave += 1;
            if trial.id() == current.id() {
                trial_in_wave = trials_in_wave;
            }
        }
        Some(WavePosition {
            wave,
            trial_in_wave,
            trials_in_wave,
        })
    }

    /// Structured briefing for the active trial.
    #[must_use]
    pub fn briefing(&self) -> Option<TrialBriefing> {
        let current = self.current()?;
        let position = self.wave_position()?;
        Some(TrialBriefing {
            trial: current.id(),
            position,
            fleet_size: current.fleet_size().get(),
            reception_percent: current.message_probability().percent(),
            is_tutorial: current.is_tutorial(),
        })
    }

    /// Flattens the history into export rows in completion order.
    #[must_use]
    pub fn export_rows(&self) -> Vec<ExportRow> {
        self.history.iter().map(TrialRecord::export_row).collect()
    }
}

/// Applies the provided command to the ledger, reporting the outcome as events.
///
/// Rejected commands leave the ledger untouched and emit
/// [`Event::CommandRejected`].
pub fn apply(state: &mut CampaignState, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::LoadCampaign { trials } => match state.load(trials) {
            Ok(()) => {
                tracing::debug!(trials = state.trials.len(), "campaign loaded");
                out_events.push(Event::CampaignLoaded {
                    trial_count: state.trials.len(),
                });
                push_activation(state.current(), out_events);
            }
            Err(reason) => reject(reason, out_events),
        },
        Command::RecordResult {
            result,
            recorded_at,
        } => match state.record_result(result, recorded_at) {
            Ok(record) => {
                let trial = record.trial;
                let bonus = record.result.bonus;
                tracing::debug!(
                    trial = trial.id().get(),
                    allocation = record.result.allocation.get(),
                    bonus,
                    "trial result recorded"
                );
                out_events.push(Event::ResultRecorded {
                    trial: trial.id(),
                    bonus,
                    cumulative_bonus: state.cumulative_bonus,
                });
                if state
                    .wave_summary(trial.wave())
                    .is_some_and(|summary| summary.complete)
                {
                    tracing::info!(wave = trial.wave().get(), "wave completed");
                    out_events.push(Event::WaveCompleted { wave: trial.wave() });
                }
            }
            Err(reason) => reject(reason, out_events),
        },
        Command::AdvanceTrial => match state.advance() {
            Ok(next) => push_activation(next, out_events),
            Err(reason) => reject(reason, out_events),
        },
    }
}

fn push_activation(trial: Option<&TrialSpec>, out_events: &mut Vec<Event>) {
    match trial {
        Some(trial) => out_events.push(Event::TrialActivated {
            trial: trial.id(),
            wave: trial.wave(),
        }),
        None => out_events.push(Event::CampaignExhausted),
    }
}

fn reject(reason: SequenceError, out_events: &mut Vec<Event>) {
    tracing::warn!(%reason, "campaign command rejected");
    out_events.push(Event::CommandRejected { reason });
}

/// Query functions that provide read-only access to the ledger.
pub mod query {
    use exobound_core::{
        CampaignSummary, TrialBriefing, TrialRecord, TrialSpec, WaveId, WavePosition,
        WaveSummary,
    };

    use super::CampaignState;

    /// Trial awaiting a participant allocation.
    #[must_use]
    pub fn current_trial(state: &CampaignState) -> Option<&TrialSpec> {
        state.current()
    }

    /// Ordered trials of the campaign.
    #[must_use]
    pub fn trials(state: &CampaignState) -> &[TrialSpec] {
        state.trials()
    }

    /// Recorded results in completion order.
    #[must_use]
    pub fn history(state: &CampaignState) -> &[TrialRecord] {
        state.history()
    }

    /// Aggregate statistics over the whole history.
    #[must_use]
    pub fn summary(state: &CampaignState) -> CampaignSummary {
        state.summary()
    }

    /// Aggregate statistics over one wave.
    #[must_use]
    pub fn wave_summary(state: &CampaignState, wave: WaveId) -> Option<WaveSummary> {
        state.wave_summary(wave)
    }

    /// Placement of the active trial within its wave.
    #[must_use]
    pub fn wave_position(state: &CampaignState) -> Option<WavePosition> {
        state.wave_position()
    }

    /// Structured briefing for the active trial.
    #[must_use]
    pub fn briefing(state: &CampaignState) -> Option<TrialBriefing> {
        state.briefing()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exobound_core::{
        Allocation, FleetSize, MessageProbability, RaiderKind, TrialParameters, WaveKind,
    };

    fn wave_trial(id: u32, wave: u32) -> TrialSpec {
        TrialSpec::Wave {
            id: TrialId::new(id),
            wave: WaveId::new(wave),
            wave_kind: WaveKind::Randomized,
            parameters: TrialParameters {
                ideal_size: 120,
                standard_size: 100,
                fleet_size: FleetSize::new(3).expect("fleet"),
                message_probability: MessageProbability::CERTAIN,
                raider: RaiderKind::Green,
            },
        }
    }

    fn result_for(id: u32, bonus: f64) -> TrialResult {
        TrialResult {
            trial: TrialId::new(id),
            allocation: Allocation::IDEAL,
            fleet_size: FleetSize::new(3).expect("fleet"),
            intended_to_ideal: 3,
            intended_to_standard: 0,
            units_compliant: 3,
            units_to_ideal: 3,
            units_to_standard: 0,
            adaptation_loss: 0.0,
            coordination_loss: 0.0,
            bonus,
        }
    }

    #[test]
    fn wave_position_counts_presentation_order() {
        let mut state = CampaignState::new();
        state
            .load(vec![wave_trial(3, 1), wave_trial(1, 1), wave_trial(2, 1)])
            .expect("load");
        assert_eq!(
            state.wave_position(),
            Some(WavePosition {
                wave: WaveId::new(1),
                trial_in_wave: 1,
                trials_in_wave: 3,
            })
        );

        let _ = state.record_result(result_for(3, 0.1), Utc::now()).expect("record");
        let _ = state.advance().expect("advance");
        let _ = state.record_result(result_for(1, 0.1), Utc::now()).expect("record");
        let _ = state.advance().expect("advance");
        let position = state.wave_position().expect("position");
        assert_eq!(position.trial_in_wave, 3);
        assert!(position.is_last_in_wave());
    }

    #[test]
    fn record_result_tracks_cumulative_bonus() {
        let mut state = CampaignState::new();
        state.load(vec![wave_trial(1, 1), wave_trial(2, 1)]).expect("load");
        let _ = state.record_result(result_for(1, 0.05), Utc::now()).expect("record");
        let _ = state.advance().expect("advance");
        let _ = state.record_result(result_for(2, 0.03), Utc::now()).expect("record");
        assert!((state.cumulative_bonus() - 0.08).abs() < 1e-12);
        assert!(state.is_complete());
    }
}
