//! Read-only aggregation over the ledger history.

use exobound_core::{CampaignSummary, TrialRecord, WaveId, WaveSummary};

use crate::CampaignState;

/// Aggregates every recorded result.
pub(crate) fn campaign(state: &CampaignState) -> CampaignSummary {
    let history = state.history();
    let totals = Totals::over(history.iter());
    CampaignSummary {
        total_trials: state.trials().len(),
        trials_completed: history.len(),
        cumulative_bonus: state.cumulative_bonus(),
        average_bonus: mean(state.cumulative_bonus(), history.len()),
        total_adaptation_loss: totals.adaptation_loss,
        total_coordination_loss: totals.coordination_loss,
        average_adaptation_loss: mean(totals.adaptation_loss, history.len()),
        average_coordination_loss: mean(totals.coordination_loss, history.len()),
        complete: state.is_complete(),
    }
}

/// Aggregates the recorded results belonging to one wave.
pub(crate) fn wave(state: &CampaignState, wave: WaveId) -> Option<WaveSummary> {
    let total_trials = state
        .trials()
        .iter()
        .filter(|trial| trial.wave() == wave)
        .count();
    if total_trials == 0 {
        return None;
    }

    let totals = Totals::over(
        state
            .history()
            .iter()
            .filter(|record| record.trial.wave() == wave),
    );
    Some(WaveSummary {
        wave,
        total_trials,
        completed_trials: totals.count,
        successful_trials: totals.successful,
        total_bonus: totals.bonus,
        average_bonus: mean(totals.bonus, totals.count),
        average_adaptation_loss: mean(totals.adaptation_loss, totals.count),
        average_coordination_loss: mean(totals.coordination_loss, totals.count),
        complete: totals.count == total_trials,
    })
}

#[derive(Debug, Default)]
struct Totals {
    count: usize,
    successful: usize,
    bonus: f64,
    adaptation_loss: f64,
    coordination_loss: f64,
}

impl Totals {
    fn over<'a>(records: impl Iterator<Item = &'a TrialRecord>) -> Self {
        records.fold(Self::default(), |mut totals, record| {
            totals.count += 1;
            if record.result.bonus > 0.0 {
                totals.successful += 1;
            }
            totals.bonus += record.result.bonus;
            totals.adaptation_loss += record.result.adaptation_loss;
            totals.coordination_loss += record.result.coordination_loss;
            totals
        })
    }
}

fn mean(total: f64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        total / count as f64
    }
}
