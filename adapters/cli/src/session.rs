use anyhow::{bail, Result};
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use exobound_campaign::{apply, query, CampaignState};
use exobound_core::{
    CampaignSummary, Command, Event, ExportRow, PerformanceProfile, TrialSpec, WaveReport,
};
use exobound_system_analytics::Analytics;
use exobound_system_campaign_generation::CampaignGenerator;
use exobound_system_scoring::TrialScorer;
use rand::Rng;
use serde::Serialize;

use crate::config::ExperimentConfig;

/// Scripted participant used to drive headless sessions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum Policy {
    /// Always commits the whole fleet to the ideal target.
    Ideal,
    /// Always keeps the whole fleet on the standard target.
    Standard,
    /// Splits the fleet evenly.
    Balanced,
    /// Leans towards the ideal target as far as the comms integrity allows.
    Reception,
    /// Picks a uniformly random allocation.
    Random,
}

impl Policy {
    fn allocation<R>(self, trial: &TrialSpec, rng: &mut R) -> f64
    where
        R: Rng + ?Sized,
    {
        match self {
            Self::Ideal => 1.0,
            Self::Standard => 0.0,
            Self::Balanced => 0.5,
            Self::Reception => trial.message_probability().get(),
            Self::Random => rng.gen(),
        }
    }
}

/// Result of a complete headless session.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub(crate) struct SessionReport {
    /// Aggregate statistics over the whole history.
    pub(crate) summary: CampaignSummary,
    /// Participant profile after the final trial.
    pub(crate) profile: Option<PerformanceProfile>,
    /// Assessment of every completed wave.
    pub(crate) waves: Vec<WaveReport>,
    /// Flattened history in completion order.
    #[serde(skip)]
    pub(crate) rows: Vec<ExportRow>,
}

/// Generates a campaign and plays it to completion with the scripted policy.
///
/// `clock` stamps every recorded result; the whole session draws from `rng`.
pub(crate) fn run_session<R, C>(
    config: &ExperimentConfig,
    policy: Policy,
    rng: &mut R,
    mut clock: C,
) -> Result<SessionReport>
where
    R: Rng + ?Sized,
    C: FnMut() -> DateTime<Utc>,
{
    let trials = CampaignGenerator::new(config.campaign.clone()).generate(rng)?;
    let scorer = TrialScorer::new(config.scoring.clone())?;
    let mut analytics = Analytics::new(scorer.config().max_bonus_per_trial);
    let mut state = CampaignState::new();

    let mut events = Vec::new();
    apply(&mut state, Command::LoadCampaign { trials }, &mut events);
    ensure_accepted(&events)?;
    tracing::info!(
        trials = query::trials(&state).len(),
        ?policy,
        "session started"
    );

    while let Some(trial) = query::current_trial(&state).copied() {
        let allocation = policy.allocation(&trial, rng);
        let result = scorer.score(&trial, allocation, rng);

        events.clear();
        apply(
            &mut state,
            Command::RecordResult {
                result,
                recorded_at: clock(),
            },
            &mut events,
        );
        ensure_accepted(&events)?;

        let mut published = Vec::new();
        analytics.handle(
            &events,
            query::history(&state),
            |wave| query::wave_summary(&state, wave),
            &mut published,
        );

        events.clear();
        apply(&mut state, Command::AdvanceTrial, &mut events);
        ensure_accepted(&events)?;
    }

    let summary = query::summary(&state);
    tracing::info!(
        completed = summary.trials_completed,
        cumulative_bonus = summary.cumulative_bonus,
        "session finished"
    );
    Ok(SessionReport {
        summary,
        profile: analytics.last_profile().copied(),
        waves: analytics.wave_reports().to_vec(),
        rows: state.export_rows(),
    })
}

fn ensure_accepted(events: &[Event]) -> Result<()> {
    for event in events {
        if let Event::CommandRejected { reason } = event {
            bail!("campaign ledger rejected a session command: {reason}");
        }
    }
    Ok(())
}
