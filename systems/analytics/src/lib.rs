#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deterministic analytics system that tracks participant performance.

mod metrics;

use exobound_core::{Event, PerformanceProfile, TrialRecord, WaveId, WaveReport, WaveSummary};

pub use metrics::{
    normalized_adaptation_loss, normalized_coordination_loss, performance_profile, stance_for,
    standing_for, wave_rating, wave_report,
};

/// Tuning knobs for the performance profile and the wave assessment.
#[derive(Clone, Debug, PartialEq)]
pub struct AnalyticsTuning {
    /// Number of most recent trials the profile is computed over.
    pub window: usize,
    /// Normalised loss below which a trial counts as adapted or coordinated.
    pub success_threshold: f64,
    /// Rate difference beyond which the stance leans to one side.
    pub stance_margin: f64,
    /// Bonus ceiling used to express wave bonus efficiency.
    pub max_bonus_per_trial: f64,
}

impl Default for AnalyticsTuning {
    fn default() -> Self {
        Self {
            window: 5,
            success_threshold: 0.3,
            stance_margin: 0.2,
            max_bonus_per_trial: 5.0 / 45.0,
        }
    }
}

/// Pure analytics system that reacts to ledger events.
#[derive(Debug, Default)]
pub struct Analytics {
    tuning: AnalyticsTuning,
    last_profile: Option<PerformanceProfile>,
    wave_reports: Vec<WaveReport>,
}

impl Analytics {
    /// Creates an analytics system that rates waves against the provided bonus ceiling.
    #[must_use]
    pub fn new(max_bonus_per_trial: f64) -> Self {
        Self::with_tuning(AnalyticsTuning {
            max_bonus_per_trial,
            ..AnalyticsTuning::default()
        })
    }

    /// Creates an analytics system with explicit tuning.
    #[must_use]
    pub fn with_tuning(tuning: AnalyticsTuning) -> Self {
        Self {
            tuning,
            last_profile: None,
            wave_reports: Vec::new(),
        }
    }

    /// Tuning in use.
    #[must_use]
    pub fn tuning(&self) -> &AnalyticsTuning {
        &self.tuning
    }

    /// Returns the last profile published by the system, if any.
    #[must_use]
    pub fn last_profile(&self) -> Option<&PerformanceProfile> {
        self.last_profile.as_ref()
    }

    /// Wave assessments published so far, in completion order.
    #[must_use]
    pub fn wave_reports(&self) -> &[WaveReport] {
        &self.wave_reports
    }

    /// Consumes ledger events and publishes analytics updates.
    ///
    /// Any number of `ResultRecorded` events in one batch yields a single
    /// refreshed profile computed from `history`. Every `WaveCompleted` event
    /// asks `wave_summary` for the finished wave and publishes its assessment.
    pub fn handle<F>(
        &mut self,
        events: &[Event],
        history: &[TrialRecord],
        mut wave_summary: F,
        out: &mut Vec<Event>,
    ) where
        F: FnMut(WaveId) -> Option<WaveSummary>,
    {
        if events
            .iter()
            .any(|event| matches!(event, Event::ResultRecorded { .. }))
        {
            let profile = performance_profile(history, &self.tuning);
            tracing::debug!(
                adaptation_rate = profile.adaptation_rate,
                coordination_rate = profile.coordination_rate,
                standing = ?profile.standing,
                "performance profile updated"
            );
            self.last_profile = Some(profile);
            out.push(Event::PerformanceUpdated { profile });
        }

        for event in events {
            let Event::WaveCompleted { wave } = event else {
                continue;
            };
            let Some(summary) = wave_summary(*wave) else {
                continue;
            };
            let report = wave_report(summary, self.tuning.max_bonus_per_trial);
            tracing::info!(
                wave = wave.get(),
                success_rate = report.success_rate_percent,
                efficiency = report.bonus_efficiency_percent,
                rating = ?report.rating,
                "wave assessed"
            );
            self.wave_reports.push(report);
            out.push(Event::WaveAssessed { report });
        }
    }
}
