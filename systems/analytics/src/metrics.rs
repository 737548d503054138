use exobound_core::{
    PerformanceProfile, Stance, Standing, TrialRecord, TrialResult, WaveRating, WaveReport,
    WaveSummary,
};

use crate::AnalyticsTuning;

const LEGENDARY_SCORE: f64 = 0.8;
const RESPECTED_SCORE: f64 = 0.6;
const PROMISING_SCORE: f64 = 0.4;

/// Adaptation loss rescaled into `[0, 1]`: `(1 - allocation)^2`.
#[must_use]
pub fn normalized_adaptation_loss(result: &TrialResult) -> f64 {
    let distance = 1.0 - result.allocation.get();
    distance * distance
}

/// Coordination loss rescaled into `[0, 1]`:
/// the share of units that missed the order times the squared allocation.
#[must_use]
pub fn normalized_coordination_loss(result: &TrialResult) -> f64 {
    let missed_share =
        f64::from(result.units_non_compliant()) / f64::from(result.fleet_size.get());
    missed_share * result.allocation.get() * result.allocation.get()
}

/// Computes the rolling performance profile over the most recent records.
#[must_use]
pub fn performance_profile(history: &[TrialRecord], tuning: &AnalyticsTuning) -> PerformanceProfile {
    let recent = &history[history.len().saturating_sub(tuning.window)..];
    if recent.is_empty() {
        return PerformanceProfile {
            adaptation_rate: 0.5,
            coordination_rate: 0.5,
            overall_score: 0.5,
            standing: Standing::Unknown,
            stance: Stance::Neutral,
            recent_trials: 0,
            total_trials: history.len(),
        };
    }

    let share = |loss: fn(&TrialResult) -> f64| {
        let hits = recent
            .iter()
            .filter(|record| loss(&record.result) < tuning.success_threshold)
            .count();
        hits as f64 / recent.len() as f64
    };
    let adaptation_rate = share(normalized_adaptation_loss);
    let coordination_rate = share(normalized_coordination_loss);
    let overall_score = (adaptation_rate + coordination_rate) / 2.0;

    PerformanceProfile {
        adaptation_rate,
        coordination_rate,
        overall_score,
        standing: standing_for(overall_score),
        stance: stance_for(adaptation_rate, coordination_rate, tuning.stance_margin),
        recent_trials: recent.len(),
        total_trials: history.len(),
    }
}

/// Buckets an overall score into a standing.
#[must_use]
pub fn standing_for(overall_score: f64) -> Standing {
    if overall_score >= LEGENDARY_SCORE {
        Standing::Legendary
    } else if overall_score >= RESPECTED_SCORE {
        Standing::Respected
    } else if overall_score >= PROMISING_SCORE {
        Standing::Promising
    } else {
        Standing::Struggling
    }
}

/// Classifies the balance between the adaptation and coordination rates.
#[must_use]
pub fn stance_for(adaptation_rate: f64, coordination_rate: f64, margin: f64) -> Stance {
    if adaptation_rate - coordination_rate > margin {
        Stance::Innovator
    } else if coordination_rate - adaptation_rate > margin {
        Stance::Traditionalist
    } else {
        Stance::Balanced
    }
}

/// Assesses a completed wave against the per-trial bonus ceiling.
#[must_use]
pub fn wave_report(summary: WaveSummary, max_bonus_per_trial: f64) -> WaveReport {
    let success_rate_percent = if summary.completed_trials == 0 {
        0.0
    } else {
        summary.successful_trials as f64 / summary.completed_trials as f64 * 100.0
    };
    let bonus_efficiency_percent = if max_bonus_per_trial > 0.0 {
        summary.average_bonus / max_bonus_per_trial * 100.0
    } else {
        0.0
    };

    WaveReport {
        summary,
        success_rate_percent,
        bonus_efficiency_percent,
        rating: wave_rating(success_rate_percent, bonus_efficiency_percent),
    }
}

/// Rates a wave from its success rate and bonus efficiency, both in percent.
#[must_use]
pub fn wave_rating(success_rate_percent: f64, bonus_efficiency_percent: f64) -> WaveRating {
    let tiers = [
        (80.0, 70.0, WaveRating::Exceptional),
        (60.0, 50.0, WaveRating::Commendable),
        (40.0, 30.0, WaveRating::Adequate),
    ];
    for (success, efficiency, rating) in tiers {
        if success_rate_percent >= success && bonus_efficiency_percent >= efficiency {
            return rating;
        }
    }
    if success_rate_percent >= 20.0 {
        WaveRating::Concerning
    } else {
        WaveRating::Critical
    }
}
