use exobound_core::{
    FleetSize, MessageProbability, RaiderKind, TrialId, TrialParameters, TrialSpec, WaveId,
    WaveKind,
};
use exobound_system_scoring::{ScoringConfig, TrialScorer};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn trial(ideal_size: u32, fleet: u32, probability: f64) -> TrialSpec {
    let probability = MessageProbability::new(probability).expect("probability");
    trial_with(ideal_size, fleet, probability)
}

fn trial_with(ideal_size: u32, fleet: u32, message_probability: MessageProbability) -> TrialSpec {
    TrialSpec::Wave {
        id: TrialId::new(17),
        wave: WaveId::new(4),
        wave_kind: WaveKind::Randomized,
        parameters: TrialParameters {
            ideal_size,
            standard_size: 100,
            fleet_size: FleetSize::new(fleet).expect("non-zero fleet"),
            message_probability,
            raider: RaiderKind::Green,
        },
    }
}

#[test]
fn unreachable_fleet_defaults_to_standard_target() {
    let scorer = TrialScorer::default();
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let result = scorer.score(&trial_with(120, 3, MessageProbability::NEVER), 1.0, &mut rng);

    assert_eq!(result.intended_to_ideal, 3);
    assert_eq!(result.units_compliant, 0);
    assert_eq!(result.units_to_ideal, 0);
    assert_eq!(result.units_to_standard, 3);
    assert_eq!(result.adaptation_loss, 0.0);
    assert!((result.coordination_loss - 500.0 * 3.0).abs() < 1e-9);
    assert_eq!(result.bonus, 0.0);
}

#[test]
fn perfect_reception_matches_intended_split() {
    let scorer = TrialScorer::default();
    let mut rng = ChaCha8Rng::seed_from_u64(12);
    let result = scorer.score(&trial(80, 6, 1.0), 0.5, &mut rng);

    assert_eq!(result.intended_to_ideal, 3);
    assert_eq!(result.intended_to_standard, 3);
    assert_eq!(result.units_compliant, 6);
    assert_eq!(result.units_to_ideal, 3);
    assert_eq!(result.units_to_standard, 3);
    assert_eq!(result.coordination_loss, 0.0);
    assert!((result.adaptation_loss - 250.0).abs() < 1e-9);
}

#[test]
fn zero_probability_never_reaches_ideal_target() {
    let scorer = TrialScorer::default();
    for seed in 0..25 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        for allocation in [0.0, 0.2, 0.5, 0.8, 1.0] {
            let result = scorer.score(
                &trial_with(60, 9, MessageProbability::NEVER),
                allocation,
                &mut rng,
            );
            assert_eq!(result.units_compliant, 0);
            assert_eq!(result.units_to_ideal, 0);
            assert_eq!(result.units_to_standard, 9);
        }
    }
}

#[test]
fn certain_probability_always_matches_intent() {
    let scorer = TrialScorer::default();
    for seed in 0..25 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        for allocation in [0.0, 0.1, 0.34, 0.5, 0.67, 1.0] {
            let result = scorer.score(&trial(140, 9, 1.0), allocation, &mut rng);
            assert_eq!(result.units_compliant, 9);
            assert_eq!(result.units_to_ideal, result.intended_to_ideal);
            assert_eq!(result.units_to_standard, result.intended_to_standard);
            assert_eq!(result.coordination_loss, 0.0);
        }
    }
}

#[test]
fn partial_reception_conserves_units() {
    let scorer = TrialScorer::default();
    for seed in 0..50 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let result = scorer.score(&trial(130, 6, 0.5), 0.7, &mut rng);
        assert_eq!(result.units_to_ideal + result.units_to_standard, 6);
        assert!(result.units_compliant <= 6);
        assert!(result.units_to_ideal <= result.intended_to_ideal);
        assert!(result.units_to_ideal <= result.units_compliant);
    }
}

#[test]
fn bonus_never_increases_with_loss_and_stays_in_range() {
    let config = ScoringConfig::default();
    let max = config.max_bonus_per_trial;
    let mut previous = f64::INFINITY;
    for step in 0..=400 {
        let loss = f64::from(step) * 2.5;
        let bonus = config.bonus_for_loss(loss);
        assert!((0.0..=max).contains(&bonus), "bonus {bonus} out of range");
        assert!(bonus <= previous, "bonus rose from {previous} to {bonus}");
        previous = bonus;
    }

    let scorer = TrialScorer::default();
    for seed in 0..50 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let result = scorer.score(&trial(70, 3, 0.75), 0.9, &mut rng);
        assert!((0.0..=max).contains(&result.bonus));
        assert!((result.bonus - config.bonus_for_loss(result.total_loss())).abs() < 1e-12);
    }
}

#[test]
fn same_seed_scores_identically() {
    let scorer = TrialScorer::default();
    let spec = trial(120, 9, 0.5);
    let first = scorer.score(&spec, 0.6, &mut ChaCha8Rng::seed_from_u64(77));
    let second = scorer.score(&spec, 0.6, &mut ChaCha8Rng::seed_from_u64(77));
    assert_eq!(first, second);
}

#[test]
fn out_of_range_allocations_are_clamped() {
    let scorer = TrialScorer::default();
    let spec = trial(80, 3, 1.0);
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    let high = scorer.score(&spec, 3.5, &mut rng);
    assert_eq!(high.allocation.get(), 1.0);
    assert_eq!(high.units_to_ideal, 3);

    let low = scorer.score(&spec, -2.0, &mut rng);
    assert_eq!(low.allocation.get(), 0.0);
    assert_eq!(low.units_to_standard, 3);
    assert!((low.adaptation_loss - 1_000.0).abs() < 1e-9);

    let missing = scorer.score(&spec, f64::NAN, &mut rng);
    assert_eq!(missing.allocation.get(), 0.0);
}

#[test]
fn custom_weights_change_losses() {
    let scorer = TrialScorer::new(ScoringConfig {
        adaptation_weight: 10.0,
        coordination_weight: 20.0,
        max_bonus_per_trial: 1.0,
        bonus_scale: 0.01,
    })
    .expect("valid config");
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let result = scorer.score(&trial(120, 3, 0.0), 0.5, &mut rng);
    assert!((result.adaptation_loss - 2.5).abs() < 1e-12);
    assert!((result.coordination_loss - 15.0).abs() < 1e-12);
    assert!((result.bonus - (1.0 - 0.175)).abs() < 1e-12);
}
