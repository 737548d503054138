use std::collections::HashSet;

use exobound_core::{TrialSpec, WaveKind};
use exobound_system_campaign_generation::{
    session_seed, CampaignConfig, CampaignGenerator, GenerationError, StagedTrialConfig,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn generate(seed: u64) -> Vec<TrialSpec> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    CampaignGenerator::default()
        .generate(&mut rng)
        .expect("reference campaign generates")
}

#[test]
fn campaign_has_fifty_one_trials() {
    for seed in [0, 1, 42, 7_654_321] {
        let trials = generate(seed);
        assert_eq!(trials.len(), 51);
        assert_eq!(trials.iter().filter(|trial| trial.is_tutorial()).count(), 1);
        assert_eq!(
            trials
                .iter()
                .filter(|trial| trial.wave_kind() == Some(WaveKind::Staged))
                .count(),
            5
        );
        assert_eq!(
            trials
                .iter()
                .filter(|trial| trial.wave_kind() == Some(WaveKind::Randomized))
                .count(),
            45
        );
    }
}

#[test]
fn waves_are_presented_in_ascending_order() {
    for seed in 0..20 {
        let trials = generate(seed);
        let waves: Vec<u32> = trials.iter().map(|trial| trial.wave().get()).collect();
        assert!(
            waves.windows(2).all(|pair| pair[0] <= pair[1]),
            "seed {seed} produced out-of-order waves: {waves:?}"
        );
        assert_eq!(waves.first(), Some(&0));
        assert_eq!(waves.last(), Some(&10));
        for wave in 2..=10 {
            assert_eq!(waves.iter().filter(|&&id| id == wave).count(), 5);
        }
    }
}

#[test]
fn randomized_waves_never_repeat_a_combination() {
    for seed in 0..50 {
        let trials = generate(seed);
        let mut seen = HashSet::new();
        for trial in trials
            .iter()
            .filter(|trial| trial.wave_kind() == Some(WaveKind::Randomized))
        {
            assert!(
                seen.insert(trial.parameters().combination_key()),
                "seed {seed} repeated {:?}",
                trial.parameters()
            );
        }
        assert_eq!(seen.len(), 45);
    }
}

#[test]
fn trial_ids_are_unique_and_follow_generation_order_per_wave() {
    let trials = generate(99);
    let ids: HashSet<u32> = trials.iter().map(|trial| trial.id().get()).collect();
    assert_eq!(ids.len(), 51);
    assert_eq!(ids.iter().max(), Some(&50));

    for wave in 2..=10_u32 {
        let mut wave_ids: Vec<u32> = trials
            .iter()
            .filter(|trial| trial.wave().get() == wave)
            .map(|trial| trial.id().get())
            .collect();
        wave_ids.sort_unstable();
        let first = 6 + (wave - 2) * 5;
        assert_eq!(wave_ids, (first..first + 5).collect::<Vec<_>>());
    }
}

#[test]
fn staged_wave_keeps_authored_progression() {
    let staged: Vec<(u32, u32, u32)> = generate(5)
        .iter()
        .filter(|trial| trial.wave_kind() == Some(WaveKind::Staged))
        .map(|trial| {
            let parameters = trial.parameters();
            (
                parameters.ideal_size,
                parameters.fleet_size.get(),
                parameters.message_probability.basis_points(),
            )
        })
        .collect();
    assert_eq!(
        staged,
        vec![
            (70, 3, 10_000),
            (80, 3, 7_500),
            (90, 6, 5_000),
            (120, 6, 2_500),
            (130, 9, 5_000),
        ]
    );
}

#[test]
fn same_seed_replays_the_same_campaign() {
    assert_eq!(generate(1_234), generate(1_234));
    assert_ne!(generate(1_234), generate(1_235));

    let seed = session_seed("participant-7");
    assert_eq!(generate(seed), generate(seed));
}

#[test]
fn undersized_pools_abort_generation() {
    let mut config = CampaignConfig::default();
    config.pools.ideal_sizes = vec![60];
    config.pools.raiders.truncate(1);
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    assert_eq!(
        CampaignGenerator::new(config).generate(&mut rng),
        Err(GenerationError::InsufficientCombinations {
            required: 45,
            available: 12,
        })
    );
}

#[test]
fn zero_fleet_is_rejected_at_generation_time() {
    let mut config = CampaignConfig::default();
    config.staged_wave[2] = StagedTrialConfig::new(90, 0, 0.5);
    let error = CampaignGenerator::new(config)
        .staged_wave()
        .expect_err("zero fleet rejected");
    assert_eq!(
        error,
        GenerationError::NonPositiveFleetSize {
            context: "staged trial 3".to_owned(),
        }
    );

    let mut config = CampaignConfig::default();
    config.pools.fleet_sizes = vec![3, 0];
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    assert!(matches!(
        CampaignGenerator::new(config).randomized_waves(&mut rng),
        Err(GenerationError::NonPositiveFleetSize { .. })
    ));
}

#[test]
fn out_of_range_probability_is_rejected() {
    let mut config = CampaignConfig::default();
    config.tutorial.message_probability = 1.25;
    assert!(matches!(
        CampaignGenerator::new(config).tutorial_trial(),
        Err(GenerationError::InvalidMessageProbability { value, .. }) if value == 1.25
    ));
}

#[test]
fn wave_shape_must_match_staged_curve() {
    let mut config = CampaignConfig::default();
    config.trials_per_wave = 4;
    config.randomized_waves = 2;
    assert_eq!(
        CampaignGenerator::new(config).staged_wave(),
        Err(GenerationError::StagedWaveLength {
            expected: 4,
            found: 5,
        })
    );

    let mut config = CampaignConfig::default();
    config.trials_per_wave = 0;
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    assert_eq!(
        CampaignGenerator::new(config).generate(&mut rng),
        Err(GenerationError::ZeroWaveShape)
    );
}

#[test]
fn config_parses_from_toml_with_defaults() {
    let config: CampaignConfig = toml::from_str(
        r#"
        randomized_waves = 3

        [pools]
        ideal_sizes = [60, 140]
        "#,
    )
    .expect("campaign table parses");
    assert_eq!(config.randomized_waves, 3);
    assert_eq!(config.pools.ideal_sizes, vec![60, 140]);
    assert_eq!(config.pools.fleet_sizes, vec![3, 6, 9]);
    assert_eq!(config.staged_wave.len(), 5);
    assert_eq!(config.total_trial_count(), 21);

    let mut rng = ChaCha8Rng::seed_from_u64(8);
    let trials = CampaignGenerator::new(config)
        .generate(&mut rng)
        .expect("smaller campaign generates");
    assert_eq!(trials.len(), 21);
    assert_eq!(trials.last().map(|trial| trial.wave().get()), Some(4));

    assert!(toml::from_str::<CampaignConfig>("unknown_key = 1").is_err());
}
