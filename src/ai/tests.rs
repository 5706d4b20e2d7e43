//! AI domain: unit tests for the decision engine.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::behaviors::{Situation, action_window, choose_action, evaluate_state, humanize};
use super::components::{AiAction, AiBrain, AiProfile, AiState, Difficulty};
use super::resources::AiTuning;
use super::systems::{intent_for, reevaluation_triggered};
use crate::fighter::AttackKind;

fn situation(distance: f32, my_health: i32, their_health: i32) -> Situation {
    Situation {
        distance,
        my_health,
        their_health,
        health_ratio: my_health as f32 / (their_health.max(1)) as f32,
        target_attacking: false,
        target_running: false,
        target_hit: false,
        target_jumping: false,
        target_cooldown: 0,
        can_attack: true,
    }
}

#[test]
fn opens_in_pursuit_and_advances_from_spawn_distance() {
    let brain = AiBrain::new(Difficulty::Easy);
    assert_eq!(brain.state, AiState::Pursuit);

    let tuning = AiTuning {
        pursuit_jump_chance: 0.0,
        ..Default::default()
    };
    let sit = situation(600.0, 100, 100);

    for seed in 0..10 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        assert_eq!(
            evaluate_state(&brain, &sit, &tuning, &mut rng),
            AiState::Pursuit
        );

        let mut brain = AiBrain::new(Difficulty::Easy);
        let action = choose_action(&mut brain, &sit, &tuning, &mut rng);
        assert_eq!(action, AiAction::MoveForward);
    }

    // Advancing means moving toward the opponent, whichever side they're on.
    assert_eq!(intent_for(AiAction::MoveForward, 1.0).axis_x, 1.0);
    assert_eq!(intent_for(AiAction::MoveForward, -1.0).axis_x, -1.0);
    assert_eq!(intent_for(AiAction::MoveBack, 1.0).axis_x, -1.0);
}

#[test]
fn retreat_is_reachable_when_low_and_losing() {
    let brain = AiBrain::new(Difficulty::Easy);
    let tuning = AiTuning::default();
    let sit = situation(150.0, 20, 90);

    let mut retreats = 0;
    for seed in 0..200 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        if evaluate_state(&brain, &sit, &tuning, &mut rng) == AiState::Retreat {
            retreats += 1;
        }
    }
    assert!(retreats > 0, "retreat never reached over 200 seeded trials");
}

#[test]
fn full_prediction_always_punishes_a_vulnerable_target() {
    let mut brain = AiBrain::new(Difficulty::Medium);
    brain.profile.prediction_skill = 1.0;
    let tuning = AiTuning::default();
    let mut sit = situation(100.0, 100, 100);
    sit.target_hit = true;

    for seed in 0..10 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        assert_eq!(
            evaluate_state(&brain, &sit, &tuning, &mut rng),
            AiState::Punish
        );
    }
}

#[test]
fn presses_a_beaten_opponent() {
    let brain = AiBrain::new(Difficulty::Medium);
    let tuning = AiTuning::default();
    let sit = situation(150.0, 90, 20);

    let mut rng = ChaCha8Rng::seed_from_u64(0);
    assert_eq!(
        evaluate_state(&brain, &sit, &tuning, &mut rng),
        AiState::Pressure
    );
}

#[test]
fn aggression_reachable_in_range() {
    let brain = AiBrain::new(Difficulty::Hard);
    let tuning = AiTuning::default();
    let sit = situation(100.0, 100, 100);

    let mut aggressive = 0;
    for seed in 0..200 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        if evaluate_state(&brain, &sit, &tuning, &mut rng) == AiState::Aggressive {
            aggressive += 1;
        }
    }
    assert!(aggressive > 0);
}

#[test]
fn humanization_lags_only_imperfect_play() {
    let mut sharp = AiProfile::for_difficulty(Difficulty::Hard);
    sharp.optimal_play_chance = 1.0;
    let mut sloppy = AiProfile::for_difficulty(Difficulty::Easy);
    sloppy.optimal_play_chance = 0.0;

    let mut lagged = 0;
    for seed in 0..100 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        assert_eq!(
            humanize(AiState::Neutral, AiState::Pursuit, &sharp, &mut rng),
            AiState::Pursuit
        );
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        if humanize(AiState::Neutral, AiState::Pursuit, &sloppy, &mut rng) == AiState::Neutral {
            lagged += 1;
        }
    }
    // With optimal play off, roughly half the evaluations should lag.
    assert!(lagged > 20 && lagged < 80);
}

#[test]
fn pressure_starts_and_continues_a_rush_combo() {
    let mut brain = AiBrain::new(Difficulty::Medium);
    brain.state = AiState::Pressure;
    brain.profile.optimal_play_chance = 1.0;
    let tuning = AiTuning::default();
    let sit = situation(100.0, 100, 100);
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    let first = choose_action(&mut brain, &sit, &tuning, &mut rng);
    assert!(matches!(first, AiAction::Attack(_)));
    assert!((3..=4).contains(&brain.combo.len()));
    assert_eq!(brain.combo_index, 1);

    let second = choose_action(&mut brain, &sit, &tuning, &mut rng);
    assert_eq!(second, AiAction::Attack(brain.combo[1]));
    assert_eq!(brain.combo_index, 2);

    // A state change abandons the rest of the string.
    brain.transition(AiState::Neutral);
    assert!(brain.combo.is_empty());
    assert_eq!(brain.combo_index, 0);
}

#[test]
fn attack_states_wait_out_their_own_cooldown() {
    let tuning = AiTuning::default();
    let mut sit = situation(100.0, 100, 100);
    sit.can_attack = false;

    for state in [AiState::Punish, AiState::Pressure, AiState::Aggressive] {
        let mut brain = AiBrain::new(Difficulty::Hard);
        brain.state = state;
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert_eq!(
            choose_action(&mut brain, &sit, &tuning, &mut rng),
            AiAction::Hold
        );
    }
}

#[test]
fn punish_throws_heavy_strings() {
    let mut brain = AiBrain::new(Difficulty::Hard);
    brain.state = AiState::Punish;
    let tuning = AiTuning::default();
    let sit = situation(80.0, 100, 100);
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    let first = choose_action(&mut brain, &sit, &tuning, &mut rng);
    assert!(matches!(first, AiAction::Attack(_)));
    assert!(!brain.combo.is_empty());
    assert!(
        brain
            .combo
            .iter()
            .any(|k| matches!(k, AttackKind::Heavy | AttackKind::Special))
    );
}

#[test]
fn difficulty_tiers_scale_monotonically() {
    let easy = AiProfile::for_difficulty(Difficulty::Easy);
    let medium = AiProfile::for_difficulty(Difficulty::Medium);
    let hard = AiProfile::for_difficulty(Difficulty::Hard);

    assert!(easy.reaction_time > medium.reaction_time);
    assert!(medium.reaction_time > hard.reaction_time);
    for (lo, hi) in [(&easy, &medium), (&medium, &hard)] {
        assert!(lo.attack_accuracy < hi.attack_accuracy);
        assert!(lo.defense_reaction < hi.defense_reaction);
        assert!(lo.combo_chance < hi.combo_chance);
        assert!(lo.prediction_skill < hi.prediction_skill);
        assert!(lo.aggression_base < hi.aggression_base);
        assert!(lo.optimal_play_chance < hi.optimal_play_chance);
    }
}

#[test]
fn action_windows_match_action_kind() {
    let profile = AiProfile::for_difficulty(Difficulty::Medium);
    let reaction = profile.reaction_time;

    for seed in 0..50 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        assert_eq!(
            action_window(AiAction::Attack(AttackKind::Light), &profile, &mut rng),
            reaction
        );
        let held = action_window(AiAction::MoveForward, &profile, &mut rng);
        assert!((reaction..=reaction * 2).contains(&held));
        assert!(action_window(AiAction::Hold, &profile, &mut rng) >= 2);
    }
}

#[test]
fn health_swings_force_early_reevaluation() {
    let brain = AiBrain::new(Difficulty::Medium);
    let tuning = AiTuning::default();

    // Tally snapshots start at full health; a 20-point swing trips it.
    let sit = situation(300.0, 80, 100);
    assert!(reevaluation_triggered(&brain, &sit, &tuning, false, false));

    let calm = situation(300.0, 100, 100);
    assert!(!reevaluation_triggered(&brain, &calm, &tuning, false, false));

    // A fresh threat matters unless already braced for it.
    assert!(reevaluation_triggered(&brain, &calm, &tuning, true, false));
    let mut braced = AiBrain::new(Difficulty::Medium);
    braced.state = AiState::Defensive;
    assert!(!reevaluation_triggered(&braced, &calm, &tuning, true, false));

    // A fresh opening matters unless already set up to take it.
    assert!(reevaluation_triggered(&brain, &calm, &tuning, false, true));
    let mut set_up = AiBrain::new(Difficulty::Medium);
    set_up.state = AiState::Punish;
    assert!(!reevaluation_triggered(&set_up, &calm, &tuning, false, true));
}

#[test]
fn defensive_backs_off_from_an_incoming_swing() {
    let mut brain = AiBrain::new(Difficulty::Medium);
    brain.state = AiState::Defensive;
    let tuning = AiTuning {
        evade_jump_chance: 0.0,
        ..Default::default()
    };
    let mut sit = situation(120.0, 100, 100);
    sit.target_attacking = true;

    let mut rng = ChaCha8Rng::seed_from_u64(5);
    assert_eq!(
        choose_action(&mut brain, &sit, &tuning, &mut rng),
        AiAction::MoveBack
    );
}

#[test]
fn jump_and_attack_intents_map_through() {
    assert!(intent_for(AiAction::Jump, 1.0).jump);
    assert_eq!(
        intent_for(AiAction::Attack(AttackKind::Heavy), 1.0).attack,
        Some(AttackKind::Heavy)
    );
    let idle = intent_for(AiAction::Hold, 1.0);
    assert_eq!(idle.axis_x, 0.0);
    assert!(!idle.jump);
    assert!(idle.attack.is_none());
}
