//! AI domain: the per-tick decision engine.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::ai::behaviors::{Situation, action_window, choose_action, evaluate_state, humanize};
use crate::ai::components::{AiAction, AiBrain, AiController};
use crate::ai::resources::AiTuning;
use crate::core::{FightRng, RoundFlow};
use crate::fighter::{Body, DamageDealt, Fighter, FighterIntent, FighterState, Health};

/// Builds the intent for the action currently held. `toward` is the sign of
/// the direction from the AI fighter to its target.
pub(crate) fn intent_for(action: AiAction, toward: f32) -> FighterIntent {
    match action {
        AiAction::MoveForward => FighterIntent {
            axis_x: toward,
            ..Default::default()
        },
        AiAction::MoveBack => FighterIntent {
            axis_x: -toward,
            ..Default::default()
        },
        AiAction::Jump => FighterIntent {
            jump: true,
            ..Default::default()
        },
        AiAction::Attack(kind) => FighterIntent {
            attack: Some(kind),
            ..Default::default()
        },
        AiAction::Hold => FighterIntent::default(),
    }
}

/// Anything that warrants recomputing the state before the timer runs out:
/// a real chunk of health moved on either side, the opponent just became a
/// threat we are not braced for, or just opened themselves up and we are
/// not set up to take the gift.
pub(crate) fn reevaluation_triggered(
    brain: &AiBrain,
    sit: &Situation,
    tuning: &AiTuning,
    newly_threatening: bool,
    newly_vulnerable: bool,
) -> bool {
    let own_swing = (sit.my_health - brain.tally.last_own_health).abs() > tuning.health_delta;
    let their_swing = (sit.their_health - brain.tally.last_target_health).abs() > tuning.health_delta;

    use crate::ai::components::AiState::{Aggressive, Defensive, Punish, Retreat};
    own_swing
        || their_swing
        || (newly_threatening && !matches!(brain.state, Defensive | Retreat))
        || (newly_vulnerable && !matches!(brain.state, Punish | Aggressive))
}

/// Runs the whole decision ladder for each AI fighter: observe, maybe
/// re-evaluate the state, maybe pick a new action, then write the intent
/// the physics and combat steps will consume this same tick.
pub(crate) fn update_ai(
    flow: Res<RoundFlow>,
    tuning: Res<AiTuning>,
    rng: Option<ResMut<FightRng>>,
    mut damage: MessageReader<DamageDealt>,
    mut controllers: Query<(Entity, &mut AiController, &mut FighterIntent)>,
    fighters: Query<(&Body, &Health, &FighterState), With<Fighter>>,
) {
    let Some(mut rng) = rng else {
        return;
    };
    let rng = &mut rng.0;
    let hits: Vec<(Entity, Entity)> = damage.read().map(|d| (d.attacker, d.target)).collect();

    for (entity, mut controller, mut intent) in &mut controllers {
        if !flow.is_active() {
            *intent = FighterIntent::default();
            continue;
        }

        let target = controller.target;
        let (Ok((my_body, my_health, my_state)), Ok((their_body, their_health, their_state))) =
            (fighters.get(entity), fighters.get(target))
        else {
            *intent = FighterIntent::default();
            continue;
        };
        if !my_health.alive {
            *intent = FighterIntent::default();
            continue;
        }

        let toward = if their_body.center_x() < my_body.center_x() {
            -1.0
        } else {
            1.0
        };
        let sit = Situation {
            distance: (their_body.center_x() - my_body.center_x()).abs(),
            my_health: my_health.clamped(),
            their_health: their_health.clamped(),
            health_ratio: my_health.ratio_against(their_health),
            target_attacking: their_state.attacking,
            target_running: their_state.running,
            target_hit: their_state.hit,
            target_jumping: their_state.jumping,
            target_cooldown: their_state.attack_cooldown,
            can_attack: my_state.attack_cooldown == 0 && !my_state.attacking,
        };

        let brain = &mut controller.brain;
        for (attacker, victim) in &hits {
            if *attacker == entity {
                brain.tally.hits_landed += 1;
            }
            if *victim == entity {
                brain.tally.hits_received += 1;
            }
        }

        let threatening = sit.target_threatening(&tuning);
        let vulnerable = sit.target_vulnerable(&tuning);
        let newly_threatening = threatening && !brain.seen_threatening;
        let newly_vulnerable = vulnerable && !brain.seen_vulnerable;
        brain.seen_threatening = threatening;
        brain.seen_vulnerable = vulnerable;

        brain.state_timer += 1;
        if brain.state_timer >= tuning.state_duration
            || reevaluation_triggered(brain, &sit, &tuning, newly_threatening, newly_vulnerable)
        {
            let computed = evaluate_state(brain, &sit, &tuning, rng);
            let next = humanize(brain.state, computed, &brain.profile, rng);
            if next != brain.state {
                debug!("AI state {:?} -> {:?}", brain.state, next);
                brain.transition(next);
            }
            brain.state_timer = 0;
            brain.tally.snapshot(sit.my_health, sit.their_health);
        }

        if brain.decision_cooldown > 0 {
            brain.decision_cooldown -= 1;
        }
        if brain.decision_cooldown == 0 {
            let action = choose_action(brain, &sit, &tuning, rng);
            brain.decision_cooldown = action_window(action, &brain.profile, rng);
            brain.action = action;
        }

        *intent = intent_for(brain.action, toward);
        // An attack request is consumed this frame; holding it would only
        // hammer the cooldown.
        if matches!(brain.action, AiAction::Attack(_)) {
            brain.action = AiAction::Hold;
        }
    }
}
