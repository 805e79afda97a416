//! Per-agent action step.
//!
//! One lifecycle for every fighter; the perform-action half is picked by
//! `FighterKind`. Warriors swing through the melee resolver, ranged
//! fighters run aim shaping and fire volleys.

use hecs::Entity;

use skirmish_core::components::{AgentRuntime, Fighter};
use skirmish_core::config::ArenaConfig;
use skirmish_core::enums::{AnimationState, FighterKind};
use skirmish_core::events::ArenaEvent;
use skirmish_core::types::{yaw, Transform};
use skirmish_tactics::steering::{move_direction, turn_delta};

use crate::decision::Action;
use crate::physics::PhysicsWorld;
use crate::store::EntityStore;
use crate::systems::{melee, ranged};

/// Shared inputs for one tick of action steps.
pub struct StepContext<'a, P: PhysicsWorld + ?Sized> {
    pub physics: &'a P,
    pub config: &'a ArenaConfig,
    /// Simulation time at the start of the step.
    pub now: f64,
    pub dt: f32,
}

/// Apply one action to one agent. Dead agents do nothing.
pub fn step<P: PhysicsWorld + ?Sized>(
    store: &mut EntityStore,
    ctx: &StepContext<'_, P>,
    agent: Entity,
    action: &Action,
    events: &mut Vec<ArenaEvent>,
) {
    let Some(fighter) = store.get::<Fighter>(agent) else {
        return;
    };
    if !fighter.alive {
        return;
    }

    let penalty = ctx.config.rewards.existential_penalty();
    if penalty > 0.0 {
        store.update::<AgentRuntime, _>(agent, |r| r.accumulated_reward -= penalty);
    }

    let moving = steer(store, ctx, agent, action);
    let mut state = if moving {
        AnimationState::Running
    } else {
        AnimationState::Idle
    };

    if action.attack {
        match fighter.kind {
            FighterKind::Warrior => {
                if let Some(outcome) = melee::try_attack(store, ctx.physics, ctx.config, agent, ctx.now) {
                    state = AnimationState::Attacking;
                    events.push(match outcome {
                        melee::MeleeOutcome::Hit { target, opponent } => ArenaEvent::MeleeHit {
                            attacker: agent.into(),
                            target: target.into(),
                            friendly: !opponent,
                        },
                        melee::MeleeOutcome::Miss => ArenaEvent::MeleeMiss {
                            attacker: agent.into(),
                        },
                    });
                }
            }
            FighterKind::Ranged => {
                if let Some(count) = ranged::try_fire(store, ctx.config, agent, ctx.now) {
                    state = AnimationState::Shooting;
                    events.push(ArenaEvent::VolleyFired {
                        shooter: agent.into(),
                        projectiles: count,
                    });
                }
            }
        }
    }

    if fighter.kind == FighterKind::Ranged {
        ranged::aim_shaping(store, ctx.physics, ctx.config, agent, ctx.now);
    }

    set_state(store, agent, state, events);
}

/// Translate and turn the agent. Returns whether it moved.
fn steer<P: PhysicsWorld + ?Sized>(
    store: &mut EntityStore,
    ctx: &StepContext<'_, P>,
    agent: Entity,
    action: &Action,
) -> bool {
    let agent_config = &ctx.config.agent;
    store
        .update::<Transform, _>(agent, |t| {
            let dir = move_direction(action.vertical, action.horizontal, t.forward(), t.right());
            t.position += dir * agent_config.move_speed * ctx.dt;
            let turn = turn_delta(action.turn, agent_config.turn_speed, ctx.dt);
            if turn != 0.0 {
                t.rotation = (yaw(turn) * t.rotation).normalize();
            }
            dir != glam::Vec3::ZERO
        })
        .unwrap_or(false)
}

/// Record a new animation state, emitting an event only on change.
pub fn set_state(
    store: &mut EntityStore,
    agent: Entity,
    state: AnimationState,
    events: &mut Vec<ArenaEvent>,
) {
    let changed = store
        .update::<Fighter, _>(agent, |f| std::mem::replace(&mut f.state, state) != state)
        .unwrap_or(false);
    if changed {
        events.push(ArenaEvent::StateChanged {
            agent: agent.into(),
            state,
        });
    }
}
