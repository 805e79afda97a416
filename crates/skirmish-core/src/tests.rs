#[cfg(test)]
mod tests {
    use glam::Vec3;

    use crate::config::{ArenaConfig, SpawnLayout, TeamSizePolicy};
    use crate::constants::*;
    use crate::enums::*;
    use crate::events::{AgentId, ArenaEvent};
    use crate::types::{Cooldown, SimTime, Transform};
    use crate::SkirmishError;

    #[test]
    fn test_team_opponents() {
        assert_eq!(Team::TeamOne.opponent(), Some(Team::TeamTwo));
        assert_eq!(Team::TeamTwo.opponent(), Some(Team::TeamOne));
        assert_eq!(Team::Dead.opponent(), None);
        assert!(!Team::Dead.is_combatant());
    }

    #[test]
    fn test_transform_forward_and_right() {
        let t = Transform::default();
        assert!((t.forward() - Vec3::Z).length() < 1e-6);
        assert!((t.right() - Vec3::X).length() < 1e-6);

        // Positive yaw turns toward +X.
        let t = Transform::from_yaw(Vec3::ZERO, 90.0);
        assert!((t.forward() - Vec3::X).length() < 1e-5);
        assert!((t.yaw_degrees() - 90.0).abs() < 1e-3);

        let t = Transform::from_yaw(Vec3::ZERO, -90.0);
        assert!((t.yaw_degrees() - 270.0).abs() < 1e-3);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..TICK_RATE {
            time.advance(DT);
        }
        assert_eq!(time.tick, TICK_RATE as u64);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_cooldown_trigger_and_hold() {
        let mut cd = Cooldown::new(2.0);
        assert!(cd.is_ready(0.0), "fresh cooldown is ready");

        cd.trigger(1.0);
        assert!(!cd.is_ready(2.5));
        assert!(cd.is_ready(3.0), "ready exactly one period after trigger");

        cd.hold(10.0, 0.5);
        assert!(!cd.is_ready(10.9));
        assert!(cd.is_ready(11.0));
    }

    #[test]
    fn test_default_config_matches_constants() {
        let config = ArenaConfig::default();
        assert_eq!(config.agent.max_health, AGENT_MAX_HEALTH);
        assert_eq!(config.melee.damage, MELEE_DAMAGE);
        assert_eq!(config.ranged.spread, RANGED_SPREAD);
        assert_eq!(config.rewards.projectile_hit_bonus, 0.5);
        assert!(config.rewards.friendly_fire_penalizes_victim);
        assert_eq!(
            config.arena.team_sizes,
            TeamSizePolicy::Randomized { min: 3, max: 7 }
        );
        assert_eq!(config.arena.layout, SpawnLayout::HalfPlane);
    }

    #[test]
    fn test_partial_config_json_keeps_defaults() {
        let json = r#"{
            "arena": { "team_sizes": { "mode": "Fixed", "team_one": 2, "team_two": 2 } },
            "rewards": { "existential_max_steps": 500 }
        }"#;
        let config = ArenaConfig::from_json_str(json).unwrap();
        assert_eq!(
            config.arena.team_sizes,
            TeamSizePolicy::Fixed {
                team_one: 2,
                team_two: 2
            }
        );
        assert_eq!(config.arena.range, ARENA_RANGE);
        assert!((config.rewards.existential_penalty() - 0.002).abs() < 1e-7);
        assert_eq!(config.melee.accuracy, DETECTION_ACCURACY);
    }

    #[test]
    fn test_bad_config_is_config_error() {
        let err = ArenaConfig::from_json_str("{ \"arena\": 7 }").unwrap_err();
        assert!(matches!(err, SkirmishError::Config(_)));
    }

    #[test]
    fn test_damage_penalty_scale() {
        let config = ArenaConfig::default();
        assert!((config.rewards.damage_penalty(50) - 0.5).abs() < 1e-6);
        assert_eq!(config.rewards.existential_penalty(), 0.0);
    }

    #[test]
    fn test_event_serde_is_tagged() {
        let event = ArenaEvent::Died {
            agent: AgentId(7),
            team: Team::TeamTwo,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"Died\""), "got {json}");
        let back: ArenaEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_outcome_winner() {
        assert_eq!(EpisodeOutcome::Win(Team::TeamOne).winner(), Some(Team::TeamOne));
        assert_eq!(EpisodeOutcome::Draw.winner(), None);
    }
}
