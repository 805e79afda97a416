#[cfg(test)]
mod tests {
    use glam::Vec3;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use skirmish_core::config::{ArenaLayout, SpawnLayout, WedgeSpec};
    use skirmish_core::enums::{FighterKind, Team};

    use crate::fan::{ray_count, ray_fan_offsets};
    use crate::spawn::{half_plane_position, spawn_position, spawn_yaw, wedge_position};
    use crate::spread::spread_yaw_offsets;
    use crate::steering::{branch_axis, move_direction, turn_delta};

    #[test]
    fn test_fan_accuracy_two_thirty_degrees() {
        let offsets = ray_fan_offsets(2, 30.0);
        assert_eq!(offsets, vec![0.0, -7.5, 7.5, -15.0, 15.0]);
        assert_eq!(ray_count(2), 5);
    }

    #[test]
    fn test_fan_zero_accuracy_is_center_only() {
        assert_eq!(ray_fan_offsets(0, 60.0), vec![0.0]);
    }

    #[test]
    fn test_fan_outermost_ray_is_half_angle() {
        let offsets = ray_fan_offsets(5, 60.0);
        assert_eq!(offsets.len(), 11);
        let last = *offsets.last().unwrap();
        assert!((last - 30.0).abs() < 1e-5, "outermost ray at {last}");
    }

    #[test]
    fn test_spread_even_and_odd() {
        let even = spread_yaw_offsets(10, 3.0);
        assert_eq!(even.len(), 10);
        assert_eq!(even[0], -15.0);
        assert_eq!(*even.last().unwrap(), 12.0);

        let odd = spread_yaw_offsets(5, 3.0);
        assert_eq!(odd, vec![-6.0, -3.0, 0.0, 3.0]);

        assert!(spread_yaw_offsets(1, 3.0).is_empty());
    }

    #[test]
    fn test_half_plane_sides_are_disjoint() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let center = Vec3::new(100.0, 0.0, -40.0);
        for _ in 0..500 {
            let one = half_plane_position(&mut rng, Team::TeamOne, 19.0, 5.0, 1.0, center);
            let two = half_plane_position(&mut rng, Team::TeamTwo, 19.0, 5.0, 1.0, center);
            let (l1, l2) = (one - center, two - center);
            assert!(l1.z >= 5.0 && l1.z < 14.0, "team one z {}", l1.z);
            assert!(l2.z >= -14.0 && l2.z < -5.0, "team two z {}", l2.z);
            assert!(l1.x.abs() <= 14.0 && l2.x.abs() <= 14.0);
            assert_eq!(l1.y, 1.0);
        }
    }

    #[test]
    fn test_half_plane_tiny_arena_does_not_panic() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let p = half_plane_position(&mut rng, Team::TeamTwo, 3.0, 5.0, 1.0, Vec3::ZERO);
        assert!(p.is_finite());
    }

    #[test]
    fn test_wedge_position_within_donut() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let spec = WedgeSpec {
            min_angle: 30.0,
            max_angle: 60.0,
            min_radius: 4.0,
            max_radius: 8.0,
        };
        for _ in 0..200 {
            let p = wedge_position(&mut rng, Vec3::ZERO, &spec);
            let r = (p.x * p.x + p.z * p.z).sqrt();
            assert!((4.0 - 1e-4..=8.0 + 1e-4).contains(&r), "radius {r}");
            let angle = p.x.atan2(p.z).to_degrees();
            assert!((30.0 - 1e-3..=60.0 + 1e-3).contains(&angle), "angle {angle}");
        }
    }

    #[test]
    fn test_spawn_position_wedge_uses_team_spec_and_height() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let layout = ArenaLayout {
            layout: SpawnLayout::Wedge {
                team_one: WedgeSpec {
                    min_angle: -10.0,
                    max_angle: 10.0,
                    min_radius: 5.0,
                    max_radius: 6.0,
                },
                team_two: WedgeSpec {
                    min_angle: 170.0,
                    max_angle: 190.0,
                    min_radius: 5.0,
                    max_radius: 6.0,
                },
            },
            ..Default::default()
        };
        let one = spawn_position(&mut rng, &layout, Team::TeamOne, Vec3::ZERO);
        let two = spawn_position(&mut rng, &layout, Team::TeamTwo, Vec3::ZERO);
        assert!(one.z > 0.0 && two.z < 0.0);
        assert_eq!(one.y, layout.spawn_height);
    }

    #[test]
    fn test_spawn_yaw_ranges() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for _ in 0..200 {
            let a = spawn_yaw(&mut rng, FighterKind::Warrior, Team::TeamTwo);
            assert!((-60.0..60.0).contains(&a));
            let b = spawn_yaw(&mut rng, FighterKind::Warrior, Team::TeamOne);
            assert!((120.0..240.0).contains(&b));
            let c = spawn_yaw(&mut rng, FighterKind::Ranged, Team::TeamOne);
            assert!((0.0..360.0).contains(&c));
        }
    }

    #[test]
    fn test_steering() {
        assert_eq!(branch_axis(0.0), -1.0);
        assert_eq!(branch_axis(2.0), 1.0);

        let dir = move_direction(1.0, 1.0, Vec3::Z, Vec3::X);
        assert!((dir.length() - 1.0).abs() < 1e-6, "diagonal is normalized");
        assert_eq!(move_direction(0.0, 0.0, Vec3::Z, Vec3::X), Vec3::ZERO);

        assert!((turn_delta(1.0, 90.0, 0.02) - 1.8).abs() < 1e-6);
    }
}
