//! Chase steering as plain math over positions and velocities, so the whole
//! behavior can be tested without an ECS runtime.

use crate::models::EnemyPreset;
use bevy::prelude::*;

/// One steering update for a single chaser. Takes the current velocity and
/// returns the next one; vertical velocity passes through untouched so
/// gravity keeps working.
///
/// The sequence per update: accelerate toward the target on the ground
/// plane (unless already inside `follow_min`), push away from nearby
/// obstacles with a force that grows as the gap shrinks, cap at `max_speed`,
/// then apply friction scaled to the timestep. A body arriving faster than
/// the cap (knockback) keeps its speed and bleeds it off through friction,
/// the cap only stops steering from adding more.
pub fn steer_velocity(
    pos: Vec3,
    velocity: Vec3,
    target: Vec3,
    obstacles: &[Vec3],
    preset: &EnemyPreset,
    dt: f32,
) -> Vec3 {
    let mut v = Vec3::new(velocity.x, 0.0, velocity.z);
    let cap = preset.max_speed.max(v.length());

    let to_target = Vec3::new(target.x - pos.x, 0.0, target.z - pos.z);
    let dist = to_target.length();
    if dist > preset.follow_min {
        v += to_target / dist * preset.accel * dt;
    }

    for &obstacle in obstacles {
        let away = Vec3::new(pos.x - obstacle.x, 0.0, pos.z - obstacle.z);
        let d = away.length();
        if d < preset.avoid_radius && d > 1e-4 {
            let push = (preset.avoid_radius / d - 1.0).min(4.0) * preset.accel;
            v += away / d * push * dt;
        }
    }

    let speed = v.length();
    if speed > cap {
        v *= cap / speed;
    }

    // Friction tuned against a 60 Hz reference frame so slower or faster
    // timesteps decay the same amount per second.
    v *= preset.friction.powf(dt * 60.0);

    Vec3::new(v.x, velocity.y, v.z)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preset() -> EnemyPreset {
        EnemyPreset::default()
    }

    #[test]
    fn closes_in_on_the_target() {
        let v = steer_velocity(
            Vec3::new(-6.0, 1.0, 0.0),
            Vec3::ZERO,
            Vec3::ZERO,
            &[],
            &preset(),
            1.0 / 60.0,
        );
        assert!(v.x > 0.0);
        assert!(v.z.abs() < 1e-6);
    }

    #[test]
    fn stops_pushing_inside_follow_distance() {
        let p = preset();
        let near = Vec3::new(p.follow_min * 0.5, 1.0, 0.0);
        let v = steer_velocity(near, Vec3::ZERO, Vec3::ZERO, &[], &p, 1.0 / 60.0);
        assert_eq!(v.x, 0.0);
        assert_eq!(v.z, 0.0);
    }

    #[test]
    fn obstacles_shove_the_chaser_aside() {
        let p = preset();
        // Obstacle right next to the chaser, slightly off the chase line.
        let pos = Vec3::new(-5.0, 1.0, 0.0);
        let obstacle = Vec3::new(-5.0, 1.0, 0.6);
        let v = steer_velocity(pos, Vec3::ZERO, Vec3::ZERO, &[obstacle], &p, 1.0 / 60.0);
        // Pushed away on -Z while still approaching on +X.
        assert!(v.z < 0.0);
        assert!(v.x > 0.0);
    }

    #[test]
    fn speed_never_exceeds_the_cap() {
        let p = preset();
        let mut v = Vec3::ZERO;
        let pos = Vec3::new(-20.0, 1.0, 0.0);
        for _ in 0..600 {
            v = steer_velocity(pos, v, Vec3::ZERO, &[], &p, 1.0 / 60.0);
            assert!(v.length() <= p.max_speed + 1e-4);
        }
    }

    #[test]
    fn outside_shove_decays_instead_of_snapping() {
        let p = preset();
        // Slammed away from the target far beyond the chase cap.
        let shoved = Vec3::new(12.0, 0.0, 0.0);
        let v = steer_velocity(
            Vec3::new(5.0, 1.0, 0.0),
            shoved,
            Vec3::ZERO,
            &[],
            &p,
            1.0 / 60.0,
        );
        assert!(v.x > p.max_speed);
        assert!(v.x < shoved.x);
    }

    #[test]
    fn friction_bleeds_off_leftover_speed() {
        let p = preset();
        // Inside follow_min there is no pull, so velocity should only decay.
        let pos = Vec3::new(0.5, 1.0, 0.0);
        let before = Vec3::new(3.0, 0.0, 0.0);
        let after = steer_velocity(pos, before, Vec3::ZERO, &[], &p, 1.0 / 60.0);
        assert!(after.x < before.x);
        assert!(after.x > 0.0);
    }

    #[test]
    fn vertical_velocity_passes_through() {
        let falling = Vec3::new(0.0, -9.0, 0.0);
        let v = steer_velocity(
            Vec3::new(-6.0, 1.0, 0.0),
            falling,
            Vec3::ZERO,
            &[],
            &preset(),
            1.0 / 60.0,
        );
        assert_eq!(v.y, -9.0);
    }

    #[test]
    fn decay_is_timestep_independent() {
        let p = preset();
        let pos = Vec3::new(0.5, 1.0, 0.0);
        let start = Vec3::new(3.0, 0.0, 0.0);

        let whole = steer_velocity(pos, start, Vec3::ZERO, &[], &p, 1.0 / 30.0);
        let half = steer_velocity(pos, start, Vec3::ZERO, &[], &p, 1.0 / 60.0);
        let halved_twice = steer_velocity(pos, half, Vec3::ZERO, &[], &p, 1.0 / 60.0);

        assert!((whole.x - halved_twice.x).abs() < 1e-3);
    }
}
