//! Pure combat math, kept free of ECS so it can be tested directly.

use bevy::prelude::*;

/// Damage after mitigation. A shielded target takes `mitigation` times the
/// base amount, everyone else takes it in full.
pub fn effective_damage(base: f32, mitigation: Option<f32>) -> f32 {
    match mitigation {
        Some(m) => base * m,
        None => base,
    }
}

/// Yaw offsets for a fan of `shots` rays, `step` radians apart, centered on
/// the aim direction. An odd count puts one ray straight ahead.
pub fn volley_yaws(shots: u32, step: f32) -> Vec<f32> {
    let half = (shots.saturating_sub(1)) as f32 / 2.0;
    (0..shots).map(|i| (i as f32 - half) * step).collect()
}

/// Horizontal distance between two points, ignoring height.
pub fn distance_xz(a: Vec3, b: Vec3) -> f32 {
    Vec2::new(a.x - b.x, a.z - b.z).length()
}

/// Whether `pos` sits inside a ground-circle of `radius` around `center`.
pub fn within_radius_xz(center: Vec3, pos: Vec3, radius: f32) -> bool {
    distance_xz(center, pos) <= radius
}

/// Knockback for a slam centered at `center`. Pushes straight away from the
/// center along the ground, scaling linearly from `strength * radius` at the
/// epicenter down to zero at the rim. Outside the rim there is no push.
pub fn slam_impulse(center: Vec3, pos: Vec3, radius: f32, strength: f32) -> Vec3 {
    let d = distance_xz(center, pos);
    if d >= radius {
        return Vec3::ZERO;
    }
    let away = Vec3::new(pos.x - center.x, 0.0, pos.z - center.z);
    let dir = if d > 1e-4 {
        away / d
    } else {
        // Target standing exactly on the epicenter, pick an arbitrary lateral.
        Vec3::X
    };
    dir * (strength * (radius - d))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::Health;

    #[test]
    fn unshielded_hit_lands_in_full() {
        let mut health = Health::new(100.0);
        health.take_damage(effective_damage(30.0, None));
        assert_eq!(health.current, 70.0);
    }

    #[test]
    fn shield_cuts_a_twenty_point_hit_to_nine() {
        let mut health = Health::new(120.0);
        let dealt = effective_damage(20.0, Some(0.45));
        assert_eq!(dealt, 9.0);
        health.take_damage(dealt);
        assert_eq!(health.current, 111.0);
    }

    #[test]
    fn knight_drops_a_grunt_on_the_third_shot() {
        let mut health = Health::new(60.0);
        assert!(!health.take_damage(20.0));
        assert!(!health.take_damage(20.0));
        assert!(health.take_damage(20.0));
    }

    #[test]
    fn volley_fans_out_symmetrically() {
        let yaws = volley_yaws(5, 0.07);
        assert_eq!(yaws.len(), 5);
        assert!((yaws[0] + 0.14).abs() < 1e-6);
        assert!((yaws[2]).abs() < 1e-6);
        assert!((yaws[4] - 0.14).abs() < 1e-6);
        // Symmetric around the center ray.
        assert!((yaws[0] + yaws[4]).abs() < 1e-6);
    }

    #[test]
    fn blast_radius_is_a_hard_edge() {
        let center = Vec3::new(3.0, 0.0, -4.0);
        let near = center + Vec3::new(2.0, 0.0, 0.0);
        let far = center + Vec3::new(0.0, 0.0, 5.0);
        assert!(within_radius_xz(center, near, 3.2));
        assert!(!within_radius_xz(center, far, 3.2));
    }

    #[test]
    fn blast_ignores_height_difference() {
        let center = Vec3::ZERO;
        let above = Vec3::new(1.0, 10.0, 1.0);
        assert!(within_radius_xz(center, above, 3.2));
    }

    #[test]
    fn slam_pushes_harder_up_close() {
        let center = Vec3::ZERO;
        let near = slam_impulse(center, Vec3::new(1.0, 0.0, 0.0), 4.5, 4.0);
        let far = slam_impulse(center, Vec3::new(4.0, 0.0, 0.0), 4.5, 4.0);
        assert!(near.length() > far.length());
        // Straight away from the center, no vertical component.
        assert!(near.x > 0.0);
        assert_eq!(near.y, 0.0);
    }

    #[test]
    fn slam_stops_at_the_rim() {
        let out = slam_impulse(Vec3::ZERO, Vec3::new(5.0, 0.0, 0.0), 4.5, 4.0);
        assert_eq!(out, Vec3::ZERO);
    }
}
