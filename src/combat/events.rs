use bevy::prelude::*;

/// A shot (hitscan ray or volley arrow) found its nearest blocker and it was
/// an enemy. Fired by the shooting systems, consumed by the damage pipeline.
#[derive(Event, Debug, Clone)]
pub struct ShotConnected {
    pub target: Entity,
    pub point: Vec3,
    pub damage: f32,
}

/// Some amount of damage should land on `target`. `impulse` is applied as
/// knockback for dynamic bodies, `Vec3::ZERO` for plain hits. `point` is
/// where the hit visually landed.
#[derive(Event, Debug, Clone)]
pub struct DamageDealt {
    pub target: Entity,
    pub damage: f32,
    pub impulse: Vec3,
    pub point: Vec3,
}

/// Damage was actually applied (post-mitigation). Drives feedback effects.
#[derive(Event, Debug, Clone)]
pub struct HitLanded {
    pub target: Entity,
    pub damage: f32,
    pub point: Vec3,
}

/// `entity` ran out of health.
#[derive(Event, Debug, Clone)]
pub struct Died {
    pub entity: Entity,
}

/// The player took a hit (post-mitigation amount).
#[derive(Event, Debug, Clone)]
pub struct PlayerHit {
    pub damage: f32,
}
