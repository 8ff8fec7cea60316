use super::*;

/// Gameplay tuning, grouped by concern. Loaded once at startup; the optional
/// `config.ron` next to the binary overrides the defaults below.
#[derive(Clone, Debug, Default, Serialize, Deserialize, Reflect, Resource)]
#[reflect(Resource)]
pub struct Config {
    pub camera: CameraPreset,
    pub player: PlayerPreset,
    pub combat: CombatPreset,
    pub enemy: EnemyPreset,
    pub arena: ArenaPreset,
    pub timers: TimersPreset,
}

#[derive(Clone, Debug, Serialize, Deserialize, Reflect)]
pub struct CameraPreset {
    pub fov: f32,
    pub eye_height: f32,
    /// Pitch clamp in radians, applied symmetrically.
    pub pitch_limit: f32,
    pub sensitivity: f32,
}

impl Default for CameraPreset {
    fn default() -> Self {
        Self {
            fov: 75.0,
            eye_height: 1.6,
            pitch_limit: 1.45,
            sensitivity: 0.0025,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, Reflect)]
pub struct PlayerPreset {
    pub movement: MovementPreset,
    pub hitbox: HitboxPreset,
    pub spawn_pos: (f32, f32, f32),
}

impl Default for PlayerPreset {
    fn default() -> Self {
        Self {
            movement: MovementPreset::default(),
            hitbox: HitboxPreset::default(),
            spawn_pos: (0.0, 1.0, 0.0),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, Reflect)]
pub struct MovementPreset {
    pub speed: f32,
    pub jump_height: f32,
}

impl Default for MovementPreset {
    fn default() -> Self {
        Self {
            speed: 7.0,
            jump_height: 3.5,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, Reflect)]
pub struct HitboxPreset {
    pub radius: f32,
    pub height: f32,
}

impl Default for HitboxPreset {
    fn default() -> Self {
        Self {
            radius: 0.4,
            height: 1.2,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, Reflect)]
pub struct CombatPreset {
    /// How far a hitscan shot reaches.
    pub shot_range: f32,
    pub tracer_speed: f32,
    pub tracer_ttl: f32,
}

impl Default for CombatPreset {
    fn default() -> Self {
        Self {
            shot_range: 100.0,
            tracer_speed: 30.0,
            tracer_ttl: 1.2,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, Reflect)]
pub struct EnemyPreset {
    pub health: f32,
    pub accel: f32,
    pub max_speed: f32,
    /// Per-frame velocity decay at a 60 Hz reference; applied as
    /// `friction.powf(dt * 60)` so it is frame-rate independent.
    pub friction: f32,
    /// Enemies stop accelerating once this close to the player.
    pub follow_min: f32,
    /// Obstacle repulsion kicks in inside this radius.
    pub avoid_radius: f32,
    pub melee_range: f32,
    pub melee_damage: f32,
    pub melee_cooldown: f32,
    pub wave_size: u32,
    /// Wave spawn scatter, plus or minus on both horizontal axes.
    pub scatter: f32,
}

impl Default for EnemyPreset {
    fn default() -> Self {
        Self {
            health: 60.0,
            accel: 14.0,
            max_speed: 4.5,
            friction: 0.92,
            follow_min: 1.2,
            avoid_radius: 3.0,
            melee_range: 1.8,
            melee_damage: 10.0,
            melee_cooldown: 1.0,
            wave_size: 5,
            scatter: 10.0,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, Reflect)]
pub struct ArenaPreset {
    pub size: f32,
    pub obstacle_count: u32,
}

impl Default for ArenaPreset {
    fn default() -> Self {
        Self {
            size: 50.0,
            obstacle_count: 8,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, Reflect)]
pub struct TimersPreset {
    /// Simulated asset readiness before the title shows.
    pub loading: f32,
    /// How long the death feedback lingers before returning to the lobby.
    pub death_delay: f32,
    pub floater_ttl: f32,
    pub toast_ttl: f32,
}

impl Default for TimersPreset {
    fn default() -> Self {
        Self {
            loading: 0.7,
            death_delay: 1.6,
            floater_ttl: 0.8,
            toast_ttl: 2.0,
        }
    }
}
