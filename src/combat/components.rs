use bevy::prelude::*;

/// Every class shares one ability cooldown, regardless of what the ability does.
pub const ABILITY_COOLDOWN_SECS: f32 = 8.0;

pub fn plugin(app: &mut App) {
    app.register_type::<Health>()
        .register_type::<AbilityCooldown>()
        .register_type::<Shielded>()
        .register_type::<Enemy>();
}

/// Health component for any entity that can take damage.
#[derive(Component, Reflect, Debug, Clone)]
#[reflect(Component)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

impl Health {
    pub fn new(max: f32) -> Self {
        Self { current: max, max }
    }

    pub fn take_damage(&mut self, amount: f32) -> bool {
        self.current = (self.current - amount).max(0.0);
        self.current <= 0.0
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0.0
    }

    pub fn fraction(&self) -> f32 {
        self.current / self.max
    }
}

impl Default for Health {
    fn default() -> Self {
        Self::new(100.0)
    }
}

/// Seconds left until the class ability can fire again. Counts down to zero
/// and stays there until the next cast re-arms it.
#[derive(Component, Reflect, Debug, Clone, Default)]
#[reflect(Component)]
pub struct AbilityCooldown {
    pub remaining: f32,
}

impl AbilityCooldown {
    pub fn tick(&mut self, dt: f32) {
        self.remaining = (self.remaining - dt).max(0.0);
    }

    pub fn ready(&self) -> bool {
        self.remaining <= 0.0
    }

    pub fn arm(&mut self) {
        self.remaining = ABILITY_COOLDOWN_SECS;
    }
}

/// Active damage mitigation from the knight's shield. Incoming hits are
/// multiplied by `mitigation` while this component lives.
#[derive(Component, Reflect, Debug, Clone)]
#[reflect(Component)]
pub struct Shielded {
    pub remaining: f32,
    pub mitigation: f32,
}

/// Tag to identify enemies.
#[derive(Component, Reflect, Debug, Clone, Default)]
#[reflect(Component)]
pub struct Enemy;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damage_clamps_at_zero() {
        let mut health = Health::new(100.0);
        assert!(!health.take_damage(30.0));
        assert_eq!(health.current, 70.0);
        assert!(health.take_damage(200.0));
        assert_eq!(health.current, 0.0);
        assert!(health.is_dead());
    }

    #[test]
    fn cooldown_counts_down_and_rearms() {
        let mut cd = AbilityCooldown::default();
        assert!(cd.ready());

        cd.arm();
        assert!(!cd.ready());
        assert_eq!(cd.remaining, ABILITY_COOLDOWN_SECS);

        cd.tick(ABILITY_COOLDOWN_SECS - 0.5);
        assert!(!cd.ready());
        cd.tick(1.0);
        assert!(cd.ready());
        assert_eq!(cd.remaining, 0.0);
    }
}
