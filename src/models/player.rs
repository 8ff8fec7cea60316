use super::*;

#[derive(Component, Reflect, Clone)]
#[reflect(Component)]
pub struct Player {
    pub class: CharacterClass,
    pub speed: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            class: CharacterClass::Knight,
            speed: 7.0,
        }
    }
}
