use super::*;

pub fn plugin(app: &mut App) {
    app.init_resource::<Session>();
}

/// Per-run session state. Survives screen transitions, counters reset when
/// a new run starts.
#[derive(Resource, Reflect, Debug, Clone)]
#[reflect(Resource)]
pub struct Session {
    pub class: CharacterClass,
    pub wave: u32,
    pub kills: u32,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            class: CharacterClass::Knight,
            wave: 0,
            kills: 0,
        }
    }
}

impl Session {
    /// Class selection sticks, counters do not.
    pub fn reset(&mut self) {
        self.wave = 0;
        self.kills = 0;
    }
}

/// The game's main screen states.
/// See <https://bevy-cheatbook.github.io/programming/states.html>
/// Or <https://github.com/bevyengine/bevy/blob/main/examples/ecs/state.rs>
#[derive(States, Default, Clone, Eq, PartialEq, Debug, Hash, Reflect)]
pub enum Screen {
    // Simulated asset readiness: a short breather before the menu
    #[default]
    Loading,
    // Here the start menu is drawn and waiting for player confirmation
    Title,
    // Class selection and wave staging
    Lobby,
    // During this State the actual game logic is executed
    Gameplay,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_reset_keeps_class() {
        let mut session = Session {
            class: CharacterClass::Wizard,
            wave: 3,
            kills: 11,
        };
        session.reset();
        assert_eq!(session.class, CharacterClass::Wizard);
        assert_eq!(session.wave, 0);
        assert_eq!(session.kills, 0);
    }
}
