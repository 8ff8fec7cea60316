use super::*;

/// Playable classes. Tuning lives in [`CharacterClass::spec`] so systems
/// never branch on the class directly.
#[derive(Reflect, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CharacterClass {
    #[default]
    Knight,
    Archer,
    Wizard,
    Giant,
}

/// Per-class tuning table.
#[derive(Reflect, Debug, Clone, Copy, PartialEq)]
pub struct ClassSpec {
    pub max_health: f32,
    pub shot_damage: f32,
    /// Minimum interval between shots, seconds.
    pub shot_interval: f32,
    pub ability: AbilityKind,
}

/// One special action per class, all gated by the same cooldown.
#[derive(Reflect, Debug, Clone, Copy, PartialEq)]
pub enum AbilityKind {
    /// Incoming damage is multiplied by `mitigation` until the shield expires.
    Shield { duration: f32, mitigation: f32 },
    /// Fan of rays around the aim direction, each resolved independently.
    Volley { shots: u32, step: f32, damage: f32 },
    /// Area damage centered `reach` ahead of the caster.
    Blast { radius: f32, damage: f32, reach: f32 },
    /// Area damage around the caster plus outward knockback scaled by
    /// `(radius - distance) * knockback`.
    Slam { radius: f32, damage: f32, knockback: f32 },
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Knight,
        CharacterClass::Archer,
        CharacterClass::Wizard,
        CharacterClass::Giant,
    ];

    pub fn spec(&self) -> ClassSpec {
        match self {
            CharacterClass::Knight => ClassSpec {
                max_health: 120.0,
                shot_damage: 20.0,
                shot_interval: 0.22,
                ability: AbilityKind::Shield {
                    duration: 4.0,
                    mitigation: 0.45,
                },
            },
            CharacterClass::Archer => ClassSpec {
                max_health: 100.0,
                shot_damage: 18.0,
                shot_interval: 0.15,
                ability: AbilityKind::Volley {
                    shots: 5,
                    step: 0.07,
                    damage: 13.0,
                },
            },
            CharacterClass::Wizard => ClassSpec {
                max_health: 80.0,
                shot_damage: 12.0,
                shot_interval: 0.22,
                ability: AbilityKind::Blast {
                    radius: 3.2,
                    damage: 40.0,
                    reach: 6.0,
                },
            },
            CharacterClass::Giant => ClassSpec {
                max_health: 160.0,
                shot_damage: 35.0,
                shot_interval: 0.22,
                ability: AbilityKind::Slam {
                    radius: 4.5,
                    damage: 30.0,
                    knockback: 4.0,
                },
            },
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CharacterClass::Knight => "Knight",
            CharacterClass::Archer => "Archer",
            CharacterClass::Wizard => "Wizard",
            CharacterClass::Giant => "Giant",
        }
    }

    pub fn ability_label(&self) -> &'static str {
        match self {
            CharacterClass::Knight => "Shield Up",
            CharacterClass::Archer => "Arrow Volley",
            CharacterClass::Wizard => "Arcane Blast",
            CharacterClass::Giant => "Ground Slam",
        }
    }

    /// Accent color for the class picker.
    pub fn color(&self) -> Color {
        match self {
            CharacterClass::Knight => Color::srgb(0.75, 0.78, 0.85),
            CharacterClass::Archer => Color::srgb(0.35, 0.65, 0.35),
            CharacterClass::Wizard => Color::srgb(0.45, 0.35, 0.80),
            CharacterClass::Giant => Color::srgb(0.70, 0.45, 0.25),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn archer_shoots_faster_than_the_rest() {
        let archer = CharacterClass::Archer.spec().shot_interval;
        for class in CharacterClass::ALL {
            if class != CharacterClass::Archer {
                assert!(archer < class.spec().shot_interval);
            }
        }
    }

    #[test]
    fn shot_damage_table() {
        assert_eq!(CharacterClass::Knight.spec().shot_damage, 20.0);
        assert_eq!(CharacterClass::Archer.spec().shot_damage, 18.0);
        assert_eq!(CharacterClass::Wizard.spec().shot_damage, 12.0);
        assert_eq!(CharacterClass::Giant.spec().shot_damage, 35.0);
    }

    #[test]
    fn knight_carries_the_shield() {
        let AbilityKind::Shield {
            duration,
            mitigation,
        } = CharacterClass::Knight.spec().ability
        else {
            panic!("knight ability should be a shield");
        };
        assert_eq!(duration, 4.0);
        assert_eq!(mitigation, 0.45);
    }

    #[test]
    fn area_abilities_match_tuning() {
        let AbilityKind::Blast { radius, damage, .. } = CharacterClass::Wizard.spec().ability
        else {
            panic!("wizard ability should be a blast");
        };
        assert_eq!((radius, damage), (3.2, 40.0));

        let AbilityKind::Slam { radius, damage, .. } = CharacterClass::Giant.spec().ability
        else {
            panic!("giant ability should be a slam");
        };
        assert_eq!((radius, damage), (4.5, 30.0));
    }
}
