use super::*;
use avian3d::spatial_query::SpatialQuery;
use bevy_enhanced_input::prelude::Start;

pub(super) fn plugin(app: &mut App) {
    app.add_observer(handle_ability).add_systems(
        Update,
        (tick_cooldowns, tick_shields)
            .run_if(in_state(Screen::Gameplay))
            .in_set(PostPhysicsAppSystems::TickTimers),
    );
}

fn tick_cooldowns(time: Res<Time>, mut cooldowns: Query<&mut AbilityCooldown>) {
    for mut cooldown in &mut cooldowns {
        cooldown.tick(time.delta_secs());
    }
}

fn tick_shields(
    time: Res<Time>,
    mut shields: Query<(Entity, &mut Shielded)>,
    mut commands: Commands,
) {
    for (entity, mut shield) in &mut shields {
        shield.remaining -= time.delta_secs();
        if shield.remaining <= 0.0 {
            commands.entity(entity).remove::<Shielded>();
        }
    }
}

/// Observer: cast the class ability. All four share one cooldown, so whatever
/// the class, a cast arms the same clock.
fn handle_ability(
    on: On<Start<Ability>>,
    config: Res<Config>,
    spatial: SpatialQuery,
    camera: Query<&GlobalTransform, With<SceneCamera>>,
    enemy_tags: Query<(), With<Enemy>>,
    enemies: Query<(Entity, &Transform), With<Enemy>>,
    assets: Res<TracerAssets>,
    mut players: Query<(&Player, &Transform, &mut AbilityCooldown), Without<DeathTimer>>,
    mut commands: Commands,
) {
    let Ok((player, player_tf, mut cooldown)) = players.get_mut(on.context) else {
        return;
    };
    if !cooldown.ready() {
        commands.trigger(Toast("ABILITY NOT READY".into()));
        return;
    }

    let spec = player.class.spec();
    match spec.ability {
        AbilityKind::Shield {
            duration,
            mitigation,
        } => {
            commands.entity(on.context).insert(Shielded {
                remaining: duration,
                mitigation,
            });
        }
        AbilityKind::Volley { shots, step, damage } => {
            let Ok(cam) = camera.single() else { return };
            let origin = cam.translation();
            let aim = cam.forward();
            for yaw in volley_yaws(shots, step) {
                let spread = Quat::from_rotation_y(yaw) * aim.as_vec3();
                let dir = Dir3::new(spread).unwrap_or(aim);
                let (end, hit) = hitscan(
                    &spatial,
                    &enemy_tags,
                    on.context,
                    origin,
                    dir,
                    config.combat.shot_range,
                    damage,
                );
                spawn_tracer(&mut commands, &assets, &config, origin, end);
                if let Some(event) = hit {
                    commands.trigger(event);
                }
            }
        }
        AbilityKind::Blast {
            radius,
            damage,
            reach,
        } => {
            let ahead = player_tf.movement_direction(Vec2::Y);
            let center = player_tf.translation + ahead * reach;
            for (entity, enemy_tf) in &enemies {
                if within_radius_xz(center, enemy_tf.translation, radius) {
                    commands.trigger(DamageDealt {
                        target: entity,
                        damage,
                        impulse: Vec3::ZERO,
                        point: enemy_tf.translation + Vec3::Y * 0.9,
                    });
                }
            }
        }
        AbilityKind::Slam {
            radius,
            damage,
            knockback,
        } => {
            let center = player_tf.translation;
            for (entity, enemy_tf) in &enemies {
                if within_radius_xz(center, enemy_tf.translation, radius) {
                    commands.trigger(DamageDealt {
                        target: entity,
                        damage,
                        impulse: slam_impulse(center, enemy_tf.translation, radius, knockback),
                        point: enemy_tf.translation + Vec3::Y * 0.9,
                    });
                }
            }
        }
    }

    cooldown.arm();
    commands.trigger(Toast(player.class.ability_label().to_uppercase()));
}
