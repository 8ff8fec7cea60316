use super::*;

pub fn plugin(app: &mut App) {
    app.add_systems(
        Update,
        movement
            .in_set(TnuaUserControlsSystems)
            .run_if(in_state(Screen::Gameplay)),
    )
    .add_observer(handle_jump);
}

/// Tnua configuration is tricky to grasp from the get go, this is the best demo:
/// <https://github.com/idanarye/bevy-tnua/blob/main/demos/src/character_control_systems/platformer_control_systems.rs>
fn movement(
    navigate: Single<&Action<Navigate>>,
    mut player: Single<(&Player, &Transform, &mut TnuaController, Has<DeathTimer>)>,
) {
    let (player, transform, controller, dead) = &mut *player;

    // A downed player stops steering but the basis keeps getting fed so the
    // body settles instead of sliding on its last heading.
    let direction = if *dead {
        Vec3::ZERO
    } else {
        transform.movement_direction(***navigate)
    };

    let float_height = 0.15; // Lower to reduce hovering
    controller.basis(TnuaBuiltinWalk {
        float_height,
        cling_distance: float_height + 0.05,
        spring_strength: 500.0, // Stronger spring for a more grounded feel.
        spring_dampening: 1.0,
        acceleration: 80.0, // Snappier movement starts and stops.
        air_acceleration: 50.0, // Good air control for jumping over enemies
        free_fall_extra_gravity: 70.0, // Slightly increased for a less floaty fall.
        desired_velocity: direction * player.speed,
        // Yaw is written straight to the transform by the look system, so the
        // walk basis never turns the body on its own.
        desired_forward: None,
        ..Default::default()
    });
}

fn handle_jump(
    on: On<Fire<Jump>>,
    cfg: Res<Config>,
    mut player_query: Query<&mut TnuaController, (With<Player>, Without<DeathTimer>)>,
) {
    let Ok(mut controller) = player_query.get_mut(on.context) else {
        return;
    };

    controller.action(TnuaBuiltinJump {
        height: cfg.player.movement.jump_height,
        takeoff_extra_gravity: 40.0,
        fall_extra_gravity: 35.0, // Slightly reduced for better air control
        shorten_extra_gravity: 80.0, // Keep short hops possible
        ..Default::default()
    });
}
