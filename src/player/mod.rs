use crate::combat::{AbilityCooldown, Died, Health};
use crate::*;
use avian3d::prelude::*;
use bevy_enhanced_input::prelude::*;
use bevy_tnua::prelude::*;
use bevy_tnua_avian3d::*;

mod camera;
pub mod control;

pub use camera::LookAngles;

/// First-person body: spawning, the death sequence and the camera rig.
/// Movement itself lives in [`control`].
pub fn plugin(app: &mut App) {
    app.add_plugins((
        TnuaControllerPlugin::new(FixedUpdate),
        TnuaAvian3dPlugin::new(FixedUpdate),
        camera::plugin,
        control::plugin,
    ));

    app.add_systems(OnEnter(Screen::Gameplay), spawn_player)
        .add_systems(
            Update,
            tick_death_timer
                .in_set(PostPhysicsAppSystems::TickTimers)
                .run_if(in_state(Screen::Gameplay)),
        )
        .add_observer(on_player_died)
        .add_observer(handle_respawn);
}

pub fn spawn_player(
    cfg: Res<Config>,
    session: Res<Session>,
    existing: Query<Entity, With<Player>>,
    mut commands: Commands,
) {
    // One body at a time; a leftover from the previous run goes first.
    for entity in &existing {
        commands.entity(entity).despawn();
    }

    let spec = session.class.spec();
    let collider = Collider::capsule(cfg.player.hitbox.radius, cfg.player.hitbox.height);

    // The first trigger pull should never wait out a full interval.
    let mut shot_timer = Timer::from_seconds(spec.shot_interval, TimerMode::Once);
    shot_timer.set_elapsed(shot_timer.duration());

    commands.spawn((
        Name::new("Player"),
        DespawnOnExit(Screen::Gameplay),
        Transform::from_translation(Vec3::from(cfg.player.spawn_pos)),
        Player {
            class: session.class,
            speed: cfg.player.movement.speed,
        },
        PlayerCtx,
        LookAngles::default(),
        // tnua character control bundles
        (
            TnuaController::default(),
            // The look system owns the body's yaw, so no axis is left for
            // the physics solver to turn.
            LockedAxes::ROTATION_LOCKED,
            // A sensor shape is not strictly necessary, but without it we'll get weird results.
            TnuaAvian3dSensorShape(collider.clone()),
        ),
        // physics
        (
            collider,
            RigidBody::Dynamic,
            Friction::ZERO.with_combine_rule(CoefficientCombine::Multiply),
        ),
        // combat components
        (
            Health::new(spec.max_health),
            ShotTimer(shot_timer),
            AbilityCooldown::default(),
        ),
    ));

    info!(class = session.class.label(), "player spawned");
}

/// Freezes the controls for a moment of feedback, then hands the run back
/// to the lobby once the timer in [`tick_death_timer`] runs out.
fn on_player_died(
    on: On<Died>,
    cfg: Res<Config>,
    players: Query<(), With<Player>>,
    mut commands: Commands,
) {
    if !players.contains(on.entity) {
        return;
    }
    commands.entity(on.entity).insert(DeathTimer(Timer::from_seconds(
        cfg.timers.death_delay,
        TimerMode::Once,
    )));
    commands.trigger(Toast("YOU DIED".into()));
}

fn tick_death_timer(
    time: Res<Time>,
    mut players: Query<&mut DeathTimer, With<Player>>,
    mut commands: Commands,
) {
    for mut timer in &mut players {
        if timer.tick(time.delta()).just_finished() {
            commands.trigger(GoTo(Screen::Lobby));
        }
    }
}

/// KeyR: scrap the current body and start over with a fresh one. Pressing
/// it during the death linger skips the trip back to the lobby.
fn handle_respawn(_: On<Start<Respawn>>, screen: Res<State<Screen>>, mut commands: Commands) {
    if *screen.get() == Screen::Gameplay {
        commands.run_system_cached(spawn_player);
    }
}
