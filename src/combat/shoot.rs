use super::*;
use avian3d::spatial_query::{RayHitData, SpatialQuery, SpatialQueryFilter};
use bevy_enhanced_input::prelude::Fire;
use std::time::Duration;

pub(super) fn plugin(app: &mut App) {
    app.add_observer(handle_shoot).add_systems(
        Update,
        tick_shot_timers
            .run_if(in_state(Screen::Gameplay))
            .in_set(PostPhysicsAppSystems::TickTimers),
    );
}

fn tick_shot_timers(time: Res<Time>, mut timers: Query<&mut ShotTimer>) {
    for mut timer in &mut timers {
        timer.tick(time.delta());
    }
}

/// Fire while the trigger is held, capped at the class fire rate. Each shot
/// is a single ray that stops at the nearest blocker, whatever it is; only
/// enemies take damage from it.
fn handle_shoot(
    on: On<Fire<Shoot>>,
    config: Res<Config>,
    spatial: SpatialQuery,
    camera: Query<&GlobalTransform, With<SceneCamera>>,
    enemies: Query<(), With<Enemy>>,
    assets: Res<TracerAssets>,
    mut players: Query<(&Player, &mut ShotTimer), Without<DeathTimer>>,
    mut commands: Commands,
) {
    let Ok((player, mut shot_timer)) = players.get_mut(on.context) else {
        return;
    };
    if !shot_timer.is_finished() {
        return;
    }
    let Ok(cam) = camera.single() else { return };

    let spec = player.class.spec();
    shot_timer.set_duration(Duration::from_secs_f32(spec.shot_interval));
    shot_timer.reset();

    let origin = cam.translation();
    let dir = cam.forward();
    let (end, hit) = hitscan(
        &spatial,
        &enemies,
        on.context,
        origin,
        dir,
        config.combat.shot_range,
        spec.shot_damage,
    );

    spawn_tracer(&mut commands, &assets, &config, origin, end);
    if let Some(event) = hit {
        commands.trigger(event);
    }
}

/// Cast a single ray and report where it ended up. Returns the endpoint
/// (impact point, or max range if nothing was in the way) and a
/// [`ShotConnected`] when the nearest blocker turned out to be an enemy.
pub(super) fn hitscan(
    spatial: &SpatialQuery,
    enemies: &Query<(), With<Enemy>>,
    shooter: Entity,
    origin: Vec3,
    dir: Dir3,
    range: f32,
    damage: f32,
) -> (Vec3, Option<ShotConnected>) {
    let filter = SpatialQueryFilter::default().with_excluded_entities([shooter]);
    let Some(RayHitData {
        entity, distance, ..
    }) = spatial.cast_ray(origin, dir, range, true, &filter)
    else {
        return (origin + dir * range, None);
    };

    let point = origin + dir * distance;
    let hit = enemies.contains(entity).then(|| ShotConnected {
        target: entity,
        point,
        damage,
    });
    (point, hit)
}
