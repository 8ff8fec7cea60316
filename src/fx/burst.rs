use bevy::prelude::*;

use crate::combat::HitLanded;
use crate::models::Screen;

const SHARD_COUNT: u32 = 8;

/// Pre-created assets for hit bursts, shared by every shard.
#[derive(Resource)]
struct BurstAssets {
    mesh: Handle<Mesh>,
    material: Handle<StandardMaterial>,
}

/// One shard of a radial hit burst, flying outward and shrinking.
#[derive(Component)]
struct Shard {
    timer: f32,
    ttl: f32,
    direction: Vec3,
    speed: f32,
    start: Vec3,
}

pub(super) fn plugin(app: &mut App) {
    app.add_systems(Startup, setup_burst_assets)
        .add_observer(on_hit_burst)
        .add_systems(Update, tick_shards);
}

fn setup_burst_assets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mesh = meshes.add(Cuboid::new(0.12, 0.12, 0.3));
    let material = materials.add(StandardMaterial {
        base_color: Color::srgba(1.0, 0.85, 0.45, 1.0),
        emissive: LinearRgba::new(10.0, 7.0, 1.5, 1.0),
        alpha_mode: AlphaMode::Add,
        unlit: true,
        ..default()
    });
    commands.insert_resource(BurstAssets { mesh, material });
}

/// Spawn shards in an even ring around the impact point, with a little
/// random vertical spread so it reads as a burst rather than a disc.
fn on_hit_burst(on: On<HitLanded>, assets: Res<BurstAssets>, mut commands: Commands) {
    let point = on.event().point;
    let mut rng = rand::rng();

    for i in 0..SHARD_COUNT {
        let angle = (i as f32 / SHARD_COUNT as f32) * std::f32::consts::TAU;
        let vertical = rand::Rng::random_range(&mut rng, -0.3..0.6);
        let dir = Vec3::new(angle.cos(), vertical, angle.sin()).normalize();
        let speed = rand::Rng::random_range(&mut rng, 2.5..5.0);
        let ttl = rand::Rng::random_range(&mut rng, 0.15..0.3);

        commands.spawn((
            Shard {
                timer: 0.0,
                ttl,
                direction: dir,
                speed,
                start: point,
            },
            DespawnOnExit(Screen::Gameplay),
            Mesh3d(assets.mesh.clone()),
            MeshMaterial3d(assets.material.clone()),
            Transform::from_translation(point)
                .with_rotation(Quat::from_rotation_arc(Vec3::Z, dir))
                .with_scale(Vec3::new(0.4, 0.4, 0.8)),
        ));
    }
}

fn tick_shards(
    time: Res<Time>,
    mut shards: Query<(Entity, &mut Shard, &mut Transform)>,
    mut commands: Commands,
) {
    for (entity, mut shard, mut transform) in &mut shards {
        shard.timer += time.delta_secs();
        let t = (shard.timer / shard.ttl).min(1.0);

        if t >= 1.0 {
            commands.entity(entity).despawn();
            continue;
        }

        transform.translation = shard.start + shard.direction * shard.speed * shard.timer;

        // Stretch along the flight path while shrinking away.
        let fade = 1.0 - t;
        let stretch = 1.0 + t * 2.0;
        transform.scale = Vec3::new(0.3 * fade, 0.3 * fade, 0.8 * stretch * fade);
    }
}
