//! Procedural arena: a flat floor, a ring of blocks to duck behind and
//! enough light to read the fight by. Everything is rebuilt from the same
//! pre-created assets each time gameplay starts.
use crate::*;
use avian3d::prelude::*;
use std::f32::consts::TAU;

pub fn plugin(app: &mut App) {
    app.add_plugins(PhysicsPlugins::default())
        .insert_resource(ClearColor(colors::VOID))
        .add_systems(Startup, setup_arena_assets)
        .add_systems(OnEnter(Screen::Gameplay), setup);
}

/// Unit meshes shared across gameplay entries; sizing happens on the
/// transform so a `config.ron` override still applies.
#[derive(Resource)]
struct ArenaAssets {
    plane: Handle<Mesh>,
    cube: Handle<Mesh>,
    ground_material: Handle<StandardMaterial>,
    block_material: Handle<StandardMaterial>,
}

fn setup_arena_assets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let plane = meshes.add(Plane3d::default().mesh().size(1.0, 1.0));
    let cube = meshes.add(Cuboid::from_length(1.0));
    let ground_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.16, 0.17, 0.19),
        perceptual_roughness: 0.95,
        ..default()
    });
    let block_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.34, 0.36, 0.41),
        perceptual_roughness: 0.9,
        ..default()
    });

    commands.insert_resource(ArenaAssets {
        plane,
        cube,
        ground_material,
        block_material,
    });
}

pub fn setup(cfg: Res<Config>, assets: Res<ArenaAssets>, mut commands: Commands) {
    let size = cfg.arena.size;

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 400.0,
        ..Default::default()
    });

    commands.spawn((
        Name::new("Sun"),
        DespawnOnExit(Screen::Gameplay),
        DirectionalLight {
            illuminance: 4_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(12.0, 20.0, 8.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.spawn((
        Name::new("Ground"),
        DespawnOnExit(Screen::Gameplay),
        Ground,
        Mesh3d(assets.plane.clone()),
        MeshMaterial3d(assets.ground_material.clone()),
        Transform::from_scale(Vec3::new(size, 1.0, size)),
        Collider::half_space(Vec3::Y),
        RigidBody::Static,
    ));

    // Invisible perimeter, so nobody gets knocked off the map.
    let half = size / 2.0;
    for (pos, scale) in [
        (Vec3::new(half, 2.0, 0.0), Vec3::new(1.0, 4.0, size)),
        (Vec3::new(-half, 2.0, 0.0), Vec3::new(1.0, 4.0, size)),
        (Vec3::new(0.0, 2.0, half), Vec3::new(size, 4.0, 1.0)),
        (Vec3::new(0.0, 2.0, -half), Vec3::new(size, 4.0, 1.0)),
    ] {
        commands.spawn((
            Name::new("Wall"),
            DespawnOnExit(Screen::Gameplay),
            Transform::from_translation(pos).with_scale(scale),
            Collider::cuboid(1.0, 1.0, 1.0),
            RigidBody::Static,
        ));
    }

    // The obstacle ring doubles as steering repulsors for the chasers.
    let ring_radius = size * 0.28;
    let mut rng = rand::rng();
    for i in 0..cfg.arena.obstacle_count {
        let angle = i as f32 / cfg.arena.obstacle_count as f32 * TAU;
        let radius = ring_radius + rand::Rng::random_range(&mut rng, -2.0..2.0);
        let width = rand::Rng::random_range(&mut rng, 1.6..3.2);
        let height = rand::Rng::random_range(&mut rng, 1.8..3.4);

        commands.spawn((
            Name::new(format!("Block {i}")),
            DespawnOnExit(Screen::Gameplay),
            Obstacle,
            Mesh3d(assets.cube.clone()),
            MeshMaterial3d(assets.block_material.clone()),
            Transform::from_xyz(angle.cos() * radius, height * 0.5, angle.sin() * radius)
                .with_scale(Vec3::new(width, height, width)),
            Collider::cuboid(1.0, 1.0, 1.0),
            RigidBody::Static,
        ));
    }
}
