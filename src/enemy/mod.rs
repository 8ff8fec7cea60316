use crate::combat::{DamageDealt, Enemy, Health};
use crate::models::*;
use crate::*;
use avian3d::prelude::{Collider, LinearVelocity, LockedAxes, RigidBody};

pub mod steering;

pub fn plugin(app: &mut App) {
    app.add_systems(Startup, setup_enemy_assets)
        .add_systems(OnEnter(Screen::Gameplay), first_wave)
        .add_observer(spawn_wave)
        .add_systems(
            FixedUpdate,
            tick_melee_timers
                .run_if(in_state(Screen::Gameplay))
                .in_set(AppSystems::TickTimers),
        )
        .add_systems(
            FixedUpdate,
            (chase_player, swing_at_player)
                .chain()
                .run_if(in_state(Screen::Gameplay))
                .in_set(AppSystems::Update),
        );
}

/// Pre-created assets shared by every grunt in a wave.
#[derive(Resource)]
struct EnemyAssets {
    mesh: Handle<Mesh>,
    material: Handle<StandardMaterial>,
}

fn setup_enemy_assets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mesh = meshes.add(Capsule3d::new(0.4, 1.0));
    let material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.8, 0.2, 0.2),
        perceptual_roughness: 0.8,
        ..default()
    });
    commands.insert_resource(EnemyAssets { mesh, material });
}

/// Every run opens with a wave already inbound.
fn first_wave(mut commands: Commands) {
    commands.trigger(WaveRequested);
}

/// Observer: bring in the next wave. Any leftovers from the previous wave
/// are cleared first, so the arena only ever holds one wave at a time.
fn spawn_wave(
    _on: On<WaveRequested>,
    config: Res<Config>,
    assets: Res<EnemyAssets>,
    leftovers: Query<Entity, With<Enemy>>,
    mut session: ResMut<Session>,
    mut commands: Commands,
) {
    for entity in &leftovers {
        commands.entity(entity).despawn();
    }

    session.wave += 1;
    let scatter = config.enemy.scatter;
    let mut rng = rand::rng();

    for i in 0..config.enemy.wave_size {
        let x = rand::Rng::random_range(&mut rng, -scatter..scatter);
        let z = rand::Rng::random_range(&mut rng, -scatter..scatter);

        commands.spawn((
            Name::new(format!("Grunt {i}")),
            DespawnOnExit(Screen::Gameplay),
            Enemy,
            Health::new(config.enemy.health),
            MeleeTimer(Timer::from_seconds(
                config.enemy.melee_cooldown,
                TimerMode::Once,
            )),
            Transform::from_xyz(x, 1.0, z),
            Mesh3d(assets.mesh.clone()),
            MeshMaterial3d(assets.material.clone()),
            // Physics
            Collider::capsule(0.4, 1.0),
            RigidBody::Dynamic,
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
        ));
    }

    info!(wave = session.wave, count = config.enemy.wave_size, "wave spawned");
    commands.trigger(Toast(format!("WAVE {}", session.wave)));
}

fn tick_melee_timers(time: Res<Time>, mut timers: Query<&mut MeleeTimer>) {
    for mut timer in &mut timers {
        timer.tick(time.delta());
    }
}

/// Drive every grunt's velocity toward the player, swerving around the
/// obstacle ring. The physics step integrates the result.
fn chase_player(
    time: Res<Time>,
    config: Res<Config>,
    player: Query<&Transform, With<Player>>,
    obstacles: Query<&Transform, (With<Obstacle>, Without<Enemy>)>,
    mut enemies: Query<(&Transform, &mut LinearVelocity), (With<Enemy>, Without<Player>)>,
) {
    let Ok(player_tf) = player.single() else {
        return;
    };
    let obstacle_pos: Vec<Vec3> = obstacles.iter().map(|t| t.translation).collect();

    for (transform, mut velocity) in &mut enemies {
        velocity.0 = steering::steer_velocity(
            transform.translation,
            velocity.0,
            player_tf.translation,
            &obstacle_pos,
            &config.enemy,
            time.delta_secs(),
        );
    }
}

/// Grunts in arm's reach take a swing whenever their cooldown allows.
fn swing_at_player(
    config: Res<Config>,
    player: Query<(Entity, &Transform), With<Player>>,
    mut enemies: Query<(&Transform, &mut MeleeTimer), With<Enemy>>,
    mut commands: Commands,
) {
    let Ok((player_entity, player_tf)) = player.single() else {
        return;
    };

    for (transform, mut timer) in &mut enemies {
        if !timer.is_finished() {
            continue;
        }
        let reach = combat::distance_xz(transform.translation, player_tf.translation);
        if reach <= config.enemy.melee_range {
            timer.reset();
            commands.trigger(DamageDealt {
                target: player_entity,
                damage: config.enemy.melee_damage,
                impulse: Vec3::ZERO,
                point: player_tf.translation + Vec3::Y * 1.2,
            });
        }
    }
}
