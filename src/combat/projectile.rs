use super::*;

pub(super) fn plugin(app: &mut App) {
    app.add_systems(Startup, setup_tracer_assets).add_systems(
        Update,
        tick_tracers
            .run_if(in_state(Screen::Gameplay))
            .in_set(PostPhysicsAppSystems::Update),
    );
}

/// Pre-created assets for tracers to avoid memory leaks on WASM
#[derive(Resource)]
pub struct TracerAssets {
    pub mesh: Handle<Mesh>,
    pub material: Handle<StandardMaterial>,
}

/// Cosmetic streak flying along a shot's path. Damage is resolved the moment
/// the shot is fired, the tracer only shows where it went.
#[derive(Component)]
pub struct Tracer {
    pub velocity: Vec3,
    pub ttl: Timer,
}

fn setup_tracer_assets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mesh = meshes.add(Cuboid::new(0.06, 0.06, 0.55));
    let material = materials.add(StandardMaterial {
        base_color: Color::srgba(1.0, 0.9, 0.5, 1.0),
        emissive: LinearRgba::new(12.0, 9.0, 2.5, 1.0),
        alpha_mode: AlphaMode::Add,
        unlit: true,
        ..default()
    });
    commands.insert_resource(TracerAssets { mesh, material });
}

/// The tracer dies exactly when it reaches the impact point, so its lifetime
/// is distance over speed, capped by the configured TTL.
pub(super) fn spawn_tracer(
    commands: &mut Commands,
    assets: &TracerAssets,
    config: &Config,
    origin: Vec3,
    end: Vec3,
) {
    let delta = end - origin;
    let length = delta.length();
    if length < 1e-3 {
        return;
    }
    let dir = delta / length;
    // Offset the spawn a little so the streak doesn't clip the camera.
    let muzzle = origin + dir * 0.5 - Vec3::Y * 0.12;
    let ttl = (length / config.combat.tracer_speed).min(config.combat.tracer_ttl);

    commands.spawn((
        Name::new("Tracer"),
        DespawnOnExit(Screen::Gameplay),
        Tracer {
            velocity: dir * config.combat.tracer_speed,
            ttl: Timer::from_seconds(ttl, TimerMode::Once),
        },
        Mesh3d(assets.mesh.clone()),
        MeshMaterial3d(assets.material.clone()),
        Transform::from_translation(muzzle).looking_to(dir, Vec3::Y),
    ));
}

fn tick_tracers(
    time: Res<Time>,
    mut tracers: Query<(Entity, &mut Tracer, &mut Transform)>,
    mut commands: Commands,
) {
    for (entity, mut tracer, mut transform) in &mut tracers {
        tracer.ttl.tick(time.delta());
        if tracer.ttl.is_finished() {
            commands.entity(entity).despawn();
            continue;
        }
        transform.translation += tracer.velocity * time.delta_secs();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::time::TimeUpdateStrategy;
    use std::time::Duration;

    #[test]
    fn tracers_fly_straight_and_die_on_schedule() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(
            100,
        )));
        app.add_systems(Update, tick_tracers);

        let tracer = app
            .world_mut()
            .spawn((
                Tracer {
                    velocity: Vec3::X * 10.0,
                    ttl: Timer::from_seconds(0.25, TimerMode::Once),
                },
                Transform::default(),
            ))
            .id();

        // The clock's first tick has a zero delta, the next two advance
        // 0.1 s each.
        app.update();
        app.update();
        app.update();

        let transform = app.world().get::<Transform>(tracer).unwrap();
        assert!((transform.translation.x - 2.0).abs() < 1e-4);

        // One more tick runs the timer out.
        app.update();
        assert!(app.world().get::<Transform>(tracer).is_none());
    }
}
