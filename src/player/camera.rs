use super::*;
use bevy::anti_alias::fxaa::Fxaa;
use bevy::render::view::Hdr;
use bevy::window::{CursorGrabMode, CursorOptions, PrimaryWindow};

/// Where the camera parks while menus are up, looking over the arena.
const MENU_VANTAGE: Vec3 = Vec3::new(24.0, 14.0, 24.0);

/// Accumulated look angles, in radians. Lives on the player so a respawn
/// starts with a level view.
#[derive(Component, Reflect, Debug, Clone, Default)]
#[reflect(Component)]
pub struct LookAngles {
    pub yaw: f32,
    pub pitch: f32,
}

pub fn plugin(app: &mut App) {
    app.register_type::<LookAngles>()
        .add_systems(Startup, spawn_camera)
        .add_systems(OnEnter(Screen::Gameplay), grab_pointer)
        .add_systems(OnExit(Screen::Gameplay), (release_pointer, park_camera))
        .add_systems(
            Update,
            (
                apply_look.run_if(in_state(Screen::Gameplay)),
                glue_camera_to_head.run_if(in_state(Screen::Gameplay)),
                watch_pointer_unlock.run_if(in_state(Screen::Gameplay)),
                apply_fov.run_if(resource_changed::<Settings>),
            )
                .chain()
                .in_set(PostPhysicsAppSystems::Update),
        );
}

fn spawn_camera(settings: Res<Settings>, mut commands: Commands) {
    commands.spawn((
        SceneCamera,
        IsDefaultUiCamera,
        Camera3d::default(),
        Camera::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: settings.fov.to_radians(),
            ..default()
        }),
        Transform::from_translation(MENU_VANTAGE).looking_at(Vec3::ZERO, Vec3::Y),
        Hdr,
        Fxaa::default(),
    ));
}

fn park_camera(mut camera: Query<&mut Transform, With<SceneCamera>>) -> Result {
    let mut transform = camera.single_mut()?;
    *transform = Transform::from_translation(MENU_VANTAGE).looking_at(Vec3::ZERO, Vec3::Y);
    Ok(())
}

/// Turn accumulated mouse motion into body yaw and head pitch. The body
/// only ever yaws so physics stays upright, the pitch lives on the camera.
fn apply_look(
    settings: Res<Settings>,
    config: Res<Config>,
    pan: Single<&Action<Pan>>,
    mut player: Query<(&mut Transform, &mut LookAngles), (With<Player>, Without<DeathTimer>)>,
) {
    let delta = **pan.into_inner();
    if delta == Vec2::ZERO {
        return;
    }
    let Ok((mut transform, mut look)) = player.single_mut() else {
        return;
    };

    let invert = if settings.invert_y { -1.0 } else { 1.0 };
    look.yaw += delta.x * settings.sensitivity;
    look.pitch = (look.pitch + delta.y * settings.sensitivity * invert)
        .clamp(-config.camera.pitch_limit, config.camera.pitch_limit);

    transform.rotation = Quat::from_rotation_y(look.yaw);
}

fn glue_camera_to_head(
    config: Res<Config>,
    player: Query<(&Transform, &LookAngles), With<Player>>,
    mut camera: Query<&mut Transform, (With<SceneCamera>, Without<Player>)>,
) -> Result {
    let Ok((body, look)) = player.single() else {
        return Ok(());
    };
    let mut cam = camera.single_mut()?;

    cam.translation = body.translation + Vec3::Y * config.camera.eye_height;
    cam.rotation = Quat::from_rotation_y(look.yaw) * Quat::from_rotation_x(look.pitch);
    Ok(())
}

fn apply_fov(
    settings: Res<Settings>,
    mut camera: Query<&mut Projection, With<SceneCamera>>,
) -> Result {
    let mut projection = camera.single_mut()?;
    if let Projection::Perspective(ref mut perspective) = *projection {
        perspective.fov = settings.fov.to_radians();
    }
    Ok(())
}

fn grab_pointer(mut cursor: Query<&mut CursorOptions, With<PrimaryWindow>>) {
    if let Ok(mut cursor) = cursor.single_mut() {
        cursor.grab_mode = CursorGrabMode::Locked;
        cursor.visible = false;
    }
}

fn release_pointer(mut cursor: Query<&mut CursorOptions, With<PrimaryWindow>>) {
    if let Ok(mut cursor) = cursor.single_mut() {
        cursor.grab_mode = CursorGrabMode::None;
        cursor.visible = true;
    }
}

/// Browsers release pointer lock on Escape without delivering the key, so a
/// cursor that comes unlocked mid-run counts as leaving for the lobby.
fn watch_pointer_unlock(
    cursor: Query<&CursorOptions, With<PrimaryWindow>>,
    mut commands: Commands,
) {
    if let Ok(cursor) = cursor.single() {
        if cursor.grab_mode == CursorGrabMode::None {
            commands.trigger(GoTo(Screen::Lobby));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::state::app::StatesPlugin;

    #[derive(Resource, Default)]
    struct LobbyTrips(u32);

    #[test]
    fn external_unlock_heads_back_to_the_lobby() {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, StatesPlugin));
        app.init_state::<Screen>();
        app.init_resource::<LobbyTrips>();
        app.add_systems(
            Update,
            watch_pointer_unlock.run_if(in_state(Screen::Gameplay)),
        );
        app.add_observer(|on: On<GoTo>, mut trips: ResMut<LobbyTrips>| {
            if on.0 == Screen::Lobby {
                trips.0 += 1;
            }
        });

        app.world_mut().spawn((
            PrimaryWindow,
            CursorOptions {
                grab_mode: CursorGrabMode::Locked,
                visible: false,
                ..default()
            },
        ));
        app.world_mut()
            .resource_mut::<NextState<Screen>>()
            .set(Screen::Gameplay);

        // While the lock holds, nothing fires.
        app.update();
        assert_eq!(app.world().resource::<LobbyTrips>().0, 0);

        let mut cursors = app
            .world_mut()
            .query_filtered::<&mut CursorOptions, With<PrimaryWindow>>();
        cursors.single_mut(app.world_mut()).unwrap().grab_mode = CursorGrabMode::None;

        app.update();
        assert_eq!(app.world().resource::<LobbyTrips>().0, 1);
    }
}
