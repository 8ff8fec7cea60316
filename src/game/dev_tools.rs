//! Development tools for the game. This plugin is only enabled in dev builds.
use super::*;
use avian3d::prelude::{PhysicsDebugPlugin, PhysicsGizmos};
use bevy::{dev_tools::states::log_transitions, input::common_conditions::input_just_pressed};
#[cfg(feature = "dev_native")]
use bevy::input::common_conditions::input_toggle_active;
#[cfg(feature = "dev_native")]
use bevy_inspector_egui::{bevy_egui::EguiPlugin, quick::WorldInspectorPlugin};

pub(super) fn plugin(app: &mut App) {
    #[cfg(feature = "dev_native")]
    app.add_plugins(EguiPlugin::default()).add_plugins(
        WorldInspectorPlugin::new().run_if(input_toggle_active(false, KeyCode::Backquote)),
    );

    // Collider outlines start hidden, F3 brings them up.
    app.add_plugins(PhysicsDebugPlugin::default()).insert_gizmo_config(
        PhysicsGizmos::default(),
        GizmoConfig {
            enabled: false,
            ..default()
        },
    );

    app.add_systems(
        Update,
        (
            log_transitions::<Screen>,
            toggle_ui_debug.run_if(input_just_pressed(KeyCode::Tab)),
            toggle_physics_gizmos.run_if(input_just_pressed(KeyCode::F3)),
        ),
    );
}

fn toggle_ui_debug(mut options: ResMut<UiDebugOptions>) {
    options.toggle();
}

fn toggle_physics_gizmos(mut store: ResMut<GizmoConfigStore>) {
    let (config, _) = store.config_mut::<PhysicsGizmos>();
    config.enabled = !config.enabled;
}
