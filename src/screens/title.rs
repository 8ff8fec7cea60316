use super::*;

/// This plugin is responsible for the game menu
/// The menu is only drawn during the State [`Screen::Title`] and is removed when that state is exited
pub(super) fn plugin(app: &mut App) {
    app.add_systems(OnEnter(Screen::Title), setup_menu);
}

fn setup_menu(mut commands: Commands) {
    commands.spawn((
        DespawnOnExit(Screen::Title),
        UiCtx,
        ui_root("Title UI"),
        children![
            header(
                Props::from("WASM ARENA")
                    .font_size(64.0)
                    .color(colors::NEUTRAL100)
            ),
            label(Props::from("a first-person class brawl").color(colors::NEUTRAL400)),
            (
                Node {
                    flex_direction: FlexDirection::Column,
                    align_items: AlignItems::Center,
                    row_gap: Vh(1.0),
                    margin: UiRect::top(Vh(4.0)),
                    ..default()
                },
                // Crutch until we can use #cfg in children![] macro
                // https://github.com/bevyengine/bevy/issues/18953
                #[cfg(target_arch = "wasm32")]
                children![btn_big("PLAY", to::lobby)],
                #[cfg(not(target_arch = "wasm32"))]
                children![btn_big("PLAY", to::lobby), btn_big("EXIT", exit_app)],
            ),
            label(Props::from("ENTER to continue").color(colors::NEUTRAL500)),
        ],
    ));
}

#[cfg(not(target_arch = "wasm32"))]
fn exit_app(_: On<Pointer<Click>>, mut app_exit: MessageWriter<AppExit>) {
    app_exit.write(AppExit::Success);
}
