use super::*;

/// A short breather standing in for asset work, so the title never pops in
/// on the very first frame.
pub(super) fn plugin(app: &mut App) {
    app.add_systems(OnEnter(Screen::Loading), setup)
        .add_systems(Update, advance.run_if(in_state(Screen::Loading)));
}

fn setup(mut commands: Commands) {
    commands.spawn((
        DespawnOnExit(Screen::Loading),
        ui_root("Loading UI"),
        children![label(
            Props::from("LOADING...")
                .font_size(32.0)
                .color(colors::NEUTRAL400)
        )],
    ));
}

fn advance(
    time: Res<Time>,
    cfg: Res<Config>,
    mut elapsed: Local<f32>,
    mut next_screen: ResMut<NextState<Screen>>,
) {
    *elapsed += time.delta_secs();
    if *elapsed >= cfg.timers.loading {
        next_screen.set(Screen::Title);
    }
}
