use super::*;

pub fn plugin(app: &mut App) {
    app.add_observer(back).add_observer(confirm).add_observer(call_wave);
}

#[derive(Event)]
pub struct GoTo(pub Screen);

#[derive(EntityEvent)]
pub struct Back {
    pub entity: Entity,
    pub screen: Screen,
}

/// Confirmed class selection: spawn the player and enter gameplay.
#[derive(Event)]
pub struct StartRun;

/// Ask for a fresh batch of enemies.
#[derive(Event)]
pub struct WaveRequested;

/// Transient corner notification.
#[derive(Event)]
pub struct Toast(pub String);

// ================== trigger events on input ========================
fn back(on: On<Start<Escape>>, screen: Res<State<Screen>>, mut commands: Commands) {
    let target = match screen.get() {
        Screen::Gameplay => Screen::Lobby,
        Screen::Lobby => Screen::Title,
        // Nothing to leave on the outer screens
        Screen::Loading | Screen::Title => return,
    };
    commands.trigger(Back {
        entity: on.event_target(),
        screen: target,
    });
}

fn confirm(_: On<Start<Confirm>>, screen: Res<State<Screen>>, mut commands: Commands) {
    match screen.get() {
        Screen::Title => commands.trigger(GoTo(Screen::Lobby)),
        Screen::Lobby => commands.trigger(StartRun),
        _ => {}
    }
}

fn call_wave(_: On<Start<CallWave>>, screen: Res<State<Screen>>, mut commands: Commands) {
    if *screen.get() == Screen::Gameplay {
        commands.trigger(WaveRequested);
    }
}
