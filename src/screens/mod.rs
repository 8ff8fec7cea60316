//! The game's main screen states and transitions between them.

use crate::{models::*, *};
use bevy::ui::Val::*;

mod loading;
mod lobby;
mod title;

pub fn plugin(app: &mut App) {
    app.init_state::<Screen>();

    app.add_plugins((loading::plugin, title::plugin, lobby::plugin))
    .add_observer(on_back)
    .add_observer(on_go_to)
    .add_observer(on_start_run);
}

fn on_back(trigger: On<Back>, mut next_screen: ResMut<NextState<Screen>>) {
    next_screen.set(trigger.event().screen.clone());
}

pub fn on_go_to(goto: On<GoTo>, mut next_screen: ResMut<NextState<Screen>>) {
    next_screen.set(goto.event().0.clone());
}

/// A confirmed loadout starts a run: counters drop to zero, the class
/// selection carries over into the arena.
fn on_start_run(
    _: On<StartRun>,
    mut session: ResMut<Session>,
    mut next_screen: ResMut<NextState<Screen>>,
) {
    session.reset();
    next_screen.set(Screen::Gameplay);
}

// TODO: figure out nice click_go_to(Screen::Title) HOF
pub mod to {
    use super::*;

    pub fn title(_: On<Pointer<Click>>, mut commands: Commands) {
        commands.trigger(GoTo(Screen::Title));
    }
    pub fn lobby(_: On<Pointer<Click>>, mut commands: Commands) {
        commands.trigger(GoTo(Screen::Lobby));
    }
    pub fn arena(_: On<Pointer<Click>>, mut commands: Commands) {
        commands.trigger(StartRun);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::state::app::StatesPlugin;

    /// Just the state machine and its observers, no windowing or rendering.
    fn headless_app() -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, StatesPlugin));
        app.init_state::<Screen>();
        app.init_resource::<Session>();
        app.add_observer(on_back)
            .add_observer(on_go_to)
            .add_observer(on_start_run);
        app
    }

    fn current_screen(app: &App) -> Screen {
        app.world().resource::<State<Screen>>().get().clone()
    }

    #[test]
    fn goto_moves_the_state_machine() {
        let mut app = headless_app();
        app.update();
        assert_eq!(current_screen(&app), Screen::Loading);

        app.world_mut().trigger(GoTo(Screen::Title));
        app.update();
        assert_eq!(current_screen(&app), Screen::Title);
    }

    #[test]
    fn back_retreats_to_the_given_screen() {
        let mut app = headless_app();
        app.world_mut().trigger(GoTo(Screen::Gameplay));
        app.update();

        let entity = app.world_mut().spawn_empty().id();
        app.world_mut().trigger(Back {
            entity,
            screen: Screen::Lobby,
        });
        app.update();
        assert_eq!(current_screen(&app), Screen::Lobby);
    }

    #[test]
    fn starting_a_run_resets_counters_and_enters_gameplay() {
        let mut app = headless_app();
        {
            let mut session = app.world_mut().resource_mut::<Session>();
            session.class = CharacterClass::Wizard;
            session.wave = 4;
            session.kills = 9;
        }

        app.world_mut().trigger(StartRun);
        app.update();

        let session = app.world().resource::<Session>();
        assert_eq!(session.class, CharacterClass::Wizard);
        assert_eq!(session.wave, 0);
        assert_eq!(session.kills, 0);
        assert_eq!(current_screen(&app), Screen::Gameplay);
    }
}
