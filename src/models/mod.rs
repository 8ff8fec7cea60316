use bevy::prelude::*;
use bevy_enhanced_input::prelude::*;
use serde::{Deserialize, Serialize};

mod class;
mod config;
mod event_dispatch;
mod ext_traits;
mod input;
mod player;
mod primitives;
mod settings;
mod states;

pub use class::*;
pub use config::*;
pub use event_dispatch::*;
pub use ext_traits::*;
pub use input::*;
pub use player::*;
pub use primitives::*;
pub use settings::*;
pub use states::*;

pub fn plugin(app: &mut App) {
    app.configure_sets(
        FixedUpdate,
        (
            AppSystems::TickTimers,
            AppSystems::RecordInput,
            AppSystems::Update,
        )
            .chain(),
    );
    app.configure_sets(
        Update,
        (
            PostPhysicsAppSystems::TickTimers,
            PostPhysicsAppSystems::ChangeUi,
            PostPhysicsAppSystems::Update,
        )
            .chain(),
    );

    app.add_plugins((
        settings::plugin,
        states::plugin,
        input::plugin,
        event_dispatch::plugin,
    ));
}

/// High-level groupings of systems for the app in the [`FixedUpdate`] schedule,
/// running alongside the physics step.
#[derive(SystemSet, Debug, Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum AppSystems {
    /// Tick timers.
    TickTimers,
    /// Record player input.
    RecordInput,
    /// Do everything else (consider splitting this into further variants).
    Update,
}

/// High-level groupings of systems for the app in the [`Update`] schedule.
/// When adding a new variant, make sure to order it in the `configure_sets`
/// call above.
#[derive(SystemSet, Debug, Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum PostPhysicsAppSystems {
    /// Tick timers.
    TickTimers,
    /// Change UI.
    ChangeUi,
    /// Do everything else (consider splitting this into further variants).
    Update,
}
