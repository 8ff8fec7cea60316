use crate::*;

#[cfg(feature = "dev")]
mod dev_tools;

pub fn plugin(app: &mut App) {
    app.add_plugins((
        models::plugin,
        scene::plugin,
        player::plugin,
        combat::plugin,
        enemy::plugin,
        fx::plugin,
        #[cfg(feature = "dev")]
        dev_tools::plugin,
        screens::plugin,
    ));
}
