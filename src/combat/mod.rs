use crate::models::*;
use crate::*;

mod abilities;
mod components;
mod damage;
mod events;
mod projectile;
mod rules;
mod shoot;

pub use components::*;
pub use events::*;
pub use projectile::*;
pub use rules::*;
pub use shoot::*;

pub fn plugin(app: &mut App) {
    app.add_plugins((
        abilities::plugin,
        components::plugin,
        damage::plugin,
        projectile::plugin,
        shoot::plugin,
    ));
}
