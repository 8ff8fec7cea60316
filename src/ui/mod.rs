use crate::*;
use bevy::{prelude::*, ui::Val::*, ui_widgets::Button};

mod constants;
pub mod hud;
mod interaction;
mod props;
mod toast;
mod widget;

pub use constants::*;
pub use props::*;
pub use widget::*;

pub fn plugin(app: &mut App) {
    app.add_plugins((interaction::plugin, hud::plugin, toast::plugin));
}
