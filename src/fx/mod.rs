//! Transient combat feedback: floating damage text and impact bursts.

use bevy::prelude::*;

mod burst;
mod floaters;

pub fn plugin(app: &mut App) {
    app.add_plugins((burst::plugin, floaters::plugin));
}
