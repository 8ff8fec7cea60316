use bevy::prelude::*;
use bevy::transform::TransformSystems;

use crate::combat::{Died, Enemy, HitLanded};
use crate::models::{Config, SceneCamera, Screen};
use crate::ui::colors::ACID_GREEN;

const RISE_PIXELS: f32 = 70.0;
const HOLD_FRACTION: f32 = 0.4;

/// A piece of floating text anchored to a world position. Rises on screen,
/// holds, then fades out and despawns.
#[derive(Component)]
struct Floater {
    timer: f32,
    ttl: f32,
    world_pos: Vec3,
    offset: Vec2,
    color: Color,
}

/// Marker for the hidden text that warms the glyph atlas at startup.
#[derive(Component)]
struct GlyphCache;

pub(super) fn plugin(app: &mut App) {
    app.add_observer(on_hit_floater)
        .add_observer(on_kill_floater)
        .add_systems(Startup, warm_glyph_cache)
        // World-to-screen projection needs GlobalTransform to be propagated first
        .add_systems(
            PostUpdate,
            tick_floaters.after(TransformSystems::Propagate),
        );
}

fn warm_glyph_cache(mut commands: Commands) {
    // Pre-cache the glyphs floaters use, at both fixed font sizes.
    for size in [32.0, 26.0] {
        commands.spawn((
            GlyphCache,
            Text::new("0123456789+"),
            TextFont::from_font_size(size),
            TextColor(Color::NONE),
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(-9999.0),
                top: Val::Px(-9999.0),
                ..default()
            },
        ));
    }
}

fn spawn_floater(
    commands: &mut Commands,
    config: &Config,
    text: String,
    font_size: f32,
    color: Color,
    world_pos: Vec3,
) {
    let mut rng = rand::rng();
    let offset = Vec2::new(
        rand::Rng::random_range(&mut rng, -16.0..16.0),
        rand::Rng::random_range(&mut rng, -8.0..8.0),
    );

    commands.spawn((
        Floater {
            timer: 0.0,
            ttl: config.timers.floater_ttl,
            world_pos,
            offset,
            color,
        },
        DespawnOnExit(Screen::Gameplay),
        Text::new(text),
        TextFont::from_font_size(font_size),
        TextColor(color),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(-9999.0),
            top: Val::Px(-9999.0),
            ..default()
        },
        GlobalZIndex(100),
        Pickable::IGNORE,
    ));
}

fn on_hit_floater(on: On<HitLanded>, config: Res<Config>, mut commands: Commands) {
    let event = on.event();
    spawn_floater(
        &mut commands,
        &config,
        format!("{:.0}", event.damage),
        32.0,
        Color::WHITE,
        event.point,
    );
}

/// A downed grunt leaves a small kill marker above where it stood.
fn on_kill_floater(
    on: On<Died>,
    config: Res<Config>,
    enemies: Query<&Transform, With<Enemy>>,
    mut commands: Commands,
) {
    let Ok(transform) = enemies.get(on.event().entity) else {
        return;
    };
    spawn_floater(
        &mut commands,
        &config,
        "+1".into(),
        26.0,
        ACID_GREEN,
        transform.translation + Vec3::Y * 1.6,
    );
}

fn tick_floaters(
    time: Res<Time>,
    camera: Query<(&Camera, &GlobalTransform), With<SceneCamera>>,
    mut floaters: Query<(Entity, &mut Floater, &mut Node, &mut TextColor)>,
    mut commands: Commands,
) {
    let Ok((cam, cam_global)) = camera.single() else {
        return;
    };

    for (entity, mut floater, mut node, mut color) in &mut floaters {
        floater.timer += time.delta_secs();
        let t = (floater.timer / floater.ttl).min(1.0);

        if t >= 1.0 {
            commands.entity(entity).despawn();
            continue;
        }

        // Park it offscreen while the anchor is behind the camera.
        let Ok(screen) = cam.world_to_viewport(cam_global, floater.world_pos) else {
            node.left = Val::Px(-9999.0);
            node.top = Val::Px(-9999.0);
            continue;
        };

        let rise = RISE_PIXELS * t.sqrt();
        node.left = Val::Px(screen.x + floater.offset.x - 16.0);
        node.top = Val::Px(screen.y + floater.offset.y - rise);

        // Full brightness through the hold, quadratic fade after.
        let alpha = if t < HOLD_FRACTION {
            1.0
        } else {
            let fade = (t - HOLD_FRACTION) / (1.0 - HOLD_FRACTION);
            1.0 - fade * fade
        };
        color.0 = floater.color.with_alpha(alpha);
    }
}
