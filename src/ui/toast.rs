use bevy::prelude::*;

use crate::models::{Config, PostPhysicsAppSystems, Toast};
use crate::ui::colors::{NEUTRAL100, NEUTRAL700, NEUTRAL920};

/// Short-lived notification banner. Only one lives at a time, a newer
/// toast replaces whatever is still on screen.
#[derive(Component)]
struct ToastBanner {
    ttl: Timer,
}

#[derive(Component)]
struct ToastBg;

pub fn plugin(app: &mut App) {
    app.add_observer(show_toast).add_systems(
        Update,
        tick_toasts.in_set(PostPhysicsAppSystems::ChangeUi),
    );
}

fn show_toast(
    toast: On<Toast>,
    config: Res<Config>,
    existing: Query<Entity, With<ToastBanner>>,
    mut commands: Commands,
) {
    for entity in &existing {
        commands.entity(entity).despawn();
    }

    commands
        .spawn((
            ToastBanner {
                ttl: Timer::from_seconds(config.timers.toast_ttl, TimerMode::Once),
            },
            Name::new("Toast"),
            Node {
                position_type: PositionType::Absolute,
                top: Val::Percent(18.0),
                width: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                ..default()
            },
            GlobalZIndex(95),
            Pickable::IGNORE,
        ))
        .with_children(|parent| {
            parent
                .spawn((
                    ToastBg,
                    Node {
                        padding: UiRect::axes(Val::Px(18.0), Val::Px(8.0)),
                        border: UiRect::all(Val::Px(1.0)),
                        ..default()
                    },
                    BackgroundColor(NEUTRAL920.with_alpha(0.85)),
                    BorderColor::all(NEUTRAL700.with_alpha(0.5)),
                    BorderRadius::all(Val::Px(6.0)),
                    Pickable::IGNORE,
                ))
                .with_children(|banner| {
                    banner.spawn((
                        Text::new(toast.0.clone()),
                        TextFont::from_font_size(18.0),
                        TextColor(NEUTRAL100),
                        Pickable::IGNORE,
                    ));
                });
        });
}

fn tick_toasts(
    time: Res<Time>,
    mut banners: Query<(Entity, &mut ToastBanner, &Children)>,
    mut bg_q: Query<&mut BackgroundColor, With<ToastBg>>,
    mut commands: Commands,
) {
    for (entity, mut banner, children) in &mut banners {
        banner.ttl.tick(time.delta());
        if banner.ttl.is_finished() {
            commands.entity(entity).despawn();
            continue;
        }
        // Fade out over the last third of the lifetime.
        let f = banner.ttl.fraction_remaining();
        if f < 0.33 {
            for c in children {
                if let Ok(mut bg) = bg_q.get_mut(*c) {
                    bg.0 = bg.0.with_alpha(0.85 * (f / 0.33));
                }
            }
        }
    }
}
