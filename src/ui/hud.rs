use bevy::prelude::*;

use crate::combat::{AbilityCooldown, Health};
use crate::models::{Player, PostPhysicsAppSystems, Screen, Session};
use crate::ui::colors::{ACID_GREEN, HEALTH_RED, NEUTRAL100, NEUTRAL300, NEUTRAL400, NEUTRAL700, NEUTRAL920};
use crate::ui::size::{HEALTH_BAR_HEIGHT, HEALTH_BAR_WIDTH};

#[derive(Component)]
struct PlayerHud;

#[derive(Component)]
struct HudHealthFill;

#[derive(Component)]
struct HudHealthText;

#[derive(Component)]
struct HudClassName;

#[derive(Component)]
struct HudCooldownText;

#[derive(Component)]
struct HudWaveText;

#[derive(Component)]
struct HudKillsText;

#[derive(Component)]
struct Crosshair;

pub fn plugin(app: &mut App) {
    app.add_systems(
        OnEnter(Screen::Gameplay),
        (spawn_hud, spawn_scoreboard, spawn_crosshair),
    )
    .add_systems(
        Update,
        (tick_health, tick_class, tick_cooldown, tick_score)
            .run_if(in_state(Screen::Gameplay))
            .in_set(PostPhysicsAppSystems::ChangeUi),
    );
}

fn spawn_hud(mut commands: Commands) {
    commands
        .spawn((
            PlayerHud,
            DespawnOnExit(Screen::Gameplay),
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(32.0),
                bottom: Val::Px(32.0),
                flex_direction: FlexDirection::Column,
                ..default()
            },
            GlobalZIndex(90),
            Pickable::IGNORE,
        ))
        .with_children(|parent| {
            // Chosen class
            parent.spawn((
                HudClassName,
                Text::new("KNIGHT"),
                TextFont::from_font_size(22.0),
                TextColor(Color::WHITE),
                Node {
                    margin: UiRect::bottom(Val::Px(6.0)),
                    padding: UiRect::left(Val::Px(2.0)),
                    ..default()
                },
            ));

            // HP bar
            parent
                .spawn((
                    Node {
                        width: Val::Px(HEALTH_BAR_WIDTH),
                        height: Val::Px(HEALTH_BAR_HEIGHT),
                        border: UiRect::all(Val::Px(1.0)),
                        ..default()
                    },
                    BackgroundColor(NEUTRAL920.with_alpha(0.8)),
                    BorderColor::all(NEUTRAL700.with_alpha(0.5)),
                ))
                .with_children(|bar| {
                    bar.spawn((
                        HudHealthFill,
                        Node {
                            width: Val::Percent(100.0),
                            height: Val::Percent(100.0),
                            ..default()
                        },
                        BackgroundColor(HEALTH_RED),
                    ));
                });

            // HP label row
            parent
                .spawn(Node {
                    width: Val::Px(HEALTH_BAR_WIDTH),
                    flex_direction: FlexDirection::Row,
                    justify_content: JustifyContent::SpaceBetween,
                    margin: UiRect::top(Val::Px(4.0)),
                    padding: UiRect::horizontal(Val::Px(2.0)),
                    ..default()
                })
                .with_children(|row| {
                    row.spawn((
                        Text::new("HP"),
                        TextFont::from_font_size(14.0),
                        TextColor(NEUTRAL300),
                    ));
                    row.spawn((
                        HudHealthText,
                        Text::new("100 / 100"),
                        TextFont::from_font_size(14.0),
                        TextColor(Color::WHITE),
                    ));
                });

            // Ability row
            parent
                .spawn(Node {
                    width: Val::Px(HEALTH_BAR_WIDTH),
                    flex_direction: FlexDirection::Row,
                    justify_content: JustifyContent::SpaceBetween,
                    margin: UiRect::top(Val::Px(4.0)),
                    padding: UiRect::horizontal(Val::Px(2.0)),
                    ..default()
                })
                .with_children(|row| {
                    row.spawn((
                        Text::new("ABILITY [1]"),
                        TextFont::from_font_size(14.0),
                        TextColor(NEUTRAL300),
                    ));
                    row.spawn((
                        HudCooldownText,
                        Text::new("RDY"),
                        TextFont::from_font_size(14.0),
                        TextColor(ACID_GREEN),
                    ));
                });
        });
}

fn spawn_scoreboard(mut commands: Commands) {
    commands
        .spawn((
            DespawnOnExit(Screen::Gameplay),
            Node {
                position_type: PositionType::Absolute,
                right: Val::Px(32.0),
                top: Val::Px(32.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::FlexEnd,
                row_gap: Val::Px(4.0),
                ..default()
            },
            GlobalZIndex(90),
            Pickable::IGNORE,
        ))
        .with_children(|parent| {
            parent.spawn((
                HudWaveText,
                Text::new("WAVE 0"),
                TextFont::from_font_size(18.0),
                TextColor(Color::WHITE),
            ));
            parent.spawn((
                HudKillsText,
                Text::new("KILLS 0"),
                TextFont::from_font_size(14.0),
                TextColor(NEUTRAL300),
            ));
        });
}

fn spawn_crosshair(mut commands: Commands) {
    commands.spawn((
        Crosshair,
        DespawnOnExit(Screen::Gameplay),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Percent(50.0),
            top: Val::Percent(50.0),
            width: Val::Px(4.0),
            height: Val::Px(4.0),
            margin: UiRect {
                left: Val::Px(-2.0),
                top: Val::Px(-2.0),
                ..default()
            },
            ..default()
        },
        BorderRadius::all(Val::Percent(50.0)),
        BackgroundColor(NEUTRAL100.with_alpha(0.9)),
        GlobalZIndex(80),
        Pickable::IGNORE,
    ));
}

fn tick_health(
    player: Query<&Health, With<Player>>,
    mut fills: Query<&mut Node, With<HudHealthFill>>,
    mut texts: Query<&mut Text, With<HudHealthText>>,
) {
    let Ok(health) = player.single() else { return };

    if let Ok(mut fill) = fills.single_mut() {
        fill.width = Val::Percent(health.fraction() * 100.0);
    }
    if let Ok(mut text) = texts.single_mut() {
        text.0 = format!("{:.0} / {:.0}", health.current, health.max);
    }
}

fn tick_class(
    player: Query<&Player>,
    mut names: Query<&mut Text, With<HudClassName>>,
) {
    let Ok(player) = player.single() else { return };

    if let Ok(mut text) = names.single_mut() {
        let upper = player.class.label().to_uppercase();
        if text.0 != upper {
            text.0 = upper;
        }
    }
}

fn tick_cooldown(
    player: Query<&AbilityCooldown, With<Player>>,
    mut texts: Query<(&mut Text, &mut TextColor), With<HudCooldownText>>,
) {
    let Ok(cooldown) = player.single() else { return };

    if let Ok((mut text, mut color)) = texts.single_mut() {
        if cooldown.ready() {
            text.0 = "RDY".into();
            color.0 = ACID_GREEN;
        } else {
            text.0 = format!("{:.1}s", cooldown.remaining);
            color.0 = NEUTRAL400;
        }
    }
}

fn tick_score(
    session: Res<Session>,
    mut waves: Query<&mut Text, (With<HudWaveText>, Without<HudKillsText>)>,
    mut kills: Query<&mut Text, (With<HudKillsText>, Without<HudWaveText>)>,
) {
    if !session.is_changed() {
        return;
    }
    if let Ok(mut text) = waves.single_mut() {
        text.0 = format!("WAVE {}", session.wave);
    }
    if let Ok(mut text) = kills.single_mut() {
        text.0 = format!("KILLS {}", session.kills);
    }
}
