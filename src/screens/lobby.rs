use super::*;

/// Class selection. Buttons write the pick into [`Session`]; the highlight
/// and the stat line follow it.
pub(super) fn plugin(app: &mut App) {
    app.add_systems(OnEnter(Screen::Lobby), setup)
        .add_systems(
            Update,
            sync_selection
                .run_if(in_state(Screen::Lobby).and(resource_changed::<Session>))
                .in_set(PostPhysicsAppSystems::ChangeUi),
        );
}

#[derive(Component)]
struct ClassButton(CharacterClass);

#[derive(Component)]
struct ClassDetail;

fn setup(session: Res<Session>, mut commands: Commands) {
    let selected = session.class;

    let panel = commands
        .spawn((
            DespawnOnExit(Screen::Lobby),
            UiCtx,
            ui_root("Lobby UI"),
            children![
                header(
                    Props::from("CHOOSE YOUR FIGHTER")
                        .font_size(40.0)
                        .color(colors::NEUTRAL100)
                ),
                (
                    Node {
                        flex_direction: FlexDirection::Row,
                        column_gap: Vw(1.0),
                        ..default()
                    },
                    children![
                        class_button(CharacterClass::Knight, selected),
                        class_button(CharacterClass::Archer, selected),
                        class_button(CharacterClass::Wizard, selected),
                        class_button(CharacterClass::Giant, selected),
                    ],
                ),
                (ClassDetail, label(Props::from(blurb(selected)))),
                btn_big("ENTER ARENA", to::arena),
                label(
                    Props::from("WASD move | SPACE jump | LMB shoot | 1 ability | E next wave | R respawn")
                        .font_size(14.0)
                        .color(colors::NEUTRAL500)
                ),
            ],
        ))
        .id();

    // Previous run's tally, once there is one.
    if session.wave > 0 {
        commands.spawn((
            ChildOf(panel),
            label(
                Props::from(format!(
                    "LAST RUN: WAVE {} | {} KILLS",
                    session.wave, session.kills
                ))
                .font_size(16.0)
                .color(colors::NEUTRAL400),
            ),
        ));
    }
}

fn class_button(class: CharacterClass, selected: CharacterClass) -> impl Bundle {
    let palette = if class == selected {
        PaletteSet::selected(class.color())
    } else {
        PaletteSet::default()
    };
    let node = Node {
        min_width: Vw(12.0),
        padding: UiRect::axes(Vw(2.0), Vh(1.5)),
        align_items: AlignItems::Center,
        justify_content: JustifyContent::Center,
        ..default()
    };

    (
        ClassButton(class),
        btn(
            Props::from(class.label().to_uppercase())
                .palette_set(palette)
                .node(node),
            move |_: On<Pointer<Click>>, mut session: ResMut<Session>| {
                session.class = class;
            },
        ),
    )
}

fn blurb(class: CharacterClass) -> String {
    let spec = class.spec();
    format!(
        "{:.0} HP | {:.0} DMG | {}",
        spec.max_health,
        spec.shot_damage,
        class.ability_label().to_uppercase()
    )
}

/// Restyle the grid and the stat line whenever the pick changes.
fn sync_selection(
    session: Res<Session>,
    buttons: Query<(&ClassButton, &Children)>,
    mut contents: Query<(
        &mut PaletteSet,
        &mut BackgroundColor,
        &mut BorderColor,
        &Children,
    )>,
    mut texts: Query<&mut TextColor>,
    mut detail: Query<&mut Text, With<ClassDetail>>,
) {
    for (button, children) in &buttons {
        let palette = if button.0 == session.class {
            PaletteSet::selected(button.0.color())
        } else {
            PaletteSet::default()
        };

        for child in children {
            let Ok((mut set, mut bg, mut border, content_children)) = contents.get_mut(*child)
            else {
                continue;
            };
            *bg = palette.none.bg.into();
            *border = palette.none.border;
            for text in content_children {
                if let Ok(mut color) = texts.get_mut(*text) {
                    color.0 = palette.none.text;
                }
            }
            *set = palette.clone();
        }
    }

    if let Ok(mut text) = detail.single_mut() {
        text.0 = blurb(session.class);
    }
}
