use super::*;

pub fn plugin(app: &mut App) {
    app.add_plugins(EnhancedInputPlugin)
        .add_input_context::<PlayerCtx>()
        .add_input_context::<UiCtx>()
        .add_observer(add_player_ctx)
        .add_observer(rm_player_ctx)
        .add_observer(add_ui_ctx)
        .add_observer(rm_ui_ctx)
        .add_observer(log_shoot)
        .add_observer(log_ability);
}

fn log_shoot(_on: On<Start<Shoot>>) {
    debug!("Shoot");
}

fn log_ability(_on: On<Start<Ability>>) {
    debug!("Ability");
}

#[derive(InputAction)]
#[action_output(Vec2)]
pub struct Navigate;

#[derive(InputAction)]
#[action_output(Vec2)]
pub struct Pan;

#[derive(InputAction)]
#[action_output(bool)]
pub struct Shoot;

#[derive(InputAction)]
#[action_output(bool)]
pub struct Ability;

#[derive(InputAction)]
#[action_output(bool)]
pub struct Jump;

#[derive(InputAction)]
#[action_output(bool)]
pub struct Respawn;

#[derive(InputAction)]
#[action_output(bool)]
pub struct CallWave;

#[derive(InputAction)]
#[action_output(bool)]
pub struct Escape;

#[derive(InputAction)]
#[action_output(bool)]
pub struct Confirm;

pub fn add_player_ctx(add: On<Add, PlayerCtx>, mut commands: Commands) {
    debug!("PlayerCtx added to {:?}", add.entity);
    let mut e = commands.entity(add.entity);

    e.insert(actions!(PlayerCtx[
        (
            Action::<Pan>::new(),
            ActionSettings {
                require_reset: true,
                ..Default::default()
            },
            Bindings::spawn(Spawn((Binding::mouse_motion(), Scale::splat(0.1), Negate::all()))),
        ),
        (
            Action::<Navigate>::new(),
            DeadZone::default(),
            Bindings::spawn((Cardinal::wasd_keys(), Cardinal::arrows())),
        ),
        (
            Action::<Jump>::new(),
            bindings![KeyCode::Space],
        ),
        (
            Action::<Shoot>::new(),
            bindings![MouseButton::Left],
        ),
        (
            Action::<Ability>::new(),
            bindings![KeyCode::Digit1],
        ),
        (
            Action::<Respawn>::new(),
            bindings![KeyCode::KeyR],
        ),
        (
            Action::<CallWave>::new(),
            bindings![KeyCode::KeyE],
        ),
        (
            Action::<Escape>::new(),
            ActionSettings {
                require_reset: true,
                ..Default::default()
            },
            bindings![KeyCode::Escape],
        ),
    ]));
}

fn rm_player_ctx(rm: On<Remove, PlayerCtx>, mut commands: Commands) {
    commands
        .entity(rm.entity)
        .despawn_related::<Actions<PlayerCtx>>();
}

fn add_ui_ctx(add: On<Add, UiCtx>, mut commands: Commands) {
    commands.entity(add.entity).insert(actions!(UiCtx[
        (
            Action::<Confirm>::new(),
            bindings![KeyCode::Enter],
        ),
        (
            Action::<Escape>::new(),
            ActionSettings {
                require_reset: true,
                ..Default::default()
            },
            bindings![KeyCode::Escape],
        ),
    ]));
}

fn rm_ui_ctx(rm: On<Remove, UiCtx>, mut commands: Commands) {
    commands
        .entity(rm.entity)
        .despawn_related::<Actions<UiCtx>>();
}
