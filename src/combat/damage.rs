use super::*;
use avian3d::prelude::LinearVelocity;

pub(super) fn plugin(app: &mut App) {
    app.add_observer(on_shot_connected)
        .add_observer(on_damage_dealt)
        .add_observer(on_died);
}

/// A landed shot becomes plain damage with no knockback.
fn on_shot_connected(on: On<ShotConnected>, mut commands: Commands) {
    let event = on.event();
    commands.trigger(DamageDealt {
        target: event.target,
        damage: event.damage,
        impulse: Vec3::ZERO,
        point: event.point,
    });
}

/// Observer: the single place where health actually changes. Applies shield
/// mitigation, knockback, and fans out the follow-up events.
fn on_damage_dealt(
    on: On<DamageDealt>,
    mut targets: Query<(&mut Health, Option<&Shielded>, Option<&mut LinearVelocity>)>,
    players: Query<(), With<Player>>,
    mut commands: Commands,
) {
    let event = on.event();
    let Ok((mut health, shielded, velocity)) = targets.get_mut(event.target) else {
        return;
    };
    // Hits queued behind a lethal one in the same frame do nothing.
    if health.is_dead() {
        return;
    }

    let dealt = effective_damage(event.damage, shielded.map(|s| s.mitigation));
    let died = health.take_damage(dealt);

    commands.trigger(HitLanded {
        target: event.target,
        damage: dealt,
        point: event.point,
    });
    if players.contains(event.target) {
        commands.trigger(PlayerHit { damage: dealt });
    }

    if event.impulse != Vec3::ZERO {
        if let Some(mut velocity) = velocity {
            velocity.0 += event.impulse;
        }
    }

    if died {
        commands.trigger(Died {
            entity: event.target,
        });
    }
}

/// Observer: enemies despawn on death and count toward the session tally.
/// The player's death sequence is run by the player module instead.
fn on_died(
    on: On<Died>,
    enemies: Query<(), With<Enemy>>,
    mut session: ResMut<Session>,
    mut commands: Commands,
) {
    let event = on.event();
    if enemies.contains(event.entity) {
        session.kills += 1;
        commands.entity(event.entity).despawn();
    }
}
