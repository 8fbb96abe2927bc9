//! Entity spawn factories for the game world.
//!
//! Creates the player, enemies, power-ups, and bullets with the
//! appropriate component bundles.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use dinodash_core::components::*;
use dinodash_core::constants::*;
use dinodash_core::enums::PowerUpEffect;
use dinodash_core::types::{Rect, SpeedBands, Viewport};

/// Spawn the player at the fixed left-side position, resting on the ground.
pub fn spawn_player(world: &mut World, viewport: Viewport) -> hecs::Entity {
    world.spawn((
        Player,
        Rect::new(
            PLAYER_X,
            viewport.player_rest_y(),
            PLAYER_WIDTH,
            PLAYER_HEIGHT,
        ),
        VerticalMotion::default(),
        Health {
            current: STARTING_HEALTH,
        },
        Gun::default(),
        ScaleFx::default(),
        Hover::default(),
    ))
}

/// Spawn an enemy just past the right edge with a randomized offset and a
/// speed drawn 50/50 from one of the two configured bands.
pub fn spawn_enemy(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    bands: &SpeedBands,
    viewport: Viewport,
) -> hecs::Entity {
    let band = if rng.gen_bool(0.5) { bands.fast } else { bands.slow };
    let speed = rng.gen_range(band.0..band.1);
    let x = viewport.width + rng.gen_range(0.0..SPAWN_EDGE_JITTER);
    spawn_enemy_at(world, x, speed, viewport)
}

/// Spawn an enemy at an explicit position and speed.
pub fn spawn_enemy_at(
    world: &mut World,
    x: f64,
    speed: f64,
    viewport: Viewport,
) -> hecs::Entity {
    world.spawn((
        Enemy { speed },
        Rect::new(x, viewport.enemy_rest_y(), ENEMY_WIDTH, ENEMY_HEIGHT),
    ))
}

/// Spawn a power-up just past the right edge with a randomized offset.
pub fn spawn_power_up(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    viewport: Viewport,
) -> hecs::Entity {
    let x = viewport.width + rng.gen_range(0.0..SPAWN_EDGE_JITTER);
    spawn_power_up_at(world, x, viewport)
}

/// Spawn a power-up at an explicit x position.
pub fn spawn_power_up_at(world: &mut World, x: f64, viewport: Viewport) -> hecs::Entity {
    world.spawn((
        PowerUp {
            effect: PowerUpEffect::Health,
        },
        Rect::new(
            x,
            viewport.powerup_rest_y(),
            POWERUP_WIDTH,
            POWERUP_HEIGHT,
        ),
    ))
}

/// Spawn a bullet at the player's leading edge.
pub fn spawn_bullet(world: &mut World, player_body: &Rect) -> hecs::Entity {
    world.spawn((
        Bullet,
        Rect::new(
            player_body.right(),
            player_body.top() + BULLET_MUZZLE_DROP,
            BULLET_WIDTH,
            BULLET_HEIGHT,
        ),
    ))
}

/// Re-pin grounded entities to their rest heights after a viewport change.
pub fn repin_to_ground(world: &mut World, viewport: Viewport) {
    for (_entity, (body, _player)) in world.query_mut::<(&mut Rect, &Player)>() {
        body.pos.y = viewport.player_rest_y();
    }
    for (_entity, (body, _enemy)) in world.query_mut::<(&mut Rect, &Enemy)>() {
        body.pos.y = viewport.enemy_rest_y();
    }
    for (_entity, (body, _powerup)) in world.query_mut::<(&mut Rect, &PowerUp)>() {
        body.pos.y = viewport.powerup_rest_y();
    }
}
