//! Power-up drift, exit cull, and pickup.

use hecs::{Entity, World};

use dinodash_core::components::{Health, PowerUp};
use dinodash_core::constants::POWERUP_SPEED;
use dinodash_core::enums::PowerUpEffect;
use dinodash_core::events::AudioEvent;
use dinodash_core::types::Rect;

/// Advance every power-up leftward, cull off-screen ones, and apply the
/// effect of any overlapping the player. Each pickup removes exactly one
/// power-up and emits one cue.
pub fn run(
    world: &mut World,
    player: Entity,
    audio_events: &mut Vec<AudioEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    despawn_buffer.clear();
    for (entity, (body, _powerup)) in world.query_mut::<(&mut Rect, &PowerUp)>() {
        body.pos.x -= POWERUP_SPEED;
        if body.right() < 0.0 {
            despawn_buffer.push(entity);
        }
    }
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    let player_body = match world.get::<&Rect>(player) {
        Ok(body) => *body,
        Err(_) => return,
    };

    let mut collected: Vec<(Entity, PowerUpEffect)> = Vec::new();
    for (entity, (body, powerup)) in world.query::<(&Rect, &PowerUp)>().iter() {
        if body.overlaps(&player_body) {
            collected.push((entity, powerup.effect));
        }
    }

    for (entity, effect) in collected {
        let _ = world.despawn(entity);
        match effect {
            PowerUpEffect::Health => {
                if let Ok(mut health) = world.get::<&mut Health>(player) {
                    health.current += 1;
                }
            }
        }
        audio_events.push(AudioEvent::PowerUpCollected { effect });
    }
}
