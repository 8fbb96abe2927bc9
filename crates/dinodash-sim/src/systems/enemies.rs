//! Enemy lifecycle: advance, exit cull, bullet kills, player contact.
//!
//! All removals are collected during read-only scans and applied after,
//! never while a forward walk over the same collection is in progress.
//! Phase order matters: exited enemies must be gone before the collision
//! tests, and bullet kills must resolve before player contact.

use hecs::{Entity, World};

use dinodash_core::components::{Bullet, Enemy, Health};
use dinodash_core::constants::KILL_REWARD;
use dinodash_core::enums::ExitScorePolicy;
use dinodash_core::events::AudioEvent;
use dinodash_core::types::Rect;

/// Run the enemy lifecycle for one step.
pub fn run(
    world: &mut World,
    player: Entity,
    exit_policy: ExitScorePolicy,
    score: &mut i64,
    audio_events: &mut Vec<AudioEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    advance_and_cull_exits(world, exit_policy, score, despawn_buffer);
    resolve_bullet_kills(world, score, audio_events);
    resolve_player_contact(world, player, despawn_buffer);
}

/// Advance every enemy leftward by its own speed; remove any that has
/// fully exited the left edge, applying the configured exit policy.
fn advance_and_cull_exits(
    world: &mut World,
    exit_policy: ExitScorePolicy,
    score: &mut i64,
    despawn_buffer: &mut Vec<Entity>,
) {
    despawn_buffer.clear();

    for (entity, (body, enemy)) in world.query_mut::<(&mut Rect, &Enemy)>() {
        body.pos.x -= enemy.speed;
        if body.right() < 0.0 {
            despawn_buffer.push(entity);
            if let ExitScorePolicy::Penalize { amount } = exit_policy {
                *score -= amount;
            }
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

/// Test every surviving enemy against every bullet with a full two-axis
/// AABB check. Each overlap removes both entities and awards the kill
/// reward. A bullet spends on its first hit and an enemy dies at most
/// once, so no pair is ever credited twice.
fn resolve_bullet_kills(world: &mut World, score: &mut i64, audio_events: &mut Vec<AudioEvent>) {
    let mut dead_enemies: Vec<Entity> = Vec::new();
    let mut spent_bullets: Vec<Entity> = Vec::new();

    let bullets: Vec<(Entity, Rect)> = {
        let mut query = world.query::<(&Rect, &Bullet)>();
        query
            .iter()
            .map(|(entity, (body, _))| (entity, *body))
            .collect()
    };

    for (enemy_entity, (enemy_body, _enemy)) in world.query::<(&Rect, &Enemy)>().iter() {
        for (bullet_entity, bullet_body) in &bullets {
            if spent_bullets.contains(bullet_entity) {
                continue;
            }
            if bullet_body.overlaps(enemy_body) {
                dead_enemies.push(enemy_entity);
                spent_bullets.push(*bullet_entity);
                *score += KILL_REWARD;
                audio_events.push(AudioEvent::EnemyHit);
                break;
            }
        }
    }

    for entity in dead_enemies.into_iter().chain(spent_bullets) {
        let _ = world.despawn(entity);
    }
}

/// Remove every surviving enemy overlapping the player and decrement
/// health once per contact, floored at zero. The terminal transition is
/// the engine's job; this system only mutates health.
fn resolve_player_contact(world: &mut World, player: Entity, despawn_buffer: &mut Vec<Entity>) {
    let player_body = match world.get::<&Rect>(player) {
        Ok(body) => *body,
        Err(_) => return,
    };

    despawn_buffer.clear();
    for (entity, (body, _enemy)) in world.query::<(&Rect, &Enemy)>().iter() {
        if body.overlaps(&player_body) {
            despawn_buffer.push(entity);
        }
    }

    let contacts = despawn_buffer.len() as i32;
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    if contacts > 0 {
        if let Ok(mut health) = world.get::<&mut Health>(player) {
            health.current = (health.current - contacts).max(0);
        }
    }
}
