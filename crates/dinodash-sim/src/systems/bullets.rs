//! Bullet advance and right-edge cull.

use hecs::{Entity, World};

use dinodash_core::components::Bullet;
use dinodash_core::constants::BULLET_SPEED;
use dinodash_core::types::{Rect, Viewport};

/// Advance every bullet rightward and remove any that left the viewport.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, viewport: Viewport, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, (body, _bullet)) in world.query_mut::<(&mut Rect, &Bullet)>() {
        body.pos.x += BULLET_SPEED;
        if body.left() > viewport.width {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
