//! Player physics integration: gravity, jump impulses, ground clamp.

use hecs::World;

use dinodash_core::components::{Player, VerticalMotion};
use dinodash_core::constants::{GRAVITY, JUMP_IMPULSE};
use dinodash_core::types::{Rect, Viewport};

/// Integrate the player's vertical motion: `velocity += gravity`, then
/// `y += velocity`. Past the rest line: snap to it, zero the velocity,
/// clear the jumping flag.
pub fn run(world: &mut World, viewport: Viewport) {
    let rest_y = viewport.player_rest_y();
    for (_entity, (body, motion, _player)) in
        world.query_mut::<(&mut Rect, &mut VerticalMotion, &Player)>()
    {
        motion.velocity += GRAVITY;
        body.pos.y += motion.velocity;
        if body.pos.y > rest_y {
            body.pos.y = rest_y;
            motion.velocity = 0.0;
            motion.jumping = false;
        }
    }
}

/// Apply a jump impulse if the player is grounded. A jump request while
/// already airborne is silently ignored.
pub fn try_jump(world: &mut World, player: hecs::Entity) {
    if let Ok(mut motion) = world.get::<&mut VerticalMotion>(player) {
        if !motion.jumping {
            motion.velocity = JUMP_IMPULSE;
            motion.jumping = true;
        }
    }
}
