//! Snapshot system: queries the ECS world and builds a complete
//! GameStateSnapshot.
//!
//! This system is read-only — it never modifies the world.

use hecs::World;

use dinodash_core::components::*;
use dinodash_core::enums::GamePhase;
use dinodash_core::events::AudioEvent;
use dinodash_core::state::*;
use dinodash_core::types::{Rect, SimTime, Viewport};

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    score: i64,
    viewport: Viewport,
    audio_events: Vec<AudioEvent>,
) -> GameStateSnapshot {
    let mut player = PlayerView::default();
    {
        let mut query =
            world.query::<(&Rect, &VerticalMotion, &Health, &ScaleFx, &Hover, &Player)>();
        for (_entity, (body, motion, health, fx, hover, _marker)) in query.iter() {
            player = PlayerView {
                body: *body,
                velocity: motion.velocity,
                jumping: motion.jumping,
                health: health.current,
                scale: fx.scale_at(time.elapsed_ms),
                hovered: hover.hovered,
            };
        }
    }

    let bullets = {
        let mut query = world.query::<(&Rect, &Bullet)>();
        query
            .iter()
            .map(|(_entity, (body, _))| BulletView { body: *body })
            .collect()
    };

    let enemies = {
        let mut query = world.query::<(&Rect, &Enemy)>();
        query
            .iter()
            .map(|(_entity, (body, enemy))| EnemyView {
                body: *body,
                speed: enemy.speed,
            })
            .collect()
    };

    let powerups = {
        let mut query = world.query::<(&Rect, &PowerUp)>();
        query
            .iter()
            .map(|(_entity, (body, powerup))| PowerUpView {
                body: *body,
                effect: powerup.effect,
            })
            .collect()
    };

    GameStateSnapshot {
        time: *time,
        phase,
        score,
        viewport,
        player,
        bullets,
        enemies,
        powerups,
        audio_events,
    }
}
