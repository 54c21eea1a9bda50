//! Entity construction for bullets and enemies.
//!
//! Spawning only builds the [`Entity`]; the caller appends it to the right
//! list. All randomness comes through the injected RNG so a seeded `StdRng`
//! makes spawns reproducible in tests.

use log::debug;
use rand::Rng;

use crate::assets::Assets;
use crate::constants::{
    ENEMY_SPAWN_INTERVAL, ENEMY_SPEED, PLAYER_BULLET_SPEED, SCREEN_HEIGHT, SCREEN_WIDTH,
};
use crate::entities::Entity;

// ── Player bullets ────────────────────────────────────────────────────────────

/// A bullet leaving `player`, vertically centred on the player's sprite.
pub fn fire_bullet(player: &Entity, assets: &Assets) -> Entity {
    let bullet = &assets.bullet;
    let y = player.y + (player.h / 2) as f32 - (bullet.h / 2) as f32;

    Entity::new(bullet.handle, bullet.size())
        .at(player.x, y)
        .moving(PLAYER_BULLET_SPEED, 0.0)
}

// ── Enemy spawner ─────────────────────────────────────────────────────────────

/// Countdown that releases one enemy every 30–89 frames.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Spawner {
    timer: i32,
}

impl Spawner {
    /// A spawner whose first enemy arrives after `timer` frames.
    /// A timer of zero or less spawns on the first tick.
    pub fn new(timer: i32) -> Self {
        Self { timer }
    }

    pub fn timer(&self) -> i32 {
        self.timer
    }

    /// Advances the countdown by one frame and returns a new enemy when it
    /// runs out.
    pub fn tick(&mut self, rng: &mut impl Rng, assets: &Assets) -> Option<Entity> {
        self.timer = self.timer.saturating_sub(1);
        if self.timer > 0 {
            return None;
        }

        let enemy = spawn_enemy(rng, assets);
        self.timer = rng.gen_range(ENEMY_SPAWN_INTERVAL);
        debug!(
            "enemy at y={} dx={}, next in {} frames",
            enemy.y, enemy.dx, self.timer
        );
        Some(enemy)
    }
}

/// An enemy entering from the right edge at a random height and speed.
pub fn spawn_enemy(rng: &mut impl Rng, assets: &Assets) -> Entity {
    let sprite = &assets.enemy;
    let y = rng.gen_range(0..SCREEN_HEIGHT);
    let speed = rng.gen_range(ENEMY_SPEED);

    Entity::new(sprite.handle, sprite.size())
        .at(SCREEN_WIDTH as f32, y as f32)
        .moving(-(speed as f32), 0.0)
}
