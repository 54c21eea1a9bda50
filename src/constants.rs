//! Compile-time tuning for the stage.

use std::ops::RangeInclusive;

// ── Screen ────────────────────────────────────────────────────────────────────

pub const SCREEN_WIDTH: i32 = 1280;
pub const SCREEN_HEIGHT: i32 = 720;

// ── Player ────────────────────────────────────────────────────────────────────

pub const PLAYER_SPEED: f32 = 4.0;
pub const PLAYER_BULLET_SPEED: f32 = 16.0;

/// Frames the player must wait between shots.
pub const FIRE_COOLDOWN: u32 = 8;

pub const PLAYER_START_X: f32 = 100.0;
pub const PLAYER_START_Y: f32 = 100.0;

// ── Enemies ───────────────────────────────────────────────────────────────────

/// Leftward speed of a freshly spawned enemy, in pixels per frame.
pub const ENEMY_SPEED: RangeInclusive<i32> = 2..=5;

/// Frames until the next enemy appears.
pub const ENEMY_SPAWN_INTERVAL: RangeInclusive<i32> = 30..=89;

// ── Asset names ───────────────────────────────────────────────────────────────

pub const PLAYER_TEXTURE: &str = "player.png";
pub const PLAYER_BULLET_TEXTURE: &str = "playerBullet.png";
pub const ENEMY_TEXTURE: &str = "enemy.png";
