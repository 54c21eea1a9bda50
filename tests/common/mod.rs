#![allow(dead_code)]

use std::collections::HashMap;

use side_shooter::assets::{Assets, Sprite};
use side_shooter::platform::{DrawableHandle, Platform, ResourceError};

pub const PLAYER_SIZE: (i32, i32) = (48, 32);
pub const BULLET_SIZE: (i32, i32) = (16, 6);
pub const ENEMY_SIZE: (i32, i32) = (48, 40);

/// Platform double: a fixed set of named drawables and a log of submissions.
pub struct RecordingPlatform {
    names: Vec<String>,
    sizes: HashMap<String, (i32, i32)>,
    pub submitted: Vec<(DrawableHandle, f32, f32)>,
}

impl RecordingPlatform {
    pub fn new() -> Self {
        Self::with_drawables(&[
            ("player.png", PLAYER_SIZE),
            ("playerBullet.png", BULLET_SIZE),
            ("enemy.png", ENEMY_SIZE),
        ])
    }

    pub fn with_drawables(drawables: &[(&str, (i32, i32))]) -> Self {
        Self {
            names: Vec::new(),
            sizes: drawables
                .iter()
                .map(|(name, size)| (name.to_string(), *size))
                .collect(),
            submitted: Vec::new(),
        }
    }
}

impl Platform for RecordingPlatform {
    fn load_drawable(&mut self, name: &str) -> Result<DrawableHandle, ResourceError> {
        if !self.sizes.contains_key(name) {
            return Err(ResourceError::NotFound {
                name: name.to_string(),
            });
        }
        self.names.push(name.to_string());
        Ok(DrawableHandle::new(self.names.len() as u32 - 1))
    }

    fn query_dimensions(&self, handle: DrawableHandle) -> Result<(i32, i32), ResourceError> {
        self.names
            .get(handle.raw() as usize)
            .and_then(|name| self.sizes.get(name))
            .copied()
            .ok_or(ResourceError::InvalidHandle(handle))
    }

    fn submit(&mut self, handle: DrawableHandle, x: f32, y: f32) {
        self.submitted.push((handle, x, y));
    }
}

pub fn sprite(raw: u32, (w, h): (i32, i32)) -> Sprite {
    Sprite {
        handle: DrawableHandle::new(raw),
        w,
        h,
    }
}

pub fn assets() -> Assets {
    Assets {
        player: sprite(0, PLAYER_SIZE),
        bullet: sprite(1, BULLET_SIZE),
        enemy: sprite(2, ENEMY_SIZE),
    }
}
