//! Built-in glyph sprites standing in for image files on a terminal.
//!
//! The stage asks for drawables by file name. On a terminal each name
//! resolves to a small block of characters; its pixel size is the number of
//! cells it covers scaled by how many world pixels one terminal cell spans.

use std::collections::HashMap;

use crossterm::style::Color;

use crate::constants::{
    ENEMY_TEXTURE, PLAYER_BULLET_TEXTURE, PLAYER_TEXTURE, SCREEN_HEIGHT, SCREEN_WIDTH,
};
use crate::platform::{DrawableHandle, ResourceError};

// ── Sprite art ────────────────────────────────────────────────────────────────

/// Character art for one drawable. Spaces are transparent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpriteArt {
    pub name: String,
    pub rows: Vec<String>,
    pub color: Color,
}

impl SpriteArt {
    pub fn new(name: &str, rows: &[&str], color: Color) -> Self {
        Self {
            name: name.to_string(),
            rows: rows.iter().map(|row| row.to_string()).collect(),
            color,
        }
    }

    /// Width in cells of the widest row.
    pub fn cols(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.chars().count())
            .max()
            .unwrap_or(0)
    }
}

/// The art shipped with the game.
pub fn builtin_art() -> Vec<SpriteArt> {
    vec![
        //   =\
        //  =[##>
        //   =/
        SpriteArt::new(PLAYER_TEXTURE, &[" =\\", "=[##>", " =/"], Color::White),
        SpriteArt::new(PLAYER_BULLET_TEXTURE, &["--"], Color::Cyan),
        //   /=
        //  <##]
        //   \=
        SpriteArt::new(ENEMY_TEXTURE, &[" /=", "<##]", " \\="], Color::Red),
    ]
}

// ── Atlas ─────────────────────────────────────────────────────────────────────

/// Name → drawable cache for a terminal of a given size.
#[derive(Clone, Debug)]
pub struct SpriteAtlas {
    /// World pixels per terminal column / row.
    cell_w: f32,
    cell_h: f32,
    art: Vec<SpriteArt>,
    /// Indices into `art`, one per issued handle.
    loaded: Vec<usize>,
    by_name: HashMap<String, DrawableHandle>,
}

impl SpriteAtlas {
    /// An atlas of the built-in art for a `cols` × `rows` terminal.
    pub fn new(cols: u16, rows: u16) -> Self {
        Self::with_art(cols, rows, builtin_art())
    }

    pub fn with_art(cols: u16, rows: u16, art: Vec<SpriteArt>) -> Self {
        Self {
            cell_w: SCREEN_WIDTH as f32 / cols.max(1) as f32,
            cell_h: SCREEN_HEIGHT as f32 / rows.max(1) as f32,
            art,
            loaded: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    /// Resolves `name` to a handle. The same name always yields the same handle.
    pub fn load(&mut self, name: &str) -> Result<DrawableHandle, ResourceError> {
        if let Some(handle) = self.by_name.get(name) {
            return Ok(*handle);
        }

        let index = self
            .art
            .iter()
            .position(|art| art.name == name)
            .ok_or_else(|| ResourceError::NotFound {
                name: name.to_string(),
            })?;
        if self.art[index].cols() == 0 {
            return Err(ResourceError::Decode {
                name: name.to_string(),
                reason: "sprite has no visible cells".to_string(),
            });
        }

        let handle = DrawableHandle::new(self.loaded.len() as u32);
        self.loaded.push(index);
        self.by_name.insert(name.to_string(), handle);
        Ok(handle)
    }

    pub fn art(&self, handle: DrawableHandle) -> Result<&SpriteArt, ResourceError> {
        self.loaded
            .get(handle.raw() as usize)
            .map(|&index| &self.art[index])
            .ok_or(ResourceError::InvalidHandle(handle))
    }

    /// Pixel size of a loaded drawable.
    pub fn dimensions(&self, handle: DrawableHandle) -> Result<(i32, i32), ResourceError> {
        let art = self.art(handle)?;
        let w = (art.cols() as f32 * self.cell_w).round() as i32;
        let h = (art.rows.len() as f32 * self.cell_h).round() as i32;
        Ok((w, h))
    }

    /// Terminal cell containing world point `(x, y)`. Coordinates are floored,
    /// so anything left of or above the screen maps to a negative cell.
    pub fn cell_of(&self, x: f32, y: f32) -> (i32, i32) {
        (
            (x / self.cell_w).floor() as i32,
            (y / self.cell_h).floor() as i32,
        )
    }
}
