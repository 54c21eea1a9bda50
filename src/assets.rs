//! Shared drawables for the stage, loaded once up front.

use log::debug;

use crate::constants::{ENEMY_TEXTURE, PLAYER_BULLET_TEXTURE, PLAYER_TEXTURE};
use crate::platform::{DrawableHandle, Platform, ResourceError};

/// A loaded drawable together with its pixel size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sprite {
    pub handle: DrawableHandle,
    pub w: i32,
    pub h: i32,
}

impl Sprite {
    pub fn load<P: Platform + ?Sized>(platform: &mut P, name: &str) -> Result<Self, ResourceError> {
        let handle = platform.load_drawable(name)?;
        let (w, h) = platform.query_dimensions(handle)?;
        debug!("loaded {name} as {handle} ({w}x{h})");
        Ok(Self { handle, w, h })
    }

    pub fn size(&self) -> (i32, i32) {
        (self.w, self.h)
    }
}

/// Every drawable the stage spawns entities with.
///
/// A missing asset is fatal: construction fails instead of deferring the
/// error to the first draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Assets {
    pub player: Sprite,
    pub bullet: Sprite,
    pub enemy: Sprite,
}

impl Assets {
    pub fn load<P: Platform + ?Sized>(platform: &mut P) -> Result<Self, ResourceError> {
        Ok(Self {
            player: Sprite::load(platform, PLAYER_TEXTURE)?,
            bullet: Sprite::load(platform, PLAYER_BULLET_TEXTURE)?,
            enemy: Sprite::load(platform, ENEMY_TEXTURE)?,
        })
    }
}
