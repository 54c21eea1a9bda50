//! The narrow contract the stage needs from whatever draws the game.

use std::fmt;

use thiserror::Error;

/// Opaque reference to a loaded drawable.
///
/// Handles are minted by a [`Platform`] and are shared freely between
/// entities; the platform's asset cache owns the underlying resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DrawableHandle(u32);

impl DrawableHandle {
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for DrawableHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "drawable#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResourceError {
    /// No asset with this name exists.
    #[error("drawable `{name}` not found")]
    NotFound { name: String },

    /// The asset exists but could not be turned into a drawable.
    #[error("drawable `{name}` could not be decoded: {reason}")]
    Decode { name: String, reason: String },

    /// The handle was not issued by this platform.
    #[error("invalid drawable handle {0}")]
    InvalidHandle(DrawableHandle),
}

/// Rendering collaborator.
///
/// `submit` must only be called while drawing; the stage never calls it from
/// `update`.
pub trait Platform {
    fn load_drawable(&mut self, name: &str) -> Result<DrawableHandle, ResourceError>;

    /// Pixel dimensions `(width, height)` of a loaded drawable.
    fn query_dimensions(&self, handle: DrawableHandle) -> Result<(i32, i32), ResourceError>;

    /// Schedules `handle` for presentation with its top-left corner at `(x, y)`.
    fn submit(&mut self, handle: DrawableHandle, x: f32, y: f32);
}
