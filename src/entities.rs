//! Game entity types — plain data, no list logic.

use std::fmt;

use crate::platform::DrawableHandle;

// ── Input ─────────────────────────────────────────────────────────────────────

/// Snapshot of the held controls for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

// ── Entity ────────────────────────────────────────────────────────────────────

/// One fighter or bullet.
///
/// The player, enemies and bullets share this record; which list an entity
/// sits in decides how it is treated.
#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
    pub x: f32,
    pub y: f32,
    pub dx: f32,
    pub dy: f32,
    /// Size in pixels, taken from the drawable when the entity is spawned.
    pub w: i32,
    pub h: i32,
    /// Carried for data-model parity; removal from the list is what ends an entity.
    pub health: i32,
    /// Frames until the next shot is allowed. Only the player uses this.
    pub reload: u32,
    pub texture: DrawableHandle,
}

impl Entity {
    /// A stationary entity at the origin, sized to its drawable.
    pub fn new(texture: DrawableHandle, (w, h): (i32, i32)) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            dx: 0.0,
            dy: 0.0,
            w,
            h,
            health: 1,
            reload: 0,
            texture,
        }
    }

    pub fn at(self, x: f32, y: f32) -> Self {
        Self { x, y, ..self }
    }

    pub fn moving(self, dx: f32, dy: f32) -> Self {
        Self { dx, dy, ..self }
    }

    /// Advances the position by one frame of velocity.
    pub fn step(&mut self) {
        self.x += self.dx;
        self.y += self.dy;
    }
}

// ── Handles ───────────────────────────────────────────────────────────────────

/// Names one live node of an [`EntityList`](crate::list::EntityList).
///
/// The generation changes whenever a slot is released, so an id kept past the
/// removal of its entity no longer resolves.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId {
    pub(crate) index: u32,
    pub(crate) generation: u32,
}

impl EntityId {
    pub fn index(self) -> u32 {
        self.index
    }

    pub fn generation(self) -> u32 {
        self.generation
    }
}

impl fmt::Debug for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntityId({}v{})", self.index, self.generation)
    }
}
