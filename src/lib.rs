//! Entity core of a side-scrolling arcade shooter.
//!
//! The library owns the simulation: entity lists, the per-frame sweep and the
//! spawners.  Everything that touches a screen goes through [`platform::Platform`].

pub mod assets;
pub mod atlas;
pub mod constants;
pub mod control;
pub mod entities;
pub mod list;
pub mod logging;
pub mod platform;
pub mod spawn;
pub mod stage;
