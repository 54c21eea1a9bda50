//! The stage: fighter and bullet lists plus spawn timing.
//!
//! One frame is `update` followed by `render`. `update` runs a fixed sequence
//! (player, fighter sweep, bullet sweep, enemy spawner) and is the only place
//! entities are created or destroyed. `render` only reads.

use log::debug;
use rand::Rng;

use crate::assets::Assets;
use crate::constants::{PLAYER_START_X, PLAYER_START_Y, SCREEN_WIDTH};
use crate::control::update_player;
use crate::entities::{Entity, EntityId, InputState};
use crate::list::EntityList;
use crate::platform::{Platform, ResourceError};
use crate::spawn::Spawner;

// ── Removal rules ─────────────────────────────────────────────────────────────

/// An enemy is gone once its right edge has left the screen on the left.
pub fn fighter_out_of_bounds(fighter: &Entity) -> bool {
    fighter.x < -(fighter.w as f32)
}

/// A bullet is gone once its left edge has left the screen on the right.
pub fn bullet_out_of_bounds(bullet: &Entity) -> bool {
    bullet.x > SCREEN_WIDTH as f32
}

// ── Stage ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Stage {
    fighters: EntityList,
    bullets: EntityList,
    /// Alias into `fighters`. The player is never pruned, so it stays valid.
    player: EntityId,
    spawner: Spawner,
    assets: Assets,
    frame: u64,
}

impl Stage {
    /// Loads the shared drawables and places the player.
    pub fn new<P: Platform + ?Sized>(platform: &mut P) -> Result<Self, ResourceError> {
        let assets = Assets::load(platform)?;
        Ok(Self::with_assets(assets))
    }

    /// A stage holding only the player, using already loaded drawables.
    pub fn with_assets(assets: Assets) -> Self {
        let mut fighters = EntityList::new();
        let player = fighters.append(
            Entity::new(assets.player.handle, assets.player.size())
                .at(PLAYER_START_X, PLAYER_START_Y),
        );
        debug!(
            "stage ready, player at ({PLAYER_START_X}, {PLAYER_START_Y}) size {}x{}",
            assets.player.w, assets.player.h
        );

        Self {
            fighters,
            bullets: EntityList::new(),
            player,
            spawner: Spawner::default(),
            assets,
            frame: 0,
        }
    }

    // ── Accessors ────────────────────────────────────────────────────────────

    pub fn player_id(&self) -> EntityId {
        self.player
    }

    pub fn player(&self) -> Option<&Entity> {
        self.fighters.get(self.player)
    }

    pub fn fighters(&self) -> &EntityList {
        &self.fighters
    }

    pub fn bullets(&self) -> &EntityList {
        &self.bullets
    }

    pub fn assets(&self) -> &Assets {
        &self.assets
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn enemy_spawn_timer(&self) -> i32 {
        self.spawner.timer()
    }

    /// Replaces the enemy countdown, e.g. to hold spawns back in a harness.
    pub fn set_enemy_spawn_timer(&mut self, timer: i32) {
        self.spawner = Spawner::new(timer);
    }

    pub fn insert_fighter(&mut self, fighter: Entity) -> EntityId {
        self.fighters.append(fighter)
    }

    pub fn insert_bullet(&mut self, bullet: Entity) -> EntityId {
        self.bullets.append(bullet)
    }

    // ── Frame ────────────────────────────────────────────────────────────────

    /// Advances the simulation by one frame.
    pub fn update(&mut self, input: &InputState, rng: &mut impl Rng) {
        self.frame += 1;

        self.do_player(input);
        self.do_fighters();
        self.do_bullets();
        self.spawn_enemies(rng);
    }

    fn do_player(&mut self, input: &InputState) {
        let Some(player) = self.fighters.get_mut(self.player) else {
            return;
        };
        if let Some(bullet) = update_player(player, input, &self.assets) {
            let id = self.bullets.append(bullet);
            debug!("frame {}: player fired {id:?}", self.frame);
        }
    }

    fn do_fighters(&mut self) {
        let player = self.player;
        let frame = self.frame;
        self.fighters.sweep(
            // The player already moved under its own control.
            |id, fighter| {
                if id != player {
                    fighter.step();
                }
            },
            |id, fighter| id != player && fighter_out_of_bounds(fighter),
            |id, _| debug!("frame {frame}: fighter {id:?} left the screen"),
        );
    }

    fn do_bullets(&mut self) {
        let frame = self.frame;
        self.bullets.sweep(
            |_, bullet| bullet.step(),
            |_, bullet| bullet_out_of_bounds(bullet),
            |id, _| debug!("frame {frame}: bullet {id:?} left the screen"),
        );
    }

    fn spawn_enemies(&mut self, rng: &mut impl Rng) {
        if let Some(enemy) = self.spawner.tick(rng, &self.assets) {
            self.fighters.append(enemy);
        }
    }

    /// Submits every live entity: the player, then bullets, then enemies.
    pub fn render<P: Platform + ?Sized>(&self, platform: &mut P) {
        if let Some(player) = self.player() {
            platform.submit(player.texture, player.x, player.y);
        }
        for (_, bullet) in &self.bullets {
            platform.submit(bullet.texture, bullet.x, bullet.y);
        }
        for (id, fighter) in &self.fighters {
            if id != self.player {
                platform.submit(fighter.texture, fighter.x, fighter.y);
            }
        }
    }
}
