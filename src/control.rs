//! Player steering and firing.

use crate::assets::Assets;
use crate::constants::{FIRE_COOLDOWN, PLAYER_SPEED};
use crate::entities::{Entity, InputState};
use crate::spawn::fire_bullet;

/// Velocity for the held directions.
///
/// Each axis is overwritten, not accumulated: left is applied before right and
/// up before down, so right and down win when both of a pair are held.
pub fn velocity_for(input: &InputState) -> (f32, f32) {
    let mut dx = 0.0;
    let mut dy = 0.0;

    if input.left {
        dx = -PLAYER_SPEED;
    }
    if input.right {
        dx = PLAYER_SPEED;
    }
    if input.up {
        dy = -PLAYER_SPEED;
    }
    if input.down {
        dy = PLAYER_SPEED;
    }

    (dx, dy)
}

/// Runs one frame of player control and returns the bullet fired, if any.
///
/// The reload counter ticks down first, then the velocity is set from input,
/// then a shot is taken from the current position, and finally the player
/// moves. Position is not clamped to the screen.
pub fn update_player(player: &mut Entity, input: &InputState, assets: &Assets) -> Option<Entity> {
    if player.reload > 0 {
        player.reload -= 1;
    }

    let (dx, dy) = velocity_for(input);
    player.dx = dx;
    player.dy = dy;

    let bullet = if input.fire && player.reload == 0 {
        player.reload = FIRE_COOLDOWN;
        Some(fire_bullet(player, assets))
    } else {
        None
    };

    player.step();
    bullet
}
