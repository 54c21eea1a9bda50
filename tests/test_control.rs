mod common;

use side_shooter::constants::{FIRE_COOLDOWN, PLAYER_SPEED};
use side_shooter::control::{update_player, velocity_for};
use side_shooter::entities::{Entity, InputState};

fn player_at(x: f32, y: f32) -> Entity {
    let sprite = common::assets().player;
    Entity::new(sprite.handle, sprite.size()).at(x, y)
}

fn held(up: bool, down: bool, left: bool, right: bool) -> InputState {
    InputState {
        up,
        down,
        left,
        right,
        fire: false,
    }
}

const FIRE: InputState = InputState {
    up: false,
    down: false,
    left: false,
    right: false,
    fire: true,
};

// ── velocity_for ──────────────────────────────────────────────────────────────

#[test]
fn no_input_means_no_velocity() {
    assert_eq!(velocity_for(&InputState::default()), (0.0, 0.0));
}

#[test]
fn each_direction_sets_its_axis() {
    assert_eq!(velocity_for(&held(true, false, false, false)), (0.0, -PLAYER_SPEED));
    assert_eq!(velocity_for(&held(false, true, false, false)), (0.0, PLAYER_SPEED));
    assert_eq!(velocity_for(&held(false, false, true, false)), (-PLAYER_SPEED, 0.0));
    assert_eq!(velocity_for(&held(false, false, false, true)), (PLAYER_SPEED, 0.0));
}

#[test]
fn diagonals_combine_axes() {
    assert_eq!(
        velocity_for(&held(true, false, true, false)),
        (-PLAYER_SPEED, -PLAYER_SPEED)
    );
}

#[test]
fn right_and_down_win_over_their_opposites() {
    assert_eq!(velocity_for(&held(false, false, true, true)), (PLAYER_SPEED, 0.0));
    assert_eq!(velocity_for(&held(true, true, false, false)), (0.0, PLAYER_SPEED));
}

// ── movement ──────────────────────────────────────────────────────────────────

#[test]
fn player_moves_by_its_velocity() {
    let assets = common::assets();
    let mut player = player_at(100.0, 100.0);
    update_player(&mut player, &held(false, true, false, true), &assets);
    assert_eq!((player.x, player.y), (104.0, 104.0));
    assert_eq!((player.dx, player.dy), (PLAYER_SPEED, PLAYER_SPEED));
}

#[test]
fn releasing_keys_stops_the_player() {
    let assets = common::assets();
    let mut player = player_at(100.0, 100.0);
    update_player(&mut player, &held(false, false, false, true), &assets);
    update_player(&mut player, &InputState::default(), &assets);
    assert_eq!(player.x, 104.0);
}

#[test]
fn player_is_not_clamped_to_the_screen() {
    let assets = common::assets();
    let mut player = player_at(0.0, 0.0);
    for _ in 0..3 {
        update_player(&mut player, &held(true, false, true, false), &assets);
    }
    assert_eq!((player.x, player.y), (-12.0, -12.0));
}

// ── firing ────────────────────────────────────────────────────────────────────

#[test]
fn fire_with_zero_reload_shoots_and_resets_reload() {
    let assets = common::assets();
    let mut player = player_at(100.0, 100.0);
    let bullet = update_player(&mut player, &FIRE, &assets);
    assert!(bullet.is_some());
    assert_eq!(player.reload, FIRE_COOLDOWN);
}

#[test]
fn fire_is_rejected_while_reloading() {
    let assets = common::assets();
    let mut player = player_at(100.0, 100.0);
    player.reload = 3;
    assert!(update_player(&mut player, &FIRE, &assets).is_none());
    assert_eq!(player.reload, 2);
}

#[test]
fn reload_counts_down_to_zero_and_stays_there() {
    let assets = common::assets();
    let mut player = player_at(100.0, 100.0);
    update_player(&mut player, &FIRE, &assets);

    let mut seen = Vec::new();
    for _ in 0..12 {
        update_player(&mut player, &InputState::default(), &assets);
        seen.push(player.reload);
    }
    assert_eq!(seen, vec![7, 6, 5, 4, 3, 2, 1, 0, 0, 0, 0, 0]);
}

#[test]
fn holding_fire_shoots_every_eighth_frame() {
    let assets = common::assets();
    let mut player = player_at(100.0, 100.0);
    let shots: Vec<bool> = (0..17)
        .map(|_| update_player(&mut player, &FIRE, &assets).is_some())
        .collect();
    let frames: Vec<usize> = shots
        .into_iter()
        .enumerate()
        .filter_map(|(i, shot)| shot.then_some(i))
        .collect();
    assert_eq!(frames, vec![0, 8, 16]);
}

#[test]
fn bullet_leaves_from_position_before_this_frames_move() {
    let assets = common::assets();
    let mut player = player_at(100.0, 100.0);
    let input = InputState {
        right: true,
        fire: true,
        ..InputState::default()
    };
    let bullet = update_player(&mut player, &input, &assets);
    assert_eq!(bullet.map(|b| b.x), Some(100.0));
    assert_eq!(player.x, 104.0);
}
