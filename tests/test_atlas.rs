use crossterm::style::Color;

use side_shooter::atlas::{SpriteArt, SpriteAtlas};
use side_shooter::platform::{DrawableHandle, ResourceError};

// 80x24 terminal → one cell is 16 x 30 world pixels.
fn atlas() -> SpriteAtlas {
    SpriteAtlas::new(80, 24)
}

#[test]
fn builtin_names_resolve() {
    let mut atlas = atlas();
    for name in ["player.png", "playerBullet.png", "enemy.png"] {
        assert!(atlas.load(name).is_ok(), "{name}");
    }
}

#[test]
fn loading_twice_returns_the_cached_handle() {
    let mut atlas = atlas();
    let first = atlas.load("enemy.png").unwrap();
    let other = atlas.load("player.png").unwrap();
    let again = atlas.load("enemy.png").unwrap();
    assert_eq!(first, again);
    assert_ne!(first, other);
}

#[test]
fn unknown_name_is_not_found() {
    let mut atlas = atlas();
    assert_eq!(
        atlas.load("boss.png"),
        Err(ResourceError::NotFound {
            name: "boss.png".to_string()
        })
    );
}

#[test]
fn empty_art_fails_to_decode() {
    let mut atlas = SpriteAtlas::with_art(80, 24, vec![SpriteArt::new("blank.png", &[], Color::White)]);
    assert!(matches!(
        atlas.load("blank.png"),
        Err(ResourceError::Decode { .. })
    ));
}

#[test]
fn foreign_handle_is_invalid() {
    let atlas = atlas();
    let handle = DrawableHandle::new(9);
    assert_eq!(
        atlas.dimensions(handle),
        Err(ResourceError::InvalidHandle(handle))
    );
}

#[test]
fn dimensions_scale_cells_to_world_pixels() {
    let mut atlas = atlas();
    let player = atlas.load("player.png").unwrap();
    let bullet = atlas.load("playerBullet.png").unwrap();

    // 5 x 3 cells and 2 x 1 cells
    assert_eq!(atlas.dimensions(player), Ok((80, 90)));
    assert_eq!(atlas.dimensions(bullet), Ok((32, 30)));
}

#[test]
fn cell_of_floors_world_coordinates() {
    let atlas = atlas();
    assert_eq!(atlas.cell_of(0.0, 0.0), (0, 0));
    assert_eq!(atlas.cell_of(15.9, 29.9), (0, 0));
    assert_eq!(atlas.cell_of(16.0, 30.0), (1, 1));
    assert_eq!(atlas.cell_of(-1.0, -0.5), (-1, -1));
    assert_eq!(atlas.cell_of(1280.0, 720.0), (80, 24));
}

#[test]
fn art_width_is_the_widest_row() {
    let art = SpriteArt::new("x", &["ab", "abcd", ""], Color::White);
    assert_eq!(art.cols(), 4);
}
