//! Rendering layer — all terminal I/O lives here.
//!
//! `TerminalPlatform` is the stage's drawing collaborator on a terminal.
//! `submit` only records what to draw; `present` turns the queue into
//! terminal commands and flushes once per frame.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

use side_shooter::atlas::SpriteAtlas;
use side_shooter::platform::{DrawableHandle, Platform, ResourceError};
use side_shooter::stage::Stage;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_HUD: Color = Color::Yellow;
const C_HINT: Color = Color::DarkGrey;

// ── Platform ──────────────────────────────────────────────────────────────────

pub struct TerminalPlatform<W: Write> {
    out: W,
    atlas: SpriteAtlas,
    cols: u16,
    rows: u16,
    queue: Vec<(DrawableHandle, f32, f32)>,
}

impl<W: Write> TerminalPlatform<W> {
    pub fn new(out: W, cols: u16, rows: u16) -> Self {
        Self {
            out,
            atlas: SpriteAtlas::new(cols, rows),
            cols,
            rows,
            queue: Vec::new(),
        }
    }

    /// Draw one complete frame: queued sprites in submission order, then the HUD.
    pub fn present(&mut self, stage: &Stage) -> std::io::Result<()> {
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;

        let queue = std::mem::take(&mut self.queue);
        for &(handle, x, y) in &queue {
            self.draw_sprite(handle, x, y)?;
        }

        self.draw_hud(stage)?;
        self.draw_controls_hint()?;

        // Park cursor in a harmless spot and flush
        self.out.queue(style::ResetColor)?;
        self.out.queue(cursor::MoveTo(0, self.rows.saturating_sub(1)))?;
        self.out.flush()?;
        Ok(())
    }

    // ── Sprites ───────────────────────────────────────────────────────────────

    fn draw_sprite(&mut self, handle: DrawableHandle, x: f32, y: f32) -> std::io::Result<()> {
        let Ok(art) = self.atlas.art(handle) else {
            log::warn!("dropping draw of unknown {handle}");
            return Ok(());
        };
        let (col, row) = self.atlas.cell_of(x, y);

        self.out.queue(style::SetForegroundColor(art.color))?;
        for (dy, line) in art.rows.iter().enumerate() {
            let cy = row + dy as i32;
            if cy < 0 || cy >= self.rows as i32 {
                continue;
            }
            for (dx, ch) in line.chars().enumerate() {
                let cx = col + dx as i32;
                if ch == ' ' || cx < 0 || cx >= self.cols as i32 {
                    continue;
                }
                self.out.queue(cursor::MoveTo(cx as u16, cy as u16))?;
                self.out.queue(Print(ch))?;
            }
        }
        Ok(())
    }

    // ── HUD (row 0) ───────────────────────────────────────────────────────────

    fn draw_hud(&mut self, stage: &Stage) -> std::io::Result<()> {
        let enemies = stage.fighters().len().saturating_sub(1);
        let text = format!(
            "Frame {:>6}   Enemies {:>3}   Bullets {:>3}",
            stage.frame(),
            enemies,
            stage.bullets().len()
        );
        self.out.queue(cursor::MoveTo(1, 0))?;
        self.out.queue(style::SetForegroundColor(C_HUD))?;
        self.out.queue(Print(text))?;
        Ok(())
    }

    // ── Controls hint (last row) ──────────────────────────────────────────────

    fn draw_controls_hint(&mut self) -> std::io::Result<()> {
        self.out.queue(cursor::MoveTo(1, self.rows.saturating_sub(1)))?;
        self.out.queue(style::SetForegroundColor(C_HINT))?;
        self.out.queue(Print("Arrows / WASD : Move   SPACE / Z : Fire   Q : Quit"))?;
        Ok(())
    }
}

impl<W: Write> Platform for TerminalPlatform<W> {
    fn load_drawable(&mut self, name: &str) -> Result<DrawableHandle, ResourceError> {
        self.atlas.load(name)
    }

    fn query_dimensions(&self, handle: DrawableHandle) -> Result<(i32, i32), ResourceError> {
        self.atlas.dimensions(handle)
    }

    fn submit(&mut self, handle: DrawableHandle, x: f32, y: f32) {
        self.queue.push((handle, x, y));
    }
}
