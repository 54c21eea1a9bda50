mod display;

use std::collections::HashMap;
use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use log::{debug, error};
use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

use side_shooter::entities::InputState;
use side_shooter::logging;
use side_shooter::platform::ResourceError;
use side_shooter::stage::Stage;

use display::TerminalPlatform;

/// A key counts as held if its last press or repeat arrived within this
/// window. Covers terminals that never report releases: OS key repeat runs
/// at 15 Hz or faster, so a held key refreshes well before expiry.
const HOLD_WINDOW: Duration = Duration::from_millis(133);

/// Side-scrolling arcade shooter in the terminal
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging (written to stderr; redirect it while playing)
    #[arg(short, long)]
    verbose: bool,

    /// Seed for enemy spawns; a fresh random seed is used when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Target frames per second
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..=240))]
    fps: u32,
}

#[derive(Debug, Error)]
enum AppError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Resource(#[from] ResourceError),
}

// ── Held keys ─────────────────────────────────────────────────────────────────

/// Last press/repeat time of every key currently considered down.
///
/// Terminals with keyboard enhancement report releases and keys are dropped
/// immediately; elsewhere they expire after `HOLD_WINDOW` of silence.
#[derive(Default)]
struct HeldKeys {
    seen: HashMap<KeyCode, Instant>,
}

impl HeldKeys {
    fn press(&mut self, code: KeyCode, at: Instant) {
        self.seen.insert(code, at);
    }

    fn release(&mut self, code: KeyCode) {
        self.seen.remove(&code);
    }

    fn any(&self, codes: &[KeyCode], now: Instant) -> bool {
        codes.iter().any(|code| {
            self.seen
                .get(code)
                .map(|&last| now.saturating_duration_since(last) <= HOLD_WINDOW)
                .unwrap_or(false)
        })
    }

    fn input(&self, now: Instant) -> InputState {
        InputState {
            up: self.any(&[KeyCode::Up, KeyCode::Char('w'), KeyCode::Char('W')], now),
            down: self.any(&[KeyCode::Down, KeyCode::Char('s'), KeyCode::Char('S')], now),
            left: self.any(&[KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')], now),
            right: self.any(&[KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')], now),
            fire: self.any(&[KeyCode::Char(' '), KeyCode::Char('z'), KeyCode::Char('Z')], now),
        }
    }
}

fn is_quit(code: KeyCode, modifiers: KeyModifiers) -> bool {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') => modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs frames until the player quits: drain input, update, draw, pace.
fn game_loop<W: Write>(
    platform: &mut TerminalPlatform<W>,
    stage: &mut Stage,
    rng: &mut StdRng,
    rx: &mpsc::Receiver<Event>,
    frame: Duration,
) -> Result<(), AppError> {
    let mut held = HeldKeys::default();

    loop {
        let frame_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(event) = rx.try_recv() {
            let Event::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) = event
            else {
                continue;
            };
            match kind {
                KeyEventKind::Press => {
                    if is_quit(code, modifiers) {
                        debug!("quit after {} frames", stage.frame());
                        return Ok(());
                    }
                    held.press(code, frame_start);
                }
                KeyEventKind::Repeat => held.press(code, frame_start),
                KeyEventKind::Release => held.release(code),
            }
        }

        let input = held.input(frame_start);
        stage.update(&input, rng);
        stage.render(platform);
        platform.present(stage)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame {
            thread::sleep(frame - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<(), AppError> {
    let args = Args::parse();
    logging::init(args.verbose);

    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Ask for key release (and repeat) events; terminals without the kitty
    // protocol refuse and we fall back to the hold window.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Blocking event reads live on their own thread so the loop never waits.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let result = run(&mut out, &rx, &args);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Err(err) = &result {
        error!("{err}");
    }
    result
}

fn run<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>, args: &Args) -> Result<(), AppError> {
    let (cols, rows) = terminal::size()?;
    let mut platform = TerminalPlatform::new(out, cols, rows);
    let mut stage = Stage::new(&mut platform)?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    debug!(
        "starting on a {cols}x{rows} terminal at {} fps (seed {:?})",
        args.fps, args.seed
    );

    let frame = Duration::from_secs(1) / args.fps;
    game_loop(&mut platform, &mut stage, &mut rng, rx, frame)
}
