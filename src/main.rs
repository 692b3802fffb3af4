use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use kokaton_fight::clock::FrameClock;
use kokaton_fight::compute::{init_state, tick};
use kokaton_fight::config::Args;
use kokaton_fight::display::{self, Projection};
use kokaton_fight::entities::{GameState, GameStatus};
use kokaton_fight::input::KeyTracker;

// ── Logging ───────────────────────────────────────────────────────────────────

/// The terminal belongs to the game, so logs only go to an explicit file.
fn init_logging(args: &Args) -> Result<()> {
    let Some(path) = &args.log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Run one session until game over or a quit request; returns the final state.
///
/// Per frame: drain pending key events, tick the simulation, render, then
/// wait for the next clock tick.  On game over the last frame (with the
/// defeated sprite and overlay) is held for the configured pause.
fn game_loop<W: Write>(
    out: &mut W,
    args: &Args,
    rx: &mpsc::Receiver<Event>,
) -> Result<GameState> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let config = args.game_config();
    let mut state = init_state(&config, &mut rng);
    info!(
        "session start: viewport {}x{}, {} hazards, seed {:?}",
        config.viewport.width, config.viewport.height, config.hazard_count, args.seed
    );

    let mut keys = KeyTracker::new();
    let mut clock = FrameClock::new(args.fps);

    loop {
        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            if let Event::Key(key) = ev {
                keys.record(key, state.frame);
            }
        }
        if keys.quit_requested() {
            info!("quit requested at frame {}", state.frame);
            return Ok(state);
        }

        let input = keys.frame_input(state.frame);
        state = tick(&state, &input);

        let (cols, rows) = terminal::size()?;
        display::render(out, &state, &Projection::new(state.viewport, cols, rows))?;

        if state.status == GameStatus::GameOver {
            thread::sleep(args.game_over_pause());
            return Ok(state);
        }

        clock.wait_next_tick();
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args)?;

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode().context("failed to enable raw mode")?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Ghostty / kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let result = game_loop(&mut out, &args, &rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    let state = result?;
    let score = state.scoreboard.score();
    info!("final score {} after {} frames", score, state.frame);
    println!("Final score: {}", score);
    Ok(())
}
