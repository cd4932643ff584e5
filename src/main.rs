//! Terminal runner (default binary).
//!
//! Runs the game loop explicitly: wait for input until the next frame is due,
//! apply key commands as they arrive, then tick the drop timer with the real
//! elapsed time and redraw.

use std::fs::File;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use tracing::{info, Level};

use arena_tetris::core::{GameSnapshot, GameState};
use arena_tetris::input::{accepts_kind, handle_key_event, should_quit};
use arena_tetris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use arena_tetris::types::{Command, GameConfig, GameEvent, TICK_MS};

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    setup_logging(config.log_path.as_deref())?;
    info!(?config, "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Log to a file when `TETRIS_LOG_PATH` is set; the terminal belongs to the game.
fn setup_logging(path: Option<&str>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("creating log file {path}"))?;
    tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .compact()
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &GameConfig) -> Result<()> {
    let mut game = GameState::new(config);
    game.start();

    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let frame = Duration::from_millis(TICK_MS as u64);
    let mut last_frame = Instant::now();

    loop {
        // Input with timeout until next frame.
        let timeout = frame.saturating_sub(last_frame.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if accepts_kind(key.kind) => {
                    if should_quit(key) {
                        info!(score = game.score(), "quit");
                        return Ok(());
                    }
                    if let Some(command) = handle_key_event(key) {
                        game.apply(command);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        let now = Instant::now();
        let elapsed = now.duration_since(last_frame);
        if elapsed >= frame {
            last_frame = now;
            let elapsed_ms = u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX);
            game.apply(Command::Tick(elapsed_ms));

            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            game.snapshot_into(&mut snap);
            view.render_into(&snap, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
        }

        for event in game.take_events() {
            if let GameEvent::ScoreChanged(score) = event {
                info!(score, "score changed");
            }
        }
    }
}
