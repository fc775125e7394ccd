//! Terminal Game-of-Life runner (default binary).
//!
//! Hosts one simulation session over a character canvas: crossterm for
//! input, a framebuffer diff renderer for output, and a cooperative
//! ticker driving generations. The core crates never see the terminal.

use std::time::{Duration, Instant};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use log::info;

use tui_life::engine::{GolSession, Ticker};
use tui_life::life::find_pattern;
use tui_life::term::{CharCanvas, TerminalRenderer};
use tui_life::types::{PanDirection, DEFAULT_CELL_SIZE_PX, DEFAULT_STEP_INTERVAL_MS};

#[derive(Debug, Parser)]
#[command(name = "tui-life", about = "Infinite pannable Game of Life in the terminal")]
struct Args {
    /// Cell edge length in pixels (one pixel per terminal character).
    #[arg(long, default_value_t = DEFAULT_CELL_SIZE_PX)]
    cell_size: f64,

    /// Milliseconds between generations in continuous mode.
    #[arg(long, default_value_t = DEFAULT_STEP_INTERVAL_MS)]
    interval_ms: u64,

    /// Starting pattern: glider, blinker, toad, beacon, pulsar, lwss,
    /// hwss, r-pentomino, glider-gun.
    #[arg(long, default_value = "glider")]
    pattern: String,

    /// Canvas width override (defaults to the terminal width).
    #[arg(long)]
    width: Option<u16>,

    /// Canvas height override (defaults to the terminal height).
    #[arg(long)]
    height: Option<u16>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &args);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, args: &Args) -> Result<()> {
    let (term_w, term_h) = crossterm::terminal::size().unwrap_or((80, 24));
    let width = u32::from(args.width.unwrap_or(term_w));
    let height = u32::from(args.height.unwrap_or(term_h));

    let pattern = find_pattern(&args.pattern)
        .ok_or_else(|| anyhow!("unknown pattern {:?}", args.pattern))?;

    let mut session = GolSession::new(CharCanvas::new(), width, height, args.cell_size)
        .with_context(|| format!("initializing {width}x{height} viewport"))?;
    session.seed_pattern(pattern);
    info!(
        "seeded {:?} ({} cells) on {width}x{height}, cell size {}",
        pattern.name,
        session.population().len(),
        args.cell_size
    );

    let mut ticker = Ticker::new(Duration::from_millis(args.interval_ms));

    loop {
        term.draw(session.adapter().frame())?;

        let timeout = ticker
            .time_to_next(Instant::now())
            .unwrap_or(Duration::from_millis(50));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key)
                    if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) =>
                {
                    let pan_px = session.grid().cell_size;
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                        KeyCode::Char(' ') => {
                            ticker.toggle_at(Instant::now());
                            if ticker.is_running() {
                                session.start();
                            } else {
                                session.stop();
                            }
                        }
                        KeyCode::Char('n') => {
                            if !ticker.is_running() {
                                session.step();
                            }
                        }
                        KeyCode::Char('r') => {
                            ticker.stop();
                            session.seed_pattern(pattern);
                        }
                        KeyCode::Char('c') => {
                            ticker.stop();
                            session.reset();
                        }
                        KeyCode::Up => session.pan(PanDirection::Up, pan_px),
                        KeyCode::Down => session.pan(PanDirection::Down, pan_px),
                        KeyCode::Left => session.pan(PanDirection::Left, pan_px),
                        KeyCode::Right => session.pan(PanDirection::Right, pan_px),
                        KeyCode::Char('+') | KeyCode::Char('=') => {
                            // Zooming past the surface is rejected, not fatal.
                            let _ = session.zoom_in();
                        }
                        KeyCode::Char('-') => {
                            let _ = session.zoom_out();
                        }
                        _ => {}
                    }
                }
                Event::Resize(w, h) => {
                    if session.resize(u32::from(w), u32::from(h)).is_ok() {
                        term.invalidate();
                    }
                }
                _ => {}
            }
        }

        if ticker.due(Instant::now()) {
            session.step();
        }
    }
}
