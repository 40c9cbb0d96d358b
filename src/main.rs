//! Terminal pipe puzzle runner (default binary).
//!
//! Fixed-timestep loop: input is polled until the next 60 Hz tick, ticks are
//! caught up if the loop fell behind, and frames are only drawn when something
//! visible changed.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};
use log::info;

use tui_pipes::app::App;
use tui_pipes::config::AppConfig;
use tui_pipes::core::RecordStore;
use tui_pipes::input::handle_mouse_event;
use tui_pipes::logging;
use tui_pipes::store::JsonFileStore;
use tui_pipes::term::{FrameBuffer, RenderThrottle, TerminalRenderer, Viewport};
use tui_pipes::types::TICK_MICROS;

/// Ticks run back to back at most this many times before the backlog is dropped.
const MAX_CATCH_UP_TICKS: u32 = 8;
/// Redraw an unchanged frame at least this often.
const IDLE_REDRAW_MS: u64 = 500;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    logging::init(config.log_path.as_deref())?;

    let seed = config.seed_or_clock();
    info!(
        "starting: player {}, records {}, seed {}",
        config.player,
        config.records_path.display(),
        seed
    );
    let store = JsonFileStore::new(config.records_path.clone());
    let mut app = App::new(&config, seed, store);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut app);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!("bye");
    result
}

fn run<S>(term: &mut TerminalRenderer, app: &mut App<S>) -> Result<()>
where
    S: RecordStore,
    S::Error: std::fmt::Display,
{
    let tick = Duration::from_micros(TICK_MICROS);
    let started = Instant::now();
    let mut next_tick = started + tick;
    let mut throttle = RenderThrottle::new(IDLE_REDRAW_MS);
    let mut fb = FrameBuffer::new(0, 0);

    while !app.should_quit() {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);

        let now_ms = started.elapsed().as_millis() as u64;
        if throttle.should_render(now_ms, app.fingerprint(viewport)) {
            app.render_into(viewport, &mut fb);
            term.draw_swap(&mut fb)?;
        }

        let timeout = next_tick.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => app.handle_key(key),
                Event::Mouse(mouse) => {
                    if let Some(click) = handle_mouse_event(mouse) {
                        app.handle_click(click, viewport);
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                    throttle.reset();
                }
                _ => {}
            }
        }

        let now = Instant::now();
        let mut steps = 0;
        while now >= next_tick && steps < MAX_CATCH_UP_TICKS {
            app.tick();
            next_tick += tick;
            steps += 1;
        }
        if now >= next_tick {
            next_tick = now + tick;
        }
    }
    Ok(())
}
