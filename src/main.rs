//! Terminal water simulation runner.
//!
//! Uses crossterm for input and a framebuffer-based renderer. The loop runs
//! a fixed 20 ticks per second; each tick stamps the generators when due,
//! draws the pre-step state, then advances the flow engine - so what is on
//! screen is always the state the next step starts from.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_water::core::{flow, Grid, SourceInjector};
use tui_water::input::{handle_key_event, should_quit};
use tui_water::term::{TerminalRenderer, Viewport, WaterView};
use tui_water::types::{
    SimAction, GRID_HEIGHT, GRID_WIDTH, INJECT_PERIOD, SOURCE_X, SOURCE_Y, TICK_MS,
};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut grid = Grid::new(GRID_WIDTH, GRID_HEIGHT);
    let injector = SourceInjector::centered_row(SOURCE_X, SOURCE_Y);
    let view = WaterView::default();

    let mut tick_count: u64 = 0;
    let mut paused = false;
    let tick_duration = Duration::from_millis(TICK_MS);
    let mut last_tick = Instant::now();

    draw(term, &view, &grid, tick_count, paused)?;

    loop {
        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    match handle_key_event(key) {
                        Some(SimAction::TogglePause) => {
                            paused = !paused;
                            draw(term, &view, &grid, tick_count, paused)?;
                        }
                        Some(SimAction::Restart) => {
                            grid.clear();
                            tick_count = 0;
                            draw(term, &view, &grid, tick_count, paused)?;
                        }
                        None => {}
                    }
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                    draw(term, &view, &grid, tick_count, paused)?;
                }
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            if paused {
                continue;
            }
            tick_count += 1;

            // Inject, draw, then step: generator stamps are visible for one
            // frame before the flow engine moves them.
            if tick_count % INJECT_PERIOD == 0 {
                injector.stamp(&mut grid);
            }
            draw(term, &view, &grid, tick_count, paused)?;
            grid = flow::step(&grid);
        }
    }
}

fn draw(
    term: &mut TerminalRenderer,
    view: &WaterView,
    grid: &Grid,
    tick_count: u64,
    paused: bool,
) -> Result<()> {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let fb = view.render(grid, tick_count, paused, Viewport::new(w, h));
    term.draw(&fb)
}
