//! Terminal pathfinding visualizer using crossterm.
//!
//! Run: cargo run --bin pathgrid-term [config.json]
//!
//! Keys: space play/pause, n single step, s stop, m new maze,
//! a next algorithm, + and - change speed, q quits.
//! `PATHGRID_SEED` fixes the maze seed; `RUST_LOG` controls logging (to
//! stderr, so redirect it while the board is on screen).

use std::fmt::Display;
use std::io::{self, Write};
use std::time::Instant;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor},
    terminal::{self, ClearType},
};
use pathgrid::{Algorithm, CellState, Config, Pathfinder, Point, RunState};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

type DemoResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Background colour for each cell state.
fn cell_color(state: CellState) -> Color {
    let (r, g, b) = match state {
        CellState::Empty => (0xee, 0xee, 0xee),
        CellState::Start => (0x2e, 0xa0, 0x43),
        CellState::Goal => (0xd0, 0x3a, 0x2f),
        CellState::Wall => (0x30, 0x30, 0x38),
        CellState::Path => (0xf2, 0xc9, 0x4c),
        CellState::PathSearching => (0xf2, 0x8c, 0x28),
        CellState::Searched => (0x9c, 0xc3, 0xe6),
        CellState::Queued => (0xc6, 0xa9, 0xe0),
        CellState::Found => (0xff, 0xe0, 0x3d),
    };
    Color::Rgb { r, g, b }
}

fn next_algorithm(current: Algorithm) -> Algorithm {
    let i = Algorithm::ALL
        .iter()
        .position(|&a| a == current)
        .unwrap_or(0);
    Algorithm::ALL[(i + 1) % Algorithm::ALL.len()]
}

/// Carve a fresh maze and put start and goal on opposite lattice corners.
fn new_maze(pf: &mut Pathfinder, rng: &mut StdRng) -> pathgrid::Result<()> {
    pf.stop();
    pf.generate_maze(&mut *rng)?;
    let (w, h) = (pf.grid().width(), pf.grid().height());
    pf.place_cell(Point::ZERO, CellState::Start)?;
    pf.place_cell(Point::new((w - 1) / 2 * 2, (h - 1) / 2 * 2), CellState::Goal)
}

/// Status-line text for the outcome of a user command.
fn report<T: Display>(what: &str, result: pathgrid::Result<T>) -> String {
    match result {
        Ok(v) => format!("{what}: {v}"),
        Err(e) => {
            log::warn!("{what} failed: {e}");
            format!("{what}: {e}")
        }
    }
}

fn draw(out: &mut impl Write, pf: &Pathfinder, message: &str) -> io::Result<()> {
    let grid = pf.grid();
    for y in 0..grid.height() {
        queue!(out, cursor::MoveTo(0, y as u16))?;
        for x in 0..grid.width() {
            let state = grid.at(Point::new(x, y)).unwrap_or_default();
            queue!(out, SetBackgroundColor(cell_color(state)), Print("  "))?;
        }
        queue!(out, ResetColor)?;
    }

    let path = match pf.found_path() {
        Some(p) => format!("path {}", p.len().saturating_sub(1)),
        None => String::from("no path"),
    };
    let status = format!(
        "{} | {} | {} | {} expanded | {path}",
        pf.algorithm(),
        pf.run_state(),
        pf.speed(),
        pf.expanded(),
    );
    let bottom = grid.height() as u16;
    queue!(
        out,
        cursor::MoveTo(0, bottom),
        terminal::Clear(ClearType::CurrentLine),
        Print(status),
        cursor::MoveTo(0, bottom + 1),
        terminal::Clear(ClearType::CurrentLine),
        Print(message),
    )?;
    out.flush()
}

fn run(pf: &mut Pathfinder, rng: &mut StdRng) -> DemoResult<()> {
    let mut out = io::stdout();
    let mut message = report("play", pf.play());
    let mut next_tick = Instant::now();

    loop {
        draw(&mut out, pf, &message)?;

        let timeout = next_tick.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            let Event::Key(KeyEvent {
                code,
                kind: KeyEventKind::Press,
                ..
            }) = event::read()?
            else {
                continue;
            };
            message = match code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Char(' ') if pf.run_state() == RunState::Started => {
                    report("pause", pf.pause())
                }
                KeyCode::Char(' ') => report("play", pf.play()),
                KeyCode::Char('n') => report("step", pf.step()),
                KeyCode::Char('s') => format!("stop: {}", pf.stop()),
                KeyCode::Char('m') => report("maze", new_maze(pf, rng).map(|()| "ready")),
                KeyCode::Char('a') => {
                    pf.stop();
                    report("algorithm", pf.set_algorithm(next_algorithm(pf.algorithm())))
                }
                KeyCode::Char('+') => {
                    pf.set_speed(pf.speed().faster());
                    format!("speed {}", pf.speed())
                }
                KeyCode::Char('-') => {
                    pf.set_speed(pf.speed().slower());
                    format!("speed {}", pf.speed())
                }
                _ => continue,
            };
            continue;
        }

        next_tick = Instant::now() + pf.speed().interval();
        if pf.run_state() == RunState::Started {
            pf.step()?;
        }
    }
}

fn init_terminal() -> io::Result<()> {
    terminal::enable_raw_mode()?;
    execute!(
        io::stdout(),
        terminal::EnterAlternateScreen,
        cursor::Hide,
        terminal::Clear(ClearType::All)
    )
}

fn close_terminal() {
    let _ = execute!(io::stdout(), ResetColor, cursor::Show, terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
}

fn try_main() -> DemoResult<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => Config::from_json(&std::fs::read_to_string(path)?)?,
        None => Config::default(),
    };
    let seed: u64 = match std::env::var("PATHGRID_SEED") {
        Ok(s) => s.parse()?,
        Err(_) => rand::rng().random(),
    };
    log::info!(
        "{}x{} board, {}, {}, maze seed {seed}",
        config.width,
        config.height,
        config.algorithm,
        config.speed
    );

    let mut rng = StdRng::seed_from_u64(seed);
    let mut pf = Pathfinder::new(config)?;
    new_maze(&mut pf, &mut rng)?;

    init_terminal()?;
    let result = run(&mut pf, &mut rng);
    close_terminal();
    result
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    if let Err(e) = try_main() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
