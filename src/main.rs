//! Command line entry point for the grade checker and the maze walker.

use anyhow::Result;
use bpaf::*;
use log::info;
use pacwalk::grade::input::StdinInput;
use pacwalk::grade::session::run_session;
use pacwalk::grid::standard_grids::StandardGrid;
use pacwalk::grid::Direction;
use pacwalk::movement::MovementController;
use pacwalk::settings::Settings;
use std::io;
use std::path::PathBuf;

/// Top-level CLI commands.
#[derive(Debug, Clone)]
enum Cmd {
    /// Print the current grade and predict the next one
    Grade { config: Option<PathBuf> },
    /// Move Pacman through the maze
    Walk {
        config: Option<PathBuf>,
        grid: Option<StandardGrid>,
        show_grid: bool,
        moves: Vec<Direction>,
    },
}

/// Parse the command line arguments and return a `Cmd` enum
fn options() -> Cmd {
    /// parses the settings file path
    fn config_file() -> impl Parser<Option<PathBuf>> {
        long("config")
            .short('c')
            .help("JSON settings file")
            .argument::<PathBuf>("FILE")
            .optional()
    }

    let config = config_file();
    let grade = construct!(Cmd::Grade { config })
        .to_options()
        .command("grade")
        .help("Print the current grade and predict the next one");

    let grid = long("grid")
        .short('g')
        .help("Grid to walk on: maze, blank or open")
        .argument::<StandardGrid>("GRID")
        .optional();
    let show_grid = long("show-grid").help("Print the grid before walking").switch();
    let moves = positional::<Direction>("MOVE")
        .help("up, down, left or right (or u, d, l, r)")
        .many();
    let config = config_file();
    let walk = construct!(Cmd::Walk {
        config,
        grid,
        show_grid,
        moves
    })
    .to_options()
    .command("walk")
    .help("Move Pacman through the maze");

    construct!([grade, walk])
        .to_options()
        .descr("Grade predictor and Pacman maze walker")
        .run()
}

fn load_settings(config: Option<PathBuf>) -> Result<Settings> {
    match config {
        Some(path) => {
            info!("Loading settings from {}", path.display());
            Settings::load(path)
        }
        None => Ok(Settings::default()),
    }
}

fn walk(
    settings: Settings,
    grid: Option<StandardGrid>,
    show_grid: bool,
    moves: Vec<Direction>,
) -> Result<()> {
    let mut walk = settings.walk;
    if let Some(grid) = grid {
        walk.standard_grid = grid;
        walk.start = None;
    }

    let grid = walk.standard_grid.get_grid();
    if show_grid {
        println!("{grid}");
    }

    let mut controller = MovementController::new(grid, walk.movement.clone(), walk.start())?;
    if let Some(bounds) = walk.clamp {
        controller = controller.with_clamp(bounds);
    }
    info!(
        "Pacman starts at ({}, {}) on {:?}",
        controller.position().x,
        controller.position().y,
        walk.standard_grid
    );

    for direction in moves {
        let moved = controller.try_move(direction);
        let p = controller.position();
        let tile = controller.tile();
        println!(
            "{:?}: {} ({}, {}) row {} col {}",
            direction,
            if moved { "moved to" } else { "blocked at" },
            p.x,
            p.y,
            tile.row,
            tile.col
        );
    }

    let p = controller.position();
    println!("Final position ({}, {})", p.x, p.y);
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match options() {
        Cmd::Grade { config } => {
            let settings = load_settings(config)?;
            run_session(&settings.grade, &mut StdinInput, &mut io::stdout())?;
        }
        Cmd::Walk {
            config,
            grid,
            show_grid,
            moves,
        } => walk(load_settings(config)?, grid, show_grid, moves)?,
    }

    Ok(())
}
