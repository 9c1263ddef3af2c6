//! Analyze command - Report the engine's choice for a position

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::output::{print_board, print_kv, print_section, print_subsection},
    config::{GameConfig, TokenPair},
    game::{Cell, Coord, GameSession, Grid, Player, is_winning_placement},
    search,
};

#[derive(Parser, Debug)]
#[command(about = "Analyze a position and report the engine's move")]
pub struct AnalyzeArgs {
    /// Board side length
    #[arg(long, default_value_t = 3)]
    pub size: usize,

    /// Aligned marks needed to win
    #[arg(long, default_value_t = 3)]
    pub win_length: usize,

    /// Search depth in plies (overrides the configuration file)
    #[arg(long)]
    pub depth: Option<usize>,

    /// Moves to replay from an empty board, as space-separated `row,col` pairs
    #[arg(long)]
    pub moves: Option<String>,

    /// Board text to analyze, rows separated by `/` (cells `X`, `O`, `.`);
    /// its row count defines the board size
    #[arg(long)]
    pub board: Option<String>,

    /// Path to a JSON game configuration
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Emit the analysis as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct Analysis {
    size: usize,
    win_length: usize,
    depth: usize,
    board: String,
    to_move: Option<String>,
    status: String,
    engine_move: Option<Coord>,
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    if args.board.is_some() && args.moves.is_some() {
        return Err(anyhow!("--board and --moves cannot be combined"));
    }

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => GameConfig::new(args.size, args.win_length, TokenPair::default())?,
    };
    if let Some(depth) = args.depth {
        config.search.depth = depth;
    }

    let analysis = match &args.board {
        Some(text) => analyze_board(config, text)?,
        None => analyze_moves(config, args.moves.as_deref().unwrap_or(""))?,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        print_report(&analysis);
    }
    Ok(())
}

pub(crate) fn load_config(path: &std::path::Path) -> Result<GameConfig> {
    GameConfig::load(path)
        .map_err(|error| anyhow!("Cannot load configuration file '{}': {error}", path.display()))
}

/// Replay `moves_text` through a session, then ask the engine for the side to
/// move
fn analyze_moves(config: GameConfig, moves_text: &str) -> Result<Analysis> {
    let mut session = GameSession::new(config)?;
    session.play_sequence(parse_move_list(moves_text)?)?;

    let open = session.outcome().is_none();
    let engine_move = if open {
        Some(search::choose_move(
            session.grid(),
            session.to_move(),
            session.config().win_length,
            &session.config().search,
        )?)
    } else {
        None
    };

    Ok(Analysis {
        size: session.config().size,
        win_length: session.config().win_length,
        depth: session.config().search.depth,
        board: session.grid().to_string(),
        to_move: open.then(|| {
            session
                .config()
                .tokens
                .label(session.to_move())
                .to_string()
        }),
        status: session.status_line(),
        engine_move,
    })
}

/// Analyze a raw board text with no move log behind it
fn analyze_board(mut config: GameConfig, text: &str) -> Result<Analysis> {
    let grid = Grid::from_rows(&text.replace('/', "\n"))?;
    config.size = grid.size();
    config.validate()?;

    let winner = board_winner(&grid, config.win_length);
    let to_move = side_to_move(&grid)?;
    let open = winner.is_none() && grid.empty_count() > 0;

    let status = match winner {
        Some(player) => format!("winner: {}", config.tokens.label(player)),
        None if grid.empty_count() == 0 => "draw".to_string(),
        None => format!("next: {}", config.tokens.label(to_move)),
    };
    let engine_move = if open {
        Some(search::choose_move(
            &grid,
            to_move,
            config.win_length,
            &config.search,
        )?)
    } else {
        None
    };

    Ok(Analysis {
        size: config.size,
        win_length: config.win_length,
        depth: config.search.depth,
        board: grid.to_string(),
        to_move: open.then(|| config.tokens.label(to_move).to_string()),
        status,
        engine_move,
    })
}

/// Find a winner on a board with no known last move
///
/// The play path only ever checks the tip placement; a pasted board has no
/// tip, so every occupied cell is a candidate origin.
fn board_winner(grid: &Grid, win_length: usize) -> Option<Player> {
    for row in 0..grid.size() {
        for col in 0..grid.size() {
            let coord = Coord::new(row, col);
            if is_winning_placement(grid, coord, win_length) {
                return grid.get(coord).player();
            }
        }
    }
    None
}

/// Derive the side to move from the mark counts
fn side_to_move(grid: &Grid) -> Result<Player> {
    let mut x = 0usize;
    let mut o = 0usize;
    for row in 0..grid.size() {
        for col in 0..grid.size() {
            match grid.get(Coord::new(row, col)) {
                Cell::X => x += 1,
                Cell::O => o += 1,
                Cell::Empty => {}
            }
        }
    }
    if x == o {
        Ok(Player::X)
    } else if x == o + 1 {
        Ok(Player::O)
    } else {
        Err(anyhow!(
            "Board has {x} X marks and {o} O marks; alternating play cannot produce that"
        ))
    }
}

fn parse_move_list(text: &str) -> crate::Result<Vec<(usize, usize)>> {
    text.split_whitespace()
        .map(|token| {
            let (row, col) = token
                .split_once(',')
                .ok_or_else(|| invalid_move(token))?;
            let row = row.trim().parse().map_err(|_| invalid_move(token))?;
            let col = col.trim().parse().map_err(|_| invalid_move(token))?;
            Ok((row, col))
        })
        .collect()
}

fn invalid_move(token: &str) -> crate::Error {
    crate::Error::InvalidMoveText {
        text: token.to_string(),
    }
}

fn print_report(analysis: &Analysis) {
    print_section("Position analysis");
    print_kv("board size", &analysis.size.to_string());
    print_kv("win length", &analysis.win_length.to_string());
    print_kv("depth", &analysis.depth.to_string());

    print_subsection("Board");
    print_board(&analysis.board);

    print_subsection("Verdict");
    print_kv("status", &analysis.status);
    if let Some(to_move) = &analysis.to_move {
        print_kv("to move", to_move);
    }
    if let Some(coord) = analysis.engine_move {
        print_kv("engine move", &coord.to_string());
    }
}
