//! Duel command - Run an engine-versus-opponent match series

use std::{fs::File, path::PathBuf};

use anyhow::{Result, anyhow};
use clap::{Parser, ValueEnum};
use rand::{SeedableRng, prelude::IndexedRandom, rngs::StdRng};
use serde::Serialize;
use serde_json::to_writer_pretty;

use crate::{
    cli::{
        commands::analyze::load_config,
        output::{
            create_duel_progress, format_number, format_rate, print_kv, print_section,
            print_subsection,
        },
    },
    config::{GameConfig, TokenPair},
    game::{Coord, Grid, History, Player},
    search,
};

#[derive(Parser, Debug)]
#[command(about = "Run an engine-versus-opponent match series")]
pub struct DuelArgs {
    /// Number of games to play
    #[arg(long, short = 'g', default_value_t = 20)]
    pub games: usize,

    /// Board side length
    #[arg(long, default_value_t = 3)]
    pub size: usize,

    /// Aligned marks needed to win
    #[arg(long, default_value_t = 3)]
    pub win_length: usize,

    /// Search depth in plies (overrides the configuration file)
    #[arg(long)]
    pub depth: Option<usize>,

    /// Opponent to play against
    #[arg(long, short = 'o', value_enum, default_value_t = Opponent::Random)]
    pub opponent: Opponent,

    /// Which side the engine takes
    #[arg(long, value_enum, default_value_t = EngineSide::Alternate)]
    pub engine_side: EngineSide,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Path to a JSON game configuration
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Export the summary as JSON
    #[arg(long)]
    pub export: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Opponent {
    /// Uniform random legal moves
    Random,
    /// The same search engine, mirrored
    Engine,
}

impl Opponent {
    fn label(self) -> &'static str {
        match self {
            Opponent::Random => "random",
            Opponent::Engine => "engine",
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum EngineSide {
    /// Engine moves first in every game
    First,
    /// Engine moves second in every game
    Second,
    /// Engine alternates sides game by game
    Alternate,
}

impl EngineSide {
    fn label(self) -> &'static str {
        match self {
            EngineSide::First => "first",
            EngineSide::Second => "second",
            EngineSide::Alternate => "alternate",
        }
    }

    fn player_for_game(self, game: usize) -> Player {
        match self {
            EngineSide::First => Player::X,
            EngineSide::Second => Player::O,
            EngineSide::Alternate => Player::for_index(game),
        }
    }
}

#[derive(Debug, Serialize)]
struct DuelSummary {
    games: usize,
    engine_wins: usize,
    draws: usize,
    engine_losses: usize,
    win_rate: f64,
    draw_rate: f64,
    loss_rate: f64,
    average_moves: f64,
    total_moves: usize,
}

struct GameRecord {
    winner: Option<Player>,
    moves: usize,
}

pub fn execute(args: DuelArgs) -> Result<()> {
    if args.games == 0 {
        return Err(anyhow!("--games must be at least 1"));
    }

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => GameConfig::new(args.size, args.win_length, TokenPair::default())?,
    };
    if let Some(depth) = args.depth {
        config.search.depth = depth;
    }
    config.validate()?;

    let seed = args.seed.unwrap_or_else(rand::random::<u64>);
    let mut rng = StdRng::seed_from_u64(seed);

    print_section(&format!("Duel: engine vs {}", args.opponent.label()));
    print_kv("games", &args.games.to_string());
    print_kv(
        "board",
        &format!("{0}x{0}, win {1}", config.size, config.win_length),
    );
    print_kv("depth", &config.search.depth.to_string());
    print_kv("engine side", args.engine_side.label());
    print_kv("seed", &seed.to_string());

    let pb = create_duel_progress(args.games as u64);
    let mut wins = 0usize;
    let mut draws = 0usize;
    let mut losses = 0usize;
    let mut total_moves = 0usize;

    for game in 0..args.games {
        let engine = args.engine_side.player_for_game(game);
        let record = play_game(&config, engine, args.opponent, &mut rng)?;

        total_moves += record.moves;
        match record.winner {
            Some(player) if player == engine => wins += 1,
            Some(_) => losses += 1,
            None => draws += 1,
        }
        pb.set_position((game + 1) as u64);
        pb.set_message(format!("{wins} D:{draws} L:{losses}"));
    }
    pb.finish_with_message(format!("{wins} D:{draws} L:{losses}"));

    let summary = DuelSummary {
        games: args.games,
        engine_wins: wins,
        draws,
        engine_losses: losses,
        win_rate: wins as f64 / args.games as f64,
        draw_rate: draws as f64 / args.games as f64,
        loss_rate: losses as f64 / args.games as f64,
        average_moves: total_moves as f64 / args.games as f64,
        total_moves,
    };

    print_subsection("Results");
    print_kv("engine wins", &summary.engine_wins.to_string());
    print_kv("draws", &summary.draws.to_string());
    print_kv("engine losses", &summary.engine_losses.to_string());
    print_kv("win rate", &format_rate(summary.win_rate));
    print_kv("avg game length", &format!("{:.1}", summary.average_moves));
    print_kv("total moves", &format_number(summary.total_moves));

    if let Some(path) = &args.export {
        let file = File::create(path)
            .map_err(|e| anyhow!("Cannot create export file '{}': {e}", path.display()))?;
        to_writer_pretty(file, &summary)?;
        print_kv("exported", &path.display().to_string());
    }

    Ok(())
}

/// Play one game to its verdict and report who won and in how many moves
fn play_game(
    config: &GameConfig,
    engine: Player,
    opponent: Opponent,
    rng: &mut StdRng,
) -> Result<GameRecord> {
    let mut history = History::new(config.size, config.win_length);

    while history.outcome().is_none() {
        let to_move = history.to_move();
        let coord = if to_move == engine || matches!(opponent, Opponent::Engine) {
            search::choose_move(history.grid(), to_move, config.win_length, &config.search)?
        } else {
            random_move(history.grid(), rng)?
        };
        history.play(coord)?;
    }

    Ok(GameRecord {
        winner: history.winner(),
        moves: history.cursor(),
    })
}

fn random_move(grid: &Grid, rng: &mut StdRng) -> crate::Result<Coord> {
    grid.empty_coords()
        .choose(rng)
        .copied()
        .ok_or(crate::Error::NoLegalMove)
}
