use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::{Parser, Subcommand};
use gameboard::{
    cli::{parse_coord, print_board},
    init_logging, AttackResult, Board, BOARD_SIZE,
};
use log::info;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde_json::json;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Attack a randomly placed fleet with coordinates read from stdin.
    Play {
        #[arg(long, help = "Fix RNG seed for a reproducible fleet (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Show ship positions while playing")]
        reveal: bool,
    },
    /// Fire at every cell in random order until the fleet is sunk and print a JSON summary.
    Simulate {
        #[arg(long, help = "Fix RNG seed for a reproducible run (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

fn play(seed: Option<u64>, reveal: bool) -> anyhow::Result<()> {
    let mut rng = make_rng(seed);
    let mut board = Board::new();
    board.place_fleet(&mut rng).map_err(|e| anyhow::anyhow!(e))?;
    info!("fleet of {} ships placed", board.ships().len());

    println!("Enter attacks as `x y` (0-{}), or `quit`.", BOARD_SIZE - 1);
    print_board(&board, reveal);

    let stdin = io::stdin();
    let mut shots = 0usize;
    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line).context("reading stdin")? == 0 {
            break;
        }
        let input = line.trim();
        if input.eq_ignore_ascii_case("quit") {
            break;
        }
        let Some((x, y)) = parse_coord(input) else {
            println!("Could not read `{}` as a coordinate.", input);
            continue;
        };
        let result = board.receive_attack(x, y);
        if result != AttackResult::Invalid {
            shots += 1;
        }
        println!("{}", result);
        print_board(&board, reveal);
        if board.all_sunk() {
            println!("All ships sunk after {} shots.", shots);
            break;
        }
        println!("{} ships afloat.", board.ships_afloat());
    }
    Ok(())
}

fn simulate(seed: Option<u64>) -> anyhow::Result<()> {
    let seed = seed.unwrap_or_else(rand::random);
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::new();
    board.place_fleet(&mut rng).map_err(|e| anyhow::anyhow!(e))?;

    let mut targets: Vec<(i32, i32)> = (0..BOARD_SIZE as i32)
        .flat_map(|y| (0..BOARD_SIZE as i32).map(move |x| (x, y)))
        .collect();
    targets.shuffle(&mut rng);

    let mut shots = 0usize;
    let mut hits = 0usize;
    for (x, y) in targets {
        shots += 1;
        if board.receive_attack(x, y) == AttackResult::Hit {
            hits += 1;
        }
        if board.all_sunk() {
            break;
        }
    }
    info!("simulation with seed {} finished after {} shots", seed, shots);

    let result = json!({
        "seed": seed,
        "shots": shots,
        "hits": hits,
        "misses": board.missed_hits(),
        "sunk": board.all_sunk(),
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.command {
        Commands::Play { seed, reveal } => play(seed, reveal),
        Commands::Simulate { seed } => simulate(seed),
    }
}
