//! Example that generates (or reads) a board and solves it.
//!
//! This example shows how to:
//! - Generate a random solvable board with `BoardGenerator`
//! - Configure a `Solver` with a lower bound
//! - Watch improving solutions through the callback
//! - Replay the returned moves
//!
//! # Usage
//!
//! ```sh
//! cargo run --example solve_puzzle
//! ```
//!
//! Solve a 4x4 board, accepting the first solution found:
//!
//! ```sh
//! cargo run --example solve_puzzle -- --size 4 --first
//! ```
//!
//! Solve a given board (tiles in row-major order, the largest value is the blank):
//!
//! ```sh
//! cargo run --example solve_puzzle -- --tiles "8 6 7 2 5 4 3 9 1"
//! ```
//!
//! Only run the placement heuristic on many boards in parallel:
//!
//! ```sh
//! cargo run --example solve_puzzle -- --size 4 --heuristic-only --count 1000
//! ```
//!
//! Set `RUST_LOG=debug` to see the solver's progress.

use std::process;

use clap::Parser;
use rayon::prelude::*;
use tileslide_core::Board;
use tileslide_generator::{BoardGenerator, BoardSeed};
use tileslide_solver::{LowerBound, SolveOutcome, Solver, SubPuzzle, solve_heuristic};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Board side length for generated boards.
    #[arg(long, value_name = "SIZE", default_value_t = 3)]
    size: usize,

    /// Seed for the board generator (64 hex digits).
    #[arg(long, value_name = "SEED", conflicts_with = "tiles")]
    seed: Option<BoardSeed>,

    /// Board to solve instead of a generated one.
    #[arg(long, value_name = "TILES")]
    tiles: Option<Board>,

    /// Stop at the first solution found.
    #[arg(long, conflicts_with = "max_moves")]
    first: bool,

    /// Stop once a solution with at most this many moves is found.
    #[arg(long, value_name = "MOVES")]
    max_moves: Option<usize>,

    /// Only run the placement heuristic.
    #[arg(long)]
    heuristic_only: bool,

    /// Number of generated boards to solve.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    count: usize,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let solver = build_solver(&args);

    if args.count > 1 {
        run_batch(&args, solver);
        return;
    }

    let board = match (&args.tiles, args.seed) {
        (Some(board), _) => board.clone(),
        (None, seed) => {
            let generator = new_generator(args.size);
            let generated = match seed {
                Some(seed) => generator.generate_with_seed(seed),
                None => generator.generate(),
            };
            println!("Seed:");
            println!("  {}", generated.seed);
            println!();
            generated.board
        }
    };

    println!("Board:");
    print_board(&board);
    println!("  manhattan distance: {}", board.manhattan_distance());
    println!("  misplaced tiles: {}", board.misplaced_count());
    println!();

    let outcome = if args.heuristic_only {
        solve_heuristic(&board, SubPuzzle::Heuristic).unwrap_or_else(|err| {
            eprintln!("{err}");
            process::exit(1);
        })
    } else {
        let (outcome, stats) = solver.solve_with_stats(&board, |moves| {
            println!("Found a solution of {} moves", moves.len());
        });
        println!();
        println!("Stats:");
        println!("  solutions: {}", stats.solutions());
        println!("  expanded: {}", stats.expanded());
        println!("  pushed: {}", stats.pushed());
        println!("  pruned: {}", stats.pruned());
        println!("  duplicates: {}", stats.duplicates());
        println!("  max frontier: {}", stats.max_frontier());
        println!();
        outcome
    };

    match outcome {
        SolveOutcome::Solved(moves) => {
            println!("Solution ({} moves):", moves.len());
            let line = moves.iter().map(ToString::to_string).collect::<Vec<_>>();
            println!("  {}", line.join(" "));

            let mut replay = board;
            if let Err(err) = replay.apply_moves(moves) {
                eprintln!("Replay failed: {err}");
                process::exit(1);
            }
            println!();
            println!("Result:");
            print_board(&replay);
        }
        SolveOutcome::AlreadySolved => println!("Already solved."),
        SolveOutcome::Unsolvable => {
            println!("Unsolvable.");
            process::exit(1);
        }
        SolveOutcome::Stuck => {
            println!("No solution found.");
            process::exit(1);
        }
    }
}

fn build_solver(args: &Args) -> Solver {
    let solver = Solver::new();
    if args.first {
        solver.with_lower_bound(LowerBound::FirstFound)
    } else if let Some(max) = args.max_moves {
        solver.with_lower_bound(LowerBound::AtMost(max))
    } else {
        solver
    }
}

fn new_generator(size: usize) -> BoardGenerator {
    BoardGenerator::new(size).unwrap_or_else(|err| {
        eprintln!("{err}");
        process::exit(2);
    })
}

fn run_batch(args: &Args, solver: Solver) {
    let generator = new_generator(args.size);
    let lengths = (0..args.count)
        .into_par_iter()
        .map(|_| {
            let board = generator.generate().board;
            let outcome = if args.heuristic_only {
                solve_heuristic(&board, SubPuzzle::Heuristic).ok()
            } else {
                Some(solver.solve(&board))
            };
            outcome
                .and_then(SolveOutcome::into_moves)
                .map(|moves| moves.len())
        })
        .collect::<Vec<_>>();

    let solved = lengths.iter().flatten().copied().collect::<Vec<_>>();
    println!("Boards: {}", args.count);
    println!("  solved: {}", solved.len());
    println!("  failed: {}", args.count - solved.len());
    if let (Some(min), Some(max)) = (solved.iter().min(), solved.iter().max()) {
        let total = solved.iter().sum::<usize>();
        println!("  moves: min {min}, max {max}, total {total}");
    }
}

fn print_board(board: &Board) {
    for line in board.to_string().lines() {
        println!("  {line}");
    }
}
