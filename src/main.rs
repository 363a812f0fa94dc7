use std::env;
use std::time::Instant;

use cinder::board::Board;
use cinder::movegen;
use cinder::uci;
use tracing_subscriber::EnvFilter;

fn main() {
    // diagnostics go to stderr; stdout belongs to the protocol
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    movegen::init();

    let args: Vec<String> = env::args().collect();
    match args.get(1).map(String::as_str) {
        None | Some("uci") => uci::main_loop(),
        Some("perft") => {
            if args.len() > 2 {
                let depth = args[2].parse::<u32>().unwrap_or(1);
                let board = match args.get(3) {
                    Some(fen) => Board::from_fen(fen),
                    None => Ok(Board::start_position()),
                };
                match board {
                    Ok(mut board) => run_perft(&mut board, depth),
                    Err(err) => eprintln!("Error: {}", err),
                }
            } else {
                eprintln!("Usage: cinder perft <depth> [fen]");
            }
        }
        Some("--fen") => match args.get(2) {
            Some(fen) => match Board::from_fen(fen) {
                Ok(board) => println!("{}", board),
                Err(err) => eprintln!("Error: {}", err),
            },
            None => eprintln!("Error: --fen requires a FEN string"),
        },
        _ => print_help(),
    }
}

fn run_perft(board: &mut Board, depth: u32) {
    println!("Running perft depth {}...", depth);
    println!("{}", board);

    let start = Instant::now();
    let nodes = movegen::perft(board, depth);
    let duration = start.elapsed();

    let seconds = duration.as_secs_f64();
    let nps = if seconds > 0.0 { (nodes as f64 / seconds) as u64 } else { 0 };

    println!("-----------------------------");
    println!("Nodes: {}", nodes);
    println!("Time:  {:.3} s", seconds);
    println!("NPS:   {}", nps);
    println!("-----------------------------");
}

fn print_help() {
    println!("cinder v{}", env!("CARGO_PKG_VERSION"));
    println!("Commands:");
    println!("  (no args) | uci      : run the UCI loop on stdin/stdout");
    println!("  perft <depth> [fen]  : count leaf nodes of the legal move tree");
    println!("  --fen \"<FEN>\"        : print the board for a FEN");
}
