use std::io::{self, BufRead};

use crate::board::Board;
use crate::movegen;
use crate::search::Searcher;
use crate::types::Color;
use crate::zobrist::{self, ZHash};

const ENGINE_NAME: &str = "Cinder";
const DEFAULT_HASH_MB: usize = 64;
const DEFAULT_DEPTH: u32 = 64;

/// Millisecond safety margin held back from every clock budget so the
/// engine never flags on protocol overhead.
const SAFETY_MARGIN_MS: u64 = 50;

pub fn main_loop() {
    let stdin = io::stdin();
    let mut board = Board::start_position();
    let mut game_history: Vec<ZHash> = vec![zobrist::position_key(&board)];
    let mut searcher = Searcher::new(DEFAULT_HASH_MB);

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };
        let cmd = line.trim();
        if cmd.is_empty() {
            continue;
        }
        tracing::debug!(cmd, "uci command");

        if cmd == "uci" {
            println!("id name {}", ENGINE_NAME);
            println!("id author the {} developers", ENGINE_NAME);
            println!(
                "option name Hash type spin default {} min 1 max 4096",
                DEFAULT_HASH_MB
            );
            println!("uciok");
        } else if cmd == "isready" {
            println!("readyok");
        } else if cmd.starts_with("setoption") {
            parse_setoption(cmd, &mut searcher);
        } else if cmd == "ucinewgame" {
            searcher.tt.clear();
            board = Board::start_position();
            game_history = vec![zobrist::position_key(&board)];
        } else if cmd.starts_with("position") {
            parse_position(cmd, &mut board, &mut game_history);
        } else if cmd.starts_with("go") {
            parse_go(cmd, &mut searcher, &mut board, &game_history);
        } else if cmd == "stop" {
            // search runs to completion on this thread; nothing in flight
        } else if cmd == "quit" {
            break;
        } else {
            tracing::warn!(cmd, "unknown uci command");
        }
    }
}

fn parse_setoption(cmd: &str, searcher: &mut Searcher) {
    let parts: Vec<&str> = cmd.split_whitespace().collect();
    if parts.len() >= 5 && parts[1] == "name" && parts[3] == "value" {
        if parts[2].eq_ignore_ascii_case("hash") {
            if let Ok(mb) = parts[4].parse::<usize>() {
                let mb = mb.clamp(1, 4096);
                *searcher = Searcher::new(mb);
                println!("info string Hash set to {} MB", mb);
            }
        }
    }
}

fn parse_position(cmd: &str, board: &mut Board, game_history: &mut Vec<ZHash>) {
    let parts: Vec<&str> = cmd.split_whitespace().collect();
    let mut moves_idx = parts.len();

    if parts.len() > 1 {
        if parts[1] == "startpos" {
            *board = Board::start_position();
            moves_idx = 2;
        } else if parts[1] == "fen" {
            let mut fen = String::new();
            let mut i = 2;
            while i < parts.len() && parts[i] != "moves" {
                fen.push_str(parts[i]);
                fen.push(' ');
                i += 1;
            }
            match Board::from_fen(fen.trim()) {
                Ok(parsed) => *board = parsed,
                Err(err) => {
                    tracing::warn!(%err, fen = fen.trim(), "rejected position");
                    return;
                }
            }
            moves_idx = i;
        }
    }

    game_history.clear();
    game_history.push(zobrist::position_key(board));

    if moves_idx < parts.len() && parts[moves_idx] == "moves" {
        for &token in &parts[moves_idx + 1..] {
            match resolve_move(board, token) {
                Some(mut m) => {
                    board.make_move(&mut m);
                    game_history.push(zobrist::position_key(board));
                }
                None => {
                    tracing::warn!(token, "unplayable move token, ignoring rest of line");
                    break;
                }
            }
        }
    }
}

/// Resolves a long-algebraic token against the legal move list, so only
/// legal moves ever reach the board.
fn resolve_move(board: &mut Board, token: &str) -> Option<crate::moves::Move> {
    movegen::get_all_moves(board).into_iter().find(|m| m.uci() == token)
}

fn parse_go(cmd: &str, searcher: &mut Searcher, board: &mut Board, game_history: &[ZHash]) {
    let parts: Vec<&str> = cmd.split_whitespace().collect();
    let mut depth: u32 = DEFAULT_DEPTH;
    let mut movetime: u64 = 0;
    let mut wtime: u64 = 0;
    let mut btime: u64 = 0;
    let mut winc: u64 = 0;
    let mut binc: u64 = 0;

    let mut i = 1;
    while i < parts.len() {
        let value = parts.get(i + 1).and_then(|v| v.parse::<u64>().ok());
        match parts[i] {
            "depth" => {
                if let Some(v) = value {
                    depth = (v as u32).clamp(1, DEFAULT_DEPTH);
                    i += 1;
                }
            }
            "movetime" => {
                if let Some(v) = value {
                    movetime = v;
                    i += 1;
                }
            }
            "wtime" => {
                if let Some(v) = value {
                    wtime = v;
                    i += 1;
                }
            }
            "btime" => {
                if let Some(v) = value {
                    btime = v;
                    i += 1;
                }
            }
            "winc" => {
                if let Some(v) = value {
                    winc = v;
                    i += 1;
                }
            }
            "binc" => {
                if let Some(v) = value {
                    binc = v;
                    i += 1;
                }
            }
            "infinite" => depth = DEFAULT_DEPTH,
            _ => {}
        }
        i += 1;
    }

    let budget_ms = if movetime > 0 {
        movetime.saturating_sub(SAFETY_MARGIN_MS).max(10)
    } else if wtime > 0 || btime > 0 {
        let (time_left, inc) = if board.side_to_move == Color::White {
            (wtime, winc)
        } else {
            (btime, binc)
        };
        let usable = time_left.saturating_sub(SAFETY_MARGIN_MS);
        (usable / 30 + inc / 2).clamp(10, usable.max(10))
    } else {
        0
    };

    tracing::debug!(depth, budget_ms, "starting search");
    match searcher.get_best_move(board, depth, game_history, budget_ms) {
        Some(m) => println!("bestmove {}", m.uci()),
        None => println!("bestmove 0000"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_position_startpos_with_moves() {
        movegen::init();
        let mut board = Board::start_position();
        let mut history = Vec::new();
        parse_position("position startpos moves e2e4 e7e5 g1f3", &mut board, &mut history);
        assert_eq!(board.side_to_move, Color::Black);
        assert_eq!(history.len(), 4); // base position plus three moves
        assert_eq!(
            board.to_fen(),
            "rnbqkbnr/pppp1ppp/8/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 0 1"
        );
    }

    #[test]
    fn test_parse_position_fen() {
        movegen::init();
        let mut board = Board::start_position();
        let mut history = Vec::new();
        let fen = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";
        parse_position(&format!("position fen {}", fen), &mut board, &mut history);
        assert_eq!(board.to_fen(), fen);
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_bad_move_token_stops_replay() {
        movegen::init();
        let mut board = Board::start_position();
        let mut history = Vec::new();
        parse_position("position startpos moves e2e4 e2e4 e7e5", &mut board, &mut history);
        // the second e2e4 is illegal; replay stops there
        assert_eq!(history.len(), 2);
        assert_eq!(board.side_to_move, Color::Black);
    }

    #[test]
    fn test_uci_round_trip_for_all_legal_moves() {
        movegen::init();
        let mut board = Board::from_fen(
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        )
        .unwrap();
        for m in movegen::get_all_moves(&mut board) {
            let resolved = resolve_move(&mut board, &m.uci()).expect("token resolves");
            assert!(resolved.same_action(&m), "round trip failed for {}", m.uci());
        }
    }

    #[test]
    fn test_resolve_move_castling_and_promotion() {
        movegen::init();
        let mut board =
            Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        assert!(resolve_move(&mut board, "e1g1").is_some());
        assert!(resolve_move(&mut board, "e1c1").is_some());
        assert!(resolve_move(&mut board, "e1e3").is_none()); // kings do not jump

        let mut board = Board::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let promo = resolve_move(&mut board, "a7a8n").expect("underpromotion resolves");
        assert_eq!(promo.promotion, Some(crate::types::PieceType::Knight));
    }
}
