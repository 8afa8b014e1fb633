//! Demo binary: plays random pseudo-legal moves from the standard setup and
//! renders each position to the terminal.
//!
//! Usage: `random_playout [plies]` (default 40).

use chess_referee::board::board_snapshot::BoardSnapshot;
use chess_referee::board::piece_team::Team;
use chess_referee::game::apply_move::apply_move;
use chess_referee::utils::random_mover::choose_random_move;
use chess_referee::utils::render_board::render_board;

fn main() {
    let plies: usize = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(40);

    let mut board = BoardSnapshot::standard_setup();
    let mut turn = Team::Ours;

    println!("{}", render_board(&board));

    for ply in 1..=plies {
        let Some(picked) = choose_random_move(&board, turn) else {
            println!("no moves available for {:?} at ply {}", turn, ply);
            break;
        };

        match apply_move(&board, &picked) {
            Ok(next) => board = next,
            Err(error) => {
                eprintln!("failed to apply {:?}: {:?}", picked, error);
                break;
            }
        }

        match picked.to_long_algebraic() {
            Ok(notation) => println!("\nply {}: {:?} plays {}", ply, turn, notation),
            Err(_) => println!("\nply {}: {:?} plays {:?}", ply, turn, picked),
        }
        println!("{}", render_board(&board));

        turn = turn.opposite();
    }
}
