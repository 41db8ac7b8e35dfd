use std::io::{self, BufRead};

use serde::Serialize;

use checkers::error::MoveError;
use checkers::game::Game;
use checkers::piece::Side;

/// Final position report for --json mode.
#[derive(Serialize)]
struct FinalState {
    white: String,
    black: String,
}

/// Run one session over line-oriented input: the first two lines are the
/// white and black placements, every following line is one full move pair
/// "<whiteTurn> <blackTurn>". Stops at the first error.
fn run(game: &mut Game, input: impl BufRead) -> Result<(), MoveError> {
    let mut lines = input.lines().map_while(Result::ok);
    let white_placement = lines.next().ok_or(MoveError::MalformedInput)?;
    let black_placement = lines.next().ok_or(MoveError::MalformedInput)?;
    game.load_placement(&white_placement, Side::White)?;
    game.load_placement(&black_placement, Side::Black)?;

    for line in lines {
        let mut turns = line.split_whitespace();
        let (Some(white_turn), Some(black_turn)) = (turns.next(), turns.next()) else {
            return Err(MoveError::MalformedInput);
        };
        if turns.next().is_some() {
            return Err(MoveError::MalformedInput);
        }
        game.play_turn(white_turn, Side::White)?;
        game.play_turn(black_turn, Side::Black)?;
    }
    Ok(())
}

fn main() {
    let json = std::env::args().any(|arg| arg == "--json");
    let mut game = Game::new();
    let stdin = io::stdin();

    match run(&mut game, stdin.lock()) {
        Ok(()) => {
            if json {
                let state = FinalState {
                    white: game.side_notation(Side::White),
                    black: game.side_notation(Side::Black),
                };
                let out = serde_json::to_string(&state).expect("serialize final state");
                println!("{out}");
            } else {
                println!("{}", game.side_notation(Side::White));
                println!("{}", game.side_notation(Side::Black));
            }
        }
        Err(error) => println!("{error}"),
    }
}
