use rand::seq::SliceRandom;
use rand::Rng;

use checkers::game::Game;
use checkers::moves::square_name;
use checkers::piece::Side;

const MAX_PLIES: u32 = 200;

/// Notation for one randomly chosen legal turn for `side`, or None when the
/// side has nothing to play. Captures come first when any exist; a chosen
/// capture is extended greedily into a chain on a scratch board until the
/// moving piece runs out of jumps.
fn random_turn(game: &Game, side: Side, rng: &mut impl Rng) -> Option<String> {
    let king_at = |board: &checkers::board::Board, at: (usize, usize)| {
        board.squares[at.0][at.1]
            .piece()
            .map(|p| p.king)
            .unwrap_or(false)
    };

    let captures: Vec<_> = game.board.forced_captures(side).into_iter().collect();
    if captures.is_empty() {
        let moves = game.board.ordinary_moves(side);
        let mv = moves.choose(rng)?;
        let king = king_at(&game.board, mv.from);
        return Some(format!(
            "{}-{}",
            square_name(mv.from.0, mv.from.1, king),
            square_name(mv.to.0, mv.to.1, king)
        ));
    }

    let mut scratch = game.board.clone();
    let first = *captures.choose(rng)?;
    let mut notation = square_name(first.from.0, first.from.1, king_at(&scratch, first.from));
    let mut at = first.from;
    let mut next = Some(first.to);
    while let Some(to) = next {
        scratch.apply_step(at, to, side);
        at = to;
        // promotion happens on the board, so the notation follows suit
        notation.push(':');
        notation.push_str(&square_name(to.0, to.1, king_at(&scratch, at)));
        next = scratch
            .forced_captures(side)
            .into_iter()
            .filter(|c| c.from == at)
            .collect::<Vec<_>>()
            .choose(rng)
            .map(|c| c.to);
    }
    Some(notation)
}

fn main() {
    let mut rng = rand::thread_rng();
    let mut game = Game::new();
    game.default_placement();

    let mut plies = 0u32;
    let mut side = Side::White;
    while plies < MAX_PLIES {
        let Some(turn) = random_turn(&game, side, &mut rng) else {
            break;
        };
        if let Err(error) = game.play_turn(&turn, side) {
            eprintln!("engine rejected its own turn {turn}: {error}");
            std::process::exit(1);
        }
        plies += 1;
        side = side.opposite();
    }

    eprintln!(
        "selfplay halted after {plies} plies: white [{}] black [{}]",
        game.side_notation(Side::White),
        game.side_notation(Side::Black)
    );
}
