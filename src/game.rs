// =============================================================================
// Turn controller
//
// A Game owns the board and drives whole turns through it: parse the
// notation, then for every leg recompute the capture set, validate, apply.
// State that only lives for one turn (the square the piece currently
// stands on, the king flag its notation declared, whether it promoted on an
// earlier leg) is threaded through the loop rather than stored on the
// game, so a failed turn leaves nothing stale behind.
//
// Coordinate system: x is the file (a = 0), y is the rank (1 = 0).
// =============================================================================

use crate::board::Board;
use crate::error::MoveError;
use crate::moves::{parse_placement, parse_turn};
use crate::piece::{Cell, Piece, Side};

/// One game session: a board plus the controller that runs complete turns
/// against it.
pub struct Game {
    pub board: Board,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// A session over an empty board; load placements or call
    /// `default_placement` before playing.
    pub fn new() -> Game {
        Game {
            board: Board::empty(),
        }
    }

    /// Reset to the standard starting layout.
    pub fn default_placement(&mut self) {
        self.board = Board::new();
    }

    /// Write a placement list ("a1 c3 E5") onto the board for `side`.
    /// Tokens are decoded and placed as-is; placements are not checked
    /// against the movement rules.
    pub fn load_placement(&mut self, line: &str, side: Side) -> Result<(), MoveError> {
        for token in parse_placement(line)? {
            self.board.squares[token.x][token.y] = Cell::Occupied(Piece::new(side, token.king));
        }
        Ok(())
    }

    /// Play one complete turn for `side`: a single step ("a3-b4") or a
    /// capture chain ("a3:c5:e3"). Each leg is validated against the live
    /// board, so pieces moved or jumped earlier in the chain are visible to
    /// later legs. On success the jumped pieces are removed and the turn is
    /// committed.
    ///
    /// There is no rollback: when a leg fails, the legs already applied
    /// stay on the board, including their `Captured` markers. Callers that
    /// need whole-turn atomicity should clone the board first.
    pub fn play_turn(&mut self, line: &str, side: Side) -> Result<(), MoveError> {
        let squares = parse_turn(line)?;

        let mut from = squares[0];
        let mut promoted_this_turn = false;
        for &to in &squares[1..] {
            // a man that reached the far rank on an earlier leg carries on
            // as a king, and its notation may switch to uppercase before
            // the promotion is visible on the board
            promoted_this_turn = promoted_this_turn || from.y == side.promotion_row();
            let forced = self.board.forced_captures(side);
            self.board.validate_step(
                (from.x as i32, from.y as i32),
                (to.x as i32, to.y as i32),
                side,
                from.king,
                promoted_this_turn,
                &forced,
            )?;
            self.board.apply_step((from.x, from.y), (to.x, to.y), side);
            from = to;
        }
        self.board.clear_captured();
        Ok(())
    }

    /// All squares occupied by `side`, kings first, for presentation and
    /// testing.
    pub fn pieces(&self, side: Side) -> Vec<((usize, usize), bool)> {
        self.board.pieces(side)
    }

    /// The side's position as a notation string ("B2 a1 c3").
    pub fn side_notation(&self, side: Side) -> String {
        self.board.side_notation(side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_step_moves_the_man() {
        let mut game = Game::new();
        game.default_placement();
        game.play_turn("a3-b4", Side::White).unwrap();
        assert!(game.board.squares[1][3].is_side(Side::White));
        assert!(game.board.squares[0][2].is_empty());
    }

    #[test]
    fn ordinary_moves_are_free_when_no_capture_exists_anywhere() {
        let mut game = Game::new();
        game.default_placement();
        assert!(game.board.forced_captures(Side::White).is_empty());
        game.play_turn("c3-d4", Side::White).unwrap();
    }

    #[test]
    fn a_capture_commits_and_removes_the_jumped_man() {
        let mut game = Game::new();
        game.load_placement("a3", Side::White).unwrap();
        game.load_placement("b4", Side::Black).unwrap();
        game.play_turn("a3:c5", Side::White).unwrap();
        assert!(
            game.board.squares[1][3].is_empty(),
            "the jumped man is gone once the turn commits"
        );
        assert!(game.board.squares[2][4].is_side(Side::White));
    }

    #[test]
    fn ignoring_an_available_capture_is_invalid() {
        let mut game = Game::new();
        game.load_placement("a3", Side::White).unwrap();
        game.load_placement("b4", Side::Black).unwrap();
        assert_eq!(
            game.play_turn("a3-b2", Side::White),
            Err(MoveError::InvalidMove)
        );
        // stepping straight onto the opponent is a different failure
        assert_eq!(
            game.play_turn("a3-b4", Side::White),
            Err(MoveError::DestinationBusy)
        );
    }

    #[test]
    fn a_chain_of_single_steps_passes_when_nothing_can_be_captured() {
        let mut game = Game::new();
        game.default_placement();
        // the ':' separator constrains arity, not the shape of each leg
        game.play_turn("a3:b4:c5:d4", Side::White).unwrap();
        assert!(game.board.squares[3][3].is_side(Side::White));
    }

    #[test]
    fn played_turns_match_a_directly_loaded_position() {
        let mut game = Game::new();
        game.default_placement();
        game.play_turn("a3:b4", Side::White).unwrap();
        game.play_turn("b6:a5", Side::Black).unwrap();
        game.play_turn("g3:h4", Side::White).unwrap();
        game.play_turn("h6:g5", Side::Black).unwrap();

        let mut loaded = Game::new();
        loaded
            .load_placement("a1 b2 b4 c1 c3 d2 e1 e3 f2 g1 h2 h4", Side::White)
            .unwrap();
        loaded
            .load_placement("a5 a7 b8 c7 d6 d8 e7 f6 f8 g5 g7 h8", Side::Black)
            .unwrap();

        assert_eq!(
            game.side_notation(Side::White),
            loaded.side_notation(Side::White)
        );
        assert_eq!(
            game.side_notation(Side::Black),
            loaded.side_notation(Side::Black)
        );
    }

    #[test]
    fn a_lone_king_hunts_down_both_men() {
        let mut game = Game::new();
        game.load_placement("H8", Side::White).unwrap();
        game.load_placement("c3 e5", Side::Black).unwrap();
        game.play_turn("H8-D4", Side::White).unwrap(); // jumps e5
        game.play_turn("D4-B2", Side::White).unwrap(); // jumps c3
        game.play_turn("B2:A1", Side::White).unwrap(); // plain slide, nothing left to take
        assert_eq!(game.side_notation(Side::White), "A1");
        assert_eq!(game.side_notation(Side::Black), "");
    }

    #[test]
    fn one_turn_may_chain_both_captures() {
        let mut game = Game::new();
        game.load_placement("H8", Side::White).unwrap();
        game.load_placement("c3 e5", Side::Black).unwrap();
        game.play_turn("H8:D4:B2", Side::White).unwrap();
        assert_eq!(game.side_notation(Side::White), "B2");
        assert_eq!(game.side_notation(Side::Black), "");
    }

    #[test]
    fn a_captured_man_cannot_be_jumped_twice_in_one_turn() {
        let mut game = Game::new();
        game.load_placement("c3", Side::White).unwrap();
        game.load_placement("b4", Side::Black).unwrap();
        let result = game.play_turn("c3:a5:c3", Side::White);
        assert_eq!(result, Err(MoveError::OutOfRange));
        // no rollback: the first leg stays applied and cleanup never ran
        assert_eq!(game.board.squares[1][3], Cell::Captured);
        assert!(game.board.squares[0][4].is_side(Side::White));
    }

    #[test]
    fn a_man_promoting_mid_chain_continues_as_a_king() {
        let mut game = Game::new();
        game.load_placement("b6", Side::White).unwrap();
        game.load_placement("c7 e7", Side::Black).unwrap();
        game.play_turn("b6:d8:f6", Side::White).unwrap();
        assert_eq!(game.side_notation(Side::White), "F6");
        assert_eq!(game.side_notation(Side::Black), "");
    }

    #[test]
    fn placement_round_trips_through_the_query_surface() {
        let mut game = Game::new();
        game.load_placement("h2 a1 C3 f4", Side::White).unwrap();
        assert_eq!(game.side_notation(Side::White), "C3 a1 f4 h2");
        assert_eq!(game.pieces(Side::White).len(), 4);
        // declaration order does not matter
        let mut other = Game::new();
        other.load_placement("f4 C3 a1 h2", Side::White).unwrap();
        assert_eq!(
            other.side_notation(Side::White),
            game.side_notation(Side::White)
        );
    }

    #[test]
    fn malformed_turns_leave_the_board_untouched() {
        let mut game = Game::new();
        game.default_placement();
        let before = game.side_notation(Side::White);
        for bad in ["a1-w1", "a1-b2-a3", "A1:W1", "a1:b2:c3-d4"] {
            assert_eq!(
                game.play_turn(bad, Side::White),
                Err(MoveError::MalformedInput),
                "{bad:?}"
            );
        }
        assert_eq!(game.side_notation(Side::White), before);
    }
}
