use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::board::BOARD_SIZE;
use crate::game::Game;
use crate::moves::square_name;
use crate::piece::{Cell, Side};

#[derive(Serialize)]
struct SquarePiece {
    side: String,
    king: bool,
}

#[derive(Serialize)]
struct BoardState {
    squares: Vec<Vec<Option<SquarePiece>>>,
    white: Vec<String>,
    black: Vec<String>,
}

#[derive(Serialize)]
struct TurnResult {
    #[serde(flatten)]
    board_state: Option<BoardState>,
    error: Option<String>,
}

fn side_to_string(side: Side) -> String {
    match side {
        Side::White => "White".to_string(),
        Side::Black => "Black".to_string(),
    }
}

fn side_pieces(game: &Game, side: Side) -> Vec<String> {
    game.pieces(side)
        .iter()
        .map(|&((x, y), king)| square_name(x, y, king))
        .collect()
}

fn build_board_state(game: &Game) -> BoardState {
    let squares: Vec<Vec<Option<SquarePiece>>> = (0..BOARD_SIZE)
        .map(|x| {
            (0..BOARD_SIZE)
                .map(|y| match game.board.squares[x][y] {
                    Cell::Occupied(piece) => Some(SquarePiece {
                        side: side_to_string(piece.side),
                        king: piece.king,
                    }),
                    _ => None,
                })
                .collect()
        })
        .collect();

    BoardState {
        squares,
        white: side_pieces(game, Side::White),
        black: side_pieces(game, Side::Black),
    }
}

#[wasm_bindgen]
pub struct CheckersGame {
    game: Game,
}

#[wasm_bindgen]
impl CheckersGame {
    #[wasm_bindgen(constructor)]
    pub fn new() -> CheckersGame {
        CheckersGame { game: Game::new() }
    }

    pub fn default_placement(&mut self) {
        self.game.default_placement();
    }

    pub fn load_placement(&mut self, line: &str, white: bool) -> JsValue {
        let side = if white { Side::White } else { Side::Black };
        let result = match self.game.load_placement(line, side) {
            Ok(()) => TurnResult {
                board_state: Some(build_board_state(&self.game)),
                error: None,
            },
            Err(error) => TurnResult {
                board_state: None,
                error: Some(error.to_string()),
            },
        };
        serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
    }

    pub fn play_turn(&mut self, line: &str, white: bool) -> JsValue {
        let side = if white { Side::White } else { Side::Black };
        let result = match self.game.play_turn(line, side) {
            Ok(()) => TurnResult {
                board_state: Some(build_board_state(&self.game)),
                error: None,
            },
            Err(error) => TurnResult {
                board_state: None,
                error: Some(error.to_string()),
            },
        };
        serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
    }

    pub fn get_board_state(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&build_board_state(&self.game)).unwrap_or(JsValue::NULL)
    }
}
