use crate::error::MoveError;

/// A from/to coordinate pair on the board. Capture discovery collects
/// these into a set (only membership is ever queried); the quiet-move
/// enumerator returns them as a list.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Move {
    pub from: (usize, usize),
    pub to: (usize, usize),
}

/// One square token from notation: zero-based coordinates plus the king
/// flag implied by the letter case ("b4" is a man, "B4" a king).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SquareToken {
    pub x: usize,
    pub y: usize,
    pub king: bool,
}

/// Parse a single square token, e.g. "e3" or "E3".
pub fn parse_square(token: &str) -> Result<SquareToken, MoveError> {
    let bytes = token.as_bytes();
    if bytes.len() != 2 {
        return Err(MoveError::MalformedInput);
    }
    let (x, king) = match bytes[0] {
        b'a'..=b'h' => ((bytes[0] - b'a') as usize, false),
        b'A'..=b'H' => ((bytes[0] - b'A') as usize, true),
        _ => return Err(MoveError::MalformedInput),
    };
    let y = match bytes[1] {
        b'1'..=b'8' => (bytes[1] - b'1') as usize,
        _ => return Err(MoveError::MalformedInput),
    };
    Ok(SquareToken { x, y, king })
}

/// Parse one turn: a single step "a3-b4" (exactly two squares) or a
/// capture chain "a3:c5:e3" (two or more squares). Returns the squares
/// visited, in order. Everything else is malformed, including mixed
/// separators.
pub fn parse_turn(line: &str) -> Result<Vec<SquareToken>, MoveError> {
    if let Some((from, to)) = line.split_once('-') {
        if from.contains(':') || to.contains('-') || to.contains(':') {
            return Err(MoveError::MalformedInput);
        }
        return Ok(vec![parse_square(from)?, parse_square(to)?]);
    }
    let squares: Vec<SquareToken> = line.split(':').map(parse_square).collect::<Result<_, _>>()?;
    if squares.len() < 2 {
        return Err(MoveError::MalformedInput);
    }
    Ok(squares)
}

/// Parse a placement list: one or more whitespace-separated square tokens,
/// e.g. "a1 c3 H8".
pub fn parse_placement(line: &str) -> Result<Vec<SquareToken>, MoveError> {
    let squares: Vec<SquareToken> = line
        .split_whitespace()
        .map(parse_square)
        .collect::<Result<_, _>>()?;
    if squares.is_empty() {
        return Err(MoveError::MalformedInput);
    }
    Ok(squares)
}

/// Render a square back to notation; kings get an uppercase file letter.
pub fn square_name(x: usize, y: usize, king: bool) -> String {
    let file = (b'a' + x as u8) as char;
    let file = if king { file.to_ascii_uppercase() } else { file };
    format!("{file}{}", y + 1)
}
