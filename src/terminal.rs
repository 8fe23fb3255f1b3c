//! Terminal `InputSource`/`ViewSink`: reads whitespace-separated coordinate
//! pairs from stdin and renders the board to stdout.

use std::fmt;
use std::io::{self, Write};

use core::board::{FILE_LEFT, RANK_TOP};
use core::mov::Move;
use core::piece::{self, Color};
use core::position::Position;
use core::square::Square;
use engine::driver::{InputSource, ViewSink};

#[derive(Debug)]
pub enum CoordError {
    WrongWordCount(usize),
    BadSquare(String),
}

impl fmt::Display for CoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordError::WrongWordCount(n) => {
                write!(f, "expected two coordinates separated by whitespace, got {n}")
            }
            CoordError::BadSquare(s) => write!(f, "not a valid square: \"{s}\""),
        }
    }
}

/// Parses a coordinate like `"c3"` into a `Square`, inverse of `Square`'s
/// own `Display` impl.
pub fn parse_square(text: &str) -> Result<Square, CoordError> {
    let mut chars = text.chars();
    let file_char = chars.next().ok_or_else(|| CoordError::BadSquare(text.to_string()))?;
    let rank_text: String = chars.collect();
    let rank: i32 = rank_text
        .parse()
        .map_err(|_| CoordError::BadSquare(text.to_string()))?;
    if !file_char.is_ascii_alphabetic() {
        return Err(CoordError::BadSquare(text.to_string()));
    }
    let file = FILE_LEFT + (file_char.to_ascii_lowercase() as i32 - 'a' as i32);
    let square = Square::from_rank_file(RANK_TOP + rank, file);
    if !square.is_on_board() {
        return Err(CoordError::BadSquare(text.to_string()));
    }
    Ok(square)
}

/// Parses a line like `"c3 e3"` into a source/destination pair.
pub fn parse_move_line(line: &str) -> Result<(Square, Square), CoordError> {
    let words: Vec<&str> = line.split_whitespace().collect();
    if words.len() != 2 {
        return Err(CoordError::WrongWordCount(words.len()));
    }
    Ok((parse_square(words[0])?, parse_square(words[1])?))
}

pub struct TerminalInput;

impl InputSource for TerminalInput {
    fn next_move(&mut self) -> (Square, Square) {
        loop {
            print!("move> ");
            let _ = io::stdout().flush();
            let mut line = String::new();
            if io::stdin().read_line(&mut line).is_err() {
                continue;
            }
            match parse_move_line(&line) {
                Ok(pair) => return pair,
                Err(err) => log::warn!("{err}"),
            }
        }
    }
}

/// Mirrors the game's position purely for rendering: the driver owns the
/// authoritative `Position` and only ever hands this view `(src, dst,
/// captured)` triples, so the view replays each one onto its own copy with
/// the same `move_piece` bookkeeping `Position` itself uses.
pub struct TerminalView {
    pos: Position,
}

impl TerminalView {
    pub fn new() -> Self {
        TerminalView { pos: Position::startpos() }
    }
}

impl Default for TerminalView {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewSink for TerminalView {
    fn piece_moved(&mut self, src: Square, dst: Square, captured: u8) {
        if captured == 0 {
            println!("{src} -> {dst}");
        } else {
            let role = piece::role_of(captured);
            println!("{src} -> {dst} (captures {role})");
        }
        self.pos.move_piece(Move::new(src, dst));
        render_board(&self.pos);
    }

    fn check_warning(&mut self) {
        println!("that move leaves your king in check");
    }

    fn game_over(&mut self, winner: Color) {
        println!("checkmate: {winner:?} wins");
    }
}

fn render_board(pos: &Position) {
    for rank in core::board::RANK_TOP..=core::board::RANK_BOTTOM {
        print!("{:>2} ", rank - RANK_TOP);
        for file in core::board::FILE_LEFT..=core::board::FILE_RIGHT {
            let square = Square::from_rank_file(rank, file);
            let code = pos.piece_at(square);
            if code == 0 {
                print!(" . ");
            } else {
                print!(" {} ", piece::role_of(code));
            }
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_coordinate_pair_roundtripping_through_display() {
        let src = Square::from_rank_file(RANK_TOP + 3, FILE_LEFT + 4);
        let dst = Square::from_rank_file(RANK_TOP + 5, FILE_LEFT + 4);
        let line = format!("{src} {dst}");
        let (parsed_src, parsed_dst) = parse_move_line(&line).unwrap();
        assert_eq!(parsed_src, src);
        assert_eq!(parsed_dst, dst);
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(parse_move_line("c3").is_err());
        assert!(parse_move_line("c3 e3 g3").is_err());
        assert!(parse_move_line("z9 e3").is_err());
    }
}
