//! The mutable game state: the board array, side to move, incrementally
//! maintained material scores, and ply-from-root counter, plus the
//! mechanical primitives every higher-level operation is built from.

use crate::board::{self, PIECE_SQUARE};
use crate::mov::Move;
use crate::piece::{self, Color};
use crate::square::Square;

#[derive(Clone, Debug)]
pub struct Position {
    pub board: [u8; 256],
    pub black_to_move: bool,
    pub red_material: i32,
    pub black_material: i32,
    pub distance: u32,
}

impl Position {
    /// The standard opening position, red to move.
    pub fn startpos() -> Position {
        let mut pos = Position {
            board: [0; 256],
            black_to_move: false,
            red_material: 0,
            black_material: 0,
            distance: 0,
        };
        for id in 0..256i32 {
            let code = board::BOARD_STARTUP[id as usize];
            if code != 0 {
                pos.add(Square::new(id), code);
            }
        }
        pos
    }

    fn pst_value(code: u8, id: i32) -> i32 {
        let role = piece::role_of(code);
        match piece::color_of(code) {
            Some(Color::Red) => PIECE_SQUARE[role.index()][id as usize] as i32,
            Some(Color::Black) => PIECE_SQUARE[role.index()][board::flip(id) as usize] as i32,
            None => 0,
        }
    }

    /// Places `code` at `id`, updating the board array and the owning
    /// side's material sum. `id` must currently be empty.
    pub fn add(&mut self, id: Square, code: u8) {
        self.board[id.0 as usize] = code;
        let value = Self::pst_value(code, id.id());
        match piece::color_of(code) {
            Some(Color::Red) => self.red_material += value,
            Some(Color::Black) => self.black_material += value,
            None => {}
        }
    }

    /// Removes whatever piece `code` sits at `id`, updating the owning
    /// side's material sum.
    pub fn remove(&mut self, id: Square, code: u8) {
        self.board[id.0 as usize] = 0;
        let value = Self::pst_value(code, id.id());
        match piece::color_of(code) {
            Some(Color::Red) => self.red_material -= value,
            Some(Color::Black) => self.black_material -= value,
            None => {}
        }
    }

    pub fn swap_side(&mut self) {
        self.black_to_move = !self.black_to_move;
    }

    pub fn side(&self) -> Color {
        Color::from_black(self.black_to_move)
    }

    /// Lifts the mover from `mv.src()` to `mv.dst()`, removing any capture
    /// first. Returns the captured piece code, or `0` if the destination
    /// was empty. Pure board bookkeeping: does not touch `distance` or
    /// `black_to_move`.
    pub fn move_piece(&mut self, mv: Move) -> u8 {
        let src = mv.src();
        let dst = mv.dst();
        let captured = self.board[dst.0 as usize];
        if captured != 0 {
            self.remove(dst, captured);
        }
        let mover = self.board[src.0 as usize];
        self.remove(src, mover);
        self.add(dst, mover);
        captured
    }

    /// Reverses a prior `move_piece`. Never fails: the caller is expected
    /// to pass back exactly the `(mv, captured)` pair `move_piece` returned.
    pub fn undo_move_piece(&mut self, mv: Move, captured: u8) {
        let src = mv.src();
        let dst = mv.dst();
        let mover = self.board[dst.0 as usize];
        self.remove(dst, mover);
        self.add(src, mover);
        if captured != 0 {
            self.add(dst, captured);
        }
    }

    pub fn piece_at(&self, id: Square) -> u8 {
        self.board[id.0 as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn startpos_has_thirty_two_occupied_squares() {
        let pos = Position::startpos();
        let occupied = pos.board.iter().filter(|&&c| c != 0).count();
        assert_eq!(occupied, 32);
        assert!(!pos.black_to_move);
    }

    #[test]
    fn move_then_undo_restores_material_exactly() {
        let mut pos = Position::startpos();
        let before_red = pos.red_material;
        let before_black = pos.black_material;

        // advance red's left cannon one step forward.
        let src = Square::new(board::RANK_BOTTOM * 16 + board::FILE_LEFT + 1);
        let dst = Square::new(src.id() - 16);
        let mv = Move::new(src, dst);

        let captured = pos.move_piece(mv);
        assert_eq!(captured, 0);
        pos.undo_move_piece(mv, captured);

        assert_eq!(pos.red_material, before_red);
        assert_eq!(pos.black_material, before_black);
        assert_eq!(pos.piece_at(src), piece::make_piece(Color::Red, piece::Role::Cannon));
    }

    #[test]
    fn capture_removes_defender_material_and_undo_restores_it() {
        let mut pos = Position::startpos();
        // place a black piece directly in front of a red pawn to capture.
        let pawn_src = Square::new((board::RANK_BOTTOM - 3) * 16 + board::FILE_LEFT);
        let target = Square::new(pawn_src.id() - 16);
        let victim = piece::make_piece(Color::Black, piece::Role::Pawn);
        pos.add(target, victim);
        let before_black = pos.black_material;

        let mv = Move::new(pawn_src, target);
        let captured = pos.move_piece(mv);
        assert_eq!(captured, victim);
        assert!(pos.black_material < before_black);

        pos.undo_move_piece(mv, captured);
        assert_eq!(pos.black_material, before_black);
        assert_eq!(pos.piece_at(target), victim);
    }
}
