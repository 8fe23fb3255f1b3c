//! Static evaluation: material plus a small right-to-move bonus.

use core::position::Position;

/// Bonus awarded to the side to move, a crude stand-in for tempo.
pub const ADVANCED_VALUE: i32 = 3;

/// Evaluates `pos` from the perspective of the side to move, using the
/// material sums `Position` already keeps up to date.
pub fn evaluate(pos: &Position) -> i32 {
    let (own, opp) = if pos.black_to_move {
        (pos.black_material, pos.red_material)
    } else {
        (pos.red_material, pos.black_material)
    };
    (own - opp) + ADVANCED_VALUE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn startpos_is_balanced_up_to_the_tempo_bonus() {
        let pos = Position::startpos();
        assert_eq!(evaluate(&pos), ADVANCED_VALUE);
    }

    #[test]
    fn material_edge_flips_sign_with_side_to_move() {
        let mut pos = Position::startpos();
        pos.red_material += 100;
        let red_to_move = evaluate(&pos);
        pos.swap_side();
        let black_to_move = evaluate(&pos);
        assert_eq!(red_to_move, -black_to_move + 2 * ADVANCED_VALUE);
    }

    #[test]
    fn evaluation_is_invariant_under_color_swap_and_board_flip() {
        use core::board;
        use core::piece::{make_piece, Color, Role};
        use core::square::Square;

        let mut pos = Position {
            board: [0; 256],
            black_to_move: false,
            red_material: 0,
            black_material: 0,
            distance: 0,
        };
        let red_rook = Square::new(board::RANK_BOTTOM * 16 + board::FILE_LEFT + 1);
        let black_cannon = Square::new(board::RANK_TOP * 16 + board::FILE_LEFT + 5);
        pos.add(red_rook, make_piece(Color::Red, Role::Rook));
        pos.add(black_cannon, make_piece(Color::Black, Role::Cannon));

        // mirror: every piece recolored, every square point-reflected through
        // the board's centre, and the side to move swapped to match.
        let mut mirror = Position {
            board: [0; 256],
            black_to_move: true,
            red_material: 0,
            black_material: 0,
            distance: 0,
        };
        mirror.add(Square::new(board::flip(red_rook.id())), make_piece(Color::Black, Role::Rook));
        mirror.add(Square::new(board::flip(black_cannon.id())), make_piece(Color::Red, Role::Cannon));

        assert_eq!(evaluate(&pos), evaluate(&mirror));
    }
}
