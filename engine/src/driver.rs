//! UI-agnostic game loop: alternates between a human `InputSource` and the
//! engine's own search, notifying a `ViewSink` of what happened.

use core::make::{is_mated, make_move};
use core::mov::Move;
use core::movegen::legal_move;
use core::piece::Color;
use core::position::Position;
use core::square::Square;

use crate::history::HistoryTable;
use crate::options::EngineConfig;
use crate::search::Search;

/// Supplies the human player's next move, as a `(src, dst)` square pair.
pub trait InputSource {
    fn next_move(&mut self) -> (Square, Square);
}

/// Receives game events for display.
pub trait ViewSink {
    fn piece_moved(&mut self, src: Square, dst: Square, captured: u8);
    fn check_warning(&mut self);
    fn game_over(&mut self, winner: Color);
}

/// Owns the position, the search's history table, and the two UI
/// collaborators, and runs the game to completion.
pub struct Driver<I, V> {
    pos: Position,
    search: Search,
    config: EngineConfig,
    human: Color,
    input: I,
    view: V,
}

impl<I: InputSource, V: ViewSink> Driver<I, V> {
    pub fn new(human: Color, config: EngineConfig, input: I, view: V) -> Self {
        Driver {
            pos: Position::startpos(),
            search: Search::new(),
            config,
            human,
            input,
            view,
        }
    }

    /// Runs the alternating human/engine loop until one side is mated.
    pub fn run(&mut self) {
        loop {
            let mover = self.pos.side();
            if mover == self.human {
                if self.human_turn() {
                    continue;
                }
            } else {
                self.engine_turn();
            }

            if is_mated(&mut self.pos) {
                // the side now to move has no reply: the other side won.
                self.view.game_over(self.pos.side().opposite());
                return;
            }
        }
    }

    /// Polls one human move attempt. Returns `true` if it was rejected as
    /// self-check (so the caller should re-poll without checking mate).
    fn human_turn(&mut self) -> bool {
        let (src, dst) = self.input.next_move();
        let mv = Move::new(src, dst);
        if !legal_move(&self.pos, mv) {
            return true;
        }
        match make_move(&mut self.pos, mv) {
            Some(captured) => {
                self.view.piece_moved(src, dst, captured);
                false
            }
            None => {
                self.view.check_warning();
                true
            }
        }
    }

    fn engine_turn(&mut self) {
        let (mv, _score) = self.search.search_main(&mut self.pos, &self.config);
        let src = mv.src();
        let dst = mv.dst();
        let captured = make_move(&mut self.pos, mv);
        debug_assert!(captured.is_some(), "search returned a self-check move");
        self.view.piece_moved(src, dst, captured.unwrap_or(0));
    }

    /// Exposes the history table for callers that want to inspect search
    /// diagnostics between moves; the table itself is reset every
    /// `search_main` call.
    pub fn history(&self) -> &HistoryTable {
        self.search.history_table()
    }
}
