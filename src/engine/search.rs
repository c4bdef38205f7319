#[cfg(test)]
mod test;
use crate::engine::board::*;
use crate::engine::table::*;

/// Exhaustive minimax search over a shared mutable board, memoized by
/// position ordinal. One instance per game session; the cache assumes X
/// moved first, so repeated contents always imply the same side to move.
pub struct Searcher {
    pub table: MoveTable,
    pub node_count: usize,
}

impl Searcher {
    pub fn new(size: usize) -> Searcher {
        Searcher {
            table: MoveTable::new(size),
            node_count: 0,
        }
    }

    /// Returns the minimax-optimal move for `player` and the outcome it
    /// guarantees. The board is explored by speculatively placing and
    /// removing marks and is restored before every return.
    ///
    /// Calling this on a full or already-won board is a caller bug and
    /// aborts the process.
    pub fn best_move(&mut self, board: &mut Board, player: Player) -> Move {
        assert!(!board.is_full(), "no legal move: the board is full");
        assert!(
            !board.has_won(player),
            "no legal move: {} has already won",
            player
        );
        assert!(
            !board.has_won(player.opponent()),
            "no legal move: {} has already won",
            player.opponent()
        );

        let ordinal = board.ordinal();
        if let Some(ord) = ordinal {
            if let Some(mv) = self.table.lookup(ord) {
                return mv;
            }
        }
        self.node_count += 1;
        let size = board.size();

        // A win this turn preempts deeper search; first winning cell in
        // row-major order is taken.
        for row in 0..size {
            for col in 0..size {
                if board.get(row, col).is_some() {
                    continue;
                }
                board.put(row, col, player);
                let won = board.has_won(player);
                board.clear(row, col);
                if won {
                    return self.commit(
                        ordinal,
                        Move {
                            row,
                            col,
                            outcome: Outcome::Win,
                        },
                    );
                }
            }
        }

        let mut candidate: Option<Move> = None;
        for row in 0..size {
            for col in 0..size {
                if board.get(row, col).is_some() {
                    continue;
                }
                board.put(row, col, player);
                if board.is_full() {
                    // Not a win (ruled out above), so filling the last
                    // cell is a draw.
                    board.clear(row, col);
                    return self.commit(
                        ordinal,
                        Move {
                            row,
                            col,
                            outcome: Outcome::Draw,
                        },
                    );
                }
                let reply = self.best_move(board, player.opponent());
                board.clear(row, col);
                match reply.outcome {
                    // The opponent loses from there, so this cell wins.
                    Outcome::Loss => {
                        return self.commit(
                            ordinal,
                            Move {
                                row,
                                col,
                                outcome: Outcome::Win,
                            },
                        );
                    }
                    Outcome::Draw => {
                        candidate = Some(Move {
                            row,
                            col,
                            outcome: Outcome::Draw,
                        });
                    }
                    // The opponent wins from there; keep as a fallback
                    // only while nothing better is recorded.
                    Outcome::Win => {
                        if candidate.is_none() {
                            candidate = Some(Move {
                                row,
                                col,
                                outcome: Outcome::Loss,
                            });
                        }
                    }
                }
            }
        }
        let best = candidate.expect("non-terminal board had no empty cell");
        self.commit(ordinal, best)
    }

    fn commit(&mut self, ordinal: Option<u128>, mv: Move) -> Move {
        if let Some(ord) = ordinal {
            self.table.store(ord, mv);
        }
        mv
    }
}
