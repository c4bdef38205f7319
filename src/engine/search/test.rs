use super::*;

fn board_from(rows: &[&str]) -> Board {
    rows.concat().parse().unwrap()
}

#[test]
fn test_forced_win() {
    let mut board = board_from(&["XX.", "OO.", "..."]);
    let mut searcher = Searcher::new(3);
    let mv = searcher.best_move(&mut board, Player::X);
    assert_eq!((mv.row, mv.col, mv.outcome), (0, 2, Outcome::Win));
}

#[test]
fn test_forced_block() {
    let mut board = board_from(&["OO.", "X..", "..."]);
    let mut searcher = Searcher::new(3);
    let mv = searcher.best_move(&mut board, Player::X);
    // every cell but the block loses outright
    assert_eq!((mv.row, mv.col), (0, 2));
    assert_ne!(mv.outcome, Outcome::Loss);
}

#[test]
fn test_opening_is_a_draw() {
    let mut board = Board::new(3).unwrap();
    let mut searcher = Searcher::new(3);
    let mv = searcher.best_move(&mut board, Player::X);
    assert_eq!(mv.outcome, Outcome::Draw);
}

#[test]
fn test_center_is_the_only_drawing_reply_to_a_corner() {
    let mut board = board_from(&["X..", "...", "..."]);
    let mut searcher = Searcher::new(3);
    let mv = searcher.best_move(&mut board, Player::O);
    assert_eq!((mv.row, mv.col, mv.outcome), (1, 1, Outcome::Draw));
}

#[test]
fn test_last_cell_draw() {
    let mut board = board_from(&["XOX", "XOO", "OX."]);
    let mut searcher = Searcher::new(3);
    let mv = searcher.best_move(&mut board, Player::X);
    assert_eq!((mv.row, mv.col, mv.outcome), (2, 2, Outcome::Draw));
}

#[test]
fn test_board_restored_after_search() {
    let mut searcher = Searcher::new(3);

    let mut board = board_from(&["O..", ".X.", "..."]);
    let snapshot = board;
    searcher.best_move(&mut board, Player::X);
    assert_eq!(board, snapshot);

    // full-depth search from the empty board
    let mut board = Board::new(3).unwrap();
    let snapshot = board;
    searcher.best_move(&mut board, Player::X);
    assert_eq!(board, snapshot);
}

#[test]
fn test_cache_hit_short_circuits() {
    let mut board = Board::new(3).unwrap();
    let mut searcher = Searcher::new(3);
    let first = searcher.best_move(&mut board, Player::X);
    let visited = searcher.node_count;
    assert!(visited > 0);
    let second = searcher.best_move(&mut board, Player::X);
    assert_eq!(first, second);
    assert_eq!(searcher.node_count, visited);
}

#[test]
fn test_draw_on_larger_board_with_two_empties() {
    let mut board = board_from(&["XOXO", "OXOX", "OXO.", "XOX."]);
    let snapshot = board;
    let mut searcher = Searcher::new(4);
    let mv = searcher.best_move(&mut board, Player::X);
    assert_eq!(mv.outcome, Outcome::Draw);
    assert_eq!(board, snapshot);
}

#[test]
fn test_immediate_win_uses_sparse_cache() {
    let mut board = board_from(&["XXXX.", "OOO..", "O....", ".....", "....."]);
    let mut searcher = Searcher::new(5);
    let mv = searcher.best_move(&mut board, Player::X);
    assert_eq!((mv.row, mv.col, mv.outcome), (0, 4, Outcome::Win));
    assert_eq!(searcher.table.len(), 1);
}

#[test]
fn test_search_works_without_cache() {
    // size 9 has no exact ordinal, so the table is disabled
    let mut board = Board::new(9).unwrap();
    for col in 0..8 {
        board.put(0, col, Player::X);
        board.put(2, col, Player::O);
    }
    let mut searcher = Searcher::new(9);
    let mv = searcher.best_move(&mut board, Player::X);
    assert_eq!((mv.row, mv.col, mv.outcome), (0, 8, Outcome::Win));
    assert!(searcher.table.is_empty());
}

#[test]
#[should_panic(expected = "full")]
fn test_full_board_is_rejected() {
    let mut board = board_from(&["XOX", "XOO", "OXX"]);
    let mut searcher = Searcher::new(3);
    searcher.best_move(&mut board, Player::X);
}

#[test]
#[should_panic(expected = "already won")]
fn test_won_board_is_rejected() {
    let mut board = board_from(&["XXX", "OO.", "..."]);
    let mut searcher = Searcher::new(3);
    searcher.best_move(&mut board, Player::O);
}
