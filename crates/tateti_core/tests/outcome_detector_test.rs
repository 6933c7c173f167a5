//! Exhaustive checks of the outcome detector over every 3x3 board.

use tateti_core::{
    Board, Difficulty, Line, Outcome, Player, ScriptedDraws, Square, detect, select_move,
};

const TRIPLES: [(Line, [usize; 3]); 8] = [
    (Line::TopRow, [0, 1, 2]),
    (Line::MiddleRow, [3, 4, 5]),
    (Line::BottomRow, [6, 7, 8]),
    (Line::LeftColumn, [0, 3, 6]),
    (Line::CenterColumn, [1, 4, 7]),
    (Line::RightColumn, [2, 5, 8]),
    (Line::MainDiagonal, [0, 4, 8]),
    (Line::AntiDiagonal, [2, 4, 6]),
];

/// Every assignment of empty, X or O to the nine squares.
fn all_boards() -> impl Iterator<Item = Board> {
    (0..3usize.pow(9)).map(|mut code| {
        let mut squares = [Square::Empty; 9];
        for square in &mut squares {
            *square = match code % 3 {
                0 => Square::Empty,
                1 => Square::Occupied(Player::X),
                _ => Square::Occupied(Player::O),
            };
            code /= 3;
        }
        Board::from_squares(squares)
    })
}

/// First completed triple by raw index scan.
fn scan(board: &Board) -> Option<(Player, Line)> {
    let squares = board.squares();
    TRIPLES.iter().find_map(|&(line, [a, b, c])| match squares[a] {
        Square::Occupied(player) if squares[b] == squares[a] && squares[c] == squares[a] => {
            Some((player, line))
        }
        _ => None,
    })
}

#[test]
fn test_line_positions_match_triples() {
    for (line, indices) in TRIPLES {
        assert_eq!(line.indices(), indices, "{line}");
    }
    assert_eq!(Line::ALL.to_vec(), TRIPLES.map(|(line, _)| line).to_vec());
}

#[test]
fn test_each_line_reported_alone() {
    for player in [Player::X, Player::O] {
        for (line, indices) in TRIPLES {
            let mut squares = [Square::Empty; 9];
            for i in indices {
                squares[i] = Square::Occupied(player);
            }
            let outcome = detect(&Board::from_squares(squares));
            assert_eq!(outcome, Outcome::Win { player, line });
        }
    }
}

#[test]
fn test_detect_agrees_with_scan_on_every_board() {
    let mut counts = (0, 0, 0);
    for board in all_boards() {
        let has_empty = board.squares().contains(&Square::Empty);
        let outcome = detect(&board);

        match scan(&board) {
            Some((player, line)) => {
                assert_eq!(outcome, Outcome::Win { player, line }, "board {board}");
                counts.0 += 1;
            }
            None if has_empty => {
                assert_eq!(outcome, Outcome::Ongoing, "board {board}");
                counts.1 += 1;
            }
            None => {
                assert_eq!(outcome, Outcome::Draw, "board {board}");
                counts.2 += 1;
            }
        }
    }
    assert_eq!(counts.0 + counts.1 + counts.2, 19683);
    assert!(counts.0 > 0 && counts.1 > 0 && counts.2 > 0);
}

#[test]
fn test_select_move_legal_on_every_board() {
    for board in all_boards() {
        let empty = board.empty_positions();
        for difficulty in [Difficulty::Easy, Difficulty::Normal, Difficulty::Pro] {
            for u in [0.0, 0.3, 0.7, 0.999] {
                let pick = select_move(&board, Player::O, difficulty, &mut ScriptedDraws::constant(u));
                match pick {
                    Some(pos) => assert!(empty.contains(&pos), "{pos} taken on {board}"),
                    None => assert!(empty.is_empty(), "no move on {board}"),
                }
            }
        }
    }
}
