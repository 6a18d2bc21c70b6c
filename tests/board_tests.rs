use slidecargo::{apply_move, parse_board, successors, Board, BoardError, Dir};

#[test]
fn solved_board_reads_row_major() {
    let b = Board::solved(3, 3);
    assert_eq!(b.get(0, 0), Some(1));
    assert_eq!(b.get(0, 1), Some(2));
    assert_eq!(b.get(0, 2), Some(3));
    assert_eq!(b.get(1, 0), Some(4));
    assert_eq!(b.get(2, 1), Some(8));
    assert_eq!(b.get(2, 2), None, "blank sits in the last cell");
    assert_eq!(b.blank_pos(), (2, 2));
    assert!(b.is_solved());
    assert!(b.validate().is_ok());
}

#[test]
fn construction_rejects_duplicate_tiles() {
    let err = Board::from_cells(2, 2, vec![Some(1), Some(1), Some(2), None]).unwrap_err();
    assert_eq!(err, BoardError::DuplicateTile { tile: 1 });
}

#[test]
fn construction_rejects_out_of_range_tiles() {
    let err = Board::from_cells(2, 2, vec![Some(1), Some(2), Some(4), None]).unwrap_err();
    assert_eq!(err, BoardError::TileOutOfRange { tile: 4, max: 3 });
}

#[test]
fn construction_rejects_wrong_blank_count() {
    let err = Board::from_cells(2, 2, vec![Some(1), Some(2), None, None]).unwrap_err();
    assert_eq!(err, BoardError::BlankCount { count: 2 });

    let err = Board::from_cells(2, 2, vec![Some(1), Some(2), Some(3), Some(3)]).unwrap_err();
    assert_eq!(err, BoardError::BlankCount { count: 0 });
}

#[test]
fn construction_rejects_wrong_cell_count_and_zero_dims() {
    let err = Board::from_cells(2, 2, vec![Some(1), None]).unwrap_err();
    assert_eq!(err, BoardError::WrongCellCount { expected: 4, got: 2 });

    let err = Board::from_cells(0, 3, vec![]).unwrap_err();
    assert_eq!(err, BoardError::BadDimensions { width: 0, height: 3 });
}

#[test]
fn from_rows_rejects_ragged_input() {
    let rows = vec![vec![Some(1), Some(2)], vec![None]];
    assert_eq!(Board::from_rows(&rows).unwrap_err(), BoardError::RaggedRows);
}

#[test]
fn boundary_policy_matches_move_names() {
    // Blank at the bottom-right corner: Up needs a row below it and
    // Left a column to its right, so only Down and Right are legal.
    let goal = Board::solved(3, 3);
    assert!(!goal.is_legal(Dir::Up));
    assert!(!goal.is_legal(Dir::Left));
    assert!(goal.is_legal(Dir::Down));
    assert!(goal.is_legal(Dir::Right));

    // Down slides the tile above the blank downward into it.
    let after = apply_move(&goal, Dir::Down).expect("Down is legal at the goal");
    assert_eq!(after.get(2, 2), Some(6));
    assert_eq!(after.get(1, 2), None);
    assert_eq!(after.blank_pos(), (1, 2));

    // Right slides the tile left of the blank rightward into it.
    let after = apply_move(&goal, Dir::Right).expect("Right is legal at the goal");
    assert_eq!(after.get(2, 2), Some(8));
    assert_eq!(after.blank_pos(), (2, 1));
}

#[test]
fn apply_then_opposite_restores_the_board() {
    let board = parse_board("4,1,3/7,2,5/_,8,6").expect("valid board");
    for mv in Dir::all() {
        if board.is_legal(mv) {
            let once = apply_move(&board, mv).expect("legal move");
            let back = apply_move(&once, mv.opposite()).expect("opposite is legal");
            assert_eq!(back, board, "{mv} not inverted by {}", mv.opposite());
        }
    }
}

#[test]
fn illegal_move_is_a_reported_error() {
    let goal = Board::solved(3, 3);
    let err = apply_move(&goal, Dir::Up).unwrap_err();
    assert_eq!(err.mv, Dir::Up);
    assert_eq!(err.blank, (2, 2));
    // The failed request must leave the input untouched.
    assert!(goal.is_solved());
}

#[test]
fn successor_counts_by_blank_position() {
    let corner = parse_board("_,1,2/3,4,5/6,7,8").expect("valid board");
    assert_eq!(successors(&corner).len(), 2);

    let edge = parse_board("1,_,2/3,4,5/6,7,8").expect("valid board");
    assert_eq!(successors(&edge).len(), 3);

    let interior = parse_board("1,2,3/4,_,5/6,7,8").expect("valid board");
    assert_eq!(successors(&interior).len(), 4);
}

#[test]
fn successor_emission_order_is_fixed() {
    let interior = parse_board("1,2,3/4,_,5/6,7,8").expect("valid board");
    let dirs: Vec<Dir> = successors(&interior).into_iter().map(|(d, _)| d).collect();
    assert_eq!(dirs, vec![Dir::Left, Dir::Right, Dir::Up, Dir::Down]);
}

#[test]
fn successors_share_no_state_with_the_parent() {
    let parent = parse_board("1,2,3/4,_,5/6,7,8").expect("valid board");
    let children = successors(&parent);
    // Expansion clones: the parent is unchanged and every child
    // differs from it by exactly one slide.
    assert_eq!(parent, parse_board("1,2,3/4,_,5/6,7,8").unwrap());
    for (mv, child) in children {
        assert_ne!(child, parent);
        let back = apply_move(&child, mv.opposite()).expect("opposite is legal");
        assert_eq!(back, parent);
    }
}

#[test]
fn serde_round_trip_preserves_value() {
    let board = Board::solved(2, 3);
    let json = serde_json::to_string(&board).expect("serialize");
    let back: Board = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, board);
}

#[test]
fn serde_rejects_invariant_violations() {
    let bad = r#"{"width":2,"height":2,"cells":[1,1,2,null]}"#;
    assert!(serde_json::from_str::<Board>(bad).is_err());

    let bad = r#"{"width":2,"height":2,"cells":[1,2,3,4]}"#;
    assert!(serde_json::from_str::<Board>(bad).is_err());
}
