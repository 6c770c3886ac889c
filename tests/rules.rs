use checkers_engine::{
    apply_move, capture_moves, get_legal_moves, is_game_over, Board, Location, Move, Player, Square,
};

fn loc(row: u8, col: u8) -> Location {
    Location::new(row, col)
}

fn board_with(turn: Player, pieces: &[(Location, Square)]) -> Board {
    let mut board = Board::empty(turn);
    board.insert_pieces(pieces);
    board
}

#[test]
fn opening_moves_come_from_the_front_row() {
    let board = Board::new();
    let moves = get_legal_moves(&board);

    // Four row-2 men; the one on the edge has a single neighbour.
    assert_eq!(moves.len(), 7);
    assert!(moves.iter().all(|m| m.len() == 2 && !m.is_capture()));
    assert!(moves.iter().all(|m| m.origin().row == 2 && m.destination().row == 3));
    for col in 0..4 {
        assert!(moves.iter().any(|m| m.origin() == loc(2, col)));
    }
    assert!(!is_game_over(&board));
}

#[test]
fn opening_moves_for_player_two() {
    let mut board = Board::new();
    board.switch_turn();
    let moves = get_legal_moves(&board);
    assert_eq!(moves.len(), 7);
    assert!(moves.iter().all(|m| m.origin().row == 5 && m.destination().row == 4));
}

#[test]
fn single_capture_removes_the_opponent() {
    let mut board = board_with(Player::One, &[
        (loc(2, 1), Square::Man(Player::One)),
        (loc(3, 1), Square::Man(Player::Two)),
    ]);
    let moves = get_legal_moves(&board);
    assert_eq!(moves, vec![Move::step(loc(2, 1), loc(4, 2))]);

    apply_move(&mut board, &moves[0], true).unwrap();
    assert!(board.get(loc(3, 1)).is_empty());
    assert_eq!(board.get(loc(4, 2)), Square::Man(Player::One));
    assert_eq!(board.piece_counts().p2_men, 0);
    assert!(is_game_over(&board));
}

#[test]
fn double_jump_is_one_move() {
    let mut board = board_with(Player::One, &[
        (loc(2, 1), Square::Man(Player::One)),
        (loc(3, 1), Square::Man(Player::Two)),
        (loc(5, 2), Square::Man(Player::Two)),
    ]);
    let moves = get_legal_moves(&board);
    assert_eq!(moves, vec![Move::new(vec![loc(2, 1), loc(4, 2), loc(6, 3)]).unwrap()]);

    apply_move(&mut board, &moves[0], true).unwrap();
    assert_eq!(board.piece_counts().p2_men, 0);
    assert_eq!(board.get(loc(6, 3)), Square::Man(Player::One));
}

#[test]
fn blocked_side_has_no_moves() {
    let board = board_with(Player::One, &[
        (loc(2, 0), Square::Man(Player::One)),
        (loc(3, 0), Square::Man(Player::Two)),
        (loc(4, 1), Square::Man(Player::Two)),
    ]);
    assert!(get_legal_moves(&board).is_empty());
    assert!(is_game_over(&board));

    // Player two is not stuck in the same position.
    let mut other = board.clone();
    other.switch_turn();
    assert!(!is_game_over(&other));
}

#[test]
fn crowning_mid_chain_ends_the_move() {
    // Without the stop the new king could jump (6,3) back to (5,3).
    let mut board = board_with(Player::One, &[
        (loc(5, 1), Square::Man(Player::One)),
        (loc(6, 2), Square::Man(Player::Two)),
        (loc(6, 3), Square::Man(Player::Two)),
    ]);
    let moves = get_legal_moves(&board);
    assert_eq!(moves, vec![Move::step(loc(5, 1), loc(7, 2))]);

    apply_move(&mut board, &moves[0], true).unwrap();
    assert_eq!(board.get(loc(7, 2)), Square::King(Player::One));
    assert!(board.get(loc(6, 2)).is_empty());
    assert_eq!(board.get(loc(6, 3)), Square::Man(Player::Two));
}

#[test]
fn crowning_stop_applies_to_player_two() {
    let board = board_with(Player::Two, &[
        (loc(2, 2), Square::Man(Player::Two)),
        (loc(1, 2), Square::Man(Player::One)),
        (loc(1, 1), Square::Man(Player::One)),
    ]);
    let moves = capture_moves(&board, loc(2, 2));
    assert!(moves.iter().all(|m| m.len() == 2 && m.destination().row == 0));
    assert!(!moves.is_empty());
}

#[test]
fn kings_keep_capturing_through_the_back_rank() {
    let board = board_with(Player::One, &[
        (loc(5, 1), Square::King(Player::One)),
        (loc(6, 2), Square::Man(Player::Two)),
        (loc(6, 3), Square::Man(Player::Two)),
    ]);
    let moves = get_legal_moves(&board);
    assert_eq!(moves, vec![Move::new(vec![loc(5, 1), loc(7, 2), loc(5, 3)]).unwrap()]);
}

#[test]
fn forced_capture_hides_every_simple_move() {
    let mut board = Board::new();
    for mv in ["10-14", "23-19"] {
        let mv: Move = mv.parse().unwrap();
        apply_move(&mut board, &mv, true).unwrap();
    }
    // 19 sits in front of 14 with 23 vacated behind it, so player one must take.
    let moves = get_legal_moves(&board);
    assert_eq!(moves, vec!["14x23".parse::<Move>().unwrap()]);
    assert!(moves.iter().all(Move::is_capture));
}

#[test]
fn generation_does_not_mutate_the_board() {
    let board = board_with(Player::One, &[
        (loc(2, 1), Square::Man(Player::One)),
        (loc(3, 1), Square::Man(Player::Two)),
        (loc(5, 2), Square::Man(Player::Two)),
        (loc(5, 1), Square::Man(Player::Two)),
    ]);
    let before = board.clone();
    let moves = get_legal_moves(&board);
    assert_eq!(moves.len(), 2);
    assert!(moves.iter().all(|m| m.len() == 3));
    assert_eq!(board, before);
}
