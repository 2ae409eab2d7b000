use super::direction::{DIAGONAL, Direction, KNIGHT_JUMPS, ORTHOGONAL, RAYS};
use crate::game_state::{BOARD_SIZE, Board, Move, Piece, PieceKind, Square};

/// Appends the pseudo-legal moves of `piece` standing on `from`.
///
/// `pin` is the pin direction of the piece, if pinned; a pinned piece only
/// moves parallel to it. King candidates are geometric only: the caller is
/// responsible for rejecting squares where the king would stand in check.
pub fn generate(
    piece: Piece,
    from: Square,
    board: &Board,
    pin: Option<Direction>,
    moves: &mut Vec<Move>,
) {
    match piece.kind {
        PieceKind::Pawn => pawn_moves(piece, from, board, pin, moves),
        // A knight never moves along a line, so a pinned knight is frozen.
        PieceKind::Knight if pin.is_some() => {}
        PieceKind::Knight => step_moves(piece, from, board, &KNIGHT_JUMPS, moves),
        PieceKind::Bishop => slide_moves(piece, from, board, pin, &DIAGONAL, moves),
        PieceKind::Rook => slide_moves(piece, from, board, pin, &ORTHOGONAL, moves),
        PieceKind::Queen => {
            slide_moves(piece, from, board, pin, &ORTHOGONAL, moves);
            slide_moves(piece, from, board, pin, &DIAGONAL, moves);
        }
        PieceKind::King => step_moves(piece, from, board, &RAYS, moves),
    }
}

#[inline]
fn allowed(pin: Option<Direction>, direction: Direction) -> bool {
    pin.is_none_or(|pin| pin.is_parallel(direction))
}

fn pawn_moves(
    piece: Piece,
    from: Square,
    board: &Board,
    pin: Option<Direction>,
    moves: &mut Vec<Move>,
) {
    let forward = piece.color.pawn_direction();

    let push = Direction::new(forward, 0);
    if allowed(pin, push)
        && let Some(one) = push.step(from, 1)
        && board[one].is_none()
    {
        moves.push(Move::new(from, one, piece, None));
        if from.row() == piece.color.pawn_start_row()
            && let Some(two) = push.step(from, 2)
            && board[two].is_none()
        {
            moves.push(Move::new(from, two, piece, None));
        }
    }

    for side in [-1, 1] {
        let capture = Direction::new(forward, side);
        if !allowed(pin, capture) {
            continue;
        }
        if let Some(to) = capture.step(from, 1)
            && let Some(target) = board[to]
            && target.color != piece.color
        {
            moves.push(Move::new(from, to, piece, Some(target)));
        }
    }
}

fn slide_moves(
    piece: Piece,
    from: Square,
    board: &Board,
    pin: Option<Direction>,
    directions: &[Direction],
    moves: &mut Vec<Move>,
) {
    for &direction in directions {
        if !allowed(pin, direction) {
            continue;
        }
        for distance in 1..BOARD_SIZE as i8 {
            let Some(to) = direction.step(from, distance) else {
                break;
            };
            match board[to] {
                None => moves.push(Move::new(from, to, piece, None)),
                Some(target) if target.color != piece.color => {
                    moves.push(Move::new(from, to, piece, Some(target)));
                    break;
                }
                Some(_) => break,
            }
        }
    }
}

/// Single-step movers: knights and kings.
fn step_moves(
    piece: Piece,
    from: Square,
    board: &Board,
    offsets: &[Direction],
    moves: &mut Vec<Move>,
) {
    for &offset in offsets {
        let Some(to) = offset.step(from, 1) else {
            continue;
        };
        match board[to] {
            Some(target) if target.color == piece.color => {}
            target => moves.push(Move::new(from, to, piece, target)),
        }
    }
}
