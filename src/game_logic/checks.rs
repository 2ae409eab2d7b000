use super::direction::{Direction, KNIGHT_JUMPS, RAYS};
use crate::game_state::{BOARD_SIZE, Color, GameState, Piece, PieceKind, Square};

/// A friendly piece that may only move along `direction` (or its opposite).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pin {
    pub square: Square,
    /// Ray from the king through the pinned piece.
    pub direction: Direction,
}

/// An enemy piece giving check.
///
/// For sliders, pawns and kings `direction` is the ray from the king to the
/// checker. For knights it is the jump offset from the king.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Check {
    pub square: Square,
    pub direction: Direction,
}

/// Checks and pins against the side to move, computed fresh per query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    pub in_check: bool,
    pub pins: Vec<Pin>,
    pub checks: Vec<Check>,
}

impl CheckReport {
    /// Pin direction of the piece on `square`, if it is pinned.
    pub fn pin_on(&self, square: Square) -> Option<Direction> {
        self.pins
            .iter()
            .find(|pin| pin.square == square)
            .map(|pin| pin.direction)
    }

    #[inline]
    pub fn is_double_check(&self) -> bool {
        self.checks.len() > 1
    }
}

impl GameState {
    /// Scans outward from the side to move's king for checks and pins.
    ///
    /// Each of the eight rays is walked until it leaves the board or meets an
    /// enemy piece. One friendly piece on the way turns an attacking enemy into
    /// a pin; a second friendly piece closes the ray. Knight checks are found by
    /// testing the eight jump squares.
    pub fn scan_pins_and_checks(&self) -> CheckReport {
        self.scan_for(self.turn)
    }

    /// Whether the side to move is in check.
    pub fn in_check(&self) -> bool {
        self.scan_for(self.turn).in_check
    }

    /// Whether `color`'s king is attacked, regardless of whose turn it is.
    pub fn king_in_check(&self, color: Color) -> bool {
        self.scan_for(color).in_check
    }

    fn scan_for(&self, us: Color) -> CheckReport {
        let king = self.king_square(us);
        let mut report = CheckReport::default();

        for direction in RAYS {
            let mut blocker: Option<Square> = None;
            for distance in 1..BOARD_SIZE as i8 {
                let Some(square) = direction.step(king, distance) else {
                    break;
                };
                let Some(piece) = self.board[square] else {
                    continue;
                };

                if piece.color == us {
                    if blocker.is_some() {
                        break;
                    }
                    blocker = Some(square);
                    continue;
                }

                if attacks_along_ray(piece, direction, distance, us) {
                    match blocker {
                        None => report.checks.push(Check { square, direction }),
                        Some(pinned) => report.pins.push(Pin {
                            square: pinned,
                            direction,
                        }),
                    }
                }
                break;
            }
        }

        for jump in KNIGHT_JUMPS {
            let Some(square) = jump.step(king, 1) else {
                continue;
            };
            if self.board[square] == Some(Piece::new(us.opposite(), PieceKind::Knight)) {
                report.checks.push(Check {
                    square,
                    direction: jump,
                });
            }
        }

        report.in_check = !report.checks.is_empty();
        log::trace!("{:?} to move: {report:?}", us);
        report
    }
}

/// Can `attacker`, found `distance` squares from the king along `direction`,
/// reach the king? `defender` is the king's color.
fn attacks_along_ray(attacker: Piece, direction: Direction, distance: i8, defender: Color) -> bool {
    match attacker.kind {
        PieceKind::Rook => direction.is_orthogonal(),
        PieceKind::Bishop => direction.is_diagonal(),
        PieceKind::Queen => true,
        PieceKind::King => distance == 1,
        // Enemy pawns capture toward the defender's back rank, so they sit on
        // the diagonals in front of the king.
        PieceKind::Pawn => {
            distance == 1 && direction.is_diagonal() && direction.dr == defender.pawn_direction()
        }
        PieceKind::Knight => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn sq(s: &str) -> Square {
        s.parse().expect("test square is invalid")
    }

    fn scan(fen: &str) -> CheckReport {
        GameState::from_fen(fen)
            .expect("invalid FEN")
            .scan_pins_and_checks()
    }

    #[test]
    fn test_start_position_is_quiet() {
        assert_eq!(GameState::new().scan_pins_and_checks(), CheckReport::default());
    }

    #[test]
    fn test_rook_check_on_file() {
        let report = scan("4r2k/8/8/8/8/8/8/4K3 w");
        assert!(report.in_check);
        assert_eq!(
            report.checks,
            vec![Check {
                square: sq("e8"),
                direction: Direction::new(-1, 0)
            }]
        );
        assert!(report.pins.is_empty());
    }

    #[test]
    fn test_rank_pin() {
        let report = scan("7k/8/8/8/8/r1B1K3/8/8 w");
        assert!(!report.in_check);
        assert_eq!(
            report.pins,
            vec![Pin {
                square: sq("c3"),
                direction: Direction::new(0, -1)
            }]
        );
        assert_eq!(report.pin_on(sq("c3")), Some(Direction::new(0, -1)));
        assert_eq!(report.pin_on(sq("e3")), None);
    }

    #[test]
    fn test_two_blockers_are_not_a_pin() {
        let report = scan("7k/8/8/8/8/rNB1K3/8/8 w");
        assert_eq!(report, CheckReport::default());
    }

    #[test]
    fn test_enemy_blocker_shields_king() {
        let report = scan("7k/8/8/8/8/r1b1K3/8/8 w");
        assert_eq!(report, CheckReport::default());
    }

    #[test_case("7k/8/8/8/8/2b5/8/4K3 w", true; "bishop on diagonal")]
    #[test_case("7k/8/8/8/8/8/8/1r2K3 w", true; "rook on rank")]
    #[test_case("7k/8/8/8/8/2r5/8/4K3 w", false; "rook on diagonal")]
    #[test_case("7k/8/8/8/4b3/8/8/4K3 w", false; "bishop on file")]
    #[test_case("7k/8/8/8/8/8/8/q3K3 w", true; "queen on rank")]
    #[test_case("7k/8/8/q7/8/8/8/4K3 w", true; "queen on diagonal")]
    fn test_slider_kinds(fen: &str, in_check: bool) {
        assert_eq!(scan(fen).in_check, in_check);
    }

    #[test]
    fn test_queen_pins_on_both_line_types() {
        let report = scan("7k/8/8/q7/8/2N5/8/q2RK3 w");
        assert!(!report.in_check);
        assert_eq!(report.pin_on(sq("d1")), Some(Direction::new(0, -1)));
        assert_eq!(report.pin_on(sq("c3")), Some(Direction::new(-1, -1)));
    }

    #[test_case("7k/8/8/8/8/8/3p4/4K3 w", true; "black pawn in front of white king")]
    #[test_case("7k/8/8/8/8/8/8/3pK3 w", false; "black pawn beside white king")]
    #[test_case("7k/8/8/8/8/8/8/4K3 w", false; "no pawn")]
    #[test_case("4k3/3P4/8/8/8/8/8/4K3 b", true; "white pawn in front of black king")]
    #[test_case("8/8/8/8/8/8/3P4/4k2K b", false; "white pawn behind black king")]
    #[test_case("8/8/8/8/8/2p5/8/4K2k w", false; "black pawn two squares away")]
    fn test_pawn_checks(fen: &str, in_check: bool) {
        assert_eq!(scan(fen).in_check, in_check);
    }

    #[test]
    fn test_knight_check_records_offset() {
        let report = scan("7k/8/8/8/8/3n4/8/4K3 w");
        assert!(report.in_check);
        assert_eq!(
            report.checks,
            vec![Check {
                square: sq("d3"),
                direction: Direction::new(-2, -1)
            }]
        );
    }

    #[test]
    fn test_friendly_knight_is_not_a_check() {
        let report = scan("7k/8/8/8/8/3N4/8/4K3 w");
        assert_eq!(report, CheckReport::default());
    }

    #[test]
    fn test_double_check() {
        let report = scan("4r2k/8/8/8/8/3n4/8/4K3 w");
        assert!(report.in_check);
        assert!(report.is_double_check());
        assert_eq!(report.checks.len(), 2);
    }

    #[test]
    fn test_adjacent_king_counts_as_attacker() {
        let report = scan("8/8/8/8/8/8/4k3/4K3 w");
        assert!(report.in_check);
    }

    #[test]
    fn test_king_in_check_ignores_turn() {
        let state = GameState::from_fen("4k3/8/8/8/8/8/8/R3K3 b").unwrap();
        assert!(!state.king_in_check(Color::White));
        assert!(!state.king_in_check(Color::Black));

        let state = GameState::from_fen("R3k3/8/8/8/8/8/8/4K3 w").unwrap();
        assert!(!state.in_check());
        assert!(state.king_in_check(Color::Black));
    }

    #[test]
    fn test_scan_follows_side_to_move() {
        assert!(!scan("4k3/8/8/8/8/8/8/R3K3 w").in_check);
        assert!(scan("4k3/8/8/8/8/8/8/4K2r w").in_check);

        assert!(!scan("r3k3/8/8/8/8/8/8/4K3 b").in_check);
        assert!(scan("R3k3/8/8/8/8/8/8/4K3 b").in_check);
    }
}
