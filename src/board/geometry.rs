//! Square index geometry.
//!
//! Direction offsets are stored as single index deltas (e.g. `-7` is one row
//! up and one column right). A delta alone cannot tell a wrap across ranks
//! from a genuine step, so every step is checked against its decoded
//! `(dx, dy)` before it is taken.

use super::error::SquareError;
use super::Square;

/// Column and row of a square index (x = file 0-7, y = row 0-7 from the top).
#[inline]
#[must_use]
pub const fn index_to_xy(index: u8) -> (i8, i8) {
    ((index % 8) as i8, (index / 8) as i8)
}

/// Decode a direction offset into `(dx, dy)`.
///
/// Column deltas above 4 belong to the previous row with a negative column
/// delta: `7` is `(-1, 1)` and `-9` is `(-1, -1)`.
#[inline]
#[must_use]
pub const fn offset_to_xy(offset: i8) -> (i8, i8) {
    let mut dx = offset.rem_euclid(8);
    let mut dy = offset.div_euclid(8);
    if dx > 4 {
        dx -= 8;
        dy += 1;
    }
    (dx, dy)
}

/// Returns true if stepping from `from` by `offset` leaves the board.
#[inline]
#[must_use]
pub const fn is_step_off_board(from: Square, offset: i8) -> bool {
    let (x, y) = index_to_xy(from.0);
    let (dx, dy) = offset_to_xy(offset);
    let (nx, ny) = (x + dx, y + dy);
    nx < 0 || nx > 7 || ny < 0 || ny > 7
}

/// Standard coordinate of a square ("a8" for index 0, "h1" for index 63).
#[must_use]
pub fn index_to_coordinate(sq: Square) -> String {
    let file = (b'a' + sq.x()) as char;
    let rank = (b'0' + sq.rank()) as char;
    format!("{file}{rank}")
}

/// Parse a standard coordinate such as "e4".
pub fn coordinate_to_index(notation: &str) -> Result<Square, SquareError> {
    let chars: Vec<char> = notation.chars().collect();
    if chars.len() != 2 {
        return Err(SquareError::InvalidLength {
            notation: notation.to_string(),
        });
    }

    let x = match chars[0] {
        'a'..='h' => chars[0] as u8 - b'a',
        c => return Err(SquareError::InvalidFile { char: c }),
    };
    let rank = match chars[1] {
        '1'..='8' => chars[1] as u8 - b'0',
        c => return Err(SquareError::InvalidRank { char: c }),
    };

    Ok(Square((8 - rank) * 8 + x))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_to_xy() {
        assert_eq!(index_to_xy(0), (0, 0));
        assert_eq!(index_to_xy(63), (7, 7));
        assert_eq!(index_to_xy(12), (4, 1));
    }

    #[test]
    fn test_offset_decoding() {
        let expected = [
            (1, (1, 0)),
            (-1, (-1, 0)),
            (8, (0, 1)),
            (-8, (0, -1)),
            (7, (-1, 1)),
            (-7, (1, -1)),
            (9, (1, 1)),
            (-9, (-1, -1)),
            (6, (-2, 1)),
            (-6, (2, -1)),
            (10, (2, 1)),
            (-10, (-2, -1)),
            (15, (-1, 2)),
            (-15, (1, -2)),
            (17, (1, 2)),
            (-17, (-1, -2)),
        ];
        for (offset, xy) in expected {
            assert_eq!(offset_to_xy(offset), xy, "offset {offset}");
        }
    }

    #[test]
    fn test_step_off_board_catches_wraparound() {
        // h8 stepping right would land on a7 by raw index
        assert!(is_step_off_board(Square(7), 1));
        // a1 stepping down-left
        assert!(is_step_off_board(Square(56), 7));
        // knight on b8 jumping two columns left
        assert!(is_step_off_board(Square(1), 6));
        assert!(!is_step_off_board(Square(1), 15));
        assert!(!is_step_off_board(Square(27), -9));
        assert!(is_step_off_board(Square(3), -8));
    }

    #[test]
    fn test_coordinates() {
        assert_eq!(index_to_coordinate(Square(0)), "a8");
        assert_eq!(index_to_coordinate(Square(63)), "h1");
        assert_eq!(index_to_coordinate(Square(52)), "e2");
        assert_eq!(coordinate_to_index("e2"), Ok(Square(52)));
        assert_eq!(coordinate_to_index("h8"), Ok(Square(7)));
    }

    #[test]
    fn test_coordinate_errors() {
        assert_eq!(
            coordinate_to_index("e"),
            Err(SquareError::InvalidLength {
                notation: "e".to_string()
            })
        );
        assert_eq!(
            coordinate_to_index("i4"),
            Err(SquareError::InvalidFile { char: 'i' })
        );
        assert_eq!(
            coordinate_to_index("a9"),
            Err(SquareError::InvalidRank { char: '9' })
        );
        assert_eq!(
            coordinate_to_index("a0"),
            Err(SquareError::InvalidRank { char: '0' })
        );
    }
}
