use std::fmt;

use super::Position;

impl fmt::Display for Position {
    /// Board diagram with White at the bottom, followed by the side to move.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.board.chunks(8).enumerate() {
            write!(f, "{} |", 8 - y)?;
            for slot in row {
                let ch = slot.map_or('.', |piece| piece.to_fen_char());
                write!(f, " {ch}")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "  +----------------")?;
        writeln!(f, "    a b c d e f g h")?;
        write!(f, "{} to move", self.side_to_move)
    }
}

#[cfg(debug_assertions)]
impl Position {
    /// Debug helper to print the cached check and pin state
    pub fn debug_state(&self) {
        println!("{self}");
        println!("FEN: {}", self.to_fen());
        println!(
            "Checkers: {} (piece {:?})",
            self.legality.checkers, self.legality.checking_piece
        );
        print_square_set_grid("Checking path", self.legality.checking_path);
        for pin in &self.legality.pins {
            print_square_set_grid(&format!("Pin on {}", pin.pinned), pin.line);
        }
        print_square_set_grid("Attacked", self.attacked_squares);
        println!("------------------------------------");
    }
}

#[cfg(debug_assertions)]
fn print_square_set_grid(label: &str, set: super::SquareSet) {
    println!("{label} {set:?}");
    for y in 0..8u8 {
        print!("{} |", 8 - y);
        for x in 0..8u8 {
            let marked = super::Square::from_xy(x, y).is_some_and(|sq| set.contains(sq));
            print!(" {}", if marked { '1' } else { '.' });
        }
        println!();
    }
    println!("    a b c d e f g h");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_start_position() {
        let text = Position::new().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "8 | r n b q k b n r");
        assert_eq!(lines[4], "4 | . . . . . . . .");
        assert_eq!(lines[7], "1 | R N B Q K B N R");
        assert_eq!(lines.last().copied(), Some("White to move"));
    }

    #[test]
    #[cfg(debug_assertions)]
    fn test_debug_state_runs() {
        Position::from_fen("4k3/8/8/8/4r3/8/4B3/4K3 w - - 0 1").debug_state();
    }
}
