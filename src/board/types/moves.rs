//! Move and move-result types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::PieceKind;
use super::square::Square;

/// A move from one square to another, with an optional promotion kind.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            promotion: None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn with_promotion(from: Square, to: Square, kind: PieceKind) -> Self {
        Move {
            from,
            to,
            promotion: Some(kind),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.to_char())?;
        }
        Ok(())
    }
}

/// Classification of an attempted move.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveResult {
    /// Not in the legal move table; the position is unchanged
    Illegal,
    Moved,
    Capture,
    Castle,
    EnPassant,
    Promotion,
    /// A pawn reached the last rank without a promotion kind; the position is unchanged
    PromptPromotion,
}

impl MoveResult {
    /// Returns true if the move was applied to the position
    #[inline]
    #[must_use]
    pub const fn is_applied(self) -> bool {
        !matches!(self, MoveResult::Illegal | MoveResult::PromptPromotion)
    }

    /// Returns true if the move moved more than the origin and destination squares
    #[inline]
    #[must_use]
    pub const fn has_side_effects(self) -> bool {
        matches!(
            self,
            MoveResult::Castle | MoveResult::EnPassant | MoveResult::Promotion
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_display_coordinate_form() {
        assert_eq!(Move::new(sq("e2"), sq("e4")).to_string(), "e2e4");
        assert_eq!(
            Move::with_promotion(sq("e7"), sq("e8"), PieceKind::Knight).to_string(),
            "e7e8n"
        );
    }

    #[test]
    fn test_result_flags() {
        assert!(!MoveResult::Illegal.is_applied());
        assert!(!MoveResult::PromptPromotion.is_applied());
        assert!(MoveResult::Capture.is_applied());
        assert!(MoveResult::Castle.has_side_effects());
        assert!(!MoveResult::Moved.has_side_effects());
    }
}
