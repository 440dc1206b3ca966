//! A position with move history and an optional display observer.

use std::fmt;

use log::debug;

use super::error::FenError;
use super::legality::GameStatus;
use super::make_unmake::Undo;
use super::{Move, MoveResult, PieceKind, Position, Square};

/// Receives board updates from a [`Game`].
///
/// `moved` is called for every applied move. Moves that change more than
/// their origin and destination squares (castling, en passant, promotion)
/// and undos are followed by `refresh` so the observer can redraw the whole
/// board.
pub trait BoardObserver {
    fn refresh(&mut self, position: &Position);

    fn moved(&mut self, _mv: Move, _result: MoveResult) {}
}

/// Observer that writes every update to the `log` facade.
pub struct LogObserver;

impl BoardObserver for LogObserver {
    fn refresh(&mut self, position: &Position) {
        debug!("board:\n{position}");
    }

    fn moved(&mut self, mv: Move, result: MoveResult) {
        debug!("{mv}: {result:?}");
    }
}

pub struct Game {
    position: Position,
    observer: Option<Box<dyn BoardObserver>>,
    history: Vec<Undo>,
}

impl Game {
    #[must_use]
    pub fn new() -> Self {
        Game::from_position(Position::new())
    }

    #[must_use]
    pub fn from_position(position: Position) -> Self {
        Game {
            position,
            observer: None,
            history: Vec::new(),
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        Position::try_from_fen(fen).map(Game::from_position)
    }

    /// Attach an observer and send it the current board.
    pub fn attach(&mut self, mut observer: Box<dyn BoardObserver>) {
        observer.refresh(&self.position);
        self.observer = Some(observer);
    }

    pub fn detach(&mut self) -> Option<Box<dyn BoardObserver>> {
        self.observer.take()
    }

    #[must_use]
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Play a move and notify the observer. Rejected moves leave the game
    /// unchanged and are not reported to the observer.
    pub fn play(&mut self, from: Square, to: Square, promote_to: Option<PieceKind>) -> MoveResult {
        let attempt = Move {
            from,
            to,
            promotion: promote_to,
        };
        let undo = match self.position.try_move(attempt) {
            Ok(undo) => undo,
            Err(result) => {
                debug!("rejected {attempt}: {result:?}");
                return result;
            }
        };

        let (mv, result) = (undo.mv(), undo.result());
        debug!("played {mv}: {result:?}");
        self.history.push(undo);

        if let Some(observer) = self.observer.as_mut() {
            observer.moved(mv, result);
            if result.has_side_effects() {
                observer.refresh(&self.position);
            }
        }
        result
    }

    /// Take back the last move, returning it.
    pub fn undo(&mut self) -> Option<Move> {
        let undo = self.history.pop()?;
        let mv = undo.mv();
        self.position.unmake_move(undo);
        debug!("took back {mv}");

        if let Some(observer) = self.observer.as_mut() {
            observer.refresh(&self.position);
        }
        Some(mv)
    }

    /// Moves played so far, oldest first.
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.history.iter().map(Undo::mv)
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.position.status()
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("fen", &self.position.to_fen())
            .field("moves", &self.history.len())
            .field("observed", &self.observer.is_some())
            .finish()
    }
}
