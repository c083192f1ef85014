use thiserror::Error;

use crate::player::PlayerId;

/// Errors that can occur when manipulating the game state.
///
/// Every variant is a caller-side precondition failure; a rejected operation
/// leaves the game untouched. Running out of cards is not represented here:
/// draws are delivered best-effort when circulation is short.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("player id {0} is out of range")]
    InvalidPlayer(PlayerId),
    #[error("not the specified player's turn")]
    NotYourTurn,
    #[error("players cannot join after the game has started")]
    GameAlreadyStarted,
    #[error("the game has not been started yet")]
    GameNotStarted,
    #[error("at least two players are required to start")]
    NotEnoughPlayers,
    #[error("no more than {0} players are supported")]
    TooManyPlayers(usize),
    #[error("game is already over")]
    GameOver,
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
    #[error("invalid play: {0}")]
    InvalidPlay(#[from] InvalidPlay),
}

/// Details of rejected play attempts.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidPlay {
    #[error("hand index {0} is out of range")]
    InvalidCardIndex(usize),
    #[error("card does not match the top of the discard pile")]
    CardNotPlayable,
    #[error("a wild card needs a chosen color")]
    WildRequiresColor,
    #[error("a wild card must be bound to a real color")]
    WildColorInvalid,
    #[error("{pending} penalty cards are pending; play a Draw Two or draw them")]
    MustStackOrDraw { pending: usize },
}
