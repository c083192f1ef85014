//! Uno rules engine: deck composition, turn progression, special-card
//! resolution and the stacking semantics of Draw Two penalties.
//!
//! The crate is presentation-agnostic: a UI (or bot harness) seats players
//! with [`Game::add_player`], calls [`Game::start_game`], then serializes all
//! actions through [`Game::play_card`] / [`Game::draw_card`] and observes the
//! results through read-only queries such as [`Game::state_view`].

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod player;
pub mod state;
pub mod turn;

pub use crate::card::{Card, Color, Value};
pub use crate::deck::Deck;
pub use crate::error::{GameError, InvalidPlay};
pub use crate::game::{Game, GameBuilder};
pub use crate::player::{Player, PlayerId};
pub use crate::state::{GameStateView, GameStatus, PlayerPublicState, TurnState};
pub use crate::turn::{Direction, TurnController};
