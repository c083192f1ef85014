use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::player::PlayerId;
use crate::turn::Direction;

/// Status of the entire game.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameStatus {
    /// Players may still join; no opening discard yet.
    Lobby,
    Ongoing,
    Finished { winner: PlayerId },
}

/// The resolver's turn state: either a normal turn or an unresolved stack of
/// Draw Two penalties waiting to be absorbed or passed on.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum TurnState {
    AwaitingPlay,
    PendingDraw { count: usize },
}

impl TurnState {
    /// Accumulated penalty cards, zero outside `PendingDraw`.
    pub fn pending_count(&self) -> usize {
        match self {
            TurnState::AwaitingPlay => 0,
            TurnState::PendingDraw { count } => *count,
        }
    }
}

/// Portion of a player's state that all opponents may observe.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerPublicState {
    pub id: PlayerId,
    pub name: String,
    pub hand_size: usize,
    pub is_current: bool,
}

/// Snapshot of everything one player is allowed to see, tailored for a
/// presentation layer polling the engine between actions.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameStateView {
    pub status: GameStatus,
    pub turn_state: TurnState,
    pub current_player: PlayerId,
    pub direction: Direction,
    pub top_card: Option<Card>,
    pub draw_pile_count: usize,
    pub discard_pile_count: usize,
    pub players: Vec<PlayerPublicState>,
    /// The perspective player's own cards.
    pub hand: Vec<Card>,
}
