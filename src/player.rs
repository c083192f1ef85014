use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::error::InvalidPlay;

/// Zero-based index of a player within the game.
pub type PlayerId = usize;

/// A seated player and the hand of cards they exclusively own.
///
/// Cards enter via [`Player::add_card`] (dealing, drawing, penalties) and
/// leave via [`Player::remove_card`] (playing); they are never copied between
/// containers.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    name: String,
    hand: Vec<Card>,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    pub fn add_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    /// Removes and returns the card at `index`.
    pub fn remove_card(&mut self, index: usize) -> Result<Card, InvalidPlay> {
        if index >= self.hand.len() {
            return Err(InvalidPlay::InvalidCardIndex(index));
        }
        Ok(self.hand.remove(index))
    }

    /// True iff any owned card could legally be placed on `top`.
    pub fn has_playable_card(&self, top: &Card) -> bool {
        self.hand.iter().any(|card| card.is_playable(top))
    }

    /// True iff the hand holds a Draw Two, i.e. the player can counter-stack
    /// an incoming draw penalty.
    pub fn has_draw_two(&self) -> bool {
        self.hand.iter().any(Card::is_draw_two)
    }
}
