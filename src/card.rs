use std::fmt;

use serde::{Deserialize, Serialize};

/// Color of an Uno card. `Wild` is the unbound color wild cards carry until
/// they are played and rebound to a real color.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
    Wild,
}

pub const REAL_COLORS: [Color; 4] = [Color::Red, Color::Blue, Color::Green, Color::Yellow];

impl Color {
    /// Returns true for the four playable colors, false for `Wild`.
    #[inline]
    pub fn is_real(&self) -> bool {
        !matches!(self, Color::Wild)
    }
}

/// Face value of an Uno card.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Value {
    /// Numbered card between 0 and 9.
    Number(u8),
    Skip,
    Reverse,
    DrawTwo,
    Wild,
    WildDrawFour,
}

pub const MIN_NUMBER: u8 = 0;
pub const MAX_NUMBER: u8 = 9;
pub const DECK_SIZE: usize = 108;
pub const INITIAL_HAND_SIZE: usize = 7;
pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 10;

/// Representation of an Uno card. Equality is field-wise; two cards with the
/// same color and value are interchangeable for gameplay purposes.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub color: Color,
    pub value: Value,
}

impl Card {
    pub const fn new(color: Color, value: Value) -> Self {
        Self { color, value }
    }

    /// Returns true if the card carries the unbound wild color.
    #[inline]
    pub fn is_wild(&self) -> bool {
        matches!(self.color, Color::Wild)
    }

    #[inline]
    pub fn is_draw_two(&self) -> bool {
        matches!(self.value, Value::DrawTwo)
    }

    /// Checks whether this card may legally be placed on `top`.
    ///
    /// A wild-colored card is always playable; anything else must match the
    /// top card's color or its value. Value comparison is exact: numbers only
    /// match the same number, specials only the same special kind.
    #[inline]
    pub fn is_playable(&self, top: &Card) -> bool {
        self.is_wild() || self.color == top.color || self.value == top.value
    }

    /// Rebinds the card's color, returning a new card value. Used when a wild
    /// card is played and the chosen color is fixed on the discard pile.
    #[inline]
    pub fn with_color(self, color: Color) -> Self {
        Self { color, ..self }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Red => "Red",
            Color::Blue => "Blue",
            Color::Green => "Green",
            Color::Yellow => "Yellow",
            Color::Wild => "Wild",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Skip => f.write_str("Skip"),
            Value::Reverse => f.write_str("Reverse"),
            Value::DrawTwo => f.write_str("Draw Two"),
            Value::Wild => f.write_str("Wild"),
            Value::WildDrawFour => f.write_str("Wild Draw Four"),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_wild() {
            write!(f, "{}", self.value)
        } else {
            write!(f, "{} {}", self.color, self.value)
        }
    }
}

/// Builds a full 108-card Uno deck in deterministic order (unshuffled).
///
/// Per color: one 0, two each of 1-9, two each of Skip/Reverse/Draw Two.
/// Plus four Wild and four Wild Draw Four.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for color in REAL_COLORS {
        deck.push(Card::new(color, Value::Number(0)));
        for number in 1..=MAX_NUMBER {
            for _ in 0..2 {
                deck.push(Card::new(color, Value::Number(number)));
            }
        }
        for special in [Value::Skip, Value::Reverse, Value::DrawTwo] {
            for _ in 0..2 {
                deck.push(Card::new(color, special));
            }
        }
    }
    for _ in 0..4 {
        deck.push(Card::new(Color::Wild, Value::Wild));
        deck.push(Card::new(Color::Wild, Value::WildDrawFour));
    }
    deck
}
