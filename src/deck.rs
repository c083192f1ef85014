use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::card::{Card, full_deck};

/// Draw pile and discard pile, plus the engine-owned random generator used
/// for every shuffle. The top of either pile is the `Vec` tail.
///
/// Card supply is best-effort: when the draw pile runs short the discard pile
/// (minus its top card) is recycled, and if circulation still cannot cover a
/// request the caller receives whatever is left rather than an error.
#[derive(Debug)]
pub struct Deck {
    draw_pile: Vec<Card>,
    discard_pile: Vec<Card>,
    rng: StdRng,
}

impl Deck {
    /// Builds the canonical 108-card population and shuffles it.
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut draw_pile = full_deck();
        draw_pile.shuffle(&mut rng);
        Self {
            draw_pile,
            discard_pile: Vec::new(),
            rng,
        }
    }

    /// Uses `cards` as the draw pile verbatim (top is the last element).
    /// Intended for deterministic tests; the seed still drives reshuffles.
    pub fn from_cards(cards: Vec<Card>, seed: u64) -> Self {
        Self {
            draw_pile: cards,
            discard_pile: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Removes up to `n` cards from the top of the draw pile, recycling the
    /// discard pile first when the pile runs short. May return fewer than `n`
    /// cards when the whole circulation cannot cover the request.
    pub fn draw(&mut self, n: usize) -> Vec<Card> {
        if self.draw_pile.len() < n {
            self.reshuffle();
        }
        let mut drawn = Vec::with_capacity(n.min(self.draw_pile.len()));
        for _ in 0..n {
            match self.draw_pile.pop() {
                Some(card) => drawn.push(card),
                None => break,
            }
        }
        drawn
    }

    /// Draws a single card, recycling the discard pile if necessary.
    pub fn draw_one(&mut self) -> Option<Card> {
        self.draw(1).pop()
    }

    /// Pops the opening discard. A wild card may never start the pile: it is
    /// pushed back and the pile reshuffled until a colored card surfaces.
    /// Returns `None` only when the draw pile holds no non-wild card at all.
    pub fn place_opening_card(&mut self) -> Option<Card> {
        if !self.draw_pile.iter().any(|card| !card.is_wild()) {
            return None;
        }
        loop {
            let card = self.draw_pile.pop()?;
            if card.is_wild() {
                self.draw_pile.push(card);
                self.draw_pile.shuffle(&mut self.rng);
                continue;
            }
            self.discard_pile.push(card);
            return Some(card);
        }
    }

    /// Places a played card on top of the discard pile.
    pub fn discard(&mut self, card: Card) {
        self.discard_pile.push(card);
    }

    /// The current play target, if the game has an opening discard.
    pub fn top_card(&self) -> Option<&Card> {
        self.discard_pile.last()
    }

    pub fn draw_count(&self) -> usize {
        self.draw_pile.len()
    }

    pub fn discard_count(&self) -> usize {
        self.discard_pile.len()
    }

    /// Cards currently held by the deck manager (draw + discard).
    pub fn total_cards(&self) -> usize {
        self.draw_pile.len() + self.discard_pile.len()
    }

    /// Recycles everything below the discard top into the draw pile and
    /// shuffles. A singleton (or empty) discard pile cannot be recycled.
    fn reshuffle(&mut self) -> bool {
        if self.discard_pile.len() < 2 {
            return false;
        }
        let Some(top) = self.discard_pile.pop() else {
            return false;
        };
        self.draw_pile.append(&mut self.discard_pile);
        self.draw_pile.shuffle(&mut self.rng);
        self.discard_pile.push(top);
        true
    }
}
