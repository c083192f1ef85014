use crate::card::{Card, Color, INITIAL_HAND_SIZE, MAX_PLAYERS, MIN_PLAYERS, Value};
use crate::deck::Deck;
use crate::error::{GameError, InvalidPlay};
use crate::player::{Player, PlayerId};
use crate::state::{GameStateView, GameStatus, PlayerPublicState, TurnState};
use crate::turn::TurnController;

const DEFAULT_SEED: u64 = 0xD15C_A12D_D15C_A12D;

/// Builder that enables seeding and deterministic deck injection for tests.
pub struct GameBuilder {
    seed: u64,
    deck: Option<Vec<Card>>,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self {
            seed: DEFAULT_SEED,
            deck: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Use `deck` as the draw pile verbatim (top is the last element) instead
    /// of a shuffled full deck.
    pub fn with_deck(mut self, deck: Vec<Card>) -> Self {
        self.deck = Some(deck);
        self
    }

    pub fn build(self) -> Game {
        let deck = match self.deck {
            Some(cards) => Deck::from_cards(cards, self.seed),
            None => Deck::new(self.seed),
        };
        Game {
            deck,
            players: Vec::new(),
            turn: TurnController::new(),
            turn_state: TurnState::AwaitingPlay,
            status: GameStatus::Lobby,
        }
    }
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Core Uno game engine.
///
/// The engine owns the deck, the discard pile and every hand; external
/// callers act through [`Game::play_card`] and [`Game::draw_card`] and
/// observe through the read-only queries. All operations complete
/// synchronously and a rejected operation leaves the state untouched.
pub struct Game {
    deck: Deck,
    players: Vec<Player>,
    turn: TurnController,
    turn_state: TurnState,
    status: GameStatus,
}

impl Game {
    pub fn builder() -> GameBuilder {
        GameBuilder::new()
    }

    pub fn new() -> Self {
        GameBuilder::new().build()
    }

    /// Seats a new player and deals their opening hand.
    pub fn add_player(&mut self, name: impl Into<String>) -> Result<PlayerId, GameError> {
        if !matches!(self.status, GameStatus::Lobby) {
            return Err(GameError::GameAlreadyStarted);
        }
        if self.players.len() >= MAX_PLAYERS {
            return Err(GameError::TooManyPlayers(MAX_PLAYERS));
        }
        // Full atomicity: never deal a partial hand.
        if self.deck.draw_count() < INITIAL_HAND_SIZE {
            return Err(GameError::InvalidConfiguration(
                "deck cannot cover an opening hand",
            ));
        }
        let mut player = Player::new(name);
        for card in self.deck.draw(INITIAL_HAND_SIZE) {
            player.add_card(card);
        }
        let id = self.players.len();
        self.players.push(player);
        Ok(id)
    }

    /// Places the opening discard and opens play to the first seated player.
    pub fn start_game(&mut self) -> Result<(), GameError> {
        if !matches!(self.status, GameStatus::Lobby) {
            return Err(GameError::GameAlreadyStarted);
        }
        if self.players.len() < MIN_PLAYERS {
            return Err(GameError::NotEnoughPlayers);
        }
        self.deck
            .place_opening_card()
            .ok_or(GameError::InvalidConfiguration(
                "no colored card available for the opening discard",
            ))?;
        self.status = GameStatus::Ongoing;
        Ok(())
    }

    /// Plays the card at `hand_index` from `player`'s hand onto the discard
    /// pile. Wild cards must arrive with a chosen real color; while a Draw
    /// Two stack is pending only another Draw Two is accepted.
    pub fn play_card(
        &mut self,
        player: PlayerId,
        hand_index: usize,
        chosen_color: Option<Color>,
    ) -> Result<(), GameError> {
        self.ensure_active()?;
        if player >= self.players.len() {
            return Err(GameError::InvalidPlayer(player));
        }
        if player != self.turn.current() {
            return Err(GameError::NotYourTurn);
        }
        let card = *self.players[player]
            .hand()
            .get(hand_index)
            .ok_or(InvalidPlay::InvalidCardIndex(hand_index))?;
        if let TurnState::PendingDraw { count } = self.turn_state {
            if !card.is_draw_two() {
                return Err(InvalidPlay::MustStackOrDraw { pending: count }.into());
            }
        }
        let top = self.top_card().ok_or(GameError::GameNotStarted)?;
        if !card.is_playable(&top) {
            return Err(InvalidPlay::CardNotPlayable.into());
        }
        let played = if card.is_wild() {
            match chosen_color {
                None => return Err(InvalidPlay::WildRequiresColor.into()),
                Some(color) if !color.is_real() => {
                    return Err(InvalidPlay::WildColorInvalid.into());
                }
                Some(color) => card.with_color(color),
            }
        } else {
            card
        };

        // Every guard has passed; from here the play commits.
        self.players[player].remove_card(hand_index)?;
        self.deck.discard(played);
        self.apply_effect(played);
        if self.players[player].hand().is_empty() {
            self.status = GameStatus::Finished { winner: player };
        }
        Ok(())
    }

    /// Voluntary draw, or absorption of a pending Draw Two stack.
    ///
    /// Outside a pending stack the player draws one card and keeps the turn
    /// only if the hand now holds a playable card. With a stack pending the
    /// full accumulated penalty is taken and the turn moves on.
    pub fn draw_card(&mut self, player: PlayerId) -> Result<(), GameError> {
        self.ensure_active()?;
        if player >= self.players.len() {
            return Err(GameError::InvalidPlayer(player));
        }
        if player != self.turn.current() {
            return Err(GameError::NotYourTurn);
        }
        let player_count = self.players.len();
        match self.turn_state {
            TurnState::PendingDraw { count } => {
                self.deal_penalty(player, count);
                self.turn_state = TurnState::AwaitingPlay;
                self.turn.advance(player_count);
            }
            TurnState::AwaitingPlay => {
                if let Some(card) = self.deck.draw_one() {
                    self.players[player].add_card(card);
                }
                let top = self.top_card().ok_or(GameError::GameNotStarted)?;
                if !self.players[player].has_playable_card(&top) {
                    self.turn.advance(player_count);
                }
            }
        }
        Ok(())
    }

    /// The current play target.
    pub fn top_card(&self) -> Option<Card> {
        self.deck.top_card().copied()
    }

    pub fn hand(&self, player: PlayerId) -> Result<&[Card], GameError> {
        self.players
            .get(player)
            .map(Player::hand)
            .ok_or(GameError::InvalidPlayer(player))
    }

    pub fn current_player(&self) -> PlayerId {
        self.turn.current()
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn turn_state(&self) -> TurnState {
        self.turn_state
    }

    pub fn is_game_over(&self) -> (bool, Option<PlayerId>) {
        match self.status {
            GameStatus::Finished { winner } => (true, Some(winner)),
            _ => (false, None),
        }
    }

    pub fn winner(&self) -> Option<PlayerId> {
        self.is_game_over().1
    }

    pub fn draw_pile_count(&self) -> usize {
        self.deck.draw_count()
    }

    pub fn discard_pile_count(&self) -> usize {
        self.deck.discard_count()
    }

    /// Snapshot of the state observable from `perspective`'s seat.
    pub fn state_view(&self, perspective: PlayerId) -> Result<GameStateView, GameError> {
        if perspective >= self.players.len() {
            return Err(GameError::InvalidPlayer(perspective));
        }
        let players = self
            .players
            .iter()
            .enumerate()
            .map(|(id, player)| PlayerPublicState {
                id,
                name: player.name().to_owned(),
                hand_size: player.hand_size(),
                is_current: id == self.turn.current(),
            })
            .collect();
        Ok(GameStateView {
            status: self.status,
            turn_state: self.turn_state,
            current_player: self.turn.current(),
            direction: self.turn.direction(),
            top_card: self.top_card(),
            draw_pile_count: self.deck.draw_count(),
            discard_pile_count: self.deck.discard_count(),
            players,
            hand: self.players[perspective].hand().to_vec(),
        })
    }

    fn ensure_active(&self) -> Result<(), GameError> {
        match self.status {
            GameStatus::Lobby => Err(GameError::GameNotStarted),
            GameStatus::Finished { .. } => Err(GameError::GameOver),
            GameStatus::Ongoing => Ok(()),
        }
    }

    /// Applies a committed card's effect on the turn order and any penalty.
    fn apply_effect(&mut self, card: Card) {
        let player_count = self.players.len();
        match card.value {
            Value::Number(_) | Value::Wild => {
                self.turn.advance(player_count);
            }
            Value::Skip => {
                self.turn.advance(player_count);
                self.turn.advance(player_count);
            }
            Value::Reverse => {
                self.turn.reverse_direction();
                // Head-to-head a Reverse acts as a Skip.
                if player_count == 2 {
                    self.turn.advance(player_count);
                }
                self.turn.advance(player_count);
            }
            Value::DrawTwo => {
                let count = self.turn_state.pending_count() + 2;
                let next = self.turn.peek_next(player_count);
                if self.players[next].has_draw_two() {
                    // Pass the buck: the stack stays unresolved and the next
                    // player must counter or absorb it.
                    self.turn_state = TurnState::PendingDraw { count };
                } else {
                    self.deal_penalty(next, count);
                    self.turn_state = TurnState::AwaitingPlay;
                }
                self.turn.advance(player_count);
            }
            Value::WildDrawFour => {
                // Never stacks: the four cards land immediately.
                let next = self.turn.peek_next(player_count);
                self.deal_penalty(next, 4);
                self.turn.advance(player_count);
            }
        }
    }

    /// Moves up to `count` penalty cards into `to`'s hand. Short supply means
    /// a smaller penalty, not a failure.
    fn deal_penalty(&mut self, to: PlayerId, count: usize) {
        for card in self.deck.draw(count) {
            self.players[to].add_card(card);
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
