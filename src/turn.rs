use serde::{Deserialize, Serialize};

use crate::player::PlayerId;

/// Direction of play around the table.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }

    /// Seat offset applied per turn step.
    #[inline]
    fn offset(self) -> isize {
        match self {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => -1,
        }
    }
}

/// Tracks whose turn it is and which way play proceeds.
///
/// Only meaningful with at least two seated players; advancement wraps in
/// both directions.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TurnController {
    current: PlayerId,
    direction: Direction,
}

impl TurnController {
    pub fn new() -> Self {
        Self {
            current: 0,
            direction: Direction::Clockwise,
        }
    }

    pub fn current(&self) -> PlayerId {
        self.current
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The seat that would act next without advancing.
    pub fn peek_next(&self, player_count: usize) -> PlayerId {
        debug_assert!(player_count >= 2);
        let next = self.current as isize + self.direction.offset();
        next.rem_euclid(player_count as isize) as PlayerId
    }

    /// Moves the turn one seat along the current direction.
    pub fn advance(&mut self, player_count: usize) {
        self.current = self.peek_next(player_count);
    }

    pub fn reverse_direction(&mut self) {
        self.direction = self.direction.flipped();
    }
}

impl Default for TurnController {
    fn default() -> Self {
        Self::new()
    }
}
