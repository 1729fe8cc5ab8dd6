//! Memory card matching game

use super::{ActivityKind, ActivityOutcome};
use crate::models::catalog::MEMORY_EMOJIS;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

pub const PAIRS: usize = 6;
pub const MAX_EXPERIENCE: i64 = 100;
pub const MIN_EXPERIENCE: i64 = 50;
pub const PENALTY_PER_MOVE: i64 = 5;
pub const MASTER_MOVES: u32 = 8;
pub const MASTER_BADGE: &str = "Memory Master!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub face: &'static str,
    pub flipped: bool,
    pub matched: bool,
}

/// What happened when a card was flipped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipResult {
    /// Card index out of range, already face up, or game over
    Ignored,
    /// First card of a pair is showing
    FirstCard,
    /// Second card matched the first
    Match,
    /// Second card did not match; both hide on the next flip
    Mismatch,
}

#[derive(Debug, Clone)]
pub struct MemoryGame {
    cards: Vec<Card>,
    open: Vec<usize>,
    moves: u32,
    matches: usize,
}

impl MemoryGame {
    /// Deal a freshly shuffled board
    pub fn new() -> Self {
        Self::with_rng(&mut SmallRng::from_entropy())
    }

    /// Deal a board with a fixed shuffle
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(&mut SmallRng::seed_from_u64(seed))
    }

    pub fn with_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut faces: Vec<&'static str> = MEMORY_EMOJIS[..PAIRS]
            .iter()
            .chain(MEMORY_EMOJIS[..PAIRS].iter())
            .copied()
            .collect();
        faces.shuffle(rng);

        Self {
            cards: faces
                .into_iter()
                .map(|face| Card {
                    face,
                    flipped: false,
                    matched: false,
                })
                .collect(),
            open: Vec::with_capacity(2),
            moves: 0,
            matches: 0,
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn matches(&self) -> usize {
        self.matches
    }

    pub fn is_complete(&self) -> bool {
        self.matches == PAIRS
    }

    /// Turn a card face up. Two unmatched open cards are hidden first.
    pub fn flip(&mut self, index: usize) -> FlipResult {
        if self.is_complete() {
            return FlipResult::Ignored;
        }
        if self.open.len() == 2 {
            self.hide_open();
        }
        match self.cards.get(index) {
            Some(card) if !card.flipped && !card.matched => {}
            _ => return FlipResult::Ignored,
        }

        self.cards[index].flipped = true;
        self.open.push(index);
        if self.open.len() < 2 {
            return FlipResult::FirstCard;
        }

        self.moves += 1;
        let (first, second) = (self.open[0], self.open[1]);
        if self.cards[first].face == self.cards[second].face {
            self.cards[first].matched = true;
            self.cards[second].matched = true;
            self.open.clear();
            self.matches += 1;
            FlipResult::Match
        } else {
            FlipResult::Mismatch
        }
    }

    fn hide_open(&mut self) {
        for index in self.open.drain(..) {
            self.cards[index].flipped = false;
        }
    }

    /// Experience for the current move count
    pub fn experience(&self) -> u64 {
        super::clamp_experience(
            (MAX_EXPERIENCE - self.moves as i64 * PENALTY_PER_MOVE).max(MIN_EXPERIENCE),
        )
    }

    /// Reward for a finished board
    pub fn outcome(&self) -> Option<ActivityOutcome> {
        if !self.is_complete() {
            return None;
        }
        let outcome = ActivityOutcome::new(ActivityKind::MiniGame, self.experience());
        if self.moves <= MASTER_MOVES {
            Some(outcome.with_badge(MASTER_BADGE))
        } else {
            Some(outcome)
        }
    }
}

impl Default for MemoryGame {
    fn default() -> Self {
        Self::new()
    }
}
