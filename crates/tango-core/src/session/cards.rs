//! Flashcard browser over the current pool.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::model::Entry;
use crate::pool::Pool;
use crate::session::Phase;

/// Which side of the card is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardFace {
    #[default]
    En,
    Jp,
}

impl CardFace {
    pub fn flipped(self) -> Self {
        match self {
            CardFace::En => CardFace::Jp,
            CardFace::Jp => CardFace::En,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CardDeck {
    cards: Vec<Entry>,
    index: usize,
    face: CardFace,
    phase: Phase,
}

impl CardDeck {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the pool's entries in order. An empty pool changes nothing.
    pub fn open(&mut self, pool: &Pool) -> bool {
        if pool.is_empty() {
            return false;
        }
        self.cards = pool.entries().to_vec();
        self.index = 0;
        self.face = CardFace::En;
        self.phase = Phase::Active;
        tracing::debug!(cards = self.cards.len(), "card deck opened");
        true
    }

    pub fn close(&mut self) {
        *self = Self::default();
    }

    pub fn next(&mut self) {
        if self.phase == Phase::Active {
            self.index = (self.index + 1) % self.cards.len();
            self.face = CardFace::En;
        }
    }

    pub fn prev(&mut self) {
        if self.phase == Phase::Active {
            self.index = (self.index + self.cards.len() - 1) % self.cards.len();
            self.face = CardFace::En;
        }
    }

    pub fn flip(&mut self) {
        if self.phase == Phase::Active {
            self.face = self.face.flipped();
        }
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.phase == Phase::Active {
            self.cards.shuffle(rng);
            self.index = 0;
            self.face = CardFace::En;
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn face(&self) -> CardFace {
        self.face
    }

    pub fn current(&self) -> Option<&Entry> {
        match self.phase {
            Phase::Active => self.cards.get(self.index),
            _ => None,
        }
    }

    /// Text on the visible face.
    pub fn text(&self) -> Option<&str> {
        self.current().map(|e| match self.face {
            CardFace::En => e.en.as_str(),
            CardFace::Jp => e.jp.as_str(),
        })
    }

    /// One-based position and deck size.
    pub fn progress(&self) -> (usize, usize) {
        match self.phase {
            Phase::Active => (self.index + 1, self.cards.len()),
            _ => (0, 0),
        }
    }
}
