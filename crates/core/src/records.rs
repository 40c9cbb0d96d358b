//! Records module - best score per player
//!
//! The leaderboard keeps one entry per player key and only replaces it with a
//! strictly better score. Persistence lives behind [`RecordStore`]; the core ships
//! an in-memory store and the `store` crate a JSON file one.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A solved game as it is written to the leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordEntry {
    pub player: String,
    pub score: u32,
    pub rows: u8,
    pub cols: u8,
    pub elapsed_secs: u32,
    pub moves: u32,
}

impl RecordEntry {
    pub fn board_label(&self) -> String {
        format!("{}x{}", self.rows, self.cols)
    }
}

/// Best entry per player.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Leaderboard {
    best: BTreeMap<String, RecordEntry>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `score` would become `player`'s new best.
    pub fn is_new_record(&self, player: &str, score: u32) -> bool {
        self.best.get(player).map_or(true, |prev| score > prev.score)
    }

    /// Insert `entry` if it beats the stored best. Returns `true` when stored.
    pub fn submit(&mut self, entry: RecordEntry) -> bool {
        if !self.is_new_record(&entry.player, entry.score) {
            return false;
        }
        self.best.insert(entry.player.clone(), entry);
        true
    }

    pub fn best(&self, player: &str) -> Option<&RecordEntry> {
        self.best.get(player)
    }

    pub fn len(&self) -> usize {
        self.best.len()
    }

    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }

    /// Entries by score, highest first; ties by player name.
    pub fn ranked(&self) -> Vec<&RecordEntry> {
        let mut out: Vec<&RecordEntry> = self.best.values().collect();
        out.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.player.cmp(&b.player)));
        out
    }
}

/// Somewhere leaderboards are loaded from and saved to.
pub trait RecordStore {
    type Error;

    fn load(&mut self) -> Result<Leaderboard, Self::Error>;

    fn save(&mut self, board: &Leaderboard) -> Result<(), Self::Error>;

    /// Load, apply the record rule, and save only when the entry was stored.
    fn submit(&mut self, entry: RecordEntry) -> Result<bool, Self::Error> {
        let mut board = self.load()?;
        let stored = board.submit(entry);
        if stored {
            self.save(&board)?;
        }
        Ok(stored)
    }
}

/// Store that keeps the leaderboard in memory only.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    board: Leaderboard,
    saves: u32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times `save` ran.
    pub fn saves(&self) -> u32 {
        self.saves
    }
}

impl RecordStore for MemoryStore {
    type Error = std::convert::Infallible;

    fn load(&mut self) -> Result<Leaderboard, Self::Error> {
        Ok(self.board.clone())
    }

    fn save(&mut self, board: &Leaderboard) -> Result<(), Self::Error> {
        self.board = board.clone();
        self.saves += 1;
        Ok(())
    }
}
