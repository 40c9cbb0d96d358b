//! Leaderboard persistence as a JSON file.
//!
//! The file holds the best entry per player:
//!
//! ```text
//! {"version":1,"records":{"ana":{"player":"ana","score":131220,"rows":9,"cols":9,"elapsed_secs":0,"moves":5}}}
//! ```
//!
//! A missing file is an empty leaderboard. Saves go to a sibling temp file that is
//! then renamed over the target, so a crash mid-write leaves the old file intact.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};

use tui_pipes_core::{Leaderboard, RecordStore};

pub use tui_pipes_core as core;

/// Current on-disk format version.
pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct RecordsFile {
    version: u32,
    records: Leaderboard,
}

/// JSON-file backed [`RecordStore`].
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

/// Parse a leaderboard document.
pub fn decode(text: &str) -> Result<Leaderboard> {
    let file: RecordsFile = serde_json::from_str(text).context("invalid leaderboard JSON")?;
    if file.version != FORMAT_VERSION {
        bail!("unsupported leaderboard version {}", file.version);
    }
    Ok(file.records)
}

/// Serialize a leaderboard document.
pub fn encode(board: &Leaderboard) -> Result<String> {
    let file = RecordsFile {
        version: FORMAT_VERSION,
        records: board.clone(),
    };
    Ok(serde_json::to_string_pretty(&file)?)
}

impl RecordStore for JsonFileStore {
    type Error = anyhow::Error;

    fn load(&mut self) -> Result<Leaderboard> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("no leaderboard at {}, starting empty", self.path.display());
                return Ok(Leaderboard::new());
            }
            Err(e) => {
                return Err(e).with_context(|| format!("reading {}", self.path.display()));
            }
        };
        decode(&text).with_context(|| format!("loading {}", self.path.display()))
    }

    fn save(&mut self, board: &Leaderboard) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
        }
        let tmp = self.temp_path();
        fs::write(&tmp, encode(board)?).with_context(|| format!("writing {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("replacing {}", self.path.display()))?;
        debug!(
            "saved {} leaderboard entries to {}",
            board.len(),
            self.path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_pipes_core::RecordEntry;

    fn entry(player: &str, score: u32) -> RecordEntry {
        RecordEntry {
            player: player.to_string(),
            score,
            rows: 9,
            cols: 12,
            elapsed_secs: 41,
            moves: 23,
        }
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("records.json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn submit_persists_best_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("records.json");
        let mut store = JsonFileStore::new(&path);

        assert!(store.submit(entry("ana", 700)).unwrap());
        assert!(!store.submit(entry("ana", 600)).unwrap());
        assert!(store.submit(entry("bo", 50)).unwrap());

        let mut reopened = JsonFileStore::new(&path);
        let board = reopened.load().unwrap();
        assert_eq!(board.len(), 2);
        assert_eq!(board.best("ana").unwrap().score, 700);
        assert!(!store.temp_path().exists());
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.json");
        fs::write(&path, "{ not json").unwrap();
        let err = JsonFileStore::new(&path).load().unwrap_err();
        assert!(format!("{:#}", err).contains("invalid leaderboard JSON"));
    }

    #[test]
    fn unknown_version_is_rejected() {
        let err = decode(r#"{"version":9,"records":{}}"#).unwrap_err();
        assert!(err.to_string().contains("version 9"));
    }

    #[test]
    fn document_shape_is_keyed_by_player() {
        let mut board = Leaderboard::new();
        board.submit(entry("ana", 5));
        let text = encode(&board).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["version"], 1);
        assert_eq!(value["records"]["ana"]["score"], 5);
        assert_eq!(value["records"]["ana"]["cols"], 12);
    }
}
