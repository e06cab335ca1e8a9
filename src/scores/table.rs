//! The ranked top-ten table and its JSON store.
//!
//! The store is a JSON array of ten `[name, score]` pairs, best first:
//!
//! ```json
//! [["ABC", 120], ["---", 45], ["---", 0], ...]
//! ```

use crate::error::StorageError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Number of entries in the table.
pub const TABLE_SIZE: usize = 10;

/// Name shown for an entry nobody has signed yet.
pub const PLACEHOLDER_NAME: &str = "---";

/// Length of a player name.
pub const NAME_LENGTH: usize = 3;

/// One ranked entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, u32)", into = "(String, u32)")]
pub struct HighScoreEntry {
    /// Three uppercase letters, or [`PLACEHOLDER_NAME`].
    pub name: String,
    /// Final score.
    pub score: u32,
}

impl HighScoreEntry {
    /// An unsigned entry.
    #[must_use]
    pub fn placeholder(score: u32) -> Self {
        Self {
            name: PLACEHOLDER_NAME.to_string(),
            score,
        }
    }

    /// Whether a name has been entered.
    #[must_use]
    pub fn is_signed(&self) -> bool {
        self.name != PLACEHOLDER_NAME
    }
}

impl From<(String, u32)> for HighScoreEntry {
    fn from((name, score): (String, u32)) -> Self {
        Self { name, score }
    }
}

impl From<HighScoreEntry> for (String, u32) {
    fn from(entry: HighScoreEntry) -> Self {
        (entry.name, entry.score)
    }
}

/// Whether `name` is a valid stored name.
#[must_use]
pub fn is_valid_name(name: &str) -> bool {
    name == PLACEHOLDER_NAME
        || (name.len() == NAME_LENGTH && name.bytes().all(|b| b.is_ascii_uppercase()))
}

/// Ten entries sorted by score, best first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighScoreTable {
    entries: Vec<HighScoreEntry>,
}

impl Default for HighScoreTable {
    fn default() -> Self {
        Self {
            entries: vec![HighScoreEntry::placeholder(0); TABLE_SIZE],
        }
    }
}

impl HighScoreTable {
    /// Ten unsigned zero scores.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from entries.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Shape`] unless there are exactly ten entries,
    /// sorted best first, with valid names.
    pub fn from_entries(entries: Vec<HighScoreEntry>) -> Result<Self, StorageError> {
        if entries.len() != TABLE_SIZE {
            return Err(StorageError::Shape(format!(
                "expected {TABLE_SIZE} entries, found {}",
                entries.len()
            )));
        }
        if let Some(bad) = entries.iter().find(|e| !is_valid_name(&e.name)) {
            return Err(StorageError::Shape(format!("invalid name {:?}", bad.name)));
        }
        if entries.windows(2).any(|pair| pair[0].score < pair[1].score) {
            return Err(StorageError::Shape("entries are not sorted by score".to_string()));
        }
        Ok(Self { entries })
    }

    /// Entries, best first.
    #[must_use]
    pub fn entries(&self) -> &[HighScoreEntry] {
        &self.entries
    }

    /// The entry at `rank` (0 is best).
    #[must_use]
    pub fn get(&self, rank: usize) -> Option<&HighScoreEntry> {
        self.entries.get(rank)
    }

    /// Lowest score on the table.
    #[must_use]
    pub fn min_score(&self) -> u32 {
        self.entries.last().map_or(0, |e| e.score)
    }

    /// Whether `score` would earn a place. Ties with the lowest entry do not.
    #[must_use]
    pub fn is_qualifying(&self, score: u32) -> bool {
        score > self.min_score()
    }

    /// Insert an unsigned entry above the first lower score and drop the
    /// last entry. Returns the new entry's rank, or `None` if the score does
    /// not qualify.
    pub fn insert(&mut self, score: u32) -> Option<usize> {
        let rank = self.entries.iter().position(|e| e.score < score)?;
        self.entries.insert(rank, HighScoreEntry::placeholder(score));
        self.entries.truncate(TABLE_SIZE);
        tracing::info!(score, rank, "high score inserted");
        Some(rank)
    }

    /// Sign the entry at `rank`. Returns `false` for a bad rank or name.
    pub fn set_name(&mut self, rank: usize, name: &str) -> bool {
        if !is_valid_name(name) {
            return false;
        }
        let Some(entry) = self.entries.get_mut(rank) else {
            return false;
        };
        entry.name = name.to_string();
        tracing::info!(rank, name, score = entry.score, "high score signed");
        true
    }

    /// Parse a table from its JSON form.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not JSON or not a valid table.
    pub fn from_json(text: &str) -> Result<Self, StorageError> {
        let entries: Vec<HighScoreEntry> = serde_json::from_str(text)?;
        Self::from_entries(entries)
    }

    /// The JSON form.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, StorageError> {
        Ok(serde_json::to_string_pretty(&self.entries)?)
    }

    /// Read a table from a store file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid table.
    pub fn load(path: &Path) -> Result<Self, StorageError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Read a table, falling back to the default table if the store is
    /// missing or unreadable.
    #[must_use]
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(table) => table,
            Err(StorageError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no score store yet");
                Self::default()
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "score store unusable, starting fresh");
                Self::default()
            }
        }
    }

    /// Write the table to a store file, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), StorageError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, self.to_json()?)?;
        tracing::debug!(path = %path.display(), "score store saved");
        Ok(())
    }
}

/// Default store location (`~/.snake2/highscores.json`).
///
/// # Errors
///
/// Returns [`StorageError::NoHome`] if the home directory cannot be determined.
pub fn default_store_path() -> Result<PathBuf, StorageError> {
    let home = dirs::home_dir().ok_or(StorageError::NoHome)?;
    Ok(home.join(".snake2").join("highscores.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn scores(table: &HighScoreTable) -> Vec<u32> {
        table.entries().iter().map(|e| e.score).collect()
    }

    #[test]
    fn test_default_table() {
        let table = HighScoreTable::new();
        assert_eq!(table.entries().len(), TABLE_SIZE);
        assert!(table.entries().iter().all(|e| e.name == "---" && e.score == 0));
    }

    #[test]
    fn test_insert_into_default_table() {
        let mut table = HighScoreTable::new();
        assert_eq!(table.insert(50), Some(0));
        assert_eq!(table.entries().len(), TABLE_SIZE);
        assert_eq!(table.get(0), Some(&HighScoreEntry::placeholder(50)));
        assert_eq!(table.get(9), Some(&HighScoreEntry::placeholder(0)));
    }

    #[test]
    fn test_insert_ranks_and_drops_last() {
        let mut table = HighScoreTable::new();
        for score in [100, 90, 80, 70, 60, 50, 40, 30, 20, 10] {
            table.insert(score);
        }
        assert_eq!(table.insert(65), Some(4));
        assert_eq!(scores(&table), vec![100, 90, 80, 70, 65, 60, 50, 40, 30, 20]);
    }

    #[test]
    fn test_ties_keep_older_entry_first() {
        let mut table = HighScoreTable::new();
        table.insert(40);
        table.set_name(0, "OLD");
        assert_eq!(table.insert(40), Some(1));
        assert_eq!(table.get(0).unwrap().name, "OLD");
    }

    #[test]
    fn test_zero_never_qualifies() {
        let mut table = HighScoreTable::new();
        assert!(!table.is_qualifying(0));
        assert_eq!(table.insert(0), None);
        for score in 1..=10 {
            table.insert(score);
        }
        // Tie with the minimum does not qualify.
        assert!(!table.is_qualifying(1));
        assert!(table.is_qualifying(2));
        assert_eq!(table.insert(0), None);
        assert_eq!(table.entries().len(), TABLE_SIZE);
    }

    #[test]
    fn test_set_name_validates() {
        let mut table = HighScoreTable::new();
        assert!(table.set_name(3, "ABC"));
        assert!(!table.set_name(3, "abc"));
        assert!(!table.set_name(3, "ABCD"));
        assert!(!table.set_name(10, "ABC"));
        assert_eq!(table.get(3).unwrap().name, "ABC");
    }

    #[test]
    fn test_json_shape() {
        let mut table = HighScoreTable::new();
        table.insert(7);
        table.set_name(0, "SAM");
        let json = table.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0], serde_json::json!(["SAM", 7]));
        assert_eq!(value.as_array().unwrap().len(), TABLE_SIZE);
        assert_eq!(HighScoreTable::from_json(&json).unwrap(), table);
    }

    #[test]
    fn test_rejects_bad_shapes() {
        assert!(matches!(
            HighScoreTable::from_json(r#"[["ABC", 1]]"#),
            Err(StorageError::Shape(_))
        ));
        assert!(matches!(
            HighScoreTable::from_json("{\"not\": \"a table\"}"),
            Err(StorageError::Parse(_))
        ));
        let unsorted = serde_json::to_string(
            &(0..10).map(|i| ("---", i)).collect::<Vec<_>>(),
        )
        .unwrap();
        assert!(matches!(
            HighScoreTable::from_json(&unsorted),
            Err(StorageError::Shape(_))
        ));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("scores.json");

        let mut table = HighScoreTable::new();
        table.insert(120);
        table.set_name(0, "ZED");
        table.save(&path).unwrap();

        assert_eq!(HighScoreTable::load(&path).unwrap(), table);
    }

    #[test]
    fn test_load_or_default_tolerates_missing_and_corrupt() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        assert_eq!(HighScoreTable::load_or_default(&missing), HighScoreTable::new());

        let corrupt = dir.path().join("corrupt.json");
        fs::write(&corrupt, "not json at all").unwrap();
        assert_eq!(HighScoreTable::load_or_default(&corrupt), HighScoreTable::new());
    }

    #[test]
    fn test_default_store_path_under_home() {
        match (dirs::home_dir(), default_store_path()) {
            (Some(home), Ok(path)) => {
                assert_eq!(path, home.join(".snake2").join("highscores.json"));
            }
            (None, Err(e)) => assert!(matches!(e, StorageError::NoHome)),
            (home, path) => panic!("home {home:?} but store path {path:?}"),
        }
    }
}
