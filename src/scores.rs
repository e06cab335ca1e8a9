//! High scores: the persisted top-ten table and the name editor.

pub mod editor;
pub mod table;

pub use editor::{EditStep, NameEditor};
pub use table::{
    HighScoreEntry, HighScoreTable, NAME_LENGTH, PLACEHOLDER_NAME, TABLE_SIZE, default_store_path,
};
