//! Scores command implementation - print the stored high-score table.

use super::{CliError, OutputFormat};
use snake2::HighScoreTable;
use std::fmt::Write as _;
use std::path::PathBuf;

/// Execute the scores command.
///
/// # Errors
///
/// Returns an error if the store location is unknown or the table cannot be
/// serialized.
pub(crate) fn execute(scores: Option<PathBuf>, format: OutputFormat) -> Result<(), CliError> {
    let path = super::scores_path(scores)?;
    let table = HighScoreTable::load_or_default(&path);

    match format {
        OutputFormat::Text => print!("{}", format_text(&table)),
        OutputFormat::Json => println!("{}", table.to_json()?),
    }
    Ok(())
}

/// Format the table as ranked lines.
fn format_text(table: &HighScoreTable) -> String {
    let mut output = String::from("High Scores\n");
    for (rank, entry) in table.entries().iter().enumerate() {
        let _ = writeln!(output, "  {:>2}. {}  {:>5}", rank + 1, entry.name, entry.score);
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_text_ranks_entries() {
        let mut table = HighScoreTable::new();
        let rank = table.insert(120).unwrap();
        table.set_name(rank, "MIK");
        let text = format_text(&table);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[1], "   1. MIK    120");
        assert_eq!(lines[10], "  10. ---      0");
    }
}
