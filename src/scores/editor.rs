//! Letter-by-letter entry of a three-letter name.

use super::table::NAME_LENGTH;

/// Result of confirming a letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditStep {
    /// Moved on to the letter at this index.
    Next(usize),
    /// All letters confirmed; the finished name.
    Done(String),
}

/// Editing state for the name of one high-score entry.
///
/// Each letter starts unset. Scrolling cycles the active letter through
/// `A..=Z`; confirming moves to the next letter, which starts from the
/// letter just confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameEditor {
    rank: usize,
    index: usize,
    letters: [Option<u8>; NAME_LENGTH],
    blink_visible: bool,
}

impl NameEditor {
    /// Start editing the entry at `rank`.
    #[must_use]
    pub const fn new(rank: usize) -> Self {
        Self {
            rank,
            index: 0,
            letters: [None; NAME_LENGTH],
            blink_visible: true,
        }
    }

    /// Rank of the entry being edited.
    #[must_use]
    pub const fn rank(&self) -> usize {
        self.rank
    }

    /// Index of the active letter.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Letter values, 0 for `A` through 25 for `Z`.
    #[must_use]
    pub const fn letters(&self) -> [Option<u8>; NAME_LENGTH] {
        self.letters
    }

    /// Whether the active letter is currently shown.
    #[must_use]
    pub const fn blink_visible(&self) -> bool {
        self.blink_visible
    }

    /// Flip the active letter's visibility.
    pub fn toggle_blink(&mut self) {
        self.blink_visible = !self.blink_visible;
    }

    /// Cycle the active letter forward (`+1`) or back (`-1`).
    ///
    /// An unset letter becomes `A` going forward and `Z` going back.
    pub fn scroll(&mut self, delta: i32) {
        let Some(slot) = self.letters.get_mut(self.index) else {
            return;
        };
        let next = match *slot {
            Some(value) => (i32::from(value) + delta).rem_euclid(26),
            None if delta >= 0 => delta.saturating_sub(1).rem_euclid(26),
            None => (26 + delta).rem_euclid(26),
        };
        // In 0..26 after rem_euclid.
        *slot = Some(next as u8);
        self.blink_visible = true;
    }

    /// Confirm the active letter. An unset letter is taken as `A`.
    pub fn confirm(&mut self) -> EditStep {
        let value = self.letters[self.index].unwrap_or(0);
        self.letters[self.index] = Some(value);
        self.blink_visible = true;

        if self.index + 1 >= NAME_LENGTH {
            return EditStep::Done(self.text('A'));
        }
        self.index += 1;
        self.letters[self.index] = Some(value);
        EditStep::Next(self.index)
    }

    /// The name as typed so far, with `unset` for empty letters.
    #[must_use]
    pub fn text(&self, unset: char) -> String {
        self.letters
            .iter()
            .map(|letter| letter.map_or(unset, |v| char::from(b'A' + v)))
            .collect()
    }

    /// The name as shown on screen: the active letter disappears while the
    /// blink is off.
    #[must_use]
    pub fn display_text(&self) -> String {
        self.letters
            .iter()
            .enumerate()
            .map(|(i, letter)| {
                if i == self.index && !self.blink_visible {
                    ' '
                } else {
                    letter.map_or('-', |v| char::from(b'A' + v))
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_from_unset() {
        let mut editor = NameEditor::new(0);
        editor.scroll(1);
        assert_eq!(editor.text('-'), "A--");

        let mut editor = NameEditor::new(0);
        editor.scroll(-1);
        assert_eq!(editor.text('-'), "Z--");
    }

    #[test]
    fn test_scroll_wraps() {
        let mut editor = NameEditor::new(0);
        editor.scroll(-1);
        editor.scroll(1);
        assert_eq!(editor.text('-'), "A--");
        editor.scroll(-1);
        editor.scroll(-1);
        assert_eq!(editor.text('-'), "Y--");
    }

    #[test]
    fn test_confirm_carries_letter_forward() {
        let mut editor = NameEditor::new(2);
        editor.scroll(1);
        editor.scroll(1);
        assert_eq!(editor.confirm(), EditStep::Next(1));
        assert_eq!(editor.text('-'), "BB-");
        editor.scroll(1);
        assert_eq!(editor.confirm(), EditStep::Next(2));
        assert_eq!(editor.confirm(), EditStep::Done("BCC".to_string()));
        assert_eq!(editor.rank(), 2);
    }

    #[test]
    fn test_confirm_unset_is_a() {
        let mut editor = NameEditor::new(0);
        editor.confirm();
        editor.confirm();
        assert_eq!(editor.confirm(), EditStep::Done("AAA".to_string()));
    }

    #[test]
    fn test_blink_only_hides_display() {
        let mut editor = NameEditor::new(0);
        editor.scroll(1);
        editor.toggle_blink();
        assert!(!editor.blink_visible());
        assert_eq!(editor.display_text(), " --");
        assert_eq!(editor.text('-'), "A--");
        // Scrolling shows the letter again.
        editor.scroll(1);
        assert_eq!(editor.display_text(), "B--");
    }
}
