//! Starting layout dataset.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::error::GiveawayError;
use crate::types::{BOARD_SIZE, Position};

const DEFAULT_LAYOUT_JSON: &str = include_str!("../data/started-position.json");

static DEFAULT_LAYOUT: Lazy<StartingPosition> = Lazy::new(|| {
    // Embedded data is covered by `default_layout_is_standard_checkers_setup`.
    StartingPosition::from_json(DEFAULT_LAYOUT_JSON).unwrap_or_else(|err| {
        log::error!("embedded starting position rejected: {err}");
        StartingPosition::default()
    })
});

/// Initial chip placements per color. Always on the board and never
/// overlapping; build one with `new` or `from_json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StartingPosition {
    pub(crate) black: Vec<Position>,
    pub(crate) white: Vec<Position>,
}

impl StartingPosition {
    pub fn new(black: Vec<Position>, white: Vec<Position>) -> Result<Self, GiveawayError> {
        let layout = Self { black, white };
        layout.validate()?;
        Ok(layout)
    }

    /// Parses `{"black": [{"row": r, "column": c}, ..], "white": [..]}` and
    /// rejects off-board or overlapping entries.
    pub fn from_json(json: &str) -> Result<Self, GiveawayError> {
        let layout: Self = serde_json::from_str(json)?;
        layout.validate()?;
        Ok(layout)
    }

    /// The standard layout shipped with the crate.
    pub fn standard() -> &'static StartingPosition {
        &DEFAULT_LAYOUT
    }

    pub fn black(&self) -> &[Position] {
        &self.black
    }

    pub fn white(&self) -> &[Position] {
        &self.white
    }

    pub fn chip_count(&self) -> usize {
        self.black.len() + self.white.len()
    }

    fn validate(&self) -> Result<(), GiveawayError> {
        let mut seen = HashSet::with_capacity(self.chip_count());
        for &pos in self.black.iter().chain(self.white.iter()) {
            if pos.row as usize >= BOARD_SIZE || pos.col as usize >= BOARD_SIZE {
                return Err(GiveawayError::StartOffBoard {
                    row: pos.row,
                    col: pos.col,
                });
            }
            if !seen.insert(pos) {
                return Err(GiveawayError::StartOverlap(pos));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_is_standard_checkers_setup() {
        let layout = StartingPosition::from_json(DEFAULT_LAYOUT_JSON).expect("embedded layout");

        assert_eq!(layout.black.len(), 12);
        assert_eq!(layout.white.len(), 12);
        assert!(layout.black.iter().all(|p| p.row < 3));
        assert!(layout.white.iter().all(|p| p.row > 4));
        assert!(
            layout
                .black
                .iter()
                .chain(layout.white.iter())
                .all(|p| (p.row + p.col) % 2 == 1)
        );
        assert_eq!(StartingPosition::standard(), &layout);
    }

    #[test]
    fn from_json_rejects_off_board_entries() {
        let err = StartingPosition::from_json(r#"{"black":[{"row":8,"column":0}],"white":[]}"#)
            .unwrap_err();

        assert!(matches!(err, GiveawayError::StartOffBoard { row: 8, col: 0 }));
    }

    #[test]
    fn new_rejects_off_board_entries() {
        let err = StartingPosition::new(vec![Position::new(0, 8)], Vec::new()).unwrap_err();

        assert!(matches!(err, GiveawayError::StartOffBoard { row: 0, col: 8 }));
        assert!(StartingPosition::new(vec![Position::new(0, 7)], Vec::new()).is_ok());
    }

    #[test]
    fn from_json_rejects_overlapping_entries() {
        let err = StartingPosition::from_json(
            r#"{"black":[{"row":1,"column":0}],"white":[{"row":1,"column":0}]}"#,
        )
        .unwrap_err();

        assert!(err.to_string().contains("two chips"));
    }

    #[test]
    fn from_json_reports_malformed_data() {
        let err = StartingPosition::from_json(r#"{"black":"#).unwrap_err();

        assert!(matches!(err, GiveawayError::StartingPositionJson(_)));
    }
}
