// src/specs/player_stats.rs
//! Career tables on a baseball-reference player page.

use scraper::Html;

use crate::config::consts::{ BR_BATTING_TABLE_ID, BR_PITCHING_TABLE_ID, ENTITY_COLUMN };
use crate::core::html::table_by_id;
use crate::store::RecordSet;

use super::table::{ extract_table, FirstCell };

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatKind {
    Batting,
    Pitching,
}

impl StatKind {
    pub const ALL: [StatKind; 2] = [StatKind::Batting, StatKind::Pitching];

    pub fn table_id(self) -> &'static str {
        match self {
            StatKind::Batting => BR_BATTING_TABLE_ID,
            StatKind::Pitching => BR_PITCHING_TABLE_ID,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StatKind::Batting => "Batting",
            StatKind::Pitching => "Pitching",
        }
    }
}

/// The `kind` table for `player`, with a leading `Player` column.
/// `None` if the page has no such table or no usable rows.
pub fn extract_stats(doc: &Html, kind: StatKind, player: &str) -> Option<RecordSet> {
    let table = table_by_id(doc, kind.table_id())?;
    let mut rs = extract_table(table, FirstCell::Always)?;
    rs.prepend_column(ENTITY_COLUMN, player);
    Some(rs)
}
