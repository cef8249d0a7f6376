// src/specs/detect.rs
//! Which of the three page shapes are we looking at?

use scraper::{ ElementRef, Html };

use crate::config::consts::{ SourceKind, BR_CONTRACTS_TABLE_ID, SPOTRAC_TABLE_ID };
use crate::core::html::{ first, table_by_id, TR };
use crate::store::RecordSet;

use super::ranking_list::extract_ranking_list;
use super::table::{ extract_table, FirstCell };

#[derive(Clone, Copy, Debug)]
pub enum Strategy<'a> {
    /// Spotrac `table#table` with at least one row.
    KeyedTable(ElementRef<'a>),
    /// Spotrac `li.list-group-item` widget, read from the whole document.
    RankingList,
    /// baseball-reference `table#largest_contracts`.
    RankingTable(ElementRef<'a>),
}

/// Pick the strategy for `doc`. `None` means no known structure is present.
pub fn detect(doc: &Html, kind: SourceKind) -> Option<Strategy<'_>> {
    match kind {
        SourceKind::BaseballReference => {
            table_by_id(doc, BR_CONTRACTS_TABLE_ID).map(Strategy::RankingTable)
        }
        SourceKind::Spotrac => {
            let table = table_by_id(doc, SPOTRAC_TABLE_ID)
                .filter(|t| first(*t, &TR).is_some());
            Some(match table {
                Some(t) => Strategy::KeyedTable(t),
                None => Strategy::RankingList,
            })
        }
    }
}

impl<'a> Strategy<'a> {
    pub fn extract(&self, doc: &Html) -> Option<RecordSet> {
        match *self {
            Strategy::KeyedTable(t) => extract_table(t, FirstCell::WhenPresent),
            Strategy::RankingList => extract_ranking_list(doc),
            Strategy::RankingTable(t) => extract_table(t, FirstCell::Always),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Strategy::KeyedTable(_) => "table format",
            Strategy::RankingList => "list format",
            Strategy::RankingTable(_) => "baseball-reference format",
        }
    }
}
