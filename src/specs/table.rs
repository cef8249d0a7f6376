// src/specs/table.rs
//! `<table>` with a `<thead>` of `<th>` headers and a `<tbody>` of rows.
//!
//! Two pages use this shape and differ only in how a row's leading `<th>`
//! (rank, season) is treated; see [`FirstCell`].

use scraper::ElementRef;

use crate::core::html::{ first, text, TBODY, TD, TH, THEAD, TR };
use crate::store::RecordSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FirstCell {
    /// Prepend the row's `<th>` only if it has one (spotrac).
    WhenPresent,
    /// Always prepend the row's `<th>`, "" if missing (baseball-reference).
    Always,
}

/// Headers from the first `<thead>`, rows from the first `<tbody>`.
/// Missing either section means there is nothing to read.
pub fn extract_table(table: ElementRef, first_cell: FirstCell) -> Option<RecordSet> {
    let thead = first(table, &THEAD)?;
    let tbody = first(table, &TBODY)?;

    let headers: Vec<String> = thead.select(&TH).map(text).collect();
    let rows = tbody.select(&TR).map(|tr| read_row(tr, first_cell));

    RecordSet::collect(headers, rows)
}

fn read_row(tr: ElementRef, first_cell: FirstCell) -> Vec<String> {
    let mut cells: Vec<String> = tr.select(&TD).map(text).collect();
    let lead = first(tr, &TH).map(text);

    match (first_cell, lead) {
        (_, Some(th)) => cells.insert(0, th),
        (FirstCell::Always, None) => cells.insert(0, s!()),
        (FirstCell::WhenPresent, None) => {}
    }
    cells
}
