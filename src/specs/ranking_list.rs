// src/specs/ranking_list.rs
//! Spotrac ranking widget: one `<li class="list-group-item">` per player.
//!
//! ```text
//! <li class="list-group-item">
//!   <div class="fs-3">1</div>            rank
//!   <div class="link">Juan Soto</div>    player
//!   <small>NYM, RF</small>               team/position
//!   <span>...</span><span>$51.0M</span>  value = last span
//! </li>
//! ```

use std::sync::LazyLock;

use scraper::{ Html, Selector };

use crate::core::html::{ first_text, sel, text, SMALL, SPAN };
use crate::store::RecordSet;

pub const HEADERS: [&str; 4] = ["Rank", "Player", "Team/Position", "Contract Value"];

static ITEM: LazyLock<Selector> = LazyLock::new(|| sel("li.list-group-item"));
static RANK: LazyLock<Selector> = LazyLock::new(|| sel("div.fs-3"));
static NAME: LazyLock<Selector> = LazyLock::new(|| sel("div.link"));

/// Every list item becomes one 4-column row; missing parts become "".
/// No list items at all means no record set.
pub fn extract_ranking_list(doc: &Html) -> Option<RecordSet> {
    let rows = doc.select(&ITEM).map(|li| {
        vec![
            first_text(li, &RANK),
            first_text(li, &NAME),
            first_text(li, &SMALL),
            li.select(&SPAN).last().map(text).unwrap_or_default(),
        ]
    });

    RecordSet::collect(HEADERS.iter().map(|h| s!(*h)).collect(), rows)
}
