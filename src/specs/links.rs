// src/specs/links.rs
//! Player profile links out of the largest-contracts table:
//! `<td data-stat="player"><a href="/players/t/troutmi01.shtml">Mike Trout</a></td>`

use std::sync::LazyLock;

use scraper::{ ElementRef, Selector };

use crate::config::consts::BR_ORIGIN;
use crate::core::html::{ first, sel, stripped_text, A, TBODY, TR };

static PLAYER_CELL: LazyLock<Selector> = LazyLock::new(|| sel(r#"td[data-stat="player"]"#));

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntityRef {
    pub name: String,
    pub url: String,
}

/// One reference per body row whose player cell holds a link.
/// The href is appended to the site origin as-is.
pub fn extract_links(table: ElementRef) -> Vec<EntityRef> {
    let Some(tbody) = first(table, &TBODY) else {
        return Vec::new();
    };

    tbody
        .select(&TR)
        .filter_map(|tr| {
            let cell = first(tr, &PLAYER_CELL)?;
            let href = first(cell, &A)?.value().attr("href")?;
            Some(EntityRef {
                name: stripped_text(cell),
                url: join!(BR_ORIGIN, href),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::html::table_by_id;
    use scraper::Html;

    #[test]
    fn anchors_become_absolute_refs_and_bare_cells_are_skipped() {
        let doc = Html::parse_document(
            r#"<table id="largest_contracts">
                 <thead><tr><th>Rk</th><th>Player</th></tr></thead>
                 <tbody>
                   <tr><th>1</th><td data-stat="player"><a href="/players/s/sotoju01.shtml">Juan Soto</a></td></tr>
                   <tr><th>2</th><td data-stat="player">Unlinked Guy</td></tr>
                   <tr><th>3</th><td data-stat="team"><a href="/teams/NYY/">NYY</a></td></tr>
                   <tr><th>4</th><td data-stat="player"> <a href="/players/o/ohtansh01.shtml">Shohei Ohtani</a>* </td></tr>
                 </tbody>
               </table>"#,
        );
        let table = table_by_id(&doc, "largest_contracts").unwrap();
        let refs = extract_links(table);

        assert_eq!(refs, vec![
            EntityRef {
                name: s!("Juan Soto"),
                url: s!("https://www.baseball-reference.com/players/s/sotoju01.shtml"),
            },
            EntityRef {
                name: s!("Shohei Ohtani*"),
                url: s!("https://www.baseball-reference.com/players/o/ohtansh01.shtml"),
            },
        ]);
    }
}
