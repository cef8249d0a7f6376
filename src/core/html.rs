// src/core/html.rs
// Thin helpers over `scraper` shared by the page readers in `specs`.

use std::sync::LazyLock;

use scraper::{ ElementRef, Html, Selector };

/// Compile a selector known at build time.
pub fn sel(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("bad selector {css:?}: {e}"))
}

macro_rules! selector {
    ($name:ident, $css:expr) => {
        pub static $name: LazyLock<Selector> = LazyLock::new(|| sel($css));
    };
}

selector!(TABLE, "table");
selector!(THEAD, "thead");
selector!(TBODY, "tbody");
selector!(TR, "tr");
selector!(TH, "th");
selector!(TD, "td");
selector!(A, "a");
selector!(SPAN, "span");
selector!(SMALL, "small");

/// All descendant text, concatenated and trimmed.
pub fn text(el: ElementRef) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Each text fragment trimmed, then glued together with nothing in between.
pub fn stripped_text(el: ElementRef) -> String {
    el.text().map(str::trim).collect()
}

/// First descendant matching `selector`.
pub fn first<'a>(el: ElementRef<'a>, selector: &Selector) -> Option<ElementRef<'a>> {
    el.select(selector).next()
}

/// Trimmed text of the first descendant matching `selector`, or "".
pub fn first_text(el: ElementRef, selector: &Selector) -> String {
    first(el, selector).map(text).unwrap_or_default()
}

/// `<table id="...">` anywhere in the document.
pub fn table_by_id<'a>(doc: &'a Html, id: &str) -> Option<ElementRef<'a>> {
    doc.select(&TABLE).find(|t| t.value().id() == Some(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_trims_and_concatenates() {
        let doc = Html::parse_fragment("<div> <b>A</b> b </div>");
        let div = doc.select(&sel("div")).next().unwrap();
        assert_eq!(text(div), "A b");
        assert_eq!(stripped_text(div), "Ab");
    }

    #[test]
    fn table_by_id_matches_exactly() {
        let doc = Html::parse_document(
            r#"<table id="tables"><tr><td>1</td></tr></table>
               <table id="table"><tr><td>2</td></tr></table>"#,
        );
        let t = table_by_id(&doc, "table").unwrap();
        assert_eq!(first_text(t, &TD), "2");
        assert!(table_by_id(&doc, "nope").is_none());
    }
}
