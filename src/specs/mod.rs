//! # Scraping “specs” module
//!
//! Page-specific knowledge: *where the data lives in the HTML* and *how to read
//! it into a [`RecordSet`](crate::store::RecordSet)*.
//!
//! ## What lives here
//! - **Pure HTML parsing** over an already-fetched `scraper::Html`.
//! - **Shape detection** (`detect`): spotrac keyed table vs. spotrac ranking
//!   widget vs. baseball-reference ranking table.
//! - **Row extraction** (`table`, `ranking_list`) and the career tables on a
//!   player page (`player_stats`).
//! - **Profile links** out of the largest-contracts table (`links`).
//!
//! ## What does **not** live here
//! - Networking, throttling and persistence. Those belong to `scrape` / `file`.
//!
//! ## Conventions & invariants
//! - Every returned `RecordSet` has at least one row and every row is exactly
//!   as wide as its headers. Rows that don't fit are dropped and counted.
//! - Cell text is the element's full text, trimmed.
//!
//! ## Typical call chain
//! ```text
//! scrape::Pipeline → core::net::Fetch::get → Html::parse_document
//!                  → specs::detect → Strategy::extract → file::write_records
//! ```
pub mod detect;
pub mod links;
pub mod player_stats;
pub mod ranking_list;
pub mod table;

pub use detect::{ detect, Strategy };
pub use links::{ extract_links, EntityRef };
pub use player_stats::{ extract_stats, StatKind };
