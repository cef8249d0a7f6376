// src/config/consts.rs

// Sources
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceKind {
    Spotrac,
    BaseballReference,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Source {
    pub name: &'static str,
    pub url: &'static str,
    pub kind: SourceKind,
}

impl Source {
    pub fn file_name(&self) -> String {
        join!(self.name, ".", CSV_EXT)
    }
}

// baseball-reference rate limits hard; keep test runs against it rare.
pub const SOURCES: &[Source] = &[
    Source {
        name: "mlb_contracts",
        url: "https://www.spotrac.com/mlb/contracts/",
        kind: SourceKind::Spotrac,
    },
    Source {
        name: "mlb_avgvalue",
        url: "https://www.spotrac.com/mlb/rankings/player/_/year/2025/sort/cap_base",
        kind: SourceKind::Spotrac,
    },
    Source {
        name: "mlb_lengthofcontract",
        url: "https://www.spotrac.com/mlb/rankings/player/_/year/2025/sort/contract_length",
        kind: SourceKind::Spotrac,
    },
    Source {
        name: "baseball_reference_largest_contracts",
        url: "https://www.baseball-reference.com/leaders/leaders_contract.shtml",
        kind: SourceKind::BaseballReference,
    },
];

// Net config
pub const BR_ORIGIN: &str = "https://www.baseball-reference.com";
pub const SOURCE_TIMEOUT_SECS: u64 = 30;
pub const DETAIL_TIMEOUT_SECS: u64 = 10;
pub const DETAIL_DELAY_SECS: u64 = 3; // be polite
pub const SNIPPET_CHARS: usize = 500;

// Page anchors (element ids)
pub const SPOTRAC_TABLE_ID: &str = "table";
pub const BR_CONTRACTS_TABLE_ID: &str = "largest_contracts";
pub const BR_BATTING_TABLE_ID: &str = "players_standard_batting";
pub const BR_PITCHING_TABLE_ID: &str = "players_standard_pitching";

// Environment
pub const ENV_USER_AGENT: &str = "USER_AGENT";
pub const ENV_PROJECTS_DIR: &str = "PROJECTS_DIR";

// Export
pub const DEFAULT_PROJECTS_SUBDIR: &[&str] = &["Documents", "Projects"];
pub const PROJECT_FOLDER: &str = "contract value analysis";
pub const BATTER_STATS_FILE: &str = "batter_statistics.csv";
pub const PITCHER_STATS_FILE: &str = "pitcher_statistics.csv";
pub const ENTITY_COLUMN: &str = "Player";
pub const CSV_EXT: &str = "csv";
pub const CSV_SEP: char = ',';
