// src/config/options.rs
use std::path::{ Path, PathBuf };
use std::time::Duration;

use super::consts::*;

/// Runtime configuration. Built once by the binary and handed to the pipeline;
/// nothing below this layer reads the process environment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Value for the `User-Agent` header. `None` falls back to a crate default.
    pub user_agent: Option<String>,
    /// Directory all output files land in.
    pub out_dir: PathBuf,
    pub source_timeout: Duration,
    pub detail_timeout: Duration,
    /// Slept before every detail page request, success or not.
    pub detail_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user_agent: None,
            out_dir: default_projects_dir().join(PROJECT_FOLDER),
            source_timeout: Duration::from_secs(SOURCE_TIMEOUT_SECS),
            detail_timeout: Duration::from_secs(DETAIL_TIMEOUT_SECS),
            detail_delay: Duration::from_secs(DETAIL_DELAY_SECS),
        }
    }
}

impl Config {
    /// Read `USER_AGENT` and `PROJECTS_DIR`. Empty values count as unset.
    pub fn from_env() -> Self {
        let var = |key: &str| std::env::var(key).ok().filter(|v| !v.trim().is_empty());

        let mut config = Self::default();
        config.user_agent = var(ENV_USER_AGENT);
        if let Some(root) = var(ENV_PROJECTS_DIR) {
            config.out_dir = PathBuf::from(root).join(PROJECT_FOLDER);
        }
        config
    }

    /// Config rooted at `dir` with no throttle delay. Handy for offline runs.
    pub fn with_out_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            out_dir: dir.as_ref().to_path_buf(),
            detail_delay: Duration::ZERO,
            ..Self::default()
        }
    }

    pub fn user_agent(&self) -> String {
        self.user_agent
            .clone()
            .unwrap_or_else(|| join!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
    }

    pub fn source_path(&self, source: &Source) -> PathBuf {
        self.out_dir.join(source.file_name())
    }

    pub fn batter_stats_path(&self) -> PathBuf {
        self.out_dir.join(BATTER_STATS_FILE)
    }

    pub fn pitcher_stats_path(&self) -> PathBuf {
        self.out_dir.join(PITCHER_STATS_FILE)
    }
}

fn default_projects_dir() -> PathBuf {
    let mut dir = dirs::home_dir().unwrap_or_default();
    for part in DEFAULT_PROJECTS_SUBDIR {
        dir.push(part);
    }
    dir
}
