// src/scrape/harvest.rs
use std::{ path::{ Path, PathBuf }, thread, time::Duration };

use scraper::Html;

use crate::config::Config;
use crate::core::net::Fetch;
use crate::error::ScrapeError;
use crate::file::{ write_records, WriteMode };
use crate::progress::Progress;
use crate::specs::{ extract_stats, EntityRef, StatKind };

/// Where the cumulative career tables go.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatSinks {
    pub batting: PathBuf,
    pub pitching: PathBuf,
}

impl StatSinks {
    pub fn from_config(config: &Config) -> Self {
        Self {
            batting: config.batter_stats_path(),
            pitching: config.pitcher_stats_path(),
        }
    }

    pub fn path(&self, kind: StatKind) -> &Path {
        match kind {
            StatKind::Batting => &self.batting,
            StatKind::Pitching => &self.pitching,
        }
    }
}

#[derive(Debug)]
pub enum HarvestOutcome {
    Harvested { batting_rows: usize, pitching_rows: usize, dropped: usize },
    Failed(ScrapeError),
}

impl HarvestOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, HarvestOutcome::Failed(_))
    }
}

/// Visits player pages one at a time, sleeping `delay` before each request.
pub struct Harvester<'a, F: Fetch> {
    fetcher: &'a F,
    timeout: Duration,
    delay: Duration,
}

impl<'a, F: Fetch> Harvester<'a, F> {
    pub fn new(fetcher: &'a F, config: &Config) -> Self {
        Self {
            fetcher,
            timeout: config.detail_timeout,
            delay: config.detail_delay,
        }
    }

    /// Never fails: every problem is logged and reported as `Failed`.
    pub fn harvest(
        &self,
        entity: &EntityRef,
        sinks: &StatSinks,
        progress: &mut dyn Progress,
    ) -> HarvestOutcome {
        // Unconditional, before every request.
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }

        match self.try_harvest(entity, sinks, progress) {
            Ok(outcome) => outcome,
            Err(e) => {
                let msg = match &e {
                    ScrapeError::HttpStatus { status, .. } => {
                        format!("❌ Failed to retrieve stats for {} - HTTP {status}", entity.name)
                    }
                    ScrapeError::Timeout { .. } => {
                        format!("⏳ Timeout error for {}, skipping...", entity.name)
                    }
                    other => format!("⚠ Error retrieving {}: {other}", entity.name),
                };
                loge!(player = %entity.name, url = %entity.url, error = %e, "player skipped");
                progress.log(&msg);
                HarvestOutcome::Failed(e)
            }
        }
    }

    fn try_harvest(
        &self,
        entity: &EntityRef,
        sinks: &StatSinks,
        progress: &mut dyn Progress,
    ) -> Result<HarvestOutcome, ScrapeError> {
        let body = self.fetcher
            .get(&entity.url, self.timeout)?
            .into_ok_body(&entity.url)?;
        let doc = Html::parse_document(&body);

        let mut batting_rows = 0usize;
        let mut pitching_rows = 0usize;
        let mut dropped = 0usize;

        for kind in StatKind::ALL {
            let Some(rs) = extract_stats(&doc, kind, &entity.name) else {
                logd!("no {} table for {}", kind.label(), entity.name);
                continue;
            };
            write_records(&rs, sinks.path(kind), WriteMode::Append)?;

            dropped += rs.dropped;
            match kind {
                StatKind::Batting => batting_rows = rs.len(),
                StatKind::Pitching => pitching_rows = rs.len(),
            }
            progress.log(&format!("✅ {} stats added for {}", kind.label(), entity.name));
        }

        Ok(HarvestOutcome::Harvested { batting_rows, pitching_rows, dropped })
    }
}
