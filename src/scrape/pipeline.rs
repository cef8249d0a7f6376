// src/scrape/pipeline.rs
use scraper::Html;

use crate::config::Config;
use crate::config::consts::Source;
use crate::core::net::Fetch;
use crate::error::ScrapeError;
use crate::file::{ self, write_records, WriteMode };
use crate::progress::Progress;
use crate::specs::{ detect, extract_links, EntityRef, Strategy };

use super::harvest::{ HarvestOutcome, Harvester, StatSinks };

/// What a run did, for the closing log line and for tests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub sources_written: usize,
    pub sources_skipped: usize,
    pub entities_harvested: usize,
    pub entities_failed: usize,
    /// Rows thrown away for not matching their table's header width.
    pub rows_dropped: usize,
}

/// Sequential fetch → detect → extract → persist over a list of sources.
pub struct Pipeline<'a, F: Fetch> {
    config: &'a Config,
    fetcher: F,
}

impl<'a, F: Fetch> Pipeline<'a, F> {
    pub fn new(config: &'a Config, fetcher: F) -> Self {
        Self { config, fetcher }
    }

    /// Process every source in order. A failed source or player is logged and
    /// skipped; only I/O errors on top-level output end the run early.
    pub fn run(
        &self,
        sources: &[Source],
        progress: &mut dyn Progress,
    ) -> Result<RunSummary, ScrapeError> {
        file::ensure_directory(&self.config.out_dir)?;
        logf!("writing to {}", self.config.out_dir.display());

        let mut summary = RunSummary::default();
        progress.begin(sources.len());

        for source in sources {
            match self.run_source(source, &mut summary, progress) {
                Ok(()) => {
                    summary.sources_written += 1;
                    progress.item_done(source.name);
                }
                Err(e) if e.is_recoverable() => {
                    report_source_error(source, &e, progress);
                    summary.sources_skipped += 1;
                    progress.item_failed(source.name, &e.to_string());
                }
                Err(e) => {
                    progress.finish();
                    return Err(e);
                }
            }
        }

        progress.finish();
        logf!(
            written = summary.sources_written,
            skipped = summary.sources_skipped,
            harvested = summary.entities_harvested,
            failed = summary.entities_failed,
            dropped = summary.rows_dropped,
            "run complete"
        );
        Ok(summary)
    }

    fn run_source(
        &self,
        source: &Source,
        summary: &mut RunSummary,
        progress: &mut dyn Progress,
    ) -> Result<(), ScrapeError> {
        let page = self.fetcher.get(source.url, self.config.source_timeout)?;
        if page.status != 200 {
            logd!("response headers for {}: {:?}", source.url, page.headers);
        }
        let body = page.into_ok_body(source.url)?;
        let doc = Html::parse_document(&body);

        let not_found = || ScrapeError::StructureNotFound { name: s!(source.name) };
        let strategy = detect(&doc, source.kind).ok_or_else(not_found)?;

        let records = strategy.extract(&doc);
        if let Some(rs) = &records {
            progress.log(&format!("✔ Detected {} for {}", strategy.label(), source.name));
            let path = self.config.source_path(source);
            write_records(rs, &path, WriteMode::Overwrite)?;
            summary.rows_dropped += rs.dropped;
            logf!(source = source.name, rows = rs.len(), dropped = rs.dropped, "saved {}", path.display());
            progress.log(&format!("✅ Saved data to {}", path.display()));
        }

        // Profile links are read even when the ranking table itself had no usable rows.
        if let Strategy::RankingTable(table) = strategy {
            let entities = extract_links(table);
            self.harvest_all(&entities, summary, progress);
        }

        records.map(|_| ()).ok_or_else(not_found)
    }

    fn harvest_all(
        &self,
        entities: &[EntityRef],
        summary: &mut RunSummary,
        progress: &mut dyn Progress,
    ) {
        let harvester = Harvester::new(&self.fetcher, self.config);
        let sinks = StatSinks::from_config(self.config);
        logf!("harvesting {} player page(s)", entities.len());

        for entity in entities {
            progress.log(&format!("📊 Extracting stats for {}...", entity.name));
            match harvester.harvest(entity, &sinks, progress) {
                HarvestOutcome::Harvested { dropped, .. } => {
                    summary.entities_harvested += 1;
                    summary.rows_dropped += dropped;
                }
                HarvestOutcome::Failed(_) => summary.entities_failed += 1,
            }
        }
    }
}

fn report_source_error(source: &Source, e: &ScrapeError, progress: &mut dyn Progress) {
    match e {
        ScrapeError::HttpStatus { url, status, snippet } => {
            loge!("failed to retrieve {url} - HTTP status {status}");
            progress.log(&format!("❌ Failed to retrieve {url} - HTTP Status Code: {status}"));
            progress.log(&format!("Response Content (first 500 characters):\n{snippet}"));
        }
        ScrapeError::Timeout { url } => {
            logw!("timed out fetching {url}");
            progress.log(&format!("⏳ Timeout fetching {url}, skipping..."));
        }
        ScrapeError::Network { url, message } => {
            loge!("error fetching {url}: {message}");
            progress.log(&format!("⚠ Error retrieving {url}: {message}"));
        }
        ScrapeError::StructureNotFound { .. } => {
            logw!("no recognized structure for {}", source.name);
            progress.log(&format!("⚠ No recognized structure found for {}. Skipping.", source.name));
        }
        ScrapeError::Client(message) => loge!("http client error for {}: {message}", source.name),
        ScrapeError::Io(err) => loge!("i/o error for {}: {err}", source.name),
    }
}
