// src/bin/cli.rs
use contract_scrape::config::{ Config, consts::{ ENV_USER_AGENT, SOURCES } };
use contract_scrape::core::HttpFetcher;
use contract_scrape::logw;
use contract_scrape::progress::ConsoleProgress;
use contract_scrape::scrape::Pipeline;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    // A missing .env is fine; the real environment still applies.
    let _ = dotenvy::dotenv();
    contract_scrape::log::init();

    let config = Config::from_env();
    if config.user_agent.is_none() {
        logw!("{ENV_USER_AGENT} is not set; using {}", config.user_agent());
    }

    let fetcher = HttpFetcher::new(&config)?;
    let mut progress = ConsoleProgress::default();
    let summary = Pipeline::new(&config, fetcher).run(SOURCES, &mut progress)?;

    if summary.rows_dropped > 0 {
        println!("{} row(s) skipped for not matching their table's columns", summary.rows_dropped);
    }
    Ok(())
}
