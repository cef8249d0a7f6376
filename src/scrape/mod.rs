// src/scrape/mod.rs
mod harvest;
mod pipeline;

pub use harvest::{ HarvestOutcome, Harvester, StatSinks };
pub use pipeline::{ Pipeline, RunSummary };
