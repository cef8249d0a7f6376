// tests/common/mod.rs
use contract_scrape::progress::Progress;

/// Collects every line and per-source outcome.
#[derive(Default, Debug)]
pub struct RecordingProgress {
    pub lines: Vec<String>,
    pub done: Vec<String>,
    pub failed: Vec<String>,
}

impl Progress for RecordingProgress {
    fn log(&mut self, msg: &str) {
        self.lines.push(msg.to_string());
    }

    fn item_done(&mut self, name: &str) {
        self.done.push(name.to_string());
    }

    fn item_failed(&mut self, name: &str, _reason: &str) {
        self.failed.push(name.to_string());
    }
}
