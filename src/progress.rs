// src/progress.rs
/// Lightweight progress reporting used by the scrape pipeline.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of items (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when a source completes. Players report through `log` only.
    fn item_done(&mut self, _name: &str) {}

    /// Called when a source is abandoned.
    fn item_failed(&mut self, _name: &str, _reason: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Prints status lines to stdout.
#[derive(Default)]
pub struct ConsoleProgress {
    total: usize,
    done: usize,
    failed: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        println!("Scraping {total} source(s)…");
    }

    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn item_done(&mut self, name: &str) {
        self.done += 1;
        println!("✔ {name}");
    }

    fn item_failed(&mut self, name: &str, reason: &str) {
        self.failed += 1;
        println!("✘ {name}: {reason}");
    }

    fn finish(&mut self) {
        println!("Done: {} ok, {} failed ({} source(s))", self.done, self.failed, self.total);
    }
}
