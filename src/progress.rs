//! Progress reporting for long-running passes.
//!
//! Reporting never fails: a broken terminal must not hide the I/O error
//! that actually stopped a run.

use std::cell::Cell;
use std::io::Write;

/// Receives one event per processed item.
pub trait Progress {
    /// A pass named `action` is starting.
    fn begin(&self, action: &str);
    /// The item `label` is being processed.
    fn entry(&self, label: &str);
    /// The pass completed.
    fn finish(&self);
    /// The pass stopped on an error, reported separately by the caller.
    fn abort(&self);
}

/// Prints a single updating status line to stdout.
#[derive(Default)]
pub struct ConsoleProgress {
    count: Cell<usize>,
}

impl ConsoleProgress {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Progress for ConsoleProgress {
    fn begin(&self, action: &str) {
        self.count.set(0);
        println!("{}...", action);
    }

    fn entry(&self, label: &str) {
        let n = self.count.get() + 1;
        self.count.set(n);
        print!("\r\x1b[K  [{}] {}", n, label);
        let _ = std::io::stdout().flush();
    }

    fn finish(&self) {
        if self.count.get() > 0 {
            println!();
        }
        println!("  Processed {} entries", self.count.get());
    }

    fn abort(&self) {
        // Terminate the status line so the error starts on its own line
        if self.count.get() > 0 {
            println!();
        }
    }
}

/// Discards every event.
pub struct SilentProgress;

impl Progress for SilentProgress {
    fn begin(&self, _action: &str) {}
    fn entry(&self, _label: &str) {}
    fn finish(&self) {}
    fn abort(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_progress_counts_entries() {
        let progress = ConsoleProgress::new();
        progress.begin("Copying files");
        progress.entry("vendor/lib/a.so");
        progress.entry("vendor/lib/b.so");
        assert_eq!(progress.count.get(), 2);

        progress.begin("Again");
        assert_eq!(progress.count.get(), 0);
    }
}
