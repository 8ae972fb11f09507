//! Phase timing for the `copy` and `generate` commands.

use std::time::{Duration, Instant};

/// Measures one named phase and reports it when finished.
pub struct Timer {
    phase: &'static str,
    start: Instant,
}

impl Timer {
    pub fn start(phase: &'static str) -> Self {
        tracing::debug!(phase, "phase started");
        Self {
            phase,
            start: Instant::now(),
        }
    }

    /// Print `[1.2s] <phase>` and return the elapsed time.
    pub fn finish(self) -> Duration {
        let elapsed = self.start.elapsed();
        println!("  [{}] {}", format_elapsed(elapsed), self.phase);
        tracing::debug!(phase = self.phase, ms = elapsed.as_millis() as u64, "phase finished");
        elapsed
    }
}

fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs_f64();
    if secs >= 60.0 {
        format!("{:.1}m", secs / 60.0)
    } else {
        format!("{:.1}s", secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_elapsed_switches_to_minutes() {
        assert_eq!(format_elapsed(Duration::from_millis(1500)), "1.5s");
        assert_eq!(format_elapsed(Duration::from_secs(90)), "1.5m");
    }
}
