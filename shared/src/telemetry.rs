use std::time::Instant;

/// Wall-clock timer for reporting backend round-trip times.
pub struct Telemetry {
    start: Instant,
}

impl Telemetry {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> std::time::Duration {
        self.start.elapsed()
    }

    /// Elapsed time rendered for the prompt line, e.g. "1.3s".
    pub fn elapsed_label(&self) -> String {
        format!("{:.1}s", self.start.elapsed().as_secs_f64())
    }
}
