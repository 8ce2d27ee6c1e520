//! Timing instrumentation helpers

use std::time::Instant;

/// Timing instrumentation helper - tracks operation elapsed time
///
/// # Example
///
/// ```ignore
/// use hdg_infrastructure::utils::TimedOperation;
///
/// let timer = TimedOperation::start();
/// let document = service.process(text, "doc", &cancel).await?;
/// debug!(elapsed_ms = timer.elapsed_ms(), "Processed");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TimedOperation {
    start: Instant,
}

impl TimedOperation {
    /// Start a new timed operation
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Get elapsed time in milliseconds
    pub fn elapsed_ms(&self) -> u64 {
        u64::try_from(self.start.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}
