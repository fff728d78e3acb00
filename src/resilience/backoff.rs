//! Exponential backoff schedule.

use std::time::Duration;

/// Delay before the next attempt after `attempt` failures: `base_secs^attempt`.
///
/// With a base of 5 the schedule is 5s, 25s, 125s, 625s. Attempt 0 has no delay.
pub fn calculate_backoff(attempt: u32, base_secs: u64) -> Duration {
    if attempt == 0 {
        return Duration::from_secs(0);
    }

    Duration::from_secs(base_secs.saturating_pow(attempt))
}
