//! Retry loop for temporary failures at the source boundary.

use std::thread;
use std::time::Duration;

use tracing::warn;

use costar_error::Result;

/// Run `op` until it succeeds, fails permanently, or `max_retries` extra
/// attempts are used up. The wait grows linearly: `backoff * attempt`.
///
/// An error that was still temporary after the last retry is returned
/// as `Persistent`.
pub fn with_retries<T, F>(max_retries: u32, backoff: Duration, mut op: F) -> Result<T>
where
    F: FnMut() -> Result<T>,
{
    let mut attempt: u32 = 0;
    loop {
        match op() {
            Ok(value) => return Ok(value),
            Err(err) if err.is_retryable() && attempt < max_retries => {
                attempt += 1;
                warn!(attempt, max_retries, error = %err, "retrying after temporary failure");
                let delay = backoff_delay(backoff, attempt);
                if !delay.is_zero() {
                    thread::sleep(delay);
                }
            }
            Err(err) => {
                let err = if attempt > 0 { err.persist() } else { err };
                return Err(err.with_context("attempts", (attempt + 1).to_string()));
            }
        }
    }
}

/// Wait before retry number `attempt`, capped at `Duration::MAX`.
fn backoff_delay(backoff: Duration, attempt: u32) -> Duration {
    backoff.saturating_mul(attempt)
}
