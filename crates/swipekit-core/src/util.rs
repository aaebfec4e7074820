//! Caller-level helpers: retry, test data, screenshots.
//!
//! The core layers never retry (see [`error`](crate::error)); when a spec
//! wants bounded retries around a flaky operation, it wraps the call in
//! [`retry`] explicitly.

use std::fmt;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::Utc;
use tracing::{info, warn};

use crate::driver::DriverError;
use crate::error::AutomationError;
use crate::session::Session;

/// Retries an async operation up to `attempts` times with a fixed delay
/// between failures, returning the first success or the last error.
///
/// Each failed attempt is logged at `warn`. An `attempts` of zero behaves
/// like one attempt.
pub async fn retry<T, E, F, Fut>(attempts: u32, delay: Duration, mut operation: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: fmt::Display,
{
    let mut attempt = 0;
    loop {
        attempt += 1;
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) if attempt >= attempts => return Err(err),
            Err(err) => {
                warn!(attempt, attempts, error = %err, "attempt failed, retrying");
                tokio::time::sleep(delay).await;
            }
        }
    }
}

/// A random 8-character lowercase hex suffix for unique test data.
pub fn random_suffix() -> String {
    let mut hex = uuid::Uuid::new_v4().simple().to_string();
    hex.truncate(8);
    hex
}

/// A random throwaway email address on the given domain,
/// e.g. `test.3fa9c1d2@3shape.com`.
pub fn random_email(domain: &str) -> String {
    format!("test.{}@{}", random_suffix(), domain)
}

/// Captures a screenshot and writes it under `dir` with a timestamped name.
///
/// Returns the path of the written file. The directory is created if
/// needed.
pub async fn save_screenshot(
    session: &Session,
    dir: &Path,
    prefix: &str,
) -> Result<PathBuf, AutomationError> {
    let bytes = session.driver().screenshot().await?;
    let stamp = Utc::now().format("%Y-%m-%dT%H-%M-%S");
    let path = dir.join(format!("{prefix}_{stamp}.png"));
    std::fs::create_dir_all(dir).map_err(DriverError::Io)?;
    std::fs::write(&path, bytes).map_err(DriverError::Io)?;
    info!(path = %path.display(), "screenshot saved");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[tokio::test(start_paused = true)]
    async fn test_retry_returns_first_success() {
        let result: Result<i32, &str> =
            retry(3, Duration::from_millis(10), || async { Ok(42) }).await;
        assert_eq!(result.unwrap(), 42);
    }

    #[tokio::test(start_paused = true)]
    async fn test_retry_recovers_after_failures() {
        let calls = Cell::new(0u32);
        let result: Result<u32, &str> = retry(3, Duration::from_millis(10), || {
            calls.set(calls.get() + 1);
            let n = calls.get();
            async move {
                if n < 3 {
                    Err("not yet")
                } else {
                    Ok(n)
                }
            }
        })
        .await;
        assert_eq!(result.unwrap(), 3);
        assert_eq!(calls.get(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_retry_exhausts_and_returns_last_error() {
        let calls = Cell::new(0u32);
        let result: Result<(), String> = retry(3, Duration::from_millis(10), || {
            calls.set(calls.get() + 1);
            let n = calls.get();
            async move { Err(format!("failure {n}")) }
        })
        .await;
        assert_eq!(result.unwrap_err(), "failure 3");
        assert_eq!(calls.get(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_retry_zero_attempts_runs_once() {
        let calls = Cell::new(0u32);
        let result: Result<(), &str> = retry(0, Duration::from_millis(10), || {
            calls.set(calls.get() + 1);
            async { Err("boom") }
        })
        .await;
        assert!(result.is_err());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_random_suffix_shape() {
        let suffix = random_suffix();
        assert_eq!(suffix.len(), 8);
        assert!(suffix.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_random_suffixes_differ() {
        assert_ne!(random_suffix(), random_suffix());
    }

    #[test]
    fn test_random_email_shape() {
        let email = random_email("3shape.com");
        assert!(email.starts_with("test."));
        assert!(email.ends_with("@3shape.com"));
    }
}
