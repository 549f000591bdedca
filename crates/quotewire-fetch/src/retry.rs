//! Bounded retry with a fixed delay between attempts.

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

/// Errors that know whether another attempt could succeed.
pub trait Retryable {
    /// Returns true if the operation that produced this error may be retried.
    fn is_retryable(&self) -> bool;
}

/// Retry policy: at most `max_attempts` tries, `delay_ms` apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryPolicy {
    /// Total attempts including the first one. Zero is treated as one.
    pub max_attempts: u32,
    /// Fixed delay between attempts, in milliseconds.
    pub delay_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            delay_ms: 3_000,
        }
    }
}

/// Failure after the retry policy gave up.
#[derive(Error, Debug)]
pub enum RetryError<E> {
    /// Every allowed attempt failed with a retryable error.
    #[error("gave up after {attempts} attempts: {source}")]
    Exhausted {
        /// Number of attempts made.
        attempts: u32,
        /// The last error seen.
        source: E,
    },

    /// An attempt failed with an error that must not be retried.
    #[error("attempt {attempt} failed permanently: {source}")]
    Fatal {
        /// The attempt that failed (1-based).
        attempt: u32,
        /// The error.
        source: E,
    },
}

impl<E> RetryError<E> {
    /// Returns the number of attempts that were made.
    #[must_use]
    pub const fn attempts(&self) -> u32 {
        match self {
            Self::Exhausted { attempts, .. } => *attempts,
            Self::Fatal { attempt, .. } => *attempt,
        }
    }

    /// Returns the last underlying error.
    #[must_use]
    pub const fn inner(&self) -> &E {
        match self {
            Self::Exhausted { source, .. } | Self::Fatal { source, .. } => source,
        }
    }

    /// Consumes the error, returning the last underlying error.
    pub fn into_inner(self) -> E {
        match self {
            Self::Exhausted { source, .. } | Self::Fatal { source, .. } => source,
        }
    }
}

impl RetryPolicy {
    /// Creates a policy with the given attempt bound and delay.
    ///
    /// Delays beyond `u64::MAX` milliseconds saturate.
    #[must_use]
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts,
            delay_ms: u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
        }
    }

    /// A policy that never retries.
    #[must_use]
    pub const fn single_attempt() -> Self {
        Self {
            max_attempts: 1,
            delay_ms: 0,
        }
    }

    /// Returns the delay between attempts.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// Returns the effective attempt bound (at least one).
    #[must_use]
    pub const fn attempts(&self) -> u32 {
        if self.max_attempts == 0 {
            1
        } else {
            self.max_attempts
        }
    }

    /// Runs `op` until it succeeds, fails with a non-retryable error, or the
    /// attempt bound is reached.
    ///
    /// `op` receives the 1-based attempt number.
    ///
    /// # Errors
    ///
    /// Returns [`RetryError::Fatal`] on a non-retryable error and
    /// [`RetryError::Exhausted`] once every attempt has failed.
    pub async fn run<T, E, F, Fut>(&self, op: F) -> Result<T, RetryError<E>>
    where
        E: Retryable + Display,
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        self.run_if(op, E::is_retryable).await
    }

    /// Like [`RetryPolicy::run`], with an explicit retryable-error predicate.
    ///
    /// # Errors
    ///
    /// Returns [`RetryError::Fatal`] when `is_retryable` rejects an error and
    /// [`RetryError::Exhausted`] once every attempt has failed.
    pub async fn run_if<T, E, F, Fut, P>(
        &self,
        mut op: F,
        is_retryable: P,
    ) -> Result<T, RetryError<E>>
    where
        E: Display,
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        P: Fn(&E) -> bool,
    {
        let max_attempts = self.attempts();
        let mut attempt = 1;

        loop {
            match op(attempt).await {
                Ok(value) => return Ok(value),
                Err(source) if !is_retryable(&source) => {
                    return Err(RetryError::Fatal { attempt, source });
                }
                Err(source) if attempt >= max_attempts => {
                    return Err(RetryError::Exhausted {
                        attempts: attempt,
                        source,
                    });
                }
                Err(source) => {
                    warn!(
                        attempt,
                        max_attempts,
                        delay_ms = self.delay_ms,
                        error = %source,
                        "attempt failed, retrying"
                    );
                    tokio::time::sleep(self.delay()).await;
                    attempt += 1;
                }
            }
        }
    }
}
