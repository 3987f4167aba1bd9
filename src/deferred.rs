//! Pattern 8: Deferred Computation
//!
//! A timer-delayed squaring computation that settles exactly once: either
//! the square of the input, or a domain error for negative input. Each
//! invocation owns its own timer; none share state.

use std::time::Duration;

use thiserror::Error;
use tokio::sync::oneshot;

/// Fixed delay before the computation settles.
pub const SQUARE_DELAY: Duration = Duration::from_secs(1);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    #[error("negative number not allowed")]
    NegativeInput,
}

fn square(n: i64) -> Result<i64, SquareError> {
    if n < 0 {
        Err(SquareError::NegativeInput)
    } else {
        Ok(n * n)
    }
}

/// Squares `n` after [`SQUARE_DELAY`]. The returned future suspends the
/// caller without blocking the runtime and resolves exactly once.
pub async fn deferred_square(n: i64) -> Result<i64, SquareError> {
    tokio::time::sleep(SQUARE_DELAY).await;
    square(n)
}

/// Detached form of the same contract: a spawned task owns the timer and
/// sends the outcome once through a one-shot channel. Dropping the
/// receiver abandons the result without affecting other invocations.
pub fn spawn_deferred_square(n: i64) -> oneshot::Receiver<Result<i64, SquareError>> {
    let (tx, rx) = oneshot::channel();
    tokio::spawn(async move {
        tokio::time::sleep(SQUARE_DELAY).await;
        let _ = tx.send(square(n)); // Receiver dropped, result abandoned
    });
    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::future::join_all;

    #[tokio::test]
    async fn test_positive_input_resolves_to_square() {
        assert_eq!(deferred_square(5).await, Ok(25));
    }

    #[tokio::test]
    async fn test_zero_is_allowed() {
        assert_eq!(deferred_square(0).await, Ok(0));
    }

    #[tokio::test]
    async fn test_negative_input_fails() {
        let result = deferred_square(-3).await;
        assert_eq!(result, Err(SquareError::NegativeInput));
        assert_eq!(
            result.unwrap_err().to_string(),
            "negative number not allowed"
        );
    }

    #[tokio::test]
    async fn test_concurrent_invocations_are_independent() {
        let results = join_all([
            deferred_square(2),
            deferred_square(-1),
            deferred_square(4),
        ])
        .await;
        assert_eq!(
            results,
            vec![Ok(4), Err(SquareError::NegativeInput), Ok(16)]
        );
    }

    #[tokio::test]
    async fn test_spawned_form_delivers_once() {
        let rx = spawn_deferred_square(6);
        assert_eq!(rx.await.unwrap(), Ok(36));
    }

    #[tokio::test]
    async fn test_spawned_form_propagates_failure() {
        let rx = spawn_deferred_square(-8);
        assert_eq!(rx.await.unwrap(), Err(SquareError::NegativeInput));
    }
}
