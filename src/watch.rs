//! Async delivery of evaluation results.

use std::time::Duration;

use secrecy::SecretString;
use tokio::sync::{mpsc, watch};
use tokio_util::sync::CancellationToken;

use crate::evaluator::evaluate;
use crate::policy::Policy;
use crate::result::StrengthResult;

/// Delay applied before evaluating, so bursts of keystrokes collapse into one result.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Evaluates after [`DEFAULT_DEBOUNCE`] and sends the result via channel.
///
/// Nothing is sent if `token` is cancelled before the delay elapses or while
/// waiting for room in the channel.
pub async fn evaluate_tx(
    password: &SecretString,
    policy: &Policy,
    token: CancellationToken,
    tx: mpsc::Sender<StrengthResult>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("evaluation cancelled before start");
            return;
        }
        _ = tokio::time::sleep(DEFAULT_DEBOUNCE) => {}
    }

    let evaluation = evaluate(password, policy);
    send_unless_cancelled(&tx, &token, evaluation).await;
}

/// Sends once the channel has room. Returns `false` if cancelled or closed first.
async fn send_unless_cancelled(
    tx: &mpsc::Sender<StrengthResult>,
    token: &CancellationToken,
    evaluation: StrengthResult,
) -> bool {
    tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("evaluation cancelled while waiting to send");
            false
        }
        permit = tx.reserve() => match permit {
            Ok(permit) => {
                permit.send(evaluation);
                true
            }
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::error!("Failed to send password evaluation result: {}", _e);
                false
            }
        },
    }
}

/// Re-evaluates the password held in `passwords` each time it changes.
///
/// The current value is evaluated and published right away. After each change
/// the loop waits `debounce` and then evaluates whatever value is latest, so
/// intermediate keystrokes may be skipped but the final one never is.
///
/// Returns when `token` is cancelled (even while blocked on a full result
/// channel), the password sender is dropped, or the result receiver is closed.
pub async fn run_strength_meter(
    policy: Policy,
    mut passwords: watch::Receiver<SecretString>,
    tx: mpsc::Sender<StrengthResult>,
    token: CancellationToken,
    debounce: Duration,
) {
    loop {
        let evaluation = {
            let current = passwords.borrow_and_update();
            evaluate(&current, &policy)
        };

        if !send_unless_cancelled(&tx, &token, evaluation).await {
            break;
        }

        tokio::select! {
            _ = token.cancelled() => break,
            changed = passwords.changed() => {
                if changed.is_err() {
                    break;
                }
            }
        }

        tokio::select! {
            _ = token.cancelled() => break,
            _ = tokio::time::sleep(debounce) => {}
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!("strength meter stopped");
}
