//! Graceful shutdown coordination.

use tokio::signal;
use tokio::sync::watch;

/// Resolves when the process receives a shutdown request (ctrl-c, or
/// SIGTERM on unix).
pub async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install ctrl-c handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

/// Broadcasts the shutdown signal to background tasks that need to run
/// cleanup before the process exits.
#[derive(Clone)]
pub struct ShutdownCoordinator {
    tx: watch::Sender<bool>,
}

impl ShutdownCoordinator {
    /// Create a coordinator and an initial receiver. The receiver keeps the
    /// channel open even if no task has subscribed yet.
    pub fn new() -> (Self, watch::Receiver<bool>) {
        let (tx, rx) = watch::channel(false);
        (Self { tx }, rx)
    }

    /// Notify all subscribers that shutdown has begun.
    pub fn signal(&self) {
        let _ = self.tx.send(true);
    }

    /// Wait until [`ShutdownCoordinator::signal`] has been called.
    pub async fn wait_for_signal(&self) {
        let mut rx = self.tx.subscribe();
        if *rx.borrow() {
            return;
        }
        let _ = rx.changed().await;
    }
}

/// Future for `axum::serve(...).with_graceful_shutdown(...)`: waits for the
/// OS signal, then wakes every coordinator subscriber.
pub async fn coordinated_shutdown(coordinator: ShutdownCoordinator) {
    shutdown_signal().await;
    coordinator.signal();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_wait_resolves_after_signal() {
        let (coordinator, _rx) = ShutdownCoordinator::new();
        let waiter = coordinator.clone();

        let handle = tokio::spawn(async move {
            waiter.wait_for_signal().await;
        });

        coordinator.signal();
        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("waiter should resolve after signal")
            .unwrap();
    }

    #[tokio::test]
    async fn test_wait_resolves_if_already_signaled() {
        let (coordinator, _rx) = ShutdownCoordinator::new();
        coordinator.signal();

        tokio::time::timeout(Duration::from_secs(1), coordinator.wait_for_signal())
            .await
            .expect("waiter should resolve immediately");
    }
}
