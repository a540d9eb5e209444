//! Termination signal handling.
//!
//! A dedicated task blocks on the signal sources; the returned future
//! resolving is what drives the server's graceful-shutdown path. In-flight
//! requests are not explicitly drained here.

/// Resolve when a termination signal arrives (SIGINT, SIGTERM or SIGQUIT).
#[cfg(unix)]
pub async fn shutdown_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    let mut interrupt =
        signal(SignalKind::interrupt()).expect("failed to install SIGINT handler");
    let mut terminate =
        signal(SignalKind::terminate()).expect("failed to install SIGTERM handler");
    let mut quit = signal(SignalKind::quit()).expect("failed to install SIGQUIT handler");

    tokio::select! {
        _ = interrupt.recv() => {}
        _ = terminate.recv() => {}
        _ = quit.recv() => {}
    }

    tracing::info!("shutdown signal received");
}

/// Resolve when Ctrl+C is pressed.
#[cfg(not(unix))]
pub async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install Ctrl+C handler");
    tracing::info!("shutdown signal received");
}
