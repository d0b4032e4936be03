//! Termination signals
//!
//! SIGINT, SIGTERM and SIGHUP (Ctrl+C elsewhere) become a [`Message::Quit`],
//! so both runners shut down through the normal update path.

use tokio::sync::mpsc;

use crate::message::Message;
use mealprep_core::prelude::*;

/// Spawn a task that turns the first termination signal into a quit message
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        match next_signal().await {
            Ok(name) => {
                info!("{} received, quitting", name);
                if tx.send(Message::Quit).await.is_err() {
                    debug!("Message channel closed before {} was delivered", name);
                }
            }
            Err(e) => warn!("Termination signals will not be handled: {}", e),
        }
    });
}

#[cfg(unix)]
async fn next_signal() -> Result<&'static str> {
    use tokio::signal::unix::{signal, SignalKind};

    let listen = |kind: SignalKind, name: &'static str| {
        signal(kind).map_err(|e| Error::terminal(format!("Cannot listen for {}: {}", name, e)))
    };
    let mut interrupt = listen(SignalKind::interrupt(), "SIGINT")?;
    let mut terminate = listen(SignalKind::terminate(), "SIGTERM")?;
    let mut hangup = listen(SignalKind::hangup(), "SIGHUP")?;

    let name = tokio::select! {
        _ = interrupt.recv() => "SIGINT",
        _ = terminate.recv() => "SIGTERM",
        _ = hangup.recv() => "SIGHUP",
    };
    Ok(name)
}

#[cfg(not(unix))]
async fn next_signal() -> Result<&'static str> {
    tokio::signal::ctrl_c()
        .await
        .map_err(|e| Error::terminal(format!("Cannot listen for Ctrl+C: {}", e)))?;
    Ok("Ctrl+C")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_no_quit_without_a_signal() {
        let (tx, mut rx) = mpsc::channel::<Message>(1);

        spawn_signal_handler(tx);
        tokio::time::sleep(Duration::from_millis(10)).await;

        assert!(rx.try_recv().is_err());
    }
}
