//! Main TUI runner - entry point and event loop

use mealprep_app::{signals, AuthProvider, Engine, Message};
use mealprep_core::prelude::*;

use super::{event, render, terminal};

/// Run the dashboard in the terminal until the user quits.
///
/// `start_route` overrides the configured start route.
pub async fn run<A>(mut engine: Engine<A>, start_route: Option<String>) -> Result<()>
where
    A: AuthProvider + Send + Sync + 'static,
{
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;
    terminal::enable_mouse();

    // Sends Message::Quit on SIGINT/SIGTERM
    signals::spawn_signal_handler(engine.msg_sender());

    // The viewport must be known before the first route resolves
    match term.size() {
        Ok(size) => engine.process_message(Message::Resize {
            width: size.width,
            height: size.height,
        }),
        Err(e) => warn!("Could not read terminal size: {}", e),
    }

    match start_route {
        Some(path) => engine.start_at(path),
        None => engine.start(),
    }

    let result = run_loop(&mut term, &mut engine);

    engine.shutdown().await;

    terminal::disable_mouse();
    ratatui::restore();

    result
}

/// Main event loop
fn run_loop<A>(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine<A>) -> Result<()>
where
    A: AuthProvider + Send + Sync + 'static,
{
    while !engine.should_quit() {
        // Process external messages (login results, signal handler)
        engine.drain_pending_messages();

        if engine.should_quit() {
            break;
        }

        terminal.draw(|frame| render::view(frame, &engine.state))?;

        if let Some(message) = event::poll(&engine.state)? {
            engine.process_message(message);
        }
    }

    Ok(())
}
