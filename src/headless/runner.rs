//! Headless mode runner - main event loop without TUI
//!
//! Reads [`HeadlessCommand`]s from stdin, feeds them to the engine as
//! messages and prints every resulting engine event as an NDJSON line.

use std::ops::ControlFlow;

use tokio::sync::{broadcast, mpsc};
use tracing::{error, info, warn};

use mealprep_app::handler::resolve_target;
use mealprep_app::login::LoginField;
use mealprep_app::page::PageKind;
use mealprep_app::user_menu::UserMenuItem;
use mealprep_app::{signals, AuthProvider, Engine, EngineEvent, Message};
use mealprep_core::prelude::Result;

use super::command::{parse_command, CommandError, HeadlessCommand};
use super::HeadlessEvent;

/// Height reported with `resize` before any size is known
const DEFAULT_HEIGHT: u16 = 24;

type CommandLine = std::result::Result<HeadlessCommand, CommandError>;

/// Run in headless mode - output JSON events instead of TUI
pub async fn run_headless<A>(mut engine: Engine<A>, start_route: Option<String>) -> Result<()>
where
    A: AuthProvider + Send + Sync + 'static,
{
    info!("═══════════════════════════════════════════════════════");
    info!("MealPrepper starting in HEADLESS mode");
    info!("═══════════════════════════════════════════════════════");

    let mut events = engine.subscribe();
    signals::spawn_signal_handler(engine.msg_sender());

    let (cmd_tx, cmd_rx) = mpsc::channel::<CommandLine>(64);
    std::thread::spawn(move || {
        spawn_stdin_reader_blocking(cmd_tx);
    });

    let mut emit = |event: HeadlessEvent| event.emit();

    match start_route {
        Some(route) => engine.start_at(route),
        None => engine.start(),
    }
    emit_engine_events(&mut events, &mut emit);

    let result = headless_event_loop(&mut engine, cmd_rx, &mut events, &mut emit).await;

    engine.shutdown().await;
    result
}

enum Next {
    Message(Option<Message>),
    Command(Option<CommandLine>),
}

/// Main headless event loop.
///
/// Ends on quit, or once stdin is closed and no login is in flight.
pub async fn headless_event_loop<A, F>(
    engine: &mut Engine<A>,
    mut commands: mpsc::Receiver<CommandLine>,
    events: &mut broadcast::Receiver<EngineEvent>,
    emit: &mut F,
) -> Result<()>
where
    A: AuthProvider + Send + Sync + 'static,
    F: FnMut(HeadlessEvent),
{
    let mut stdin_open = true;

    loop {
        if engine.should_quit() {
            info!("Quit requested");
            break;
        }
        if !stdin_open && !engine.state.login.submitting {
            info!("Stdin closed");
            break;
        }

        let next = if stdin_open {
            tokio::select! {
                msg = engine.msg_rx.recv() => Next::Message(msg),
                cmd = commands.recv() => Next::Command(cmd),
            }
        } else {
            Next::Message(engine.msg_rx.recv().await)
        };

        match next {
            Next::Message(Some(msg)) => engine.process_message(msg),
            Next::Message(None) => {
                info!("Message channel closed");
                break;
            }
            Next::Command(Some(Ok(command))) => {
                let flow = apply_command(engine, command, emit);
                emit_engine_events(events, emit);
                if flow.is_break() {
                    break;
                }
                continue;
            }
            Next::Command(Some(Err(e))) => {
                warn!("{}", e);
                emit(HeadlessEvent::error(e.to_string(), false));
            }
            Next::Command(None) => stdin_open = false,
        }

        emit_engine_events(events, emit);
    }

    Ok(())
}

/// Translate a command into engine messages.
///
/// Commands that make no sense in the current state emit a non-fatal error.
pub fn apply_command<A, F>(
    engine: &mut Engine<A>,
    command: HeadlessCommand,
    emit: &mut F,
) -> ControlFlow<()>
where
    A: AuthProvider + Send + Sync + 'static,
    F: FnMut(HeadlessEvent),
{
    let state = &engine.state;

    let messages = match command {
        HeadlessCommand::Goto(path) => vec![Message::Navigate { path }],
        HeadlessCommand::Click(needle) => match resolve_target(state, &needle) {
            Some(Message::SelectUserMenuItem(_)) => vec![Message::ActivateTarget(needle)],
            // Anything but a menu item is outside the open menu
            _ if state.nav.user_menu.is_open() => vec![Message::DismissUserMenu],
            Some(_) => vec![Message::ActivateTarget(needle)],
            None => {
                emit(HeadlessEvent::error(format!("Nothing to click: {}", needle), false));
                return ControlFlow::Continue(());
            }
        },
        HeadlessCommand::Menu => vec![Message::ToggleUserMenu],
        HeadlessCommand::Outside => {
            if state.nav.user_menu.is_open() {
                vec![Message::DismissUserMenu]
            } else if state.nav.sidebar.is_open() {
                vec![Message::CloseSidebar]
            } else {
                Vec::new()
            }
        }
        HeadlessCommand::Settings => match menu_item(engine, UserMenuItem::Settings, emit) {
            Some(msg) => vec![msg],
            None => return ControlFlow::Continue(()),
        },
        HeadlessCommand::Logout => match menu_item(engine, UserMenuItem::LogOut, emit) {
            Some(msg) => vec![msg],
            None => return ControlFlow::Continue(()),
        },
        HeadlessCommand::Sidebar => vec![Message::ToggleSidebar],
        HeadlessCommand::Back => vec![Message::NavigateBack],
        HeadlessCommand::Login { email, password } => {
            if state.page_kind() != PageKind::Login {
                emit(HeadlessEvent::error("Not on the login page".to_string(), false));
                return ControlFlow::Continue(());
            }
            vec![
                Message::SetLoginField {
                    field: LoginField::Email,
                    value: email,
                },
                Message::SetLoginField {
                    field: LoginField::Password,
                    value: password,
                },
                Message::SubmitLogin,
            ]
        }
        HeadlessCommand::Resize(width) => {
            let height = match state.terminal_size.1 {
                0 => DEFAULT_HEIGHT,
                height => height,
            };
            vec![Message::Resize { width, height }]
        }
        HeadlessCommand::Snapshot => {
            emit(HeadlessEvent::snapshot(state));
            return ControlFlow::Continue(());
        }
        HeadlessCommand::Quit => {
            engine.process_message(Message::Quit);
            return ControlFlow::Break(());
        }
    };

    for msg in messages {
        engine.process_message(msg);
    }
    ControlFlow::Continue(())
}

/// Pick an entry of the open user menu
fn menu_item<A, F>(engine: &Engine<A>, item: UserMenuItem, emit: &mut F) -> Option<Message>
where
    F: FnMut(HeadlessEvent),
{
    if engine.state.nav.user_menu.is_open() {
        Some(Message::SelectUserMenuItem(item))
    } else {
        emit(HeadlessEvent::error("User menu is closed".to_string(), false));
        None
    }
}

/// Print every engine event received since the last call
fn emit_engine_events<F>(events: &mut broadcast::Receiver<EngineEvent>, emit: &mut F)
where
    F: FnMut(HeadlessEvent),
{
    loop {
        match events.try_recv() {
            Ok(event) => {
                if let Some(line) = HeadlessEvent::from_engine_event(&event) {
                    emit(line);
                }
            }
            Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                warn!("Dropped {} engine events", skipped);
            }
            Err(_) => break,
        }
    }
}

/// Spawn stdin reader task that sends commands to the loop (blocking version)
fn spawn_stdin_reader_blocking(cmd_tx: mpsc::Sender<CommandLine>) {
    use std::io::BufRead;

    let stdin = std::io::stdin();
    let reader = stdin.lock();

    for line in reader.lines() {
        match line {
            Ok(line) => match parse_command(&line) {
                Ok(Some(command)) => {
                    let quit = command == HeadlessCommand::Quit;
                    if cmd_tx.blocking_send(Ok(command)).is_err() || quit {
                        break;
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    if cmd_tx.blocking_send(Err(e)).is_err() {
                        break;
                    }
                }
            },
            Err(e) => {
                error!("Failed to read stdin: {}", e);
                break;
            }
        }
    }

    info!("Stdin reader exiting");
}
