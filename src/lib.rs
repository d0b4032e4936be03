//! MealPrepper dashboard shell
//!
//! Wires the workspace crates together for the `mealprep` binary: builds an
//! [`Engine`] from the command line and configuration, then hands it to the
//! TUI or the headless runner.

pub mod headless;

use std::path::PathBuf;

use mealprep_app::config::{load_settings, load_settings_file};
use mealprep_app::{store_from_settings, Engine, OfflineAuthProvider, Settings};
use mealprep_core::prelude::*;
use mealprep_core::{CurrentUser, Session, SessionToken};

pub use headless::runner::run_headless;

/// Launch options collected from the command line
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    /// Explicit config file (otherwise `.mealprep/config.toml` in the cwd)
    pub config: Option<PathBuf>,

    /// Start route overriding `behavior.start_route`
    pub route: Option<String>,

    /// Session token for this run only (never persisted)
    pub token: Option<String>,

    /// Email of the user the `token` belongs to
    pub email: Option<String>,

    /// Full name reported by the offline auth provider
    pub name: Option<String>,
}

impl LaunchOptions {
    /// Settings from the explicit file or the working directory
    pub fn settings(&self) -> Settings {
        match &self.config {
            Some(path) => load_settings_file(path),
            None => {
                let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
                load_settings(&cwd)
            }
        }
    }

    /// Session given on the command line, if any
    pub fn session_override(&self, default_full_name: Option<&str>) -> Option<Session> {
        let token = self.token.as_deref().map(str::trim).filter(|t| !t.is_empty())?;
        let user = self.email.as_deref().map(|email| {
            let user = CurrentUser::new(email);
            match self.name.as_deref().or(default_full_name) {
                Some(name) => user.with_full_name(name),
                None => user,
            }
        });
        Some(Session::authenticated(SessionToken::new(token), user))
    }
}

/// Build the engine for a run
pub fn build_engine(options: &LaunchOptions, settings: Settings) -> Engine {
    let store = store_from_settings(&settings.session);
    let full_name = options
        .name
        .clone()
        .or_else(|| settings.user.default_full_name.clone());
    let session = options.session_override(full_name.as_deref());

    let mut engine = Engine::new(settings, store, OfflineAuthProvider::new(full_name));
    if let Some(session) = session {
        info!("Using session from the command line");
        engine.set_session(session);
    }
    engine
}

/// Run the terminal dashboard
pub async fn run(options: LaunchOptions) -> Result<()> {
    init("TUI")?;

    let engine = build_engine(&options, options.settings());
    let result = mealprep_tui::run(engine, options.route.clone()).await;

    match result {
        Err(ref e) if e.is_fatal() => error!("Cannot start the dashboard: {}", e),
        Err(ref e) => error!("Application error: {:?}", e),
        Ok(()) => {}
    }

    info!("MealPrepper exiting");
    result
}

/// Run without a terminal UI, reading commands from stdin
pub async fn run_headless_with(options: LaunchOptions) -> Result<()> {
    init("HEADLESS")?;

    let engine = build_engine(&options, options.settings());
    let result = run_headless(engine, options.route.clone()).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("MealPrepper headless mode exiting");
    result
}

fn init(mode: &str) -> Result<()> {
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;
    mealprep_core::logging::init()?;
    info!("Running in {} mode", mode);
    Ok(())
}
