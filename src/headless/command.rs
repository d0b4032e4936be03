//! Stdin command parsing for headless mode

use thiserror::Error;

/// A command read from stdin
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadlessCommand {
    /// `goto <path>`
    Goto(String),
    /// `click <test-id|label>`
    Click(String),
    /// `menu` - press the user menu trigger
    Menu,
    /// `outside` - click outside any open menu or panel
    Outside,
    /// `settings` - pick "User Settings" in the open menu
    Settings,
    /// `logout` - pick "Log Out" in the open menu
    Logout,
    /// `sidebar` - press the hamburger button
    Sidebar,
    Back,
    Login { email: String, password: String },
    /// `resize <cols>` - change the simulated terminal width
    Resize(u16),
    Snapshot,
    Quit,
}

/// Why a stdin line could not be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("Usage: {0}")]
    MissingArgument(&'static str),

    #[error("Invalid width: {0}")]
    InvalidWidth(String),
}

/// Parse one stdin line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<HeadlessCommand>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (name, rest) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (line, ""),
    };

    let command = match name {
        "goto" => HeadlessCommand::Goto(required(rest, "goto <path>")?.to_string()),
        "click" => HeadlessCommand::Click(required(rest, "click <test-id|label>")?.to_string()),
        "menu" => HeadlessCommand::Menu,
        "outside" => HeadlessCommand::Outside,
        "settings" => HeadlessCommand::Settings,
        "logout" => HeadlessCommand::Logout,
        "sidebar" => HeadlessCommand::Sidebar,
        "back" => HeadlessCommand::Back,
        "login" => {
            let mut parts = rest.split_whitespace();
            match (parts.next(), parts.next()) {
                (Some(email), Some(password)) => HeadlessCommand::Login {
                    email: email.to_string(),
                    password: password.to_string(),
                },
                _ => return Err(CommandError::MissingArgument("login <email> <password>")),
            }
        }
        "resize" => {
            let cols = required(rest, "resize <cols>")?;
            match cols.parse::<u16>() {
                Ok(width) if width > 0 => HeadlessCommand::Resize(width),
                _ => return Err(CommandError::InvalidWidth(cols.to_string())),
            }
        }
        "snapshot" => HeadlessCommand::Snapshot,
        "q" | "quit" => HeadlessCommand::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };

    Ok(Some(command))
}

fn required<'a>(rest: &'a str, usage: &'static str) -> Result<&'a str, CommandError> {
    if rest.is_empty() {
        Err(CommandError::MissingArgument(usage))
    } else {
        Ok(rest)
    }
}
