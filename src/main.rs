//! MealPrepper - terminal dashboard for the meal-planning app
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use mealprep::LaunchOptions;
use mealprep_core::prelude::*;

/// MealPrepper - terminal dashboard for the meal-planning app
#[derive(Parser, Debug)]
#[command(name = "mealprep")]
#[command(about = "Dashboard shell for MealPrepper", long_about = None)]
struct Args {
    /// Run in headless mode (NDJSON events on stdout, commands on stdin)
    #[arg(long)]
    headless: bool,

    /// Route to open on start (defaults to behavior.start_route)
    #[arg(long, value_name = "PATH")]
    route: Option<String>,

    /// Session token to use for this run (not persisted)
    #[arg(long)]
    token: Option<String>,

    /// Email of the signed-in user (with --token)
    #[arg(long)]
    email: Option<String>,

    /// Full name of the signed-in user
    #[arg(long)]
    name: Option<String>,

    /// Config file (defaults to .mealprep/config.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

impl From<Args> for LaunchOptions {
    fn from(args: Args) -> Self {
        Self {
            config: args.config,
            route: args.route,
            token: args.token,
            email: args.email,
            name: args.name,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let headless = args.headless;
    let options = LaunchOptions::from(args);

    if headless {
        mealprep::run_headless_with(options).await
    } else {
        mealprep::run(options).await
    }
}
