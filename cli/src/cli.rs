// SPDX-FileCopyrightText: 2026 Expensify contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use expensify_core::{APP_NAME, Expensify};
use futures::{FutureExt, future::BoxFuture};
use tracing_subscriber::EnvFilter;

use crate::cmd_expense::{CmdExpenseAdd, CmdExpenseEdit, CmdExpenseList, CmdExpenseRemove};
use crate::config::parse_config;

/// Run the Expensify command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    init_tracing();
    match Cli::parse() {
        Ok(cli) => {
            if let Err(e) = cli.run().await {
                println!("{} {}", "Error:".red(), e);
            }
        }
        Err(e) => println!("{} {}", "Error:".red(), e),
    }
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Track your expenses, synced to a Firebase Realtime Database.")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(true)
            .arg_required_else_help(true)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $EXPENSIFY_CONFIG if set, else \
$XDG_CONFIG_HOME/expensify/config.toml on Linux and MacOS, %APPDATA%/expensify/config.toml on \
Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .subcommand(CmdExpenseList::command())
            .subcommand(CmdExpenseAdd::command())
            .subcommand(CmdExpenseEdit::command())
            .subcommand(CmdExpenseRemove::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(&matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(&matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::{Add, Edit, List, Remove};
        let command = match matches.subcommand() {
            Some((CmdExpenseList::NAME, matches)) => List(CmdExpenseList::from(matches)),
            Some((CmdExpenseAdd::NAME, matches)) => Add(CmdExpenseAdd::from(matches)),
            Some((CmdExpenseEdit::NAME, matches)) => Edit(CmdExpenseEdit::from(matches)),
            Some((CmdExpenseRemove::NAME, matches)) => Remove(CmdExpenseRemove::from(matches)),
            Some((name, _)) => return Err(format!("Unknown command: {name}").into()),
            None => return Err("No command given".into()),
        };

        let config = matches.get_one("config").cloned();
        Ok(Cli { config, command })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// List expenses
    List(CmdExpenseList),

    /// Add an expense
    Add(CmdExpenseAdd),

    /// Edit an expense
    Edit(CmdExpenseEdit),

    /// Remove an expense
    Remove(CmdExpenseRemove),
}

impl Commands {
    /// Run the command with the given configuration
    #[rustfmt::skip]
    pub async fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        use Commands::{Add, Edit, List, Remove};
        match self {
            List(a)   => Self::run_with(config, |x| a.run(x).boxed()).await,
            Add(a)    => Self::run_with(config, |x| a.run(x).boxed()).await,
            Edit(a)   => Self::run_with(config, |x| a.run(x).boxed()).await,
            Remove(a) => Self::run_with(config, |x| a.run(x).boxed()).await,
        }
    }

    async fn run_with<F>(config: Option<PathBuf>, f: F) -> Result<(), Box<dyn Error>>
    where
        F: for<'a> FnOnce(&'a Expensify) -> BoxFuture<'a, Result<(), Box<dyn Error>>>,
    {
        tracing::debug!("parsing configuration...");
        let core_config = parse_config(config).await?;
        let app = Expensify::new(core_config)?;

        f(&app).await
    }
}
