// SPDX-FileCopyrightText: 2026 Expensify contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{Arg, ArgMatches, Command, arg};
use expensify_core::{
    Dispatcher, ExpenseDraft, ExpenseUpdates, Expensify, RecordStore, start_add_expense,
    start_edit_expense, start_remove_expense, start_set_expenses,
};

use crate::expense_formatter::ExpenseFormatter;
use crate::util::{ArgOutputFormat, now_millis, parse_amount, parse_date};

#[derive(Debug, Clone)]
pub struct CmdExpenseList {
    pub output_format: ArgOutputFormat,
}

impl CmdExpenseList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List your expenses")
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run<S: RecordStore>(self, app: &Expensify<S>) -> Result<(), Box<dyn Error>> {
        tracing::debug!("listing expenses...");
        let dispatcher = printer(self.output_format);
        start_set_expenses(&app.context(&dispatcher)).await?;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdExpenseAdd {
    pub description: Option<String>,
    pub note: Option<String>,
    pub amount: Option<i64>,
    pub created_at: Option<i64>,

    pub output_format: ArgOutputFormat,
}

impl CmdExpenseAdd {
    pub const NAME: &str = "add";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("new")
            .about("Add a new expense")
            .arg(arg_description())
            .arg(arg_note())
            .arg(arg_amount())
            .arg(arg_created_at())
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            description: get_description(matches),
            note: get_note(matches),
            amount: get_amount(matches),
            created_at: get_created_at(matches),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run<S: RecordStore>(self, app: &Expensify<S>) -> Result<(), Box<dyn Error>> {
        tracing::debug!("adding expense...");
        let draft = ExpenseDraft {
            description: self.description,
            note: self.note,
            amount: self.amount,
            created_at: Some(self.created_at.unwrap_or_else(now_millis)),
        };

        let dispatcher = printer(self.output_format);
        start_add_expense(&app.context(&dispatcher), draft).await?;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdExpenseEdit {
    pub id: String,
    pub description: Option<String>,
    pub note: Option<String>,
    pub amount: Option<i64>,
    pub created_at: Option<i64>,

    pub output_format: ArgOutputFormat,
}

impl CmdExpenseEdit {
    pub const NAME: &str = "edit";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Edit an expense")
            .arg(arg_id())
            .arg(arg_description())
            .arg(arg_note())
            .arg(arg_amount())
            .arg(arg_created_at())
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: get_id(matches),
            description: get_description(matches),
            note: get_note(matches),
            amount: get_amount(matches),
            created_at: get_created_at(matches),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run<S: RecordStore>(self, app: &Expensify<S>) -> Result<(), Box<dyn Error>> {
        tracing::debug!(id = %self.id, "editing expense...");
        let updates = ExpenseUpdates {
            description: self.description,
            note: self.note,
            amount: self.amount,
            created_at: self.created_at,
        };
        if updates.is_empty() {
            return Err(
                "Nothing to update, pass --description, --note, --amount or --created-at".into(),
            );
        }

        let dispatcher = printer(self.output_format);
        start_edit_expense(&app.context(&dispatcher), &self.id, updates).await?;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdExpenseRemove {
    pub id: String,
    pub output_format: ArgOutputFormat,
}

impl CmdExpenseRemove {
    pub const NAME: &str = "remove";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("rm")
            .about("Remove an expense")
            .arg(arg_id())
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: get_id(matches),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run<S: RecordStore>(self, app: &Expensify<S>) -> Result<(), Box<dyn Error>> {
        tracing::debug!(id = %self.id, "removing expense...");
        let dispatcher = printer(self.output_format);
        start_remove_expense(&app.context(&dispatcher), &self.id).await?;
        Ok(())
    }
}

/// A dispatcher that prints every action it sees.
fn printer(output_format: ArgOutputFormat) -> Dispatcher {
    let formatter = ExpenseFormatter::new(output_format);
    let mut dispatcher = Dispatcher::new();
    dispatcher.register(move |action| match formatter.render(action) {
        Ok(out) => println!("{out}"),
        Err(e) => tracing::error!(kind = action.kind(), error = %e, "failed to render action"),
    });
    dispatcher
}

fn arg_id() -> Arg {
    arg!(id: <ID> "The id of the expense, after `--` if it starts with a dash")
}

fn get_id(matches: &ArgMatches) -> String {
    matches
        .get_one::<String>("id")
        .cloned()
        .unwrap_or_default()
}

fn arg_description() -> Arg {
    arg!(-d --description <DESCRIPTION> "What the money was spent on")
}

fn get_description(matches: &ArgMatches) -> Option<String> {
    matches.get_one("description").cloned()
}

fn arg_note() -> Arg {
    arg!(-n --note <NOTE> "A free-form note")
}

fn get_note(matches: &ArgMatches) -> Option<String> {
    matches.get_one("note").cloned()
}

fn arg_amount() -> Arg {
    arg!(-a --amount <AMOUNT> "Amount spent, e.g. 12.50").value_parser(parse_amount)
}

fn get_amount(matches: &ArgMatches) -> Option<i64> {
    matches.get_one("amount").copied()
}

fn arg_created_at() -> Arg {
    arg!(--"created-at" <DATE> "Date of the expense, in the format YYYY-MM-DD")
        .value_parser(parse_date)
}

fn get_created_at(matches: &ArgMatches) -> Option<i64> {
    matches.get_one("created-at").copied()
}
