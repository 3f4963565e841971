// SPDX-FileCopyrightText: 2026 Expensify contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line interface for Expensify.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
#![allow(clippy::missing_errors_doc, clippy::must_use_candidate)]

mod cli;
mod cmd_expense;
mod config;
mod expense_formatter;
mod table;
mod util;

pub use crate::cli::{Cli, Commands, run};
pub use crate::cmd_expense::{CmdExpenseAdd, CmdExpenseEdit, CmdExpenseList, CmdExpenseRemove};
pub use crate::util::ArgOutputFormat;
