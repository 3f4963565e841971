// SPDX-FileCopyrightText: 2026 Expensify contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use colored::Color;
use expensify_core::{Action, Expense, ExpenseUpdates};

use crate::table::{Column, PaddingDirection, Table};
use crate::util::{ArgOutputFormat, format_amount, format_date};

/// Renders dispatched expense actions for the terminal.
#[derive(Debug, Clone)]
pub struct ExpenseFormatter {
    columns: Vec<ExpenseColumn>,
    output_format: ArgOutputFormat,
}

impl ExpenseFormatter {
    pub fn new(output_format: ArgOutputFormat) -> Self {
        Self {
            columns: vec![
                ExpenseColumn::Id,
                ExpenseColumn::CreatedAt,
                ExpenseColumn::Amount,
                ExpenseColumn::Description,
                ExpenseColumn::Note,
            ],
            output_format,
        }
    }

    pub fn render(&self, action: &Action) -> Result<String, Box<dyn Error>> {
        if self.output_format == ArgOutputFormat::Json {
            return Ok(serde_json::to_string_pretty(action)?);
        }

        Ok(match action {
            Action::AddExpense { expense } => {
                let table = self.table(std::slice::from_ref(expense))?;
                format!("Added expense {}\n{table}", expense.id)
            }
            Action::EditExpense { id, updates } => {
                format!("Updated expense {id}: {}", changed_fields(updates))
            }
            Action::RemoveExpense { id } => format!("Removed expense {id}"),
            Action::SetExpenses { expenses } if expenses.is_empty() => "No expenses".to_string(),
            Action::SetExpenses { expenses } => {
                format!("{}\n{}", self.table(expenses)?, summary(expenses))
            }
        })
    }

    fn table(&self, expenses: &[Expense]) -> Result<String, Box<dyn Error>> {
        let mut buf = Vec::new();
        Table {
            columns: &self.columns,
            separator: "  ",
            padding: true,
            data: expenses,
        }
        .write_to(&mut buf)?;
        let table = String::from_utf8(buf)?;
        Ok(table.lines().map(str::trim_end).collect::<Vec<_>>().join("\n"))
    }
}

/// e.g. `Viewing 2 expenses totalling $94.34`
fn summary(expenses: &[Expense]) -> String {
    let total = expenses
        .iter()
        .fold(0_i64, |acc, e| acc.saturating_add(e.amount));
    let noun = if expenses.len() == 1 {
        "expense"
    } else {
        "expenses"
    };
    format!(
        "Viewing {} {noun} totalling {}",
        expenses.len(),
        format_amount(total)
    )
}

fn changed_fields(updates: &ExpenseUpdates) -> String {
    let mut fields = Vec::new();
    if let Some(description) = &updates.description {
        fields.push(format!("description={description:?}"));
    }
    if let Some(note) = &updates.note {
        fields.push(format!("note={note:?}"));
    }
    if let Some(amount) = updates.amount {
        fields.push(format!("amount={}", format_amount(amount)));
    }
    if let Some(created_at) = updates.created_at {
        fields.push(format!("created_at={}", format_date(created_at)));
    }

    if fields.is_empty() {
        "nothing changed".to_string()
    } else {
        fields.join(", ")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpenseColumn {
    Id,
    CreatedAt,
    Amount,
    Description,
    Note,
}

impl Column<Expense> for ExpenseColumn {
    fn format(&self, expense: &Expense) -> String {
        match self {
            ExpenseColumn::Id => expense.id.clone(),
            ExpenseColumn::CreatedAt => format_date(expense.created_at),
            ExpenseColumn::Amount => format_amount(expense.amount),
            ExpenseColumn::Description => expense.description.clone(),
            ExpenseColumn::Note => expense.note.clone(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            ExpenseColumn::Amount => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn get_color(&self, _expense: &Expense) -> Option<Color> {
        match self {
            ExpenseColumn::Id | ExpenseColumn::Note => Some(Color::BrightBlack),
            ExpenseColumn::Amount => Some(Color::Green),
            _ => None,
        }
    }
}
