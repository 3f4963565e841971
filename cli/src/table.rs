// SPDX-FileCopyrightText: 2026 Expensify contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::io;

use colored::{Color, Colorize};
use unicode_width::UnicodeWidthStr;

pub struct Table<'a, T, C: Column<T>> {
    pub columns: &'a [C],
    pub separator: &'a str,
    pub padding: bool,
    pub data: &'a [T],
}

impl<T, C: Column<T>> Table<'_, T, C> {
    pub fn write_to(&self, w: &mut impl io::Write) -> io::Result<()> {
        let table: Vec<Vec<String>> = self
            .data
            .iter()
            .map(|row| self.columns.iter().map(|col| col.format(row)).collect())
            .collect();

        let widths = self
            .padding
            .then(|| column_widths(&table, self.columns.len()));
        let last = self.columns.len().saturating_sub(1);

        for (cells, row) in table.into_iter().zip(self.data) {
            for (j, (col, cell)) in self.columns.iter().zip(cells).enumerate() {
                let width = widths.as_ref().and_then(|w| w.get(j)).copied();
                let direction = col.padding_direction();

                // last column does not need padding if it's left-aligned
                let cell = match width {
                    Some(_) if j == last && direction == PaddingDirection::Left => cell,
                    Some(width) => pad(cell, width, direction),
                    None => cell,
                };

                match col.get_color(row) {
                    Some(color) => write!(w, "{}", cell.color(color))?,
                    None => write!(w, "{cell}")?,
                }

                if j < last {
                    write!(w, "{}", self.separator)?;
                } else {
                    writeln!(w)?;
                }
            }
        }

        Ok(())
    }
}

pub trait Column<T> {
    fn format(&self, data: &T) -> String;
    fn padding_direction(&self) -> PaddingDirection;
    fn get_color(&self, data: &T) -> Option<Color>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingDirection {
    Left,
    Right,
}

fn pad(cell: String, width: usize, direction: PaddingDirection) -> String {
    let fill = " ".repeat(width.saturating_sub(cell.width()));
    match direction {
        PaddingDirection::Left => cell + &fill,
        PaddingDirection::Right => fill + &cell,
    }
}

fn column_widths(table: &[Vec<String>], columns: usize) -> Vec<usize> {
    let mut max_width = vec![0; columns];
    for row in table {
        for (max, cell) in max_width.iter_mut().zip(row) {
            *max = (*max).max(cell.width());
        }
    }
    max_width
}
