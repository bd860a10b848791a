// SPDX-License-Identifier: MIT OR Apache-2.0
//! Unicode box-drawing table renderer.

use crate::style::{styled, Theme};
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table,
};

/// Builder for styled tables with rounded box-drawing borders.
#[derive(Debug, Default)]
pub struct TableBuilder {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TableBuilder {
    /// Creates a new table builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the header row.
    pub fn add_header(&mut self, headers: Vec<&str>) {
        self.headers = headers.into_iter().map(String::from).collect();
    }

    /// Adds a data row.
    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Builds the table string with the given theme.
    #[must_use]
    pub fn build(&self, theme: &Theme) -> String {
        if self.headers.is_empty() && self.rows.is_empty() {
            return String::new();
        }

        let mut data: Vec<Vec<String>> = Vec::with_capacity(self.rows.len() + 1);
        data.push(
            self.headers
                .iter()
                .map(|h| styled(h, theme.header))
                .collect(),
        );
        data.extend(self.rows.iter().cloned());

        Table::from_iter(data)
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()))
            .to_string()
    }
}
