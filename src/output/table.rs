// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Column-aligned text tables.

/// Spaces between two columns.
const PADDING: usize = 1;

/// A text table with a header row, a dash separator and data rows.
///
/// Every column is as wide as its widest cell plus one space; the last
/// column is never padded.
///
/// # Examples
///
/// ```
/// use tascli::output::Table;
///
/// let mut table = Table::new(["IP", "Name"]);
/// table.push_row(["192.168.1.20", "lamp"]);
/// assert_eq!(
///     table.render(),
///     "IP           Name\n--           ----\n192.168.1.20 lamp\n"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Creates a table with the given column headers.
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Appends a data row. Missing trailing cells render empty.
    pub fn push_row<I, S>(&mut self, row: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(row.into_iter().map(Into::into).collect());
    }

    /// Returns the number of data rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if there are no data rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Renders the table; every line ends with a newline.
    #[must_use]
    pub fn render(&self) -> String {
        let columns = self
            .rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.headers.len()))
            .max()
            .unwrap_or_default();

        let separator: Vec<String> = self
            .headers
            .iter()
            .map(|h| "-".repeat(h.chars().count()))
            .collect();

        let lines: Vec<&[String]> = std::iter::once(self.headers.as_slice())
            .chain(std::iter::once(separator.as_slice()))
            .chain(self.rows.iter().map(Vec::as_slice))
            .collect();

        let mut widths = vec![0; columns];
        for line in &lines {
            for (width, cell) in widths.iter_mut().zip(line.iter()) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut out = String::new();
        for line in lines {
            let mut rendered = String::new();
            for (i, width) in widths.iter().enumerate() {
                let cell = line.get(i).map_or("", String::as_str);
                if i + 1 == columns {
                    rendered.push_str(cell);
                } else {
                    let fill = width - cell.chars().count() + PADDING;
                    rendered.push_str(cell);
                    rendered.extend(std::iter::repeat_n(' ', fill));
                }
            }
            out.push_str(rendered.trim_end());
            out.push('\n');
        }
        out
    }
}
