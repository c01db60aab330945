// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tracelane-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tracelane and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The slice of source text a report is drawn over.

use crate::model::checkpoint::LineRange;
use crate::model::report::FunctionInfo;

/// Source lines `first_line ..` of one function, one row per line.
///
/// This is the explicit line number to row mapping renderers use to place cells.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SourceListing {
    first_line: u32,
    rows: Vec<String>,
}

impl SourceListing {
    /// Keeps the one-based lines `first ..= last` of `text`, clamped to the lines it has.
    ///
    /// `first == 0` or `first > last` yields an empty listing.
    pub fn from_source(text: &str, first: u32, last: u32) -> Self {
        if first == 0 || first > last {
            return Self { first_line: first, rows: Vec::new() };
        }

        let skip = (first - 1) as usize;
        let take = (last - first) as usize + 1;
        let rows = split_lines(text).skip(skip).take(take).map(str::to_owned).collect();
        Self { first_line: first, rows }
    }

    pub fn for_function(text: &str, function: &FunctionInfo) -> Self {
        let (first, last) = function.lines;
        Self::from_source(text, first, last)
    }

    pub fn first_line(&self) -> u32 {
        self.first_line
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The range layout iterates: one line per row.
    pub fn line_range(&self) -> LineRange {
        LineRange::new(self.first_line, u32::try_from(self.rows.len()).unwrap_or(u32::MAX))
    }

    pub fn row(&self, line: u32) -> Option<&str> {
        let offset = line.checked_sub(self.first_line)?;
        self.rows.get(usize::try_from(offset).ok()?).map(String::as_str)
    }

    /// `(line, text)` pairs in listing order.
    pub fn numbered_rows(&self) -> impl Iterator<Item = (u32, &str)> + '_ {
        self.line_range().lines().zip(self.rows.iter().map(String::as_str))
    }

    /// Widest line number, in digits; used to right-align the gutter.
    pub fn gutter_width(&self) -> usize {
        self.line_range().last_line().map_or(1, |last| itoa::Buffer::new().format(last).len())
    }
}

/// Splits on `\n`, dropping a trailing `\r`; a final line without newline still counts.
pub(crate) fn split_lines(text: &str) -> impl Iterator<Item = &str> + '_ {
    let bytes = text.as_bytes();
    let mut start = 0usize;
    let mut ends = memchr::memchr_iter(b'\n', bytes);
    std::iter::from_fn(move || {
        if start > bytes.len() {
            return None;
        }
        let (end, next) = match ends.next() {
            Some(end) => (end, end + 1),
            None if start < bytes.len() => (bytes.len(), bytes.len() + 1),
            None => return None,
        };
        let line = &text[start..end];
        start = next;
        Some(line.strip_suffix('\r').unwrap_or(line))
    })
}
