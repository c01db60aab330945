// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tracelane-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tracelane and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Rendering for prepared trace reports.
//!
//! The Unicode renderer produces text plus a stable highlight index that groups each dot with its
//! source row and commentary; the HTML renderer produces a self-contained page with the same
//! grouping expressed as `data-group` attributes.

use std::collections::BTreeMap;

pub mod html;
#[cfg(test)]
mod test_utils;
mod text;
pub mod unicode;

pub use html::render_document_html;
pub use unicode::{
    render_document_unicode, render_report_unicode, render_report_unicode_annotated,
};

pub const UNICODE_DOT: char = '●';
pub const UNICODE_RAIL: char = '│';
pub const ASCII_DOT: char = 'o';
pub const ASCII_RAIL: char = '|';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// List each checkpoint's messages and notes below the listing.
    pub show_commentary: bool,
    /// Spaces between two subflow columns.
    pub column_gap: usize,
    /// Truncate source rows to this many characters.
    pub max_source_width: Option<usize>,
    /// Use `o` and `|` instead of `●` and `│`.
    pub ascii: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { show_commentary: true, column_gap: 1, max_source_width: None, ascii: false }
    }
}

impl RenderOptions {
    pub(crate) fn dot_glyph(&self) -> char {
        if self.ascii {
            ASCII_DOT
        } else {
            UNICODE_DOT
        }
    }

    pub(crate) fn rail_glyph(&self) -> char {
        if self.ascii {
            ASCII_RAIL
        } else {
            UNICODE_RAIL
        }
    }
}

/// Identifies one dot of a rendered report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DotRef {
    pub subflow: usize,
    pub line: u32,
}

/// A contiguous span of highlighted cells within a single rendered line.
///
/// Coordinates are `(y, x0, x1)` in character-cell indices, inclusive, relative to the returned
/// rendered text lines.
pub type LineSpan = (usize, usize, usize);

/// Mapping from each dot to the spans that light up with it: the dot cell, its source row and its
/// commentary.
pub type HighlightIndex = BTreeMap<DotRef, Vec<LineSpan>>;

/// Render output plus an index suitable for cell-accurate highlighting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedRender {
    pub text: String,
    pub highlight_index: HighlightIndex,
}

pub(crate) fn clamp_highlight_index_to_text(highlight_index: &mut HighlightIndex, text: &str) {
    let line_lens = text.split('\n').map(text::text_len).collect::<Vec<_>>();

    highlight_index.retain(|_, spans| {
        spans.retain_mut(|span| {
            let (y, x0, x1) = span;

            let len = match line_lens.get(*y) {
                Some(len) => *len,
                None => return false,
            };

            if len == 0 || *x0 >= len {
                return false;
            }

            let max_x = len - 1;
            if *x1 > max_x {
                *x1 = max_x;
            }

            *x0 <= *x1
        });
        !spans.is_empty()
    });
}
