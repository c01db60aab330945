// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tracelane-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tracelane and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::layout::CellKind;
use crate::model::checkpoint::Comment;
use crate::model::report::TraceDocument;
use crate::pipeline::{PreparedCheckpoint, PreparedReport};
use crate::source::SourceListing;

use super::text::{join_trimmed, push_line_number, push_spaces, text_len, truncate_with_ellipsis};
use super::{clamp_highlight_index_to_text, AnnotatedRender, DotRef, HighlightIndex, RenderOptions};

const NEW_SUBFLOW_MARKER: char = '*';
const NOTE_PREFIX: &str = "note: ";
const OUTSIDE_LISTING_SUFFIX: &str = "  [outside listing]";

/// Renders one report as a swimlane over the listing, followed by its commentary.
pub fn render_report_unicode(
    report: &PreparedReport,
    listing: &SourceListing,
    options: RenderOptions,
) -> String {
    render_report_unicode_annotated(report, listing, options).text
}

/// Like [`render_report_unicode`], plus the spans each dot groups together: its cell, its source
/// row and the lines of its commentary.
pub fn render_report_unicode_annotated(
    report: &PreparedReport,
    listing: &SourceListing,
    options: RenderOptions,
) -> AnnotatedRender {
    let layout = report.layout();
    let gutter = listing.gutter_width();
    let mut lines = Vec::<String>::with_capacity(layout.rows().len() + 2);
    let mut highlight_index = HighlightIndex::new();

    lines.push(report_header(report));

    for row in layout.rows() {
        let y = lines.len();
        let mut out = String::new();
        let mut dot_xs = Vec::<(usize, usize)>::new();

        for (idx, cell) in row.cells().iter().enumerate() {
            if idx > 0 {
                push_spaces(&mut out, options.column_gap);
            }
            match cell {
                CellKind::Dot => {
                    dot_xs.push((idx, text_len(&out)));
                    out.push(options.dot_glyph());
                }
                CellKind::Rail => out.push(options.rail_glyph()),
                CellKind::Empty => out.push(' '),
            }
        }
        if !row.cells().is_empty() {
            out.push(' ');
        }

        push_line_number(&mut out, row.line(), gutter);
        out.push_str(" | ");
        let source = listing.row(row.line()).unwrap_or_default();
        match options.max_source_width {
            Some(max) => out.push_str(&truncate_with_ellipsis(source, max)),
            None => out.push_str(source),
        }

        let row_len = text_len(&out);
        for (subflow, x) in dot_xs {
            let spans = highlight_index.entry(DotRef { subflow, line: row.line() }).or_default();
            spans.push((y, x, x));
            spans.push((y, 0, row_len.saturating_sub(1)));
        }
        lines.push(out);
    }

    if options.show_commentary && !report.checkpoints().is_empty() {
        lines.push(String::new());
        for checkpoint in report.checkpoints() {
            let first_y = lines.len();
            push_commentary(&mut lines, checkpoint, gutter);
            if checkpoint.drawn() {
                let key = DotRef { subflow: checkpoint.subflow(), line: checkpoint.line() };
                let spans = highlight_index.entry(key).or_default();
                for (y, line) in lines.iter().enumerate().skip(first_y) {
                    spans.push((y, 0, text_len(line).saturating_sub(1)));
                }
            }
        }
    }

    let text = join_trimmed(&lines);
    clamp_highlight_index_to_text(&mut highlight_index, &text);
    AnnotatedRender { text, highlight_index }
}

/// Renders every report of a document, separated by blank lines.
pub fn render_document_unicode(
    doc: &TraceDocument,
    listing: &SourceListing,
    reports: &[PreparedReport],
    options: RenderOptions,
) -> String {
    let mut out = format!("{}: In function '{}':", doc.filename, doc.function.name);
    if reports.is_empty() {
        out.push_str("\n(no reports)");
    }
    for report in reports {
        out.push_str("\n\n");
        out.push_str(&render_report_unicode(report, listing, options));
    }
    out
}

fn report_header(report: &PreparedReport) -> String {
    match report.severity() {
        Some(severity) => format!("Report {} ({severity}): {}", report.number(), report.message()),
        None => format!("Report {}: {}", report.number(), report.message()),
    }
}

fn push_commentary(lines: &mut Vec<String>, checkpoint: &PreparedCheckpoint, gutter: usize) {
    let indent = 2 + gutter + 2;
    let comments = checkpoint.commentary().comments();

    let mut first = String::new();
    first.push(if checkpoint.starts_subflow() { NEW_SUBFLOW_MARKER } else { ' ' });
    first.push(' ');
    push_line_number(&mut first, checkpoint.line(), gutter);
    first.push_str("  ");
    if let Some(comment) = comments.first() {
        push_comment(&mut first, comment);
    }
    if !checkpoint.drawn() {
        first.push_str(OUTSIDE_LISTING_SUFFIX);
    }
    lines.push(first);

    for comment in comments.iter().skip(1) {
        let mut out = String::new();
        push_spaces(&mut out, indent);
        push_comment(&mut out, comment);
        lines.push(out);
    }
}

fn push_comment(out: &mut String, comment: &Comment) {
    if comment.is_note() {
        out.push_str(NOTE_PREFIX);
    }
    // Keep multi-line messages on one rendered line.
    out.push_str(&comment.text().replace('\n', " "));
}
