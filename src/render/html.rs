// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tracelane-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tracelane and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Self-contained HTML page for a trace document.
//!
//! Every dot cell, its commentary item and its source row carry the same `data-group` value
//! (`r<report>-s<subflow>-l<line>`), so a client script can link them for highlighting.

use crate::capi::CapiIndex;
use crate::layout::CellKind;
use crate::model::checkpoint::Comment;
use crate::model::report::TraceDocument;
use crate::pipeline::{PreparedCheckpoint, PreparedReport};
use crate::source::SourceListing;

const ZERO_WIDTH_SPACE: &str = "&#x200b;";

const STYLESHEET: &str = "
body { font-family: sans-serif; margin: 0; }
#header { background: #333; color: #eee; padding: 0.5em 1em; }
#header a { color: #9cf; }
#header .label { font-weight: bold; margin-left: 1em; }
#reports { list-style: none; padding: 0 1em; }
#reports > li > header { display: flex; justify-content: space-between; }
.error { color: #a00; font-weight: bold; }
.body { display: flex; gap: 2em; }
.source table { border-collapse: collapse; font-family: monospace; }
.source td { padding: 0 0.25em; white-space: pre; }
td.lineno { color: #888; text-align: right; }
td.flow-line { border-left: 2px solid #36c; }
td.flow-empty { border-left: 2px solid transparent; }
span.flow-dot { display: inline-block; width: 0.6em; height: 0.6em; border-radius: 50%;
    background: #36c; margin-left: -0.4em; }
ol.states li.new-subflow { border-top: 2px dashed #36c; }
ol.states p.note { font-style: italic; }
";

/// Renders `doc` and its prepared reports as one HTML page.
///
/// When `capi` is given, identifiers it knows are linked to their documentation.
pub fn render_document_html(
    doc: &TraceDocument,
    listing: &SourceListing,
    reports: &[PreparedReport],
    capi: Option<&CapiIndex>,
) -> String {
    let mut out = String::with_capacity(4096);
    out.push_str("<!DOCTYPE html>\n<html><head>");
    out.push_str(r#"<meta http-equiv="Content-Type" content="text/html; charset=utf-8">"#);
    out.push_str("<title>");
    push_escaped(&mut out, &doc.filename);
    out.push_str(" -- ");
    push_escaped(&mut out, &doc.function.name);
    out.push_str("</title><style media=\"screen\" type=\"text/css\">");
    out.push_str(STYLESHEET);
    out.push_str("</style></head>\n<body>\n");

    push_page_header(&mut out, doc, reports.len());

    out.push_str("<ol id=\"reports\">\n");
    for report in reports {
        push_report(&mut out, report, listing, capi);
    }
    out.push_str("</ol>\n</body></html>\n");
    out
}

fn push_page_header(out: &mut String, doc: &TraceDocument, report_count: usize) {
    out.push_str("<header id=\"header\"><div id=\"title\"><h1>Trace report</h1>");
    out.push_str("<div id=\"info\"><span class=\"label\">Filename: </span>");
    push_escaped(out, &doc.filename);
    out.push_str("<span class=\"label\">Function: </span>");
    push_escaped(out, &doc.function.name);
    out.push_str("</div><div id=\"report-pagination\"><span class=\"label\">Report: </span>");
    for number in 1..=report_count {
        out.push_str("<a href=\"#state");
        push_number(out, number);
        out.push_str("\">");
        push_number(out, number);
        out.push_str("</a>");
    }
    out.push_str("</div></div></header>\n");
}

fn push_report(
    out: &mut String,
    report: &PreparedReport,
    listing: &SourceListing,
    capi: Option<&CapiIndex>,
) {
    out.push_str("<li id=\"state");
    push_number(out, report.number());
    out.push_str("\"><header><div class=\"error\">");
    if let Some(severity) = report.severity() {
        push_escaped(out, severity);
        out.push_str(": ");
    }
    push_escaped(out, report.message());
    out.push_str("</div><div class=\"report-count\"><h3>Report</h3>");
    push_number(out, report.number());
    out.push_str("</div></header>\n<div class=\"body\"><div class=\"source\">");
    push_source_table(out, report, listing, capi);
    out.push_str("</div>\n");
    push_states(out, report);
    out.push_str("</div></li>\n");
}

fn push_source_table(
    out: &mut String,
    report: &PreparedReport,
    listing: &SourceListing,
    capi: Option<&CapiIndex>,
) {
    let layout = report.layout();
    out.push_str("<table data-first-line=\"");
    push_number(out, layout.line_range().first_line());
    out.push_str("\">\n");

    for row in layout.rows() {
        let line = row.line();
        let groups = layout
            .dots_on_line(line)
            .iter()
            .map(|&subflow| group_id(report.number(), subflow, line))
            .collect::<Vec<_>>();

        out.push_str("<tr data-line=\"");
        push_number(out, line);
        out.push('"');
        if !groups.is_empty() {
            out.push_str(" data-groups=\"");
            out.push_str(&groups.join(" "));
            out.push('"');
        }
        out.push('>');

        for (subflow, cell) in row.cells().iter().enumerate() {
            match cell {
                CellKind::Dot => {
                    out.push_str("<td class=\"flow-line\" data-group=\"");
                    out.push_str(&group_id(report.number(), subflow, line));
                    out.push_str("\"><span class=\"flow-dot\">");
                    out.push_str(ZERO_WIDTH_SPACE);
                    out.push_str("</span></td>");
                }
                CellKind::Rail => {
                    out.push_str("<td class=\"flow-line\">");
                    out.push_str(ZERO_WIDTH_SPACE);
                    out.push_str("</td>");
                }
                CellKind::Empty => {
                    out.push_str("<td class=\"flow-empty\">");
                    out.push_str(ZERO_WIDTH_SPACE);
                    out.push_str("</td>");
                }
            }
        }

        out.push_str("<td class=\"lineno\">");
        push_number(out, line);
        out.push_str("</td><td class=\"code\">");
        push_code(out, listing.row(line).unwrap_or_default(), capi);
        out.push_str("</td></tr>\n");
    }
    out.push_str("</table>");
}

fn push_states(out: &mut String, report: &PreparedReport) {
    out.push_str("<ol class=\"states\">\n");
    for checkpoint in report.checkpoints() {
        push_state(out, report.number(), checkpoint);
    }
    out.push_str("</ol>");
}

fn push_state(out: &mut String, report_number: usize, checkpoint: &PreparedCheckpoint) {
    out.push_str("<li data-line=\"");
    push_number(out, checkpoint.line());
    out.push('"');
    if checkpoint.starts_subflow() {
        out.push_str(" class=\"new-subflow\"");
    }
    if checkpoint.drawn() {
        out.push_str(" data-group=\"");
        out.push_str(&group_id(report_number, checkpoint.subflow(), checkpoint.line()));
        out.push('"');
    }
    out.push_str("><h2>");
    push_number(out, checkpoint.line());
    out.push_str("</h2>");
    for comment in checkpoint.commentary().comments() {
        push_comment(out, comment);
    }
    out.push_str("</li>\n");
}

fn push_comment(out: &mut String, comment: &Comment) {
    if comment.is_note() {
        out.push_str("<p class=\"note\">");
    } else {
        out.push_str("<p>");
    }
    push_escaped(out, comment.text());
    out.push_str("</p>");
}

fn push_code(out: &mut String, source: &str, capi: Option<&CapiIndex>) {
    let Some(capi) = capi else {
        push_escaped(out, source);
        return;
    };

    let mut cursor = 0usize;
    for (range, url) in capi.linked_identifiers(source) {
        push_escaped(out, &source[cursor..range.start]);
        out.push_str("<a href=\"");
        push_escaped(out, &url);
        out.push_str("\">");
        push_escaped(out, &source[range.clone()]);
        out.push_str("</a>");
        cursor = range.end;
    }
    push_escaped(out, &source[cursor..]);
}

fn group_id(report_number: usize, subflow: usize, line: u32) -> String {
    format!("r{report_number}-s{subflow}-l{line}")
}

fn push_number<N: itoa::Integer>(out: &mut String, number: N) {
    out.push_str(itoa::Buffer::new().format(number));
}

pub(crate) fn push_escaped(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}
