// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tracelane-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tracelane and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Per-report processing: checkpoints, subflows, rails.

use log::debug;
use rayon::prelude::*;
use smol_str::SmolStr;

use crate::annotate::build_checkpoints;
use crate::layout::{layout_rails, segment, RailLayout};
use crate::model::checkpoint::{Checkpoint, Commentary, LineRange};
use crate::model::report::{Report, TraceDocument};
use crate::source::SourceListing;

/// A checkpoint as the renderers see it, in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedCheckpoint {
    line: u32,
    commentary: Commentary,
    starts_subflow: bool,
    subflow: usize,
    drawn: bool,
}

impl PreparedCheckpoint {
    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn commentary(&self) -> &Commentary {
        &self.commentary
    }

    /// True when this checkpoint opens a subflow other than the first.
    pub fn starts_subflow(&self) -> bool {
        self.starts_subflow
    }

    pub fn subflow(&self) -> usize {
        self.subflow
    }

    /// False when the checkpoint never got a dot because its line is outside the listing.
    pub fn drawn(&self) -> bool {
        self.drawn
    }
}

/// One report, ready to render.
///
/// Layout payloads are indices into [`PreparedReport::checkpoints`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedReport {
    number: usize,
    message: String,
    severity: Option<SmolStr>,
    checkpoints: Vec<PreparedCheckpoint>,
    layout: RailLayout<usize>,
}

impl PreparedReport {
    /// One-based position of the report in its document.
    pub fn number(&self) -> usize {
        self.number
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> Option<&str> {
        self.severity.as_deref()
    }

    pub fn checkpoints(&self) -> &[PreparedCheckpoint] {
        &self.checkpoints
    }

    pub fn layout(&self) -> &RailLayout<usize> {
        &self.layout
    }

    pub fn subflow_count(&self) -> usize {
        self.layout.columns()
    }

    /// The checkpoint behind the dot at `(line, subflow)`, if there is one.
    pub fn checkpoint_at(&self, line: u32, subflow: usize) -> Option<&PreparedCheckpoint> {
        let dot = self.layout.dot_at(line, subflow)?;
        self.checkpoints.get(*dot.checkpoint().payload())
    }
}

/// Runs checkpoint building, segmentation and layout for one report.
pub fn prepare_report(number: usize, report: &Report, line_range: LineRange) -> PreparedReport {
    let checkpoints = build_checkpoints(report);
    let indexed = checkpoints.iter().enumerate().map(|(idx, cp)| Checkpoint::new(cp.line(), idx));
    let segmentation = segment(indexed);
    if segmentation.is_empty() {
        debug!("report {number}: no checkpoints to lay out");
    }
    for (column, subflow) in segmentation.subflows().iter().enumerate() {
        if let (Some(first), Some(last)) = (subflow.first_line(), subflow.last_line()) {
            debug!("report {number}: subflow {column} runs from line {first} to {last}");
        }
    }
    let flags = segmentation.new_subflow_flags().to_vec();
    let columns = segmentation.columns();
    let layout = layout_rails(segmentation.into_subflows(), line_range);

    let mut drawn = vec![false; checkpoints.len()];
    for dot in layout.dots() {
        drawn[*dot.checkpoint().payload()] = true;
    }

    debug!(
        "report {number}: {} checkpoint(s) in {} subflow(s) over {line_range}",
        checkpoints.len(),
        layout.columns()
    );
    if layout.unplaced() > 0 {
        debug!(
            "report {number}: {} checkpoint(s) not drawn (outside {line_range})",
            layout.unplaced()
        );
    }

    let checkpoints = checkpoints
        .into_iter()
        .enumerate()
        .map(|(idx, cp)| PreparedCheckpoint {
            line: cp.line(),
            commentary: cp.into_payload(),
            starts_subflow: flags[idx],
            subflow: columns[idx],
            drawn: drawn[idx],
        })
        .collect();

    PreparedReport {
        number,
        message: report.message.clone(),
        severity: report.severity.clone(),
        checkpoints,
        layout,
    }
}

/// Prepares every report of `doc` against the same listing; reports run in parallel and come
/// back in document order.
pub fn prepare_document(doc: &TraceDocument, listing: &SourceListing) -> Vec<PreparedReport> {
    let line_range = listing.line_range();
    doc.reports
        .par_iter()
        .enumerate()
        .map(|(idx, report)| prepare_report(idx + 1, report, line_range))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{prepare_document, prepare_report};
    use crate::layout::CellKind;
    use crate::model::checkpoint::LineRange;
    use crate::model::fixtures::{note, report, small_document, state, SMALL_SOURCE};
    use crate::source::SourceListing;

    #[test]
    fn prepares_small_document() {
        let doc = small_document();
        let listing = SourceListing::for_function(SMALL_SOURCE, &doc.function);
        let prepared = prepare_document(&doc, &listing);
        assert_eq!(prepared.len(), 1);

        let report = &prepared[0];
        assert_eq!(report.number(), 1);
        assert_eq!(report.subflow_count(), 2);
        let summary = report
            .checkpoints()
            .iter()
            .map(|cp| (cp.line(), cp.starts_subflow(), cp.subflow(), cp.drawn()))
            .collect::<Vec<_>>();
        assert_eq!(
            summary,
            vec![
                (3, false, 0, true),
                (4, false, 0, true),
                (5, false, 0, true),
                (4, true, 1, true),
                (6, false, 1, true),
            ]
        );

        // The note on line 6 joined the last state there.
        let last = report.checkpoint_at(6, 1).expect("dot at 6");
        assert_eq!(last.commentary().comments().len(), 2);
        assert_eq!(report.layout().cell(2, 0), Some(CellKind::Rail));
        assert_eq!(report.layout().cell(7, 1), Some(CellKind::Rail));
        assert_eq!(report.layout().cell(7, 0), Some(CellKind::Empty));
    }

    #[test]
    fn marks_checkpoints_outside_the_listing_as_not_drawn() {
        let prepared = prepare_report(
            3,
            &report("leak", vec![state(2, "in"), state(9, "out")], vec![note(1, "before")]),
            LineRange::new(2, 3),
        );
        let drawn = prepared.checkpoints().iter().map(|cp| cp.drawn()).collect::<Vec<_>>();
        // Line 1 sits before the range and blocks its whole subflow.
        assert_eq!(drawn, vec![false, false, false]);
        assert_eq!(prepared.layout().unplaced(), 3);
        assert_eq!(prepared.number(), 3);
    }

    #[test]
    fn report_without_usable_states_has_no_subflows() {
        let prepared = prepare_report(
            1,
            &report("empty", vec![state(4, "")], vec![]),
            LineRange::new(2, 3),
        );
        assert!(prepared.checkpoints().is_empty());
        assert_eq!(prepared.subflow_count(), 0);
        assert_eq!(prepared.layout().rows().len(), 3);
        assert!(prepared.layout().rows().iter().all(|row| row.cells().is_empty()));
    }

    #[test]
    fn keeps_document_order_across_parallel_reports() {
        let mut doc = small_document();
        doc.reports = (0..16)
            .map(|idx| report(&format!("r{idx}"), vec![state(3 + (idx % 4), "s")], vec![]))
            .collect();
        let listing = SourceListing::for_function(SMALL_SOURCE, &doc.function);

        let prepared = prepare_document(&doc, &listing);
        let messages = prepared.iter().map(|r| r.message().to_owned()).collect::<Vec<_>>();
        let expected = (0..16).map(|idx| format!("r{idx}")).collect::<Vec<_>>();
        assert_eq!(messages, expected);
        assert!(prepared.iter().enumerate().all(|(idx, r)| r.number() == idx + 1));
    }
}
