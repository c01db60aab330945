// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tracelane-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tracelane and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::VecDeque;

use smallvec::SmallVec;

use crate::model::checkpoint::{Checkpoint, LineRange, Subflow};

/// Classification of one `(line, subflow)` cell of the swimlane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// The subflow has a checkpoint on this line.
    Dot,
    /// The subflow's path passes through this line without a checkpoint.
    Rail,
    Empty,
}

/// Cells of one source line, one per subflow column.
pub type RowCells = SmallVec<[CellKind; 4]>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RailRow {
    line: u32,
    cells: RowCells,
}

impl RailRow {
    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn cells(&self) -> &[CellKind] {
        &self.cells
    }
}

/// A checkpoint consumed by the layout, together with the cell it was drawn in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotHit<P> {
    line: u32,
    subflow: usize,
    checkpoint: Checkpoint<P>,
}

impl<P> DotHit<P> {
    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn subflow(&self) -> usize {
        self.subflow
    }

    pub fn checkpoint(&self) -> &Checkpoint<P> {
        &self.checkpoint
    }

    pub fn into_checkpoint(self) -> Checkpoint<P> {
        self.checkpoint
    }
}

/// Swimlane cells for every line of a range, plus the dots in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RailLayout<P> {
    line_range: LineRange,
    columns: usize,
    rows: Vec<RailRow>,
    dots: Vec<DotHit<P>>,
    unplaced: usize,
}

impl<P> RailLayout<P> {
    pub fn line_range(&self) -> LineRange {
        self.line_range
    }

    /// Number of subflow columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> &[RailRow] {
        &self.rows
    }

    /// Dots ordered by line, then by column.
    pub fn dots(&self) -> &[DotHit<P>] {
        &self.dots
    }

    pub fn into_dots(self) -> Vec<DotHit<P>> {
        self.dots
    }

    /// Checkpoints never reached because their line lies outside the range.
    pub fn unplaced(&self) -> usize {
        self.unplaced
    }

    pub fn row(&self, line: u32) -> Option<&RailRow> {
        if !self.line_range.contains(line) {
            return None;
        }
        let idx = usize::try_from(line - self.line_range.first_line()).ok()?;
        self.rows.get(idx)
    }

    pub fn cell(&self, line: u32, subflow: usize) -> Option<CellKind> {
        self.row(line)?.cells.get(subflow).copied()
    }

    /// Columns dotted on `line`, left to right.
    pub fn dots_on_line(&self, line: u32) -> SmallVec<[usize; 4]> {
        match self.row(line) {
            Some(row) => row
                .cells
                .iter()
                .enumerate()
                .filter(|(_, cell)| **cell == CellKind::Dot)
                .map(|(idx, _)| idx)
                .collect(),
            None => SmallVec::new(),
        }
    }

    pub fn dot_at(&self, line: u32, subflow: usize) -> Option<&DotHit<P>> {
        self.dots.iter().find(|dot| dot.line == line && dot.subflow == subflow)
    }
}

#[derive(Debug)]
struct SubflowCursor<P> {
    pending: VecDeque<Checkpoint<P>>,
    started: bool,
}

/// Classifies every `(line, subflow)` cell of `line_range` in a single forward pass.
///
/// Rules, first match wins:
/// 1. the subflow's next pending checkpoint is on this line: `Dot` (the checkpoint is consumed)
/// 2. leftmost column with checkpoints still pending: `Rail`, so the first path enters from above
/// 3. rightmost column with nothing pending: `Rail`, so the last path leaves at the bottom
/// 4. started column with checkpoints still pending: `Rail` between two of its dots
/// 5. otherwise `Empty`
///
/// Interior columns only span their own first to last dot. The function is total: an empty range
/// or no subflows produce a degenerate layout.
pub fn layout_rails<P>(subflows: Vec<Subflow<P>>, line_range: LineRange) -> RailLayout<P> {
    let columns = subflows.len();
    let mut cursors = subflows
        .into_iter()
        .map(|subflow| SubflowCursor {
            pending: subflow.into_checkpoints().into(),
            started: false,
        })
        .collect::<Vec<_>>();

    let lines = line_range.lines();
    let mut rows = Vec::<RailRow>::with_capacity(lines.size_hint().0);
    let mut dots = Vec::<DotHit<P>>::new();

    for line in lines {
        let mut cells = RowCells::with_capacity(columns);
        for (idx, cursor) in cursors.iter_mut().enumerate() {
            let is_first = idx == 0;
            let is_last = idx + 1 == columns;

            let cell = if cursor.pending.front().map(Checkpoint::line) == Some(line) {
                cursor.started = true;
                if let Some(checkpoint) = cursor.pending.pop_front() {
                    dots.push(DotHit { line, subflow: idx, checkpoint });
                }
                CellKind::Dot
            } else if is_first && !cursor.pending.is_empty() {
                CellKind::Rail
            } else if is_last && cursor.pending.is_empty() {
                CellKind::Rail
            } else if cursor.started && !cursor.pending.is_empty() {
                CellKind::Rail
            } else {
                CellKind::Empty
            };
            cells.push(cell);
        }
        rows.push(RailRow { line, cells });
    }

    let unplaced = cursors.iter().map(|cursor| cursor.pending.len()).sum();
    RailLayout { line_range, columns, rows, dots, unplaced }
}
