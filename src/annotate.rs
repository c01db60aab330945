// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tracelane-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tracelane and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Builds the checkpoint sequence of a report from its states and notes.

use log::debug;

use crate::model::checkpoint::{Checkpoint, Comment, Commentary};
use crate::model::report::Report;

/// Turns a report's states and notes into checkpoints, in emission order.
///
/// - states without a location or without a message are skipped
/// - consecutive states on the same line share one checkpoint
/// - notes are placed scanning backwards: the first checkpoint on the note's line takes it,
///   unless a checkpoint with a smaller line comes first, in which case the note gets its own
///   checkpoint right after that one (at the front if neither exists)
pub fn build_checkpoints(report: &Report) -> Vec<Checkpoint<Commentary>> {
    let mut checkpoints = Vec::<Checkpoint<Commentary>>::new();
    let mut prev_line: Option<u32> = None;

    for (idx, state) in report.states.iter().enumerate() {
        let message = state.message.as_deref().filter(|message| !message.is_empty());
        let (Some(line), Some(message)) = (state.line(), message) else {
            debug!("skipping state {idx}: no location or message");
            continue;
        };

        if prev_line != Some(line) {
            checkpoints.push(Checkpoint::new(line, Commentary::new()));
        }
        if let Some(current) = checkpoints.last_mut() {
            current.payload_mut().push(Comment::state(message));
        }
        prev_line = Some(line);
    }

    for (idx, note) in report.notes.iter().enumerate() {
        let Some(line) = note.line() else {
            debug!("dropping note {idx}: no location");
            continue;
        };
        place_note(&mut checkpoints, line, Comment::note(note.message.as_str()));
    }

    checkpoints
}

fn place_note(checkpoints: &mut Vec<Checkpoint<Commentary>>, line: u32, note: Comment) {
    for idx in (0..checkpoints.len()).rev() {
        let existing = checkpoints[idx].line();
        if existing == line {
            checkpoints[idx].payload_mut().push(note);
            return;
        }
        if existing < line {
            checkpoints.insert(idx + 1, Checkpoint::new(line, Commentary::with(note)));
            return;
        }
    }
    checkpoints.insert(0, Checkpoint::new(line, Commentary::with(note)));
}
