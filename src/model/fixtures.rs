// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tracelane-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tracelane and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::checkpoint::Checkpoint;
use super::report::{FunctionInfo, Location, Locations, Note, Report, State, TraceDocument};

/// Checkpoints carrying their emission index as payload.
pub(crate) fn indexed_checkpoints(lines: &[u32]) -> Vec<Checkpoint<usize>> {
    lines.iter().enumerate().map(|(idx, &line)| Checkpoint::new(line, idx)).collect()
}

pub(crate) fn state(line: u32, message: &str) -> State {
    State {
        location: Some(Locations::Many(vec![Location::at_line(line)])),
        message: Some(message.to_owned()),
    }
}

pub(crate) fn note(line: u32, message: &str) -> Note {
    Note {
        location: Some(Locations::Many(vec![Location::at_line(line)])),
        message: message.to_owned(),
    }
}

pub(crate) fn report(message: &str, states: Vec<State>, notes: Vec<Note>) -> Report {
    Report { message: message.to_owned(), severity: None, states, notes }
}

pub(crate) const SMALL_SOURCE: &str = concat!(
    "int\n",
    "f(int x)\n",
    "{\n",
    "    if (x)\n",
    "        return g(x);\n",
    "    return 0;\n",
    "}\n",
);

/// `f` spans lines 2..=7 of [`SMALL_SOURCE`]; the report loops back from line 5 to line 4.
pub(crate) fn small_document() -> TraceDocument {
    TraceDocument {
        filename: "small.c".to_owned(),
        function: FunctionInfo { name: "f".into(), lines: (2, 7) },
        reports: vec![report(
            "returning <x> & <y>",
            vec![
                state(3, "entry to f"),
                state(4, "taking True path"),
                state(5, "calling g"),
                state(4, "taking False path"),
                state(6, "returning"),
            ],
            vec![note(6, "was expecting 0")],
        )],
    }
}
