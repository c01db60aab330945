// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tracelane-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tracelane and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use smol_str::SmolStr;

use tracelane::model::{
    Checkpoint, FunctionInfo, Location, Locations, Note, Report, State, TraceDocument,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Params {
    /// Lines in the function body.
    pub lines: u32,
    pub reports: usize,
    pub states_per_report: usize,
    /// A backward jump (new subflow) every this many states.
    pub loop_every: usize,
}

impl Params {
    pub const fn new(lines: u32, reports: usize, states_per_report: usize, loop_every: usize) -> Self {
        Self { lines, reports, states_per_report, loop_every }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Small,
    MediumLoops,
    LargeManySubflows,
}

impl Case {
    pub const fn id(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::MediumLoops => "medium_loops",
            Self::LargeManySubflows => "large_many_subflows",
        }
    }

    pub const fn params(self) -> Params {
        match self {
            Self::Small => Params::new(40, 2, 12, 6),
            Self::MediumLoops => Params::new(400, 8, 120, 15),
            Self::LargeManySubflows => Params::new(2_000, 32, 600, 8),
        }
    }
}

/// Source text whose function spans lines `1..=params.lines`.
pub fn source(params: Params) -> String {
    let mut out = String::with_capacity(params.lines as usize * 24);
    for line in 1..=params.lines {
        out.push_str(&format!("    stmt_{line:05}(x, y);\n"));
    }
    out
}

/// Lines visited by one report: a forward walk that jumps back every `loop_every` states.
pub fn state_lines(params: Params, seed: usize) -> Vec<u32> {
    let span = params.lines.max(2);
    let mut lines = Vec::with_capacity(params.states_per_report);
    let mut line = 1 + (seed as u32 % span);
    for idx in 0..params.states_per_report {
        if idx > 0 && idx % params.loop_every.max(1) == 0 {
            line = 1 + ((line + seed as u32 * 7) % (span / 2)).min(line.saturating_sub(1));
        } else if idx > 0 {
            line = (line + 1 + (idx as u32 % 3)).min(span);
        }
        lines.push(line);
    }
    lines
}

pub fn document(params: Params) -> TraceDocument {
    let reports = (0..params.reports)
        .map(|seed| {
            let states = state_lines(params, seed)
                .into_iter()
                .enumerate()
                .map(|(idx, line)| State {
                    location: Some(Locations::Many(vec![Location::at_line(line)])),
                    message: Some(format!("state {idx} at line {line}")),
                })
                .collect::<Vec<_>>();
            let notes = vec![Note {
                location: Some(Locations::One(Location::at_line(params.lines / 2))),
                message: format!("note for report {seed}"),
            }];
            Report { message: format!("report {seed}"), severity: None, states, notes }
        })
        .collect();

    TraceDocument {
        filename: "bench.c".to_owned(),
        function: FunctionInfo { name: SmolStr::new("bench_fn"), lines: (1, params.lines) },
        reports,
    }
}

pub fn checkpoints(params: Params) -> Vec<Checkpoint<usize>> {
    state_lines(params, 0)
        .into_iter()
        .enumerate()
        .map(|(idx, line)| Checkpoint::new(line, idx))
        .collect()
}
