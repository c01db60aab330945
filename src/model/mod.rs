// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tracelane-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tracelane and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! Checkpoints and subflows drive layout; the report types mirror the checker's JSON output.

pub mod checkpoint;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod report;

pub use checkpoint::{Checkpoint, Comment, CommentKind, Commentary, LineRange, Subflow};
pub use report::{
    DocumentError, FunctionInfo, Location, Locations, Note, Report, State, TraceDocument,
};
