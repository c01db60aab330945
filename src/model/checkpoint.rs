// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tracelane-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tracelane and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::ops::RangeInclusive;

/// One recorded analysis state tied to a source line.
///
/// The payload is opaque to segmentation and layout; only `line` drives them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkpoint<P> {
    line: u32,
    payload: P,
}

impl<P> Checkpoint<P> {
    pub fn new(line: u32, payload: P) -> Self {
        Self { line, payload }
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn payload(&self) -> &P {
        &self.payload
    }

    pub fn payload_mut(&mut self) -> &mut P {
        &mut self.payload
    }

    pub fn into_payload(self) -> P {
        self.payload
    }
}

/// A maximal run of checkpoints whose lines strictly increase.
///
/// Only the segmenter builds these, so a `Subflow` is never empty and never contains a
/// non-increase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subflow<P> {
    checkpoints: Vec<Checkpoint<P>>,
}

impl<P> Subflow<P> {
    pub(crate) fn starting_with(first: Checkpoint<P>) -> Self {
        Self { checkpoints: vec![first] }
    }

    pub(crate) fn push(&mut self, checkpoint: Checkpoint<P>) {
        debug_assert!(self.last_line().map_or(true, |last| last < checkpoint.line()));
        self.checkpoints.push(checkpoint);
    }

    pub fn checkpoints(&self) -> &[Checkpoint<P>] {
        &self.checkpoints
    }

    pub fn into_checkpoints(self) -> Vec<Checkpoint<P>> {
        self.checkpoints
    }

    pub fn len(&self) -> usize {
        self.checkpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checkpoints.is_empty()
    }

    pub fn first_line(&self) -> Option<u32> {
        self.checkpoints.first().map(Checkpoint::line)
    }

    pub fn last_line(&self) -> Option<u32> {
        self.checkpoints.last().map(Checkpoint::line)
    }

    pub fn lines(&self) -> impl Iterator<Item = u32> + '_ {
        self.checkpoints.iter().map(Checkpoint::line)
    }
}

/// Contiguous source lines `[first_line, first_line + count - 1]`.
///
/// Iteration stops at `u32::MAX` rather than wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LineRange {
    first_line: u32,
    count: u32,
}

impl LineRange {
    pub fn new(first_line: u32, count: u32) -> Self {
        Self { first_line, count }
    }

    /// Builds the range covering `first ..= last`; `last < first` yields an empty range.
    pub fn inclusive(first: u32, last: u32) -> Self {
        let count = last.checked_sub(first).and_then(|span| span.checked_add(1)).unwrap_or(0);
        Self { first_line: first, count }
    }

    pub fn first_line(&self) -> u32 {
        self.first_line
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn last_line(&self) -> Option<u32> {
        if self.count == 0 {
            return None;
        }
        Some(self.first_line.saturating_add(self.count - 1))
    }

    pub fn contains(&self, line: u32) -> bool {
        line >= self.first_line && line - self.first_line < self.count
    }

    /// The lines of the range, clipped at `u32::MAX`; the iterator knows its exact length.
    pub fn lines(&self) -> RangeInclusive<u32> {
        match self.last_line() {
            Some(last) => self.first_line..=last,
            None => 1..=0,
        }
    }
}

impl fmt::Display for LineRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.last_line() {
            Some(last) => write!(f, "[{}, {last}]", self.first_line),
            None => write!(f, "[{}, empty]", self.first_line),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommentKind {
    State,
    Note,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    kind: CommentKind,
    text: String,
}

impl Comment {
    pub fn state(text: impl Into<String>) -> Self {
        Self { kind: CommentKind::State, text: text.into() }
    }

    pub fn note(text: impl Into<String>) -> Self {
        Self { kind: CommentKind::Note, text: text.into() }
    }

    pub fn kind(&self) -> CommentKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_note(&self) -> bool {
        self.kind == CommentKind::Note
    }
}

/// Commentary attached to a checkpoint: state messages and notes, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Commentary {
    comments: Vec<Comment>,
}

impl Commentary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(comment: Comment) -> Self {
        Self { comments: vec![comment] }
    }

    pub fn push(&mut self, comment: Comment) {
        self.comments.push(comment);
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }
}
