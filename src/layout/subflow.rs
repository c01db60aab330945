// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tracelane-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tracelane and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::checkpoint::{Checkpoint, Subflow};

/// Subflows in creation order (= column order) plus the per-checkpoint divergence flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segmentation<P> {
    subflows: Vec<Subflow<P>>,
    new_subflow_flags: Vec<bool>,
}

impl<P> Segmentation<P> {
    pub fn subflows(&self) -> &[Subflow<P>] {
        &self.subflows
    }

    pub fn into_subflows(self) -> Vec<Subflow<P>> {
        self.subflows
    }

    /// `flags[i]` is true when input checkpoint `i` opened a subflow other than the first.
    pub fn new_subflow_flags(&self) -> &[bool] {
        &self.new_subflow_flags
    }

    pub fn len(&self) -> usize {
        self.subflows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subflows.is_empty()
    }

    /// Subflow column of each input checkpoint, in input order.
    pub fn columns(&self) -> Vec<usize> {
        self.subflows
            .iter()
            .enumerate()
            .flat_map(|(column, subflow)| std::iter::repeat(column).take(subflow.len()))
            .collect()
    }
}

/// Splits checkpoints (in emission order) into maximal runs of strictly increasing lines.
///
/// A new subflow starts at the first checkpoint and at every checkpoint whose line is not
/// greater than the previous one. Any input is accepted; empty input yields no subflows.
pub fn segment<P>(checkpoints: impl IntoIterator<Item = Checkpoint<P>>) -> Segmentation<P> {
    let checkpoints = checkpoints.into_iter();
    let mut subflows = Vec::<Subflow<P>>::new();
    let mut new_subflow_flags = Vec::<bool>::with_capacity(checkpoints.size_hint().0);
    let mut last_line: Option<u32> = None;

    for checkpoint in checkpoints {
        let line = checkpoint.line();
        match (last_line, subflows.last_mut()) {
            (Some(last), Some(current)) if last < line => {
                current.push(checkpoint);
                new_subflow_flags.push(false);
            }
            _ => {
                // The first subflow is the start of the trace, not a divergence.
                new_subflow_flags.push(!subflows.is_empty());
                subflows.push(Subflow::starting_with(checkpoint));
            }
        }
        last_line = Some(line);
    }

    Segmentation { subflows, new_subflow_flags }
}
