// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tracelane-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tracelane and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Swimlane layout for trace reports.
//!
//! Checkpoints are first segmented into subflows, then every `(line, subflow)` cell of the
//! listing is classified as dot, rail or empty.

pub mod rails;
pub mod subflow;

pub use rails::{layout_rails, CellKind, DotHit, RailLayout, RailRow, RowCells};
pub use subflow::{segment, Segmentation};
