// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tracelane-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tracelane and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Tracelane: swimlane views of static-analysis execution traces over C source.
//!
//! A trace document lists reports; each report is a path of states through one function. The
//! crate splits that path into subflows (runs of strictly increasing line numbers), lays them out
//! as parallel columns of dots and rails beside the source listing, and renders the result as
//! Unicode text or a self-contained HTML page.

pub mod annotate;
pub mod capi;
pub mod layout;
pub mod model;
pub mod pipeline;
pub mod render;
pub mod source;
pub mod store;
