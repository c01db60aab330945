// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tracelane-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tracelane and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Wire format of the checker's JSON trace document.
//!
//! Only the keys the renderer needs are modelled; everything else (`variables`, `sm`, ...) is
//! ignored on input.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceDocument {
    pub filename: String,
    pub function: FunctionInfo,
    #[serde(default)]
    pub reports: Vec<Report>,
}

impl TraceDocument {
    pub fn from_json_str(src: &str) -> Result<Self, DocumentError> {
        serde_json::from_str(src).map_err(DocumentError::Json)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("invalid trace document: {0}")]
    Json(#[source] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionInfo {
    pub name: SmolStr,
    /// One-based `[first, last]` source lines of the function body, inclusive.
    pub lines: (u32, u32),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub message: String,
    #[serde(default)]
    pub severity: Option<SmolStr>,
    #[serde(default)]
    pub states: Vec<State>,
    #[serde(default)]
    pub notes: Vec<Note>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    #[serde(default)]
    pub location: Option<Locations>,
    #[serde(default)]
    pub message: Option<String>,
}

impl State {
    /// Line of the first location, if the state has one.
    pub fn line(&self) -> Option<u32> {
        self.location.as_ref().and_then(Locations::first_line)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    #[serde(default, alias = "loc")]
    pub location: Option<Locations>,
    pub message: String,
}

impl Note {
    pub fn line(&self) -> Option<u32> {
        self.location.as_ref().and_then(Locations::first_line)
    }
}

/// Locations appear both as a list (states) and as a single object (older note output).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Locations {
    Many(Vec<Location>),
    One(Location),
}

impl Locations {
    pub fn first(&self) -> Option<&Location> {
        match self {
            Self::Many(locations) => locations.first(),
            Self::One(location) => Some(location),
        }
    }

    pub fn first_line(&self) -> Option<u32> {
        self.first().map(|location| location.line)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub line: u32,
    #[serde(default)]
    pub column: Option<u32>,
    #[serde(default, alias = "givenfilename")]
    pub file: Option<String>,
}

impl Location {
    pub fn at_line(line: u32) -> Self {
        Self { line, column: None, file: None }
    }
}

#[cfg(test)]
mod tests {
    use super::{Locations, TraceDocument};

    #[test]
    fn parses_checker_document_and_ignores_unknown_keys() {
        let doc = TraceDocument::from_json_str(
            r#"{
                "filename": "input.c",
                "function": {"name": "losing_refcnt_of_none", "lines": [22, 28]},
                "reports": [{
                    "severity": "warning",
                    "message": "ob_refcnt of return value is 1 too low",
                    "states": [
                        {"location": [{"line": 23, "column": 5}], "message": "entry",
                         "variables": {"self": {"kind": "PointerToRegion"}}},
                        {"location": null, "message": null}
                    ],
                    "notes": [{"location": [{"line": 26}], "message": "consider"}]
                }]
            }"#,
        )
        .expect("document");

        assert_eq!(doc.function.name, "losing_refcnt_of_none");
        assert_eq!(doc.function.lines, (22, 28));
        let report = &doc.reports[0];
        assert_eq!(report.severity.as_deref(), Some("warning"));
        assert_eq!(report.states[0].line(), Some(23));
        assert_eq!(report.states[1].line(), None);
        assert_eq!(report.notes[0].line(), Some(26));
    }

    #[test]
    fn accepts_single_object_note_location_under_loc_key() {
        let doc = TraceDocument::from_json_str(
            r#"{
                "filename": "input.c",
                "function": {"name": "f", "lines": [1, 3]},
                "reports": [{
                    "message": "m",
                    "notes": [{"loc": {"givenfilename": "input.c", "line": 2, "column": 1},
                               "message": "n"}]
                }]
            }"#,
        )
        .expect("document");

        let note = &doc.reports[0].notes[0];
        assert!(matches!(note.location, Some(Locations::One(_))));
        assert_eq!(note.line(), Some(2));
        assert!(doc.reports[0].states.is_empty());
    }

    #[test]
    fn rejects_missing_function() {
        let err = TraceDocument::from_json_str(r#"{"filename": "x.c"}"#).unwrap_err();
        assert!(err.to_string().starts_with("invalid trace document:"));
    }
}
