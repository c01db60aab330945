// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tracelane-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tracelane and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Documentation links for Python C-API functions named in a listing.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use smol_str::SmolStr;

use crate::source::split_lines;

const DOCS_BASE_URL: &str = "http://docs.python.org/c-api";

#[derive(Debug, thiserror::Error)]
pub enum CapiIndexError {
    #[error("line {line_no}: expected `<module> <function>`, got {line:?}")]
    MalformedLine { line_no: usize, line: String },
    #[error("failed to read C-API index {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Function name to documentation module, read from a `module function` per line listing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CapiIndex {
    functions: BTreeMap<SmolStr, SmolStr>,
}

impl CapiIndex {
    /// Parses the listing; blank lines and `#` comments are ignored.
    pub fn parse(text: &str) -> Result<Self, CapiIndexError> {
        let mut functions = BTreeMap::new();
        for (idx, raw) in split_lines(text).enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut fields = line.split_whitespace();
            match (fields.next(), fields.next(), fields.next()) {
                (Some(module), Some(function), None) => {
                    functions.insert(SmolStr::new(function), SmolStr::new(module));
                }
                _ => {
                    return Err(CapiIndexError::MalformedLine {
                        line_no: idx + 1,
                        line: raw.to_owned(),
                    })
                }
            }
        }
        Ok(Self { functions })
    }

    pub fn load(path: &Path) -> Result<Self, CapiIndexError> {
        let text = std::fs::read_to_string(path)
            .map_err(|source| CapiIndexError::Io { path: path.to_owned(), source })?;
        Self::parse(&text)
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    pub fn module_of(&self, function: &str) -> Option<&str> {
        self.functions.get(function).map(SmolStr::as_str)
    }

    pub fn url_for(&self, function: &str) -> Option<String> {
        let module = self.module_of(function)?;
        Some(format!("{DOCS_BASE_URL}/{module}.html#{function}"))
    }

    /// Byte ranges of identifiers in `line` that have a documentation link, left to right.
    pub fn linked_identifiers<'a>(
        &'a self,
        line: &'a str,
    ) -> impl Iterator<Item = (std::ops::Range<usize>, String)> + 'a {
        identifier_regex().find_iter(line).filter_map(move |found| {
            let url = self.url_for(found.as_str())?;
            Some((found.range(), url))
        })
    }
}

fn identifier_regex() -> &'static Regex {
    static IDENTIFIER: OnceLock<Regex> = OnceLock::new();
    IDENTIFIER.get_or_init(|| Regex::new(r"\b[A-Za-z_][A-Za-z0-9_]*\b").expect("valid regex"))
}
