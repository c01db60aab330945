// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tracelane-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tracelane and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

pub(crate) fn truncate_with_ellipsis(text: &str, max_len: usize) -> String {
    if max_len == 0 {
        return String::new();
    }

    let len = text_len(text);
    if len <= max_len {
        return text.to_owned();
    }

    if max_len == 1 {
        return "…".to_owned();
    }

    let mut out: String = text.chars().take(max_len - 1).collect();
    out.push('…');
    out
}

pub(crate) fn text_len(text: &str) -> usize {
    text.chars().count()
}

/// Appends `line` right-aligned to `width` digits.
pub(crate) fn push_line_number(out: &mut String, line: u32, width: usize) {
    let mut buf = itoa::Buffer::new();
    let digits = buf.format(line);
    for _ in digits.len()..width {
        out.push(' ');
    }
    out.push_str(digits);
}

pub(crate) fn push_spaces(out: &mut String, count: usize) {
    out.extend(std::iter::repeat(' ').take(count));
}

/// Joins lines with `\n`, dropping trailing spaces and trailing empty lines.
pub(crate) fn join_trimmed(lines: &[String]) -> String {
    let mut end = lines.len();
    while end > 0 && lines[end - 1].trim_end_matches(' ').is_empty() {
        end -= 1;
    }
    lines[..end].iter().map(|line| line.trim_end_matches(' ')).collect::<Vec<_>>().join("\n")
}
