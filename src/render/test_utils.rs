// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tracelane-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tracelane and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// The text under each `(y, x0, x1)` span of `text`, in span order.
pub(super) fn spanned_texts(text: &str, spans: &[(usize, usize, usize)]) -> Vec<String> {
    let rows = text.split('\n').collect::<Vec<_>>();
    spans
        .iter()
        .map(|&(y, x0, x1)| {
            let row = rows.get(y).expect("span row in bounds");
            row.chars().skip(x0).take(x1 + 1 - x0).collect()
        })
        .collect()
}
