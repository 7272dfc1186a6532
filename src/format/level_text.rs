// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gridroute and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::path::Path;

use crate::model::SymbolGrid;

/// Splits level text into symbol rows.
///
/// Level files are usually saved with trailing blanks stripped, so rows shorter than `size` are
/// padded with spaces. Nothing else is repaired: overlong rows and missing rows are kept as
/// they are and rejected by classification. Padding only happens when the row count already
/// matches `size`, so a mismatched grid costs no more memory than its input.
pub fn parse_level_text(input: &str, size: usize) -> SymbolGrid {
    let bytes = input.as_bytes();
    let mut lines = Vec::<&str>::new();
    let mut start = 0usize;
    for end in memchr::memchr_iter(b'\n', bytes) {
        lines.push(&input[start..end]);
        start = end + 1;
    }
    if start < input.len() {
        lines.push(&input[start..]);
    }

    // Blank lines past the last row are editor noise, not rows.
    while lines.len() > size
        && lines.last().is_some_and(|line| line.trim_end_matches('\r').is_empty())
    {
        lines.pop();
    }

    let pad = lines.len() == size;
    let rows = lines
        .into_iter()
        .map(|line| {
            let mut row = line.trim_end_matches('\r').chars().collect::<Vec<_>>();
            if pad && row.len() < size {
                row.resize(size, ' ');
            }
            row
        })
        .collect::<Vec<_>>();

    SymbolGrid::new(rows)
}

pub fn read_level_file(path: impl AsRef<Path>, size: usize) -> std::io::Result<SymbolGrid> {
    let raw = std::fs::read_to_string(path)?;
    Ok(parse_level_text(&raw, size))
}
