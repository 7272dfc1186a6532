// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gridroute and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use gridroute::model::SymbolGrid;
use gridroute::CompiledLevel;

#[derive(Debug, Clone, Copy)]
pub enum Case {
    Level1,
    Level2,
    Comb40,
    Comb80,
}

impl Case {
    pub const ALL: [Case; 4] = [Case::Level1, Case::Level2, Case::Comb40, Case::Comb80];

    pub fn id(self) -> &'static str {
        match self {
            Case::Level1 => "level1",
            Case::Level2 => "level2",
            Case::Comb40 => "comb_40",
            Case::Comb80 => "comb_80",
        }
    }

    pub fn size(self) -> usize {
        match self {
            Case::Level1 | Case::Level2 => 20,
            Case::Comb40 => 40,
            Case::Comb80 => 80,
        }
    }
}

pub fn fixture(case: Case) -> SymbolGrid {
    match case {
        Case::Level1 => parse_fixture(include_str!("../../tests/fixtures/levels/level1.txt")),
        Case::Level2 => parse_fixture(include_str!("../../tests/fixtures/levels/level2.txt")),
        Case::Comb40 | Case::Comb80 => comb(case.size()),
    }
}

fn parse_fixture(text: &str) -> SymbolGrid {
    gridroute::format::parse_level_text(text, 20)
}

/// A vertical trunk from the top edge down to a goal near the bottom, crossed every four rows
/// by a full-width corridor. Every corridor adds two entries and one fork.
fn comb(size: usize) -> SymbolGrid {
    let mid = size / 2;
    let mut rows = vec![vec![' '; size]; size];
    for row in rows.iter_mut().take(size - 2) {
        row[mid] = 'X';
    }
    rows[size - 2][mid] = 'W';
    for row in (3..size - 3).step_by(4) {
        rows[row].fill('X');
    }
    SymbolGrid::new(rows)
}

pub fn checksum_level(level: &CompiledLevel) -> u64 {
    let mut acc = 0u64;
    acc = acc.wrapping_mul(131).wrapping_add(level.passes() as u64);
    for path in level.waypoints() {
        for point in path.points() {
            acc = acc.wrapping_mul(131).wrapping_add(point.x as u64);
            acc = acc.wrapping_mul(131).wrapping_add(point.y as u64);
        }
    }
    acc
}
