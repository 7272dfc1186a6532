// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gridroute and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{Coordinate, Direction, TileKind};
use crate::route::{Adjacency, AdjacencyInfo, ClassifiedGrid};

/// Box-drawing glyph for a path tile with the given neighbors. Dead ends draw as the straight
/// piece along their only neighbor.
pub fn path_glyph(info: AdjacencyInfo) -> char {
    let directions = info.directions();
    let has = |direction: Direction| directions.contains(&direction);

    match (has(Direction::Left), has(Direction::Right), has(Direction::Up), has(Direction::Down)) {
        (true, true, true, true) => '┼',
        (true, true, false, true) => '┬',
        (true, true, true, false) => '┴',
        (false, true, true, true) => '├',
        (true, false, true, true) => '┤',
        (false, true, false, true) => '┌',
        (true, false, false, true) => '┐',
        (false, true, true, false) => '└',
        (true, false, true, false) => '┘',
        (false, false, true, _) | (false, false, _, true) => '│',
        (true, _, false, false) | (_, true, false, false) => '─',
        (false, false, false, false) => '·',
    }
}

/// Draws the whole path network: path tiles as connected glyphs, other tiles as their level
/// symbol.
pub fn render_path_network(grid: &ClassifiedGrid, adjacency: &Adjacency) -> String {
    let size = grid.size();
    let mut lines = Vec::<String>::with_capacity(size);

    for row in 0..size {
        let mut line = String::with_capacity(size);
        for column in 0..size {
            let coord = Coordinate::new(column as i32, row as i32);
            let cell = match grid.tile(coord) {
                Some(TileKind::Path) => adjacency.get(coord).map(path_glyph).unwrap_or('X'),
                Some(kind) => kind.symbol(),
                None => ' ',
            };
            line.push(cell);
        }
        lines.push(line.trim_end_matches(' ').to_owned());
    }

    while matches!(lines.last(), Some(line) if line.is_empty()) {
        lines.pop();
    }
    lines.join("\n")
}
