// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gridroute and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{Coordinate, Direction, TileKind};
use crate::route::{ClassifiedGrid, Route};

fn arrow(direction: Direction) -> char {
    match direction {
        Direction::Left => '←',
        Direction::Right => '→',
        Direction::Up => '↑',
        Direction::Down => '↓',
    }
}

/// Draws `route` over the level: route tiles become arrows in travel direction, everything
/// else keeps its level symbol.
pub fn render_route_overlay(grid: &ClassifiedGrid, route: &Route) -> String {
    let size = grid.size();
    let mut cells = vec![vec![' '; size]; size];

    for (row, line) in cells.iter_mut().enumerate() {
        for (column, cell) in line.iter_mut().enumerate() {
            let coord = Coordinate::new(column as i32, row as i32);
            *cell = grid.tile(coord).map(TileKind::symbol).unwrap_or(' ');
        }
    }

    for pair in route.tiles().windows(2) {
        let (from, to) = (pair[0], pair[1]);
        let Some(direction) = Direction::between(from, to) else {
            continue;
        };
        if grid.contains(from) {
            cells[from.row() as usize][from.column() as usize] = arrow(direction);
        }
    }

    let mut lines = cells
        .into_iter()
        .map(|line| line.into_iter().collect::<String>().trim_end_matches(' ').to_owned())
        .collect::<Vec<_>>();
    while matches!(lines.last(), Some(line) if line.is_empty()) {
        lines.pop();
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::render_route_overlay;
    use crate::model::SymbolGrid;
    use crate::route::{classify_tiles, enumerate_routes, resolve_adjacency};

    #[test]
    fn draws_arrows_along_the_route_only() {
        let symbols = SymbolGrid::from_rows([
            "  X    ", "  X    ", "XXX  S ", "  X    ", "  X    ", "  W    ", "       ",
        ]);
        let grid = classify_tiles(&symbols, 7).expect("classify");
        let adjacency = resolve_adjacency(&grid);
        let enumeration = enumerate_routes(&grid, &adjacency, None).expect("enumerate");

        let upper = render_route_overlay(&grid, &enumeration.routes()[0]);
        assert_eq!(upper, "  ↓\n  ↓\nXX↓  S\n  ↓\n  ↓\n  W");

        let left = render_route_overlay(&grid, &enumeration.routes()[1]);
        assert_eq!(left, "  X\n  X\n→→↓  S\n  ↓\n  ↓\n  W");
    }
}
