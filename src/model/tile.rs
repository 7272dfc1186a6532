// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gridroute and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use super::coord::Coordinate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TileKind {
    Empty,
    Obstacle,
    Goal,
    Path,
}

impl TileKind {
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            ' ' => Some(Self::Empty),
            'S' => Some(Self::Obstacle),
            'W' => Some(Self::Goal),
            'X' => Some(Self::Path),
            _ => None,
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Self::Empty => ' ',
            Self::Obstacle => 'S',
            Self::Goal => 'W',
            Self::Path => 'X',
        }
    }
}

/// Raw level symbols, one `Vec<char>` per row.
///
/// No shape validation happens here; classification owns the size and symbol checks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolGrid {
    rows: Vec<Vec<char>>,
}

impl SymbolGrid {
    pub fn new(rows: Vec<Vec<char>>) -> Self {
        Self { rows }
    }

    pub fn from_rows<I, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self { rows: rows.into_iter().map(|row| row.as_ref().chars().collect()).collect() }
    }

    pub fn rows(&self) -> &[Vec<char>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn get(&self, coord: Coordinate) -> Option<char> {
        let row = usize::try_from(coord.row()).ok()?;
        let column = usize::try_from(coord.column()).ok()?;
        self.rows.get(row)?.get(column).copied()
    }
}

/// A boundary path tile where a route begins, plus the off-grid cell units spawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryPoint {
    coordinate: Coordinate,
    spawn: Coordinate,
}

impl EntryPoint {
    /// Derives the spawn cell for a boundary tile of a `size`×`size` grid.
    ///
    /// A tile on the left or right edge spawns horizontally outward; otherwise it spawns
    /// vertically. Corner tiles therefore spawn to the side.
    pub fn on_boundary(coordinate: Coordinate, size: usize) -> Option<Self> {
        if !coordinate.is_on_boundary(size) {
            return None;
        }

        let last = size as i32 - 1;
        let (column, row) = (coordinate.column(), coordinate.row());
        let spawn = if column == 0 {
            Coordinate::new(-1, row)
        } else if column == last {
            Coordinate::new(size as i32, row)
        } else if row == 0 {
            Coordinate::new(column, -1)
        } else {
            Coordinate::new(column, size as i32)
        };

        Some(Self { coordinate, spawn })
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub fn spawn(&self) -> Coordinate {
        self.spawn
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{EntryPoint, SymbolGrid, TileKind};
    use crate::model::Coordinate;

    #[rstest]
    #[case(' ', Some(TileKind::Empty))]
    #[case('S', Some(TileKind::Obstacle))]
    #[case('W', Some(TileKind::Goal))]
    #[case('X', Some(TileKind::Path))]
    #[case('x', None)]
    #[case('#', None)]
    fn symbols_map_to_tile_kinds(#[case] symbol: char, #[case] expected: Option<TileKind>) {
        assert_eq!(TileKind::from_symbol(symbol), expected);
        if let Some(kind) = expected {
            assert_eq!(kind.symbol(), symbol);
        }
    }

    #[rstest]
    #[case(Coordinate::new(0, 2), Coordinate::new(-1, 2))]
    #[case(Coordinate::new(4, 2), Coordinate::new(5, 2))]
    #[case(Coordinate::new(2, 0), Coordinate::new(2, -1))]
    #[case(Coordinate::new(2, 4), Coordinate::new(2, 5))]
    #[case(Coordinate::new(0, 0), Coordinate::new(-1, 0))]
    #[case(Coordinate::new(4, 4), Coordinate::new(5, 4))]
    fn spawn_points_extend_outward(#[case] tile: Coordinate, #[case] spawn: Coordinate) {
        let entry = EntryPoint::on_boundary(tile, 5).expect("boundary tile");
        assert_eq!(entry.coordinate(), tile);
        assert_eq!(entry.spawn(), spawn);
        assert!(!entry.spawn().in_bounds(5));
    }

    #[test]
    fn interior_tiles_are_not_entries() {
        assert_eq!(EntryPoint::on_boundary(Coordinate::new(2, 2), 5), None);
    }

    #[test]
    fn symbol_grid_lookup_handles_out_of_range() {
        let grid = SymbolGrid::from_rows(["XW", "S "]);
        assert_eq!(grid.get(Coordinate::new(1, 0)), Some('W'));
        assert_eq!(grid.get(Coordinate::new(0, 1)), Some('S'));
        assert_eq!(grid.get(Coordinate::new(-1, 0)), None);
        assert_eq!(grid.get(Coordinate::new(0, 2)), None);
    }
}
