// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gridroute and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;

use crate::error::{CompileError, GridDimension, Result};
use crate::model::{Coordinate, EntryPoint, SymbolGrid, TileKind};

/// A validated `size`×`size` level with typed tiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedGrid {
    size: usize,
    tiles: Vec<TileKind>,
    goal: Coordinate,
    paths: BTreeSet<Coordinate>,
    entries: Vec<EntryPoint>,
}

impl ClassifiedGrid {
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn goal(&self) -> Coordinate {
        self.goal
    }

    /// Path tiles in row-major order.
    pub fn paths(&self) -> &BTreeSet<Coordinate> {
        &self.paths
    }

    /// Boundary path tiles in row-major order.
    pub fn entries(&self) -> &[EntryPoint] {
        &self.entries
    }

    pub fn is_path(&self, coord: Coordinate) -> bool {
        self.paths.contains(&coord)
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        coord.in_bounds(self.size)
    }

    pub fn tile(&self, coord: Coordinate) -> Option<TileKind> {
        if !self.contains(coord) {
            return None;
        }
        let idx = coord.row() as usize * self.size + coord.column() as usize;
        self.tiles.get(idx).copied()
    }
}

/// Classifies every cell of `symbols` as a `size`×`size` level.
///
/// Checks run in a fixed order: grid shape, then symbols in row-major scan order, then the
/// goal count.
pub fn classify_tiles(symbols: &SymbolGrid, size: usize) -> Result<ClassifiedGrid> {
    if symbols.row_count() != size {
        return Err(CompileError::GridSize {
            expected: size,
            dimension: GridDimension::Rows,
            found: symbols.row_count(),
        });
    }
    for (row, cells) in symbols.rows().iter().enumerate() {
        if cells.len() != size {
            return Err(CompileError::GridSize {
                expected: size,
                dimension: GridDimension::Row(row),
                found: cells.len(),
            });
        }
    }

    let mut tiles = Vec::<TileKind>::with_capacity(size * size);
    let mut goals = Vec::<Coordinate>::new();
    let mut paths = BTreeSet::<Coordinate>::new();

    for (row, cells) in symbols.rows().iter().enumerate() {
        for (column, &symbol) in cells.iter().enumerate() {
            let at = Coordinate::new(column as i32, row as i32);
            let kind =
                TileKind::from_symbol(symbol).ok_or(CompileError::InvalidSymbol { symbol, at })?;
            match kind {
                TileKind::Goal => goals.push(at),
                TileKind::Path => {
                    paths.insert(at);
                }
                TileKind::Empty | TileKind::Obstacle => {}
            }
            tiles.push(kind);
        }
    }

    let goal = match goals.as_slice() {
        [goal] => *goal,
        _ => return Err(CompileError::GoalCount { found: goals.len() }),
    };

    let entries = paths
        .iter()
        .filter_map(|coord| EntryPoint::on_boundary(*coord, size))
        .collect::<Vec<_>>();

    Ok(ClassifiedGrid { size, tiles, goal, paths, entries })
}
