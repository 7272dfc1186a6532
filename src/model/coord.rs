// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gridroute and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A tile position in grid space.
///
/// Coordinates are signed so that spawn points one cell outside the grid (`-1` or `size`)
/// share the same type as in-grid tiles. Ordering is row-major: `row` first, then `column`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    row: i32,
    column: i32,
}

impl Coordinate {
    pub const fn new(column: i32, row: i32) -> Self {
        Self { row, column }
    }

    pub const fn column(&self) -> i32 {
        self.column
    }

    pub const fn row(&self) -> i32 {
        self.row
    }

    pub fn step(self, direction: Direction) -> Self {
        let (dc, dr) = direction.delta();
        Self { row: self.row + dr, column: self.column + dc }
    }

    /// Returns `true` when `other` is exactly one orthogonal step away.
    pub fn is_orthogonal_neighbor(&self, other: &Coordinate) -> bool {
        let dc = self.column.abs_diff(other.column);
        let dr = self.row.abs_diff(other.row);
        (dc == 1 && dr == 0) || (dc == 0 && dr == 1)
    }

    pub fn in_bounds(&self, size: usize) -> bool {
        let size = size as i64;
        let (c, r) = (i64::from(self.column), i64::from(self.row));
        c >= 0 && r >= 0 && c < size && r < size
    }

    /// In-grid tile on the outer ring of a `size`×`size` grid.
    pub fn is_on_boundary(&self, size: usize) -> bool {
        if !self.in_bounds(size) {
            return false;
        }
        let last = size as i32 - 1;
        self.column == 0 || self.row == 0 || self.column == last || self.row == last
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Neighbor scan order used throughout routing. Changing it changes which branch a walk
    /// explores first, so route output depends on it.
    ///
    /// Horizontal neighbors come before vertical ones. This deliberately differs from the
    /// reference game, which preferred neighbors in row-major path-list order (up first), so
    /// routes are not guaranteed to match its routes tile for tile on branching layouts.
    pub const SCAN_ORDER: [Direction; 4] =
        [Direction::Left, Direction::Right, Direction::Up, Direction::Down];

    /// `(d_column, d_row)`; rows grow downward.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
            Self::Up => (0, -1),
            Self::Down => (0, 1),
        }
    }

    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }

    pub(crate) const fn bit(self) -> u8 {
        match self {
            Self::Left => 0b0001,
            Self::Right => 0b0010,
            Self::Up => 0b0100,
            Self::Down => 0b1000,
        }
    }

    /// Direction of a single orthogonal step from `from` to `to`.
    pub fn between(from: Coordinate, to: Coordinate) -> Option<Self> {
        Self::SCAN_ORDER.into_iter().find(|direction| from.step(*direction) == to)
    }
}
