// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gridroute and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use thiserror::Error;

use crate::model::Coordinate;

/// Which dimension of the symbol grid disagreed with the configured size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridDimension {
    Rows,
    /// Length of the given row (zero-based).
    Row(usize),
}

impl std::fmt::Display for GridDimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rows => f.write_str("row count"),
            Self::Row(row) => write!(f, "length of row {row}"),
        }
    }
}

/// Fatal level-load failures. None of these leave partial routing behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    #[error("grid must be {expected}x{expected}: {dimension} is {found}")]
    GridSize { expected: usize, dimension: GridDimension, found: usize },
    #[error("level must contain exactly one goal `W`, found {found}")]
    GoalCount { found: usize },
    #[error("invalid symbol {symbol:?} at {at}")]
    InvalidSymbol { symbol: char, at: Coordinate },
    #[error("entry point {entry} has no path to the goal")]
    UnreachablePath { entry: Coordinate },
    #[error("route disambiguation stalled after {passes} passes; entry point {unresolved} has no route")]
    ForkExhaustion { unresolved: Coordinate, passes: usize },
    #[error("pixel position of tile {tile} does not fit the projection range")]
    ProjectionOverflow { tile: Coordinate },
}

pub type Result<T> = std::result::Result<T, CompileError>;
