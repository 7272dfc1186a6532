// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gridroute and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{BTreeMap, BTreeSet};

use smallvec::SmallVec;

use super::classify::ClassifiedGrid;
use crate::model::{Coordinate, Direction};

/// Which orthogonal neighbors of a path tile are also path tiles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct AdjacencyInfo {
    mask: u8,
}

impl AdjacencyInfo {
    pub fn has(&self, direction: Direction) -> bool {
        self.mask & direction.bit() != 0
    }

    pub fn count(&self) -> usize {
        self.mask.count_ones() as usize
    }

    /// Present neighbors in scan order.
    ///
    /// Orientation query for renderers picking straight, corner or junction glyphs (see
    /// `render::network`); routing itself only needs [`AdjacencyInfo::count`].
    pub fn directions(&self) -> SmallVec<[Direction; 4]> {
        Direction::SCAN_ORDER.into_iter().filter(|direction| self.has(*direction)).collect()
    }

    pub fn is_fork(&self) -> bool {
        self.count() >= 3
    }

    fn insert(&mut self, direction: Direction) {
        self.mask |= direction.bit();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adjacency {
    info: BTreeMap<Coordinate, AdjacencyInfo>,
    forks: BTreeSet<Coordinate>,
}

impl Adjacency {
    pub fn get(&self, coord: Coordinate) -> Option<AdjacencyInfo> {
        self.info.get(&coord).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, AdjacencyInfo)> + '_ {
        self.info.iter().map(|(coord, info)| (*coord, *info))
    }

    /// Path tiles with three or four path neighbors, row-major.
    pub fn forks(&self) -> &BTreeSet<Coordinate> {
        &self.forks
    }

    pub fn is_fork(&self, coord: Coordinate) -> bool {
        self.forks.contains(&coord)
    }
}

pub fn resolve_adjacency(grid: &ClassifiedGrid) -> Adjacency {
    let mut info = BTreeMap::<Coordinate, AdjacencyInfo>::new();
    let mut forks = BTreeSet::<Coordinate>::new();

    for &coord in grid.paths() {
        let mut adjacency = AdjacencyInfo::default();
        for direction in Direction::SCAN_ORDER {
            // Off-grid neighbors are simply never path tiles.
            if grid.is_path(coord.step(direction)) {
                adjacency.insert(direction);
            }
        }
        if adjacency.is_fork() {
            forks.insert(coord);
        }
        info.insert(coord, adjacency);
    }

    Adjacency { info, forks }
}
