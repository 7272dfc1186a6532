// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gridroute and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{BTreeSet, VecDeque};

use serde::Serialize;
use tracing::debug;

use super::adjacency::Adjacency;
use super::classify::ClassifiedGrid;
use crate::error::{CompileError, Result};
use crate::model::{Coordinate, Direction, EntryPoint};

/// An entry-to-goal tile sequence. The goal is always the last tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    entry: EntryPoint,
    tiles: Vec<Coordinate>,
}

impl Route {
    pub fn entry(&self) -> EntryPoint {
        self.entry
    }

    pub fn tiles(&self) -> &[Coordinate] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Checks the structural route invariants against `grid`: starts at the entry, ends at the
    /// goal, only orthogonal unit steps, no tile twice, and every non-goal tile is a path tile.
    pub fn is_well_formed(&self, grid: &ClassifiedGrid) -> bool {
        let (Some(first), Some(last)) = (self.tiles.first(), self.tiles.last()) else {
            return false;
        };
        if *first != self.entry.coordinate() || *last != grid.goal() {
            return false;
        }
        if !self.tiles.windows(2).all(|pair| pair[0].is_orthogonal_neighbor(&pair[1])) {
            return false;
        }
        let unique = self.tiles.iter().collect::<BTreeSet<_>>();
        if unique.len() != self.tiles.len() {
            return false;
        }
        self.tiles[..self.tiles.len() - 1].iter().all(|tile| grid.is_path(*tile))
    }
}

/// Result of one enumeration run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enumeration {
    routes: Vec<Route>,
    exclusions: BTreeSet<Coordinate>,
    passes: usize,
}

impl Enumeration {
    /// One route per entry point, in the grid's entry order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn into_routes(self) -> Vec<Route> {
        self.routes
    }

    /// Tiles excluded while disambiguating branches, as left after the final pass.
    pub fn exclusions(&self) -> &BTreeSet<Coordinate> {
        &self.exclusions
    }

    pub fn passes(&self) -> usize {
        self.passes
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WalkEnd {
    /// The cursor reached a boundary tile.
    Boundary,
    /// No admissible neighbor was left before reaching the boundary.
    Stuck,
}

#[derive(Debug)]
struct Walk {
    end: WalkEnd,
    /// Entry-to-goal order, goal not included.
    tiles: Vec<Coordinate>,
}

/// Greedy backward walk from the goal, taking the first admissible neighbor in scan order.
fn walk_from_goal(grid: &ClassifiedGrid, exclusions: &BTreeSet<Coordinate>) -> Walk {
    let goal = grid.goal();
    let mut visited = BTreeSet::<Coordinate>::new();
    let mut tiles = Vec::<Coordinate>::new();
    let mut cursor = goal;

    let end = loop {
        if cursor != goal && cursor.is_on_boundary(grid.size()) {
            break WalkEnd::Boundary;
        }

        let next = Direction::SCAN_ORDER.into_iter().map(|direction| cursor.step(direction)).find(
            |candidate| {
                grid.is_path(*candidate)
                    && !visited.contains(candidate)
                    && !exclusions.contains(candidate)
            },
        );

        match next {
            Some(next) => {
                visited.insert(next);
                tiles.push(next);
                cursor = next;
            }
            None => break WalkEnd::Stuck,
        }
    };

    tiles.reverse();
    Walk { end, tiles }
}

/// Picks the tile to exclude after a walk so the next walk explores a different branch.
///
/// The first fork in entry-to-goal order decides: exclude the tile just before it, or the fork
/// itself when it is the first tile. Without a fork the first tile is excluded: for a finished
/// walk that is its boundary tile, which no other walk can pass through, and for a stuck walk
/// it is the dead-end tip.
fn exclusion_target(walk: &Walk, adjacency: &Adjacency) -> Option<Coordinate> {
    match walk.tiles.iter().position(|tile| adjacency.is_fork(*tile)) {
        Some(fork_idx) if fork_idx > 0 => walk.tiles.get(fork_idx - 1).copied(),
        _ => walk.tiles.first().copied(),
    }
}

/// Every entry must be connected to the goal without passing through another boundary tile,
/// since walks stop at the first boundary tile they reach.
fn check_reachability(grid: &ClassifiedGrid) -> Result<()> {
    let goal = grid.goal();
    let mut reached = BTreeSet::<Coordinate>::new();
    let mut queue = VecDeque::from([goal]);

    while let Some(current) = queue.pop_front() {
        if current != goal && current.is_on_boundary(grid.size()) {
            continue;
        }
        for direction in Direction::SCAN_ORDER {
            let next = current.step(direction);
            if grid.is_path(next) && reached.insert(next) {
                queue.push_back(next);
            }
        }
    }

    match grid.entries().iter().find(|entry| !reached.contains(&entry.coordinate())) {
        Some(entry) => Err(CompileError::UnreachablePath { entry: entry.coordinate() }),
        None => Ok(()),
    }
}

/// Default pass cap: every productive pass resolves an entry or excludes a new path tile.
pub fn default_max_passes(grid: &ClassifiedGrid) -> usize {
    grid.entries().len() + grid.paths().len() + 1
}

/// Computes one route per entry point of `grid`.
///
/// All walk state (visited tiles and exclusions) is local to this call.
pub fn enumerate_routes(
    grid: &ClassifiedGrid,
    adjacency: &Adjacency,
    max_passes: Option<usize>,
) -> Result<Enumeration> {
    check_reachability(grid)?;

    let entries = grid.entries();
    let max_passes = max_passes.unwrap_or_else(|| default_max_passes(grid));
    let mut resolved: Vec<Option<Route>> = vec![None; entries.len()];
    let mut remaining = entries.len();
    let mut exclusions = BTreeSet::<Coordinate>::new();
    let mut passes = 0usize;

    let exhausted = |resolved: &[Option<Route>], passes: usize| {
        let unresolved = entries
            .iter()
            .zip(resolved)
            .find_map(|(entry, route)| route.is_none().then_some(entry.coordinate()))
            .unwrap_or(grid.goal());
        CompileError::ForkExhaustion { unresolved, passes }
    };

    while remaining > 0 {
        if passes >= max_passes {
            return Err(exhausted(&resolved, passes));
        }
        passes += 1;

        let walk = walk_from_goal(grid, &exclusions);
        debug!(pass = passes, end = ?walk.end, tiles = walk.tiles.len(), "walk finished");

        let mut progressed = false;
        if walk.end == WalkEnd::Boundary {
            if let Some(first) = walk.tiles.first().copied() {
                let pending = entries
                    .iter()
                    .zip(resolved.iter())
                    .position(|(entry, route)| entry.coordinate() == first && route.is_none());
                if let Some(idx) = pending {
                    let mut tiles = walk.tiles.clone();
                    tiles.push(grid.goal());
                    resolved[idx] = Some(Route { entry: entries[idx], tiles });
                    remaining -= 1;
                    progressed = true;
                    debug!(pass = passes, entry = %first, remaining, "entry resolved");
                }
            }
        }

        if let Some(excluded) = exclusion_target(&walk, adjacency) {
            if exclusions.insert(excluded) {
                progressed = true;
                debug!(pass = passes, tile = %excluded, "tile excluded");
            }
        }

        if remaining > 0 && !progressed {
            return Err(exhausted(&resolved, passes));
        }
    }

    let routes = resolved.into_iter().flatten().collect::<Vec<_>>();
    Ok(Enumeration { routes, exclusions, passes })
}
